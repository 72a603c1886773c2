pub mod network_graph;
pub mod path_panel;
pub mod simulation_panel;
