mod component;
mod handle;
mod render;
mod state;

pub use component::NetworkGraphCanvas;
pub use handle::GraphHandle;
