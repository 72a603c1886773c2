use log::Level;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

const META_API_BASE: &str = "route-viz:api-base";
const META_EPISODES: &str = "route-viz:episodes";
const META_LOG_LEVEL: &str = "route-viz:log-level";

/// Runtime settings, read from `<meta>` tags in the host page.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
	/// Prefix for `/api/...` calls; empty means same origin.
	pub api_base: String,
	/// Q-learning training episodes sent with path requests. The server
	/// picks its own default when unset.
	pub episodes: Option<u32>,
	/// Console log threshold.
	pub log_level: Level,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			episodes: None,
			log_level: Level::Info,
		}
	}
}

impl ClientConfig {
	/// Read overrides from the current document, falling back to defaults.
	pub fn from_document() -> Self {
		Self::from_lookup(meta_content)
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		Self {
			api_base: lookup(META_API_BASE).unwrap_or(defaults.api_base),
			episodes: lookup(META_EPISODES)
				.and_then(|v| v.trim().parse().ok())
				.filter(|&n: &u32| n > 0),
			log_level: lookup(META_LOG_LEVEL)
				.and_then(|v| v.trim().parse().ok())
				.unwrap_or(defaults.log_level),
		}
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let meta = document
		.query_selector(&format!("meta[name=\"{name}\"]"))
		.ok()??
		.dyn_into::<HtmlMetaElement>()
		.ok()?;
	Some(meta.content())
}
