pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, FetchConfig, UiConfig, DEFAULT_ENDPOINT};
