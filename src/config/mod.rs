mod config;
mod platform;

pub use config::{load_config, save_config, BackendConfig, Config};
pub use platform::Platform;
