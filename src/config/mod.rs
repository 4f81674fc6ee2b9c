mod defaults;
mod git;
mod loader;
mod types;
mod validation;

pub use loader::{load_config, ConfigOverrides};
pub use types::Config;
