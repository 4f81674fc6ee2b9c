mod build;
mod clean;

pub use build::handle_build_command;
pub use clean::handle_clean_command;
