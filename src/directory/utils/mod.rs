mod cleaning;
mod file_operations;

pub use cleaning::clean_destination;
pub use file_operations::copy_static_dir;
