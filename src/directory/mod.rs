pub mod utils;

pub use utils::{clean_destination, copy_static_dir};
