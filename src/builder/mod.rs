pub mod page;
pub mod site;
pub mod types;

pub use site::build_site;
