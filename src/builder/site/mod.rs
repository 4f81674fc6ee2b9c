mod builder;
mod index;

pub use builder::build_site;
