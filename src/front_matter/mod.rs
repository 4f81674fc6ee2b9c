pub mod loader;
pub mod parser;
pub mod types;

pub use loader::load_document;
pub use types::Document;
