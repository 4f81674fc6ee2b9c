mod collector;
mod model;
mod pipeline;
mod utils;

pub use collector::collect_documents;
pub use model::Page;
pub use pipeline::render_page;
