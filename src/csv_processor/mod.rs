pub mod document;
pub mod reader;
pub mod writer;

pub use document::TabularDocument;
pub use reader::parse_document;
pub use writer::write_document;
