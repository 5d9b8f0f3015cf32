pub mod errors;
pub mod naming;
pub mod reader;
pub mod scan;

pub use errors::ArchiveError;
pub use naming::{date_key, source_name};
pub use reader::{Document, read_document};
pub use scan::{ArchiveEntry, scan};
