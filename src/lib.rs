pub mod archive;
pub mod config;
pub mod extractor;
pub mod index;
pub mod listing;
