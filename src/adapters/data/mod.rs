//! Riddle data sources. Implement RiddleSource for a local JSON file and an HTTP URL.

pub mod file_source;
pub mod http_source;

pub use file_source::FileRiddleSource;
pub use http_source::HttpRiddleSource;
