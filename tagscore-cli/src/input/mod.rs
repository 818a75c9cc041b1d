//! Input handling module

pub mod file_reader;
pub mod path_resolver;

pub use file_reader::FileReader;
pub use path_resolver::resolve_path;
