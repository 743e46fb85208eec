/// Line-oriented catalog loader.
pub mod loader;

pub use loader::{LoadError, load, parse_line, read};
