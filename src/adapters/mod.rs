// Adapters layer: concrete implementations of the domain ports.

pub mod json_file;

pub use json_file::JsonFileJokes;
