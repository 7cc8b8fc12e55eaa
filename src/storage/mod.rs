//! Storage layer for Rentboard
//!
//! Reads the dataset document, writes settings atomically, and seeds a fresh
//! installation with the bundled sample.

pub mod dataset;
pub mod file_io;
pub mod init;

pub use dataset::load_dataset;
pub use file_io::{read_json_required, write_json_atomic};
pub use init::{initialize_storage, needs_initialization, sample_dataset};
