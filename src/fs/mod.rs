//! Filesystem utilities for bdm.
//!
//! Downloads from the document service are written atomically so a failed or
//! interrupted transfer never leaves a truncated archive behind.

pub mod atomic;
mod download;

pub use atomic::atomic_write;
pub use download::{read_bytes, read_input, save_download};
