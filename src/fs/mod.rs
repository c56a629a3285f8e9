//! Filesystem utilities for simcfg.
//!
//! Project files and exported configurations are always written atomically
//! so a failed or interrupted write never leaves a truncated file behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
