//! Exit code constants for the simcfg CLI.
//!
//! - 0: Success (including a cancelled save)
//! - 1: User error (bad args, unreadable or malformed input)
//! - 2: Validation failure (project or config invariants violated)
//! - 3: Persistence failure (the compiled file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or malformed documents.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a project or config invariant does not hold.
pub const VALIDATION_FAILURE: i32 = 2;

/// Persistence failure: the save picker write or the download fallback failed.
pub const PERSIST_FAILURE: i32 = 3;
