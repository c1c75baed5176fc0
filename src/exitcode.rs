//! Process exit codes

/// Successful termination, including an explicit user abort
pub const OK: i32 = 0;

/// Any fatal error: missing path, guard refusal, failed git operation
pub const FAILURE: i32 = 1;

/// Command line usage error (matches clap)
pub const USAGE: i32 = 2;
