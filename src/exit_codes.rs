//! Exit code constants for the bdm CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid form state, declined confirmation)
//! - 2: Validation failure (missing fields, invalid JSON context)
//! - 3: Remote service failure (HTTP error, malformed response, auth)
//! - 4: I/O failure (reading inputs, writing downloads)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an operation not allowed in the current form state.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a required field is missing or local input is malformed.
pub const VALIDATION_FAILURE: i32 = 2;

/// Remote service failure: network error, error status, or malformed response.
pub const SERVICE_FAILURE: i32 = 3;

/// I/O failure: a local file could not be read or written.
pub const IO_FAILURE: i32 = 4;
