/// Standard Unix exit codes for the linkboard CLI application.
///
/// These codes follow the BSD convention where possible and provide
/// meaningful feedback about the type of error that occurred.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, missing required parameters, etc.
pub const USAGE: i32 = 64;
