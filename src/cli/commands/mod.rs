//! CLI command implementations
//!
//! Commands return a process exit code: 0 on success, 2 for configuration
//! problems and 5 for fatal runtime errors.

pub mod init;
pub mod serve;
pub mod validate;
