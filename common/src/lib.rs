//! # apsentry common
//!
//! Types shared by every crate of the workspace: the access point model produced by
//! the scan parser, the findings produced by the classifier, the run [`config::Config`],
//! error types and the logging macros used for operator-facing output.

pub mod config;
pub mod error;
pub mod finding;
pub mod logging;
pub mod network;
pub mod vendors;

#[doc(hidden)]
pub use tracing as __tracing;
