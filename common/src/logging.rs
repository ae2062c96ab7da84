//! Thin wrappers around [`tracing`] so every crate reports progress the same way.
//!
//! The CLI formatter renders events from [`SUCCESS_TARGET`] with a success marker and
//! prints events from [`PRINT_TARGET`] verbatim.

pub const SUCCESS_TARGET: &str = "apsentry::success";
pub const PRINT_TARGET: &str = "apsentry::print";

/// Logs a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "apsentry::success", $($arg)*)
    };
}

