//! Logging macros with fixed targets, recognised by the terminal formatter.

/// Target used for positive results (e.g. a host answered).
pub const SUCCESS_TARGET: &str = "sweepr::success";

/// Target used for raw, undecorated terminal output.
pub const PRINT_TARGET: &str = "sweepr::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::success", $($arg)*)
    };
}
