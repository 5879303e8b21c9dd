//! FILENAME: core/report-builder/src/logging.rs
// PURPOSE: Category-tagged logging macros over the `log` facade.
// CONTEXT: The category becomes the log target, so an application can filter
//          builder output (e.g. "COLUMN=debug,GROUP=warn"). No logger is installed here.

macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, $($arg)*)
    };
}

macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        ::log::info!(target: $cat, $($arg)*)
    };
}

macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        ::log::warn!(target: $cat, $($arg)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_info;
pub(crate) use log_warn;
