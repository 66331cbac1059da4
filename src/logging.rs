//! Logging facade.
//!
//! Every diagnostic the router emits goes through the macros below, which
//! forward to [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! depending on the enabled feature. Enable at most one of them.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! What is logged where:
//!
//! - `error_log!`: dynamic route installation failed, router error channel.
//! - `warn_log!`: ambiguous view modules, unresolved components.
//! - `info_log!`: route registration, installation summary.
//! - `debug_log!` / `trace_log!`: guard decisions and redirects.
//!
//! ```ignore
//! use gpui_admin_router::{warn_log, debug_log};
//!
//! warn_log!("View '{}' matches {} modules", id, keys.len());
//! debug_log!("Guard redirecting '{}' -> '{}'", from, to);
//! ```

/// Emit a **trace**-level message through the active backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message through the active backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level message through the active backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level message through the active backend.
///
/// Used for recoverable configuration problems, such as two view files
/// sharing one component identifier.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level message through the active backend.
///
/// Router errors are logged here instead of being propagated to callers.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
