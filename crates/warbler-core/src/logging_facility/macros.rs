//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use warbler_core::log_op_start;
/// log_op_start!("post_tweet");
/// log_op_start!("post_tweet", user_id = "u123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use warbler_core::log_op_end;
/// log_op_end!("post_tweet", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use warbler_core::{log_op_error, errors::WarblerError};
/// let err = WarblerError::TweetNotFound { tweet_id: "t1".to_string() };
/// log_op_error!("tweet_get", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::WbError;
        let wb_err: WbError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?wb_err.kind(),
            err_code = wb_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::WbError;
        let wb_err: WbError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = warbler_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?wb_err.kind(),
            err_code = wb_err.code(),
            $($field)*
        );
    }};
}
