//! crates/logging/src/tracing_macros.rs
//! Convenience macros for ACL engine tracing.
//!
//! Each macro wraps a standard tracing macro with the target of one
//! [`AclCategory`](crate::AclCategory) and the level its events use.

/// Emit a blob validation trace.
///
/// # Example
/// ```ignore
/// trace_validate!(reason = %kind, "rejecting ACL blob");
/// ```
#[macro_export]
macro_rules! trace_validate {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "acl::validate", $($arg)*);
    };
}

/// Emit a mode reduction trace.
///
/// # Example
/// ```ignore
/// trace_equiv!(?class, "reduced ACL to mode");
/// ```
#[macro_export]
macro_rules! trace_equiv {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "acl::equiv", $($arg)*);
    };
}

/// Emit a masquerade trace.
///
/// # Example
/// ```ignore
/// trace_masq!("applied chmod to ACL");
/// ```
#[macro_export]
macro_rules! trace_masq {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "acl::masq", $($arg)*);
    };
}

/// Emit an access decision trace.
///
/// # Example
/// ```ignore
/// trace_perm!(index, ?decision, "access check decided");
/// ```
#[macro_export]
macro_rules! trace_perm {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "acl::perm", $($arg)*);
    };
}
