//! Error macros for digraph

/// Macro for returning an out-of-range node error
#[macro_export]
macro_rules! bail_out_of_range {
    ($node:expr, $size:expr) => {
        return Err($crate::error::GraphError::out_of_range($node, $size))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
