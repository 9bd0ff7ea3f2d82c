//! Error macros for graphcheck

/// Macro for returning a malformed input error from the current function
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::GraphError::malformed($line, format!($($arg)+)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}
