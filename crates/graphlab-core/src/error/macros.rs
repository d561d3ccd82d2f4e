//! Error macros for graphlab

/// Macro for returning a missing-vertex error
#[macro_export]
macro_rules! bail_not_found {
    ($id:expr) => {
        return Err($crate::error::GraphError::vertex_not_found($id))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}
