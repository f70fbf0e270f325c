//! Domain errors

mod param_error;

pub use param_error::ParamError;
