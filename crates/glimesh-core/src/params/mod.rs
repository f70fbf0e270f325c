//! Request parameters
//!
//! Operations take a loose bag of named params; each operation checks for the
//! ones it needs before a request is built.

mod param_name;
mod param_set;
mod param_value;

pub use param_name::ParamName;
pub use param_set::Params;
pub use param_value::ParamValue;
