//! Collecting an open-ended set of positional and named call arguments,
//! binding them against a fixed parameter list, reporting on what arrived,
//! and forwarding the overflow opaquely to downstream operations. A generic
//! wrapper factors shared pre/post logic out of any such operation.

pub mod core;

pub use crate::core::call::{BoundCall, Call, OPTIONAL_DEFAULT};
pub use crate::core::forward::forward_locals;
pub use crate::core::report::Report;
pub use crate::core::value::{CallError, Value};
pub use crate::core::wrap::wrap;
