// indirect invocation: synthesize the named mapping from local bindings
use tracing::debug;

use crate::core::call::{BoundCall, Call};
use crate::core::report::Report;
use crate::core::value::{CallError, Value};

/// Dispatch with only the required value, forwarding a fixed set of local
/// bindings as the named overflow instead of an explicit literal mapping.
///
/// The positional overflow is always empty here, the optional slot keeps
/// its default, and the named overflow carries exactly the four local
/// names below with their current values.
pub fn forward_locals(required: impl Into<Value>) -> Result<Report, CallError> {
    let (c, d, e, f) = (3, 4, 5, 6);

    let call = Call::new()
        .arg(required)
        .kwarg("c", c)
        .kwarg("d", d)
        .kwarg("e", e)
        .kwarg("f", f);

    debug!("forwarding local bindings as named overflow");
    BoundCall::bind(call)?.report()
}
