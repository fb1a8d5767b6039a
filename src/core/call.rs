// call sites + binding against the fixed parameter list
use std::collections::BTreeMap;

use tracing::debug;

use crate::core::value::{CallError, Value};

/// Default for the optional slot when a call supplies nothing for it.
pub const OPTIONAL_DEFAULT: i64 = 10;

/// What a call site supplies: an ordered sequence of positional values plus
/// a key-unique mapping of named values. Built up with [`Call::arg`] and
/// [`Call::kwarg`], then handed to [`BoundCall::bind`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Call {
    pub positional: Vec<Value>,
    pub named: BTreeMap<String, Value>,
}

impl Call {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, v: impl Into<Value>) -> Self {
        self.positional.push(v.into());
        self
    }

    pub fn kwarg(mut self, key: impl Into<String>, v: impl Into<Value>) -> Self {
        self.named.insert(key.into(), v.into());
        self
    }
}

/// The bound view of one invocation, scoped to that invocation only.
///
/// `extra_named` is a BTreeMap so the named overflow always iterates sorted
/// by key, keeping report output reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundCall {
    pub required: Value,
    pub optional: Value,
    pub extra_pos: Vec<Value>,
    pub extra_named: BTreeMap<String, Value>,
}

impl BoundCall {
    /// Bind a call against the fixed parameter list (a, b=10, extras).
    ///
    /// 1) required <- first positional value, else named "a"
    /// 2) optional <- second positional value, else named "b", else 10
    ///    (a second positional value consumes the optional slot before a
    ///    named "b" gets a chance)
    /// 3) leftover positional values -> extra_pos, call-site order
    /// 4) leftover named values -> extra_named
    pub fn bind(call: Call) -> Result<Self, CallError> {
        let mut positional = call.positional.into_iter();
        let mut named = call.named;

        let required = match positional.next() {
            Some(v) => v,
            None => named.remove("a").ok_or(CallError::MissingRequiredArgument)?,
        };

        let optional = match positional.next() {
            Some(v) => v,
            None => named.remove("b").unwrap_or(Value::Int(OPTIONAL_DEFAULT)),
        };

        let bound = BoundCall {
            required,
            optional,
            extra_pos: positional.collect(),
            extra_named: named,
        };

        debug!(
            extra_pos = bound.extra_pos.len(),
            extra_named = bound.extra_named.len(),
            "bound call"
        );

        Ok(bound)
    }

    /// Rebuild the named overflow as a fresh, equal mapping.
    ///
    /// A downstream operation that itself accepts a named mapping can take
    /// this without knowing a single key in it.
    pub fn rebuild_named(&self) -> BTreeMap<String, Value> {
        self.extra_named
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
