// reporting + the minimum downstream computation
use std::fmt;

use tracing::debug;

use crate::core::call::{BoundCall, OPTIONAL_DEFAULT};
use crate::core::value::{CallError, Value};

/// Line-oriented report of one invocation. The caller decides where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl BoundCall {
    /// Minimum over the required value, the optional value and every extra
    /// positional value. Only comparable (numeric) values are considered;
    /// with fewer than two of them there is nothing to compare against.
    pub fn minimum(&self) -> Result<Value, CallError> {
        let mut best: Option<(f64, &Value)> = None;
        let mut comparable = 0usize;

        let candidates = [&self.required, &self.optional]
            .into_iter()
            .chain(self.extra_pos.iter());

        for v in candidates {
            if let Some(n) = v.as_number() {
                comparable += 1;
                match best {
                    //ties keep the earlier value
                    Some((current, _)) if current <= n => {}
                    _ => best = Some((n, v)),
                }
            }
        }

        if comparable < 2 {
            return Err(CallError::InvalidArgumentCount { comparable });
        }

        match best {
            Some((_, v)) => Ok(v.clone()),
            None => Err(CallError::InvalidArgumentCount { comparable }),
        }
    }

    /// Produce the full report for this invocation.
    ///
    /// Lines, in order:
    /// 1) the required value
    /// 2) the effective optional value (default is 10)
    /// 3) positional overflow: count, then one line per member in call-site order
    /// 4) named overflow: count, then one line per entry, sorted by key
    /// 5) the minimum across required, optional and positional overflow
    /// 6) the named overflow rebuilt as a fresh mapping, rendered as JSON
    ///
    /// A failure mid-report replaces the whole report, no partial output
    /// escapes.
    pub fn report(&self) -> Result<Report, CallError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "a is a required argument, and its value is {}",
            self.required
        ));
        lines.push(format!(
            "b is not required; its default value is {OPTIONAL_DEFAULT}; its actual value is {}",
            self.optional
        ));

        lines.push(format!("extra positional values: {}", self.extra_pos.len()));
        for v in &self.extra_pos {
            lines.push(format!("unknown arg: {v}"));
        }

        lines.push(format!("extra named values: {}", self.extra_named.len()));
        for (k, v) in &self.extra_named {
            lines.push(format!("unknown kwarg - key: {k}, value: {v}"));
        }

        let min = self.minimum()?;
        lines.push(format!(
            "minimum of required, optional and extra positional values: {min}"
        ));

        //forward the named overflow without knowing what is in it
        let rendered = serde_json::to_string(&self.rebuild_named())?;
        lines.push(format!("rebuilt named mapping forwards unchanged: {rendered}"));

        debug!(lines = lines.len(), "report built");
        Ok(Report { lines })
    }
}
