// generic pre/post wrapping of any operation with this calling convention
use tracing::debug;

use crate::core::call::Call;
use crate::core::value::CallError;

/// Wrap a target operation with a fixed pre-action and post-action.
///
/// The returned operation has the same calling convention as the target and
/// never inspects or validates the arguments it forwards. The target's
/// return value propagates unchanged; so does its failure, in which case
/// the post-action does not run (unprotected forwarding, not guaranteed
/// cleanup).
pub fn wrap<T, Target, Pre, Post>(
    pre: Pre,
    target: Target,
    post: Post,
) -> impl Fn(&Call) -> Result<T, CallError>
where
    Target: Fn(&Call) -> Result<T, CallError>,
    Pre: Fn(),
    Post: Fn(),
{
    move |call| {
        pre();
        debug!("invoking wrapped target");
        let out = target(call)?;
        post();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::call::BoundCall;
    use crate::core::value::Value;

    #[test]
    fn wrapper_runs_pre_and_post_around_target() {
        let trace: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        let wrapped = wrap(
            || trace.borrow_mut().push("pre"),
            |call: &Call| {
                trace.borrow_mut().push("target");
                BoundCall::bind(call.clone())?.minimum()
            },
            || trace.borrow_mut().push("post"),
        );

        let out = wrapped(&Call::new().arg(4).arg(2)).unwrap();

        assert_eq!(out, Value::Int(2));
        assert_eq!(*trace.borrow(), vec!["pre", "target", "post"]);
    }

    #[test]
    fn wrapper_forwards_arguments_unchanged() {
        let call = Call::new().arg(1).arg(2).arg(3).kwarg("e", 5);

        let direct = BoundCall::bind(call.clone()).unwrap();
        let wrapped = wrap(|| {}, |c: &Call| BoundCall::bind(c.clone()), || {});

        assert_eq!(wrapped(&call).unwrap(), direct);
    }

    #[test]
    fn scenario_failure_propagates_and_skips_post() {
        let trace: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        //target fails to bind: the wrapped call is empty
        let wrapped = wrap(
            || trace.borrow_mut().push("pre"),
            |call: &Call| BoundCall::bind(call.clone()),
            || trace.borrow_mut().push("post"),
        );

        let err = wrapped(&Call::new()).unwrap_err();

        assert!(matches!(err, CallError::MissingRequiredArgument));
        //pre ran, post did not
        assert_eq!(*trace.borrow(), vec!["pre"]);
    }

    #[test]
    fn wrapper_is_reusable_across_calls() {
        let wrapped = wrap(|| {}, |c: &Call| BoundCall::bind(c.clone())?.minimum(), || {});

        assert_eq!(wrapped(&Call::new().arg(9).arg(8)).unwrap(), Value::Int(8));
        assert_eq!(wrapped(&Call::new().arg(1).arg(2)).unwrap(), Value::Int(1));
    }
}
