// demo harness: runs each invocation shape once and prints the reports
use callargs_core::{forward_locals, wrap, BoundCall, Call, CallError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CallError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    //explicit overflow in both positions: (1, 2, 3, 4, e=5, f=6, g=7)
    let call = Call::new()
        .arg(1)
        .arg(2)
        .arg(3)
        .arg(4)
        .kwarg("e", 5)
        .kwarg("f", 6)
        .kwarg("g", 7);
    print!("{}", BoundCall::bind(call)?.report()?);
    println!();

    //named overflow synthesized from local bindings, required value only
    print!("{}", forward_locals(100)?);
    println!();

    //shared pre/post logic factored out of the differentiating operation
    let wrapped = wrap(
        || println!("preprocess"),
        |call: &Call| {
            let report = BoundCall::bind(call.clone())?.report()?;
            print!("{report}");
            Ok(())
        },
        || println!("postprocess"),
    );
    wrapped(&Call::new().arg(1).kwarg("e", 5))?;

    Ok(())
}
