pub mod call;
pub mod forward;
pub mod report;
pub mod value;
pub mod wrap;
