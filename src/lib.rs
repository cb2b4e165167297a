pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod render;
pub mod verify;

pub use error::VerifyError;
pub use process::{lookup::Lookup, table::Table};
pub use verify::{Outcome, ResultSink, Verifier};
