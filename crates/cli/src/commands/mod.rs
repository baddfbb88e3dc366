//! CLI subcommand implementations.

pub mod batch;
pub mod convert;
pub mod env;

pub use batch::execute_batch;
pub use convert::execute_convert;
pub use env::execute_env;
