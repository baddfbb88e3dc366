//! Postbru - Postman to Bruno converter CLI
//!
//! The collaborator layer around the conversion core: argument parsing,
//! file reading, batch orchestration and the on-disk collection writer.
//! The conversion itself lives in `postbru-convert` and `postbru-lang`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod writer;

pub use error::{CliError, Result};
