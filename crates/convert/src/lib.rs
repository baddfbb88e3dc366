//! Postbru Convert - Postman to Bruno conversion
//!
//! This crate reads Postman Collection v2.0/v2.1 exports and Postman
//! environment exports (as parsed JSON) and produces the in-memory Bruno
//! model from `postbru-model`. It covers the item tree walk, URL assembly,
//! auth and body normalization, script translation and environment mapping.

pub mod auth;
pub mod body;
pub mod collection;
pub mod environment;
pub mod environment_types;
pub mod error;
pub mod script;
pub mod types;
pub mod url;

pub use collection::postman_to_bruno;
pub use environment::postman_env_to_bruno_env;
pub use environment_types::PostmanEnvironment;
pub use error::{ConvertError, ConvertResult};
pub use script::translate;
pub use types::PostmanCollection;
pub use url::construct_url;
