//! Postbru Model - Bruno collection types
//!
//! This crate defines the in-memory model of a Bruno collection: the tree
//! the converters produce and the `.bru` emitters consume. All types here
//! are pure Rust with no I/O dependencies.

pub mod auth;
pub mod body;
pub mod collection;
pub mod environment;
pub mod example;
pub mod id;
pub mod item;
pub mod request;

pub use auth::{ApiKeyPlacement, Auth};
pub use body::{Body, FormField, MultipartField, MultipartValue};
pub use collection::{Collection, Root};
pub use environment::{Environment, EnvironmentVariable};
pub use example::{Example, ExampleBody, ExampleRequest, ExampleResponse};
pub use id::{IdProvider, SequentialIds, UuidIds};
pub use item::{Folder, Item, RequestItem};
pub use request::{Assertion, Header, Param, ParamKind, Scripts, Settings, Var, Vars};
