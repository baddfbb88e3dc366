//! Postbru Lang - `.bru` text generation
//!
//! Pure serializers from the model tree to block-structured `.bru` text:
//! request files, `collection.bru`/`folder.bru` roots, nested examples and
//! environment files. Emission is deterministic; the same node always
//! yields the same bytes.

mod blocks;
pub mod environment;
pub mod example;
pub mod request;
pub mod root;
pub mod text;

pub use environment::environment_to_bru;
pub use example::example_to_bru;
pub use request::request_to_bru;
pub use root::{collection_to_bru, folder_to_bru};
