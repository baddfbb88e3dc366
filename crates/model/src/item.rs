//! Collection items: folders and requests.

use serde::{Deserialize, Serialize};

use crate::auth::Auth;
use crate::body::Body;
use crate::collection::Root;
use crate::example::Example;
use crate::request::{Assertion, Header, Param, Scripts, Settings, Vars};

/// A folder containing requests and other folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier.
    pub id: String,
    /// Collision-resolved folder name.
    pub name: String,
    /// 1-based position among the source siblings.
    pub seq: usize,
    /// Items in this folder.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Folder-level metadata, serialized to `folder.bru`.
    pub root: Root,
}

/// A single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Unique identifier.
    pub id: String,
    /// Collision-resolved request name.
    pub name: String,
    /// 1-based position among the source siblings.
    pub seq: usize,
    /// HTTP method, uppercase.
    pub method: String,
    /// Request URL as a single string.
    pub url: String,
    /// Query and path parameters.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Request headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Authentication configuration.
    #[serde(default)]
    pub auth: Auth,
    /// Request body.
    #[serde(default)]
    pub body: Body,
    /// Pre-request and post-response scripts.
    #[serde(default)]
    pub script: Scripts,
    /// Pre-request and post-response variables.
    #[serde(default)]
    pub vars: Vars,
    /// Response assertions.
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    /// Test script code.
    #[serde(default)]
    pub tests: String,
    /// Documentation text.
    #[serde(default)]
    pub docs: String,
    /// Per-request settings.
    #[serde(default)]
    pub settings: Settings,
    /// Saved request/response examples.
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// An item in a collection (either a folder or a request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// A folder containing other items.
    Folder(Folder),
    /// A request.
    Request(RequestItem),
}

impl Item {
    /// Returns the ID of this item.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(f) => &f.id,
            Self::Request(r) => &r.id,
        }
    }

    /// Returns the name of this item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::Request(r) => &r.name,
        }
    }

    /// Returns the 1-based sequence number of this item.
    #[must_use]
    pub const fn seq(&self) -> usize {
        match self {
            Self::Folder(f) => f.seq,
            Self::Request(r) => r.seq,
        }
    }

    /// True for folders.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let folder = Folder {
            id: "f1".into(),
            name: "Users".into(),
            seq: 2,
            ..Folder::default()
        };
        let item = Item::Folder(folder);
        assert_eq!(item.id(), "f1");
        assert_eq!(item.name(), "Users");
        assert_eq!(item.seq(), 2);
        assert!(item.is_folder());
    }

    #[test]
    fn test_request_defaults() {
        let request = RequestItem::default();
        assert_eq!(request.auth, Auth::None);
        assert_eq!(request.body, Body::None);
        assert!(request.settings.encode_url);
    }
}
