//! The collection and its root block.

use serde::{Deserialize, Serialize};

use crate::auth::Auth;
use crate::environment::Environment;
use crate::item::Item;
use crate::request::{Header, Scripts, Vars};

/// Collection- or folder-level metadata, serialized to `collection.bru`
/// and `folder.bru` respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Display name, emitted in the meta block.
    pub name: String,
    /// Documentation text.
    #[serde(default)]
    pub docs: String,
    /// Headers applied to every request underneath.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Authentication applied to every request underneath. Collections
    /// default to [`Auth::None`], folders to [`Auth::Inherit`].
    #[serde(default)]
    pub auth: Auth,
    /// Scripts run around every request underneath.
    #[serde(default)]
    pub script: Scripts,
    /// Test script code.
    #[serde(default)]
    pub tests: String,
    /// Variables; only the pre-request group is serialized at root level.
    #[serde(default)]
    pub vars: Vars,
}

/// A converted collection, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique identifier.
    pub id: String,
    /// Collection name.
    pub name: String,
    /// Target format version.
    pub version: String,
    /// Top-level items in source order.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Attached environments.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Collection-level metadata.
    pub root: Root,
}

impl Collection {
    /// Returns the total number of requests in the collection (recursive).
    #[must_use]
    pub fn request_count(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items.iter().fold(0, |acc, item| {
                acc + match item {
                    Item::Request(_) => 1,
                    Item::Folder(f) => count(&f.items),
                }
            })
        }
        count(&self.items)
    }

    /// Returns the total number of folders in the collection (recursive).
    #[must_use]
    pub fn folder_count(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items.iter().fold(0, |acc, item| {
                acc + match item {
                    Item::Request(_) => 0,
                    Item::Folder(f) => 1 + count(&f.items),
                }
            })
        }
        count(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Folder, RequestItem};
    use pretty_assertions::assert_eq;

    fn request(name: &str) -> Item {
        Item::Request(RequestItem {
            name: name.into(),
            ..RequestItem::default()
        })
    }

    #[test]
    fn test_counts_are_recursive() {
        let mut folder = Folder {
            name: "Users".into(),
            ..Folder::default()
        };
        folder.items.push(request("Get Users"));
        folder.items.push(request("Create User"));

        let collection = Collection {
            name: "Test".into(),
            items: vec![request("Ping"), Item::Folder(folder)],
            ..Collection::default()
        };

        assert_eq!(collection.request_count(), 3);
        assert_eq!(collection.folder_count(), 1);
    }
}
