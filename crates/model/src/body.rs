//! Request body variants.

use serde::{Deserialize, Serialize};

/// Request body in one of the supported encodings.
///
/// The variant is the discriminator. [`Body::mode`] yields the keyword the
/// method block and example blocks use; the block names themselves
/// (`body:form-urlencoded`, `body:multipart-form`) are fixed by the grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Body {
    /// No body.
    #[default]
    None,

    /// Raw JSON content, stored verbatim.
    Json {
        /// The JSON text.
        content: String,
    },

    /// Raw XML content, stored verbatim.
    Xml {
        /// The XML text.
        content: String,
    },

    /// Raw text content.
    Text {
        /// The text.
        content: String,
    },

    /// URL-encoded form data (application/x-www-form-urlencoded).
    FormUrlEncoded {
        /// Form fields in source order.
        fields: Vec<FormField>,
    },

    /// Multipart form data (multipart/form-data).
    MultipartForm {
        /// Form fields in source order.
        fields: Vec<MultipartField>,
    },

    /// GraphQL query body.
    Graphql {
        /// The query document.
        query: String,
        /// The variables payload as JSON text.
        variables: String,
    },
}

impl Body {
    /// Returns the body mode keyword used in the method block.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Json { .. } => "json",
            Self::Xml { .. } => "xml",
            Self::Text { .. } => "text",
            Self::FormUrlEncoded { .. } => "formUrlEncoded",
            Self::MultipartForm { .. } => "multipartForm",
            Self::Graphql { .. } => "graphql",
        }
    }
}

/// One URL-encoded form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Optional description.
    pub description: String,
    /// Whether the field is active.
    pub enabled: bool,
}

/// One multipart form field, either a text value or file references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartField {
    /// Field name.
    pub name: String,
    /// Text value or file paths.
    pub value: MultipartValue,
    /// Optional description.
    pub description: String,
    /// Whether the field is active.
    pub enabled: bool,
}

/// Value of a multipart field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultipartValue {
    /// A plain text value.
    Text(String),
    /// One or more file paths. A source-less file part is an empty list.
    Files(Vec<String>),
}

impl MultipartValue {
    /// True for file-backed fields.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::Files(_))
    }
}
