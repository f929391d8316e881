//! Request body types

use serde_json::Value;

/// A single multipart form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// In-memory binary field, e.g. an image picked by the host app.
    Bytes {
        /// Field name.
        name: String,
        /// Filename reported to the server.
        filename: String,
        /// Raw content.
        content: Vec<u8>,
        /// MIME type; guessed from the filename when absent.
        mime: Option<String>,
    },
    /// Field backed by a file on disk, read by the transport.
    File {
        /// Field name.
        name: String,
        /// Path to the file.
        path: String,
    },
}

/// A multipart form payload.
///
/// The transport serializes this as `multipart/form-data` and supplies the
/// content type with the boundary itself; the gateway strips any explicit
/// content-type header for requests carrying one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<FormField>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Appends an in-memory binary field.
    #[must_use]
    pub fn bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content: Vec<u8>,
        mime: Option<String>,
    ) -> Self {
        self.fields.push(FormField::Bytes {
            name: name.into(),
            filename: filename.into(),
            content,
            mime,
        });
        self
    }

    /// Appends a field read from a file at send time.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            path: path.into(),
        });
        self
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns true if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// HTTP request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    None,
    /// JSON payload, serialized by the transport.
    Json(Value),
    /// Multipart form data.
    Form(FormData),
}

impl RequestBody {
    /// Returns true for multipart bodies.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Form(_))
    }

    /// Returns the content type this body implies, if it dictates one.
    ///
    /// Multipart bodies return `None`: the transport must set the content
    /// type itself so the boundary string is correct.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            Self::None | Self::Form(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body_content_type() {
        let body = RequestBody::Json(serde_json::json!({"key": "value"}));
        assert_eq!(body.content_type(), Some("application/json"));
        assert!(!body.is_multipart());
    }

    #[test]
    fn test_form_body_has_no_content_type() {
        let body = RequestBody::Form(FormData::new().text("prompt", "a cat"));
        assert_eq!(body.content_type(), None);
        assert!(body.is_multipart());
    }

    #[test]
    fn test_form_fields_keep_order() {
        let form = FormData::new()
            .text("effectScene", "sparkle")
            .bytes("image", "photo.png", vec![1, 2, 3], None);
        assert_eq!(form.fields().len(), 2);
        assert!(matches!(form.fields()[0], FormField::Text { .. }));
        assert!(matches!(form.fields()[1], FormField::Bytes { .. }));
    }
}
