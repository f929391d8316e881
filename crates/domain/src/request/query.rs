//! Query parameter handling

/// An ordered collection of query parameters.
///
/// Values are optional: a parameter whose value is absent is omitted from
/// the serialized query string entirely, so callers can thread optional
/// filters through without building the collection conditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    items: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a parameter with a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.items.push((key.into(), Some(value.to_string())));
        self
    }

    /// Adds a parameter whose value may be absent.
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        self.items.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Adds a parameter in place.
    pub fn add(&mut self, key: impl Into<String>, value: impl ToString) {
        self.items.push((key.into(), Some(value.to_string())));
    }

    /// Returns true if serialization would produce an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|(_, value)| value.is_none())
    }

    /// Serializes the present parameters as a percent-encoded query string,
    /// without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.items {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.to_string())))
                .collect(),
        }
    }
}
