//! Construction parameters for token filters.
//!
//! [`FilterParams`] is the raw, unvalidated name/value mapping handed to a
//! filter factory. It can be checked against an allow-list up front
//! ([`FilterParams::ensure_known`]) or consumed parameter by parameter, in
//! which case [`FilterParams::finish`] rejects whatever was not taken.
//! Either way every unrecognized name is reported, not just the first one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Named string parameters supplied when building a token filter.
///
/// # Examples
///
/// ```
/// use plurales::analysis::factory::FilterParams;
///
/// let params = FilterParams::new().with("bogusArg", "bogusValue");
/// let err = params.ensure_known("SpanishPluralStem", &[]).unwrap_err();
/// assert!(err.to_string().contains("Unknown parameters"));
/// assert_eq!(err.names, vec!["bogusArg"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterParams {
    values: BTreeMap<String, String>,
}

impl FilterParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        FilterParams::default()
    }

    /// Add a parameter, builder style.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a parameter, returning the previous value for that name.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Get a parameter value without consuming it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Consume a parameter the caller recognizes.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Parameter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reject every parameter whose name is not in `allow_list`.
    pub fn ensure_known(&self, filter: &str, allow_list: &[&str]) -> Result<(), ConfigurationError> {
        let unknown: Vec<&str> = self
            .names()
            .filter(|name| !allow_list.contains(name))
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::unknown_parameters(filter, unknown))
        }
    }

    /// Reject whatever parameters were not consumed with [`FilterParams::take`].
    pub fn finish(self, filter: &str) -> Result<(), ConfigurationError> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::unknown_parameters(
                filter,
                self.values.into_keys(),
            ))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FilterParams {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for FilterParams {
    fn from(values: BTreeMap<String, String>) -> Self {
        FilterParams { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_are_accepted() {
        let params = FilterParams::new();
        assert!(params.is_empty());
        assert!(params.ensure_known("SpanishPluralStem", &[]).is_ok());
        assert!(params.finish("SpanishPluralStem").is_ok());
    }

    #[test]
    fn test_ensure_known_lists_every_unknown_name() {
        let params: FilterParams = [("zeta", "1"), ("keep", "2"), ("alpha", "3")]
            .into_iter()
            .collect();

        let err = params.ensure_known("Demo", &["keep"]).unwrap_err();
        assert_eq!(err.filter, "Demo");
        assert_eq!(err.names, vec!["alpha", "zeta"]);
        assert!(err.to_string().contains("Unknown parameters"));
        assert!(err.to_string().contains("alpha, zeta"));
    }

    #[test]
    fn test_take_then_finish() {
        let mut params = FilterParams::new().with("used", "yes").with("bogusArg", "bogusValue");
        assert_eq!(params.get("used"), Some("yes"));
        assert_eq!(params.take("used").as_deref(), Some("yes"));
        assert_eq!(params.take("used"), None);
        assert_eq!(params.len(), 1);

        let err = params.finish("Demo").unwrap_err();
        assert_eq!(err.names, vec!["bogusArg"]);
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut params = FilterParams::new();
        assert_eq!(params.insert("a", "1"), None);
        assert_eq!(params.insert("a", "2").as_deref(), Some("1"));
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_serde_transparent() {
        let params: FilterParams = serde_json::from_str(r#"{"bogusArg":"bogusValue"}"#).unwrap();
        assert_eq!(params.get("bogusArg"), Some("bogusValue"));
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"bogusArg":"bogusValue"}"#
        );
    }
}
