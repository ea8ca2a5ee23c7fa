//! Serializable description of a token filter chain.
//!
//! ```json
//! {
//!   "filters": [
//!     { "name": "LowerCase" },
//!     { "name": "SpanishPluralStem", "params": {} }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::factory::FilterParams;
use crate::analysis::factory::filters::SpanishPluralStemFilterFactory;
use crate::error::Result;

/// One filter of a chain: its registered name and construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Registered filter name.
    pub name: String,

    /// Construction parameters, empty when omitted.
    #[serde(default)]
    pub params: FilterParams,
}

impl FilterConfig {
    /// Create a filter entry without parameters.
    pub fn new<S: Into<String>>(name: S) -> Self {
        FilterConfig {
            name: name.into(),
            params: FilterParams::new(),
        }
    }

    /// Add a parameter, builder style.
    pub fn with_param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.params.insert(name, value);
        self
    }
}

/// Ordered list of filters applied after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Filters, applied in order.
    pub filters: Vec<FilterConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filters: vec![FilterConfig::new(SpanishPluralStemFilterFactory::NAME)],
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the configuration as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
