//! Declarative filter configuration.
//!
//! A [`FilterConfig`] describes a filter tree as data, so pipelines can be loaded from JSON instead
//! of being assembled in code:
//!
//! ```rust
//! use record_filters::config::FilterConfig;
//! use record_filters::filters::Filter;
//! use record_filters::types::Record;
//!
//! # fn main() -> Result<(), record_filters::FilterError> {
//! let config = FilterConfig::from_json_str(
//!     r#"{"type":"chain","filters":[
//!         {"type":"exclude","fields":["ssn"]},
//!         {"type":"replace","map":{"NAME":"name"}}
//!     ]}"#,
//! )?;
//! let filter = config.build()?;
//!
//! let out = filter.filter(&Record::from([("NAME", "Joe"), ("ssn", "123-45-6789")]))?;
//! assert_eq!(out, Record::from([("name", "Joe")]));
//! # Ok(())
//! # }
//! ```
//!
//! Key mutators are arbitrary functions and have no configuration form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::filters::{
    ChainedFilter, ExcludeFieldsFilter, Filter, IncludeFieldsFilter, KeyPrefixFilter,
    KeyReplacementFilter,
};

/// Serializable description of a filter (or a tree of filters).
///
/// Tagged by a `type` field: `include`, `exclude`, `prefix`, `replace` or `chain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// [`IncludeFieldsFilter`] with the listed fields.
    Include {
        #[serde(default)]
        fields: Vec<String>,
    },
    /// [`ExcludeFieldsFilter`] with the listed fields.
    Exclude {
        #[serde(default)]
        fields: Vec<String>,
    },
    /// [`KeyPrefixFilter`] with the given prefix.
    Prefix { prefix: String },
    /// [`KeyReplacementFilter`] with a source -> destination map.
    Replace {
        #[serde(default)]
        map: BTreeMap<String, String>,
    },
    /// [`ChainedFilter`] over nested configurations.
    Chain {
        #[serde(default)]
        filters: Vec<FilterConfig>,
    },
}

impl FilterConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(input: &str) -> FilterResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize this configuration to a JSON string.
    pub fn to_json_string(&self) -> FilterResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the configuration without building it.
    ///
    /// Rejects empty field names and empty replace-map keys/values. Duplicate destinations in a
    /// replace map are allowed; they collapse entries at filter time.
    pub fn validate(&self) -> FilterResult<()> {
        self.validate_at("$")
    }

    fn validate_at(&self, path: &str) -> FilterResult<()> {
        match self {
            Self::Include { fields } | Self::Exclude { fields } => {
                if let Some(i) = fields.iter().position(|f| f.is_empty()) {
                    return Err(config_error(format!("{path}.fields[{i}]: empty field name")));
                }
                Ok(())
            }
            Self::Prefix { .. } => Ok(()),
            Self::Replace { map } => {
                for (from, to) in map {
                    if from.is_empty() {
                        return Err(config_error(format!("{path}.map: empty source key")));
                    }
                    if to.is_empty() {
                        return Err(config_error(format!(
                            "{path}.map['{from}']: empty destination key"
                        )));
                    }
                }
                Ok(())
            }
            Self::Chain { filters } => filters
                .iter()
                .enumerate()
                .try_for_each(|(i, child)| child.validate_at(&format!("{path}.filters[{i}]"))),
        }
    }

    /// Validate and build the described filter.
    pub fn build(&self) -> FilterResult<Box<dyn Filter>> {
        self.validate()?;
        Ok(self.build_unchecked())
    }

    fn build_unchecked(&self) -> Box<dyn Filter> {
        match self {
            Self::Include { fields } => Box::new(IncludeFieldsFilter::new(fields)),
            Self::Exclude { fields } => Box::new(ExcludeFieldsFilter::new(fields)),
            Self::Prefix { prefix } => Box::new(KeyPrefixFilter::new(prefix.as_str())),
            Self::Replace { map } => Box::new(KeyReplacementFilter::new(map)),
            Self::Chain { filters } => {
                let mut chain = ChainedFilter::new();
                for child in filters {
                    chain.add_filter(child.build_unchecked());
                }
                Box::new(chain)
            }
        }
    }
}

fn config_error(message: String) -> FilterError {
    FilterError::Config { message }
}
