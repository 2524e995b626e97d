//! TOML-backed handler configuration, for applications that keep logging
//! settings in a config file instead of code.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::Error;
use crate::handler::{Options, RFC3339_MILLI};
use crate::level::Level;

/// Mirrors [`Options`] field-for-field, with every field optional. Absent
/// fields take the same defaults `Options::new()` applies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Level name, case-insensitive ("debug", "info", "warn", "error").
    pub level: Option<String>,
    pub add_source: bool,
    /// Absent means the default format; an explicit empty string disables
    /// the timestamp column.
    pub time_format: Option<String>,
    pub time_in_utc: bool,
    pub time_attr_format: Option<String>,
    pub time_attr_in_utc: bool,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// [`Error::ConfigParse`] when the document is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    /// Converts into handler [`Options`], applying defaults for absent fields.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] when the level string is not a known level name.
    pub fn to_options(&self) -> Result<Options, Error> {
        let level = match &self.level {
            Some(name) => {
                Level::from_str(name).map_err(|_| Error::InvalidLevel(name.clone()))?
            }
            None => Level::Info,
        };

        let time_format = match &self.time_format {
            None => Some(RFC3339_MILLI.to_string()),
            Some(s) if s.is_empty() => None,
            Some(s) => Some(s.clone()),
        };

        let time_attr_format = match &self.time_attr_format {
            Some(s) if !s.is_empty() => s.clone(),
            _ => RFC3339_MILLI.to_string(),
        };

        Ok(Options {
            level,
            add_source: self.add_source,
            time_format,
            time_in_utc: self.time_in_utc,
            time_attr_format,
            time_attr_in_utc: self.time_attr_in_utc,
        })
    }
}
