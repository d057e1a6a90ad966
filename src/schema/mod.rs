//! The schema document as it was written: tables, columns and the optional
//! naming overrides that the resolver fills in later.

mod column;
mod table;

pub use column::*;
pub use table::*;

use crate::Error;
use serde::Deserialize;
use std::{fs, path::Path};

/// The whole schema document
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchemaConfig {
    /// Name of the generated package, used in the header of the output
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub identifier_prefix: Option<String>,
    #[serde(default)]
    pub table_suffix: Option<String>,
    #[serde(default)]
    pub columns_suffix: Option<String>,
    #[serde(default)]
    pub primary_key_suffix: Option<String>,
    /// Reserved. Accepted so that existing documents still parse strictly.
    #[serde(default)]
    pub type_definitions: Vec<serde_json::Value>,
    pub tables: Vec<TableSpec>,
}

/// Serialization format of a schema document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    /// Pick the format from the file extension; anything that is not `.json`
    /// is read as YAML.
    pub fn from_path<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl SchemaConfig {
    pub fn parse(content: &str, format: SchemaFormat) -> Result<Self, Error> {
        let config = match format {
            SchemaFormat::Yaml => serde_yaml::from_str(content)?,
            SchemaFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    pub fn from_path<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content, SchemaFormat::from_path(path))
    }

    pub fn table(mut self, table: TableSpec) -> Self {
        self.tables.push(table);
        self
    }
}
