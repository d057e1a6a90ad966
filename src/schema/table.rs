use super::ColumnSpec;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Reference to a column by its schema name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

/// A table as declared in the schema document
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableSpec {
    pub name: String,
    /// Name of the generated row struct
    #[serde(default)]
    pub struct_name: Option<String>,
    /// Field of the table registry that holds this table
    #[serde(default)]
    pub table_var: Option<String>,
    #[serde(default)]
    pub table_type: Option<String>,
    #[serde(default)]
    pub columns_type: Option<String>,
    #[serde(default)]
    pub primary_key_type: Option<String>,
    pub columns: Vec<ColumnSpec>,
    /// Left empty when absent, so validation can report it
    #[serde(default)]
    pub primary_key: Vec<ColumnKey>,
    #[serde(skip)]
    pub(crate) column_indexes: HashMap<ColumnKey, usize>,
}

impl ColumnKey {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSpec")
            .field("name", &self.name)
            .field("struct_name", &self.struct_name)
            .field("table_var", &self.table_var)
            .field("table_type", &self.table_type)
            .field("columns_type", &self.columns_type)
            .field("primary_key_type", &self.primary_key_type)
            .field("columns", &self.columns)
            .field("primary_key", &self.primary_key)
            .finish_non_exhaustive()
    }
}

impl TableSpec {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            struct_name: None,
            table_var: None,
            table_type: None,
            columns_type: None,
            primary_key_type: None,
            columns: Vec::new(),
            primary_key: Vec::new(),
            column_indexes: HashMap::new(),
        }
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ColumnKey>,
    {
        self.primary_key = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Position of the named column. Only answers after the table has been
    /// validated, since the index is built there.
    pub fn column_index(&self, key: &ColumnKey) -> Option<usize> {
        self.column_indexes.get(key).copied()
    }

    pub fn find_column(&self, key: &ColumnKey) -> Option<&ColumnSpec> {
        self.column_index(key).map(|i| &self.columns[i])
    }

    /// Primary key columns in key order
    pub fn primary_key_columns(&self) -> Vec<&ColumnSpec> {
        self.primary_key
            .iter()
            .filter_map(|key| self.find_column(key))
            .collect()
    }
}
