//! Derivation of every naming field the schema document left unset

use crate::{
    util::escape_rust_keyword, ColumnKey, ColumnSpec, EnglishInflector, Inflector, SchemaConfig,
    TableSpec, TypeReference,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::{collections::HashMap, fmt};
use tracing::debug;

pub const DEFAULT_PACKAGE: &str = "tables";
pub const DEFAULT_IDENTIFIER_PREFIX: &str = "Db";
pub const DEFAULT_TABLE_SUFFIX: &str = "Table";
pub const DEFAULT_COLUMNS_SUFFIX: &str = "Columns";
pub const DEFAULT_PRIMARY_KEY_SUFFIX: &str = "PrimaryKey";

/// Package wide naming settings, every one of them resolved
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamingConvention {
    pub package: String,
    pub identifier_prefix: String,
    pub table_suffix: String,
    pub columns_suffix: String,
    pub primary_key_suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeReference,
    pub nullable: bool,
    /// Type of the row struct field, `Option` wrapped when nullable
    pub rust_type: String,
    pub field: String,
    pub arg: String,
    pub column: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedTable {
    pub name: String,
    pub struct_name: String,
    pub table_var: String,
    pub table_type: String,
    pub columns_type: String,
    pub primary_key_type: String,
    pub columns: Vec<ResolvedColumn>,
    pub primary_key: Vec<ColumnKey>,
    pub(crate) column_indexes: HashMap<ColumnKey, usize>,
}

/// The schema after defaulting. Nothing in here is optional any more.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedSchema {
    pub naming: NamingConvention,
    pub tables: Vec<ResolvedTable>,
}

/// Fills unset naming fields from the table and column names. Explicit values
/// in the document always win; derived values are keyword escaped.
#[derive(Clone, Debug)]
pub struct DefaultResolver {
    inflector: Box<dyn Inflector>,
}

impl Default for DefaultResolver {
    fn default() -> Self {
        Self::new(Box::new(EnglishInflector))
    }
}

impl NamingConvention {
    pub fn from_config(config: &SchemaConfig) -> Self {
        Self {
            package: merge(&config.package, || DEFAULT_PACKAGE.to_owned()),
            identifier_prefix: merge(&config.identifier_prefix, || {
                DEFAULT_IDENTIFIER_PREFIX.to_owned()
            }),
            table_suffix: merge(&config.table_suffix, || DEFAULT_TABLE_SUFFIX.to_owned()),
            columns_suffix: merge(&config.columns_suffix, || DEFAULT_COLUMNS_SUFFIX.to_owned()),
            primary_key_suffix: merge(&config.primary_key_suffix, || {
                DEFAULT_PRIMARY_KEY_SUFFIX.to_owned()
            }),
        }
    }

    /// `prefix + table_var + suffix`
    pub fn compose(&self, table_var: &str, suffix: &str) -> String {
        format!("{}{}{}", self.identifier_prefix, table_var, suffix)
    }
}

impl ResolvedTable {
    pub fn column_index(&self, key: &ColumnKey) -> Option<usize> {
        self.column_indexes.get(key).copied()
    }

    pub fn find_column(&self, key: &ColumnKey) -> Option<&ResolvedColumn> {
        self.column_index(key).map(|i| &self.columns[i])
    }

    pub fn primary_key_columns(&self) -> Vec<&ResolvedColumn> {
        self.primary_key
            .iter()
            .filter_map(|key| self.find_column(key))
            .collect()
    }
}

// The column index is left out: its iteration order changes from run to run.
impl fmt::Debug for ResolvedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTable")
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

impl Serialize for ResolvedTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ResolvedTable", 9)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("struct_name", &self.struct_name)?;
        state.serialize_field("table_var", &self.table_var)?;
        state.serialize_field("table_type", &self.table_type)?;
        state.serialize_field("columns_type", &self.columns_type)?;
        state.serialize_field("primary_key_type", &self.primary_key_type)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("primary_key", &self.primary_key)?;
        state.serialize_field("primary_key_columns", &self.primary_key_columns())?;
        state.end()
    }
}

impl DefaultResolver {
    pub fn new(inflector: Box<dyn Inflector>) -> Self {
        Self { inflector }
    }

    /// Resolve the package settings first, then every table in declaration
    /// order. Expects a validated schema: the primary key lookups of the
    /// result use the column index built by validation.
    pub fn fill_defaults(&self, config: &SchemaConfig) -> ResolvedSchema {
        let naming = NamingConvention::from_config(config);
        debug!("Naming convention: {:?}", naming);
        let tables = config
            .tables
            .iter()
            .map(|table| self.resolve_table(table, &naming))
            .collect();
        ResolvedSchema { naming, tables }
    }

    pub fn resolve_table(&self, table: &TableSpec, naming: &NamingConvention) -> ResolvedTable {
        let inflector = &self.inflector;
        let struct_name = merge(&table.struct_name, || {
            escape_rust_keyword(inflector.to_pascal_case(&inflector.singular(&table.name)))
        });
        // the composed type names below depend on it
        let table_var = merge(&table.table_var, || {
            escape_rust_keyword(inflector.to_pascal_case(&table.name))
        });
        let table_type = merge(&table.table_type, || {
            escape_rust_keyword(naming.compose(&table_var, &naming.table_suffix))
        });
        let columns_type = merge(&table.columns_type, || {
            escape_rust_keyword(naming.compose(&table_var, &naming.columns_suffix))
        });
        let primary_key_type = merge(&table.primary_key_type, || {
            escape_rust_keyword(naming.compose(&table_var, &naming.primary_key_suffix))
        });
        let columns = table
            .columns
            .iter()
            .map(|col| self.resolve_column(col))
            .collect();

        ResolvedTable {
            name: table.name.clone(),
            struct_name,
            table_var,
            table_type,
            columns_type,
            primary_key_type,
            columns,
            primary_key: table.primary_key.clone(),
            column_indexes: table.column_indexes.clone(),
        }
    }

    pub fn resolve_column(&self, col: &ColumnSpec) -> ResolvedColumn {
        let inflector = &self.inflector;
        let field = merge(&col.field, || {
            escape_rust_keyword(inflector.to_pascal_case(&col.name))
        });
        // derived from the resolved field, so a field override carries over
        let arg = merge(&col.arg, || {
            escape_rust_keyword(inflector.to_camel_case(field.trim_start_matches("r#")))
        });
        let column = merge(&col.column, || {
            escape_rust_keyword(inflector.to_pascal_case(&col.name))
        });
        let rust_type = if col.nullable {
            format!("Option<{}>", col.ty.name)
        } else {
            col.ty.name.clone()
        };

        ResolvedColumn {
            name: col.name.clone(),
            ty: col.ty.clone(),
            nullable: col.nullable,
            rust_type,
            field,
            arg,
            column,
        }
    }
}

/// The explicit value if there is one, the computed default otherwise
fn merge<F>(value: &Option<String>, default: F) -> String
where
    F: FnOnce() -> String,
{
    value.clone().unwrap_or_else(default)
}
