use crate::{ResolvedSchema, ResolvedTable};
use serde::Serialize;
use std::collections::BTreeSet;

/// Imports every generated file needs, whatever its tables. Only modules are
/// imported so that no table can clash with an imported type name.
pub const SEEDED_IMPORTS: [&str; 3] = [
    "google_cloud_spanner::key",
    "google_cloud_spanner::row",
    "std::fmt",
];

/// Name of the generated constant holding every table definition
pub const TABLES_VAR_NAME: &str = "Tables";

/// Everything the template gets to see
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageContext {
    pub package_name: String,
    /// `use` paths, rendered in sorted order
    pub imports: BTreeSet<String>,
    pub tables: Vec<ResolvedTable>,
    pub tables_var_name: String,
    pub tables_type_name: String,
}

impl PackageContext {
    fn new(package_name: String, tables_type_name: String) -> Self {
        Self {
            package_name,
            imports: SEEDED_IMPORTS.iter().map(|s| s.to_string()).collect(),
            tables: Vec::new(),
            tables_var_name: TABLES_VAR_NAME.to_owned(),
            tables_type_name,
        }
    }

    fn push_table(&mut self, table: ResolvedTable) {
        for col in table.columns.iter() {
            if let Some(package) = &col.ty.package {
                self.imports.insert(package.clone());
            }
        }
        self.tables.push(table);
    }
}

/// Collect the resolved tables, in declaration order, and the imports their
/// column types need into one package.
pub fn aggregate(schema: ResolvedSchema) -> PackageContext {
    let ResolvedSchema { naming, tables } = schema;
    let tables_type_name = naming.compose("", TABLES_VAR_NAME);
    let mut package = PackageContext::new(naming.package, tables_type_name);
    for table in tables {
        package.push_table(table);
    }
    package
}
