//! Referential integrity of primary key declarations

use crate::{ColumnKey, SchemaConfig, TableSpec, ValidationError};
use std::collections::HashMap;
use tracing::debug;

/// Validate every table in declaration order, stopping at the first table
/// that fails. On success each table keeps its column index.
pub fn validate(schema: &mut SchemaConfig) -> Result<(), ValidationError> {
    for table in schema.tables.iter_mut() {
        table.validate()?;
    }
    Ok(())
}

impl TableSpec {
    /// Build the column index, then check the primary key against it
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let mut column_indexes = HashMap::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            if column_indexes.insert(ColumnKey::new(col.name.as_str()), i).is_some() {
                return Err(ValidationError::DuplicateColumn {
                    table: self.name.clone(),
                    column: col.name.clone(),
                });
            }
        }

        if self.primary_key.is_empty() {
            return Err(ValidationError::MissingPrimaryKey {
                table: self.name.clone(),
            });
        }

        if let Some(key) = self
            .primary_key
            .iter()
            .find(|key| !column_indexes.contains_key(*key))
        {
            return Err(ValidationError::UnknownPrimaryKeyColumn {
                table: self.name.clone(),
                column: key.to_string(),
            });
        }

        debug!(
            "Validated table `{}`: {} columns, primary key {:?}",
            self.name,
            self.columns.len(),
            self.primary_key
        );
        self.column_indexes = column_indexes;
        Ok(())
    }
}
