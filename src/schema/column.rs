use serde::{Deserialize, Serialize};

/// The value type of a column: a Rust type expression plus the `use` path
/// that brings it into scope, if it is not in the prelude.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypeReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

/// A column as declared in the schema document. The naming fields are
/// overrides; unset ones are derived by the [`DefaultResolver`](crate::DefaultResolver).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeReference,
    #[serde(default)]
    pub nullable: bool,
    /// Field of the generated row struct
    #[serde(default)]
    pub field: Option<String>,
    /// Argument name used by generated constructors
    #[serde(default)]
    pub arg: Option<String>,
    /// Field of the generated columns type
    #[serde(default)]
    pub column: Option<String>,
}

impl TypeReference {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            package: None,
        }
    }

    pub fn with_package<T>(mut self, package: T) -> Self
    where
        T: Into<String>,
    {
        self.package = Some(package.into());
        self
    }
}

impl ColumnSpec {
    pub fn new<T>(name: T, ty: TypeReference) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            field: None,
            arg: None,
            column: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
