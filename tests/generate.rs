use pretty_assertions::assert_eq;
use sea_tablegen::{Error, Generator, SchemaConfig, SchemaFormat, ValidationError};
use std::{
    fs,
    path::{Path, PathBuf},
};
use syn::{Fields, Item, ItemStruct, UseTree};

fn schema_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("schemas")
        .join(name)
}

fn generate(name: &str) -> Result<String, Error> {
    Generator::default().generate(SchemaConfig::from_path(schema_path(name))?)
}

fn structs(source: &str) -> Vec<ItemStruct> {
    syn::parse_file(source)
        .unwrap()
        .items
        .into_iter()
        .filter_map(|item| match item {
            Item::Struct(item) => Some(item),
            _ => None,
        })
        .collect()
}

fn find_struct<'a>(structs: &'a [ItemStruct], name: &str) -> &'a ItemStruct {
    structs
        .iter()
        .find(|item| item.ident == name)
        .unwrap_or_else(|| panic!("struct `{name}` not generated"))
}

fn field_names(item: &ItemStruct) -> Vec<String> {
    match &item.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(|field| field.ident.as_ref().unwrap().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_generate_two_tables() -> Result<(), Error> {
    let source = generate("chat.yaml")?;
    let structs = structs(&source);

    assert_eq!(
        structs
            .iter()
            .map(|item| item.ident.to_string())
            .collect::<Vec<_>>(),
        vec![
            "MissingKeyColumn",
            "DbMessagesColumns",
            "DbMessagesTable",
            "DbMessagesPrimaryKey",
            "Message",
            "MessageOpt",
            "DbCommunitiesColumns",
            "DbCommunitiesTable",
            "DbCommunitiesPrimaryKey",
            "Community",
            "CommunityOpt",
            "DbTables",
        ]
    );
    assert_eq!(
        field_names(find_struct(&structs, "Message")),
        vec!["UserId", "MessageId", "Content", "CreatedAt"]
    );
    assert_eq!(
        field_names(find_struct(&structs, "DbMessagesPrimaryKey")),
        vec!["UserId", "MessageId"]
    );
    assert_eq!(
        field_names(find_struct(&structs, "DbCommunitiesColumns")),
        vec!["CommunityId", "VoteCount", "Description", "UpdatedAt"]
    );
    assert_eq!(
        field_names(find_struct(&structs, "DbTables")),
        vec!["Messages", "Communities"]
    );

    assert!(source.starts_with("//! Table definitions of package `chat`."));
    assert!(source.contains(&format!(
        "//! Generated by sea-tablegen {}.",
        env!("CARGO_PKG_VERSION")
    )));
    assert!(source.contains("pub Description: Option<String>,"));
    assert!(source.contains("pub const Tables: DbTables = DbTables {"));

    let chrono = source.find("use chrono::{DateTime, Utc};").unwrap();
    let key = source.find("use google_cloud_spanner::key;").unwrap();
    let fmt = source.find("use std::fmt;").unwrap();
    assert!(chrono < key && key < fmt);
    assert_eq!(source.matches("use chrono::{DateTime, Utc};").count(), 1);

    Ok(())
}

/// Names brought into scope by the `use` items of `source`
fn imported_names(source: &str) -> Vec<String> {
    fn walk(tree: &UseTree, names: &mut Vec<String>) {
        match tree {
            UseTree::Path(path) => walk(&path.tree, names),
            UseTree::Name(name) => names.push(name.ident.to_string()),
            UseTree::Rename(rename) => names.push(rename.rename.to_string()),
            UseTree::Glob(_) => names.push("*".to_owned()),
            UseTree::Group(group) => group.items.iter().for_each(|tree| walk(tree, names)),
        }
    }

    let mut names = Vec::new();
    for item in syn::parse_file(source).unwrap().items {
        if let Item::Use(item) = item {
            walk(&item.tree, &mut names);
        }
    }
    names
}

/// Whitespace free copy of `source`, for matching signatures however they
/// were wrapped
fn squash(source: &str) -> String {
    source.split_whitespace().collect()
}

#[test]
fn test_generate_typed_read_row() -> Result<(), Error> {
    let source = squash(&generate("chat.yaml")?);

    assert!(source.contains("pubasyncfnread_row<R>(&self,reader:&R,key:&DbMessagesPrimaryKey"));
    assert!(source.contains("->Result<Option<Message>,R::Error>"));
    assert!(source.contains("R::Error:From<row::Error>"));
    assert!(source.contains("Some(row)=>Ok(Some(Message::from_row(&row)?)),"));
    assert!(source.contains("->Result<Option<Community>,R::Error>"));

    Ok(())
}

#[test]
fn test_generate_tables_named_like_client_types() -> Result<(), Error> {
    let config = SchemaConfig::parse(
        r#"
tables:
  - name: keys
    columns:
      - name: key_id
        type: { name: String }
    primaryKey: [key_id]
  - name: rows
    columns:
      - name: row_id
        type: { name: i64 }
    primaryKey: [row_id]
  - name: futures
    columns:
      - name: future_id
        type: { name: i64 }
    primaryKey: [future_id]
"#,
        SchemaFormat::Yaml,
    )?;
    let source = Generator::default().generate(config)?;
    let structs = structs(&source);
    let imported = imported_names(&source);

    for name in ["Key", "Row", "Future"] {
        find_struct(&structs, name);
    }
    assert_eq!(imported, vec!["key", "row", "fmt"]);
    for item in structs.iter() {
        assert!(
            !imported.contains(&item.ident.to_string()),
            "struct `{}` clashes with an import",
            item.ident
        );
    }

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<(), Error> {
    assert_eq!(generate("chat.yaml")?, generate("chat.yaml")?);

    Ok(())
}

#[test]
fn test_generate_json_matches_yaml() -> Result<(), Error> {
    assert_eq!(generate("chat.json")?, generate("chat.yaml")?);

    Ok(())
}

#[test]
fn test_generate_overrides() -> Result<(), Error> {
    let source = generate("overrides.yaml")?;
    let structs = structs(&source);

    for name in [
        "AppMembersCols",
        "AppMembersDef",
        "AppMembersKey",
        "Person",
        "PersonOpt",
        "AppNewsCols",
        "AppNewsDef",
        "NewsId",
        "NewsItem",
        "NewsItemOpt",
        "AppTables",
    ] {
        find_struct(&structs, name);
    }
    assert_eq!(field_names(find_struct(&structs, "Person")), vec!["Id", "Type"]);
    assert_eq!(
        field_names(find_struct(&structs, "AppMembersCols")),
        vec!["PersonId", "Type"]
    );
    assert_eq!(
        field_names(find_struct(&structs, "AppNewsCols")),
        vec!["NewsIdColumn"]
    );
    assert_eq!(
        field_names(find_struct(&structs, "AppTables")),
        vec!["Members", "News"]
    );

    assert!(source.starts_with("//! Table definitions of package `social`."));
    assert!(source.contains("id: i64"));
    assert!(source.contains("NewsIdColumn: \"news_id\""));
    assert!(source.contains("pub const Tables: AppTables = AppTables {"));

    Ok(())
}

#[test]
fn test_generate_unknown_primary_key() {
    match generate("unknown_primary_key.yaml") {
        Err(Error::Validation(err)) => {
            assert_eq!(
                err,
                ValidationError::UnknownPrimaryKeyColumn {
                    table: "messages".to_owned(),
                    column: "session_id".to_owned(),
                }
            );
            assert_eq!(
                err.to_string(),
                "primary key of table `messages` expects column named `session_id`, but no column with that name is defined"
            );
        }
        res => panic!("expected a validation error, got {res:?}"),
    }
}

#[test]
fn test_generate_file() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("src").join("tables.rs");

    Generator::default().generate_file(schema_path("chat.yaml"), &output)?;

    assert_eq!(fs::read_to_string(&output)?, generate("chat.yaml")?);
    assert_eq!(fs::read_dir(dir.path().join("src"))?.count(), 1);

    Ok(())
}

#[test]
fn test_generate_file_keeps_existing_output_on_failure() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("tables.rs");
    fs::write(&output, "// previous run\n")?;

    assert!(
        Generator::default()
            .generate_file(schema_path("unknown_primary_key.yaml"), &output)
            .is_err()
    );
    assert_eq!(fs::read_to_string(&output)?, "// previous run\n");

    Ok(())
}

#[test]
fn test_generate_missing_input() {
    assert!(matches!(
        Generator::default().generate_file(schema_path("no_such_schema.yaml"), "-"),
        Err(Error::Io(_))
    ));
}
