#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # sea-tablegen
//!
//! Generates strongly typed table access code from a declarative schema
//! document.
//!
//! A run goes through a fixed pipeline:
//!
//! 1. parse the YAML or JSON document into a [`SchemaConfig`]
//! 1. [`validate`] that every primary key names a real column
//! 1. fill every unset naming field with [`DefaultResolver::fill_defaults`]
//! 1. [`aggregate`] the tables into one [`PackageContext`]
//! 1. render it through a [`Renderer`] and hand the text to a [`SyntaxChecker`]
//!
//! A failure at any stage ends the run; output is only written once every
//! stage succeeded.
//!
//! ## A quick taste
//!
//! ```
//! use sea_tablegen::{Generator, SchemaConfig, SchemaFormat};
//!
//! let config = SchemaConfig::parse(
//!     r#"
//! tables:
//!   - name: messages
//!     columns:
//!       - name: user_id
//!         type: { name: String }
//!       - name: content
//!         type: { name: String }
//!     primaryKey: [user_id]
//! "#,
//!     SchemaFormat::Yaml,
//! )?;
//!
//! let source = Generator::default().generate(config)?;
//!
//! assert!(source.contains("pub struct Message {"));
//! assert!(source.contains("pub struct DbMessagesTable {"));
//! # Ok::<(), sea_tablegen::Error>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//! -   Apache License, Version 2.0
//!     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! -   MIT license
//!     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod error;
mod generator;
mod inflector;
mod package;
mod resolver;
pub mod schema;
mod util;
mod validator;
mod writer;

pub use error::*;
pub use generator::*;
pub use inflector::*;
pub use package::*;
pub use resolver::*;
pub use schema::*;
pub use validator::*;
pub use writer::*;
