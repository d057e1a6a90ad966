use crate::{Error, PackageContext};
use std::{
    error::Error as StdError,
    fmt::Debug,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tera::{Context, Tera};

/// Environment variable that points the CLI at a different template
pub const TEMPLATE_ENV: &str = "SEA_TABLEGEN_TEMPLATE";

pub const TEMPLATE_NAME: &str = "tables.rs.tera";

/// Template shipped with this crate, compiled in so an installed binary does
/// not depend on the source tree
pub const BUNDLED_TEMPLATE: &str = include_str!("../templates/tables.rs.tera");

/// Turns a package context into source text
pub trait Renderer: Debug {
    fn render(&self, package: &PackageContext) -> Result<String, Error>;
}

/// Decides whether rendered text is acceptable output, and returns it in the
/// form that should be written.
pub trait SyntaxChecker: Debug {
    fn check(&self, text: String) -> Result<String, Error>;
}

#[derive(Clone, Debug)]
enum TemplateSource {
    File(PathBuf),
    Raw(String),
}

/// Renders through a single `tera` template. The template is read on every
/// render so that a missing file is reported together with the context.
#[derive(Clone, Debug)]
pub struct TeraRenderer {
    source: TemplateSource,
}

/// Parses the text as a Rust file and pretty prints it
#[derive(Clone, Copy, Debug, Default)]
pub struct RustSyntaxChecker;

impl TeraRenderer {
    pub fn from_path<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            source: TemplateSource::File(path.into()),
        }
    }

    pub fn from_raw<T>(template: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            source: TemplateSource::Raw(template.into()),
        }
    }

    /// Renderer for [`BUNDLED_TEMPLATE`]
    pub fn bundled() -> Self {
        Self::from_raw(BUNDLED_TEMPLATE)
    }

    fn load(&self) -> tera::Result<Tera> {
        let mut tera = Tera::default();
        match &self.source {
            TemplateSource::File(path) => tera.add_template_file(path, Some(TEMPLATE_NAME))?,
            TemplateSource::Raw(content) => tera.add_raw_template(TEMPLATE_NAME, content)?,
        }
        Ok(tera)
    }

    fn try_render(&self, package: &PackageContext) -> tera::Result<String> {
        let tera = self.load()?;
        let mut context = Context::from_serialize(package)?;
        context.insert(
            "generator",
            &format!("sea-tablegen {}", env!("CARGO_PKG_VERSION")),
        );
        tera.render(TEMPLATE_NAME, &context)
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, package: &PackageContext) -> Result<String, Error> {
        self.try_render(package).map_err(|err| Error::Template {
            message: error_chain(&err),
            context: format!("{package:#?}"),
        })
    }
}

impl SyntaxChecker for RustSyntaxChecker {
    fn check(&self, text: String) -> Result<String, Error> {
        match syn::parse_file(&text) {
            Ok(file) => Ok(prettyplease::unparse(&file)),
            Err(err) => Err(Error::GeneratedSyntax {
                message: err.to_string(),
                text,
            }),
        }
    }
}

/// Output path that stands for standard output
pub const STDOUT_PATH: &str = "-";

/// Write `content` to `path` through a scratch file in the same directory, so
/// the destination is only ever replaced by a complete file. [`STDOUT_PATH`]
/// writes to standard output instead.
pub fn write_output<P>(path: P, content: &str) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path == Path::new(STDOUT_PATH) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Tera nests the useful part of an error a few sources deep
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
