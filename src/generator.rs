use crate::{
    aggregate, validate, write_output, DefaultResolver, Error, Renderer, RustSyntaxChecker,
    SchemaConfig, SyntaxChecker, TeraRenderer,
};
use std::path::Path;
use tracing::{debug, info};

/// Runs a schema through every stage, in order: validation, defaulting,
/// aggregation, rendering and the syntax check. Nothing is written unless all
/// of them succeed.
#[derive(Debug)]
pub struct Generator {
    resolver: DefaultResolver,
    renderer: Box<dyn Renderer>,
    checker: Box<dyn SyntaxChecker>,
}

impl Generator {
    pub fn new<R>(renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        Self {
            resolver: DefaultResolver::default(),
            renderer: Box::new(renderer),
            checker: Box::new(RustSyntaxChecker),
        }
    }

    /// Generator rendering the template file at `path`
    pub fn from_template<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self::new(TeraRenderer::from_path(path.as_ref()))
    }

    pub fn resolver(mut self, resolver: DefaultResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn checker<C>(mut self, checker: C) -> Self
    where
        C: SyntaxChecker + 'static,
    {
        self.checker = Box::new(checker);
        self
    }

    pub fn generate(&self, mut config: SchemaConfig) -> Result<String, Error> {
        debug!("Parsed schema:\n{:#?}", config);
        validate(&mut config)?;

        let schema = self.resolver.fill_defaults(&config);
        debug!("Defaulted schema:\n{:#?}", schema);

        let package = aggregate(schema);
        debug!("Package context:\n{:#?}", package);

        for table in package.tables.iter() {
            info!("Generating {} ({})", table.struct_name, table.name);
            for col in table.columns.iter() {
                info!("    > {}: {}", col.field, col.rust_type);
            }
        }

        let text = self.renderer.render(&package)?;
        self.checker.check(text)
    }

    /// Read the schema at `input` and write the generated source to `output`
    pub fn generate_file<I, O>(&self, input: I, output: O) -> Result<(), Error>
    where
        I: AsRef<Path>,
        O: AsRef<Path>,
    {
        let config = SchemaConfig::from_path(input)?;
        let text = self.generate(config)?;
        write_output(output, &text)
    }
}

/// Generator rendering the bundled template
impl Default for Generator {
    fn default() -> Self {
        Self::new(TeraRenderer::bundled())
    }
}
