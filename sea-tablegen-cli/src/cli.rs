use clap::Parser;
use sea_tablegen::TEMPLATE_ENV;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Generate typed table access code from a schema document"
)]
pub struct Cli {
    #[clap(action, short = 'v', long, help = "Show debug messages")]
    pub verbose: bool,

    #[clap(
        value_parser,
        short = 't',
        long,
        env = TEMPLATE_ENV,
        help = "Template to render the package with, defaults to the bundled one"
    )]
    pub template: Option<PathBuf>,

    #[clap(value_parser, help = "Schema document, YAML or JSON")]
    pub input: PathBuf,

    #[clap(value_parser, help = "Generated source file, `-` for stdout")]
    pub output: PathBuf,
}
