use sea_tablegen::{Generator, STDOUT_PATH};
use std::{error::Error, io, path::Path};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::Cli;

fn init_tracing(verbose: bool) -> Result<(), Box<dyn Error>> {
    // stdout may carry the generated code, so logs go to stderr
    if verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .try_init();
    } else {
        let filter_layer = EnvFilter::try_new("sea_tablegen=info")?;
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .without_time()
            .with_writer(io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }
    Ok(())
}

pub fn run_generate_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    let Cli {
        verbose,
        template,
        input,
        output,
    } = cli;
    init_tracing(verbose)?;

    let generator = match template {
        Some(path) => Generator::from_template(path),
        None => Generator::default(),
    };
    generator.generate_file(&input, &output)?;

    if output != Path::new(STDOUT_PATH) {
        println!("Wrote generated code to {}", output.display());
    }
    Ok(())
}
