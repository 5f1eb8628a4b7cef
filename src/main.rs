use clap::Parser;
use markup_tree::cli::{render, write_output, Args};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let contents = render(&args)?;
    write_output(args.output.as_deref(), &contents)?;

    Ok(())
}
