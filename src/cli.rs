use crate::{
    attribute::Attribute, document::Document, element::Element, error::Result,
    formatter::FormatConfig, kinds,
};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "markup-tree",
    version,
    about = "Build a sample element tree and print it as markup"
)]
pub struct Args {
    /// Emit everything on one line
    #[arg(long)]
    pub compact: bool,
    /// Leave attribute values unquoted
    #[arg(long)]
    pub no_quote: bool,
    /// Print the document root with the sample tree attached
    #[arg(long)]
    pub document: bool,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            pretty: !self.compact,
            quote_attributes: !self.no_quote,
            ..FormatConfig::default()
        }
    }
}

/// Builds the sample tree: an `html` root carrying id/class attributes with
/// three `blah` children, the first of which has a nested `blah`.
pub fn sample_tree() -> Result<Element> {
    let attributes = || [Attribute::id("id-data"), Attribute::class("class-data")];

    let first = Element::with_contents(27, "blah", attributes(), [Element::new(28, "blah")])?;

    Element::with_contents(
        kinds::HTML,
        "html",
        attributes(),
        [first, Element::new(28, "blah"), Element::new(29, "blah")],
    )
}

/// Renders the sample according to `args`
pub fn render(args: &Args) -> Result<String> {
    let config = args.format_config();
    let tree = sample_tree()?;

    if args.document {
        let mut document = Document::new();
        document.add_child(tree)?;
        info!("rendering document root");
        Ok(document.root().serialize_with(&config))
    } else {
        info!("rendering sample tree");
        Ok(tree.serialize_with(&config))
    }
}

/// Writes `contents` to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(contents.as_bytes())?;
            info!(path = %path.display(), "output written");
            Ok(())
        }
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}
