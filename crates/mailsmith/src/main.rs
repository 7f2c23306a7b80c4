#![doc = include_str!("../README.md")]

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::Parser;
use mailsmith::{CompileOptions, Compiler, Document};

/// Compiles a JSON email template into HTML.
#[derive(Debug, Clone, Parser, Default)]
#[clap(name = "mailsmith", version, about)]
pub struct CompileArgs {
    /// Path to the input JSON template
    #[clap(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to output file, or `-` for stdout
    #[clap(value_name = "OUTPUT", default_value = None)]
    pub output: Option<String>,

    /// Loads compile options from a TOML file
    #[clap(long, default_value = None, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overrides the document title
    #[clap(long, default_value = None)]
    pub title: Option<String>,

    /// Overrides the hidden preview text
    #[clap(long, default_value = None)]
    pub preheader: Option<String>,

    /// Writes the plain-text alternative instead of HTML
    #[clap(long)]
    pub text: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_module("mailsmith", log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    // Parse command line arguments
    let args = CompileArgs::parse();
    run(args)
}

fn run(args: CompileArgs) -> anyhow::Result<()> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {path:?}"))?;
            CompileOptions::from_toml_str(&text)
                .with_context(|| format!("failed to load config {path:?}"))?
        }
        None => CompileOptions::default(),
    };
    if let Some(title) = args.title {
        options.shell.title = title.into();
    }
    if let Some(preheader) = args.preheader {
        options.shell.preheader = preheader.into();
    }

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read template {:?}", args.input))?;
    let doc = Document::from_json_str(&input)
        .with_context(|| format!("failed to parse template {:?}", args.input))?;

    let is_stdout = args.output.as_deref() == Some("-");
    let output_path = args.output.map(PathBuf::from).unwrap_or_else(|| {
        Path::new(&args.input).with_extension(if args.text { "txt" } else { "html" })
    });

    let compiler = Compiler::with_options(options);
    let result = if args.text {
        let mut text = compiler.plain_text(&doc);
        text.push('\n');
        text
    } else {
        compiler.compile(&doc)
    };

    if is_stdout {
        std::io::stdout()
            .write_all(result.as_bytes())
            .context("failed to write to stdout")?;
    } else if let Err(err) = std::fs::write(&output_path, result.as_bytes()) {
        bail!("failed to write file {output_path:?}: {err}");
    }

    Ok(())
}
