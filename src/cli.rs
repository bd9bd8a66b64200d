//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: data-driven source file generator", long_about = None)]
pub struct Args {
    /// Path to the JSON data document; may contain // and /* */ comments
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Named variable made available to templates, repeatable
    #[arg(short = 'd', long = "define", value_name = "NAME=VALUE")]
    pub define: Vec<String>,

    /// Pipe generated source files through an external rustfmt process
    /// instead of the in-process formatter
    #[arg(long)]
    pub rustfmt: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path specs to generate, either 'input.tmpl' or 'input=output'
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<String>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
