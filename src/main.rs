//! stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates data loading,
//! path spec resolution, and the generation pipeline.

use log::debug;

use stencil::{
    cli::{get_args, Args},
    data::{parse_vars, BoundData},
    error::{default_error_handler, Result},
    format::{ensure_rustfmt, FormatterStrategy},
    generate,
    logger::init_logger,
    pathspec::PathSpec,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects `-d NAME=VALUE` tokens into the variable mapping
/// 2. Resolves every path spec argument before any file is touched
/// 3. Selects the formatter strategy once for the whole run
/// 4. Loads and parses the data document
/// 5. Renders and writes each spec in argument order
fn run(args: Args) -> Result<()> {
    let vars = parse_vars(&args.define)?;

    let specs = args
        .paths
        .iter()
        .map(|path| PathSpec::resolve(path))
        .collect::<Result<Vec<_>>>()?;

    let formatter = if args.rustfmt {
        ensure_rustfmt()?;
        FormatterStrategy::Rustfmt
    } else {
        FormatterStrategy::Native
    };
    debug!("formatter strategy: {:?}", formatter);

    let data = BoundData::from_file(&args.data, vars)?;
    let renderer = MiniJinjaRenderer::new();

    generate::run(&renderer, &data, &specs, formatter)
}
