//! CLI logic for the phasor diagram tool.
//!
//! Reads vector lines from a file or stdin, renders them with the
//! configured canvas and style, and exports the diagram either as an SVG
//! file or as a data URI on stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read},
};

use log::{debug, info};

use phasor::{DiagramBuilder, PhasorError, Surface, export_svg};

/// Run the phasor CLI application
///
/// # Errors
///
/// Returns `PhasorError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid configured colors or dimensions
pub fn run(args: &Args) -> Result<(), PhasorError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(size) = args.size {
        debug!(width = size.width(), height = size.height(); "Container size overridden");
        app_config.canvas_mut().set_container(size);
    }

    let source = read_source(args)?;

    let builder = DiagramBuilder::new(app_config);
    let options = args.render_options(builder.default_options());

    let mut surface = Surface::new();
    builder.recompute(&mut surface, &source, options)?;

    let download = export_svg(&surface);
    if args.data_uri {
        println!("{}", download.href());
        info!("Data URI written to stdout");
    } else {
        download.save(&args.output)?;
        info!(output_file = args.output; "SVG exported successfully");
    }

    Ok(())
}

fn read_source(args: &Args) -> Result<String, PhasorError> {
    if args.reads_stdin() {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(&args.input)?)
    }
}
