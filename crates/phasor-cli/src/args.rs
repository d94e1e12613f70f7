//! Command-line argument definitions for the phasor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, logging verbosity and the per-run rendering overrides.

use clap::Parser;

use phasor::{RenderOptions, geometry::Size};

/// Input path that reads the diagram from standard input.
pub const STDIN_INPUT: &str = "-";

/// Command-line arguments for the phasor diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file, one vector per line (`-` reads stdin)
    #[arg(help = "Path to the input file, or - for stdin")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "phasor-diagram.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Draw vector labels
    #[arg(long, overrides_with = "no_labels")]
    pub labels: bool,

    /// Hide vector labels
    #[arg(long, overrides_with = "labels")]
    pub no_labels: bool,

    /// Color vectors from the palette
    #[arg(long, overrides_with = "no_colors")]
    pub colors: bool,

    /// Draw every vector in the first palette color
    #[arg(long, overrides_with = "colors")]
    pub no_colors: bool,

    /// Container size as WIDTHxHEIGHT; the diagram uses the smaller side
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub size: Option<Size>,

    /// Print the export data URI instead of writing the output file
    #[arg(long)]
    pub data_uri: bool,
}

impl Args {
    /// Returns `true` if the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == STDIN_INPUT
    }

    /// Applies the label and color flags on top of the configured defaults.
    pub fn render_options(&self, defaults: RenderOptions) -> RenderOptions {
        RenderOptions {
            show_labels: toggle(self.labels, self.no_labels, defaults.show_labels),
            show_colors: toggle(self.colors, self.no_colors, defaults.show_colors),
        }
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

/// Parses a `WIDTHxHEIGHT` container size.
fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;

    let dimension = |text: &str| -> Result<f32, String> {
        let parsed: f32 = text
            .trim()
            .parse()
            .map_err(|_| format!("invalid dimension `{text}`"))?;
        if parsed.is_finite() && parsed >= 0.0 {
            Ok(parsed)
        } else {
            Err(format!("dimension must be a non-negative number, got `{text}`"))
        }
    };

    Ok(Size::new(dimension(width)?, dimension(height)?))
}
