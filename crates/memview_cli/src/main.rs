//! memview CLI
//!
//! Command-line tools for building and exercising segment views.
//!
//! # Commands
//!
//! - `demo` - Run the canonical `hello`/`world`/`!` walkthrough
//! - `read` - Read a range from a view built from strings and files
//! - `inspect` - Display the segment table of a view
//!
//! Segments given with `--segment` come first, in order, followed by the
//! contents of each `--file`, in order.

mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// memview command-line tools.
#[derive(Parser)]
#[command(name = "memview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Segment sources shared by commands that build a view.
#[derive(Args)]
struct SourceArgs {
    /// Add a segment holding this text
    #[arg(short, long = "segment", value_name = "TEXT")]
    segments: Vec<String>,

    /// Add a segment holding the contents of this file
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Drop zero-length segments when building the view
    #[arg(long)]
    drop_empty: bool,

    /// Discard this many bytes from the front before running the command
    #[arg(short, long, default_value = "0")]
    discard: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the canonical walkthrough
    Demo,

    /// Read a byte range from a view
    Read {
        #[command(flatten)]
        source: SourceArgs,

        /// Logical offset to read from
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Number of bytes to read (defaults to the rest of the view)
        #[arg(short, long)]
        len: Option<usize>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Display the segment table of a view
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Demo => {
            commands::demo::run()?;
        }
        Commands::Read {
            source,
            offset,
            len,
            format,
        } => {
            let view = build_view(&source)?;
            commands::read::run(&view, offset, len, &format)?;
        }
        Commands::Inspect { source, format } => {
            let view = build_view(&source)?;
            commands::inspect::run(&view, &format)?;
        }
        Commands::Version => {
            println!("memview CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("memview core v{}", memview_core::VERSION);
        }
    }

    Ok(())
}

fn build_view(
    source: &SourceArgs,
) -> Result<memview_core::SegmentView, Box<dyn std::error::Error>> {
    let config = memview_core::ViewConfig::new().drop_empty_segments(source.drop_empty);
    let mut view = commands::source::build(&config, &source.segments, &source.files)?;
    if source.discard > 0 {
        let discarded = view.discard_front(source.discard);
        tracing::info!(requested = source.discard, discarded, "discarded view front");
    }
    Ok(view)
}
