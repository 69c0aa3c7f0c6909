//! triangles CLI
//!
//! Classify a triangle from three side lengths, interactively or not.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use triangles::classify::classify;
use triangles::logging::{self, default_log_path, LogConfig, LogTarget};
use triangles::project::project;
use triangles::report::{format_report, ClassificationReport};
use triangles::tui::{self, App};
use triangles::types::{OutputFormat, Viewport};

#[derive(Parser)]
#[command(name = "triangles")]
#[command(about = "Classify a triangle from its side lengths and draw it")]
#[command(version)]
struct Cli {
    /// Write log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive editor (default when no command is given)
    Tui {
        /// Initial value for side a
        a: Option<String>,
        /// Initial value for side b
        b: Option<String>,
        /// Initial value for side c
        c: Option<String>,
    },

    /// Classify three side lengths and print the result
    Classify {
        #[command(flatten)]
        sides: SidesArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Draw the triangle as an SVG image
    Draw {
        #[command(flatten)]
        sides: SidesArgs,

        #[command(flatten)]
        viewport: ViewportArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Side lengths are taken as raw text: unparsable values are a result
/// ("invalid"), not a usage error.
#[derive(Args)]
struct SidesArgs {
    /// Side a (the drawn base)
    #[arg(allow_hyphen_values = true)]
    a: String,
    /// Side b
    #[arg(allow_hyphen_values = true)]
    b: String,
    /// Side c
    #[arg(allow_hyphen_values = true)]
    c: String,
}

#[derive(Args)]
struct ViewportArgs {
    /// Drawing surface width
    #[arg(long, default_value_t = Viewport::default().width)]
    width: f64,

    /// Drawing surface height
    #[arg(long, default_value_t = Viewport::default().height)]
    height: f64,

    /// Y coordinate where free space for the triangle begins
    #[arg(long, default_value_t = Viewport::default().anchor_y)]
    anchor: f64,
}

impl From<ViewportArgs> for Viewport {
    fn from(args: ViewportArgs) -> Self {
        Viewport::new(args.width, args.height, args.anchor)
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
    Svg,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Svg => OutputFormat::Svg,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui {
        a: None,
        b: None,
        c: None,
    });

    // The editor owns the terminal: its logs must not go to stderr.
    let file_required = cli.log_file.is_some();
    let log_file = match (&command, cli.log_file) {
        (Commands::Tui { .. }, None) => Some(default_log_path()),
        (_, file) => file,
    };
    let log_config = LogConfig {
        verbosity: cli.verbose,
        file: log_file,
        file_required,
    };
    match logging::init(&log_config) {
        Ok(LogTarget::Discarded { path, error }) => {
            eprintln!(
                "Warning: cannot open log file {}: {}; logging disabled",
                path.display(),
                error
            );
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: cannot open log file: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let result = match command {
        Commands::Tui { a, b, c } => cmd_tui([a, b, c]),
        Commands::Classify { sides, format, viewport } => {
            cmd_classify(sides, format.into(), viewport.into())
        }
        Commands::Draw { sides, viewport, output } => cmd_draw(sides, viewport.into(), output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(values: [Option<String>; 3]) -> Result<(), String> {
    let [a, b, c] = values.map(Option::unwrap_or_default);
    let app = App::with_values([a.as_str(), b.as_str(), c.as_str()]);
    tui::run(app).map_err(|e| e.to_string())
}

fn cmd_classify(sides: SidesArgs, format: OutputFormat, viewport: Viewport) -> Result<(), String> {
    let report = build_report(sides, &viewport);
    print!("{}", format_report(&report, &viewport, format));
    Ok(())
}

fn cmd_draw(sides: SidesArgs, viewport: Viewport, output: Option<PathBuf>) -> Result<(), String> {
    let report = build_report(sides, &viewport);
    let svg = format_report(&report, &viewport, OutputFormat::Svg);

    match output {
        Some(path) => {
            fs::write(&path, svg).map_err(|e| format!("{}: {}", path.display(), e))?;
            eprintln!("{}", report.label);
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }

    Ok(())
}

// ============================================================================
// REPORT BUILDING
// ============================================================================

/// Classify, and project when valid.
fn build_report(sides: SidesArgs, viewport: &Viewport) -> ClassificationReport {
    let classification = classify(&sides.a, &sides.b, &sides.c);
    let projection = classification
        .sides
        .map(|parsed| project(parsed, viewport, classification.category));

    if let Some(p) = &projection {
        log::info!("projected at scale {:.4} onto {:?}", p.scale, viewport);
    }

    ClassificationReport::new([sides.a, sides.b, sides.c], classification, projection)
}
