//! jabz - JzAzBz color conversion CLI
//!
//! Converts farbfeld pixel streams and single colors between sRGB and the
//! JzAzBz family.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use jabz_color::ColorSpace;
use jabz_core::GamutPolicy;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable overriding the `-v` log level.
const LOG_ENV: &str = "JABZ_LOG";

#[derive(Parser)]
#[command(name = "jabz")]
#[command(author, version, about = "JzAzBz color conversion CLI")]
#[command(long_about = "
Converts colors and farbfeld pixel streams between sRGB, linear RGB and
the JzAzBz family of perceptual color spaces.

Spaces: srgb, linear, jzazbz, jzczhz, jabz, jchz

Examples:
  jabz convert --from srgb --to jchz < in.ff > out.ff
  jabz convert --from jchz --to srgb --approx -i in.ff -o out.ff
  jabz convert --from jabz --to srgb --gamut clip < in.ff > out.ff
  jabz color --from srgb 1 0.5 0
  jabz color --hex '#336699'
  jabz color --hash build-42 --lightness 0.6
  jabz distance --from srgb 1 0 0  0.9 0.1 0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a farbfeld stream between color spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print one color in every space
    Color(ColorArgs),

    /// Perceptual distance between two colors
    #[command(visible_alias = "d")]
    Distance(DistanceArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color space
    #[arg(long)]
    from: ColorSpace,

    /// Target color space
    #[arg(long)]
    to: ColorSpace,

    /// Out-of-gamut handling: clip, mask
    #[arg(long, default_value = "mask")]
    gamut: GamutPolicy,

    /// Reduce chroma of undisplayable colors (jchz/jzczhz to srgb only)
    #[arg(long)]
    approx: bool,

    /// Input farbfeld file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output farbfeld file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ColorArgs {
    /// Space of the given components
    #[arg(long, required_unless_present_any = ["hex", "hash"], conflicts_with_all = ["hex", "hash"])]
    from: Option<ColorSpace>,

    /// Three components
    #[arg(
        num_args = 3,
        value_names = ["C0", "C1", "C2"],
        allow_negative_numbers = true,
        requires = "from"
    )]
    values: Vec<f64>,

    /// sRGB color as #rrggbb
    #[arg(long, conflicts_with = "hash")]
    hex: Option<String>,

    /// Jchz color whose hue is hashed from this text
    #[arg(long)]
    hash: Option<String>,

    /// Jchz lightness for --hash (default 0.7)
    #[arg(long, requires = "hash")]
    lightness: Option<f64>,

    /// Jchz chroma for --hash (default 0.5)
    #[arg(long, requires = "hash")]
    chroma: Option<f64>,
}

#[derive(Args)]
struct DistanceArgs {
    /// Space of both colors
    #[arg(long)]
    from: ColorSpace,

    /// First color then second color, three components each
    #[arg(
        num_args = 6,
        required = true,
        value_names = ["A0", "A1", "A2", "B0", "B1", "B2"],
        allow_negative_numbers = true
    )]
    values: Vec<f64>,
}

/// Installs the global subscriber. The guard must outlive all logging.
fn init_logging(verbose: u8, log: Option<&PathBuf>) -> Result<WorkerGuard> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3.. => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // stdout carries pixel data, so logs never go there
    let (writer, guard, ansi) = match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (writer, guard, false)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, true)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_ref())?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Color(args) => commands::color::run(args),
        Commands::Distance(args) => commands::distance::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["jabz", "-vv", "convert", "--from", "SRGB", "--to", "jch"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.from, ColorSpace::Srgb);
        assert_eq!(args.to, ColorSpace::Jchz);
        assert_eq!(args.gamut, GamutPolicy::Mask);
        assert!(!args.approx);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_space() {
        assert!(Cli::try_parse_from(["jabz", "convert", "--from", "lab", "--to", "srgb"]).is_err());
        assert!(
            Cli::try_parse_from(["jabz", "convert", "--from", "srgb", "--to", "jabz", "--gamut", "wrap"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::try_parse_from(["jabz", "color", "--from", "jabz", "0.5", "-0.1", "0.2"]).unwrap();
        let Commands::Color(args) = cli.command else {
            panic!("expected color");
        };
        assert_eq!(args.from, Some(ColorSpace::Jabz));
        assert_eq!(args.values, vec![0.5, -0.1, 0.2]);

        let cli = Cli::try_parse_from(["jabz", "color", "--hex", "#336699"]).unwrap();
        let Commands::Color(args) = cli.command else {
            panic!("expected color");
        };
        assert_eq!(args.hex.as_deref(), Some("#336699"));
        assert!(args.values.is_empty());

        let cli = Cli::try_parse_from(["jabz", "color", "--hash", "build-42", "--chroma", "0.3"]).unwrap();
        let Commands::Color(args) = cli.command else {
            panic!("expected color");
        };
        assert_eq!(args.hash.as_deref(), Some("build-42"));
        assert_eq!(args.chroma, Some(0.3));
        assert_eq!(args.lightness, None);

        assert!(Cli::try_parse_from(["jabz", "color"]).is_err());
        assert!(Cli::try_parse_from(["jabz", "color", "--hex", "#336699", "--hash", "x"]).is_err());
        assert!(Cli::try_parse_from(["jabz", "color", "--from", "srgb", "1", "0", "0", "--chroma", "0.3"]).is_err());
        assert!(Cli::try_parse_from(["jabz", "color", "--from", "srgb", "1", "0"]).is_err());
    }

    #[test]
    fn test_parse_distance() {
        let cli =
            Cli::try_parse_from(["jabz", "distance", "--from", "srgb", "1", "0", "0", "0", "1", "0"]).unwrap();
        let Commands::Distance(args) = cli.command else {
            panic!("expected distance");
        };
        assert_eq!(args.values.len(), 6);
        assert!(Cli::try_parse_from(["jabz", "distance", "--from", "srgb", "1", "0", "0"]).is_err());
    }
}
