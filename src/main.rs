use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wavedesc::render::{RenderOptions, render_html_page};
use wavedesc::{WaveformDescription, build_report};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "wavedesc")]
#[command(about = "Check, format and render WaveJSON timing diagrams", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a description and summarize it.
    Check {
        /// Input file (JSON or WaveDrom literal), `-` for stdin.
        input: String,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,

        /// Fail when the report has lints.
        #[arg(long)]
        deny_lints: bool,
    },

    /// Re-serialize a description in canonical form.
    Fmt {
        input: String,

        #[arg(short, long, value_enum, default_value_t = Format::Literal)]
        format: Format,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Write an HTML page that hands the description to WaveDrom.
    Render {
        input: String,

        #[arg(short = 'o', long)]
        out: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        wavedrom_src: Option<String>,

        #[arg(long)]
        skin_src: Option<String>,
    },

    /// Print the bundled SPI mode 2 diagram.
    Sample {
        #[arg(short, long, value_enum, default_value_t = Format::Literal)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    JsonPretty,
    Literal,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so formatted output on stdout stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("wavedesc=info"),
        1 => EnvFilter::new("wavedesc=debug"),
        _ => EnvFilter::new("wavedesc=trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Commands::Check {
            input,
            json,
            deny_lints,
        } => {
            let desc = read_description(&input)?;
            let report = build_report(&desc);

            for lint in &report.lints {
                warn!("{}", lint.message);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}: {} signals, {} edges, {} nodes, {} time slots",
                    input,
                    report.totals.signals,
                    report.totals.edges,
                    report.totals.nodes,
                    report.time_axis
                );
            }

            if deny_lints && !report.is_clean() {
                bail!("{}: {} lint(s) reported", input, report.lints.len());
            }
        }
        Commands::Fmt { input, format, out } => {
            let desc = read_description(&input)?;
            let text = serialize(&desc, format)?;
            match out {
                Some(out) => {
                    std::fs::write(&out, text).with_context(|| format!("write {}", out))?;
                    info!("wrote {}", out);
                }
                None => print!("{}", text),
            }
        }
        Commands::Render {
            input,
            out,
            title,
            wavedrom_src,
            skin_src,
        } => {
            let desc = read_description(&input)?;
            let report = build_report(&desc);

            let defaults = RenderOptions::default();
            let options = RenderOptions {
                title: title.unwrap_or(defaults.title),
                wavedrom_src: wavedrom_src.unwrap_or(defaults.wavedrom_src),
                skin_src: skin_src.unwrap_or(defaults.skin_src),
            };

            let html = render_html_page(&desc, &report, &options)?;
            std::fs::write(&out, html).with_context(|| format!("write {}", out))?;
            info!("wrote {}", out);
        }
        Commands::Sample { format } => {
            let desc = WaveformDescription::from_literal(wavedesc::SPI_MODE2_SAMPLE)
                .context("bundled sample")?;
            print!("{}", serialize(&desc, format)?);
        }
    }

    Ok(())
}

fn read_description(input: &str) -> Result<WaveformDescription> {
    let text = if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        text
    } else {
        std::fs::read_to_string(input).with_context(|| format!("read description {}", input))?
    };

    WaveformDescription::from_literal(&text).with_context(|| format!("load {}", input))
}

fn serialize(desc: &WaveformDescription, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => desc.to_json()? + "\n",
        Format::JsonPretty => desc.to_json_pretty()? + "\n",
        Format::Literal => desc.to_literal(),
    })
}
