//! Command line front end for converting icon sets.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::{Env, TimestampPrecision};
use lvgl_icon_renderer::{DirectorySource, HttpSource, IconPipeline, IconSetConfig, IconSource};

#[derive(Debug, Parser)]
#[command(name = "lvgl-icon-renderer", version, about = "Convert SVG icons into LVGL C image sources")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert every icon of a set and write the header.
    Render {
        /// Icon set JSON. Defaults to the built-in weather set.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding the downloaded SVG files.
        #[arg(short, long, default_value = "images")]
        images: PathBuf,

        /// Root for the generated sources and previews.
        #[arg(short, long, default_value = "images")]
        out: PathBuf,

        /// Fetch each icon from the set's base URL, keeping a copy in `--images`.
        #[arg(short, long)]
        download: bool,
    },

    /// Download every icon of a set into a directory.
    Download {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "images")]
        images: PathBuf,
    },

    /// Print the built-in weather icon set as JSON.
    Preset,

    /// Print `<url> <destination>` for each icon, for a download script.
    Urls {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<IconSetConfig, Box<dyn Error>> {
    Ok(match path {
        Some(path) => IconSetConfig::from_path(&path)?,
        None => IconSetConfig::weather(),
    })
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Render { config, images, out, download } => {
            let config = load_config(config)?;
            let source: Box<dyn IconSource> = if download {
                Box::new(HttpSource::for_config(&config)?.saving_to(images))
            } else {
                Box::new(DirectorySource::new(images))
            };
            let pipeline = IconPipeline::new(config)?;
            let report = pipeline.run(source.as_ref(), &out)?;
            log::info!(
                "Done: {} generated, {} skipped",
                report.succeeded(),
                report.failed()
            );
        }
        Command::Download { config, images } => {
            let config = load_config(config)?;
            let source = HttpSource::for_config(&config)?.saving_to(images);
            let failed = config
                .icons
                .iter()
                .filter(|spec| match source.load(spec) {
                    Ok(_) => false,
                    Err(error) => {
                        log::error!("Error downloading {}: {error}", spec.destination);
                        true
                    }
                })
                .count();
            log::info!(
                "Done: {} downloaded, {failed} failed",
                config.icons.len() - failed
            );
        }
        Command::Preset => {
            println!("{}", IconSetConfig::weather().to_json_pretty()?);
        }
        Command::Urls { config } => {
            let config = load_config(config)?;
            if config.base_url.is_none() {
                log::warn!("set '{}' has no base URL", config.name);
            }
            for spec in &config.icons {
                if let Some(url) = config.source_url(spec) {
                    println!("{url} {}", spec.destination);
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .parse_env(Env::default().filter_or("LOG_LEVEL", "info"))
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
