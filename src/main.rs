//! Brasis - wiki markup to HTML with preserved line breaks.
//!
//! This binary provides the CLI interface to the brasis library,
//! converting wiki files or stdin to HTML.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufReader, Write};

use brasis_config::Config;
use brasis_core::{LineProcessor, Result};
use brasis_linebreak::{LineBreakDecider, PlainProcessor};
use brasis_parser::WikiScanner;
use brasis_render::{HtmlFormatter, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    let config = load_config(&cli);

    // Set up logging; the Logging feature raises the level to at least debug
    let debug_logging = config.as_ref().is_ok_and(|c| c.features.logging);
    setup_logging(&cli.log_level, debug_logging);
    info!("Brasis v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.and_then(|config| run(&cli, &config)) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str, debug_logging: bool) {
    let mut filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };
    if debug_logging {
        filter = filter.max(LevelFilter::Debug);
    }

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli, config: &Config) -> Result<()> {
    debug!("Loaded config: {:?}", config);

    let formatter = HtmlFormatter::from_config(&config.html);
    let mut processor = create_processor(config, formatter);

    let stdout = io::stdout();
    let mut renderer = Renderer::with_config(stdout.lock(), &config.html);

    // All inputs share one standalone wrapper
    renderer.begin()?;
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        renderer.render_reader(processor.as_mut(), io::stdin().lock())?;
    } else {
        // One document pass per file; the renderer resets state in between
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let file = File::open(path)?;
            renderer.render_reader(processor.as_mut(), BufReader::new(file))?;
        }
    }
    renderer.end()?;

    Ok(())
}

/// Load configuration and apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if cli.no_breaks {
        config.features.preserve_line_breaks = false;
    }
    if cli.standalone {
        config.html.standalone = true;
    }
    if cli.xhtml {
        config.html.xhtml = true;
    }
    if let Some(ref title) = cli.title {
        config.html.title = title.clone();
    }

    Ok(config)
}

/// Pick the line processor for the configured features.
fn create_processor(config: &Config, formatter: HtmlFormatter) -> Box<dyn LineProcessor> {
    if config.features.preserve_line_breaks {
        Box::new(LineBreakDecider::new(WikiScanner::new(), formatter))
    } else {
        Box::new(PlainProcessor::new(WikiScanner::new(), formatter))
    }
}
