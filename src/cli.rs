//! Command-line interface for brasis.

use clap::Parser;
use std::path::PathBuf;

/// Brasis - wiki markup to HTML with preserved line breaks.
///
/// Consecutive source lines are separated by line breaks instead of being
/// joined into one paragraph. Lists, tables, headings and preformatted
/// blocks are left alone.
#[derive(Parser, Debug)]
#[command(
    name = "brasis",
    author = "Brasis Contributors",
    version,
    about = "Wiki markup to HTML with preserved line breaks",
    after_help = "Examples:\n  \
                  cat FrontPage.wiki | brasis\n  \
                  brasis --standalone --title Notes notes.wiki > notes.html\n  \
                  brasis --no-breaks -c '[html]\\nXhtml = true' page.wiki"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Render without preserving line breaks
    #[arg(long = "no-breaks")]
    pub no_breaks: bool,

    /// Wrap the output in a complete HTML document
    #[arg(long = "standalone")]
    pub standalone: bool,

    /// Document title for --standalone
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Emit XHTML-style void elements (<br />)
    #[arg(long = "xhtml")]
    pub xhtml: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use brasis_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["brasis"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.no_breaks);
        assert!(!cli.standalone);
        assert!(cli.title.is_none());
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_files() {
        let cli = Cli::parse_from(["brasis", "a.wiki", "b.wiki"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.wiki"), PathBuf::from("b.wiki")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "brasis",
            "-l", "debug",
            "--no-breaks",
            "--standalone",
            "--title", "Notes",
            "--xhtml",
            "-c", "custom.toml",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert!(cli.no_breaks);
        assert!(cli.standalone);
        assert_eq!(cli.title.as_deref(), Some("Notes"));
        assert!(cli.xhtml);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }
}
