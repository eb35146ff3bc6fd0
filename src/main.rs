//! marklite - Command-Line Host
//!
//! Reads markdown text from a file or stdin, scans it, and writes the
//! classified spans as a listing, JSON, or HTML.

use clap::Parser;
use log::{debug, error, info};
use marklite::config::{load_config, load_config_from, save_config, save_config_to, Settings};
use marklite::input::{read_input_file, read_input_from};
use marklite::render::{render, OutputFormat};
use marklite::scanner::scan_with;
use marklite::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Application name constant.
const APP_NAME: &str = "marklite";

#[derive(Debug, Parser)]
#[command(
    name = "marklite",
    version,
    about = "Scan markdown text into styled spans"
)]
struct Cli {
    /// Markdown file to scan (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Output format: listing, json or html
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Wrap HTML output in a complete document
    #[arg(long)]
    standalone: bool,

    /// Title for standalone HTML output
    #[arg(long)]
    title: Option<String>,

    /// Emit one literal span per unmatched character
    #[arg(long)]
    per_char: bool,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Persist the effective settings after this run
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Command-line flags take precedence over stored settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if self.standalone {
            settings.standalone_html = true;
        }
        if let Some(title) = &self.title {
            settings.html_title = Some(title.clone());
        }
        if self.per_char {
            settings.coalesce_literals = false;
        }
        settings.sanitize();
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}: {}", APP_NAME, err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    cli.apply_to(&mut settings);
    debug!("Effective settings: {:?}", settings);

    let text = match &cli.file {
        Some(path) => read_input_file(path, settings.max_input_bytes)?,
        None => read_input_from(io::stdin().lock(), settings.max_input_bytes)?,
    };

    let spans = scan_with(&text, &settings.scan_options());
    info!("Scanned {} bytes into {} spans", text.len(), spans.len());

    let mut output = render(&spans, settings.output_format, &settings.render_options())?;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if cli.save_config {
        match &cli.config {
            Some(path) => save_config_to(&settings, path)?,
            None => {
                let path = save_config(&settings)?;
                debug!("Saved settings to {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "marklite",
            "notes.md",
            "--format",
            "html",
            "--standalone",
            "--title",
            "Notes",
            "--per-char",
        ]);
        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
        assert_eq!(cli.format, Some(OutputFormat::Html));
        assert!(cli.standalone);
        assert!(cli.per_char);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["marklite", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from(["marklite", "-f", "json", "--per-char"]);
        let mut settings = Settings::default();
        cli.apply_to(&mut settings);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert!(!settings.coalesce_literals);
        assert!(!settings.standalone_html);
    }

    #[test]
    fn test_absent_flags_keep_settings() {
        let cli = Cli::parse_from(["marklite"]);
        let mut settings = Settings {
            output_format: OutputFormat::Html,
            standalone_html: true,
            ..Settings::default()
        };
        cli.apply_to(&mut settings);
        assert_eq!(settings.output_format, OutputFormat::Html);
        assert!(settings.standalone_html);
        assert!(cli.file.is_none());
    }
}
