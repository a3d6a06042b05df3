use std::path::PathBuf;

use clap::Parser;

use pageturn::app::App;
use pageturn::config::Config;
use pageturn::error::{AppError, AppResult};

/// Terminal viewer for a single PDF report, one page at a time.
#[derive(Debug, Parser)]
#[command(name = "pageturn", version)]
struct Cli {
    /// Path to the PDF document (overrides the configured document path).
    pdf: Option<PathBuf>,

    /// Explicit config file location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli)?;

    let mut app = App::new(config)?;
    app.run().await
}

fn resolve_config(cli: Cli) -> AppResult<Config> {
    let mut config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if let Some(pdf) = cli.pdf {
        config.document.path = pdf;
    }
    if config.document.path.as_os_str().is_empty() {
        return Err(AppError::invalid_argument(
            "no document configured: pass a PDF path or set [document] path",
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::{Cli, resolve_config};

    #[test]
    fn cli_accepts_an_optional_pdf_path() {
        let cli = Cli::try_parse_from(["pageturn", "sample.pdf"]).expect("args should parse");
        assert_eq!(cli.pdf.as_deref(), Some(Path::new("sample.pdf")));

        let cli = Cli::try_parse_from(["pageturn"]).expect("bare invocation should parse");
        assert!(cli.pdf.is_none());
    }

    #[test]
    fn cli_rejects_extra_positional_arguments() {
        assert!(Cli::try_parse_from(["pageturn", "a.pdf", "b.pdf"]).is_err());
    }

    #[test]
    fn positional_path_overrides_the_configured_document() {
        let cli = Cli::try_parse_from([
            "pageturn",
            "override.pdf",
            "--config",
            "no-such-pageturn-config.toml",
        ])
        .expect("args should parse");
        let config = resolve_config(cli).expect("config should resolve");
        assert_eq!(config.document.path, Path::new("override.pdf"));
    }
}
