use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagekit::config::Config;
use pagekit::render::Renderer;
use pagekit::{PageLink, PaginationResult, QueryParams, paginate_with};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
    Text,
}

#[derive(Parser)]
#[command(name = "pagekit", version, about = "Compute page navigation for a list")]
struct Cli {
    /// Path to config file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of items in the list
    #[arg(short, long, allow_negative_numbers = true)]
    total: i64,

    /// Raw request query string, e.g. "page=2&limit=10&search=rust"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = QueryParams::parse(&cli.query);
    let result = paginate_with(&params, cli.total, &config.pagination);
    tracing::debug!(
        page = result.page,
        limit = result.limit,
        total_pages = result.total_pages,
        "pagination computed"
    );

    match format_output(&result, cli.format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("Failed to format output: {e}");
            std::process::exit(1);
        }
    }
}

fn format_output(
    result: &PaginationResult,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(result)?,
        Format::Html => Renderer::new()?.render(result)?,
        Format::Text => format_text(result),
    })
}

/// `Page 4 of 37 (925 items, 25 per page)` followed by the link bar.
fn format_text(result: &PaginationResult) -> String {
    let bar: Vec<String> = result
        .links
        .iter()
        .map(|link| match link {
            PageLink::Ellipsis => "…".to_string(),
            PageLink::Page {
                page,
                is_current: true,
                ..
            } => format!("[{page}]"),
            PageLink::Page { page, .. } => page.to_string(),
        })
        .collect();
    format!(
        "Page {} of {} ({} items, {} per page)\n{}",
        result.page,
        result.total_pages,
        result.total_items,
        result.limit,
        bar.join(" ")
    )
}
