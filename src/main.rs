use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recipe_search::{
    AppConfig, ConfigManager, ConfigOverrides, RecipeApi, SpoonacularClient,
    format_recipe_details, format_recipe_summary, interactive::InteractiveSearch, logging,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "recipe-search",
    version,
    about = "Search recipes on the Spoonacular API from the terminal",
    long_about = None
)]
struct Cli {
    /// Search query. Without one the interactive screen opens
    query: Option<String>,

    /// Interactive search screen (pre-filled with QUERY when given)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Print the details of one recipe instead of searching
    #[arg(long, value_name = "ID", conflicts_with_all = ["query", "interactive"])]
    recipe: Option<u64>,

    /// Spoonacular API key
    #[arg(long, env = "SPOONACULAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API host
    #[arg(long, env = "RECIPE_SEARCH_BASE_URL")]
    base_url: Option<String>,

    /// Number of recipes to request
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=100))]
    number: Option<u32>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file (default: <config dir>/recipe-search/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file for interactive mode
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long, conflicts_with = "show_config")]
    init_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = !cli.show_config
        && !cli.init_config
        && cli.recipe.is_none()
        && (cli.interactive || cli.query.is_none());

    // The TUI owns the terminal, so its logs go to a file
    if interactive {
        let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
        logging::init_file_tracing(&log_path, cli.verbose)?;
    } else {
        logging::init_tracing(cli.verbose);
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let manager = cli
        .config
        .clone()
        .map(ConfigManager::with_path)
        .unwrap_or_default();
    let config = manager.load()?.apply(ConfigOverrides {
        api_key: cli.api_key.clone(),
        base_url: cli.base_url.clone(),
        result_limit: cli.number,
        timeout_secs: cli.timeout,
    });
    debug!("Using config from {}", manager.path().display());

    if cli.show_config {
        return print_config(&manager, &config);
    }
    if cli.init_config {
        manager.create(&config)?;
        println!("Wrote {}", manager.path().display());
        return Ok(());
    }

    let api_key = config.require_api_key()?;
    let client = SpoonacularClient::with_timeout(&config.base_url, api_key, config.timeout())
        .context("Failed to create API client")?;

    if interactive {
        info!("Starting interactive search against {}", client.base_url());
        let mut screen = InteractiveSearch::new(Arc::new(client), config.result_limit)
            .with_initial_query(cli.query);
        return screen.run();
    }

    if let Some(id) = cli.recipe {
        return show_recipe(&client, id, cli.format, !cli.no_color);
    }

    let query = cli.query.unwrap_or_default();
    run_search(&client, &query, config.result_limit, cli.format, !cli.no_color)
}

fn run_search(
    api: &dyn RecipeApi,
    query: &str,
    number: u32,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let start = Instant::now();
    let page = api
        .search_recipes(query, number)
        .with_context(|| format!("Search for {query:?} failed"))?;
    let duration = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if page.results.is_empty() {
                writeln!(handle, "No recipes found.")?;
            } else {
                writeln!(handle, "Found {} recipes:\n", page.results.len())?;
                for recipe in &page.results {
                    writeln!(handle, "{}", format_recipe_summary(recipe, use_color))?;
                }

                eprintln!("\nSearch completed in {}ms", duration.as_millis());
                if page.total_results > page.results.len() as u64 {
                    eprintln!(
                        "(Showing {} of {} matching recipes)",
                        page.results.len(),
                        page.total_results
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": page.results,
                "duration_ms": duration.as_millis(),
                "total_results": page.total_results,
                "returned_count": page.results.len()
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for recipe in &page.results {
                serde_json::to_writer(&mut handle, recipe)?;
                writeln!(handle)?;
            }
            // Write metadata as last line
            let metadata = serde_json::json!({
                "_metadata": {
                    "duration_ms": duration.as_millis(),
                    "total_results": page.total_results,
                    "returned_count": page.results.len()
                }
            });
            serde_json::to_writer(&mut handle, &metadata)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn show_recipe(api: &dyn RecipeApi, id: u64, format: OutputFormat, use_color: bool) -> Result<()> {
    let details = api
        .recipe_information(id)
        .with_context(|| format!("Failed to load recipe {id}"))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => writeln!(handle, "{}", format_recipe_details(&details, use_color))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &details)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            serde_json::to_writer(&mut handle, &details)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn print_config(manager: &ConfigManager, config: &AppConfig) -> Result<()> {
    let shown = AppConfig {
        api_key: config.api_key.as_ref().map(|_| "********".to_string()),
        ..config.clone()
    };
    println!("# {}", manager.path().display());
    print!(
        "{}",
        toml::to_string_pretty(&shown).context("Failed to serialize config")?
    );
    Ok(())
}
