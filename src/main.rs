//! sitegen — AI Website Builder.
//!
//! Usage:
//!   sitegen setup                      Run the setup wizard
//!   sitegen generate "<description>"   Generate a website and save it
//!   sitegen prompt "<description>"     Print the prompt that would be sent
//!   sitegen studio                     Interactive generate/preview/download loop
//!   sitegen status                     Show current configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use sitegen::agent::{self, prompt, WebsiteAgent};
use sitegen::config::{self, SiteConfig, CONFIG_FILE};
use sitegen::gemini::GeminiClient;
use sitegen::state::{save_document, Session};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "sitegen")]
#[command(version)]
#[command(about = "Generate self-contained HTML websites with Gemini")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sitegen home directory (defaults to ~/.sitegen).
    #[arg(long)]
    home: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the first-time setup wizard.
    Setup,

    /// Generate a website from a description and save it.
    Generate {
        /// Website description.
        #[arg(required = true)]
        description: Vec<String>,

        /// Output file (defaults to the configured output path).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip viewport/charset meta tag injection.
        #[arg(long)]
        no_optimize: bool,

        /// Print the HTML to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Print the exact prompt that would be sent to the model.
    Prompt {
        /// Website description.
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Interactive generate / preview / download loop.
    Studio,

    /// Show the current configuration.
    Status,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let home_dir = match &cli.home {
        Some(home) => PathBuf::from(shellexpand::tilde(home).into_owned()),
        None => config::default_home_dir(),
    };
    let config_path = home_dir.join(CONFIG_FILE);
    let cfg = config::load_config_with_env(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Setup => cmd_setup(&home_dir),
        Commands::Generate {
            description,
            output,
            no_optimize,
            stdout,
        } => cmd_generate(&cfg, &description.join(" "), output, !no_optimize, stdout).await,
        Commands::Prompt { description } => cmd_prompt(&description.join(" ")),
        Commands::Studio => cmd_studio(&cfg).await,
        Commands::Status => cmd_status(&cfg, &config_path),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_setup(home_dir: &Path) -> Result<()> {
    sitegen::setup::run_setup_wizard(home_dir)?;
    Ok(())
}

async fn cmd_generate(
    cfg: &SiteConfig,
    description: &str,
    output: Option<PathBuf>,
    optimize: bool,
    to_stdout: bool,
) -> Result<()> {
    let agent = build_agent(cfg)?;

    eprintln!(
        "{} Generating website with {} ... this may take a minute.",
        ">>>".green().bold(),
        cfg.model
    );

    let document = match agent.generate_website(description).await {
        Ok(doc) => doc,
        Err(e) => {
            error!("Generation failed ({})", e.kind());
            eprintln!("{} Error generating website: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let document = if optimize && cfg.optimize {
        agent::optimize(document)
    } else {
        document
    };

    if to_stdout {
        println!("{}", document.html);
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(cfg.resolved_output_path()));
    save_document(&document, &path)?;
    eprintln!(
        "{} Website generated successfully: {} ({} bytes)",
        "OK".green().bold(),
        path.display(),
        document.len()
    );
    Ok(())
}

fn cmd_prompt(description: &str) -> Result<()> {
    let built = prompt::build_prompt(description)?;
    println!("{}", built);
    Ok(())
}

async fn cmd_studio(cfg: &SiteConfig) -> Result<()> {
    let agent = build_agent(cfg)?;
    let mut session = Session::new();
    let output = PathBuf::from(cfg.resolved_output_path());

    println!(
        "{} sitegen studio (model: {})",
        ">>>".green().bold(),
        cfg.model
    );

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    sitegen::studio::run_studio(&agent, &mut session, &mut reader, &output, cfg.optimize).await?;

    info!("Studio session ended");
    Ok(())
}

fn cmd_status(cfg: &SiteConfig, config_path: &Path) -> Result<()> {
    let key_state = if cfg.has_api_key() {
        "configured".green()
    } else {
        "missing".red()
    };
    let config_state = if config_path.exists() {
        config_path.display().to_string().normal()
    } else {
        format!("{} (not found, using defaults)", config_path.display()).dimmed()
    };

    println!();
    println!("{}", "=== sitegen Status ===".bold());
    println!();
    println!("  {}:   {}", "Config".bold(), config_state);
    println!("  {}:  {}", "API key".bold(), key_state);
    println!("  {}:  {}", "API URL".bold(), cfg.api_url);
    println!();
    println!("  {}:", "Model".bold());
    println!("    Name:        {}", cfg.model);
    println!("    Temperature: {}", cfg.temperature);
    println!("    Top-p:       {}", cfg.top_p);
    println!("    Top-k:       {}", cfg.top_k);
    println!("    Max tokens:  {}", cfg.max_output_tokens);
    println!();
    println!("  {}:", "Output".bold());
    println!("    File:        {}", cfg.resolved_output_path());
    println!("    Optimize:    {}", cfg.optimize);
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the agent with an injected Gemini client.
fn build_agent(cfg: &SiteConfig) -> Result<WebsiteAgent<GeminiClient>> {
    let client = GeminiClient::from_config(cfg).context("Failed to initialize Gemini client")?;
    Ok(WebsiteAgent::new(client, cfg.generation_options()))
}
