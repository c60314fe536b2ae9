//! First-run interactive setup wizard.
//!
//! Steps:
//! 1. Display banner
//! 2. Collect Gemini API key
//! 3. Collect model name
//! 4. Collect output file and optimize preference
//! 5. Write sitegen.toml

use crate::config::{self, SiteConfig, CONFIG_FILE};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// ASCII banner displayed during setup.
const BANNER: &str = r#"
      _ _
  ___(_) |_ ___  __ _  ___ _ __
 / __| | __/ _ \/ _` |/ _ \ '_ \
 \__ \ | ||  __/ (_| |  __/ | | |
 |___/_|\__\___|\__, |\___|_| |_|
                |___/
          AI Website Builder
"#;

/// Run the interactive setup wizard on stdin.
pub fn run_setup_wizard(home_dir: &Path) -> Result<SiteConfig> {
    println!("{}", BANNER);
    println!("Welcome to sitegen setup.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_setup_with(&mut reader, home_dir)
}

/// Wizard body, reading answers from any line source.
pub fn run_setup_with(reader: &mut impl BufRead, home_dir: &Path) -> Result<SiteConfig> {
    let config_path = home_dir.join(CONFIG_FILE);
    let existing = config::load_config(&config_path)?;

    // Step 1: API key
    println!("[1/4] Gemini API");
    let api_key = if existing.has_api_key() {
        let answer = prompt(reader, "  Gemini API Key (press Enter to keep current)")?;
        if answer.is_empty() {
            existing.api_key.clone()
        } else {
            answer
        }
    } else {
        prompt(reader, "  Gemini API Key (or press Enter to use GEMINI_API_KEY)")?
    };

    // Step 2: Model
    println!("\n[2/4] Model");
    let model = prompt_with_default(reader, "  Model", &existing.model)?;

    // Step 3: Output
    println!("\n[3/4] Output");
    let output_path = prompt_with_default(reader, "  Output file", &existing.output_path)?;
    let optimize_default = if existing.optimize { "y" } else { "n" };
    let optimize = prompt_with_default(reader, "  Add missing meta tags? (y/n)", optimize_default)?;

    // Step 4: Write files
    println!("\n[4/4] Writing configuration...");

    let config = SiteConfig {
        api_key,
        model,
        output_path,
        optimize: parse_yes(&optimize),
        ..existing
    };

    config::save_config(&config, &config_path)?;
    println!("  Written: {}", config_path.display());

    println!("\nSetup complete! Run `sitegen generate \"<description>\"` to build a site.\n");

    Ok(config)
}

fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "true")
}

/// Prompt the user for input with a label.
fn prompt(reader: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt with a default value.
fn prompt_with_default(reader: &mut impl BufRead, label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;
    let mut input = String::new();
    reader.read_line(&mut input)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
