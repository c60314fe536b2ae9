//! Interactive generation loop.
//!
//! Mirrors the single-page builder: describe a site, preview it, download it,
//! or clear it and start over. Failures are reported and the loop keeps going
//! so the user can resubmit.

use crate::agent::{Generator, WebsiteAgent};
use crate::state::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

const HELP: &str = "\
Type a website description and press Enter to generate it.
Commands:
  :save [path]   write the current website (default: configured output file)
  :show          print the current HTML
  :new           discard the current website and start over
  :help          show this help
  :quit          exit";

/// A parsed line of studio input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Describe(&'a str),
    Save(Option<&'a str>),
    Show,
    New,
    Help,
    Quit,
    Unknown(&'a str),
    Blank,
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Input::Describe(line);
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (command, None),
    };
    match name {
        "save" | "s" => Input::Save(arg),
        "show" => Input::Show,
        "new" | "n" => Input::New,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(name),
    }
}

/// Run the studio loop until `:quit` or end of input.
pub async fn run_studio<G: Generator>(
    agent: &WebsiteAgent<G>,
    session: &mut Session,
    reader: &mut impl BufRead,
    default_output: &Path,
    optimize: bool,
) -> Result<()> {
    println!("{}", HELP.dimmed());

    loop {
        print!("\n{} ", "describe>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match parse_input(&line) {
            Input::Blank => {}
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Unknown(name) => println!("Unknown command ':{}'. Try :help.", name),
            Input::Show => match session.current() {
                Some(doc) => println!("{}", doc.html),
                None => println!("Nothing generated yet."),
            },
            Input::New => {
                session.clear();
                println!("Cleared. Describe your next website.");
            }
            Input::Save(path) => {
                let target = path.map(PathBuf::from).unwrap_or_else(|| default_output.to_path_buf());
                match session.save_current(&target) {
                    Ok(true) => println!("{} Saved to {}", "OK".green().bold(), target.display()),
                    Ok(false) => println!("Nothing to save yet."),
                    Err(e) => println!("{} {:#}", "Error:".red().bold(), e),
                }
            }
            Input::Describe(description) => {
                println!("Generating your website... this may take a minute.");
                match agent.generate_website(description).await {
                    Ok(doc) => {
                        let doc = if optimize { agent.optimize(doc) } else { doc };
                        println!(
                            "{} Website generated ({} bytes). :save to download, :show to view.",
                            "OK".green().bold(),
                            doc.len()
                        );
                        session.store(doc);
                    }
                    Err(e) => {
                        warn!("Generation failed: {}", e.kind());
                        println!("{} Error generating website: {}", "Error:".red().bold(), e);
                        println!("Please check your API key configuration and try again.");
                    }
                }
            }
        }
    }

    Ok(())
}
