use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use libdubeolsik::keymap::{self, ROWS};
use libdubeolsik::{compose_with_action, Action, DubeolsikConfig, Engine, KeyEvent};
use libhangul_core::utils;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libdubeolsik")]
#[command(about = "A Rust implementation of the Dubeolsik Korean input method")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Single key sequence for quick composing
    input: Option<String>,

    /// Log composition steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose QWERTY keystrokes (or jamo) into Hangul
    Compose {
        /// Keys to type
        text: String,
        /// Treat the input as jamo instead of QWERTY keys
        #[arg(long)]
        jamo: bool,
    },
    /// Show every composition step
    Trace {
        /// Keys to type
        text: String,
        /// Treat the input as jamo instead of QWERTY keys
        #[arg(long)]
        jamo: bool,
        /// Print the steps as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the layout, or the keystrokes for some Hangul text
    Keys {
        /// Hangul text to convert back to keystrokes
        text: Option<String>,
    },
    /// Interactive REPL mode
    Repl {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print or save the default configuration
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One row of `trace` output.
#[derive(Debug, Serialize)]
struct Step {
    key: char,
    jamo: char,
    action: Action,
    text: String,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn to_jamo(key: char, jamo: bool) -> char {
    if jamo {
        key
    } else {
        keymap::jamo_for_key(key).unwrap_or(key)
    }
}

fn handle_compose(text: &str, jamo: bool) {
    let out = libdubeolsik::compose_all("", text.chars().map(|k| to_jamo(k, jamo)));
    println!("{}", out);
}

fn handle_trace(text: &str, jamo: bool, json: bool) -> anyhow::Result<()> {
    let mut buffer = String::new();
    let mut steps = Vec::new();
    for key in text.chars() {
        let input = to_jamo(key, jamo);
        let (next, action) = compose_with_action(&buffer, input);
        buffer = next;
        steps.push(Step {
            key,
            jamo: input,
            action,
            text: buffer.clone(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }
    for (i, step) in steps.iter().enumerate() {
        println!(
            "{:>3}. {} -> {}  {:<14} {}",
            i + 1,
            step.key,
            step.jamo,
            step.action.as_str(),
            step.text
        );
    }
    Ok(())
}

fn handle_keys(text: Option<&str>) {
    if let Some(text) = text {
        println!("{}", keymap::hangul_to_keys(text));
        return;
    }
    for (indent, row) in ROWS.iter().enumerate() {
        let line: Vec<String> = row
            .chars()
            .map(|key| {
                let jamo = keymap::jamo_for_key(key).unwrap_or(' ');
                let shifted = keymap::jamo_for_key(key.to_ascii_uppercase()).unwrap_or(jamo);
                if shifted == jamo {
                    format!("{} {}  ", key, jamo)
                } else {
                    format!("{} {}{} ", key, jamo, shifted)
                }
            })
            .collect();
        println!("{}{}", " ".repeat(indent * 2), line.concat().trim_end());
    }
}

fn handle_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = DubeolsikConfig::default();
    match output {
        Some(path) => {
            config
                .save_toml(path)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

fn run_repl(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => DubeolsikConfig::load_toml(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DubeolsikConfig::default(),
    };
    let mut engine = Engine::new(config);

    println!("libdubeolsik demo CLI: type QWERTY keys (or jamo) and press Enter");
    println!("Example: dkssud for 안녕");
    println!(":mode toggles 한/A, :q quits. Ctrl-D to exit.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl_loop(&mut engine, stdin.lock(), stdout.lock())
}

/// Feed each input line to `engine` as key presses and print the commit.
fn repl_loop<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: R,
    mut out: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let keys = utils::normalize(&line);
        match keys.as_str() {
            "" => continue,
            ":q" | ":quit" => break,
            ":mode" => {
                engine.process_key(KeyEvent::ToggleMode);
                writeln!(out, "mode: {}", engine.context().auxiliary_text)?;
                continue;
            }
            _ => {}
        }
        engine.type_keys(&keys);
        let text = engine.commit();
        writeln!(out, "[{}] {}", engine.context().auxiliary_text, text)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Compose { text, jamo }) => handle_compose(&text, jamo),
        Some(Commands::Trace { text, jamo, json }) => handle_trace(&text, jamo, json)?,
        Some(Commands::Keys { text }) => handle_keys(text.as_deref()),
        Some(Commands::Repl { config }) => run_repl(config.as_deref())?,
        Some(Commands::Config { output }) => handle_config(output.as_deref())?,
        None => match cli.input {
            // A bare argument is composed as QWERTY keys
            Some(input) => handle_compose(&input, false),
            None => run_repl(None)?,
        },
    }
    Ok(())
}
