use anyhow::{Context, Result};
use clap::Parser;
use keycalc::calculator::{Calculator, Display, clipboard_text, copy_to_clipboard};
use keycalc::config::Settings;
use keycalc::logging;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// A keyboard-driven four-function calculator.
///
/// Keys are digits, `.`, `+ - * /` (or `− × ÷`), `=`, and the named keys
/// `<Enter>`, `<Backspace>` and `<Escape>`.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Key sequence to evaluate, e.g. "12+30=". Reads stdin line by line when omitted.
    keys: Option<String>,

    /// Copy the resulting value to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to a config file (defaults to $XDG_CONFIG_HOME/keycalc/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(&settings.logging, cli.verbose);

    let mut calc = Calculator::new(settings.display);
    let mut stdout = io::stdout().lock();

    match cli.keys {
        Some(keys) => {
            calc.press_keys(&keys);
            print_display(&mut stdout, &calc.display())?;
        }
        None => {
            info!("reading keys from stdin");
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                calc.press_keys(&line);
                print_display(&mut stdout, &calc.display())?;
            }
        }
    }

    if cli.copy {
        match clipboard_text(&calc).and_then(|text| {
            copy_to_clipboard(text)?;
            Ok(text)
        }) {
            Ok(text) => info!(text, "copied to clipboard"),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}

fn print_display(out: &mut impl Write, display: &Display) -> Result<()> {
    if !display.previous.is_empty() {
        writeln!(out, "{}", display.previous)?;
    }
    writeln!(out, "{}", display.current)?;
    out.flush()?;
    Ok(())
}
