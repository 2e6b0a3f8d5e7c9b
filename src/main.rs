//! codepad - replay a key script through the editing engine
//!
//! Usage:
//!   codepad solve.py --caret 12 --keys "enter,tab,("
//!   echo "if x:" | codepad --language python --caret 5 --keys enter --json

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use codepad::cli::{CliArgs, RunConfig};
use codepad::editable::SelectionRange;
use codepad::host::{HostAdapter, MemorySurface, Surface};
use codepad::{Engine, EngineConfig};

#[derive(Serialize)]
struct Output {
    text: String,
    selection: SelectionRange,
}

fn read_input(run: &RunConfig) -> Result<String> {
    match &run.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    codepad::tracing::init();

    let run = CliArgs::parse().into_config().map_err(anyhow::Error::msg)?;

    let config = match &run.config_path {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::load(),
    };

    let text = read_input(&run)?;
    let engine =
        Engine::with_config(&text, run.language, config).context("invalid engine config")?;
    let mut host = HostAdapter::new(engine, MemorySurface::new(&text, run.selection));

    for key in &run.keys {
        let outcome = host.key_down(key)?;
        tracing::debug!(key = %key, handled = outcome.handled, "Replayed key");
        host.flush_selection();
    }

    let (_, surface) = host.into_parts();
    if run.json {
        let output = Output {
            text: surface.text(),
            selection: surface.selection(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", surface.text());
    }

    Ok(())
}
