//! `pillsplit` - replay a pointer script against a canvas.
//!
//! ```text
//! pillsplit [--settings <settings.json>] [<script.jsonl>]
//! ```
//!
//! Each script line is one event:
//! `{"kind": "down", "x": 10, "y": 10, "at_ms": 0}` with an optional
//! `"scope": "window"`. Reads stdin when no script is given and prints the
//! final frame as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use pillsplit::clock::ManualClock;
use pillsplit::{CanvasSettings, EventScope, PillCanvas, Point, PointerEvent, PointerKind};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct ScriptLine {
    kind: PointerKind,
    x: f32,
    y: f32,
    #[serde(default)]
    at_ms: u64,
    #[serde(default)]
    scope: EventScope,
}

impl ScriptLine {
    fn event(&self) -> PointerEvent {
        PointerEvent {
            kind: self.kind,
            position: Point::new(self.x, self.y),
            scope: self.scope,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pillsplit",
    about = "Replay a pointer script against a pill canvas and print the final frame",
    version
)]
struct Cli {
    /// Canvas settings JSON; defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// JSON-lines event script; read from stdin when omitted
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pillsplit=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let settings = match &args.settings {
        Some(path) => CanvasSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CanvasSettings::default(),
    };

    let clock = ManualClock::new();
    let mut canvas = PillCanvas::builder(settings)
        .with_clock(clock.clone())
        .build()
        .context("invalid canvas settings")?;

    let input: Box<dyn Read> = match &args.script {
        Some(path) => Box::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let mut replayed = 0usize;
    for (n, line) in BufReader::new(input).lines().enumerate() {
        let line = line.context("failed to read script")?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: ScriptLine = serde_json::from_str(&line)
            .with_context(|| format!("bad event on line {}", n + 1))?;
        clock.set(entry.at_ms);
        canvas.handle_event(entry.event());
        replayed += 1;
    }

    info!(events = replayed, shapes = canvas.shapes().len(), "Replay finished");
    println!("{}", serde_json::to_string_pretty(&canvas.frame())?);
    Ok(())
}
