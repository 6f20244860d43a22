// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lexwatch::replay::Command;
use lexwatch::{
    replay_with_progress, DocId, EditCheck, Engine, MatcherConfig, MatchingCore, ReferenceEngine,
    ReplaySummary,
};

mod cli;
use cli::{display, Cli, Commands, EngineKind, QuerySpec};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command) {
        display::print_error(&e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Replay {
            file,
            engine,
            config,
            workers,
            no_parallel,
            verify_edits,
            progress,
        } => {
            let mut config = match config {
                Some(path) => MatcherConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => MatcherConfig::default(),
            };
            if let Some(workers) = workers {
                config.parallel.workers = workers;
            }
            if no_parallel {
                config.parallel.enabled = false;
            }
            if verify_edits {
                config.edit_check = EditCheck::Levenshtein;
            }
            config.validate().context("invalid configuration")?;

            run_replay(&file, engine, config, progress)
        }
        Commands::Match { queries, document } => run_match(&queries, &document),
        Commands::Stats { file } => run_stats(&file),
    }
}

fn run_replay(path: &Path, kind: EngineKind, config: MatcherConfig, progress: bool) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let total = file.metadata().map(|m| m.len()).unwrap_or(0);
    let reader = BufReader::new(file);

    let (name, mut core) = match kind {
        EngineKind::Indexed => ("indexed", Box::new(Engine::with_config(config)) as Box<dyn MatchingCore>),
        EngineKind::Reference => ("reference", Box::new(ReferenceEngine::new()) as Box<dyn MatchingCore>),
    };
    tracing::info!(file = %path.display(), engine = name, ?config, "replay starting");

    let start = Instant::now();
    let outcome = replay_reporting(core.as_mut(), reader, total, progress);
    let elapsed = start.elapsed();

    match outcome {
        Ok(summary) => {
            display::print_replay_passed(name, &summary, elapsed);
            Ok(())
        }
        Err(err) => Err(err).with_context(|| format!("{} engine failed on {}", name, path.display())),
    }
}

#[cfg(feature = "parallel")]
fn replay_reporting(
    core: &mut dyn MatchingCore,
    reader: impl BufRead,
    total: u64,
    progress: bool,
) -> Result<ReplaySummary, lexwatch::ReplayError> {
    use indicatif::{ProgressBar, ProgressStyle};

    if !(progress && display::progress_visible()) {
        return replay_with_progress(core, reader, |_| {});
    }

    let bar = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {bytes}/{total_bytes} {msg}")
    {
        bar.set_style(style.progress_chars("━━╸"));
    }
    bar.set_prefix("Replaying");

    let outcome = replay_with_progress(core, reader, |consumed| bar.set_position(consumed));
    bar.finish_and_clear();
    outcome
}

#[cfg(not(feature = "parallel"))]
fn replay_reporting(
    core: &mut dyn MatchingCore,
    reader: impl BufRead,
    _total: u64,
    progress: bool,
) -> Result<ReplaySummary, lexwatch::ReplayError> {
    if progress {
        tracing::warn!("progress bar needs the `parallel` feature");
    }
    replay_with_progress(core, reader, |_| {})
}

fn run_match(queries: &[QuerySpec], document: &str) -> Result<()> {
    let mut engine = Engine::new();
    for query in queries {
        engine
            .start_query(query.id, &query.keywords, query.mode)
            .with_context(|| format!("starting query {}", query.id))?;
    }

    engine.match_document(DocId(0), document)?;
    let result = engine.get_next_avail_res()?;
    println!("{}", serde_json::to_string(&result.query_ids)?);
    Ok(())
}

fn run_stats(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut engine = Engine::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let applied = match Command::parse(i + 1, &line)? {
            Some(Command::Start { id, mode, keywords }) => engine.start_query(id, &keywords, mode),
            Some(Command::End { id }) => engine.end_query(id),
            Some(Command::Match { .. } | Command::Retrieve { .. }) | None => continue,
        };
        if let Err(err) = applied {
            bail!("line {}: {}", i + 1, err);
        }
    }

    display::print_stats(&engine.stats())?;
    Ok(())
}
