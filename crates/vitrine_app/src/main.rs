//! Vitrine CLI
//!
//! `vitrine run` drives the interaction engine headlessly (optionally
//! from a scripted config) and logs the observable state surface;
//! `vitrine inspect` dumps the stylesheet contract.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vitrine_app::{headless, Engine, HeadlessRunConfig, VitrineConfig};
use vitrine_stage::contract::{class, duration, prop};

#[derive(Parser)]
#[command(name = "vitrine", about = "Themed landing-page interaction engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the engine headlessly for a fixed frame budget.
    Run {
        /// Path to a vitrine.toml config.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the configured frame budget.
        #[arg(long)]
        frames: Option<u32>,
        /// Override the configured tick length.
        #[arg(long)]
        tick_ms: Option<u64>,
        /// Pace frames against the wall clock instead of running
        /// as fast as possible.
        #[arg(long)]
        realtime: bool,
    },
    /// Print the stylesheet contract.
    Inspect {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            frames,
            tick_ms,
            realtime,
        } => run(config, frames, tick_ms, realtime),
        Command::Inspect { json } => inspect(json),
    }
}

fn run(
    config: Option<PathBuf>,
    frames: Option<u32>,
    tick_ms: Option<u64>,
    realtime: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => VitrineConfig::load(&path)?,
        None => VitrineConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.filter.clone())),
        )
        .init();

    let run_config = HeadlessRunConfig {
        max_frames: frames.unwrap_or(config.engine.max_frames),
        tick_ms: tick_ms.unwrap_or(config.engine.tick_ms),
        ..Default::default()
    };

    tracing::info!(
        frames = run_config.max_frames,
        tick_ms = run_config.tick_ms,
        steps = config.demo.steps.len(),
        "starting headless run"
    );

    let mut engine = Engine::new()?;
    let probe = |engine: &Engine, ctx: &vitrine_app::HeadlessContext| {
        let root = engine.stage().root();
        tracing::info!(
            frame = ctx.frame_index,
            elapsed_ms = ctx.elapsed_ms,
            first_stop = engine.stage().percent_value(root, prop::BG_PRIMEIRA_COR) as f64,
            second_stop = engine.stage().percent_value(root, prop::BG_SEGUNDA_COR) as f64,
            theme = ?engine.theme().current_theme(),
            locked = engine.theme().is_locked(),
            animating = engine.theme().is_animating(),
            ring_rotation = engine.ring().rotation() as f64,
            "probe"
        );
    };

    if realtime {
        headless::run_realtime(&mut engine, run_config, &config.demo.steps, probe)?;
    } else {
        headless::run(&mut engine, run_config, &config.demo.steps, probe)?;
    }

    Ok(())
}

fn inspect(json: bool) -> Result<()> {
    let contract = serde_json::json!({
        "classes": [
            class::TEMA_ESQUERDO,
            class::TEMA_DIREITO,
            class::ANIMATING,
            class::ANIMATIONS_COMPLETE,
            class::HIDDEN,
            class::EXITING,
            class::EXIT_COMPLETE,
            class::SLIDE_OUT_LEFT,
            class::SLIDE_OUT_RIGHT,
            class::VS_HIDDEN,
            class::H2_HIDDEN,
            class::IS_LEFT,
            class::IS_CENTER,
            class::IS_RIGHT,
        ],
        "properties": [prop::BG_PRIMEIRA_COR, prop::BG_SEGUNDA_COR],
        "durations_ms": {
            "tween": duration::TWEEN_MS,
            "header_hide_grace": duration::HEADER_HIDE_GRACE_MS,
            "section_exit": duration::SECTION_EXIT_MS,
            "section_exit_settle": duration::SECTION_EXIT_SETTLE_MS,
            "theme_exit_complete": duration::THEME_EXIT_COMPLETE_MS,
            "input_reenable": duration::INPUT_REENABLE_MS,
            "hold_repeat": duration::HOLD_REPEAT_MS,
            "visibility_restore": duration::VISIBILITY_RESTORE_MS,
            "about_after_trailer": duration::ABOUT_AFTER_TRAILER_MS,
            "slider_init_delay": duration::SLIDER_INIT_DELAY_MS,
        },
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&contract)?);
    } else {
        println!("Vitrine stylesheet contract");
        println!("  classes:    {}", join(&contract["classes"]));
        println!("  properties: {}", join(&contract["properties"]));
        println!("  durations (ms):");
        if let Some(durations) = contract["durations_ms"].as_object() {
            for (name, value) in durations {
                println!("    {name}: {value}");
            }
        }
    }
    Ok(())
}

fn join(value: &serde_json::Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
