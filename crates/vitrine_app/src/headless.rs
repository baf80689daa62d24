//! Headless runtime primitives for deterministic execution.

use crate::config::{DemoAction, DemoStep};
use crate::engine::Engine;
use anyhow::{bail, Result};
use vitrine_core::{ControlId, FrameClock, InputEvent, ManualClock};

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Probe sampling interval in frames (1 = every frame).
    pub probe_every_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 600,
            tick_ms: 16,
            probe_every_frames: 4,
        }
    }
}

/// Frame context passed to headless probe callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub elapsed_ms: u64,
}

/// Run a fixed frame budget against an engine, applying the scripted
/// demo steps as their times come due and probing on the configured
/// interval.
pub fn run<F>(
    engine: &mut Engine,
    cfg: HeadlessRunConfig,
    script: &[DemoStep],
    mut probe: F,
) -> Result<()>
where
    F: FnMut(&Engine, &HeadlessContext),
{
    if cfg.max_frames == 0 {
        bail!("headless max_frames must be > 0");
    }
    if cfg.tick_ms == 0 {
        bail!("headless tick_ms must be > 0");
    }
    if cfg.probe_every_frames == 0 {
        bail!("headless probe_every_frames must be > 0");
    }

    let mut steps: Vec<DemoStep> = script.to_vec();
    steps.sort_by_key(|step| step.at_ms);
    let mut next_step = 0;

    let mut clock = ManualClock::new();
    for frame in 0..cfg.max_frames {
        let elapsed_ms = clock.now_ms() as u64;

        while next_step < steps.len() && steps[next_step].at_ms <= elapsed_ms {
            engine.dispatch(action_event(steps[next_step].action));
            next_step += 1;
        }

        engine.tick(clock.tick(cfg.tick_ms as f64));

        if frame % cfg.probe_every_frames == 0 {
            probe(
                engine,
                &HeadlessContext {
                    frame_index: frame,
                    elapsed_ms,
                },
            );
        }
    }

    Ok(())
}

/// Like [`run`], but paced against the wall clock: each frame sleeps out
/// the tick interval and advances by the real elapsed time.
pub fn run_realtime<F>(
    engine: &mut Engine,
    cfg: HeadlessRunConfig,
    script: &[DemoStep],
    mut probe: F,
) -> Result<()>
where
    F: FnMut(&Engine, &HeadlessContext),
{
    if cfg.max_frames == 0 {
        bail!("realtime max_frames must be > 0");
    }
    if cfg.tick_ms == 0 {
        bail!("realtime tick_ms must be > 0");
    }

    let mut steps: Vec<DemoStep> = script.to_vec();
    steps.sort_by_key(|step| step.at_ms);
    let mut next_step = 0;

    let mut clock = FrameClock::new();
    let mut elapsed_ms = 0.0f64;
    for frame in 0..cfg.max_frames {
        std::thread::sleep(std::time::Duration::from_millis(cfg.tick_ms));
        let dt = clock.tick();
        elapsed_ms += dt;

        while next_step < steps.len() && steps[next_step].at_ms as f64 <= elapsed_ms {
            engine.dispatch(action_event(steps[next_step].action));
            next_step += 1;
        }

        engine.tick(dt);

        if frame % cfg.probe_every_frames.max(1) == 0 {
            probe(
                engine,
                &HeadlessContext {
                    frame_index: frame,
                    elapsed_ms: elapsed_ms as u64,
                },
            );
        }
    }

    Ok(())
}

fn action_event(action: DemoAction) -> InputEvent {
    let target = match action {
        DemoAction::SelectLeft => ControlId::ThemeLeft,
        DemoAction::SelectRight => ControlId::ThemeRight,
        DemoAction::Reset => ControlId::ResetChoice,
        DemoAction::NavInicio => ControlId::NavInicio,
        DemoAction::NavSobre => ControlId::NavSobre,
        DemoAction::NavTrailer => ControlId::NavTrailer,
        DemoAction::TrailerPrev => ControlId::TrailerPrev,
        DemoAction::TrailerNext => ControlId::TrailerNext,
    };
    InputEvent::Click { target }
}
