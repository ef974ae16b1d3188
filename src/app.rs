//! The frame loop: poll input, update the controller, render, pace.

use crate::config::Config;
use crate::game::{GameController, SecretSource};
use crate::ui::{Control, Frame, InputEvent};
use anyhow::Context;
use log::{debug, info};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Platform side of the loop: where events come from and frames go.
pub trait Backend {
    /// Every event that arrived since the last call, oldest first.
    /// Must not block.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Keeps frames at least `interval` apart.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    frame_start: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time left in the current frame, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.interval.checked_sub(self.frame_start.elapsed())
    }

    /// Sleep out the rest of the frame and start the next one.
    pub fn tick(&mut self) {
        if let Some(rest) = self.remaining() {
            thread::sleep(rest);
        }
        self.frame_start = Instant::now();
        self.frames += 1;
    }
}

/// Run frames until the player quits.
pub fn run<B, R>(
    backend: &mut B,
    controller: &mut GameController<R>,
    config: &Config,
) -> anyhow::Result<()>
where
    B: Backend,
    R: SecretSource,
{
    let mut clock = FrameClock::new(config.frame_interval());
    info!("frame loop started at {} fps", config.frame_rate);

    loop {
        let events = backend.poll_events().context("reading input")?;
        if !events.is_empty() {
            debug!("frame {}: {} event(s)", clock.frames(), events.len());
        }
        if controller.handle_events(&events) == Control::Quit {
            break;
        }

        backend
            .present(&controller.frame())
            .context("drawing frame")?;
        clock.tick();
    }

    info!("frame loop stopped after {} frames", clock.frames());
    Ok(())
}
