//! Idle animation variants. Each variant is a self-contained behavior with
//! the same start/stop surface; the scheduler never inspects which one is
//! running. The variants differ in termination: one-shot, self-terminating
//! after a fixed sequence, and running until stopped.

use std::time::Duration;

use async_trait::async_trait;
use hand_protocol::{Command, Finger, FingerAction, Move};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::warn;

use crate::encoder::CommandEncoder;
use crate::error::OutputError;

/// One unit of idle behavior. `start` must only be called while no timer is
/// owned (the scheduler always stops before starting); `stop` is idempotent
/// and safe to call on a variant that never started.
#[async_trait]
pub trait IdleAnimation: Send {
    fn name(&self) -> &'static str;

    async fn start(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError>;

    async fn stop(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError>;
}

/// Single wrist pulse. The whole animation is one command; no timer.
pub struct WristTurn;

#[async_trait]
impl IdleAnimation for WristTurn {
    fn name(&self) -> &'static str {
        "wrist_turn"
    }

    async fn start(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError> {
        encoder.send(Command::WristTurn).await
    }

    async fn stop(&mut self, _encoder: &CommandEncoder) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Plays rock, paper, scissors once per start, one pose per tick, then
/// stops itself.
pub struct GestureCycle {
    tick: Duration,
    timer: Option<JoinHandle<()>>,
}

impl GestureCycle {
    pub fn new(tick: Duration) -> Self {
        Self { tick, timer: None }
    }
}

#[async_trait]
impl IdleAnimation for GestureCycle {
    fn name(&self) -> &'static str {
        "gesture_cycle"
    }

    async fn start(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError> {
        debug_assert!(self.timer.is_none(), "gesture cycle already running");
        encoder.send(Command::Move(Move::Rock)).await?;
        let encoder = encoder.clone();
        let tick = self.tick;
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            // Remaining steps of the fixed sequence; the task exits after
            // the last one, so the cycle runs exactly once per start.
            for mv in [Move::Paper, Move::Scissors] {
                ticker.tick().await;
                if let Err(err) = encoder.send(Command::Move(mv)).await {
                    warn!(error = %err, "idle: gesture cycle aborted");
                    return;
                }
            }
        }));
        Ok(())
    }

    async fn stop(&mut self, _encoder: &CommandEncoder) -> Result<(), OutputError> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        Ok(())
    }
}

/// Ripples the fingers: each tick relaxes the current finger and curls the
/// next one, wrapping from pinky back to thumb, forever until stopped.
pub struct FingerWave {
    tick: Duration,
    timer: Option<JoinHandle<()>>,
}

impl FingerWave {
    pub fn new(tick: Duration) -> Self {
        Self { tick, timer: None }
    }
}

#[async_trait]
impl IdleAnimation for FingerWave {
    fn name(&self) -> &'static str {
        "finger_wave"
    }

    async fn start(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError> {
        debug_assert!(self.timer.is_none(), "finger wave already running");
        encoder.send(Command::NEUTRAL).await?;
        let encoder = encoder.clone();
        let tick = self.tick;
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            let mut finger = Finger::Thumb;
            loop {
                ticker.tick().await;
                let next = finger.next();
                let pair = [
                    Command::Finger {
                        finger,
                        action: FingerAction::Relax,
                    },
                    Command::Finger {
                        finger: next,
                        action: FingerAction::Curl,
                    },
                ];
                for command in pair {
                    if let Err(err) = encoder.send(command).await {
                        warn!(error = %err, "idle: finger wave aborted");
                        return;
                    }
                }
                finger = next;
            }
        }));
        Ok(())
    }

    async fn stop(&mut self, encoder: &CommandEncoder) -> Result<(), OutputError> {
        // Only a running wave needs the hand returned to neutral; skipping
        // the send otherwise keeps stop idempotent.
        if let Some(timer) = self.timer.take() {
            timer.abort();
            encoder.send(Command::NEUTRAL).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
