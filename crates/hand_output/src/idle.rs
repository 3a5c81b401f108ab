//! Rotation of idle animations played while no game round is active.

use std::sync::Arc;
use std::time::Duration;

use hand_protocol::Command;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, warn};

use crate::animation::{FingerWave, GestureCycle, IdleAnimation, WristTurn};
use crate::config::HandSettings;
use crate::encoder::CommandEncoder;
use crate::error::OutputError;

struct RotationState {
    variants: Vec<Box<dyn IdleAnimation>>,
    /// Index of the variant currently mid-animation; `None` while idle mode
    /// is off.
    current: Option<usize>,
    rotation: Option<JoinHandle<()>>,
}

/// Owns the animation rotation and the timer driving it. At most one
/// variant is mid-animation at any time: every rotation tick stops the
/// active variant before starting the next, regardless of whether the
/// variant's own timer already ran out.
pub struct IdleScheduler {
    encoder: CommandEncoder,
    interval: Duration,
    state: Arc<Mutex<RotationState>>,
}

impl IdleScheduler {
    /// Builds the default rotation. The rotation interval must exceed any
    /// single variant's natural run.
    pub fn new(encoder: CommandEncoder, settings: &HandSettings) -> Self {
        let variants: Vec<Box<dyn IdleAnimation>> = vec![
            Box::new(WristTurn),
            Box::new(GestureCycle::new(settings.variant_tick)),
            Box::new(FingerWave::new(settings.variant_tick)),
        ];
        Self {
            encoder,
            interval: settings.rotation_interval,
            state: Arc::new(Mutex::new(RotationState {
                variants,
                current: None,
                rotation: None,
            })),
        }
    }

    /// Enter idle mode: pose the hand neutral right away, then rotate
    /// through the variants on the rotation timer. Idempotent while the
    /// rotation is already running.
    pub async fn start_idling(&self) -> Result<(), OutputError> {
        let mut state = self.state.lock().await;
        if state.rotation.is_some() {
            return Ok(());
        }
        self.encoder.send(Command::NEUTRAL).await?;

        let encoder = self.encoder.clone();
        let shared = Arc::clone(&self.state);
        let period = self.interval;
        state.rotation = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut state = shared.lock().await;
                if let Some(active) = state.current {
                    if let Err(err) = state.variants[active].stop(&encoder).await {
                        warn!(error = %err, "idle: failed to stop animation");
                    }
                }
                let next = match state.current {
                    Some(active) => (active + 1) % state.variants.len(),
                    None => 0,
                };
                state.current = Some(next);
                debug!(animation = state.variants[next].name(), "idle: rotating");
                if let Err(err) = state.variants[next].start(&encoder).await {
                    warn!(error = %err, "idle: failed to start animation");
                }
            }
        }));
        Ok(())
    }

    /// Leave idle mode, halting whichever animation is running. Idempotent;
    /// calling it while already stopped emits nothing.
    pub async fn stop_idling(&self) -> Result<(), OutputError> {
        let mut state = self.state.lock().await;
        if let Some(rotation) = state.rotation.take() {
            rotation.abort();
        }
        if let Some(active) = state.current.take() {
            state.variants[active].stop(&self.encoder).await?;
        }
        Ok(())
    }
}
