//! Output adapter driving a five-finger robotic hand over a serial link.
//!
//! Translates game lifecycle events from the external game-flow engine into
//! single-byte actuator commands, and plays a rotation of idle animations
//! while no round is active. The engine talks to [`HandController`] through
//! the [`GameOutput`] capability; game rules, matchmaking and scoring stay
//! on the engine's side.

use async_trait::async_trait;
use hand_protocol::{Command, Move};
use tokio::sync::Mutex;
use tracing::{debug, info};

pub mod animation;
pub mod config;
pub mod encoder;
pub mod error;
mod idle;
pub mod transport;

pub use config::{load_settings, HandSettings};
pub use encoder::CommandEncoder;
pub use error::OutputError;
pub use idle::IdleScheduler;
pub use transport::{SerialTransport, Transport};

/// Pose sent when a round begins: the closed fist held through the
/// countdown shakes.
const START_POSE: Command = Command::Move(Move::Rock);

/// Where the controller is between games. Active and Idle are mutually
/// exclusive; entering Active always stops idle animation first. There is
/// no disconnected mode: a controller only exists while its connection
/// does, and [`HandController::shutdown`] consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerMode {
    Active,
    Idle,
}

/// Output capability consumed by the game-flow engine. Operations are
/// fire-and-forget from the engine's point of view; errors surface to the
/// caller and are never retried or dropped here.
#[async_trait]
pub trait GameOutput: Send + Sync {
    /// Begin idle animation between games.
    async fn enter_idle(&self) -> Result<(), OutputError>;

    /// Countdown pulse cue; the wrist turns regardless of the phase.
    async fn on_countdown_tick(&self, remaining: u8) -> Result<(), OutputError>;

    async fn on_move_chosen(&self, action: Move) -> Result<(), OutputError>;

    async fn on_robot_win(&self) -> Result<(), OutputError>;

    async fn on_human_win(&self) -> Result<(), OutputError>;

    async fn on_tie(&self) -> Result<(), OutputError>;

    /// No physical feedback for score changes.
    async fn on_score_update(&self, robot: u32, human: u32) -> Result<(), OutputError>;

    async fn on_game_start(&self) -> Result<(), OutputError>;

    async fn on_game_stop(&self) -> Result<(), OutputError>;
}

/// One physical connection to the hand. Constructed once per connection,
/// torn down exactly once by [`shutdown`](HandController::shutdown).
pub struct HandController {
    encoder: CommandEncoder,
    idle: IdleScheduler,
    mode: Mutex<ControllerMode>,
}

impl HandController {
    /// Opens the serial port and prepares the actuator: waits the settle
    /// delay for the firmware to boot, then commands the neutral pose.
    /// Must complete before any other operation is issued.
    pub async fn connect(settings: HandSettings) -> Result<Self, OutputError> {
        let transport = SerialTransport::open(&settings.port, settings.baud)?;
        Self::with_transport(Box::new(transport), settings).await
    }

    /// Like [`connect`](HandController::connect), over an already-open
    /// transport.
    pub async fn with_transport(
        transport: Box<dyn Transport>,
        settings: HandSettings,
    ) -> Result<Self, OutputError> {
        let encoder = CommandEncoder::new(transport);
        info!(
            settle_ms = settings.settle_delay.as_millis() as u64,
            "hand: waiting for actuator firmware to settle"
        );
        tokio::time::sleep(settings.settle_delay).await;
        encoder.send(Command::NEUTRAL).await?;
        let idle = IdleScheduler::new(encoder.clone(), &settings);
        Ok(Self {
            encoder,
            idle,
            mode: Mutex::new(ControllerMode::Active),
        })
    }

    pub async fn mode(&self) -> ControllerMode {
        *self.mode.lock().await
    }

    /// Tears the connection down: stops idle animation, returns the hand
    /// to neutral, and releases the port. Consuming `self` makes a second
    /// teardown a compile error rather than undefined behavior.
    pub async fn shutdown(self) -> Result<(), OutputError> {
        self.idle.stop_idling().await?;
        self.encoder.send(Command::NEUTRAL).await?;
        info!("hand: connection closed");
        Ok(())
    }
}

#[async_trait]
impl GameOutput for HandController {
    async fn enter_idle(&self) -> Result<(), OutputError> {
        self.idle.start_idling().await?;
        *self.mode.lock().await = ControllerMode::Idle;
        Ok(())
    }

    async fn on_countdown_tick(&self, remaining: u8) -> Result<(), OutputError> {
        debug!(remaining, "hand: countdown pulse");
        self.encoder.send(Command::WristTurn).await
    }

    async fn on_move_chosen(&self, action: Move) -> Result<(), OutputError> {
        debug!(?action, "hand: move chosen");
        self.encoder.send(Command::NEUTRAL).await
    }

    async fn on_robot_win(&self) -> Result<(), OutputError> {
        self.encoder.send(Command::NEUTRAL).await
    }

    async fn on_human_win(&self) -> Result<(), OutputError> {
        self.encoder.send(Command::NEUTRAL).await
    }

    async fn on_tie(&self) -> Result<(), OutputError> {
        self.encoder.send(Command::NEUTRAL).await
    }

    async fn on_score_update(&self, robot: u32, human: u32) -> Result<(), OutputError> {
        debug!(robot, human, "hand: score update ignored");
        Ok(())
    }

    async fn on_game_start(&self) -> Result<(), OutputError> {
        // Idle animation must be fully stopped before the pose byte goes
        // out, so no idle command ever follows a game command on the wire.
        self.idle.stop_idling().await?;
        *self.mode.lock().await = ControllerMode::Active;
        self.encoder.send(START_POSE).await
    }

    async fn on_game_stop(&self) -> Result<(), OutputError> {
        self.encoder.send(Command::NEUTRAL).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
