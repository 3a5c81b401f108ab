//! Single-byte command emission.

use std::sync::Arc;

use hand_protocol::Command;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::OutputError;
use crate::transport::Transport;

/// Cloneable handle over the exclusively-owned transport. Every send is one
/// synchronous byte write under the lock; no buffering, no batching, no
/// acknowledgment. The mutex serializes animation timer tasks against
/// externally-triggered sends.
#[derive(Clone)]
pub struct CommandEncoder {
    transport: Arc<Mutex<Box<dyn Transport>>>,
}

impl CommandEncoder {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Arc::new(Mutex::new(transport)),
        }
    }

    pub async fn send(&self, command: Command) -> Result<(), OutputError> {
        let code = command.code();
        let mut transport = self.transport.lock().await;
        transport
            .write_byte(code)
            .map_err(|source| OutputError::TransportWrite { code, source })?;
        debug!(code, ?command, "serial: sent command");
        Ok(())
    }
}
