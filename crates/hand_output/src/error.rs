use thiserror::Error;

/// Failures surfaced by the output adapter. There is no retry or
/// reconnection at this layer; the game-flow engine decides whether to
/// abort or try again.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The serial channel could not be opened. Fatal for this connection.
    #[error("failed to open serial port {port}: {source}")]
    TransportOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },
    /// A command byte could not be written. Surfaced synchronously to
    /// whichever operation triggered the send.
    #[error("failed to write command byte {code}: {source}")]
    TransportWrite {
        code: i8,
        #[source]
        source: std::io::Error,
    },
}
