//! Byte-oriented transport to the actuator.

use std::io::{self, Write};
use std::time::Duration;

use tracing::info;

use crate::error::OutputError;

/// Write timeout on the underlying port. Commands are single bytes; a stall
/// longer than this means the link is gone, and hung writes are not
/// recovered here.
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// An open channel that accepts one command byte at a time. Implemented by
/// the real serial port and by the test doubles.
pub trait Transport: Send {
    fn write_byte(&mut self, value: i8) -> io::Result<()>;
}

/// Serial link to the physical hand. The port is released when the
/// transport is dropped.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    pub fn open(path: &str, baud: u32) -> Result<Self, OutputError> {
        let port = serialport::new(path, baud)
            .timeout(WRITE_TIMEOUT)
            .open()
            .map_err(|source| OutputError::TransportOpen {
                port: path.to_string(),
                source,
            })?;
        info!(port = path, baud, "serial: port opened");
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn write_byte(&mut self, value: i8) -> io::Result<()> {
        self.port.write_all(&[value as u8])?;
        self.port.flush()
    }
}
