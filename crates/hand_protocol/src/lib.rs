//! Command and domain model shared between the hand output adapter and its
//! consumers. The wire encoding lives in [`protocol`]; the byte values are a
//! firmware contract and must stay stable.

pub mod domain;
pub mod protocol;

pub use domain::{Finger, FingerAction, Move};
pub use protocol::{finger_code, Command};
