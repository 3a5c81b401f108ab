//! Wire protocol for the hand actuator: each command is exactly one signed
//! byte, no framing, no acknowledgment, no checksum. Codes 0-2 are the three
//! move poses, 3 turns the wrist, 4-13 are the per-finger curl/relax pairs.

use crate::domain::{Finger, FingerAction, Move};

/// First code of the finger pair block; pairs occupy codes 4..=13.
const FINGER_CODE_BASE: i8 = 4;

/// A single actuator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pose the whole hand as one of the game moves.
    Move(Move),
    /// Pulse the wrist motor once.
    WristTurn,
    /// Actuate a single finger.
    Finger { finger: Finger, action: FingerAction },
}

impl Command {
    /// Neutral/reset pose: the open hand.
    pub const NEUTRAL: Command = Command::Move(Move::Paper);

    /// The byte written to the wire for this command.
    pub fn code(self) -> i8 {
        match self {
            Command::Move(mv) => mv as i8,
            Command::WristTurn => 3,
            Command::Finger { finger, action } => finger_code(finger, action),
        }
    }
}

/// Wire code for one finger actuation. The `base + 2 * ordinal + offset`
/// arithmetic matches the actuator firmware and must not be changed.
pub fn finger_code(finger: Finger, action: FingerAction) -> i8 {
    FINGER_CODE_BASE + 2 * finger.ordinal() as i8 + action.offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_codes_match_firmware() {
        assert_eq!(Command::Move(Move::Rock).code(), 0);
        assert_eq!(Command::Move(Move::Paper).code(), 1);
        assert_eq!(Command::Move(Move::Scissors).code(), 2);
    }

    #[test]
    fn neutral_is_the_open_hand() {
        assert_eq!(Command::NEUTRAL.code(), 1);
    }

    #[test]
    fn wrist_turn_code_is_fixed() {
        assert_eq!(Command::WristTurn.code(), 3);
    }

    #[test]
    fn finger_pairs_cover_codes_4_through_13() {
        let mut codes = Vec::new();
        for finger in Finger::ALL {
            codes.push(finger_code(finger, FingerAction::Curl));
            codes.push(finger_code(finger, FingerAction::Relax));
        }
        assert_eq!(codes, (4..=13).collect::<Vec<i8>>());
    }

    #[test]
    fn curl_is_even_relax_is_odd() {
        for finger in Finger::ALL {
            assert_eq!(finger_code(finger, FingerAction::Curl) % 2, 0);
            assert_eq!(finger_code(finger, FingerAction::Relax) % 2, 1);
        }
    }

    #[test]
    fn finger_order_wraps_at_the_pinky() {
        assert_eq!(Finger::Thumb.next(), Finger::Index);
        assert_eq!(Finger::Pinky.next(), Finger::Thumb);
        assert_eq!(Finger::from_ordinal(7), Finger::Middle);
    }
}
