use serde::{Deserialize, Serialize};

/// One of the three game moves. A move doubles as a pose command; the open
/// hand ([`Move::Paper`]) serves as the neutral/reset pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

/// The five fingers of the hand, in wire-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const COUNT: usize = 5;

    pub const ALL: [Finger; Finger::COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Cyclic lookup; indexes past the pinky wrap back to the thumb.
    pub fn from_ordinal(ordinal: usize) -> Finger {
        Self::ALL[ordinal % Self::COUNT]
    }

    /// The neighboring finger, wrapping pinky back to thumb.
    pub fn next(self) -> Finger {
        Self::from_ordinal(self.ordinal() + 1)
    }
}

/// What to do with a single finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerAction {
    Curl,
    Relax,
}

impl FingerAction {
    /// Offset inside a finger's wire-code pair: curl on the even code,
    /// relax on the odd one.
    pub fn offset(self) -> i8 {
        match self {
            FingerAction::Curl => 0,
            FingerAction::Relax => 1,
        }
    }
}
