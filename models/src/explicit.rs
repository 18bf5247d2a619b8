use serde::{Deserialize, Serialize};

/// Explicit-content level as reported on tracks and albums.
///
/// The wire representation is a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Explicit {
    NotExplicit,
    Explicit,
    Unknown,
    Edited,
    PartiallyExplicit,
    PartiallyUnknown,
    NoAdviceAvailable,
    PartiallyNoAdviceAvailable,
}

impl TryFrom<u8> for Explicit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Explicit::NotExplicit),
            1 => Ok(Explicit::Explicit),
            2 => Ok(Explicit::Unknown),
            3 => Ok(Explicit::Edited),
            4 => Ok(Explicit::PartiallyExplicit),
            5 => Ok(Explicit::PartiallyUnknown),
            6 => Ok(Explicit::NoAdviceAvailable),
            7 => Ok(Explicit::PartiallyNoAdviceAvailable),
            other => Err(format!("unknown explicit content level: {other}")),
        }
    }
}

impl From<Explicit> for u8 {
    fn from(value: Explicit) -> Self {
        match value {
            Explicit::NotExplicit => 0,
            Explicit::Explicit => 1,
            Explicit::Unknown => 2,
            Explicit::Edited => 3,
            Explicit::PartiallyExplicit => 4,
            Explicit::PartiallyUnknown => 5,
            Explicit::NoAdviceAvailable => 6,
            Explicit::PartiallyNoAdviceAvailable => 7,
        }
    }
}
