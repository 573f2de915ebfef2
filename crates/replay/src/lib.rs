//! hate-replay - portable replay strings.
//!
//! Moves are run-length packed into nybbles, two per byte, and the bytes
//! are rendered in one of three alphabets. [`decode`] recognises all of
//! them without being told which.

pub mod base2048;
pub mod base65536;
pub mod hex;
pub mod runs;

use std::fmt;
use std::str::FromStr;

use hate_core::Move;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("replay is not hex, base65536 or base2048")]
    UnrecognisedEncoding,
    #[error("unknown replay encoding {0:?}")]
    UnknownEncodingName(String),
    #[error("bad base65536 replay: {0}")]
    Base65536(#[from] ::base65536::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Uppercase hex digits in groups of four.
    Hex,
    /// qntm's base65536, two bytes per code point.
    #[default]
    Base65536,
    /// Eleven bits per Hangul code point.
    Base2048,
}

impl Encoding {
    /// Detection order.
    pub const ALL: [Encoding; 3] = [Encoding::Hex, Encoding::Base65536, Encoding::Base2048];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base65536 => "base65536",
            Encoding::Base2048 => "base2048",
        }
    }

    fn matches(self, s: &str) -> bool {
        match self {
            Encoding::Hex => hex::matches(s),
            Encoding::Base65536 => base65536::matches(s),
            Encoding::Base2048 => base2048::matches(s),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| ReplayError::UnknownEncodingName(s.to_string()))
    }
}

/// Pack and render. An odd number of runs gets a trailing single Left,
/// so `encode` is not injective: a replay ending in one Left after an
/// even number of runs encodes like the same replay without it.
pub fn encode(moves: &[Move], encoding: Encoding) -> String {
    let bytes = runs::pack(&runs::to_units(moves));
    match encoding {
        Encoding::Hex => hex::encode(&bytes),
        Encoding::Base65536 => base65536::encode(&bytes),
        Encoding::Base2048 => base2048::encode(&bytes),
    }
}

/// First alphabet that accepts every character, in [`Encoding::ALL`]
/// order. The empty string is hex.
pub fn detect(s: &str) -> Option<Encoding> {
    Encoding::ALL.into_iter().find(|e| e.matches(s))
}

/// Decode whichever alphabet `s` is written in. A padding unit comes
/// back as a trailing Left; short input just yields fewer moves.
pub fn decode(s: &str) -> Result<Vec<Move>, ReplayError> {
    let units = match detect(s).ok_or(ReplayError::UnrecognisedEncoding)? {
        Encoding::Hex => hex::decode_units(s),
        Encoding::Base65536 => runs::unpack(&base65536::decode(s)?),
        Encoding::Base2048 => runs::unpack(&base2048::decode(s)),
    };
    Ok(runs::from_units(&units))
}
