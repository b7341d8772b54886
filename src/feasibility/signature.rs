//! I-moves and component signatures

use crate::io::configuration::SIGNATURE_HASH_SEED;
use crate::word::alphabet::Slot;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use xxhash_rust::xxh64::xxh64;

/// Companion mask of an I-move, bit `b` meaning companion `b` is redirected
pub type Mask = u8;

/// An alternate move: redirect the masked companions of `slot`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IMove {
    /// Move slot
    pub slot: Slot,
    /// Redirected companions
    pub mask: Mask,
}

impl IMove {
    /// Pair a slot with a mask
    pub const fn new(slot: Slot, mask: Mask) -> Self {
        Self { slot, mask }
    }
}

impl fmt::Display for IMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot, self.mask)
    }
}

/// Reason an I-move token could not be parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IMoveParseError(pub String);

impl fmt::Display for IMoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed I-move '{}', expected slot:mask", self.0)
    }
}

impl std::error::Error for IMoveParseError {}

impl FromStr for IMove {
    type Err = IMoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (slot, mask) = token
            .split_once(':')
            .ok_or_else(|| IMoveParseError(token.to_string()))?;
        let malformed =
            |error: std::num::ParseIntError| IMoveParseError(format!("{token} ({error})"));
        Ok(Self {
            slot: slot.parse().map_err(malformed)?,
            mask: mask.parse().map_err(malformed)?,
        })
    }
}

/// Every I-move legal from a state, ordered by slot then mask
///
/// Two states are in the same component exactly when their signatures are
/// equal, so the signature is the identity of a component-graph node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    moves: Vec<IMove>,
}

impl Signature {
    /// Wrap an already ordered list of I-moves
    pub const fn new(moves: Vec<IMove>) -> Self {
        Self { moves }
    }

    /// I-moves in signature order
    pub fn moves(&self) -> &[IMove] {
        &self.moves
    }

    /// Iterate I-moves in signature order
    pub fn iter(&self) -> std::slice::Iter<'_, IMove> {
        self.moves.iter()
    }

    /// Number of I-moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// A component with no neighbour
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Fixed-seed xxHash64 of the slot/mask sequence
    pub fn content_hash(&self) -> u64 {
        let mut bytes = Vec::with_capacity(self.moves.len() * 9);
        for imove in &self.moves {
            bytes.extend_from_slice(&imove.slot.to_le_bytes());
            bytes.push(imove.mask);
        }
        xxh64(&bytes, SIGNATURE_HASH_SEED)
    }
}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a IMove;
    type IntoIter = std::slice::Iter<'a, IMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, imove) in self.moves.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{imove}")?;
        }
        Ok(())
    }
}
