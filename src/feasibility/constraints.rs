//! Per-slot α×α constraint matrices restricting I-move masks

use crate::word::alphabet::{Alphabet, Slot};
use ndarray::Array3;

/// One boolean α×α matrix per move slot
///
/// Entry `(slot, i, j)` forbids any mask that redirects companion `i` while
/// keeping companion `j`: a cycle holding a single word enters the slot
/// through `i·slot` and leaves through `slot·j`.
#[derive(Clone, Debug)]
pub struct ConstraintMatrix {
    alpha: usize,
    entries: Array3<bool>,
}

impl ConstraintMatrix {
    /// All-clear matrices for every slot of the alphabet
    pub fn new(alphabet: &Alphabet) -> Self {
        let alpha = alphabet.alpha() as usize;
        Self {
            alpha,
            entries: Array3::from_elem((alphabet.nb_slots() as usize, alpha, alpha), false),
        }
    }

    /// Number of slots covered
    pub fn nb_slots(&self) -> usize {
        self.entries.dim().0
    }

    /// Clear every entry
    pub fn clear(&mut self) {
        self.entries.fill(false);
    }

    /// Forbid masks redirecting `from` while keeping `to`
    pub fn mark(&mut self, slot: Slot, from: u64, to: u64) {
        if let Some(entry) = self
            .entries
            .get_mut((slot as usize, from as usize, to as usize))
        {
            *entry = true;
        }
    }

    /// Entry `(from, to)` of a slot
    pub fn is_marked(&self, slot: Slot, from: u64, to: u64) -> bool {
        self.entries
            .get((slot as usize, from as usize, to as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Number of marked entries of a slot
    pub fn marked_count(&self, slot: Slot) -> usize {
        (0..self.alpha as u64)
            .flat_map(|from| (0..self.alpha as u64).map(move |to| (from, to)))
            .filter(|&(from, to)| self.is_marked(slot, from, to))
            .count()
    }

    /// No marked `(i, j)` has bit `i` set and bit `j` clear
    pub fn permits(&self, slot: Slot, mask: u8) -> bool {
        for from in 0..self.alpha as u64 {
            if mask & (1u8 << from) == 0 {
                continue;
            }
            for to in 0..self.alpha as u64 {
                if mask & (1u8 << to) == 0 && self.is_marked(slot, from, to) {
                    return false;
                }
            }
        }
        true
    }
}
