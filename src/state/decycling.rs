//! Decycling-set state: validation, F-moves and move-list derivation
//!
//! A state is one word per rotation orbit. Seen as a marked graph, words are
//! places holding a token when present and slots are transitions: the move of
//! a slot consumes its α left companions and produces its α right companions.
//! A state is decycling exactly when every slot can fire, which is what
//! [`DecyclingState::compute_move_list`] checks.

use crate::io::error::{DecyclingError, Result, invalid_candidate};
use crate::state::membership::{Membership, MembershipVector};
use crate::word::alphabet::{Alphabet, Slot, Word};
use crate::word::orbit::OrbitTable;
use bitvec::prelude::*;
use tracing::debug;

/// Ordering of every slot such that applying them in turn is always valid
pub type MoveList = Vec<Slot>;

/// Membership of every word in a (candidate) minimal decycling set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecyclingState {
    alphabet: Alphabet,
    members: MembershipVector,
}

impl DecyclingState {
    /// Validate a candidate word list and build its state
    ///
    /// # Errors
    ///
    /// Returns `InvalidCandidate` if the list does not hold exactly one word
    /// per rotation orbit
    pub fn from_candidate(alphabet: Alphabet, candidate: &[Word]) -> Result<Self> {
        Self::from_candidate_with(&OrbitTable::new(alphabet), candidate)
    }

    /// Same as [`Self::from_candidate`] with a prebuilt orbit table
    ///
    /// # Errors
    ///
    /// Returns `InvalidCandidate` if the list does not hold exactly one word
    /// per rotation orbit
    pub fn from_candidate_with(orbits: &OrbitTable, candidate: &[Word]) -> Result<Self> {
        let alphabet = *orbits.alphabet();
        if candidate.len() != orbits.len() {
            return Err(invalid_candidate(&format!(
                "{} words given for {} rotation orbits",
                candidate.len(),
                orbits.len()
            )));
        }

        let mut seen = bitvec![0; orbits.len()];
        let mut members = MembershipVector::unknown(alphabet.nb_words());
        for &m in candidate {
            let Some(orbit) = orbits.orbit_of(m) else {
                return Err(invalid_candidate(&format!(
                    "word {m} is out of range for {alphabet}"
                )));
            };
            if seen.get(orbit).as_deref() == Some(&true) {
                return Err(invalid_candidate(&format!(
                    "word {m} ({}) repeats rotation orbit {orbit}",
                    alphabet.spell(m)
                )));
            }
            seen.set(orbit, true);
            members.set(m, Membership::Present);
        }
        members.settle();

        Ok(Self { alphabet, members })
    }

    /// Rebuild the state a move list starts from
    ///
    /// Each word is produced by one slot and consumed by another; it holds a
    /// token at the start of the list exactly when its consumer does not come
    /// after its producer. Homopolymers are their own producer and consumer.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteDecyclingSet` for a list of the wrong length and
    /// `InvalidCandidate` for a list that repeats or overflows a slot
    pub fn from_move_list(alphabet: Alphabet, moves: &[Slot]) -> Result<Self> {
        if moves.len() as u64 != alphabet.nb_slots() {
            return Err(DecyclingError::IncompleteDecyclingSet {
                discharged: moves.len() as u64,
                expected: alphabet.nb_slots(),
            });
        }

        let mut position = vec![usize::MAX; alphabet.nb_slots() as usize];
        for (index, &slot) in moves.iter().enumerate() {
            match position.get_mut(slot as usize) {
                Some(cell) if *cell == usize::MAX => *cell = index,
                Some(_) => {
                    return Err(invalid_candidate(&format!(
                        "move list repeats slot {slot}"
                    )));
                }
                None => {
                    return Err(invalid_candidate(&format!(
                        "move list names slot {slot} outside {alphabet}"
                    )));
                }
            }
        }

        let mut members = MembershipVector::filled(alphabet.nb_words(), Membership::Absent);
        for m in alphabet.words() {
            if let (Some(consumer), Some(producer)) = (
                position.get(alphabet.slot(m) as usize),
                position.get(alphabet.producer_slot(m) as usize),
            ) && consumer <= producer
            {
                members.set(m, Membership::Present);
            }
        }

        Ok(Self { alphabet, members })
    }

    /// Alphabet of the state
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Membership of every word
    pub const fn members(&self) -> &MembershipVector {
        &self.members
    }

    /// Word membership
    pub fn is_present(&self, m: Word) -> bool {
        self.members.is_present(m)
    }

    /// Number of present words
    pub fn present_count(&self) -> usize {
        self.members.present_count()
    }

    /// Present words in increasing order
    pub fn present_words(&self) -> Vec<Word> {
        self.members.present_words().collect()
    }

    /// All α left companions of `slot` are present
    pub fn has_move(&self, slot: Slot) -> bool {
        self.alphabet
            .bases()
            .all(|base| self.is_present(self.alphabet.left_companion(slot, base)))
    }

    /// Replace every left companion of `slot` by its right companion
    ///
    /// # Panics
    ///
    /// Panics if a left companion is absent or a right companion is already
    /// present: the state would stop being one word per orbit
    pub fn apply_move(&mut self, slot: Slot) {
        for base in self.alphabet.bases() {
            let left = self.alphabet.left_companion(slot, base);
            let right = self.alphabet.right_companion(slot, base);
            assert!(
                self.is_present(left),
                "move {slot} applied without left companion {left}"
            );
            self.members.set(left, Membership::Absent);
            assert!(
                !self.is_present(right),
                "move {slot} would duplicate right companion {right}"
            );
            self.members.set(right, Membership::Present);
        }
    }

    /// Apply a sequence of moves in order
    ///
    /// # Panics
    ///
    /// Panics if any move in the sequence is not applicable when reached
    pub fn apply_moves(&mut self, moves: &[Slot]) {
        for &slot in moves {
            self.apply_move(slot);
        }
    }

    /// Swap a present word for an absent one outside of any move
    pub(crate) fn shift(&mut self, from: Word, to: Word) {
        self.members.set(from, Membership::Absent);
        self.members.set(to, Membership::Present);
    }

    /// Derive an applicable-move list by repeatedly firing ready slots
    ///
    /// Works on a scratch copy; applying the returned list to `self` brings it
    /// back to `self`.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteDecyclingSet` when fewer than α^(k-1) moves could be
    /// discharged, i.e. some cycle holds no word of the set
    ///
    /// # Panics
    ///
    /// Panics if a slot is discharged twice
    pub fn compute_move_list(&self) -> Result<MoveList> {
        let alphabet = self.alphabet;
        let mut scratch = self.clone();
        let mut done = bitvec![0; alphabet.nb_slots() as usize];
        let mut ready: Vec<Slot> = alphabet
            .slots()
            .rev()
            .filter(|&slot| scratch.has_move(slot))
            .collect();
        let mut moves = Vec::with_capacity(alphabet.nb_slots() as usize);

        while let Some(slot) = ready.pop() {
            assert!(
                done.get(slot as usize).as_deref() == Some(&false),
                "slot {slot} discharged twice"
            );
            done.set(slot as usize, true);
            scratch.apply_move(slot);
            moves.push(slot);

            for base in alphabet.bases() {
                let next = alphabet.slot(alphabet.right_companion(slot, base));
                if done.get(next as usize).as_deref() == Some(&false) && scratch.has_move(next) {
                    ready.push(next);
                }
            }
        }

        if (moves.len() as u64) < alphabet.nb_slots() {
            debug!(
                discharged = moves.len(),
                expected = alphabet.nb_slots(),
                "move-list derivation stalled"
            );
            return Err(DecyclingError::IncompleteDecyclingSet {
                discharged: moves.len() as u64,
                expected: alphabet.nb_slots(),
            });
        }

        debug_assert_eq!(scratch, *self, "a full move list must be cyclic");
        Ok(moves)
    }
}
