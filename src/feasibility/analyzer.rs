//! Hitting-number-one cycle search and I-move signature emission
//!
//! A cycle of the de Bruijn graph with exactly one word of the set in it keeps
//! that property under every F-move, so the constraints found here do not
//! depend on which state of a component is analyzed.

use crate::feasibility::constraints::ConstraintMatrix;
use crate::feasibility::signature::{IMove, Mask, Signature};
use crate::state::decycling::DecyclingState;
use crate::word::alphabet::{Alphabet, Slot, Word};
use bitvec::prelude::*;
use tracing::trace;

/// Depth-first search frame: a word and the next successor symbol to try
#[derive(Clone, Copy, Debug)]
struct Frame {
    word: Word,
    branch: u64,
    reaches: bool,
}

/// Per-worker constraint builder with reusable scratch buffers
///
/// The search runs once from every present word, walking successor edges
/// through absent words only. Those words form an acyclic subgraph in a
/// decycling set, so every closed walk back to the start is a simple cycle
/// holding exactly one present word.
pub struct FeasibilityAnalyzer {
    alphabet: Alphabet,
    constraints: ConstraintMatrix,
    stamps: Vec<u32>,
    epoch: u32,
    reaches: BitVec,
    stack: Vec<Frame>,
}

impl FeasibilityAnalyzer {
    /// Allocate scratch buffers for one alphabet
    pub fn new(alphabet: Alphabet) -> Self {
        let size = alphabet.nb_words() as usize;
        Self {
            alphabet,
            constraints: ConstraintMatrix::new(&alphabet),
            stamps: vec![0; size],
            epoch: 0,
            reaches: bitvec![0; size],
            stack: Vec::new(),
        }
    }

    /// Constraints of the last analyzed state
    pub const fn constraints(&self) -> &ConstraintMatrix {
        &self.constraints
    }

    /// Recompute the constraint matrices of a state
    pub fn fill_constraints(&mut self, state: &DecyclingState) {
        self.constraints.clear();
        for start in state.members().present_words() {
            self.search_from(state, start);
        }
    }

    /// Masks that redirect nothing or everything at a homopolymer slot
    ///
    /// At slot `b^(k-1)` companion `b` maps onto itself, so `1<<b` is no move
    /// at all and its complement is the ordinary F-move.
    pub fn is_degenerate(&self, slot: Slot, mask: Mask) -> bool {
        let full = self.alphabet.full_mask();
        self.alphabet.homopolymer_base(slot).is_some_and(|base| {
            let bit = 1u8 << base;
            mask == bit || mask == full ^ bit
        })
    }

    /// Mask allowed by the current constraints and not degenerate
    pub fn is_feasible(&self, slot: Slot, mask: Mask) -> bool {
        !self.is_degenerate(slot, mask) && self.constraints.permits(slot, mask)
    }

    /// Every feasible I-move of a state, by slot then mask
    pub fn signature(&mut self, state: &DecyclingState) -> Signature {
        self.fill_constraints(state);
        let full = self.alphabet.full_mask();
        let mut moves = Vec::new();
        for slot in self.alphabet.slots() {
            for mask in 1..full {
                if self.is_feasible(slot, mask) {
                    moves.push(IMove::new(slot, mask));
                }
            }
        }
        trace!(imoves = moves.len(), "signature computed");
        Signature::new(moves)
    }

    fn search_from(&mut self, state: &DecyclingState, start: Word) {
        self.next_epoch();
        self.stack.clear();
        self.visit(start);

        let alpha = self.alphabet.alpha();
        while let Some(top) = self.stack.last().copied() {
            if top.branch == alpha {
                self.stack.pop();
                self.reaches.set(top.word as usize, top.reaches);
                if top.reaches && !self.stack.is_empty() {
                    // The edge into `top` was the parent's last branch
                    self.close_cycle(top.word);
                }
                continue;
            }

            if let Some(frame) = self.stack.last_mut() {
                frame.branch += 1;
            }
            let next = self.alphabet.next_with(top.word, top.branch);
            let seen = self.stamps.get(next as usize) == Some(&self.epoch);

            if next == start || (seen && self.reaches.get(next as usize).as_deref() == Some(&true)) {
                self.close_cycle(next);
            } else if !seen && !state.is_present(next) {
                self.visit(next);
            }
        }
    }

    // Edge from the top frame's word to `to` lies on a cycle through the start
    fn close_cycle(&mut self, to: Word) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        frame.reaches = true;
        let from = frame.word;

        let alphabet = self.alphabet;
        let from_base = alphabet.leading(from);
        let to_base = alphabet.trailing(to);
        if to_base != from_base && !alphabet.is_homopolymer(from) && !alphabet.is_homopolymer(to)
        {
            self.constraints
                .mark(alphabet.slot(from), from_base, to_base);
        }
    }

    fn visit(&mut self, word: Word) {
        if let Some(stamp) = self.stamps.get_mut(word as usize) {
            *stamp = self.epoch;
        }
        self.reaches.set(word as usize, false);
        self.stack.push(Frame {
            word,
            branch: 0,
            reaches: false,
        });
    }

    fn next_epoch(&mut self) {
        if self.epoch == u32::MAX {
            self.stamps.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
    }
}
