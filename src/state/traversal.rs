//! I-move transformation from one component to a neighbouring one
//!
//! An I-move `(slot, mask)` splits the companions of `slot` at the point of
//! the move list where the move is ready: bit-set companions are redirected
//! early, the others stay behind in the old component. The moves that must
//! happen before the redirected companions come back are reordered so that
//! the result is again a valid move list, now starting with `slot`.

use crate::state::decycling::{DecyclingState, MoveList};
use crate::word::alphabet::{Slot, Word};

/// New state and move list reached by an I-move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// State in the neighbouring component, `slot` ready to fire
    pub state: DecyclingState,
    /// Applicable-move list of `state`, starting with `slot`
    pub moves: MoveList,
}

impl DecyclingState {
    /// Apply the I-move `(slot, mask)` to this state and its move list
    ///
    /// `moves` must be an applicable-move list of `self` and `mask` must come
    /// from the signature of this component. The source state is left as is.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is missing from `moves`, if `moves` is not applicable
    /// to `self`, or if the mask is infeasible (some redirected companion
    /// never returns before the end of the list)
    pub fn traverse_move(&self, moves: &[Slot], slot: Slot, mask: u8) -> Traversal {
        let alphabet = *self.alphabet();
        let position = moves.iter().position(|&candidate| candidate == slot);
        assert!(position.is_some(), "slot {slot} is not in the move list");
        let (before, from_slot) = moves.split_at(position.unwrap_or_default());

        // State at the point of the list where `slot` is ready
        let mut ready = self.clone();
        ready.apply_moves(before);
        assert!(ready.has_move(slot), "slot {slot} is not ready in its move list");

        let mut state = ready;
        let mut targets: Vec<Word> = Vec::new();
        for base in alphabet.bases() {
            if mask & (1u8 << base) == 0 {
                continue;
            }
            let left = alphabet.left_companion(slot, base);
            let right = alphabet.right_companion(slot, base);
            if left != right {
                assert!(
                    !state.is_present(right),
                    "redirect of {left} would duplicate {right}"
                );
                state.shift(left, right);
                targets.push(left);
            }
        }

        let rest: Vec<Slot> = from_slot.iter().skip(1).chain(before).copied().collect();
        let mut deferred = Vec::new();
        let mut redirected = Vec::new();
        let mut walked = 0;
        for &next in &rest {
            if targets.is_empty() {
                break;
            }
            walked += 1;
            if state.has_move(next) {
                state.apply_move(next);
                redirected.push(next);
                targets.retain(|&word| !state.is_present(word));
            } else {
                deferred.push(next);
            }
        }
        assert!(
            targets.is_empty(),
            "mask {mask:#b} at slot {slot} is infeasible: {targets:?} never return"
        );

        let mut new_moves = Vec::with_capacity(moves.len());
        new_moves.push(slot);
        new_moves.extend(deferred);
        new_moves.extend(rest.iter().skip(walked));
        new_moves.extend(redirected);

        assert_eq!(new_moves.len(), moves.len(), "move list changed length");
        assert_eq!(
            new_moves.iter().filter(|&&candidate| candidate == slot).count(),
            1,
            "slot {slot} must appear once in the new move list"
        );
        assert!(
            state.has_move(slot),
            "slot {slot} is not ready after the I-move"
        );
        assert_eq!(
            state.present_count(),
            self.present_count(),
            "I-move changed the number of present words"
        );
        debug_assert_eq!(
            Self::from_move_list(alphabet, &new_moves).ok().as_ref(),
            Some(&state),
            "new move list does not describe the new state"
        );

        Traversal {
            state,
            moves: new_moves,
        }
    }
}
