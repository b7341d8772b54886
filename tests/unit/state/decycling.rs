//! Tests for candidate validation, F-moves and move-list derivation

#[cfg(test)]
mod tests {
    use crate::{ORDERED_TERNARY_MDS, find_mds};
    use mds_components::DecyclingError;
    use mds_components::state::decycling::DecyclingState;
    use mds_components::word::alphabet::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn binary3() -> Alphabet {
        Alphabet::new(2, 3).expect("valid alphabet")
    }

    // Verifies a candidate with the wrong number of words is rejected
    // Verified by removing the cardinality check
    #[test]
    fn test_wrong_cardinality() {
        let result = DecyclingState::from_candidate(binary3(), &[0, 3, 5]);
        assert!(matches!(result, Err(DecyclingError::InvalidCandidate { .. })));
    }

    // Tests a candidate repeating an orbit (and so missing another) is rejected
    // Verified by marking orbits seen without checking them first
    #[test]
    fn test_repeated_orbit() {
        let result = DecyclingState::from_candidate(binary3(), &[0, 1, 2, 7]);
        match result {
            Err(DecyclingError::InvalidCandidate { reason }) => {
                assert!(reason.contains("repeats rotation orbit"));
            }
            other => unreachable!("Expected InvalidCandidate, got {other:?}"),
        }
    }

    // Tests an out-of-range word is rejected
    // Verified by skipping the range check
    #[test]
    fn test_out_of_range_word() {
        let result = DecyclingState::from_candidate(binary3(), &[0, 1, 3, 8]);
        assert!(matches!(result, Err(DecyclingError::InvalidCandidate { .. })));
    }

    // Tests one word per orbit that leaves a cycle intact fails move derivation
    // Verified by returning the partial move list
    #[test]
    fn test_incomplete_decycling_set() {
        let state = DecyclingState::from_candidate(binary3(), &[0, 1, 3, 7])
            .expect("one word per orbit");
        match state.compute_move_list() {
            Err(DecyclingError::IncompleteDecyclingSet {
                discharged,
                expected,
            }) => {
                assert_eq!(discharged, 1);
                assert_eq!(expected, 4);
            }
            other => unreachable!("Expected IncompleteDecyclingSet, got {other:?}"),
        }
    }

    // Tests the move list of {000, 001, 101, 111}
    // Verified by popping ready slots in FIFO order
    #[test]
    fn test_binary_move_list() {
        let state = DecyclingState::from_candidate(binary3(), &[0, 1, 5, 7]).expect("MDS");
        assert_eq!(state.compute_move_list().expect("decycling"), vec![1, 3, 2, 0]);
        assert_eq!(state.present_words(), vec![0, 1, 5, 7]);
    }

    // Tests has_move and apply_move replace left companions by right ones
    // Verified by setting left companions instead of right ones
    #[test]
    fn test_apply_move() {
        let mut state = DecyclingState::from_candidate(binary3(), &[0, 1, 5, 7]).expect("MDS");
        assert!(state.has_move(1));
        assert!(!state.has_move(0));
        assert!(!state.has_move(2));

        state.apply_move(1);
        assert_eq!(state.present_words(), vec![0, 2, 3, 7]);
        assert_eq!(state.present_count(), 4);
        assert!(state.has_move(3));
    }

    // Tests the homopolymer companion maps onto itself
    // Verified by asserting right companions are absent before clearing left ones
    #[test]
    fn test_homopolymer_move() {
        let alphabet = Alphabet::new(3, 2).expect("valid alphabet");
        let mut state =
            DecyclingState::from_candidate(alphabet, &ORDERED_TERNARY_MDS).expect("MDS");
        state.apply_move(0);
        assert_eq!(state.present_words(), vec![0, 1, 2, 4, 7, 8]);
    }

    // Tests applying a move without its left companions aborts
    // Verified by removing the left companion assertion
    #[test]
    #[should_panic(expected = "without left companion")]
    fn test_apply_unavailable_move() {
        let mut state = DecyclingState::from_candidate(binary3(), &[0, 1, 5, 7]).expect("MDS");
        state.apply_move(0);
    }

    // Tests the move list is cyclic and independent of candidate order
    // Verified by skipping the last discharged move
    #[test]
    fn test_move_list_is_cyclic() {
        let (alphabet, mut candidate) = find_mds(2, 5);
        let state = DecyclingState::from_candidate(alphabet, &candidate).expect("MDS");
        let moves = state.compute_move_list().expect("decycling");
        assert_eq!(moves.len() as u64, alphabet.nb_slots());

        let mut sorted = moves.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), moves.len());

        let mut replay = state.clone();
        replay.apply_moves(&moves);
        assert_eq!(replay, state);

        let mut rng = StdRng::seed_from_u64(7);
        candidate.shuffle(&mut rng);
        let shuffled = DecyclingState::from_candidate(alphabet, &candidate).expect("MDS");
        assert_eq!(shuffled, state);
        assert_eq!(shuffled.compute_move_list().expect("decycling"), moves);
    }

    // Tests rebuilding a state from its move list, at every rotation of it
    // Verified by comparing positions with a strict inequality
    #[test]
    fn test_from_move_list() {
        let (alphabet, candidate) = find_mds(3, 3);
        let mut state = DecyclingState::from_candidate(alphabet, &candidate).expect("MDS");
        let mut moves = state.compute_move_list().expect("decycling");

        for _ in 0..moves.len() {
            let rebuilt = DecyclingState::from_move_list(alphabet, &moves).expect("permutation");
            assert_eq!(rebuilt, state);
            state.apply_move(moves[0]);
            moves.rotate_left(1);
        }
    }

    // Tests malformed move lists are rejected
    // Verified by accepting repeated slots
    #[test]
    fn test_from_bad_move_list() {
        let alphabet = binary3();
        assert!(matches!(
            DecyclingState::from_move_list(alphabet, &[1, 3, 2]),
            Err(DecyclingError::IncompleteDecyclingSet { .. })
        ));
        assert!(matches!(
            DecyclingState::from_move_list(alphabet, &[1, 3, 3, 0]),
            Err(DecyclingError::InvalidCandidate { .. })
        ));
        assert!(matches!(
            DecyclingState::from_move_list(alphabet, &[1, 3, 9, 0]),
            Err(DecyclingError::InvalidCandidate { .. })
        ));
    }
}
