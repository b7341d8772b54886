//! Tests for word encoding, rotations, companions and alphabet limits

#[cfg(test)]
mod tests {
    use mds_components::DecyclingError;
    use mds_components::word::alphabet::{Alphabet, WordWidth};

    fn quaternary() -> Alphabet {
        Alphabet::new(4, 3).expect("4^3 words fit")
    }

    // Verifies word and slot counts derived from alpha and k
    // Verified by computing nb_slots as nb_words / k
    #[test]
    fn test_counts() {
        let alphabet = quaternary();
        assert_eq!(alphabet.nb_words(), 64);
        assert_eq!(alphabet.nb_slots(), 16);
        assert_eq!(alphabet.full_mask(), 0b1111);
        assert_eq!(Alphabet::new(8, 2).expect("8^2 words fit").full_mask(), 0xff);
    }

    // Tests leading/trailing symbols and both rotations on ACG = 012
    // Verified by swapping the leading and trailing computations
    #[test]
    fn test_rotations() {
        let alphabet = quaternary();
        let acg = 6;
        assert_eq!(alphabet.spell(acg), "012");
        assert_eq!(alphabet.leading(acg), 0);
        assert_eq!(alphabet.trailing(acg), 2);
        assert_eq!(alphabet.next(acg), 24);
        assert_eq!(alphabet.spell(alphabet.next(acg)), "120");
        assert_eq!(alphabet.next_with(acg, 3), 27);
        assert_eq!(alphabet.previous(acg), 33);
        assert_eq!(alphabet.spell(alphabet.previous(acg)), "201");
        assert_eq!(alphabet.previous_with(acg, 1), 17);
    }

    // Tests forward and backward rotations undo each other on every word
    // Verified by dropping the modulo from next_with
    #[test]
    fn test_rotation_inverse() {
        let alphabet = quaternary();
        for m in alphabet.words() {
            assert_eq!(alphabet.previous(alphabet.next(m)), m);
            assert_eq!(alphabet.next(alphabet.previous(m)), m);
        }
    }

    // Tests slot arithmetic: consumer, producer and both companions
    // Verified by building left companions by appending instead of prepending
    #[test]
    fn test_companions() {
        let alphabet = quaternary();
        assert_eq!(alphabet.slot(6), 6);
        assert_eq!(alphabet.producer_slot(6), 1);
        assert_eq!(alphabet.left_companion(6, 3), 54);
        assert_eq!(alphabet.spell(54), "312");
        assert_eq!(alphabet.right_companion(6, 3), 27);

        for slot in alphabet.slots() {
            for base in alphabet.bases() {
                let left = alphabet.left_companion(slot, base);
                let right = alphabet.right_companion(slot, base);
                assert_eq!(alphabet.slot(left), slot);
                assert_eq!(alphabet.producer_slot(right), slot);
                assert_eq!(alphabet.next(left), right);
            }
        }
    }

    // Tests homopolymer construction and detection of homopolymer slots
    // Verified by returning Some(0) for every slot divisible by the repunit
    #[test]
    fn test_homopolymers() {
        let alphabet = quaternary();
        assert_eq!(alphabet.homopolymer(2), 42);
        assert!(alphabet.is_homopolymer(42));
        assert!(!alphabet.is_homopolymer(6));
        assert_eq!(alphabet.homopolymer_base(10), Some(2));
        assert_eq!(alphabet.homopolymer_base(15), Some(3));
        assert_eq!(alphabet.homopolymer_base(0), Some(0));
        assert_eq!(alphabet.homopolymer_base(6), None);

        let homopolymers = alphabet.words().filter(|&m| alphabet.is_homopolymer(m)).count();
        assert_eq!(homopolymers, 4);
    }

    // Tests reverse complement and canonical form
    // Verified by complementing without reversing
    #[test]
    fn test_reverse_complement() {
        let alphabet = quaternary();
        assert_eq!(alphabet.reverse_complement(6), 27);
        assert_eq!(alphabet.reverse_complement(27), 6);
        assert_eq!(alphabet.canonical(27), 6);
        assert_eq!(alphabet.canonical(6), 6);
        for m in alphabet.words() {
            assert_eq!(alphabet.reverse_complement(alphabet.reverse_complement(m)), m);
        }
        assert_eq!(alphabet.weight(6, 1), 1);
        assert_eq!(alphabet.weight(42, 2), 3);
    }

    // Tests the narrowest machine width is picked for the word range
    // Verified by counting bits of nb_words instead of nb_words - 1
    #[test]
    fn test_word_width() {
        let width = |alpha, k| Alphabet::new(alpha, k).expect("supported size").word_width();
        assert_eq!(width(2, 8), WordWidth::U8);
        assert_eq!(width(2, 9), WordWidth::U16);
        assert_eq!(width(4, 16), WordWidth::U32);
        assert_eq!(width(2, 34), WordWidth::U64);
        assert_eq!(width(3, 21), WordWidth::U64);
        assert_eq!(WordWidth::U16.bits(), 16);
    }

    // Tests out-of-range alphabets and word lengths are configuration errors
    // Verified by raising the word bit limit to 64
    #[test]
    fn test_limits() {
        for (alpha, k) in [(1, 4), (9, 2), (2, 1), (2, 35), (3, 22), (8, 12), (2, 200)] {
            assert!(
                matches!(
                    Alphabet::new(alpha, k),
                    Err(DecyclingError::Configuration { .. })
                ),
                "alpha={alpha} k={k} should be rejected"
            );
        }
    }
}
