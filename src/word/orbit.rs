//! Rotation orbits (pure cycling registers) of all words

use crate::word::alphabet::{Alphabet, Word};

/// Orbit id of every word under forward rotation
///
/// Orbits are numbered in increasing order of their smallest word, so orbit 0
/// always holds the all-zero homopolymer.
#[derive(Clone, Debug)]
pub struct OrbitTable {
    alphabet: Alphabet,
    orbit_of: Vec<u32>,
    smallest: Vec<Word>,
}

impl OrbitTable {
    /// Walk every orbit once
    pub fn new(alphabet: Alphabet) -> Self {
        let size = alphabet.nb_words() as usize;
        let mut orbit_of = vec![u32::MAX; size];
        let mut smallest = Vec::new();

        for start in alphabet.words() {
            if orbit_of.get(start as usize) != Some(&u32::MAX) {
                continue;
            }
            let id = smallest.len() as u32;
            smallest.push(start);

            let mut m = start;
            loop {
                if let Some(slot) = orbit_of.get_mut(m as usize) {
                    *slot = id;
                }
                m = alphabet.next(m);
                if m == start {
                    break;
                }
            }
        }

        Self {
            alphabet,
            orbit_of,
            smallest,
        }
    }

    /// Alphabet the table was built for
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Orbit id of a word, `None` when out of range
    pub fn orbit_of(&self, m: Word) -> Option<usize> {
        self.orbit_of.get(m as usize).map(|&id| id as usize)
    }

    /// Number of orbits, which is also the size of every minimal decycling set
    pub fn len(&self) -> usize {
        self.smallest.len()
    }

    /// Always false: every alphabet has at least one orbit
    pub fn is_empty(&self) -> bool {
        self.smallest.is_empty()
    }

    /// Smallest word of an orbit
    pub fn representative(&self, orbit: usize) -> Option<Word> {
        self.smallest.get(orbit).copied()
    }

    /// Words of an orbit in rotation order, starting from the smallest
    pub fn members(&self, orbit: usize) -> Vec<Word> {
        let Some(start) = self.representative(orbit) else {
            return Vec::new();
        };
        let mut members = vec![start];
        let mut m = self.alphabet.next(start);
        while m != start {
            members.push(m);
            m = self.alphabet.next(m);
        }
        members
    }
}
