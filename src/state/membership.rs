//! Tri-state membership vector over all words

use crate::word::alphabet::Word;

/// Membership of a single word in a decycling set under construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Not decided yet
    #[default]
    Unknown,
    /// Known to be outside the set
    Absent,
    /// Known to be in the set
    Present,
}

impl Membership {
    /// Only `Present` counts as membership
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// One membership cell per word
///
/// Out-of-range words read as `Unknown` and ignore writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipVector {
    cells: Vec<Membership>,
}

impl MembershipVector {
    /// Every word `Unknown`
    pub fn unknown(size: u64) -> Self {
        Self::filled(size, Membership::Unknown)
    }

    /// Every word set to `value`
    pub fn filled(size: u64, value: Membership) -> Self {
        Self {
            cells: vec![value; size as usize],
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a vector over no words
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Membership of a word
    pub fn get(&self, m: Word) -> Membership {
        self.cells
            .get(m as usize)
            .copied()
            .unwrap_or(Membership::Unknown)
    }

    /// Overwrite the membership of a word
    pub fn set(&mut self, m: Word, value: Membership) {
        if let Some(cell) = self.cells.get_mut(m as usize) {
            *cell = value;
        }
    }

    /// Shorthand for `get(m).is_present()`
    pub fn is_present(&self, m: Word) -> bool {
        self.get(m).is_present()
    }

    /// Turn every `Unknown` into `Absent`
    pub fn settle(&mut self) {
        for cell in &mut self.cells {
            if *cell == Membership::Unknown {
                *cell = Membership::Absent;
            }
        }
    }

    /// Number of present words
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_present()).count()
    }

    /// Present words in increasing order
    pub fn present_words(&self) -> impl Iterator<Item = Word> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_present())
            .map(|(m, _)| m as Word)
    }
}
