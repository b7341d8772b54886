//! Integer encoding of de Bruijn words and the rotation/move arithmetic on them

use crate::io::configuration::{
    MAX_ALPHABET_SIZE, MAX_WORD_BITS, MIN_ALPHABET_SIZE, MIN_WORD_LENGTH,
};
use crate::io::error::{Result, configuration_error};
use std::fmt;
use std::ops::Range;

/// A word of length `k`, most significant base-α digit first
pub type Word = u64;

/// A move slot: the `k-1` symbols shared by α left companions
pub type Slot = u64;

/// Smallest unsigned machine width able to hold every word
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WordWidth {
    /// 8-bit words
    U8,
    /// 16-bit words
    U16,
    /// 32-bit words
    U32,
    /// 64-bit words
    U64,
}

impl WordWidth {
    /// Narrowest width holding `bits` significant bits
    pub const fn for_bits(bits: u32) -> Self {
        match bits {
            0..=8 => Self::U8,
            9..=16 => Self::U16,
            17..=32 => Self::U32,
            _ => Self::U64,
        }
    }

    /// Number of bits of this width
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::U32 => 32,
            Self::U64 => 64,
        }
    }
}

/// Alphabet size and word length, with the derived word and slot counts
///
/// Every word operation is pure arithmetic on `u64`: the leading symbol is
/// `m / α^(k-1)`, the trailing symbol `m % α`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    alpha: u64,
    k: u32,
    nb_words: u64,
    nb_slots: u64,
    bits: u32,
}

impl Alphabet {
    /// Validate `alpha` and `k` and derive the word counts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the alphabet is outside
    /// `[MIN_ALPHABET_SIZE, MAX_ALPHABET_SIZE]`, the word length is below
    /// `MIN_WORD_LENGTH`, or α^k words need more than `MAX_WORD_BITS` bits
    pub fn new(alpha: u32, k: u32) -> Result<Self> {
        if !(MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&alpha) {
            return Err(configuration_error(
                "alpha",
                &alpha,
                &format!("alphabet size must be in [{MIN_ALPHABET_SIZE}, {MAX_ALPHABET_SIZE}]"),
            ));
        }
        if k < MIN_WORD_LENGTH {
            return Err(configuration_error(
                "k",
                &k,
                &format!("word length must be at least {MIN_WORD_LENGTH}"),
            ));
        }

        let alpha = u64::from(alpha);
        let nb_words = num_traits::checked_pow(alpha, k as usize).ok_or_else(|| {
            configuration_error("k", &k, &"alpha^k overflows a 64-bit word")
        })?;
        let bits = u64::BITS - (nb_words - 1).leading_zeros();
        if bits > MAX_WORD_BITS {
            return Err(configuration_error(
                "k",
                &k,
                &format!("words need {bits} bits, more than the supported {MAX_WORD_BITS}"),
            ));
        }

        Ok(Self {
            alpha,
            k,
            nb_words,
            nb_slots: nb_words / alpha,
            bits,
        })
    }

    /// Alphabet size α
    pub const fn alpha(&self) -> u64 {
        self.alpha
    }

    /// Word length k
    pub const fn k(&self) -> u32 {
        self.k
    }

    /// Number of words, α^k
    pub const fn nb_words(&self) -> u64 {
        self.nb_words
    }

    /// Number of move slots, α^(k-1)
    pub const fn nb_slots(&self) -> u64 {
        self.nb_slots
    }

    /// Significant bits of the largest word
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Narrowest machine width holding every word
    pub const fn word_width(&self) -> WordWidth {
        WordWidth::for_bits(self.bits)
    }

    /// Mask with one bit per symbol of the alphabet
    pub const fn full_mask(&self) -> u8 {
        ((1u16 << self.alpha) - 1) as u8
    }

    /// First symbol of a word
    pub const fn leading(&self, m: Word) -> u64 {
        m / self.nb_slots
    }

    /// Last symbol of a word
    pub const fn trailing(&self, m: Word) -> u64 {
        m % self.alpha
    }

    /// Forward rotation: drop the leading symbol and append it at the end
    pub const fn next(&self, m: Word) -> Word {
        self.next_with(m, self.leading(m))
    }

    /// Shift left by one symbol and append `base`
    pub const fn next_with(&self, m: Word, base: u64) -> Word {
        (m * self.alpha) % self.nb_words + base
    }

    /// Backward rotation: drop the trailing symbol and prepend it
    pub const fn previous(&self, m: Word) -> Word {
        self.previous_with(m, self.trailing(m))
    }

    /// Shift right by one symbol and prepend `base`
    pub const fn previous_with(&self, m: Word, base: u64) -> Word {
        m / self.alpha + base * self.nb_slots
    }

    /// Slot whose move consumes this word (its last `k-1` symbols)
    pub const fn slot(&self, m: Word) -> Slot {
        m % self.nb_slots
    }

    /// Slot whose move produces this word (its first `k-1` symbols)
    pub const fn producer_slot(&self, m: Word) -> Slot {
        m / self.alpha
    }

    /// Left companion `base·slot`
    pub const fn left_companion(&self, slot: Slot, base: u64) -> Word {
        slot + base * self.nb_slots
    }

    /// Right companion `slot·base`, the successor of `base·slot` after the move
    pub const fn right_companion(&self, slot: Slot, base: u64) -> Word {
        slot * self.alpha + base
    }

    /// The word made of `k` copies of `base`
    pub const fn homopolymer(&self, base: u64) -> Word {
        base * self.repunit(self.nb_words)
    }

    /// A word equal to its own rotation
    pub const fn is_homopolymer(&self, m: Word) -> bool {
        self.next(m) == m
    }

    /// Symbol `b` if `slot` is `b^(k-1)`
    pub const fn homopolymer_base(&self, slot: Slot) -> Option<u64> {
        let unit = self.repunit(self.nb_slots);
        if slot % unit == 0 && slot / unit < self.alpha {
            Some(slot / unit)
        } else {
            None
        }
    }

    // 11...1 in base α with as many digits as `count` has powers of α
    const fn repunit(&self, count: u64) -> u64 {
        (count - 1) / (self.alpha - 1)
    }

    /// Reverse the symbols and complement each (`c -> α-1-c`)
    pub const fn reverse_complement(&self, m: Word) -> Word {
        let mut rest = m;
        let mut result = 0;
        let mut i = 0;
        while i < self.k {
            result = result * self.alpha + (self.alpha - 1 - rest % self.alpha);
            rest /= self.alpha;
            i += 1;
        }
        result
    }

    /// Smaller of a word and its reverse complement
    pub const fn canonical(&self, m: Word) -> Word {
        let rc = self.reverse_complement(m);
        if rc < m { rc } else { m }
    }

    /// Number of symbols equal to `base`
    pub const fn weight(&self, m: Word, base: u64) -> u32 {
        let mut rest = m;
        let mut count = 0;
        let mut i = 0;
        while i < self.k {
            if rest % self.alpha == base {
                count += 1;
            }
            rest /= self.alpha;
            i += 1;
        }
        count
    }

    /// All words in increasing order
    pub const fn words(&self) -> Range<Word> {
        0..self.nb_words
    }

    /// All move slots in increasing order
    pub const fn slots(&self) -> Range<Slot> {
        0..self.nb_slots
    }

    /// All symbols in increasing order
    pub const fn bases(&self) -> Range<u64> {
        0..self.alpha
    }

    /// Render a word as its symbol string (digits, then letters past 9)
    pub fn spell(&self, m: Word) -> String {
        let mut symbols = vec!['0'; self.k as usize];
        let mut rest = m;
        for symbol in symbols.iter_mut().rev() {
            *symbol = char::from_digit((rest % self.alpha) as u32, 36).unwrap_or('?');
            rest /= self.alpha;
        }
        symbols.into_iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha={} k={} ({} words, {} slots, {:?})",
            self.alpha,
            self.k,
            self.nb_words,
            self.nb_slots,
            self.word_width()
        )
    }
}
