//! Punctuation and capitalization label alphabets
//!
//! Each alphabet is a closed, ordered set of classes. A class's code is its
//! position in [`Alphabet::ALL`], and its label character is the symbol used
//! in the two-character tag encoding.

use std::fmt;

/// One of the two independent classification dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Punctuation following a word
    Punctuation,
    /// Whether a word starts with a capital letter
    Capitalization,
}

impl Axis {
    /// Key used for this axis in the metrics report
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Punctuation => "punctuation",
            Axis::Capitalization => "capitalization",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed, ordered label alphabet with a bidirectional char/code mapping
pub trait Alphabet: Copy + Eq + fmt::Debug + 'static {
    /// Axis this alphabet labels
    const AXIS: Axis;

    /// Every class in code order
    const ALL: &'static [Self];

    /// Look up a class by its label character
    fn from_char(c: char) -> Option<Self>;

    /// Label character of this class
    fn as_char(self) -> char;

    /// Integer code of this class
    fn code(self) -> usize;

    /// Look up a class by its integer code
    fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Number of classes in the alphabet
    fn class_count() -> usize {
        Self::ALL.len()
    }
}

/// Punctuation classes: `O` (none), `,`, `.`, `?`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Punctuation {
    /// No punctuation
    Blank = 0,
    /// Comma
    Comma = 1,
    /// Period
    Period = 2,
    /// Question mark
    Question = 3,
}

impl Alphabet for Punctuation {
    const AXIS: Axis = Axis::Punctuation;

    const ALL: &'static [Self] = &[
        Punctuation::Blank,
        Punctuation::Comma,
        Punctuation::Period,
        Punctuation::Question,
    ];

    fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Punctuation::Blank),
            ',' => Some(Punctuation::Comma),
            '.' => Some(Punctuation::Period),
            '?' => Some(Punctuation::Question),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Punctuation::Blank => 'O',
            Punctuation::Comma => ',',
            Punctuation::Period => '.',
            Punctuation::Question => '?',
        }
    }

    fn code(self) -> usize {
        self as usize
    }
}

/// Capitalization classes: `O` (lower case) and `U` (capitalized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capitalization {
    /// Not capitalized
    Lower = 0,
    /// Capitalized
    Upper = 1,
}

impl Alphabet for Capitalization {
    const AXIS: Axis = Axis::Capitalization;

    const ALL: &'static [Self] = &[Capitalization::Lower, Capitalization::Upper];

    fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Capitalization::Lower),
            'U' => Some(Capitalization::Upper),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Capitalization::Lower => 'O',
            Capitalization::Upper => 'U',
        }
    }

    fn code(self) -> usize {
        self as usize
    }
}
