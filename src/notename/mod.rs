//! Note names like `C4`, `F#2`, or `Bbb6`.
//!
//! The accepted grammar is deliberately narrow: one upper-case letter `A`..`G`, then up to two
//! sharps (`#`) or up to two flats (`b`) but never both, then a single octave digit `0`..`8`.
//! Nothing may precede or follow.

use std::{error::Error, fmt, str::FromStr};

use crate::{reference, util::mod12};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Distance in semitones above C of the natural note with this letter.
    pub fn offset(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None {},
        }
    }

    fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// How many semitones this accidental raises (or, if negative, lowers) the natural note.
    pub fn adjustment(&self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }
}

/// A parsed note name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    letter: Letter,
    accidental: Accidental,
    /// always in `0..=8`
    octave: u8,
}

impl NoteName {
    pub const MAX_OCTAVE: u8 = 8;

    /// Returns `None` if the octave is larger than [NoteName::MAX_OCTAVE].
    pub fn new(letter: Letter, accidental: Accidental, octave: u8) -> Option<Self> {
        if octave > Self::MAX_OCTAVE {
            return None {};
        }
        Some(NoteName {
            letter,
            accidental,
            octave,
        })
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// The number of semitones from middle C to this note. Negative below C4. No clamping
    /// happens: `Cbb0` is simply 50 semitones below middle C.
    pub fn chromatic_index(&self) -> i32 {
        12 * (self.octave as i32 - 4) + self.letter.offset() + self.accidental.adjustment()
    }

    /// The MIDI key number of this note, which may be outside of `0..128`.
    pub fn midi_number(&self) -> i32 {
        reference::midi_number(self.chromatic_index())
    }

    /// The note `index` semitones from middle C, spelled with sharps. Returns `None` if the note
    /// would not lie in octaves 0 to 8.
    pub fn from_chromatic_index(index: i32) -> Option<Self> {
        const SHARP_SPELLING: [(Letter, Accidental); 12] = [
            (Letter::C, Accidental::Natural),
            (Letter::C, Accidental::Sharp),
            (Letter::D, Accidental::Natural),
            (Letter::D, Accidental::Sharp),
            (Letter::E, Accidental::Natural),
            (Letter::F, Accidental::Natural),
            (Letter::F, Accidental::Sharp),
            (Letter::G, Accidental::Natural),
            (Letter::G, Accidental::Sharp),
            (Letter::A, Accidental::Natural),
            (Letter::A, Accidental::Sharp),
            (Letter::B, Accidental::Natural),
        ];

        let (octave, class) = mod12::split_octave(index);
        let octave = u8::try_from(octave).ok()?;
        let (letter, accidental) = SHARP_SPELLING[class];
        Self::new(letter, accidental, octave)
    }

    /// Write the pitch class (i.e. the note name without the octave number)
    pub fn write_class<W: fmt::Write>(&self, f: &mut W) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.as_str())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_class(f)?;
        write!(f, "{}", self.octave)
    }
}

impl FromStr for NoteName {
    type Err = MalformedNoteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MalformedNoteName {
            input: s.to_string(),
        };

        let mut chars = s.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(err)?;

        let rest = chars.as_str();
        let (accidental, rest) = if let Some(r) = rest.strip_prefix("##") {
            (Accidental::DoubleSharp, r)
        } else if let Some(r) = rest.strip_prefix('#') {
            (Accidental::Sharp, r)
        } else if let Some(r) = rest.strip_prefix("bb") {
            (Accidental::DoubleFlat, r)
        } else if let Some(r) = rest.strip_prefix('b') {
            (Accidental::Flat, r)
        } else {
            (Accidental::Natural, rest)
        };

        let octave = match rest.as_bytes() {
            [d @ b'0'..=b'8'] => d - b'0',
            _ => return Err(err()),
        };

        Ok(NoteName {
            letter,
            accidental,
            octave,
        })
    }
}

/// The input didn't match the note name grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedNoteName {
    pub input: String,
}

impl fmt::Display for MalformedNoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed note name '{}': expected a letter A-G, up to two '#' or 'b', and an octave 0-8",
            self.input
        )
    }
}

impl Error for MalformedNoteName {}
