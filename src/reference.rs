//! The fixed pitch reference everything is measured against, and conversions between the
//! logarithmic (cents, semitones) and linear (frequency, ratio) views of pitch.

/// The type of pitch differences measured in cents, i.e. hundredths of an equally tempered
/// semitone.
pub type Cents = f64;

/// The equally tempered frequency of middle C (C4) when A4 is tuned to 440 Hz.
pub const C4_FREQUENCY: f64 = 261.6255653005986;

/// The MIDI key number of middle C.
pub const C4_MIDI_NUMBER: i32 = 60;

pub const CENTS_PER_OCTAVE: Cents = 1200.0;

/// The frequency ratio corresponding to a pitch difference.
pub fn cents_to_ratio(cents: Cents) -> f64 {
    (cents / CENTS_PER_OCTAVE).exp2()
}

/// The pitch difference corresponding to a frequency ratio.
pub fn ratio_to_cents(ratio: f64) -> Cents {
    CENTS_PER_OCTAVE * ratio.log2()
}

/// The equally tempered frequency of the note `index` semitones above (or, if negative, below)
/// middle C.
pub fn equal_frequency_from_index(index: i32) -> f64 {
    C4_FREQUENCY * (index as f64 / 12.0).exp2()
}

/// The MIDI key number of the note `index` semitones away from middle C.
pub fn midi_number(index: i32) -> i32 {
    C4_MIDI_NUMBER + index
}
