//! Most historical temperaments are described as a chain of fifths, some of them narrowed (or
//! widened) by a fraction of a comma. This module turns such descriptions into deviation tables.

use crate::{
    reference::{self, Cents},
    util::mod12,
};

/// The Pythagorean comma: twelve pure fifths exceed seven octaves by this much.
pub fn pythagorean_comma() -> Cents {
    12.0 * pure_fifth() - 7.0 * reference::CENTS_PER_OCTAVE
}

/// The syntonic comma: four pure fifths exceed two octaves and a pure major third by this much.
pub fn syntonic_comma() -> Cents {
    reference::ratio_to_cents(81.0 / 80.0)
}

pub fn pure_fifth() -> Cents {
    reference::ratio_to_cents(1.5)
}

/// Compute the deviations from equal temperament of the twelve pitch classes, given eleven
/// consecutive fifths starting on the pitch class `start`.
///
/// `tempering[k]` is how much the `k`-th fifth of the chain differs from a pure fifth, in cents.
/// Narrow fifths are negative. The twelfth fifth, from the end of the chain back to `start`,
/// takes up whatever is left over (the "wolf", if the other eleven don't close the circle).
///
/// The result is normalised so that C has no deviation.
pub fn from_fifth_chain(start: usize, tempering: &[Cents; 11]) -> [Cents; 12] {
    let mut deviations = [0.0; 12];

    let mut pitch_class = start % 12;
    let mut deviation = 0.0;
    for t in tempering {
        pitch_class = mod12::add_mod12(pitch_class, 7);
        deviation += pure_fifth() + t - 700.0;
        deviations[pitch_class] = deviation;
    }

    let c = deviations[0];
    deviations.map(|d| d - c)
}
