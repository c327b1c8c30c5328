//! A [Temperament] describes how far each of the twelve pitch classes is detuned from equal
//! temperament, and answers questions about the resulting frequencies.

use std::{error::Error, fmt};

use crate::{
    interval::{HarmonicInterval, UnknownInterval},
    notename::{MalformedNoteName, NoteName},
    reference::{self, Cents},
    util::mod12,
};

pub mod fifths;

/// Deviations from twelve-tone equal temperament, one per pitch class.
///
/// Index 0 is C, index 1 is C#/Db, and so on up to index 11 for B. All deviations are finite
/// and measured in [Cents]. Once constructed, a [Temperament] never changes, so it can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Temperament {
    deviations: [Cents; 12],
}

impl Temperament {
    /// Checks that there are exactly twelve deviations, and that all of them are finite.
    pub fn new(deviations: &[Cents]) -> Result<Self, TemperamentErr> {
        let deviations: [Cents; 12] = deviations.try_into().map_err(|_| {
            let err = DeviationTableErr::WrongLength(deviations.len());
            log::debug!("rejecting deviation table: {err}");
            err
        })?;

        if let Some((i, x)) = deviations.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            let err = DeviationTableErr::NotFinite(i, *x);
            log::debug!("rejecting deviation table: {err}");
            return Err(err.into());
        }

        Ok(Temperament { deviations })
    }

    /// Twelve-tone equal temperament: no deviations at all.
    pub fn equal() -> Self {
        Temperament {
            deviations: [0.0; 12],
        }
    }

    pub fn deviations(&self) -> &[Cents; 12] {
        &self.deviations
    }

    /// The deviation of a pitch class (counted from C). Pitch classes wrap around, so `12` is C
    /// again.
    pub fn deviation(&self, pitch_class: usize) -> Cents {
        self.deviations[pitch_class % 12]
    }

    /// The frequency of the note `index` semitones away from middle C.
    ///
    /// This never fails: for indices below middle C, the deviation is looked up for the pitch
    /// class obtained by wrapping around, i.e. `-1` uses the deviation of B.
    pub fn frequency_from_index(&self, index: i32) -> f64 {
        reference::equal_frequency_from_index(index)
            * reference::cents_to_ratio(self.deviations[mod12::pitch_class(index)])
    }

    pub fn frequency_of(&self, note: &NoteName) -> f64 {
        self.frequency_from_index(note.chromatic_index())
    }

    /// The frequency of a note like "A4" or "Ebb2". See [NoteName] for the accepted syntax.
    ///
    /// The documented range is A0 to C8, but notes outside of that range that are still
    /// syntactically correct are computed nonetheless.
    pub fn frequency(&self, note: &str) -> Result<f64, TemperamentErr> {
        let note: NoteName = note.parse()?;
        Ok(self.frequency_of(&note))
    }

    /// The rate at which the coinciding partials of the given interval beat when it is played
    /// above `bottom`.
    ///
    /// This is the frequency of the upper note's coinciding partial minus that of the lower
    /// note's. It vanishes if the interval is pure. The sign says which partial is higher: A
    /// positive result means the interval is wider than pure.
    pub fn beat_frequency_of(&self, bottom: &NoteName, interval: HarmonicInterval) -> f64 {
        let bottom_index = bottom.chromatic_index();
        let top_index = bottom_index + interval.semitones();
        let (top_partial, bottom_partial) = interval.partials();

        let bottom_f = self.frequency_from_index(bottom_index);
        let top_f = self.frequency_from_index(top_index);
        let beat = top_f * top_partial as f64 - bottom_f * bottom_partial as f64;

        log::trace!("{interval} above {bottom}: {top_f} Hz over {bottom_f} Hz beats at {beat} Hz");
        beat
    }

    /// Like [beat_frequency_of][Temperament::beat_frequency_of], but parsing the bottom note.
    pub fn beat_frequency(
        &self,
        bottom: &str,
        interval: HarmonicInterval,
    ) -> Result<f64, TemperamentErr> {
        let bottom: NoteName = bottom.parse()?;
        Ok(self.beat_frequency_of(&bottom, interval))
    }

    /// Like [beat_frequency][Temperament::beat_frequency], but the interval is also given by its
    /// short name, like "P5" or "m3".
    pub fn beat_frequency_named(&self, bottom: &str, interval: &str) -> Result<f64, TemperamentErr> {
        let bottom: NoteName = bottom.parse()?;
        let interval: HarmonicInterval = interval.parse()?;
        Ok(self.beat_frequency_of(&bottom, interval))
    }

    /// The beat frequencies of all [HarmonicInterval]s above `bottom`, in the order of
    /// [HarmonicInterval::ALL].
    pub fn beat_frequencies(
        &self,
        bottom: &str,
    ) -> Result<[(HarmonicInterval, f64); 6], TemperamentErr> {
        let bottom: NoteName = bottom.parse()?;
        Ok(HarmonicInterval::ALL.map(|i| (i, self.beat_frequency_of(&bottom, i))))
    }

    /// The size of the interval above `bottom` in this temperament.
    pub fn interval_cents(
        &self,
        bottom: &str,
        interval: HarmonicInterval,
    ) -> Result<Cents, TemperamentErr> {
        let bottom: NoteName = bottom.parse()?;
        let bottom_index = bottom.chromatic_index();
        let top_index = bottom_index + interval.semitones();
        Ok(100.0 * interval.semitones() as Cents
            + self.deviations[mod12::pitch_class(top_index)]
            - self.deviations[mod12::pitch_class(bottom_index)])
    }
}

impl Default for Temperament {
    fn default() -> Self {
        Self::equal()
    }
}

/// Reasons why a list of deviations doesn't describe a [Temperament].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviationTableErr {
    /// the number of entries, if it isn't twelve
    WrongLength(usize),
    /// position and value of a NaN or infinite entry
    NotFinite(usize, f64),
    /// position of an entry that isn't a number at all
    NotANumber(usize),
}

impl fmt::Display for DeviationTableErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviationTableErr::WrongLength(n) => {
                write!(f, "expected 12 deviations, one per pitch class, but got {}", n)
            }
            DeviationTableErr::NotFinite(i, x) => {
                write!(f, "the deviation for pitch class {} is {}, which is not finite", i, x)
            }
            DeviationTableErr::NotANumber(i) => {
                write!(f, "the deviation for pitch class {} is not a number", i)
            }
        }
    }
}

impl Error for DeviationTableErr {}

#[derive(Debug, Clone, PartialEq)]
pub enum TemperamentErr {
    InvalidDeviationTable(DeviationTableErr),
    MalformedNoteName(MalformedNoteName),
    UnknownInterval(UnknownInterval),
}

impl fmt::Display for TemperamentErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperamentErr::InvalidDeviationTable(e) => write!(f, "invalid deviation table: {}", e),
            TemperamentErr::MalformedNoteName(e) => write!(f, "{}", e),
            TemperamentErr::UnknownInterval(e) => write!(f, "{}", e),
        }
    }
}

impl Error for TemperamentErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TemperamentErr::InvalidDeviationTable(e) => Some(e),
            TemperamentErr::MalformedNoteName(e) => Some(e),
            TemperamentErr::UnknownInterval(e) => Some(e),
        }
    }
}

impl From<DeviationTableErr> for TemperamentErr {
    fn from(value: DeviationTableErr) -> Self {
        Self::InvalidDeviationTable(value)
    }
}

impl From<MalformedNoteName> for TemperamentErr {
    fn from(value: MalformedNoteName) -> Self {
        Self::MalformedNoteName(value)
    }
}

impl From<UnknownInterval> for TemperamentErr {
    fn from(value: UnknownInterval) -> Self {
        Self::UnknownInterval(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    /// a table where every pitch class is off by a different amount, so that mixing them up
    /// shows
    fn lopsided() -> Temperament {
        Temperament::new(&[
            0.0, -11.0, 2.5, 7.0, -13.5, 1.0, -9.0, -2.0, 14.0, -10.0, 3.0, -25.0,
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects() {
        assert_eq!(
            Temperament::new(&[0.0; 11]),
            Err(TemperamentErr::InvalidDeviationTable(
                DeviationTableErr::WrongLength(11)
            ))
        );
        assert_eq!(
            Temperament::new(&[0.0; 13]),
            Err(TemperamentErr::InvalidDeviationTable(
                DeviationTableErr::WrongLength(13)
            ))
        );
        assert_eq!(
            Temperament::new(&[]),
            Err(TemperamentErr::InvalidDeviationTable(
                DeviationTableErr::WrongLength(0)
            ))
        );

        let mut with_infinity = [0.0; 12];
        with_infinity[4] = f64::INFINITY;
        assert_eq!(
            Temperament::new(&with_infinity),
            Err(TemperamentErr::InvalidDeviationTable(
                DeviationTableErr::NotFinite(4, f64::INFINITY)
            ))
        );

        // NaN isn't equal to itself, so match instead of comparing
        let mut with_nan = [0.0; 12];
        with_nan[7] = f64::NAN;
        assert!(matches!(
            Temperament::new(&with_nan),
            Err(TemperamentErr::InvalidDeviationTable(
                DeviationTableErr::NotFinite(7, _)
            ))
        ));
    }

    #[test]
    fn test_frequency_from_index() {
        let t = Temperament::equal();
        assert_relative_eq!(
            t.frequency_from_index(0),
            261.6255653005986,
            max_relative = 1e-15
        );
        assert_relative_eq!(t.frequency_from_index(9), 440.0, max_relative = 1e-12);

        let t = lopsided();
        let one_test = |index: i32, pitch_class: usize| {
            assert_relative_eq!(
                t.frequency_from_index(index),
                reference::equal_frequency_from_index(index)
                    * (t.deviation(pitch_class) / 1200.0).exp2(),
                max_relative = 1e-12
            )
        };

        let examples = [
            (0, 0),
            (11, 11),
            (12, 0),
            (-1, 11),
            (-2, 10),
            (-12, 0),
            (-13, 11),
            (-50, 10),
            (61, 1),
        ];
        for (index, pitch_class) in examples {
            one_test(index, pitch_class);
        }
    }

    #[test]
    fn test_frequency() {
        let t = Temperament::equal();
        assert_relative_eq!(t.frequency("A4").unwrap(), 440.0, max_relative = 1e-12);
        assert_relative_eq!(t.frequency("A0").unwrap(), 27.5, max_relative = 1e-12);
        assert_relative_eq!(t.frequency("A3").unwrap(), 220.0, max_relative = 1e-12);
        assert_eq!(t.frequency("C4").unwrap(), 261.6255653005986);
        assert_eq!(t.frequency("C#4").unwrap(), t.frequency("Db4").unwrap());

        let t = lopsided();
        assert_relative_eq!(
            t.frequency("A4").unwrap(),
            440.0 * (-10.0 / 1200.0 as f64).exp2(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            t.frequency("B3").unwrap(),
            t.frequency("B4").unwrap() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_frequency_rejects() {
        let t = Temperament::equal();
        for s in ["H4", "c4", "C", "C#9", "C###4"] {
            assert_eq!(
                t.frequency(s),
                Err(TemperamentErr::MalformedNoteName(MalformedNoteName {
                    input: s.to_string()
                }))
            );
        }
    }

    #[test]
    fn test_beat_frequency() {
        let t = Temperament::equal();
        let examples = [
            (HarmonicInterval::MinorThird, -14.118473193187356),
            (HarmonicInterval::MajorThird, 10.382401148486451),
            (HarmonicInterval::PerfectFourth, 1.1824330966171601),
            (HarmonicInterval::PerfectFifth, -0.8858239382973352),
            (HarmonicInterval::MinorSixth, -16.48103450506369),
            (HarmonicInterval::MajorSixth, 11.872173497006543),
        ];

        for (interval, expected) in examples {
            assert_relative_eq!(
                t.beat_frequency("C4", interval).unwrap(),
                expected,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_beat_frequency_vanishes_for_pure_intervals() {
        // C to G is a pure fifth, C to E a pure third
        let mut deviations = [0.0; 12];
        deviations[4] = 1200.0 * (5.0 / 4.0 as f64).log2() - 400.0;
        deviations[7] = 1200.0 * (3.0 / 2.0 as f64).log2() - 700.0;
        let t = Temperament::new(&deviations).unwrap();

        for bottom in ["C1", "C4", "C7"] {
            assert!(
                t.beat_frequency(bottom, HarmonicInterval::PerfectFifth)
                    .unwrap()
                    .abs()
                    < 1e-9
            );
            assert!(
                t.beat_frequency(bottom, HarmonicInterval::MajorThird)
                    .unwrap()
                    .abs()
                    < 1e-9
            );
        }
    }

    #[test]
    fn test_beat_frequency_named() {
        let t = lopsided();
        assert_eq!(
            t.beat_frequency_named("D3", "m6"),
            t.beat_frequency("D3", HarmonicInterval::MinorSixth)
        );
        assert_eq!(
            t.beat_frequency_named("C4", "m2"),
            Err(TemperamentErr::UnknownInterval(UnknownInterval {
                input: "m2".to_string()
            }))
        );
        assert_eq!(
            t.beat_frequency_named("c4", "P5"),
            Err(TemperamentErr::MalformedNoteName(MalformedNoteName {
                input: "c4".to_string()
            }))
        );
    }

    #[test]
    fn test_beat_frequencies() {
        let t = lopsided();
        let all = t.beat_frequencies("F#2").unwrap();
        for (i, (interval, beat)) in all.iter().enumerate() {
            assert_eq!(*interval, HarmonicInterval::ALL[i]);
            assert_eq!(Ok(*beat), t.beat_frequency("F#2", *interval));
        }
    }

    #[test]
    fn test_interval_cents() {
        let t = Temperament::equal();
        for i in HarmonicInterval::ALL {
            assert_relative_eq!(
                t.interval_cents("E5", i).unwrap(),
                100.0 * i.semitones() as f64
            );
        }

        // B to E wraps around the octave: E is pitch class 4, B is 11
        let t = lopsided();
        assert_relative_eq!(
            t.interval_cents("B3", HarmonicInterval::PerfectFourth)
                .unwrap(),
            500.0 - 13.5 + 25.0
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TemperamentErr::from(DeviationTableErr::WrongLength(13)).to_string(),
            "invalid deviation table: expected 12 deviations, one per pitch class, but got 13"
        );
    }
}
