//! The harmonic intervals whose beating we know how to describe.
//!
//! For each interval, there's a pair of low partials (overtones) of the upper and lower note
//! that coincide exactly when the interval is tuned pure. If the interval is tempered, these
//! partials are slightly apart and the listener hears them beat.

use std::{error::Error, fmt, str::FromStr};

use num_rational::Ratio;
use num_traits::ToPrimitive;
use serde_derive::{Deserialize, Serialize};

use crate::reference::{self, Cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicInterval {
    #[serde(rename = "m3")]
    MinorThird,
    #[serde(rename = "M3")]
    MajorThird,
    #[serde(rename = "P4")]
    PerfectFourth,
    #[serde(rename = "P5")]
    PerfectFifth,
    #[serde(rename = "m6")]
    MinorSixth,
    #[serde(rename = "M6")]
    MajorSixth,
}

impl HarmonicInterval {
    pub const ALL: [HarmonicInterval; 6] = [
        HarmonicInterval::MinorThird,
        HarmonicInterval::MajorThird,
        HarmonicInterval::PerfectFourth,
        HarmonicInterval::PerfectFifth,
        HarmonicInterval::MinorSixth,
        HarmonicInterval::MajorSixth,
    ];

    /// The size of the interval in equally tempered semitones.
    pub fn semitones(&self) -> i32 {
        match self {
            HarmonicInterval::MinorThird => 3,
            HarmonicInterval::MajorThird => 4,
            HarmonicInterval::PerfectFourth => 5,
            HarmonicInterval::PerfectFifth => 7,
            HarmonicInterval::MinorSixth => 8,
            HarmonicInterval::MajorSixth => 9,
        }
    }

    /// The numbers of the coinciding partials, as `(top_partial, bottom_partial)`. The
    /// `top_partial`-th partial of the upper note meets the `bottom_partial`-th partial of the
    /// lower note.
    pub fn partials(&self) -> (u32, u32) {
        match self {
            HarmonicInterval::MinorThird => (5, 6),
            HarmonicInterval::MajorThird => (4, 5),
            HarmonicInterval::PerfectFourth => (3, 4),
            HarmonicInterval::PerfectFifth => (2, 3),
            HarmonicInterval::MinorSixth => (5, 8),
            HarmonicInterval::MajorSixth => (3, 5),
        }
    }

    /// The frequency ratio (upper over lower) of the pure interval.
    pub fn just_ratio(&self) -> Ratio<u32> {
        let (top, bottom) = self.partials();
        Ratio::new(bottom, top)
    }

    /// The size of the pure interval.
    pub fn just_cents(&self) -> Cents {
        // all ratios are of small integers, so the conversion can't fail
        reference::ratio_to_cents(self.just_ratio().to_f64().unwrap_or(f64::NAN))
    }

    /// The short name used in text, like "P5" or "m3".
    pub fn short_name(&self) -> &'static str {
        match self {
            HarmonicInterval::MinorThird => "m3",
            HarmonicInterval::MajorThird => "M3",
            HarmonicInterval::PerfectFourth => "P4",
            HarmonicInterval::PerfectFifth => "P5",
            HarmonicInterval::MinorSixth => "m6",
            HarmonicInterval::MajorSixth => "M6",
        }
    }
}

impl fmt::Display for HarmonicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for HarmonicInterval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonicInterval::ALL
            .into_iter()
            .find(|i| i.short_name() == s)
            .ok_or_else(|| UnknownInterval {
                input: s.to_string(),
            })
    }
}

/// The input is not one of the short names "m3", "M3", "P4", "P5", "m6", "M6".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInterval {
    pub input: String,
}

impl fmt::Display for UnknownInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interval '{}': expected one of m3, M3, P4, P5, m6, M6",
            self.input
        )
    }
}

impl Error for UnknownInterval {}
