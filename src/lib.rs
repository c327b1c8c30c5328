//! Note frequencies and interval beat rates in twelve-note temperaments.
//!
//! ```
//! use tempered::{interval::HarmonicInterval, temperament::Temperament};
//!
//! let t = Temperament::equal();
//! assert!((t.frequency("A4").unwrap() - 440.0).abs() < 1e-9);
//!
//! // equally tempered fifths are a little narrow, so their partials beat slowly
//! let beat = t.beat_frequency("C4", HarmonicInterval::PerfectFifth).unwrap();
//! assert!(beat < 0.0 && beat > -1.0);
//! ```
pub mod config;
pub mod interval;
pub mod notename;
pub mod reference;
pub mod temperament;
pub mod util;
