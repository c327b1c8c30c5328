//! Temperaments defined in YAML files, and a few well-known historical ones to start from.
//!
//! A configuration looks like this:
//!
//! ```yaml
//! temperaments:
//!   - name: my meantone
//!     description: fifths a quarter comma narrow
//!     deviations: [0.0, -24.0, -6.8, 10.3, -13.7, 3.4, -20.5, -3.4, -27.4, -10.3, 6.8, -17.1]
//! ```

use std::{error::Error, fmt, io, sync::LazyLock};

use serde_derive::{Deserialize, Serialize};

use crate::{
    reference::Cents,
    temperament::{fifths, DeviationTableErr, Temperament, TemperamentErr},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct TemperamentDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kept as raw values, so that entries which aren't numbers are reported like every other
    /// problem with the table, by [realize][TemperamentDefinition::realize].
    pub deviations: Vec<serde_yml::Value>,
}

impl TemperamentDefinition {
    pub fn new(name: String, description: Option<String>, deviations: &[Cents]) -> Self {
        Self {
            name,
            description,
            deviations: deviations.iter().map(|&d| d.into()).collect(),
        }
    }

    /// Check the deviation table and build the [Temperament].
    pub fn realize(&self) -> Result<Temperament, TemperamentErr> {
        let mut deviations = Vec::with_capacity(self.deviations.len());
        for (i, v) in self.deviations.iter().enumerate() {
            match v.as_f64() {
                Some(d) => deviations.push(d),
                None {} => return Err(DeviationTableErr::NotANumber(i).into()),
            }
        }
        Temperament::new(&deviations)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub temperaments: Vec<TemperamentDefinition>,
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigErr> {
        Ok(serde_yml::from_str(s)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ConfigErr> {
        Ok(serde_yml::from_reader(reader)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigErr> {
        Ok(serde_yml::to_string(self)?)
    }

    /// The configuration containing all of the [TEMPERAMENT_TEMPLATES].
    pub fn templates() -> Self {
        Config {
            temperaments: TEMPERAMENT_TEMPLATES.to_vec(),
        }
    }

    /// Realize the temperament with the given name. If several temperaments share a name, the
    /// first one wins.
    pub fn get(&self, name: &str) -> Result<Temperament, ConfigErr> {
        let definition = self
            .temperaments
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ConfigErr::UnknownTemperament(name.to_string()))?;
        let temperament = definition
            .realize()
            .map_err(|source| ConfigErr::Temperament {
                name: name.to_string(),
                source,
            })?;
        log::debug!("realized temperament '{}'", name);
        Ok(temperament)
    }

    /// Realize every temperament, in order. Stops at the first invalid one.
    pub fn realize_all(&self) -> Result<Vec<(String, Temperament)>, ConfigErr> {
        self.temperaments
            .iter()
            .map(|d| -> Result<(String, Temperament), ConfigErr> {
                let temperament = d.realize().map_err(|source| ConfigErr::Temperament {
                    name: d.name.clone(),
                    source,
                })?;
                log::debug!("realized temperament '{}'", d.name);
                Ok((d.name.clone(), temperament))
            })
            .collect()
    }
}

pub static TEMPERAMENT_TEMPLATES: LazyLock<[TemperamentDefinition; 5]> = LazyLock::new(|| {
    const E_FLAT: usize = 3;
    let pc = fifths::pythagorean_comma();
    let sc = fifths::syntonic_comma();
    let w = -pc / 4.0;
    let v = -pc / 6.0;

    [
        TemperamentDefinition::new(
            "equal temperament".into(),
            Some("twelve equal semitones".into()),
            &[0.0; 12],
        ),
        TemperamentDefinition::new(
            "pythagorean".into(),
            Some("eleven pure fifths from Eb to G#, with the wolf between G# and Eb".into()),
            &fifths::from_fifth_chain(E_FLAT, &[0.0; 11]),
        ),
        TemperamentDefinition::new(
            "quarter-comma meantone".into(),
            Some(
                "fifths a quarter syntonic comma narrow, so that major thirds are pure, \
                with the wolf between G# and Eb"
                    .into(),
            ),
            &fifths::from_fifth_chain(E_FLAT, &[-sc / 4.0; 11]),
        ),
        TemperamentDefinition::new(
            "werckmeister III".into(),
            Some(
                "C-G-D-A and B-F# a quarter Pythagorean comma narrow, all other fifths pure"
                    .into(),
            ),
            &fifths::from_fifth_chain(E_FLAT, &[0.0, 0.0, 0.0, w, w, w, 0.0, 0.0, w, 0.0, 0.0]),
        ),
        TemperamentDefinition::new(
            "vallotti".into(),
            Some("F-C-G-D-A-E-B a sixth Pythagorean comma narrow, all other fifths pure".into()),
            &fifths::from_fifth_chain(E_FLAT, &[0.0, 0.0, v, v, v, v, v, v, 0.0, 0.0, 0.0]),
        ),
    ]
});

#[derive(Debug)]
pub enum ConfigErr {
    Yaml(serde_yml::Error),
    Temperament {
        name: String,
        source: TemperamentErr,
    },
    UnknownTemperament(String),
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Yaml(e) => write!(f, "could not read configuration: {}", e),
            ConfigErr::Temperament { name, source } => {
                write!(f, "temperament '{}': {}", name, source)
            }
            ConfigErr::UnknownTemperament(name) => {
                write!(f, "there's no temperament called '{}'", name)
            }
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Yaml(e) => Some(e),
            ConfigErr::Temperament { source, .. } => Some(source),
            ConfigErr::UnknownTemperament(_) => None {},
        }
    }
}

impl From<serde_yml::Error> for ConfigErr {
    fn from(value: serde_yml::Error) -> Self {
        Self::Yaml(value)
    }
}
