// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::Error;
use crate::spin::SpinParity;

/// Units of an ENSDF half-life field
///
/// The `FromStr` implementation maps the exact ENSDF unit symbols onto
/// variants, so `"Y"` is years and `"US"` is microseconds. The eV range
/// covers unbound levels quoted as widths rather than lifetimes.
///
/// ```rust
/// # use nucdb_chart::Units;
/// # use std::str::FromStr;
/// assert_eq!(Units::from_str("Y").unwrap(), Units::Years);
/// assert_eq!(Units::from_str("KEV").unwrap(), Units::Kev);
/// assert!(Units::from_str("FORTNIGHT").is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Units {
    /// No half-life information recorded
    #[default]
    NoValue,
    /// Stable, does not decay
    Stable,
    /// Years (`Y`)
    Years,
    /// Days (`D`)
    Days,
    /// Hours (`H`)
    Hours,
    /// Minutes (`M`)
    Minutes,
    /// Seconds (`S`)
    Seconds,
    /// Milliseconds (`MS`)
    Millis,
    /// Microseconds (`US`)
    Micros,
    /// Nanoseconds (`NS`)
    Nanos,
    /// Picoseconds (`PS`)
    Picos,
    /// Femtoseconds (`FS`)
    Femtos,
    /// Attoseconds (`AS`)
    Attos,
    /// Level width in eV (`EV`)
    Ev,
    /// Level width in keV (`KEV`)
    Kev,
    /// Level width in MeV (`MEV`)
    Mev,
}

impl std::str::FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "Y" => Ok(Units::Years),
            "D" => Ok(Units::Days),
            "H" => Ok(Units::Hours),
            "M" => Ok(Units::Minutes),
            "S" => Ok(Units::Seconds),
            "MS" => Ok(Units::Millis),
            "US" => Ok(Units::Micros),
            "NS" => Ok(Units::Nanos),
            "PS" => Ok(Units::Picos),
            "FS" => Ok(Units::Femtos),
            "AS" => Ok(Units::Attos),
            "EV" => Ok(Units::Ev),
            "KEV" => Ok(Units::Kev),
            "MEV" => Ok(Units::Mev),
            _ => Err(Error::UnknownUnits {
                hint: s.to_string(),
            }),
        }
    }
}

impl Units {
    /// The ENSDF symbol for a variant, empty for the sentinels
    pub fn symbol(&self) -> &str {
        match self {
            Units::NoValue => "",
            Units::Stable => "STABLE",
            Units::Years => "Y",
            Units::Days => "D",
            Units::Hours => "H",
            Units::Minutes => "M",
            Units::Seconds => "S",
            Units::Millis => "MS",
            Units::Micros => "US",
            Units::Nanos => "NS",
            Units::Picos => "PS",
            Units::Femtos => "FS",
            Units::Attos => "AS",
            Units::Ev => "EV",
            Units::Kev => "KEV",
            Units::Mev => "MEV",
        }
    }
}

/// Half-life of a level as a raw value with its source units
///
/// The default is the "unknown" sentinel of value -1 with [Units::NoValue].
/// Stable levels carry [STABLE_SENTINEL](HalfLife::STABLE_SENTINEL) with
/// [Units::Stable].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct HalfLife {
    /// Value in the source units
    pub value: f64,
    /// Units of the raw ENSDF field
    pub units: Units,
}

impl Default for HalfLife {
    fn default() -> Self {
        Self {
            value: -1.0,
            units: Units::NoValue,
        }
    }
}

impl HalfLife {
    /// Placeholder value for stable levels, effectively forever
    pub const STABLE_SENTINEL: f64 = 1e20;

    /// Julian year in seconds, the nuclear data convention
    const YEAR: f64 = 3.15576e7;

    /// Reduced Planck constant in eV seconds
    const HBAR_EV: f64 = 6.582_119_569e-16;

    /// Unit-aware conversion to seconds
    ///
    /// Stable levels convert to infinity and unknown half-lives to `None`.
    /// Values quoted as level widths convert through T = ln2 * hbar / width.
    ///
    /// ```rust
    /// # use nucdb_chart::{HalfLife, Units};
    /// let half_life = HalfLife { value: 2.0, units: Units::Minutes };
    /// assert_eq!(half_life.seconds(), Some(120.0));
    ///
    /// assert_eq!(HalfLife::default().seconds(), None);
    /// ```
    pub fn seconds(&self) -> Option<f64> {
        let scale = match self.units {
            Units::NoValue => return None,
            Units::Stable => return Some(f64::INFINITY),
            Units::Ev => return Some(self.width_to_seconds(1.0)),
            Units::Kev => return Some(self.width_to_seconds(1e3)),
            Units::Mev => return Some(self.width_to_seconds(1e6)),
            Units::Years => Self::YEAR,
            Units::Days => 86400.0,
            Units::Hours => 3600.0,
            Units::Minutes => 60.0,
            Units::Seconds => 1.0,
            Units::Millis => 1e-3,
            Units::Micros => 1e-6,
            Units::Nanos => 1e-9,
            Units::Picos => 1e-12,
            Units::Femtos => 1e-15,
            Units::Attos => 1e-18,
        };
        Some(self.value * scale)
    }

    fn width_to_seconds(&self, to_ev: f64) -> f64 {
        std::f64::consts::LN_2 * Self::HBAR_EV / (self.value * to_ev)
    }
}

impl std::fmt::Display for HalfLife {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.units {
            Units::NoValue => write!(f, "?"),
            Units::Stable => write!(f, "STABLE"),
            _ => write!(f, "{} {}", self.value, self.units.symbol()),
        }
    }
}

/// An energy state of a nuclide
///
/// Levels are stored in the global level array of the database, in strictly
/// increasing energy order within each nuclide. The transitions depopulating
/// a level live in a contiguous run of the global transition array,
/// referenced here by base index and count.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Level {
    /// Level energy (keV)
    pub energy: f64,
    /// Encoded uncertainty digit count from the source record
    pub energy_unc: i32,
    /// Half-life, defaulting to the "unknown" sentinel
    pub half_life: HalfLife,
    /// Up to three spin-parity assignments
    pub spins: Vec<SpinParity>,
    /// Index of this level's first transition in the global array
    pub first_transition: usize,
    /// Number of transitions depopulating this level
    pub num_transitions: usize,
}

impl Level {
    /// All spin-parity assignments as one formatted string
    ///
    /// ```rust
    /// # use nucdb_chart::{Level, SpinParity, Tentative};
    /// let level = Level {
    ///     spins: vec![
    ///         SpinParity { spin: 1, half: true, parity: -1, tentative: Tentative::Firm },
    ///         SpinParity { spin: 3, half: true, parity: -1, tentative: Tentative::Firm },
    ///     ],
    ///     ..Default::default()
    /// };
    /// assert_eq!(level.spin_parity_string(), "1/2-, 3/2-");
    /// ```
    pub fn spin_parity_string(&self) -> String {
        use itertools::Itertools;
        self.spins.iter().map(|jp| jp.to_string()).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_conversion() {
        let years = HalfLife {
            value: 12.3,
            units: Units::Years,
        };
        assert_eq!(years.seconds(), Some(12.3 * 3.15576e7));

        let stable = HalfLife {
            value: HalfLife::STABLE_SENTINEL,
            units: Units::Stable,
        };
        assert_eq!(stable.seconds(), Some(f64::INFINITY));

        assert_eq!(HalfLife::default().seconds(), None);
    }

    #[test]
    fn width_conversion() {
        // 1 keV width is roughly 4.6e-19 s
        let width = HalfLife {
            value: 1.0,
            units: Units::Kev,
        };
        let seconds = width.seconds().unwrap();
        assert!((seconds - 4.562e-19).abs() < 1e-21);
    }
}
