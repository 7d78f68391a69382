//! Half-life field tokenizer

// standard library
use std::str::FromStr;

// external crates
use log::warn;

// nucdb modules
use nucdb_chart::{HalfLife, Units};

/// Longest token run considered in a half-life field
const MAX_TOKENS: usize = 10;

/// Decode a raw ENSDF half-life field into a typed [HalfLife]
///
/// The field is a value token followed by a unit token, e.g. `"12.3 Y"`.
/// Stable levels carry the `STABLE` literal instead; a leading blank column
/// means it can land in either token position. Question marks flagging
/// uncertain values are treated as token separators.
///
/// Policy for odd input:
///
/// - empty or unparseable field reads as the "unknown" sentinel
/// - a non-positive value reads as stable, not as an error
/// - an unrecognised unit symbol keeps the value, logs, and leaves the
///   units at [Units::NoValue]
pub fn half_life_from_str(i: &str) -> HalfLife {
    let tokens: Vec<&str> = i
        .split([' ', '?'])
        .filter(|t| !t.is_empty())
        .take(MAX_TOKENS)
        .collect();

    let mut half_life = HalfLife::default();

    if tokens.first() == Some(&"STABLE") || tokens.get(1) == Some(&"STABLE") {
        half_life.value = HalfLife::STABLE_SENTINEL;
        half_life.units = Units::Stable;
        return half_life;
    }

    let Some(value) = tokens.first().and_then(|t| t.parse::<f64>().ok()) else {
        return half_life;
    };
    half_life.value = value;

    // a level that cannot decay, whatever the unit column claims
    if value <= 0.0 {
        half_life.units = Units::Stable;
        return half_life;
    }

    if let Some(symbol) = tokens.get(1) {
        match Units::from_str(symbol) {
            Ok(units) => half_life.units = units,
            Err(_) => warn!("unrecognised half-life unit \"{symbol}\", value kept"),
        }
    }

    half_life
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_unit() {
        let half_life = half_life_from_str("12.3 Y");
        assert_eq!(half_life.value, 12.3);
        assert_eq!(half_life.units, Units::Years);

        let half_life = half_life_from_str("5.2 US");
        assert_eq!(half_life.value, 5.2);
        assert_eq!(half_life.units, Units::Micros);
    }

    #[test]
    fn stable_literal() {
        let half_life = half_life_from_str("STABLE");
        assert_eq!(half_life.value, HalfLife::STABLE_SENTINEL);
        assert_eq!(half_life.units, Units::Stable);

        // leading blank column shifts the literal into the unit position
        let half_life = half_life_from_str(" STABLE");
        assert_eq!(half_life.units, Units::Stable);
    }

    #[test]
    fn non_positive_forces_stable() {
        let half_life = half_life_from_str("0 S");
        assert_eq!(half_life.value, 0.0);
        assert_eq!(half_life.units, Units::Stable);
    }

    #[test]
    fn unknown_unit_keeps_value() {
        let half_life = half_life_from_str("4.2 FORTNIGHT");
        assert_eq!(half_life.value, 4.2);
        assert_eq!(half_life.units, Units::NoValue);
    }

    #[test]
    fn empty_is_the_unknown_sentinel() {
        let half_life = half_life_from_str("          ");
        assert_eq!(half_life.value, -1.0);
        assert_eq!(half_life.units, Units::NoValue);
    }

    #[test]
    fn question_marks_are_separators() {
        let half_life = half_life_from_str("12 S?");
        assert_eq!(half_life.value, 12.0);
        assert_eq!(half_life.units, Units::Seconds);
    }
}
