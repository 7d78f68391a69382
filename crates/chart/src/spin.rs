// external crates
use serde::{Deserialize, Serialize};

// nucdb modules
use nucdb_utils::f;

/// Confidence marker carried by a spin-parity assignment
///
/// ENSDF marks uncertain assignments with parentheses, and lower bounds
/// with a `GE` literal. Everything else is a firm assignment.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Tentative {
    /// Unqualified assignment
    #[default]
    Firm,
    /// Assignment wrapped in parentheses
    Tentative,
    /// `GE <spin>` lower-bound marker
    GreaterEqual,
}

/// A single spin-parity assignment for a nuclear level
///
/// A level carries up to three of these. Spins are stored as the numerator
/// with a half-integer flag, so 3/2 is `spin: 3, half: true` and plain 4 is
/// `spin: 4, half: false`.
///
/// ```rust
/// # use nucdb_chart::{SpinParity, Tentative};
/// let jp = SpinParity {
///     spin: 5,
///     half: true,
///     parity: -1,
///     tentative: Tentative::Tentative,
/// };
/// assert_eq!(jp.to_string(), "(5/2-)");
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct SpinParity {
    /// Spin numerator, -1 when unknown
    pub spin: i32,
    /// Half-integer spin flag
    pub half: bool,
    /// Parity, +1 or -1, with 0 for unknown
    pub parity: i8,
    /// Confidence marker
    pub tentative: Tentative,
}

impl Default for SpinParity {
    fn default() -> Self {
        Self {
            spin: -1,
            half: false,
            parity: 0,
            tentative: Tentative::Firm,
        }
    }
}

impl std::fmt::Display for SpinParity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let spin = match (self.spin, self.half) {
            (s, _) if s < 0 => String::new(),
            (s, true) => f!("{s}/2"),
            (s, false) => s.to_string(),
        };
        let parity = match self.parity {
            1 => "+",
            -1 => "-",
            _ => "",
        };
        match self.tentative {
            Tentative::Firm => write!(f, "{spin}{parity}"),
            Tentative::Tentative => write!(f, "({spin}{parity})"),
            Tentative::GreaterEqual => write!(f, "GE {spin}{parity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formatting() {
        let firm = SpinParity {
            spin: 3,
            half: true,
            parity: 1,
            tentative: Tentative::Firm,
        };
        assert_eq!(firm.to_string(), "3/2+");

        let whole = SpinParity {
            spin: 4,
            half: false,
            parity: -1,
            tentative: Tentative::Firm,
        };
        assert_eq!(whole.to_string(), "4-");

        let bound = SpinParity {
            spin: 10,
            half: false,
            parity: 0,
            tentative: Tentative::GreaterEqual,
        };
        assert_eq!(bound.to_string(), "GE 10");
    }

    #[test]
    fn display_parity_only() {
        let parity_only = SpinParity {
            parity: -1,
            ..Default::default()
        };
        assert_eq!(parity_only.to_string(), "-");
    }
}
