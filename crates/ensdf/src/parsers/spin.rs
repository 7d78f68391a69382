//! Spin-parity field tokenizer and classifier
//!
//! Splitting and interpreting are kept separate: a small tokenizer turns
//! the raw field into a typed token stream, and a classifier folds the
//! stream into at most three assignments. Both halves are independently
//! testable and neither ever fails; malformed input classifies to zero
//! assignments.

// external crates
use nucdb_chart::{SpinParity, Tentative, MAX_SPINS_PER_LEVEL};

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{map, map_res, opt, value};
use nom::sequence::preceded;
use nom::IResult;

/// Tokens of a spin-parity entry
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum SpinToken {
    /// `(` opening a tentative group
    Open,
    /// `)` closing a tentative group
    Close,
    /// `+` or `-`
    Sign(i8),
    /// Spin numerator with the half-integer flag, `3/2` or `4`
    Number { numerator: i32, half: bool },
    /// `GE` lower-bound literal
    GreaterEqual,
}

/// One token from the head of the input, `None` for a separator
fn token(i: &str) -> IResult<&str, Option<SpinToken>> {
    alt((
        value(Some(SpinToken::Open), char('(')),
        value(Some(SpinToken::Close), char(')')),
        value(Some(SpinToken::Sign(1)), char('+')),
        value(Some(SpinToken::Sign(-1)), char('-')),
        value(Some(SpinToken::GreaterEqual), tag("GE")),
        map(number, Some),
        value(None, one_of(", ?")),
    ))(i)
}

/// Spin numerator, with `/<denominator>` marking a half-integer spin
fn number(i: &str) -> IResult<&str, SpinToken> {
    let (i, numerator) = map_res(digit1, |s: &str| s.parse::<i32>())(i)?;
    let (i, denominator) = opt(preceded(char('/'), digit1))(i)?;
    Ok((
        i,
        SpinToken::Number {
            numerator,
            half: denominator.is_some(),
        },
    ))
}

/// Tokenize a raw field, dropping separators and unknown characters
pub(crate) fn tokenize(i: &str) -> Vec<SpinToken> {
    let mut tokens = Vec::new();
    let mut rest = i.trim();

    while !rest.is_empty() {
        match token(rest) {
            Ok((r, Some(t))) => {
                tokens.push(t);
                rest = r;
            }
            Ok((r, None)) => rest = r,
            Err(_) => {
                // unknown character, drop it and carry on
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }

    tokens
}

/// Fold a token stream into at most three assignments
fn classify(tokens: &[SpinToken]) -> Vec<SpinParity> {
    let mut assignments: Vec<SpinParity> = Vec::new();
    let mut tentative = Tentative::Firm;
    let mut greater_equal = false;
    let mut closed = false;

    for token in tokens {
        match token {
            SpinToken::Open => tentative = Tentative::Tentative,
            SpinToken::Close => {
                closed = true;
                tentative = Tentative::Firm;
            }
            SpinToken::GreaterEqual => greater_equal = true,
            SpinToken::Number { numerator, half } => {
                if assignments.len() >= MAX_SPINS_PER_LEVEL {
                    continue;
                }
                assignments.push(SpinParity {
                    spin: *numerator,
                    half: *half,
                    parity: 0,
                    tentative: if greater_equal {
                        Tentative::GreaterEqual
                    } else {
                        tentative
                    },
                });
                greater_equal = false;
                closed = false;
            }
            SpinToken::Sign(sign) => match assignments.last_mut() {
                // a bare sign is a parity-only assignment, spin unknown
                None => assignments.push(SpinParity {
                    parity: *sign,
                    tentative,
                    ..Default::default()
                }),
                // a sign trailing the closed group applies to every value
                Some(_) if closed => {
                    for assignment in assignments.iter_mut() {
                        assignment.parity = *sign;
                    }
                }
                Some(last) => last.parity = *sign,
            },
        }
    }

    assignments
}

/// Decode a raw ENSDF spin-parity field into typed assignments
///
/// Up to three comma or space separated assignments, each an optional
/// tentative group, a spin with an optional `/2` half-integer marker, and
/// an optional parity sign. A sign trailing a closed parenthesis group
/// applies to all values in the entry; a bare sign is a parity-only
/// assignment. The `GE` literal marks a lower bound.
pub fn spin_parity_from_str(i: &str) -> Vec<SpinParity> {
    classify(&tokenize(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple() {
        assert_eq!(
            tokenize("3/2+"),
            vec![
                SpinToken::Number {
                    numerator: 3,
                    half: true
                },
                SpinToken::Sign(1),
            ]
        );
    }

    #[test]
    fn tokenize_drops_unknown_characters() {
        // "AP" approximation marker is not interpreted
        assert_eq!(
            tokenize("AP 4"),
            vec![SpinToken::Number {
                numerator: 4,
                half: false
            }]
        );
    }

    #[test]
    fn firm_half_integer() {
        let spins = spin_parity_from_str("3/2+");
        assert_eq!(spins.len(), 1);
        assert_eq!(spins[0].spin, 3);
        assert!(spins[0].half);
        assert_eq!(spins[0].parity, 1);
        assert_eq!(spins[0].tentative, Tentative::Firm);
    }

    #[test]
    fn tentative_assignment() {
        let spins = spin_parity_from_str("(5/2-)");
        assert_eq!(spins.len(), 1);
        assert_eq!(spins[0].spin, 5);
        assert!(spins[0].half);
        assert_eq!(spins[0].parity, -1);
        assert_eq!(spins[0].tentative, Tentative::Tentative);
    }

    #[test]
    fn greater_equal_bound() {
        let spins = spin_parity_from_str("GE 10");
        assert_eq!(spins.len(), 1);
        assert_eq!(spins[0].spin, 10);
        assert!(!spins[0].half);
        assert_eq!(spins[0].tentative, Tentative::GreaterEqual);
    }

    #[test]
    fn trailing_sign_applies_to_all() {
        let spins = spin_parity_from_str("(1/2,3/2)-");
        assert_eq!(spins.len(), 2);
        for spin in &spins {
            assert_eq!(spin.parity, -1);
            assert_eq!(spin.tentative, Tentative::Tentative);
        }
        assert_eq!(spins[0].spin, 1);
        assert_eq!(spins[1].spin, 3);
    }

    #[test]
    fn parity_only_assignment() {
        let spins = spin_parity_from_str("+");
        assert_eq!(spins.len(), 1);
        assert_eq!(spins[0].spin, -1);
        assert_eq!(spins[0].parity, 1);
    }

    #[test]
    fn empty_yields_no_assignments() {
        assert!(spin_parity_from_str("").is_empty());
        assert!(spin_parity_from_str("   ").is_empty());
    }

    #[test]
    fn capped_at_three_assignments() {
        let spins = spin_parity_from_str("1/2, 3/2, 5/2, 7/2");
        assert_eq!(spins.len(), 3);
    }

    #[test]
    fn mixed_multiplicities() {
        let spins = spin_parity_from_str("2+,3+");
        assert_eq!(spins.len(), 2);
        assert_eq!(spins[0].spin, 2);
        assert_eq!(spins[0].parity, 1);
        assert_eq!(spins[1].spin, 3);
        assert_eq!(spins[1].parity, 1);
    }
}
