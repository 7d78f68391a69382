//! Nuclide identifier parsing
//!
//! An ENSDF identifier is a leading mass number followed by an element
//! symbol, e.g. "68SE". The symbol resolves to a proton number through the
//! element table, and the neutron count follows as N = A - Z.

// external crates
use log::warn;

// nucdb modules
use nucdb_chart::z_from_symbol;

// nom parser combinators
use nom::character::complete::{alpha1, digit1};
use nom::combinator::map_res;
use nom::IResult;

/// Split an identifier into the mass number and element symbol
fn mass_and_symbol(i: &str) -> IResult<&str, (i32, &str)> {
    let (i, mass) = map_res(digit1, |s: &str| s.parse::<i32>())(i.trim())?;
    let (i, symbol) = alpha1(i)?;
    Ok((i, (mass, symbol)))
}

/// Resolve a nuclide identifier into neutron and proton counts
///
/// The special `NN` symbol denotes a multi-neutron state with Z = A - 2.
/// Anything that fails to split or resolve yields the `(-1, -1)` unresolved
/// sentinel rather than an error.
///
/// ```text
/// "68SE" -> (34, 34)
/// "2NN"  -> (2, 0)
/// "9XY"  -> (-1, -1)
/// ```
pub fn nuclide_identity(name: &str) -> (i32, i32) {
    let Ok((_, (mass, symbol))) = mass_and_symbol(name) else {
        return (-1, -1);
    };

    // multi-neutron entries have no element symbol in the table
    if symbol.eq_ignore_ascii_case("NN") {
        let z = mass - 2;
        return (mass - z, z);
    }

    match z_from_symbol(symbol) {
        Some(z) => (mass - z, z),
        None => {
            warn!("unknown element symbol in nuclide identifier \"{name}\"");
            (-1, -1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_identifier() {
        assert_eq!(nuclide_identity("68SE"), (34, 34));
        assert_eq!(nuclide_identity("60CO"), (33, 27));
        assert_eq!(nuclide_identity("1H"), (0, 1));
    }

    #[test]
    fn case_insensitive_symbol() {
        assert_eq!(nuclide_identity("68se"), (34, 34));
    }

    #[test]
    fn multi_neutron_state() {
        // NN resolves through the Z = A - 2 special case
        assert_eq!(nuclide_identity("2NN"), (2, 0));
        assert_eq!(nuclide_identity("1NN"), (2, -1));
    }

    #[test]
    fn unresolved_identifiers() {
        assert_eq!(nuclide_identity("65XX"), (-1, -1));
        assert_eq!(nuclide_identity(""), (-1, -1));
        assert_eq!(nuclide_identity("SE68"), (-1, -1));
    }
}
