//! Element symbol lookup table
//!
//! Uppercase symbols as they appear in ENSDF nuclide identifiers, covering
//! hydrogen through roentgenium.

/// Element symbols indexed by proton number offset, Z = 1 to 111
const SYMBOLS: [&str; 111] = [
    "H", "HE", "LI", "BE", "B", "C", "N", "O", "F", "NE", //
    "NA", "MG", "AL", "SI", "P", "S", "CL", "AR", "K", "CA", //
    "SC", "TI", "V", "CR", "MN", "FE", "CO", "NI", "CU", "ZN", //
    "GA", "GE", "AS", "SE", "BR", "KR", "RB", "SR", "Y", "ZR", //
    "NB", "MO", "TC", "RU", "RH", "PD", "AG", "CD", "IN", "SN", //
    "SB", "TE", "I", "XE", "CS", "BA", "LA", "CE", "PR", "ND", //
    "PM", "SM", "EU", "GD", "TB", "DY", "HO", "ER", "TM", "YB", //
    "LU", "HF", "TA", "W", "RE", "OS", "IR", "PT", "AU", "HG", //
    "TL", "PB", "BI", "PO", "AT", "RN", "FR", "RA", "AC", "TH", //
    "PA", "U", "NP", "PU", "AM", "CM", "BK", "CF", "ES", "FM", //
    "MD", "NO", "LR", "RF", "DB", "SG", "BH", "HS", "MT", "DS", //
    "RG",
];

/// Look up a proton number from an element symbol, case-insensitively
///
/// ```rust
/// # use nucdb_chart::z_from_symbol;
/// assert_eq!(z_from_symbol("SE"), Some(34));
/// assert_eq!(z_from_symbol("se"), Some(34));
/// assert_eq!(z_from_symbol("XX"), None);
/// ```
pub fn z_from_symbol(symbol: &str) -> Option<i32> {
    SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|i| i as i32 + 1)
}

/// Element symbol for a proton number, `None` outside Z = 1 to 111
///
/// ```rust
/// # use nucdb_chart::symbol_from_z;
/// assert_eq!(symbol_from_z(34), Some("SE"));
/// assert_eq!(symbol_from_z(112), None);
/// ```
pub fn symbol_from_z(z: i32) -> Option<&'static str> {
    if (1..=111).contains(&z) {
        Some(SYMBOLS[z as usize - 1])
    } else {
        None
    }
}
