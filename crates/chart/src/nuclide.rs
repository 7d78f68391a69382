// external crates
use serde::{Deserialize, Serialize};

// nucdb modules
use nucdb_utils::{f, OptionExt, StringExt};

// internal modules
use crate::elements::symbol_from_z;
use crate::error::Result;

/// A specific isotope, identified by neutron and proton counts
///
/// Nuclides own a contiguous run of the global level array and, once the
/// cascade generator has run, a contiguous run of the global cascade array.
/// Both runs are referenced by base index and count.
///
/// Unresolved identities (an element symbol outside the known table) keep
/// the raw `name` with `n` and `z` set to -1.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Nuclide {
    /// Raw identifier from the source file, e.g. "68SE"
    pub name: String,
    /// Neutron count, -1 when unresolved
    pub n: i32,
    /// Proton count, -1 when unresolved
    pub z: i32,
    /// Q-value for beta- decay (keV)
    pub q_beta: Option<f64>,
    /// Neutron separation energy (keV)
    pub s_n: Option<f64>,
    /// Proton separation energy (keV)
    pub s_p: Option<f64>,
    /// Q-value for alpha decay (keV)
    pub q_alpha: Option<f64>,
    /// Index of this nuclide's first level in the global array
    pub first_level: usize,
    /// Number of levels belonging to this nuclide
    pub num_levels: usize,
    /// Index of this nuclide's first cascade in the global array
    pub first_cascade: usize,
    /// Number of cascades belonging to this nuclide
    pub num_cascades: usize,
}

impl Nuclide {
    /// Mass number A, the total nucleon count
    pub fn mass_number(&self) -> i32 {
        self.n + self.z
    }

    /// Whether the element symbol resolved to a known proton number
    pub fn is_resolved(&self) -> bool {
        self.z >= 0
    }

    /// A display name with consistent formatting, e.g. "68Se"
    ///
    /// Falls back to the raw source identifier for unresolved nuclides.
    ///
    /// ```rust
    /// # use nucdb_chart::Nuclide;
    /// let nuclide = Nuclide {
    ///     name: "68SE".to_string(),
    ///     n: 34,
    ///     z: 34,
    ///     ..Default::default()
    /// };
    /// assert_eq!(nuclide.display_name(), "68Se");
    /// ```
    pub fn display_name(&self) -> String {
        match symbol_from_z(self.z) {
            Some(symbol) => f!("{}{}", self.mass_number(), symbol.to_lowercase().capitalise()),
            None => self.name.clone(),
        }
    }

    /// Serialise to a JSON format string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("Nuclide {}\n", self.display_name());
        s += &f!("  N, Z        {}, {}\n", self.n, self.z);
        s += &f!("  Q(beta-)    {} keV\n", self.q_beta.display());
        s += &f!("  S(n)        {} keV\n", self.s_n.display());
        s += &f!("  S(p)        {} keV\n", self.s_p.display());
        s += &f!("  Q(alpha)    {} keV\n", self.q_alpha.display());
        s += &f!("  Levels      {}\n", self.num_levels);
        s += &f!("  Cascades    {}", self.num_cascades);
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_fallback() {
        let unresolved = Nuclide {
            name: "65XX".to_string(),
            n: -1,
            z: -1,
            ..Default::default()
        };
        assert_eq!(unresolved.display_name(), "65XX");
    }
}
