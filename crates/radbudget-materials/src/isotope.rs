//! Gamma emitter selector.
//!
//! Background budgets track the two high-energy gamma lines that dominate
//! at the detection energy: Bi-214 (2.45 MeV, uranium chain) and Tl-208
//! (2.61 MeV, thorium chain).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::material::MaterialError;

/// The gamma-emitting isotope a specific activity refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Isotope {
    /// Bi-214, uranium chain. The default selector.
    #[default]
    Bi214,
    /// Tl-208, thorium chain.
    Tl208,
}

impl Isotope {
    /// Both recognised isotopes, in budget-table column order.
    pub const ALL: [Isotope; 2] = [Isotope::Bi214, Isotope::Tl208];

    /// Conventional hyphenated symbol, e.g. `"Bi-214"`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Isotope::Bi214 => "Bi-214",
            Isotope::Tl208 => "Tl-208",
        }
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Isotope {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bi214" | "Bi-214" | "bi214" => Ok(Isotope::Bi214),
            "Tl208" | "Tl-208" | "tl208" => Ok(Isotope::Tl208),
            other => Err(MaterialError::UnknownIsotope(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognised_selectors() {
        assert_eq!("Bi214".parse::<Isotope>().unwrap(), Isotope::Bi214);
        assert_eq!("Tl-208".parse::<Isotope>().unwrap(), Isotope::Tl208);
    }

    #[test]
    fn rejects_unknown_selector() {
        let err = "Co60".parse::<Isotope>().unwrap_err();
        assert!(matches!(err, MaterialError::UnknownIsotope(s) if s == "Co60"));
    }

    #[test]
    fn default_is_bi214() {
        assert_eq!(Isotope::default(), Isotope::Bi214);
    }
}
