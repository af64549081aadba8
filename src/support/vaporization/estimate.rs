use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{MolarEnergy, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{GAS_CONSTANT_J_PER_MOL_K, MolarGasConstant};

/// Empirical rules for estimating the molar enthalpy of vaporization.
///
/// Each rule maps a normal boiling point `Tb` to an estimated `ΔH`:
///
/// | Rule              | `ΔH(Tb)` (J/mol)           |
/// |-------------------|----------------------------|
/// | Trouton's rule    | `85 · Tb`                  |
/// | Methane           | `73 · Tb`                  |
/// | Water             | `109 · Tb`                 |
/// | T-H-E rule        | `(4.4 + ln Tb) · R · Tb`   |
///
/// The catalog is closed; [`VaporizationEnthalpy::ALL`] lists every entry in
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VaporizationEnthalpy {
    /// Trouton's rule, `ΔS ≈ 85 J/(mol·K)` for most nonpolar liquids.
    #[default]
    TroutonsRule,
    /// Trouton-style ratio calibrated on methane.
    Methane,
    /// Trouton-style ratio calibrated on water.
    Water,
    /// Trouton–Hildebrand–Everett rule.
    TheRule,
}

impl VaporizationEnthalpy {
    /// Every available rule, in display order.
    pub const ALL: [Self; 4] = [Self::TroutonsRule, Self::Methane, Self::Water, Self::TheRule];

    /// Returns the display name of the rule.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TroutonsRule => "Trouton's rule",
            Self::Methane => "Methane",
            Self::Water => "Water",
            Self::TheRule => "T-H-E rule",
        }
    }

    /// Returns the display names of every rule, in display order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }

    /// Estimates the molar enthalpy of vaporization at a normal boiling point.
    #[must_use]
    pub fn estimate(self, normal_boiling_point: ThermodynamicTemperature) -> MolarEnergy {
        let t = normal_boiling_point.get::<kelvin>();
        let dh = match self {
            Self::TroutonsRule => 85.0 * t,
            Self::Methane => 73.0 * t,
            Self::Water => 109.0 * t,
            Self::TheRule => (4.4 + t.ln()) * GAS_CONSTANT_J_PER_MOL_K * t,
        };
        MolarEnergy::new::<joule_per_mole>(dh)
    }

    /// Returns the rule evaluated at 1 K, read as a per-Kelvin coefficient.
    ///
    /// For the rules linear in `Tb` this is exactly the entropy of
    /// vaporization `ΔH / Tb`. It is not meaningful for [`Self::TheRule`].
    #[must_use]
    pub fn coefficient(self) -> MolarGasConstant {
        let dh = self.estimate(ThermodynamicTemperature::new::<kelvin>(1.0));
        MolarGasConstant::new::<joule_per_kelvin_mole>(dh.get::<joule_per_mole>())
    }

    /// Returns `true` if `ΔH` is proportional to `Tb`.
    ///
    /// Only linear rules can be inverted in closed form to recover a normal
    /// boiling point from an off-standard observation.
    #[must_use]
    pub fn is_linear(self) -> bool {
        !matches!(self, Self::TheRule)
    }
}

impl fmt::Display for VaporizationEnthalpy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown enthalpy of vaporization estimate: {name:?}")]
pub struct UnknownEstimateError {
    pub name: String,
}

impl FromStr for VaporizationEnthalpy {
    type Err = UnknownEstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|estimate| estimate.name() == s)
            .ok_or_else(|| UnknownEstimateError { name: s.to_owned() })
    }
}
