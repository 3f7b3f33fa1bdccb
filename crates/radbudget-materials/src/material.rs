//! Material media: density, gamma attenuation, radiopurity.
//!
//! Attenuation follows the standard exponential law at the 2.5 MeV
//! reference energy of the application, where Compton scattering dominates
//! and the mass attenuation coefficient is nearly element-independent.
//! Constants are validated at construction so every derived quantity
//! (attenuation coefficient, attenuation length, surface activity) is a
//! well-defined finite number.

use thiserror::Error;

use crate::isotope::Isotope;

/// Fraction of decays in a slab that escape through the near surface.
///
/// At least half the gammas are emitted towards the far side; the remaining
/// factor is the angle-averaged escape probability through the slab.
const ESCAPE_FRACTION: f64 = 1.0 / 3.0;

/// Errors from material construction or isotope selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("{name}: density must be positive and finite (got {value})")]
    InvalidDensity { name: String, value: f64 },

    #[error("{name}: mass attenuation coefficient must be positive and finite (got {value})")]
    InvalidAttenuation { name: String, value: f64 },

    #[error("{name}: tensile strength must be non-negative and finite (got {value})")]
    InvalidStrength { name: String, value: f64 },

    #[error("{name}: specific activity of {isotope} must be non-negative and finite (got {value})")]
    InvalidActivity {
        name: String,
        isotope: Isotope,
        value: f64,
    },

    #[error("unknown isotope selector '{0}' (expected 'Bi214' or 'Tl208')")]
    UnknownIsotope(String),
}

/// A material medium: density, gamma attenuation, tensile strength.
///
/// The attenuation coefficient `μ = (μ/ρ)·ρ` and the attenuation length
/// `1/μ` are derived once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    rho: f64,
    mu_over_rho: f64,
    mu: f64,
    attenuation_length: f64,
    tensile_strength: f64,
}

impl Material {
    /// Construct a material from its physical constants.
    ///
    /// # Arguments
    /// * `name` — identifier used in reports and error messages.
    /// * `rho` — density (mass/volume), must be positive.
    /// * `mu_over_rho` — mass attenuation coefficient at 2.5 MeV
    ///   (area/mass), must be positive.
    /// * `tensile_strength` — carried for mechanical design; non-negative.
    pub fn new(
        name: impl Into<String>,
        rho: f64,
        mu_over_rho: f64,
        tensile_strength: f64,
    ) -> Result<Self, MaterialError> {
        let name = name.into();
        if !(rho.is_finite() && rho > 0.0) {
            return Err(MaterialError::InvalidDensity { name, value: rho });
        }
        if !(mu_over_rho.is_finite() && mu_over_rho > 0.0) {
            return Err(MaterialError::InvalidAttenuation {
                name,
                value: mu_over_rho,
            });
        }
        if !(tensile_strength.is_finite() && tensile_strength >= 0.0) {
            return Err(MaterialError::InvalidStrength {
                name,
                value: tensile_strength,
            });
        }

        let mu = mu_over_rho * rho;
        Ok(Self {
            name,
            rho,
            mu_over_rho,
            mu,
            attenuation_length: 1.0 / mu,
            tensile_strength,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn density(&self) -> f64 {
        self.rho
    }

    pub fn mass_attenuation_coefficient(&self) -> f64 {
        self.mu_over_rho
    }

    /// Linear attenuation coefficient `μ` (1/length).
    pub fn attenuation_coefficient(&self) -> f64 {
        self.mu
    }

    /// Mean free path `1/μ` of a 2.5 MeV gamma in this material.
    pub fn attenuation_length(&self) -> f64 {
        self.attenuation_length
    }

    pub fn tensile_strength(&self) -> f64 {
        self.tensile_strength
    }

    /// Fraction of gammas crossing a slab of thickness `z` uninteracted:
    /// `exp(−z·μ)`.
    pub fn transmittance(&self, z: f64) -> f64 {
        (-z * self.mu).exp()
    }

    /// Fraction absorbed in a slab of thickness `z`: `1 − transmittance`.
    pub fn absorption(&self, z: f64) -> f64 {
        1.0 - self.transmittance(z)
    }
}

/// A [`Material`] with screened specific activities for the two budget
/// isotopes.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioactiveMaterial {
    material: Material,
    a_bi214: f64,
    a_tl208: f64,
}

impl RadioactiveMaterial {
    /// Attach per-isotope specific activities (activity/mass) to a material.
    pub fn new(material: Material, a_bi214: f64, a_tl208: f64) -> Result<Self, MaterialError> {
        for (isotope, value) in [(Isotope::Bi214, a_bi214), (Isotope::Tl208, a_tl208)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MaterialError::InvalidActivity {
                    name: material.name().to_string(),
                    isotope,
                    value,
                });
            }
        }
        Ok(Self {
            material,
            a_bi214,
            a_tl208,
        })
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Specific activity (activity/mass) of the selected isotope.
    pub fn specific_activity(&self, isotope: Isotope) -> f64 {
        match isotope {
            Isotope::Bi214 => self.a_bi214,
            Isotope::Tl208 => self.a_tl208,
        }
    }

    /// Activity per unit area escaping a slab of thickness `z` without
    /// being self-absorbed:
    ///
    /// `SA = C · ρ · (A0/μ) · (1 − exp(−z·μ))`
    ///
    /// where `A0` is the isotope's specific activity and `C = 1/3` is the
    /// directional escape fraction. Saturates at `C·ρ·A0/μ` once the slab
    /// is much thicker than the attenuation length.
    pub fn surface_activity(&self, z: f64, isotope: Isotope) -> f64 {
        let mu = self.material.attenuation_coefficient();
        let saturated = ESCAPE_FRACTION * self.material.density() * self.specific_activity(isotope) / mu;
        saturated * (1.0 - (-z * mu).exp())
    }

    // Forwarded material queries, so callers holding a radioactive material
    // do not reach through for the common ones.

    pub fn name(&self) -> &str {
        self.material.name()
    }

    pub fn density(&self) -> f64 {
        self.material.density()
    }

    pub fn attenuation_coefficient(&self) -> f64 {
        self.material.attenuation_coefficient()
    }

    pub fn attenuation_length(&self) -> f64 {
        self.material.attenuation_length()
    }

    pub fn transmittance(&self, z: f64) -> f64 {
        self.material.transmittance(z)
    }

    pub fn absorption(&self, z: f64) -> f64 {
        self.material.absorption(z)
    }
}

/// A pressure-vessel construction material: radiopurity plus the maximum
/// allowable membrane stress for mechanical design. Carries no extra
/// physics.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselMaterial {
    radioactive: RadioactiveMaterial,
    max_allowable_strength: f64,
}

impl VesselMaterial {
    pub fn new(
        radioactive: RadioactiveMaterial,
        max_allowable_strength: f64,
    ) -> Result<Self, MaterialError> {
        if !(max_allowable_strength.is_finite() && max_allowable_strength >= 0.0) {
            return Err(MaterialError::InvalidStrength {
                name: radioactive.name().to_string(),
                value: max_allowable_strength,
            });
        }
        Ok(Self {
            radioactive,
            max_allowable_strength,
        })
    }

    pub fn radioactive(&self) -> &RadioactiveMaterial {
        &self.radioactive
    }

    /// Maximum allowable strength `Sm` for vessel sizing.
    pub fn max_allowable_strength(&self) -> f64 {
        self.max_allowable_strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radbudget_units::{CM, CM2_PER_G, G_PER_CM3, MBQ_PER_KG, MPA};

    fn steel() -> RadioactiveMaterial {
        let base = Material::new("316Ti", 7.87 * G_PER_CM3, 0.039 * CM2_PER_G, 1860.0 * MPA)
            .unwrap();
        RadioactiveMaterial::new(base, 1.0 * MBQ_PER_KG, 0.4 * MBQ_PER_KG).unwrap()
    }

    #[test]
    fn derived_attenuation_constants() {
        let m = steel();
        let per_cm = 1.0 / CM;
        assert_relative_eq!(
            m.attenuation_coefficient() / per_cm,
            0.31,
            max_relative = 1e-2
        );
        assert_relative_eq!(m.attenuation_length() / CM, 3.26, max_relative = 1e-2);
    }

    #[test]
    fn transmittance_and_absorption_are_complementary() {
        let m = steel();
        for z in [0.0, 0.5 * CM, 3.0 * CM, 25.0 * CM] {
            assert_relative_eq!(m.transmittance(z) + m.absorption(z), 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn transmittance_is_one_at_zero_and_decays_monotonically() {
        let m = steel();
        assert_eq!(m.transmittance(0.0), 1.0);

        let mut prev = 1.0;
        for i in 1..=50 {
            let t = m.transmittance(i as f64 * CM);
            assert!(t < prev, "transmittance must decrease with depth");
            prev = t;
        }
        assert!(m.transmittance(1000.0 * CM) < 1e-30);
    }

    #[test]
    fn surface_activity_matches_closed_form() {
        let m = steel();
        let z = 12.0 * CM;
        let mu = m.attenuation_coefficient();
        let expected =
            (1.0 / 3.0) * m.density() * (m.specific_activity(Isotope::Bi214) / mu)
                * (1.0 - (-z * mu).exp());
        assert_relative_eq!(
            m.surface_activity(z, Isotope::Bi214),
            expected,
            max_relative = 1e-5
        );
    }

    #[test]
    fn surface_activity_grows_monotonically_to_its_asymptote() {
        let m = steel();
        let mu = m.attenuation_coefficient();
        let asymptote = (1.0 / 3.0) * m.density() * m.specific_activity(Isotope::Bi214) / mu;

        let mut prev = 0.0;
        for i in 1..=40 {
            let sa = m.surface_activity(i as f64 * CM, Isotope::Bi214);
            assert!(sa > prev, "surface activity must grow with thickness");
            assert!(sa <= asymptote * (1.0 + 1e-12));
            prev = sa;
        }
        assert_relative_eq!(
            m.surface_activity(1000.0 * CM, Isotope::Bi214),
            asymptote,
            max_relative = 1e-9
        );
    }

    #[test]
    fn isotope_selector_picks_the_right_activity() {
        let m = steel();
        assert_relative_eq!(m.specific_activity(Isotope::Bi214) / MBQ_PER_KG, 1.0);
        assert_relative_eq!(m.specific_activity(Isotope::Tl208) / MBQ_PER_KG, 0.4);
        assert!(
            m.surface_activity(2.0 * CM, Isotope::Bi214)
                > m.surface_activity(2.0 * CM, Isotope::Tl208)
        );
    }

    #[test]
    fn invalid_constants_are_rejected() {
        assert!(matches!(
            Material::new("null", 0.0, 0.039 * CM2_PER_G, 0.0),
            Err(MaterialError::InvalidDensity { .. })
        ));
        assert!(matches!(
            Material::new("null", 1.0 * G_PER_CM3, 0.0, 0.0),
            Err(MaterialError::InvalidAttenuation { .. })
        ));
        assert!(matches!(
            Material::new("null", 1.0 * G_PER_CM3, -0.039 * CM2_PER_G, 0.0),
            Err(MaterialError::InvalidAttenuation { .. })
        ));

        let base = Material::new("m", 1.0 * G_PER_CM3, 0.039 * CM2_PER_G, 0.0).unwrap();
        assert!(matches!(
            RadioactiveMaterial::new(base, -1.0, 0.0),
            Err(MaterialError::InvalidActivity {
                isotope: Isotope::Bi214,
                ..
            })
        ));
    }

    #[test]
    fn vessel_material_carries_allowable_strength() {
        let vm = VesselMaterial::new(steel(), 620.0 * MPA).unwrap();
        assert_relative_eq!(vm.max_allowable_strength() / MPA, 620.0);
        assert_eq!(vm.radioactive().name(), "316Ti");
    }
}
