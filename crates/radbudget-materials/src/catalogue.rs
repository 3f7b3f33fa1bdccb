//! Screened detector materials.
//!
//! Constants come from radiopurity screening campaigns and the standard
//! attenuation tables at the 2.5 MeV reference energy (NIST XCOM). At this
//! energy Compton scattering dominates, so the mass attenuation coefficient
//! sits near 0.039 cm²/g for most structural metals.
//!
//! ## Available materials
//!
//! | Constructor | Medium | Role |
//! |-------------|--------|------|
//! | [`ti316`] | 316Ti stainless steel | pressure vessel |
//! | [`titanium`] | Grade-2 titanium | alternative vessel |
//! | [`copper_best`] | electroformed copper | inner shield |
//! | [`copper_bulk`] | OFHC stock copper | electrodes, plates |
//! | [`lead`] | cast lead | external castle |
//! | [`polyethylene`] | HDPE | field-cage insulator |
//! | [`inconel`] | Inconel 718 | feedthroughs |
//! | [`xenon`] | xenon gas at 15 bar | enclosed target |

use radbudget_units::{CM2_PER_G, G_PER_CM3, MBQ_PER_KG, MPA, MUBQ_PER_KG};

use crate::material::{Material, RadioactiveMaterial, VesselMaterial};

fn build(
    name: &str,
    rho_g_cm3: f64,
    mu_over_rho_cm2_g: f64,
    tensile_mpa: f64,
    a_bi214: f64,
    a_tl208: f64,
) -> RadioactiveMaterial {
    let base = Material::new(
        name,
        rho_g_cm3 * G_PER_CM3,
        mu_over_rho_cm2_g * CM2_PER_G,
        tensile_mpa * MPA,
    )
    .expect("catalogue constants are valid");
    RadioactiveMaterial::new(base, a_bi214, a_tl208).expect("catalogue constants are valid")
}

/// 316Ti stainless steel, the pressure vessel structural material.
pub fn ti316() -> VesselMaterial {
    let radioactive = build(
        "316Ti",
        7.87,
        0.039,
        1860.0,
        1.0 * MBQ_PER_KG,
        0.4 * MBQ_PER_KG,
    );
    VesselMaterial::new(radioactive, 620.0 * MPA).expect("catalogue constants are valid")
}

/// Grade-2 titanium, the low-background vessel alternative.
pub fn titanium() -> VesselMaterial {
    let radioactive = build(
        "Ti",
        4.54,
        0.038,
        950.0,
        0.23 * MBQ_PER_KG,
        0.09 * MBQ_PER_KG,
    );
    VesselMaterial::new(radioactive, 317.0 * MPA).expect("catalogue constants are valid")
}

/// Electroformed copper, the cleanest screened grade. Inner shield stock.
pub fn copper_best() -> RadioactiveMaterial {
    build("Cu-03", 8.96, 0.039, 220.0, 3.0 * MUBQ_PER_KG, 1.4 * MUBQ_PER_KG)
}

/// OFHC stock copper, for electrodes and support plates.
pub fn copper_bulk() -> RadioactiveMaterial {
    build("Cu-12", 8.96, 0.039, 220.0, 12.0 * MUBQ_PER_KG, 1.4 * MUBQ_PER_KG)
}

/// Cast lead for the external shielding castle.
pub fn lead() -> RadioactiveMaterial {
    build("Pb", 11.33, 0.044, 12.0, 370.0 * MUBQ_PER_KG, 73.0 * MUBQ_PER_KG)
}

/// High-density polyethylene, the field-cage insulator body.
pub fn polyethylene() -> RadioactiveMaterial {
    build("HDPE", 0.95, 0.048, 24.0, 230.0 * MUBQ_PER_KG, 94.0 * MUBQ_PER_KG)
}

/// Inconel 718, used for feedthroughs and fasteners.
pub fn inconel() -> RadioactiveMaterial {
    build(
        "Inconel-718",
        8.19,
        0.039,
        1375.0,
        6.0 * MBQ_PER_KG,
        5.0 * MBQ_PER_KG,
    )
}

/// Xenon gas at the 15 bar operating pressure. Radiopure: its own
/// activity does not contribute to the budget, but its density still
/// attenuates crossing gammas over metre scales.
pub fn xenon() -> RadioactiveMaterial {
    build("Xe", 0.089, 0.039, 0.0, 0.0, 0.0)
}

/// Every catalogue material in its radioactive form, for listings.
pub fn all() -> Vec<RadioactiveMaterial> {
    vec![
        ti316().radioactive().clone(),
        titanium().radioactive().clone(),
        copper_best(),
        copper_bulk(),
        lead(),
        polyethylene(),
        inconel(),
        xenon(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radbudget_units::CM;

    #[test]
    fn catalogue_constructs_without_panicking() {
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn steel_attenuation_length_is_centimetre_scale() {
        let steel = ti316();
        let latt = steel.radioactive().attenuation_length();
        assert_relative_eq!(latt / CM, 3.26, max_relative = 1e-2);
    }

    #[test]
    fn copper_grades_share_physics_but_not_radiopurity() {
        let best = copper_best();
        let bulk = copper_bulk();
        assert_eq!(best.density(), bulk.density());
        assert!(
            best.specific_activity(crate::Isotope::Bi214)
                < bulk.specific_activity(crate::Isotope::Bi214)
        );
    }

    #[test]
    fn xenon_is_radiopure_but_still_attenuates() {
        let xe = xenon();
        assert_eq!(xe.specific_activity(crate::Isotope::Bi214), 0.0);
        assert!(xe.transmittance(100.0 * CM) < 1.0);
    }
}
