//! Activity records and the attenuation chain.
//!
//! Budget bookkeeping works on immutable records: a vessel is reduced to a
//! [`VesselActivity`] (body and head contributions per isotope), records
//! are pushed through shields one attenuation step at a time, and the
//! resulting trail becomes the report table. Records are never mutated
//! after creation; each propagation step produces a new one.

use serde::{Deserialize, Serialize};

use radbudget_materials::Isotope;
use radbudget_units::BQ_PER_CM2;

use crate::vessel::CylindricalVessel;

/// Per-isotope activity pair. The unit depends on context: bulk activity
/// (Bq), surface activity (Bq/area), or flux (Bq/area). Callers keep
/// track, as with every other scalar in the framework.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub bi214: f64,
    pub tl208: f64,
}

impl Activity {
    pub const ZERO: Activity = Activity {
        bi214: 0.0,
        tl208: 0.0,
    };

    pub fn new(bi214: f64, tl208: f64) -> Self {
        Self { bi214, tl208 }
    }

    pub fn of(&self, isotope: Isotope) -> f64 {
        match isotope {
            Isotope::Bi214 => self.bi214,
            Isotope::Tl208 => self.tl208,
        }
    }

    /// Both components scaled by one factor (a transmittance, a count, an
    /// area).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            bi214: self.bi214 * factor,
            tl208: self.tl208 * factor,
        }
    }
}

impl std::ops::Add for Activity {
    type Output = Activity;

    fn add(self, other: Activity) -> Activity {
        Activity {
            bi214: self.bi214 + other.bi214,
            tl208: self.tl208 + other.tl208,
        }
    }
}

/// One row of a budget table: a named per-isotope activity, with a flag
/// recording whether shield transmittance has already been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub name: String,
    pub activity: Activity,
    pub transmitted: bool,
}

/// A vessel's activity split into barrel and head contributions, so a
/// later attenuation step can apply the differing body and head
/// transmittances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselActivity {
    pub name: String,
    pub body: Activity,
    pub head: Activity,
    pub transmitted: bool,
}

impl VesselActivity {
    pub fn total(&self) -> Activity {
        self.body + self.head
    }
}

impl From<&VesselActivity> for ActivityRecord {
    fn from(va: &VesselActivity) -> Self {
        ActivityRecord {
            name: va.name.clone(),
            activity: va.total(),
            transmitted: va.transmitted,
        }
    }
}

/// Ambient gamma flux per isotope (activity per unit area), e.g. the
/// laboratory rock flux.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GammaFlux {
    pub name: String,
    pub flux: Activity,
}

impl Default for GammaFlux {
    /// Measured hall flux of the underground laboratory.
    fn default() -> Self {
        Self {
            name: "laboratory gamma flux".into(),
            flux: Activity::new(0.006 * BQ_PER_CM2, 0.13 * BQ_PER_CM2),
        }
    }
}

/// Activity escaping a vessel's own walls: the barrel self-shielded over
/// the body thickness, both heads over the head thickness.
pub fn self_shielded_activity(
    name: impl Into<String>,
    vessel: &CylindricalVessel,
) -> VesselActivity {
    let body = Activity::new(
        vessel.body_self_shielded_activity(Isotope::Bi214),
        vessel.body_self_shielded_activity(Isotope::Tl208),
    );
    let head = Activity::new(
        vessel.heads_self_shielded_activity(Isotope::Bi214),
        vessel.heads_self_shielded_activity(Isotope::Tl208),
    );
    VesselActivity {
        name: name.into(),
        body,
        head,
        transmitted: false,
    }
}

/// One attenuation step: the prior activity reduced by the shield's body
/// and head transmittances. Steps compose in strict physical traversal
/// order, innermost source outward.
pub fn transmitted_activity(
    name: impl Into<String>,
    shield: &CylindricalVessel,
    prior: &VesselActivity,
) -> VesselActivity {
    VesselActivity {
        name: name.into(),
        body: prior.body.scaled(shield.body_transmittance()),
        head: prior.head.scaled(shield.head_transmittance()),
        transmitted: true,
    }
}

/// Ambient flux intercepted by a vessel envelope: the outer lateral
/// surface for the barrel and the two head faces for the heads.
pub fn ambient_flux_activity(
    name: impl Into<String>,
    vessel: &CylindricalVessel,
    flux: &GammaFlux,
) -> VesselActivity {
    VesselActivity {
        name: name.into(),
        body: flux.flux.scaled(vessel.body_outer_surface()),
        head: flux.flux.scaled(2.0 * vessel.head_face_surface()),
        transmitted: false,
    }
}

/// Bulk (unshielded) activity of a vessel's walls, for comparison columns.
pub fn bulk_activity(name: impl Into<String>, vessel: &CylindricalVessel) -> VesselActivity {
    let body = Activity::new(
        vessel.body_activity(Isotope::Bi214),
        vessel.body_activity(Isotope::Tl208),
    );
    let head = Activity::new(
        vessel.heads_activity(Isotope::Bi214),
        vessel.heads_activity(Isotope::Tl208),
    );
    VesselActivity {
        name: name.into(),
        body,
        head,
        transmitted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radbudget_materials::catalogue;
    use radbudget_units::CM;
    use std::sync::Arc;

    use crate::vessel::VesselDimensions;

    fn steel_vessel() -> CylindricalVessel {
        let steel = Arc::new(catalogue::ti316().radioactive().clone());
        CylindricalVessel::new(
            steel,
            VesselDimensions {
                name: "vessel".into(),
                radius: 52.0 * CM,
                body_thickness: 1.0 * CM,
                length: 130.0 * CM,
                head_thickness: 1.0 * CM,
            },
        )
        .unwrap()
    }

    fn copper_shield() -> CylindricalVessel {
        let cu = Arc::new(catalogue::copper_best());
        CylindricalVessel::new(
            cu,
            VesselDimensions {
                name: "copper shield".into(),
                radius: 55.0 * CM,
                body_thickness: 12.0 * CM,
                length: 160.0 * CM,
                head_thickness: 12.0 * CM,
            },
        )
        .unwrap()
    }

    #[test]
    fn self_shielded_record_combines_barrel_and_both_heads() {
        let v = steel_vessel();
        let rec = self_shielded_activity("vessel (ss)", &v);
        assert_relative_eq!(
            rec.body.bi214,
            v.body_self_shielded_activity(Isotope::Bi214)
        );
        assert_relative_eq!(
            rec.head.bi214,
            2.0 * v.head_self_shielded_activity(Isotope::Bi214)
        );
        assert!(!rec.transmitted);
    }

    #[test]
    fn transmission_scales_by_the_shield_transmittances() {
        let v = steel_vessel();
        let shield = copper_shield();
        let source = self_shielded_activity("vessel (ss)", &v);
        let after = transmitted_activity("vessel after Cu", &shield, &source);

        assert_relative_eq!(
            after.body.bi214,
            source.body.bi214 * shield.body_transmittance(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            after.head.tl208,
            source.head.tl208 * shield.head_transmittance(),
            max_relative = 1e-12
        );
        assert!(after.transmitted);
        assert!(after.total().bi214 < source.total().bi214);
    }

    #[test]
    fn ambient_flux_uses_outer_surfaces() {
        let v = steel_vessel();
        let flux = GammaFlux::default();
        let rec = ambient_flux_activity("hall flux on vessel", &v, &flux);

        assert_relative_eq!(
            rec.body.tl208,
            flux.flux.tl208 * v.body_outer_surface(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rec.head.tl208,
            flux.flux.tl208 * 2.0 * v.head_face_surface(),
            max_relative = 1e-12
        );
        // Tl-208 dominates the hall flux.
        assert!(rec.total().tl208 > rec.total().bi214);
    }

    #[test]
    fn records_flatten_into_table_rows() {
        let v = steel_vessel();
        let va = self_shielded_activity("vessel (ss)", &v);
        let row = ActivityRecord::from(&va);
        assert_eq!(row.name, "vessel (ss)");
        assert_relative_eq!(row.activity.bi214, va.body.bi214 + va.head.bi214);
    }

    #[test]
    fn activity_arithmetic() {
        let a = Activity::new(2.0, 3.0);
        let b = Activity::new(0.5, 1.5);
        let sum = a + b;
        assert_relative_eq!(sum.bi214, 2.5);
        assert_relative_eq!(sum.tl208, 4.5);
        assert_relative_eq!(a.scaled(2.0).bi214, 4.0);
        assert_relative_eq!(a.of(Isotope::Tl208), 3.0);
        assert_eq!(Activity::ZERO.of(Isotope::Bi214), 0.0);
    }
}
