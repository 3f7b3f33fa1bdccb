//! Multi-component assemblies: nested shield chains and the field cage.

use std::sync::Arc;

use radbudget_geometry::CylinderShell;
use radbudget_materials::{Isotope, RadioactiveMaterial};

use crate::activity::{transmitted_activity, Activity, ActivityRecord, VesselActivity};
use crate::vessel::CylindricalVessel;
use crate::volume::PhysicalVolume;
use crate::BudgetError;

/// An ordered stack of absorbing vessels, innermost first.
///
/// Gammas leaving a source traverse the shields in their physical nesting
/// order; each layer multiplies the surviving activity by its own
/// transmittance. Layers differ in material and thickness, so shields are
/// stored and applied strictly in the order given.
#[derive(Debug, Clone, Default)]
pub struct ShieldChain {
    shields: Vec<Arc<CylindricalVessel>>,
}

impl ShieldChain {
    pub fn new(shields: Vec<Arc<CylindricalVessel>>) -> Self {
        Self { shields }
    }

    pub fn push(&mut self, shield: Arc<CylindricalVessel>) {
        self.shields.push(shield);
    }

    pub fn len(&self) -> usize {
        self.shields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shields.is_empty()
    }

    /// Walk a source activity outward through every shield.
    ///
    /// Returns the full trail: the source record first, then one record
    /// per traversed layer ("X after Y" naming), so reports can show the
    /// attenuation stage by stage.
    pub fn propagate(&self, source: &VesselActivity) -> Vec<VesselActivity> {
        let mut trail = Vec::with_capacity(self.shields.len() + 1);
        trail.push(source.clone());
        for shield in &self.shields {
            let prior = trail.last().expect("trail starts with the source");
            let name = format!("{} after {}", source.name, shield.name());
            trail.push(transmitted_activity(name, shield, prior));
        }
        trail
    }
}

/// A ring electrode: a thin copper band around the cage bore.
pub fn ring_electrode(
    name: impl Into<String>,
    inner_diameter: f64,
    length: f64,
    thickness: f64,
    material: Arc<RadioactiveMaterial>,
) -> Result<PhysicalVolume, BudgetError> {
    let ring = CylinderShell::from_thickness(inner_diameter / 2.0, thickness, length)?;
    Ok(PhysicalVolume::new(name, material, ring))
}

/// The field cage: an insulator barrel, a ladder of ring electrodes, and
/// one grading resistor per ring.
///
/// The electrode count comes from the cage length and the ring pitch;
/// electrode and resistor budgets scale linearly with it.
#[derive(Debug, Clone)]
pub struct FieldCage {
    name: String,
    body: PhysicalVolume,
    electrode: PhysicalVolume,
    electrode_count: usize,
    resistor: Activity,
}

impl FieldCage {
    /// # Arguments
    /// * `inner_diameter`, `length`, `thickness` — the insulator barrel.
    /// * `electrode_pitch` — axial spacing of the rings.
    /// * `material` — the insulator material.
    /// * `electrode` — one ring electrode, prebuilt (see [`ring_electrode`]).
    /// * `resistor` — screened activity of one grading resistor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        inner_diameter: f64,
        length: f64,
        thickness: f64,
        electrode_pitch: f64,
        material: Arc<RadioactiveMaterial>,
        electrode: PhysicalVolume,
        resistor: Activity,
    ) -> Result<Self, BudgetError> {
        let name = name.into();
        if !(electrode_pitch.is_finite() && electrode_pitch > 0.0 && electrode_pitch <= length) {
            return Err(BudgetError::InvalidPitch {
                name,
                pitch: electrode_pitch,
            });
        }

        let barrel = CylinderShell::from_thickness(inner_diameter / 2.0, thickness, length)?;
        let body = PhysicalVolume::new(format!("{name} body"), material, barrel);
        let electrode_count = (length / electrode_pitch).floor() as usize;

        Ok(Self {
            name,
            body,
            electrode,
            electrode_count,
            resistor,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn electrode_count(&self) -> usize {
        self.electrode_count
    }

    pub fn body(&self) -> &PhysicalVolume {
        &self.body
    }

    /// Activity of the insulator barrel wall.
    pub fn body_activity(&self) -> ActivityRecord {
        ActivityRecord {
            name: format!("{} {}", self.name, self.body.material().name()),
            activity: Activity::new(
                self.body.wall_activity(Isotope::Bi214),
                self.body.wall_activity(Isotope::Tl208),
            ),
            transmitted: false,
        }
    }

    /// Activity of the full electrode ladder (the copper bands, not the
    /// bore they wrap).
    pub fn electrode_activity(&self) -> ActivityRecord {
        let one = Activity::new(
            self.electrode.wall_activity(Isotope::Bi214),
            self.electrode.wall_activity(Isotope::Tl208),
        );
        ActivityRecord {
            name: format!("{} electrodes", self.name),
            activity: one.scaled(self.electrode_count as f64),
            transmitted: false,
        }
    }

    /// Activity of the grading resistors, one per ring.
    pub fn resistor_activity(&self) -> ActivityRecord {
        ActivityRecord {
            name: format!("{} resistors", self.name),
            activity: self.resistor.scaled(self.electrode_count as f64),
            transmitted: false,
        }
    }
}
