//! Cylindrical vessels: a barrel shell plus two end-cap heads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use radbudget_geometry::{CylinderShell, Disk, Solid};
use radbudget_materials::{Isotope, RadioactiveMaterial};

use crate::volume::PhysicalVolume;
use crate::BudgetError;

/// Dimension record of one cylindrical vessel (lengths in millimetres in
/// configuration files). Immutable once supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDimensions {
    pub name: String,
    /// Inner radius of the barrel and radius of the heads.
    pub radius: f64,
    /// Barrel wall thickness.
    pub body_thickness: f64,
    /// Barrel length.
    pub length: f64,
    /// End-cap plate thickness.
    pub head_thickness: f64,
}

/// A detector vessel: a [`CylinderShell`] barrel and a [`Disk`] head, both
/// cut from one material. A vessel has two identical heads; queries are
/// exposed separately for body and head since their wall thicknesses, and
/// therefore their self-shielding path lengths, differ.
#[derive(Debug, Clone)]
pub struct CylindricalVessel {
    dims: VesselDimensions,
    material: Arc<RadioactiveMaterial>,
    body: PhysicalVolume,
    head: PhysicalVolume,
}

impl CylindricalVessel {
    pub fn new(
        material: Arc<RadioactiveMaterial>,
        dims: VesselDimensions,
    ) -> Result<Self, BudgetError> {
        let barrel =
            CylinderShell::from_thickness(dims.radius, dims.body_thickness, dims.length)?;
        let cap = Disk::new(dims.radius, dims.head_thickness)?;

        let body = PhysicalVolume::new(format!("{} body", dims.name), Arc::clone(&material), barrel);
        let head = PhysicalVolume::new(format!("{} head", dims.name), Arc::clone(&material), cap);

        Ok(Self {
            dims,
            material,
            body,
            head,
        })
    }

    pub fn name(&self) -> &str {
        &self.dims.name
    }

    pub fn material(&self) -> &RadioactiveMaterial {
        &self.material
    }

    pub fn material_name(&self) -> &str {
        self.material.name()
    }

    pub fn dimensions(&self) -> &VesselDimensions {
        &self.dims
    }

    pub fn radius(&self) -> f64 {
        self.dims.radius
    }

    pub fn length(&self) -> f64 {
        self.dims.length
    }

    pub fn body_thickness(&self) -> f64 {
        self.dims.body_thickness
    }

    pub fn head_thickness(&self) -> f64 {
        self.dims.head_thickness
    }

    pub fn body(&self) -> &PhysicalVolume {
        &self.body
    }

    pub fn head(&self) -> &PhysicalVolume {
        &self.head
    }

    // ---- barrel ----

    pub fn body_volume(&self) -> f64 {
        self.body.volume()
    }

    pub fn body_surface(&self) -> f64 {
        self.body.surface()
    }

    /// Outer lateral surface of the barrel, the area ambient flux sees.
    pub fn body_outer_surface(&self) -> f64 {
        self.body.shape().outer_surface()
    }

    pub fn body_mass(&self) -> f64 {
        self.body.mass()
    }

    pub fn body_activity(&self, isotope: Isotope) -> f64 {
        self.body.activity(isotope)
    }

    /// Activity escaping the barrel wall, self-shielded over its own
    /// thickness.
    pub fn body_self_shielded_activity(&self, isotope: Isotope) -> f64 {
        self.body
            .self_shielded_activity(self.dims.body_thickness, isotope)
    }

    pub fn body_transmittance(&self) -> f64 {
        self.material.transmittance(self.dims.body_thickness)
    }

    pub fn body_absorption(&self) -> f64 {
        self.material.absorption(self.dims.body_thickness)
    }

    // ---- one head ----

    pub fn head_volume(&self) -> f64 {
        self.head.volume()
    }

    pub fn head_surface(&self) -> f64 {
        self.head.surface()
    }

    /// Area of one head face.
    pub fn head_face_surface(&self) -> f64 {
        self.head.shape().inner_surface()
    }

    pub fn head_mass(&self) -> f64 {
        self.head.mass()
    }

    pub fn head_activity(&self, isotope: Isotope) -> f64 {
        self.head.activity(isotope)
    }

    pub fn head_self_shielded_activity(&self, isotope: Isotope) -> f64 {
        self.head
            .self_shielded_activity(self.dims.head_thickness, isotope)
    }

    pub fn head_transmittance(&self) -> f64 {
        self.material.transmittance(self.dims.head_thickness)
    }

    pub fn head_absorption(&self) -> f64 {
        self.material.absorption(self.dims.head_thickness)
    }

    // ---- both heads ----

    pub fn heads_volume(&self) -> f64 {
        2.0 * self.head_volume()
    }

    pub fn heads_mass(&self) -> f64 {
        2.0 * self.head_mass()
    }

    pub fn heads_activity(&self, isotope: Isotope) -> f64 {
        2.0 * self.head_activity(isotope)
    }

    pub fn heads_self_shielded_activity(&self, isotope: Isotope) -> f64 {
        2.0 * self.head_self_shielded_activity(isotope)
    }
}
