//! A physical volume: one shape filled with one material.

use std::sync::Arc;

use radbudget_geometry::{Shape, Solid};
use radbudget_materials::{Isotope, RadioactiveMaterial};

/// A shape instance paired with a material instance.
///
/// Materials are shared: one screened material typically backs many
/// volumes, so it is held through an [`Arc`]. Every query is a pure
/// closed-form computation over the pair, recomputed on each call.
#[derive(Debug, Clone)]
pub struct PhysicalVolume {
    name: String,
    material: Arc<RadioactiveMaterial>,
    shape: Shape,
}

impl PhysicalVolume {
    /// Pair a validated shape with a validated material. Infallible: both
    /// inputs already hold their invariants.
    pub fn new(
        name: impl Into<String>,
        material: Arc<RadioactiveMaterial>,
        shape: impl Into<Shape>,
    ) -> Self {
        Self {
            name: name.into(),
            material,
            shape: shape.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &RadioactiveMaterial {
        &self.material
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Enclosed-content volume of the shape.
    pub fn volume(&self) -> f64 {
        self.shape.volume()
    }

    /// Total surface of the shape.
    pub fn surface(&self) -> f64 {
        self.shape.surface()
    }

    /// Mass = volume × density.
    pub fn mass(&self) -> f64 {
        self.volume() * self.material.density()
    }

    /// Mass of the shell wall itself: shell volume × density. Zero for
    /// solids.
    pub fn wall_mass(&self) -> f64 {
        self.shape.shell_volume() * self.material.density()
    }

    /// Bulk activity of the selected isotope: mass × specific activity.
    pub fn activity(&self, isotope: Isotope) -> f64 {
        self.mass() * self.material.specific_activity(isotope)
    }

    /// Activity of the shell wall alone: wall mass × specific activity.
    pub fn wall_activity(&self, isotope: Isotope) -> f64 {
        self.wall_mass() * self.material.specific_activity(isotope)
    }

    /// Fraction of gammas crossing a path length `z` of this material.
    pub fn transmittance(&self, z: f64) -> f64 {
        self.material.transmittance(z)
    }

    pub fn absorption(&self, z: f64) -> f64 {
        self.material.absorption(z)
    }

    /// Activity escaping the volume's own bulk through its surface, for a
    /// wall of thickness `z`: surface × surface activity.
    pub fn self_shielded_activity(&self, z: f64, isotope: Isotope) -> f64 {
        self.surface() * self.material.surface_activity(z, isotope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radbudget_geometry::Disk;
    use radbudget_materials::catalogue;
    use radbudget_units::{CM, KG, MBQ};

    fn steel_cap() -> PhysicalVolume {
        let steel = Arc::new(catalogue::ti316().radioactive().clone());
        let cap = Disk::new(52.0 * CM, 1.0 * CM).unwrap();
        PhysicalVolume::new("end-cap", steel, cap)
    }

    #[test]
    fn mass_is_volume_times_density() {
        let pv = steel_cap();
        // pi * 0.52^2 m2 * 1 cm * 7.87 g/cm3 = 66.9 kg
        assert_relative_eq!(pv.mass() / KG, 66.9, max_relative = 1e-2);
    }

    #[test]
    fn activity_scales_with_specific_activity() {
        let pv = steel_cap();
        // 66.9 kg at 1.0 mBq/kg
        assert_relative_eq!(pv.activity(Isotope::Bi214) / MBQ, 66.9, max_relative = 1e-2);
        assert_relative_eq!(
            pv.activity(Isotope::Tl208),
            0.4 * pv.activity(Isotope::Bi214),
            max_relative = 1e-9
        );
    }

    #[test]
    fn transmittance_delegates_to_material() {
        let pv = steel_cap();
        assert_relative_eq!(
            pv.transmittance(2.0 * CM),
            pv.material().transmittance(2.0 * CM)
        );
        assert_relative_eq!(
            pv.transmittance(2.0 * CM) + pv.absorption(2.0 * CM),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn self_shielded_activity_is_surface_times_surface_activity() {
        let pv = steel_cap();
        let z = 1.0 * CM;
        let expected = pv.surface() * pv.material().surface_activity(z, Isotope::Bi214);
        assert_relative_eq!(
            pv.self_shielded_activity(z, Isotope::Bi214),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn materials_are_shared_not_copied() {
        let steel = Arc::new(catalogue::ti316().radioactive().clone());
        let a = PhysicalVolume::new("a", Arc::clone(&steel), Disk::new(10.0, 1.0).unwrap());
        let b = PhysicalVolume::new("b", Arc::clone(&steel), Disk::new(20.0, 1.0).unwrap());
        assert!(std::ptr::eq(a.material(), b.material()));
    }
}
