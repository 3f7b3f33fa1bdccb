//! Reference detector geometry.
//!
//! The surveyed dimensions of the reference detector, gathered into one
//! record that is handed to the vessel constructors. Fixture constants
//! are injected, never read as ambient globals. `Default` carries the
//! as-built values; a deployment can override any of them from a TOML
//! description (lengths in millimetres).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use radbudget_materials::catalogue;
use radbudget_units::{CM, MM, MUBQ};

use crate::activity::Activity;
use crate::assembly::{ring_electrode, FieldCage};
use crate::vessel::{CylindricalVessel, VesselDimensions};
use crate::BudgetError;

/// Field-cage fixture dimensions and the per-resistor screening result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCageDimensions {
    pub inner_diameter: f64,
    pub length: f64,
    pub thickness: f64,
    pub electrode_pitch: f64,
    pub electrode_length: f64,
    pub electrode_thickness: f64,
    pub resistor_activity: Activity,
}

impl Default for FieldCageDimensions {
    fn default() -> Self {
        Self {
            inner_diameter: 105.0 * CM,
            length: 130.0 * CM,
            thickness: 2.0 * CM,
            electrode_pitch: 12.0 * MM,
            electrode_length: 10.0 * MM,
            electrode_thickness: 6.0 * MM,
            resistor_activity: Activity::new(17.9 * MUBQ, 3.1 * MUBQ),
        }
    }
}

/// The dimension catalogue of the reference detector, innermost to
/// outermost: field cage, copper shield, pressure vessel, lead castle.
/// The envelope is the vessel's outer boundary, used to intercept the
/// ambient laboratory flux.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorGeometry {
    pub pressure_vessel: VesselDimensions,
    pub copper_shield: VesselDimensions,
    pub lead_castle: VesselDimensions,
    pub envelope: VesselDimensions,
    pub field_cage: FieldCageDimensions,
}

impl Default for DetectorGeometry {
    fn default() -> Self {
        Self {
            pressure_vessel: VesselDimensions {
                name: "pressure vessel".into(),
                radius: 68.0 * CM,
                body_thickness: 1.8 * CM,
                length: 160.0 * CM,
                head_thickness: 1.0 * CM,
            },
            // Wrapped around the field cage bore.
            copper_shield: VesselDimensions {
                name: "copper shield".into(),
                radius: 55.0 * CM,
                body_thickness: 12.0 * CM,
                length: 160.0 * CM,
                head_thickness: 12.0 * CM,
            },
            // 10 cm of air between vessel and castle.
            lead_castle: VesselDimensions {
                name: "lead castle".into(),
                radius: 79.8 * CM,
                body_thickness: 25.0 * CM,
                length: 240.0 * CM,
                head_thickness: 25.0 * CM,
            },
            envelope: VesselDimensions {
                name: "envelope".into(),
                radius: 69.8 * CM,
                body_thickness: 1.0 * MM,
                length: 160.0 * CM,
                head_thickness: 1.0 * MM,
            },
            field_cage: FieldCageDimensions::default(),
        }
    }
}

impl DetectorGeometry {
    /// The 316Ti pressure vessel.
    pub fn pressure_vessel(&self) -> Result<CylindricalVessel, BudgetError> {
        let steel = Arc::new(catalogue::ti316().radioactive().clone());
        CylindricalVessel::new(steel, self.pressure_vessel.clone())
    }

    /// The inner copper shield, electroformed grade.
    pub fn copper_shield(&self) -> Result<CylindricalVessel, BudgetError> {
        let copper = Arc::new(catalogue::copper_best());
        CylindricalVessel::new(copper, self.copper_shield.clone())
    }

    /// The external lead castle.
    pub fn lead_castle(&self) -> Result<CylindricalVessel, BudgetError> {
        let lead = Arc::new(catalogue::lead());
        CylindricalVessel::new(lead, self.lead_castle.clone())
    }

    /// The detector envelope: a xenon-filled boundary that intercepts the
    /// ambient laboratory flux without contributing activity of its own.
    pub fn envelope(&self) -> Result<CylindricalVessel, BudgetError> {
        let xenon = Arc::new(catalogue::xenon());
        CylindricalVessel::new(xenon, self.envelope.clone())
    }

    /// The field cage: HDPE barrel, copper ring electrodes, grading
    /// resistors.
    pub fn field_cage(&self) -> Result<FieldCage, BudgetError> {
        let fc = &self.field_cage;
        let electrode = ring_electrode(
            "ring electrode",
            fc.inner_diameter,
            fc.electrode_length,
            fc.electrode_thickness,
            Arc::new(catalogue::copper_bulk()),
        )?;
        FieldCage::new(
            "field cage",
            fc.inner_diameter,
            fc.length,
            fc.thickness,
            fc.electrode_pitch,
            Arc::new(catalogue::polyethylene()),
            electrode,
            fc.resistor_activity,
        )
    }
}
