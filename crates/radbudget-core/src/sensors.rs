//! Photosensor models and population counting.
//!
//! Sensors enter the budget as screened per-unit activities multiplied by
//! how many units the detector carries. The energy plane counts its
//! photomultipliers directly; the tracking plane is tiled with silicon
//! photomultiplier dice boards, so its count follows from the plane area
//! and the board footprint.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityRecord};
use crate::BudgetError;

fn positive(
    name: &str,
    field: &'static str,
    value: f64,
) -> Result<f64, BudgetError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BudgetError::InvalidSensor {
            name: name.to_string(),
            field,
            value,
        })
    }
}

/// A photomultiplier tube of the energy plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pmt {
    pub name: String,
    /// Window diameter.
    pub diameter: f64,
    /// Photocathode quantum efficiency.
    pub quantum_efficiency: f64,
    /// Screened activity of one tube.
    pub activity: Activity,
}

impl Pmt {
    pub fn new(
        name: impl Into<String>,
        diameter: f64,
        quantum_efficiency: f64,
        activity: Activity,
    ) -> Result<Self, BudgetError> {
        let name = name.into();
        let diameter = positive(&name, "diameter", diameter)?;
        let quantum_efficiency = positive(&name, "quantum efficiency", quantum_efficiency)?;
        Ok(Self {
            name,
            diameter,
            quantum_efficiency,
            activity,
        })
    }

    /// Window area facing the gas.
    pub fn window_surface(&self) -> f64 {
        let r = self.diameter / 2.0;
        PI * r * r
    }
}

impl Default for Pmt {
    /// The 3-inch low-background tube of the reference design.
    fn default() -> Self {
        use radbudget_units::{CM, MBQ};
        Self {
            name: "R11410".into(),
            diameter: 7.5 * CM,
            quantum_efficiency: 0.3,
            activity: Activity::new(2.0 * MBQ, 2.0 * MBQ),
        }
    }
}

/// A silicon photomultiplier of the tracking plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiPm {
    pub name: String,
    /// Active square side.
    pub side: f64,
    pub quantum_efficiency: f64,
    /// Wavelength-shifter conversion efficiency in front of the sensor.
    pub tpb_efficiency: f64,
    pub activity: Activity,
}

impl SiPm {
    pub fn new(
        name: impl Into<String>,
        side: f64,
        quantum_efficiency: f64,
        tpb_efficiency: f64,
        activity: Activity,
    ) -> Result<Self, BudgetError> {
        let name = name.into();
        let side = positive(&name, "side", side)?;
        let quantum_efficiency = positive(&name, "quantum efficiency", quantum_efficiency)?;
        let tpb_efficiency = positive(&name, "TPB efficiency", tpb_efficiency)?;
        Ok(Self {
            name,
            side,
            quantum_efficiency,
            tpb_efficiency,
            activity,
        })
    }

    pub fn surface(&self) -> f64 {
        self.side * self.side
    }

    /// Global photon detection efficiency: QE × wavelength-shifter
    /// efficiency.
    pub fn pde(&self) -> f64 {
        self.quantum_efficiency * self.tpb_efficiency
    }
}

impl Default for SiPm {
    fn default() -> Self {
        use radbudget_units::{MM, MUBQ};
        Self {
            name: "S13372".into(),
            side: 1.0 * MM,
            quantum_efficiency: 0.5,
            tpb_efficiency: 0.5,
            activity: Activity::new(20.0 * MUBQ, 20.0 * MUBQ),
        }
    }
}

/// A dice board: a square carrier tiling the tracking plane with SiPMs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceBoard {
    pub name: String,
    /// Board side.
    pub side: f64,
    /// SiPM pitch on the board.
    pub pitch: f64,
    /// SiPMs carried per board.
    pub sipm_count: usize,
    /// Screened activity of one populated board.
    pub activity: Activity,
}

impl DiceBoard {
    pub fn new(
        name: impl Into<String>,
        side: f64,
        pitch: f64,
        sipm_count: usize,
        activity: Activity,
    ) -> Result<Self, BudgetError> {
        let name = name.into();
        let side = positive(&name, "side", side)?;
        let pitch = positive(&name, "pitch", pitch)?;
        Ok(Self {
            name,
            side,
            pitch,
            sipm_count,
            activity,
        })
    }

    pub fn surface(&self) -> f64 {
        self.side * self.side
    }

    /// How many boards tile a plane of the given area.
    pub fn boards_per_plane(&self, plane_area: f64) -> f64 {
        plane_area / self.surface()
    }
}

impl Default for DiceBoard {
    fn default() -> Self {
        use radbudget_units::{MM, MUBQ};
        Self {
            name: "DB-64".into(),
            side: 110.0 * MM,
            pitch: 10.0 * MM,
            sipm_count: 64,
            activity: Activity::new(31.0 * MUBQ, 15.0 * MUBQ),
        }
    }
}

/// Total activity of `count` identical sensor units.
pub fn sensor_population(
    name: impl Into<String>,
    count: f64,
    unit_activity: Activity,
) -> ActivityRecord {
    ActivityRecord {
        name: name.into(),
        activity: unit_activity.scaled(count),
        transmitted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radbudget_units::{CM2, M2, MBQ, MM, MUBQ};

    #[test]
    fn pmt_window_surface() {
        let pmt = Pmt::default();
        assert_relative_eq!(pmt.window_surface() / CM2, 44.2, max_relative = 1e-2);
    }

    #[test]
    fn sipm_pde_combines_both_efficiencies() {
        let sipm = SiPm::default();
        assert_relative_eq!(sipm.pde(), 0.25);
        assert_relative_eq!(sipm.surface() / (MM * MM), 1.0);
    }

    #[test]
    fn board_count_follows_from_plane_area() {
        let board = DiceBoard::default();
        let plane = 1.0 * M2;
        assert_relative_eq!(
            board.boards_per_plane(plane),
            1.0 * M2 / (110.0 * MM * 110.0 * MM),
            max_relative = 1e-12
        );
    }

    #[test]
    fn population_scales_per_unit_activity() {
        let pmt = Pmt::default();
        let record = sensor_population("energy plane PMTs", 60.0, pmt.activity);
        assert_relative_eq!(record.activity.bi214 / MBQ, 120.0, max_relative = 1e-12);
        assert!(!record.transmitted);
    }

    #[test]
    fn board_population_from_default_tracking_plane() {
        let board = DiceBoard::default();
        let plane = 1.1 * M2;
        let boards = board.boards_per_plane(plane);
        let record = sensor_population("tracking plane boards", boards, board.activity);
        assert_relative_eq!(
            record.activity.tl208 / MUBQ,
            boards * 15.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn bad_sensor_dimensions_are_rejected() {
        let err = Pmt::new("bad", 0.0, 0.3, Activity::ZERO).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::InvalidSensor { field: "diameter", .. }
        ));
        assert!(SiPm::new("bad", 1.0, -0.5, 0.5, Activity::ZERO).is_err());
        assert!(DiceBoard::new("bad", 110.0, 0.0, 64, Activity::ZERO).is_err());
    }
}
