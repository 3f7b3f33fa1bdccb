//! # Radbudget Units
//!
//! System of units shared by every radbudget crate. All quantities are
//! stored as plain `f64` in a single coherent internal system and converted
//! only at the boundaries: multiply by a unit constant on the way in, divide
//! by one on the way out.
//!
//! ```
//! use radbudget_units::{CM, M3};
//!
//! let radius = 52.0 * CM;
//! let volume = 4.0 / 3.0 * std::f64::consts::PI * radius.powi(3);
//! println!("{:.2} m3", volume / M3);
//! ```
//!
//! Base units: millimetre (length), gram (mass), second (time). Activity
//! follows from time (Bq = 1/s). Stress constants are an independent
//! family: allowable strengths are carried as figures for downstream
//! mechanical design and never combined with the other dimensions.

// ============================================================================
// LENGTH — base unit: millimetre
// ============================================================================

pub const MM: f64 = 1.0;
pub const CM: f64 = 10.0 * MM;
pub const M: f64 = 1000.0 * MM;

pub const MM2: f64 = MM * MM;
pub const CM2: f64 = CM * CM;
pub const M2: f64 = M * M;

pub const MM3: f64 = MM * MM * MM;
pub const CM3: f64 = CM * CM * CM;
pub const M3: f64 = M * M * M;

// ============================================================================
// MASS — base unit: gram
// ============================================================================

pub const G: f64 = 1.0;
pub const KG: f64 = 1000.0 * G;
pub const TONNE: f64 = 1000.0 * KG;

// ============================================================================
// TIME AND ACTIVITY — base unit: second; 1 Bq = 1 decay/s
// ============================================================================

pub const S: f64 = 1.0;

pub const BQ: f64 = 1.0 / S;
pub const MBQ: f64 = 1e-3 * BQ;
pub const MUBQ: f64 = 1e-6 * BQ;

// ============================================================================
// COMPOSITE UNITS
// ============================================================================

/// Density.
pub const G_PER_CM3: f64 = G / CM3;

/// Mass attenuation coefficient.
pub const CM2_PER_G: f64 = CM2 / G;

/// Specific activity.
pub const BQ_PER_KG: f64 = BQ / KG;
pub const MBQ_PER_KG: f64 = MBQ / KG;
pub const MUBQ_PER_KG: f64 = MUBQ / KG;

/// Surface activity and ambient gamma flux.
pub const BQ_PER_CM2: f64 = BQ / CM2;
pub const MBQ_PER_M2: f64 = MBQ / M2;

// ============================================================================
// STRESS — independent family, carried but never combined
// ============================================================================

pub const PA: f64 = 1.0;
pub const MPA: f64 = 1e6 * PA;
pub const BAR: f64 = 1e5 * PA;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_units_are_coherent() {
        assert_eq!(1.0 * M, 100.0 * CM);
        assert_eq!(1.0 * M3, 1e9 * MM3);
        assert_eq!(1.0 * CM2, 100.0 * MM2);
    }

    #[test]
    fn density_round_trips() {
        let rho = 7.87 * G_PER_CM3;
        assert!((rho / G_PER_CM3 - 7.87).abs() < 1e-12);
    }

    #[test]
    fn activity_prefixes() {
        assert_eq!(1.0 * BQ, 1000.0 * MBQ);
        assert_eq!(1.0 * MBQ, 1000.0 * MUBQ);
    }
}
