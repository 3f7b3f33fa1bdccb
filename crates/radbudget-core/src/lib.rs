//! # Radbudget Core
//!
//! The accounting backbone of the radbudget framework: combines the
//! geometry and material crates into detector components and propagates
//! their radioactivity through nested shielding.
//!
//! ## Architecture
//!
//! A [`volume::PhysicalVolume`] pairs one shape with one (shared) material
//! and answers mass, activity, and transmittance queries. A
//! [`vessel::CylindricalVessel`] assembles a barrel and end-cap volumes
//! from one dimension record. The [`activity`] module turns vessels into
//! immutable budget records and applies the attenuation chain; the
//! [`assembly`] module holds the multi-component composites (shield chain,
//! field cage) and [`detector`] the fixture geometry of the reference
//! detector. Everything is a pure closed-form computation over immutable
//! value objects.
//!
//! ## Modules
//!
//! - [`volume`] — shape × material.
//! - [`vessel`] — cylindrical vessels (barrel + two heads).
//! - [`activity`] — budget records, self-shielding, attenuation chain.
//! - [`assembly`] — shield chains and the field cage.
//! - [`detector`] — reference detector geometry catalogue.
//! - [`sensors`] — photosensor models and population counting.

use thiserror::Error;

use radbudget_geometry::GeometryError;
use radbudget_materials::MaterialError;

pub mod activity;
pub mod assembly;
pub mod detector;
pub mod sensors;
pub mod vessel;
pub mod volume;

pub use activity::{Activity, ActivityRecord, GammaFlux, VesselActivity};
pub use assembly::{FieldCage, ShieldChain};
pub use detector::DetectorGeometry;
pub use sensors::{DiceBoard, Pmt, SiPm};
pub use vessel::{CylindricalVessel, VesselDimensions};
pub use volume::PhysicalVolume;

/// Errors from assembling detector components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error("geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("material: {0}")]
    Material(#[from] MaterialError),

    #[error("{name}: electrode pitch must be positive and no larger than the cage length (got {pitch})")]
    InvalidPitch { name: String, pitch: f64 },

    #[error("{name}: {field} must be positive and finite (got {value})")]
    InvalidSensor {
        name: String,
        field: &'static str,
        value: f64,
    },
}
