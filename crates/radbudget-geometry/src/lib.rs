//! # Radbudget Geometry
//!
//! Closed-form geometric solids for detector component modelling. This
//! crate provides:
//!
//! - **The [`Solid`](shapes::Solid) trait** — six primitive queries (inner
//!   and shell volume, inner/outer/thickness surfaces, thickness) from
//!   which the derived `volume()` and `surface()` come for free.
//! - **Shape variants** ([`shapes`]) — spheres, spherical and cylindrical
//!   shells, disks, and bricks, each an immutable value object validated at
//!   construction.
//! - **The [`Shape`](shapes::Shape) enum** — a closed set over the variants
//!   so downstream code can hold any geometry without branching on kind.
//!
//! Every quantity is a scalar in the shared internal unit system; there are
//! no coordinates or orientations here, only the magnitudes that masses,
//! surfaces, and attenuation path lengths are derived from.

pub mod shapes;

pub use shapes::{
    Brick, Cylinder, CylinderShell, Disk, GeometryError, SemiSphereShell, Shape, Solid, Sphere,
    SphereShell,
};
