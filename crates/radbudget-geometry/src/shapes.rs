//! Geometric solids and shells with closed-form volumes and surfaces.
//!
//! The conventions follow how a pressure vessel is described: a
//! [`CylinderShell`] for the barrel, a [`Disk`] for each end-cap, and a
//! [`Cylinder`] for the enclosed gas. For any solid, `volume()` is the
//! enclosed-content volume and `surface()` is the sum of the inner, outer,
//! and thickness surfaces.
//!
//! All shapes are immutable value objects. Dimensions are validated at
//! construction: a constructed shape never reports a negative volume or
//! surface, so downstream queries are infallible.

use std::f64::consts::PI;

use thiserror::Error;

/// Errors from shape construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{shape}: {field} must be positive and finite (got {value})")]
    NonPositiveDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{shape}: {field} must be non-negative and finite (got {value})")]
    NegativeDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{shape}: outer radius ({rout}) must not be smaller than inner radius ({rin})")]
    InvertedShell {
        shape: &'static str,
        rin: f64,
        rout: f64,
    },
}

fn positive(shape: &'static str, field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { shape, field, value })
    }
}

fn non_negative(shape: &'static str, field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NegativeDimension { shape, field, value })
    }
}

fn ordered_radii(shape: &'static str, rin: f64, rout: f64) -> Result<(), GeometryError> {
    if rout >= rin {
        Ok(())
    } else {
        Err(GeometryError::InvertedShell { shape, rin, rout })
    }
}

/// A closed-form solid or shell.
///
/// Six primitive queries define the interface; the derived `volume()` and
/// `surface()` are provided once on top of them and are never reimplemented
/// per variant. Solids without a wall (sphere, cylinder, brick) report zero
/// shell volume, thickness surface, and thickness.
pub trait Solid {
    /// Volume enclosed by the shape (for a shell, the cavity it bounds).
    fn inner_volume(&self) -> f64;

    /// Volume of the shell wall itself; zero for solids.
    fn shell_volume(&self) -> f64;

    /// Surface in contact with the enclosed content.
    fn inner_surface(&self) -> f64;

    /// Surface in contact with the outside.
    fn outer_surface(&self) -> f64;

    /// Exposed cross-section of the wall (annular end faces, disk rim);
    /// zero for solids.
    fn thickness_surface(&self) -> f64;

    /// Wall thickness; zero for solids.
    fn thickness(&self) -> f64;

    /// Enclosed-content volume convention.
    fn volume(&self) -> f64 {
        self.inner_volume()
    }

    /// Total surface: inner + outer + thickness.
    fn surface(&self) -> f64 {
        self.inner_surface() + self.outer_surface() + self.thickness_surface()
    }
}

/// A solid sphere of radius `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: positive("Sphere", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Solid for Sphere {
    fn inner_volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    fn shell_volume(&self) -> f64 {
        0.0
    }

    fn inner_surface(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }

    fn outer_surface(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }

    fn thickness_surface(&self) -> f64 {
        0.0
    }

    fn thickness(&self) -> f64 {
        0.0
    }
}

/// A spherical shell between radii `Rin` and `Rout`.
///
/// `Rin == Rout` is accepted and degenerates to a zero-volume wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShell {
    rin: f64,
    rout: f64,
}

impl SphereShell {
    pub fn new(rin: f64, rout: f64) -> Result<Self, GeometryError> {
        let rin = non_negative("SphereShell", "inner radius", rin)?;
        let rout = positive("SphereShell", "outer radius", rout)?;
        ordered_radii("SphereShell", rin, rout)?;
        Ok(Self { rin, rout })
    }

    pub fn inner_radius(&self) -> f64 {
        self.rin
    }

    pub fn outer_radius(&self) -> f64 {
        self.rout
    }
}

impl Solid for SphereShell {
    fn inner_volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.rin.powi(3)
    }

    fn shell_volume(&self) -> f64 {
        4.0 / 3.0 * PI * (self.rout.powi(3) - self.rin.powi(3))
    }

    fn inner_surface(&self) -> f64 {
        4.0 * PI * self.rin.powi(2)
    }

    fn outer_surface(&self) -> f64 {
        4.0 * PI * self.rout.powi(2)
    }

    fn thickness_surface(&self) -> f64 {
        0.0
    }

    fn thickness(&self) -> f64 {
        self.rout - self.rin
    }
}

/// Half of a [`SphereShell`]: volumes and curved surfaces are halved, and
/// the equatorial cut exposes an annulus of wall cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiSphereShell {
    rin: f64,
    rout: f64,
}

impl SemiSphereShell {
    pub fn new(rin: f64, rout: f64) -> Result<Self, GeometryError> {
        let rin = non_negative("SemiSphereShell", "inner radius", rin)?;
        let rout = positive("SemiSphereShell", "outer radius", rout)?;
        ordered_radii("SemiSphereShell", rin, rout)?;
        Ok(Self { rin, rout })
    }

    pub fn inner_radius(&self) -> f64 {
        self.rin
    }

    pub fn outer_radius(&self) -> f64 {
        self.rout
    }
}

impl Solid for SemiSphereShell {
    fn inner_volume(&self) -> f64 {
        2.0 / 3.0 * PI * self.rin.powi(3)
    }

    fn shell_volume(&self) -> f64 {
        2.0 / 3.0 * PI * (self.rout.powi(3) - self.rin.powi(3))
    }

    fn inner_surface(&self) -> f64 {
        2.0 * PI * self.rin.powi(2)
    }

    fn outer_surface(&self) -> f64 {
        2.0 * PI * self.rout.powi(2)
    }

    fn thickness_surface(&self) -> f64 {
        PI * (self.rout.powi(2) - self.rin.powi(2))
    }

    fn thickness(&self) -> f64 {
        self.rout - self.rin
    }
}

/// A solid cylinder of radius `R` and length `L`, e.g. the gas volume
/// enclosed by a vessel barrel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    length: f64,
}

impl Cylinder {
    pub fn new(radius: f64, length: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: positive("Cylinder", "radius", radius)?,
            length: positive("Cylinder", "length", length)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Solid for Cylinder {
    fn inner_volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.length
    }

    fn shell_volume(&self) -> f64 {
        0.0
    }

    fn inner_surface(&self) -> f64 {
        2.0 * PI * self.radius * self.length
    }

    fn outer_surface(&self) -> f64 {
        2.0 * PI * self.radius * self.length
    }

    fn thickness_surface(&self) -> f64 {
        0.0
    }

    fn thickness(&self) -> f64 {
        0.0
    }
}

/// A cylindrical shell (tube) between radii `Rin` and `Rout`, length `L`.
///
/// The thickness surface is the annular wall cross-section
/// `π(Rout² − Rin²)`, the area a flat end-cap would mate against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderShell {
    rin: f64,
    rout: f64,
    length: f64,
}

impl CylinderShell {
    pub fn new(rin: f64, rout: f64, length: f64) -> Result<Self, GeometryError> {
        let rin = non_negative("CylinderShell", "inner radius", rin)?;
        let rout = positive("CylinderShell", "outer radius", rout)?;
        ordered_radii("CylinderShell", rin, rout)?;
        Ok(Self {
            rin,
            rout,
            length: positive("CylinderShell", "length", length)?,
        })
    }

    /// Construct from inner radius and wall thickness instead of two radii.
    pub fn from_thickness(rin: f64, thickness: f64, length: f64) -> Result<Self, GeometryError> {
        let thickness = non_negative("CylinderShell", "thickness", thickness)?;
        Self::new(rin, rin + thickness, length)
    }

    pub fn inner_radius(&self) -> f64 {
        self.rin
    }

    pub fn outer_radius(&self) -> f64 {
        self.rout
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Solid for CylinderShell {
    fn inner_volume(&self) -> f64 {
        PI * self.rin.powi(2) * self.length
    }

    fn shell_volume(&self) -> f64 {
        PI * (self.rout.powi(2) - self.rin.powi(2)) * self.length
    }

    fn inner_surface(&self) -> f64 {
        2.0 * PI * self.rin * self.length
    }

    fn outer_surface(&self) -> f64 {
        2.0 * PI * self.rout * self.length
    }

    fn thickness_surface(&self) -> f64 {
        PI * (self.rout.powi(2) - self.rin.powi(2))
    }

    fn thickness(&self) -> f64 {
        self.rout - self.rin
    }
}

/// A flat disk (plate) of radius `R` and thickness `t`, e.g. a vessel
/// end-cap. Both faces have area `πR²`; the rim is the thickness surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    radius: f64,
    thickness: f64,
}

impl Disk {
    pub fn new(radius: f64, thickness: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: positive("Disk", "radius", radius)?,
            thickness: non_negative("Disk", "thickness", thickness)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Solid for Disk {
    fn inner_volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.thickness
    }

    fn shell_volume(&self) -> f64 {
        0.0
    }

    fn inner_surface(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn outer_surface(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn thickness_surface(&self) -> f64 {
        2.0 * PI * self.radius * self.thickness
    }

    fn thickness(&self) -> f64 {
        self.thickness
    }
}

/// A rectangular solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    width: f64,
    height: f64,
    length: f64,
}

impl Brick {
    pub fn new(width: f64, height: f64, length: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            width: positive("Brick", "width", width)?,
            height: positive("Brick", "height", height)?,
            length: positive("Brick", "length", length)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Solid for Brick {
    fn inner_volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    fn shell_volume(&self) -> f64 {
        0.0
    }

    fn inner_surface(&self) -> f64 {
        2.0 * (self.width * self.height + self.width * self.length + self.height * self.length)
    }

    fn outer_surface(&self) -> f64 {
        2.0 * (self.width * self.height + self.width * self.length + self.height * self.length)
    }

    fn thickness_surface(&self) -> f64 {
        0.0
    }

    fn thickness(&self) -> f64 {
        0.0
    }
}

/// Any of the supported solids, for code that holds geometry without
/// knowing its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    SphereShell(SphereShell),
    SemiSphereShell(SemiSphereShell),
    Cylinder(Cylinder),
    CylinderShell(CylinderShell),
    Disk(Disk),
    Brick(Brick),
}

impl Shape {
    fn as_solid(&self) -> &dyn Solid {
        match self {
            Shape::Sphere(s) => s,
            Shape::SphereShell(s) => s,
            Shape::SemiSphereShell(s) => s,
            Shape::Cylinder(s) => s,
            Shape::CylinderShell(s) => s,
            Shape::Disk(s) => s,
            Shape::Brick(s) => s,
        }
    }
}

impl Solid for Shape {
    fn inner_volume(&self) -> f64 {
        self.as_solid().inner_volume()
    }

    fn shell_volume(&self) -> f64 {
        self.as_solid().shell_volume()
    }

    fn inner_surface(&self) -> f64 {
        self.as_solid().inner_surface()
    }

    fn outer_surface(&self) -> f64 {
        self.as_solid().outer_surface()
    }

    fn thickness_surface(&self) -> f64 {
        self.as_solid().thickness_surface()
    }

    fn thickness(&self) -> f64 {
        self.as_solid().thickness()
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<SphereShell> for Shape {
    fn from(s: SphereShell) -> Self {
        Shape::SphereShell(s)
    }
}

impl From<SemiSphereShell> for Shape {
    fn from(s: SemiSphereShell) -> Self {
        Shape::SemiSphereShell(s)
    }
}

impl From<Cylinder> for Shape {
    fn from(s: Cylinder) -> Self {
        Shape::Cylinder(s)
    }
}

impl From<CylinderShell> for Shape {
    fn from(s: CylinderShell) -> Self {
        Shape::CylinderShell(s)
    }
}

impl From<Disk> for Shape {
    fn from(s: Disk) -> Self {
        Shape::Disk(s)
    }
}

impl From<Brick> for Shape {
    fn from(s: Brick) -> Self {
        Shape::Brick(s)
    }
}
