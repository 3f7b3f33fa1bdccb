//! TOML overrides for the detector geometry.
//!
//! Without a file the built-in reference geometry is used. An override
//! file may redefine any subset of the components; lengths are in
//! millimetres and activities in internal units:
//!
//! ```toml
//! [pressure_vessel]
//! name = "pressure vessel"
//! radius = 680.0
//! body_thickness = 18.0
//! length = 1600.0
//! head_thickness = 10.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use radbudget_core::DetectorGeometry;

/// Load the detector geometry, falling back to the built-in reference
/// values when no override file is given.
pub fn load_geometry(path: Option<&Path>) -> Result<DetectorGeometry> {
    let Some(path) = path else {
        return Ok(DetectorGeometry::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading geometry file {}", path.display()))?;
    let geometry: DetectorGeometry = toml::from_str(&content)
        .with_context(|| format!("parsing geometry file {}", path.display()))?;
    Ok(geometry)
}
