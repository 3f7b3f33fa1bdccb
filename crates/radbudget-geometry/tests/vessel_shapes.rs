//! Scenario tests against the surveyed dimensions of a real pressure
//! vessel: a 52 cm inner radius, 1 cm wall barrel with 10 cm end-caps.

use approx::assert_relative_eq;
use radbudget_geometry::{CylinderShell, Disk, Solid};
use radbudget_units::{CM, M2, M3};

#[test]
fn pressure_vessel_barrel() {
    let barrel = CylinderShell::new(52.0 * CM, 53.0 * CM, 130.0 * CM).unwrap();

    assert_relative_eq!(barrel.inner_volume() / M3, 1.10, max_relative = 1e-2);
    assert_relative_eq!(barrel.shell_volume() / M3, 4.29e-2, max_relative = 1e-2);
    assert_relative_eq!(barrel.inner_surface() / M2, 4.25, max_relative = 1e-2);
    assert_relative_eq!(barrel.outer_surface() / M2, 4.33, max_relative = 1e-2);
    assert_relative_eq!(barrel.thickness() / CM, 1.0, max_relative = 1e-7);
}

#[test]
fn pressure_vessel_end_cap() {
    let cap = Disk::new(52.0 * CM, 10.0 * CM).unwrap();

    // One face and the plate volume.
    assert_relative_eq!(cap.inner_surface() / M2, 0.85, max_relative = 1e-2);
    assert_relative_eq!(cap.volume() / M3, 8.49e-2, max_relative = 1e-2);
    assert_relative_eq!(cap.thickness() / CM, 10.0, max_relative = 1e-7);
}

#[test]
fn barrel_surfaces_are_exact_closed_forms() {
    use std::f64::consts::PI;

    let rin = 52.0 * CM;
    let rout = 53.0 * CM;
    let length = 130.0 * CM;
    let barrel = CylinderShell::new(rin, rout, length).unwrap();

    assert_relative_eq!(
        barrel.inner_volume(),
        PI * rin * rin * length,
        max_relative = 1e-7
    );
    assert_relative_eq!(
        barrel.shell_volume(),
        PI * (rout * rout - rin * rin) * length,
        max_relative = 1e-7
    );
    assert_relative_eq!(
        barrel.inner_surface(),
        2.0 * PI * rin * length,
        max_relative = 1e-7
    );
    assert_relative_eq!(
        barrel.outer_surface(),
        2.0 * PI * rout * length,
        max_relative = 1e-7
    );
    assert_relative_eq!(
        barrel.thickness_surface(),
        PI * (rout * rout - rin * rin),
        max_relative = 1e-7
    );
}
