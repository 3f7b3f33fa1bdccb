//! Table, CSV, and JSON rendering of activity records.

use std::path::Path;

use anyhow::Result;

use radbudget_core::ActivityRecord;
use radbudget_materials::{Isotope, RadioactiveMaterial};
use radbudget_units::{CM, CM2_PER_G, G_PER_CM3, MBQ, MBQ_PER_KG};

/// Print an aligned activity table in mBq.
pub fn print_table(title: &str, records: &[ActivityRecord]) {
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!(
        "{:<40} {:>14} {:>14}  {}",
        "component", "Bi-214 (mBq)", "Tl-208 (mBq)", "transmitted"
    );
    for record in records {
        println!(
            "{:<40} {:>14.4e} {:>14.4e}  {}",
            record.name,
            record.activity.bi214 / MBQ,
            record.activity.tl208 / MBQ,
            if record.transmitted { "yes" } else { "" }
        );
    }
    println!();
}

/// Write records to a CSV file with a metadata header.
pub fn write_csv(title: &str, records: &[ActivityRecord], path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# radbudget — {title}")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "#")?;
    writeln!(file, "component,bi214_mbq,tl208_mbq,transmitted")?;
    for record in records {
        writeln!(
            file,
            "{},{:.6e},{:.6e},{}",
            record.name,
            record.activity.bi214 / MBQ,
            record.activity.tl208 / MBQ,
            record.transmitted
        )?;
    }

    println!("Table written to: {}", path.display());
    Ok(())
}

/// Emit records as pretty-printed JSON on stdout.
pub fn print_json(records: &[ActivityRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Print the material catalogue with derived attenuation constants.
pub fn print_materials(materials: &[RadioactiveMaterial]) {
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>14} {:>14}",
        "material", "rho", "mu/rho", "mu", "Latt", "Bi-214", "Tl-208"
    );
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>14} {:>14}",
        "", "(g/cm3)", "(cm2/g)", "(1/cm)", "(cm)", "(mBq/kg)", "(mBq/kg)"
    );
    for m in materials {
        println!(
            "{:<12} {:>10.3} {:>10.3} {:>10.3} {:>10.2} {:>14.3e} {:>14.3e}",
            m.name(),
            m.density() / G_PER_CM3,
            m.material().mass_attenuation_coefficient() / CM2_PER_G,
            m.attenuation_coefficient() * CM,
            m.attenuation_length() / CM,
            m.specific_activity(Isotope::Bi214) / MBQ_PER_KG,
            m.specific_activity(Isotope::Tl208) / MBQ_PER_KG,
        );
    }
}
