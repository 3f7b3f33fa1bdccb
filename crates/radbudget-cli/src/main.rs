//! Radbudget command-line interface.
//!
//! Background budget reports for the reference detector:
//! ```sh
//! radbudget shielding
//! radbudget field-cage
//! radbudget sensors --pmts 60
//! radbudget materials
//! ```

mod config;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::info;

use radbudget_core::activity::{
    ambient_flux_activity, self_shielded_activity, transmitted_activity, GammaFlux,
};
use radbudget_core::sensors::{sensor_population, DiceBoard, Pmt, SiPm};
use radbudget_core::{ActivityRecord, ShieldChain};
use radbudget_materials::catalogue;

#[derive(Parser)]
#[command(name = "radbudget")]
#[command(about = "Radioactive background budgeting for the reference detector")]
#[command(version)]
struct Cli {
    /// TOML file overriding the built-in detector geometry.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit records as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// Also write the table to a CSV file.
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ambient flux and vessel wall activities through the nested shields.
    Shielding,
    /// Field-cage budget: insulator barrel, electrode ladder, resistors.
    FieldCage,
    /// Photosensor budget for the energy and tracking planes.
    Sensors {
        /// Number of photomultipliers on the energy plane.
        #[arg(long, default_value_t = 60)]
        pmts: u32,
    },
    /// Display the material catalogue.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let geometry = config::load_geometry(cli.config.as_deref())?;

    let (title, records) = match cli.command {
        Commands::Shielding => ("Shielding budget", shielding_records(&geometry)?),
        Commands::FieldCage => ("Field-cage budget", field_cage_records(&geometry)?),
        Commands::Sensors { pmts } => ("Sensor budget", sensor_records(&geometry, pmts)?),
        Commands::Materials => {
            report::print_materials(&catalogue::all());
            return Ok(());
        }
    };

    if cli.json {
        report::print_json(&records)?;
    } else {
        report::print_table(title, &records);
    }
    if let Some(path) = &cli.csv {
        report::write_csv(title, &records, path)?;
    }
    Ok(())
}

/// The laboratory flux arriving at the envelope and attenuated through
/// the castle and the copper shield, followed by the wall activities of
/// the structural components seen from the gas.
fn shielding_records(
    geometry: &radbudget_core::DetectorGeometry,
) -> anyhow::Result<Vec<ActivityRecord>> {
    let envelope = geometry.envelope()?;
    let castle = Arc::new(geometry.lead_castle()?);
    let copper = Arc::new(geometry.copper_shield()?);
    let vessel = geometry.pressure_vessel()?;

    info!(
        "geometry: vessel R={:.0} mm, castle t={:.0} mm, copper t={:.0} mm",
        vessel.radius(),
        castle.body_thickness(),
        copper.body_thickness()
    );

    let mut records = Vec::new();

    // External gammas, attenuated in physical traversal order.
    let hall = ambient_flux_activity("hall flux", &envelope, &GammaFlux::default());
    let chain = ShieldChain::new(vec![Arc::clone(&castle), Arc::clone(&copper)]);
    records.extend(chain.propagate(&hall).iter().map(ActivityRecord::from));

    // Wall activities of each structural layer, pushed through whatever
    // still shields them.
    let castle_ss = self_shielded_activity("lead castle (self-shielded)", &castle);
    records.push(ActivityRecord::from(&transmitted_activity(
        "lead castle after copper shield",
        &copper,
        &castle_ss,
    )));

    let vessel_ss = self_shielded_activity("pressure vessel (self-shielded)", &vessel);
    records.push(ActivityRecord::from(&transmitted_activity(
        "pressure vessel after copper shield",
        &copper,
        &vessel_ss,
    )));

    let copper_ss = self_shielded_activity("copper shield (self-shielded)", &copper);
    records.push(ActivityRecord::from(&copper_ss));

    Ok(records)
}

fn field_cage_records(
    geometry: &radbudget_core::DetectorGeometry,
) -> anyhow::Result<Vec<ActivityRecord>> {
    let cage = geometry.field_cage()?;
    info!("field cage: {} electrodes", cage.electrode_count());
    Ok(vec![
        cage.electrode_activity(),
        cage.resistor_activity(),
        cage.body_activity(),
    ])
}

fn sensor_records(
    geometry: &radbudget_core::DetectorGeometry,
    pmts: u32,
) -> anyhow::Result<Vec<ActivityRecord>> {
    let vessel = geometry.pressure_vessel()?;

    let pmt = Pmt::default();
    let sipm = SiPm::default();
    let board = DiceBoard::default();

    // The tracking plane tiles one head face with dice boards.
    let boards = board.boards_per_plane(vessel.head_face_surface());
    let sipms = boards * board.sipm_count as f64;
    info!("tracking plane: {boards:.0} boards, {sipms:.0} SiPMs");

    Ok(vec![
        sensor_population(format!("energy plane PMTs ({pmts}x {})", pmt.name), f64::from(pmts), pmt.activity),
        sensor_population(format!("tracking plane SiPMs ({})", sipm.name), sipms, sipm.activity),
        sensor_population(format!("tracking plane boards ({})", board.name), boards, board.activity),
    ])
}
