//! Prints room statistics of an editor floor plan.
//!
//! ```text
//! cargo run --example plan_summary -- plan.json               # after state
//! cargo run --example plan_summary -- plan.json --before      # before state
//! cargo run --example plan_summary -- plan.json --config cfg.json
//! ```
//!
//! `cfg.json` holds `MappingParams`, e.g.
//! `{"stats": {"tolerance": 2.0}, "door_fallback": "disabled"}`.

use std::path::PathBuf;

use plano::format::{format_es, format_es_unit};
use plano::operations::mapping::{MapEditorRooms, MappingParams};
use plano::operations::stats::PlanSummary;
use plano::plan::FloorPlanData;
use plano::{PlanoError, Result};

struct Args {
    plan: PathBuf,
    config: Option<PathBuf>,
    before: bool,
}

fn parse_args() -> Result<Args> {
    let mut plan = None;
    let mut config = None;
    let mut before = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--before" => before = true,
            "--config" => {
                config = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    PlanoError::InvalidArgument("--config needs a path".to_owned())
                })?);
            }
            _ => plan = Some(PathBuf::from(arg)),
        }
    }
    let plan = plan.ok_or_else(|| {
        PlanoError::InvalidArgument("usage: plan_summary <plan.json> [--before]".to_owned())
    })?;
    Ok(Args {
        plan,
        config,
        before,
    })
}

fn read(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| PlanoError::InvalidArgument(format!("{}: {e}", path.display())))
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for plano.
    // Override with RUST_LOG env var (e.g. RUST_LOG=plano=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("plano=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args()?;
    let data = FloorPlanData::from_json(&read(&args.plan)?)?;
    let params: MappingParams = match &args.config {
        Some(path) => serde_json::from_str(&read(path)?)?,
        None => MappingParams::default(),
    };

    let summary = PlanSummary::new(&data).with_params(params.stats).execute()?;
    println!(
        "{:<24} {:>10} {:>10} {:>10} {:>10}",
        "Estancia", "Área", "Paredes", "Pilares", "Total"
    );
    for room in &summary.rooms {
        println!(
            "{:<24} {:>10} {:>10} {:>10} {:>10}",
            room.name,
            format_es_unit(room.stats.area, "m²"),
            format_es_unit(room.stats.wall_perimeter, "m"),
            format_es_unit(room.stats.column_perimeter, "m"),
            format_es_unit(room.stats.total_perimeter, "m"),
        );
    }
    println!(
        "{:<24} {:>10} {:>10} {:>10} {:>10}",
        "Total",
        format_es_unit(summary.total_area, "m²"),
        format_es_unit(summary.total_wall_perimeter, "m"),
        format_es_unit(summary.total_column_perimeter, "m"),
        format_es_unit(summary.total_perimeter, "m"),
    );
    println!(
        "Muros: {} m · Superficie de pared: {} m² · Puertas: {} · Ventanas: {}",
        format_es(summary.wall_length),
        format_es(summary.wall_surface),
        summary.door_count,
        summary.window_count,
    );
    if !summary.low_confidence_rooms.is_empty() {
        println!("Sin muros asociados: {}", summary.low_confidence_rooms.join(", "));
    }

    let rooms = MapEditorRooms::new(&data, args.before)
        .with_params(params)
        .execute()?;
    println!();
    for room in &rooms {
        println!(
            "{:<24} {:<10} puertas {}{} ventanas {} suelo {:?} paredes {:?}",
            room.name,
            room.room_type,
            room.doors,
            if room.inferred_door { "*" } else { "" },
            room.windows,
            room.materials.floor,
            room.materials.walls,
        );
    }
    Ok(())
}
