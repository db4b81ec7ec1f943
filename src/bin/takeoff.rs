//! Command-line takeoff report for a single DXF drawing.

use anyhow::{bail, Context, Result};
use dxf_takeoff::Drawing;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => bail!("usage: takeoff <drawing.dxf>"),
    };

    let drawing =
        Drawing::load_file(&path).with_context(|| format!("failed to load {path}"))?;

    for note in &drawing.notifications {
        eprintln!("{note}");
    }

    let metrics = drawing.measure();

    println!("Quantity of entities in the drawing:");
    for (kind, count) in metrics.census.iter() {
        println!("{kind}: {count}");
    }
    println!(
        "Total area of all entities: {:.2} square units",
        metrics.total_area
    );
    println!("Object thickness: {} units", metrics.thickness);
    println!("Object width: {} units", metrics.width);
    println!("Machine cut length: {} meters", metrics.cut_length);
    println!("Estimated weight: {} kg", metrics.weight);

    Ok(())
}
