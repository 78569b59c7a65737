//! Opens the plant store at its default location, runs the daily refresh,
//! and prints today's watering status.

use anyhow::Result;
use sprout::PlantStore;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let store = PlantStore::open_default()?;
    let cleared = store.refresh_daily_state()?;
    if cleared > 0 {
        log::info!("cleared {cleared} stale checkmarks from earlier days");
    }

    let progress = store.progress();
    println!("{}", progress.status_line);
    println!("{} / {} watered today", progress.completed, progress.total);

    for plant in store.plants() {
        let mark = if plant.is_watered_today() { "x" } else { " " };
        println!(
            "[{mark}] {} ({}, {}, {}, {})",
            plant.name,
            plant.room.label(),
            plant.light.label(),
            plant.watering_days.label(),
            plant.water.label(),
        );
    }

    Ok(())
}
