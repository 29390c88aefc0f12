use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use courier_estimator::route::waypoint::Waypoint;

pub fn read_waypoints(path: &Path) -> Result<Vec<Waypoint>, anyhow::Error> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let waypoints = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a JSON array of waypoints", path.display()))?;

    Ok(waypoints)
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, serde_json::to_string_pretty(value)?)?;

    Ok(())
}
