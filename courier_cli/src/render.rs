use comfy_table::{Table, presets::UTF8_FULL};
use courier_estimator::{
    delivery_time::DeliveryTimeResult, demand::DemandResult, route::RouteResult,
    shipping_cost::CostResult,
};

fn key_value_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);

    for (key, value) in rows {
        table.add_row(vec![key.to_owned(), value]);
    }

    table
}

pub fn delivery_time_table(result: &DeliveryTimeResult) -> Table {
    let factors = &result.factors;

    key_value_table(vec![
        ("Duration", format!("{}h {:02}m", result.hours, result.minutes)),
        ("Confidence", result.confidence.value().to_string()),
        ("Distance (km)", factors.distance_km.to_string()),
        ("Vehicle", factors.vehicle_type.to_string()),
        ("Base speed (km/h)", factors.base_speed_kmh.to_string()),
        ("Adjusted speed (km/h)", factors.adjusted_speed_kmh.to_string()),
        (
            "Traffic",
            format!("{} (x{})", factors.traffic_condition, factors.traffic_multiplier),
        ),
        (
            "Weather",
            format!("{} (x{})", factors.weather, factors.weather_multiplier),
        ),
    ])
}

pub fn cost_table(result: &CostResult) -> Table {
    let breakdown = &result.breakdown;

    key_value_table(vec![
        ("Distance cost", breakdown.distance_cost.to_string()),
        ("Volume cost", breakdown.volume_cost.to_string()),
        ("Weight cost", breakdown.weight_cost.to_string()),
        ("Subtotal", breakdown.subtotal.to_string()),
        ("Remote surcharge", breakdown.remote_surcharge.to_string()),
        ("Total", result.total_cost.to_string()),
        ("Confidence", result.confidence.value().to_string()),
    ])
}

pub fn demand_table(result: &DemandResult) -> Table {
    let factors = &result.factors;

    key_value_table(vec![
        ("Location", factors.location.clone()),
        ("Demand", result.demand.to_string()),
        ("Trend", format!("{:?}", result.trend).to_lowercase()),
        ("Day of week", factors.day_of_week.to_string()),
        ("Multiplier", factors.multiplier.to_string()),
        ("Confidence", result.confidence.value().to_string()),
    ])
}

pub fn route_table(result: &RouteResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Name", "Lat", "Lng"]);

    for (index, waypoint) in result.route.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            waypoint.name.clone().unwrap_or_default(),
            waypoint.lat.to_string(),
            waypoint.lng.to_string(),
        ]);
    }

    table.add_row(vec![
        String::new(),
        format!(
            "{} km, {} h, {}% saved",
            result.total_distance_km, result.estimated_time_hours, result.savings_percentage
        ),
        String::new(),
        String::new(),
    ]);

    table
}
