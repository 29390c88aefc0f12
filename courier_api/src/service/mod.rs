pub const SERVICE_NAME: &str = "Courier Logistics Service";

pub mod health;
pub mod root;
pub mod routes;
