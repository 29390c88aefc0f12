pub mod kilometers;
pub mod kmh;
