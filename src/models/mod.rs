pub mod curve;
pub mod settings;
