// Domain layer: scoring vocabulary and ports. No external dependencies beyond serde.

pub mod model;
pub mod ports;
