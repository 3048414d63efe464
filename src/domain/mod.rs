// Domain layer: scan records, reports and the ports the engine drives.

pub mod model;
pub mod ports;
