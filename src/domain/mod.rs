// Domain layer: the VIN value, lookup results and the ports the lookup flows through.

pub mod model;
pub mod ports;
