// Domain layer: horses, the track and the ports the race is driven through.

pub mod model;
pub mod ports;
