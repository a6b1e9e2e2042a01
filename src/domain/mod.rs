// Domain layer: shapes, run sections and the traits practices plug into.

pub mod model;
pub mod ports;
