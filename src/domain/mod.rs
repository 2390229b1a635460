// Domain layer: value types and the speller port. No I/O here.

pub mod model;
pub mod ports;
