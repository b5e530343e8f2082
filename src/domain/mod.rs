// Domain layer: request/result models and the generator port.

pub mod model;
pub mod ports;
