// Domain layer: the joke record and the provider port. No HTTP types here.

pub mod model;
pub mod ports;
