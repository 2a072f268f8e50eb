// Domain layer: models and ports (capability contracts). Concrete implementations live in adapters.

pub mod model;
pub mod ports;
