// Domain layer: tracking models and ports (interfaces). No HTTP or config code lives here.

pub mod model;
pub mod ports;
