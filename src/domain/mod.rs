// Domain layer: the deal model and ports (interfaces). No external systems here.

pub mod model;
pub mod ports;
