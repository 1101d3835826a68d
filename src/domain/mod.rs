// Domain layer: plan model and ports. Filesystem access lives in core.

pub mod model;
pub mod ports;
