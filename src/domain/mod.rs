// Domain layer: course/issuance models and the ports (traits) the core is wired through.

pub mod model;
pub mod ports;
