pub mod backend;
pub mod configuration;
pub mod domain;
pub mod subscription;
pub mod telemetry;
