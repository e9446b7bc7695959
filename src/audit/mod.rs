pub mod orchestrator;
pub mod score;

pub use orchestrator::AuditEngine;
