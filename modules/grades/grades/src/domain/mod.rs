//! Domain layer for the grades module.

pub mod error;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use repo::GradeRepository;
pub use service::GradesService;
