//! Grades module.
//!
//! Keeps student grades in memory and serves them over gRPC
//! (`grades.v1.GradeService`).
//!
//! ## Layout
//!
//! - `domain` holds the service and repository trait
//! - `infra` holds the mutex-guarded in-memory repository
//! - `api::grpc` adapts the domain service to the generated tonic trait
//! - `server`, `config`, `logging` and `shutdown` are the process plumbing
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod server;
pub mod shutdown;

pub use config::GradesConfig;
pub use domain::{DomainError, GradesService};
pub use infra::InMemoryGradeRepository;
