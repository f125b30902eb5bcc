//! Grades SDK
//!
//! This crate provides everything needed to consume the grades service:
//! - Client trait (`GradesClient`)
//! - Models (`Grade`, `GradeKey`, `GradeFields`) and reply types
//! - Error type (`GradesError`)
//! - gRPC client (`GradesGrpcClient`) and transport configuration
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use grades_sdk::{Grade, GradesClient, GradesGrpcClient};
//!
//! let client = GradesGrpcClient::connect("http://127.0.0.1:50052").await?;
//! let reply = client.add_grade(Grade::new("123", "CIC0001", 2025, 2, 9.5)).await?;
//! if !reply.success {
//!     eprintln!("{}", reply.message);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
pub mod api;
pub mod error;
pub mod models;
pub use api::GradesClient;
pub use error::GradesError;
pub use models::{AverageReply, Grade, GradeFields, GradeKey, GradeReply, StatusReply};

// === GRPC CLIENT ===
mod client;
mod convert;
pub mod transport;
pub use client::GradesGrpcClient;
pub use transport::GrpcClientConfig;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `GradeService`
pub mod proto {
    tonic::include_proto!("grades.v1");
}

// Re-export proto types needed by server
pub use proto::grade_service_server::{GradeService, GradeServiceServer};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "grades.v1.GradeService";
