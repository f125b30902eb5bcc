//! gRPC adapter.

pub mod server;

pub use server::GradeServiceImpl;
