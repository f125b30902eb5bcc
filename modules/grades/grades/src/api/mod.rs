//! Transport adapters for the grades module.

pub mod grpc;
