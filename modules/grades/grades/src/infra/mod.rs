//! Infrastructure layer for the grades module.

pub mod storage;

pub use storage::InMemoryGradeRepository;
