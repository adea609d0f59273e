//! Общие типы сценариев

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
