/// Application layer - Use cases, DTOs and the snapshot store
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod store;
pub mod use_cases;
