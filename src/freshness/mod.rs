/// Freshness domain - value objects, pure services and policies for
/// keeping dashboard data current. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
