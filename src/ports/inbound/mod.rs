/// Inbound ports (Driving ports) - Coordinator interfaces
///
/// These ports define what the rendering layer (or the CLI standing in for
/// it) may ask of the running coordinator.
pub mod refresh_port;

pub use refresh_port::RefreshPort;
