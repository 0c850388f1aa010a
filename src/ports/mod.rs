/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - what the
/// rendering layer and CLI call) and outbound ports (driven ports - the
/// REST API, push channel, event source and output sinks).
pub mod inbound;
pub mod outbound;
