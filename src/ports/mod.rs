/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the application core uses to
/// reach infrastructure.
pub mod outbound;
