/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the application core uses
/// to reach the SBOM input, the Dependency-Track API and the console.
pub mod outbound;
