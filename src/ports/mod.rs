/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the collaborators that build the
/// nested parts of a component record and render it.
pub mod outbound;
