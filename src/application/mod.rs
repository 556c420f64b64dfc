/// Application layer - Factories and DTOs
///
/// This layer wires domain derivation to the resolver and formatter
/// adapters through the outbound ports.
pub mod dto;
pub mod factories;
