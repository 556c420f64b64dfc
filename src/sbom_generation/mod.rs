/// Domain layer - npm component normalization
///
/// Pure business logic: value objects, classification policies and the
/// default resolvers for nested component structures.
pub mod domain;
pub mod policies;
pub mod services;
