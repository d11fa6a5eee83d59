//! The object types of our API, one module per type. Each module defines the
//! record struct (which is also what the store holds), its GraphQL resolvers
//! and its loaders.

pub(crate) mod maker;
pub(crate) mod owner;
pub(crate) mod place;
pub(crate) mod recipe;
