//! Field resolvers for the query graph and the command surface.
//!
//! Errors returned here are field scoped: the surrounding execution engine
//! records them per field in its `{ data, errors }` envelope and keeps
//! resolving siblings, so nothing in this module can fail a whole request on
//! its own.

pub mod mutation;
pub mod query;
