//! Response types that don't come straight from the domain layer.

pub(crate) mod passthrough;
