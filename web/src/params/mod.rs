//! This module holds typed parameters for various endpoint inputs.
//!
//! Query strings and request bodies are deserialized into these types before reaching a
//! controller, which then hands the domain layer its own types. Paging values are kept as
//! strings on purpose: they are forwarded to the upstream API unparsed.

pub(crate) mod family_member;
pub(crate) mod theme;
