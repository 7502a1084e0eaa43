//! Clients for external services this application talks to.

pub mod family_tree;
