//! Domain layer of the family tree relay.
//!
//! `gateway` owns the conversation with the upstream family members API, `family_member`
//! declares the operations relayed through it, and `family_members` describes the upstream
//! data shapes. `theme` models the visitor's colour preference.

pub use gateway::family_tree::{FamilyTreeClient, UpstreamResponse};

pub mod error;
pub mod family_member;
pub mod family_members;
pub mod theme;

pub mod gateway;
