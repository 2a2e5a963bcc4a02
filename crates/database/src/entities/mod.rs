//! Entity definitions for the identity store.

pub mod admin;
pub mod roster;

pub use admin::{Admin, NewAdmin, UpdateAdmin};
pub use roster::{NewRosterMember, RosterMember, UpdateRosterMember};
