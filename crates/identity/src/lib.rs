//! Chalkboard identity crate.
//!
//! The authentication and identity-management core shared by the three
//! role surfaces: credential hashing ([`password`]), session tokens
//! ([`token`]), the store abstraction ([`store`]) and the generic
//! registration/login/directory services ([`services`]).

pub mod password;
pub mod services;
pub mod store;
pub mod token;

pub use password::{hash_password, verify_password};
pub use services::{AuthService, DirectoryService, RegistrationService};
pub use store::{
    IdentityPatch, IdentityRecord, IdentityStore, RegistrationInput, RosterRecord, RosterStore,
};
pub use token::{Claims, TokenIssuer};

pub use chalkboard_database::{IdentityError, IdentityKind, IdentityResult};
