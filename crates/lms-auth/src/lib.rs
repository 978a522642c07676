//! Credential helpers: password hashing and access tokens
//!
//! These are standalone capabilities; no route is wired to them yet.

#![allow(clippy::must_use_candidate)]

mod error;
mod password;
mod token;

pub use error::{AuthError, PasswordError};
pub use password::{hash_password, verify_password};
pub use token::{TokenClaims, TokenService};
