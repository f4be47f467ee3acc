//! `wayfarer-accounts` — user accounts and credential checks.
//!
//! This crate is decoupled from HTTP and storage.

pub mod user;

pub use user::{Credentials, LoginError, User, UserDraft, UserProfile, EMAIL_FIELD};
