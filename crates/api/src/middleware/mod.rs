//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the admin identity from a JWT Bearer token.
//! - [`auth::MaybeAuthUser`] -- Optional identity for public reads.
//! - [`rbac::RequireAdmin`] -- Requires an admin-scoped role.

pub mod auth;
pub mod rbac;
