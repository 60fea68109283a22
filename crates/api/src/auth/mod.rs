//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and minting for tests/tooling).

pub mod jwt;
