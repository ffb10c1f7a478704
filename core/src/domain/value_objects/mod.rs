//! Value objects: immutable types defined by their value.

pub mod credential;

pub use credential::HashedCredential;
