//! Credential hashing
//!
//! Turns plaintext passwords into self-contained bcrypt hashes and checks
//! candidates against them. Hashing is deliberately slow; callers on an async
//! executor should run it on a blocking thread.

mod hasher;

pub use hasher::{PasswordHasher, DEFAULT_COST, MAX_PASSWORD_BYTES};
