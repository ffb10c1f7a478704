//! Entity store contracts and the in-memory store.

pub mod entity;
pub mod memory;
pub mod user;

#[cfg(test)]
mod tests;

pub use entity::EntityRepository;
pub use memory::InMemoryStore;
pub use user::UserRepository;
