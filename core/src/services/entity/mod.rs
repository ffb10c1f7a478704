//! Generic CRUD service over a single entity collection

mod service;


pub use service::EntityService;
