//! Domain entities representing core business objects.

pub mod batch;
pub mod document;
pub mod measurement;
pub mod spirit;
pub mod token;
pub mod user;
pub mod vessel;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use batch::{Batch, BatchFields};
pub use document::Document;
pub use measurement::{Measurement, MeasurementFields};
pub use spirit::{Spirit, SpiritFields};
pub use token::{Claims, TOKEN_TTL_DAYS};
pub use user::{User, UserFields};
pub use vessel::{Vessel, VesselFields};
