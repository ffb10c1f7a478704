pub mod auth;
pub mod entities;
pub mod response;

pub use auth::{CreateUserRequest, LoginRequest, UpdateUserRequest, UserView};
pub use entities::{
    BatchRequest, EntityRequest, MeasurementRequest, SpiritRequest, VesselRequest,
};
pub use response::{ApiResponse, ResponseData};
