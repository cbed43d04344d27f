mod error;
mod status;
mod user;

pub mod dtos {
    pub use crate::user::dtos::*;
}

pub use crate::error::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
