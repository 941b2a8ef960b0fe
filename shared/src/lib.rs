pub mod error;
pub mod models;
pub mod token;
pub mod validation;
pub mod user_info;

pub use error::{ErrorResponse, MessageResponse};
pub use models::*;
pub use token::SessionToken;
pub use validation::*;
pub use user_info::*;
