use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Voter not found")]
    VoterNotFound,
    #[error("Voting place not found")]
    VotingPlaceNotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password verification failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidCredentials => Status::Unauthorized,
            ApiError::VoterNotFound | ApiError::VotingPlaceNotFound => Status::NotFound,
            ApiError::Database(_) | ApiError::PasswordHash(_) | ApiError::Internal(_) => {
                Status::InternalServerError
            }
        }
    }

    /// Client errors carry their own message. Server errors are reduced to a
    /// generic one; the detail only goes to the log.
    pub fn public_message(&self) -> String {
        if self.status() == Status::InternalServerError {
            "Server error".into()
        } else {
            self.to_string()
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        if status == Status::InternalServerError {
            tracing::error!("{} {} failed: {}", req.method(), req.uri(), self);
        }

        rocket::Response::build_from(Json(ErrorResponse::new(self.public_message())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
