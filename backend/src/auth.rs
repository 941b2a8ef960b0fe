use std::sync::OnceLock;
use sqlx::PgPool;
use tracing::debug;
use shared::{
    models::{LoginRequest, LoginResponse, SessionUser},
    token::SessionToken,
    validation::{normalize_password, normalize_username},
};
use crate::{error::ApiError, queries::Queries};

/// A row of `users`. `password` holds the bcrypt hash, so this type is never
/// serialized or logged.
#[derive(sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub part_number: String,
    pub full_name: Option<String>,
}

impl UserRecord {
    fn into_session_user(self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username,
            part_number: self.part_number,
            full_name: self.full_name,
        }
    }
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(password, password_hash)?)
}

/// Hash checked in place of a missing user's, so unknown usernames cost the
/// same bcrypt work as wrong passwords.
fn dummy_hash() -> Result<&'static str, ApiError> {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = bcrypt::hash("voter-roll-unknown-user", bcrypt::DEFAULT_COST)?;
    Ok(DUMMY_HASH.get_or_init(|| hash))
}

/// Verifies `password` against the stored hash, or against a dummy hash when
/// there is no user. Without a user the answer is always `false`.
pub fn check_password(password: &str, password_hash: Option<&str>) -> Result<bool, ApiError> {
    match password_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            verify_password(password, dummy_hash()?)?;
            Ok(false)
        }
    }
}

/// Checks the credentials and issues a session marker.
///
/// Unknown usernames and wrong passwords both come back as
/// [`ApiError::InvalidCredentials`] so callers cannot tell them apart.
pub async fn login(pool: &PgPool, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let username = normalize_username(&request.username);

    let user = Queries::find_user(pool, &username).await?;

    let password = normalize_password(&request.password).to_owned();
    let password_hash = user.as_ref().map(|user| user.password.clone());
    let valid = tokio::task::spawn_blocking(move || check_password(&password, password_hash.as_deref()))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let user = match user {
        Some(user) if valid => user,
        Some(_) => {
            debug!("Login rejected: wrong password for {}", username);
            return Err(ApiError::InvalidCredentials);
        }
        None => {
            debug!("Login rejected: {} not found", username);
            return Err(ApiError::InvalidCredentials);
        }
    };

    let token = SessionToken::issue(user.id);
    Ok(LoginResponse {
        user: user.into_session_user(),
        token: token.to_string(),
    })
}
