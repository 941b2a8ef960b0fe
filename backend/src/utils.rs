use rocket::serde::json::{self, Json};
use crate::error::ApiError;

/// Ids that are not an `i32` can never match a row; they are treated as a
/// failed statement, not as a client error.
pub fn parse_voter_id(id: &str) -> Result<i32, ApiError> {
    id.trim()
        .parse::<i32>()
        .map_err(|e| ApiError::Internal(format!("invalid voter id {id:?}: {e}")))
}

/// Unwraps a JSON body guard, turning a missing or malformed body into a
/// server error.
pub fn json_body<T>(body: Result<Json<T>, json::Error<'_>>) -> Result<T, ApiError> {
    body.map(Json::into_inner)
        .map_err(|e| ApiError::Internal(format!("unreadable request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voter_id() {
        assert_eq!(parse_voter_id("42").unwrap(), 42);
        assert!(matches!(parse_voter_id("abc"), Err(ApiError::Internal(_))));
        assert!(matches!(parse_voter_id("99999999999"), Err(ApiError::Internal(_))));
    }
}
