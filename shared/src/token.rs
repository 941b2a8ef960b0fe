use std::fmt;
use time::OffsetDateTime;

const TOKEN_PREFIX: &str = "jwt";

/// Session marker handed out on login: `jwt-<user id>-<unix millis>`.
///
/// Despite the prefix this is not a JWT. It is unsigned, never verified and
/// never expires; it only identifies one login event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: i32,
    pub issued_at_millis: i64,
}

impl SessionToken {
    pub fn issue(user_id: i32) -> Self {
        Self::issued_at(user_id, OffsetDateTime::now_utc())
    }

    pub fn issued_at(user_id: i32, at: OffsetDateTime) -> Self {
        let millis = at.unix_timestamp_nanos() / 1_000_000;
        Self {
            user_id,
            issued_at_millis: millis as i64,
        }
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", TOKEN_PREFIX, self.user_id, self.issued_at_millis)
    }
}
