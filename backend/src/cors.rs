use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;

/// Adds CORS headers to every response. With no configured origins any
/// origin is allowed, without credentials.
pub struct CORS {
    allowed_origins: Vec<String>,
}

impl CORS {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    fn allowed_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        let origin = origin?;
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == origin)
            .then_some(origin)
    }
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        if self.allowed_origins.is_empty() {
            res.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        } else if let Some(origin) = self.allowed_origin(req.headers().get_one("Origin")) {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
            res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
            res.set_header(Header::new("Vary", "Origin"));
        } else {
            return;
        }

        res.set_header(Header::new("Access-Control-Allow-Methods", "GET, POST, PUT, OPTIONS"));
        res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type, Authorization"));
        res.set_header(Header::new("Access-Control-Max-Age", "86400"));
    }
}
