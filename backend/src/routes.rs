use rocket::{State, get, post, put, http::Status, serde::json::{self, Json}};
use tracing::{error, info, instrument};
use sqlx::PgPool;
use shared::{models::*, user_info::ClientInfo, ErrorResponse, MessageResponse};
use crate::{
    auth,
    config::AppConfig,
    error::ApiError,
    queries::Queries,
    utils::{json_body, parse_voter_id},
};

type MessageError = (Status, Json<MessageResponse>);

fn message_error(message: &str) -> MessageError {
    (Status::InternalServerError, Json(MessageResponse::new(message)))
}

pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self { db: pool, config }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

/// A missing or unreadable body is a server error, like any other failure
/// before the credentials are checked.
#[instrument(skip(state, request, client), fields(client = %client.client_fingerprint))]
#[post("/login", data = "<request>")]
pub async fn login(
    state: &State<AppState>,
    request: Result<Json<LoginRequest>, json::Error<'_>>,
    client: ClientInfo,
) -> Result<Json<LoginResponse>, MessageError> {
    let request = json_body(request).map_err(|e| {
        error!("Login error: {}", e);
        message_error("Login server error")
    })?;

    info!("🔐 Login attempt: {} from {}", request.username, client.ip);

    match auth::login(&state.db, &request).await {
        Ok(response) => {
            info!(
                "✅ {} logged in (part {})",
                response.user.username, response.user.part_number
            );
            Ok(Json(response))
        }
        Err(ApiError::InvalidCredentials) => {
            info!("❌ Login failed for {}", request.username);
            Err((
                Status::Unauthorized,
                Json(MessageResponse::new(ApiError::InvalidCredentials.to_string())),
            ))
        }
        Err(e) => {
            error!("Login error: {}", e);
            Err(message_error("Login server error"))
        }
    }
}

#[get("/voters/<part_number>")]
pub async fn list_voters(
    state: &State<AppState>,
    part_number: &str,
) -> Result<Json<Vec<Voter>>, MessageError> {
    Queries::list_voters(&state.db, part_number)
        .await
        .map(|voters| {
            info!("📊 Found {} voters for {}", voters.len(), part_number);
            Json(voters)
        })
        .map_err(|e| {
            error!("Voter fetch error: {}", e);
            message_error("Error fetching voters")
        })
}

/// Failures answer with an empty list rather than an error object.
#[get("/voters/<part_number>/filter/<filter>")]
pub async fn filter_voters(
    state: &State<AppState>,
    part_number: &str,
    filter: &str,
) -> (Status, Json<Vec<Voter>>) {
    match Queries::filter_voters(&state.db, part_number, VoterFilter::from_tag(filter)).await {
        Ok(voters) => {
            info!("📊 Filtered {} voters ({}) for {}", voters.len(), filter, part_number);
            (Status::Ok, Json(voters))
        }
        Err(e) => {
            error!("Filter error: {}", e);
            (Status::InternalServerError, Json(Vec::new()))
        }
    }
}

#[get("/parts")]
pub async fn list_parts(state: &State<AppState>) -> Result<Json<Vec<PartSummary>>, MessageError> {
    Queries::list_parts(&state.db)
        .await
        .map(|parts| {
            info!("📊 Parts loaded: {}", parts.len());
            Json(parts)
        })
        .map_err(|e| {
            error!("Parts fetch error: {}", e);
            message_error("Error fetching parts")
        })
}

/// Failures answer with the usual shape, every counter zero.
#[get("/stats/<part_number>")]
pub async fn part_stats(state: &State<AppState>, part_number: &str) -> (Status, Json<VoterStats>) {
    match Queries::part_stats(&state.db, part_number).await {
        Ok(stats) => {
            info!("📈 Stats for {}: {:?}", part_number, stats);
            (Status::Ok, Json(stats))
        }
        Err(e) => {
            error!("Stats error: {}", e);
            (Status::InternalServerError, Json(VoterStats::default()))
        }
    }
}

#[instrument(skip(state, update), fields(voter_id = %id))]
#[put("/voters/<id>/considered", data = "<update>")]
pub async fn set_considered(
    state: &State<AppState>,
    id: &str,
    update: Result<Json<ConsideredUpdate>, json::Error<'_>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_voter_id(id)?;
    let update = json_body(update)?;
    Queries::set_considered(&state.db, id, update.considered).await?;
    info!("✅ Voter {} considered = {}", id, update.considered);
    Ok(Json(SuccessResponse::ok()))
}

#[instrument(skip(state, update), fields(voter_id = %id))]
#[put("/voters/<id>", data = "<update>")]
pub async fn set_gender(
    state: &State<AppState>,
    id: &str,
    update: Result<Json<GenderUpdate>, json::Error<'_>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_voter_id(id)?;
    let update = json_body(update)?;
    Queries::set_gender(&state.db, id, update.gender.as_deref()).await?;
    info!("✅ Voter {} gender = {:?}", id, update.gender);
    Ok(Json(SuccessResponse::ok()))
}

#[get("/elections")]
pub async fn list_elections(state: &State<AppState>) -> (Status, Json<Vec<Election>>) {
    match Queries::upcoming_elections(&state.db, state.config.elections_limit).await {
        Ok(elections) => (Status::Ok, Json(elections)),
        Err(e) => {
            error!("Elections fetch error: {}", e);
            (Status::InternalServerError, Json(Vec::new()))
        }
    }
}

/// A part without an active station is answered with `null`, not 404.
#[get("/polling-station/<part_number>")]
pub async fn polling_station(
    state: &State<AppState>,
    part_number: &str,
) -> (Status, Json<Option<PollingStation>>) {
    match Queries::polling_station(&state.db, part_number).await {
        Ok(station) => (Status::Ok, Json(station)),
        Err(e) => {
            error!("Polling station error: {}", e);
            (Status::InternalServerError, Json(None))
        }
    }
}

#[get("/voting-place/<part_number>")]
pub async fn voting_place(
    state: &State<AppState>,
    part_number: &str,
) -> Result<Json<PollingStation>, (Status, Json<ErrorResponse>)> {
    Queries::voting_place(&state.db, part_number)
        .await
        .map(Json)
        .map_err(|e| match e {
            ApiError::VotingPlaceNotFound => (Status::NotFound, Json(ErrorResponse::new(e.to_string()))),
            e => {
                error!("Voting place error: {}", e);
                (Status::InternalServerError, Json(ErrorResponse::new("Database error")))
            }
        })
}
