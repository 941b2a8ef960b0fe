pub mod auth;
pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod queries;
pub mod routes;
pub mod utils;
pub use shared::{models::*, user_info::ClientInfo};

use rocket::{catchers, routes, Build, Rocket};
use crate::{
    catchers::{bad_request, internal_error, not_found},
    cors::CORS,
    routes::*,
};

/// Assembles the server around an already constructed state. Both the
/// deployment entry point and the tests go through here.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = CORS::new(state.config.allowed_origins.clone());

    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                all_options,
                login,
                list_voters,
                filter_voters,
                list_parts,
                part_stats,
                set_considered,
                set_gender,
                list_elections,
                polling_station,
                voting_place
            ],
        )
        .register(
            "/",
            catchers![bad_request, not_found, internal_error],
        )
}
