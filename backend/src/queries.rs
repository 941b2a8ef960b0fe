use sqlx::{PgPool, Postgres, QueryBuilder};
use shared::models::*;
use crate::auth::UserRecord;
use crate::error::ApiError;

const VOTER_SELECT: &str =
    "SELECT id, first_name, last_name, age, gender, epic_number,
            pc_number, pc_name, ac_number, ac_name, part_serial_number,
            part_number, part_name, COALESCE(considered, false) AS considered
     FROM voters";

fn filter_predicate(filter: VoterFilter) -> Option<&'static str> {
    match filter {
        VoterFilter::All => None,
        VoterFilter::LokSabha => Some(" AND pc_name IS NOT NULL"),
        VoterFilter::VidhanSabha => Some(" AND ac_name IS NOT NULL"),
        VoterFilter::Municipal => Some(" AND pc_name IS NULL AND ac_name IS NULL"),
    }
}

pub struct Queries;

impl Queries {
    pub async fn find_user(pool: &PgPool, username: &str) -> Result<Option<UserRecord>, ApiError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password, part_number, full_name
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn list_voters(pool: &PgPool, part_number: &str) -> Result<Vec<Voter>, ApiError> {
        Self::filter_voters(pool, part_number, VoterFilter::All).await
    }

    pub async fn filter_voters(
        pool: &PgPool,
        part_number: &str,
        filter: VoterFilter,
    ) -> Result<Vec<Voter>, ApiError> {
        let mut query = QueryBuilder::<Postgres>::new(VOTER_SELECT);
        query.push(" WHERE part_number = ").push_bind(part_number);
        if let Some(predicate) = filter_predicate(filter) {
            query.push(predicate);
        }
        query.push(" ORDER BY first_name, last_name NULLS LAST");

        let records = query
            .build_query_as::<VoterRecord>()
            .fetch_all(pool)
            .await?;

        Ok(records.into_iter().map(Voter::from).collect())
    }

    pub async fn list_parts(pool: &PgPool) -> Result<Vec<PartSummary>, ApiError> {
        let parts = sqlx::query_as::<_, PartSummary>(
            "SELECT part_number, part_name, COUNT(*) AS voter_count
             FROM voters
             GROUP BY part_number, part_name
             ORDER BY part_number",
        )
        .fetch_all(pool)
        .await?;

        Ok(parts)
    }

    pub async fn part_stats(pool: &PgPool, part_number: &str) -> Result<VoterStats, ApiError> {
        let stats = sqlx::query_as::<_, VoterStats>(
            "SELECT COUNT(*) AS total_voters,
                    COUNT(*) FILTER (WHERE gender = 'Male') AS male_count,
                    COUNT(*) FILTER (WHERE gender = 'Female') AS female_count,
                    COUNT(*) FILTER (WHERE considered = true) AS considered_votes,
                    0::BIGINT AS actual_won_votes
             FROM voters
             WHERE part_number = $1",
        )
        .bind(part_number)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }

    pub async fn set_considered(pool: &PgPool, voter_id: i32, considered: bool) -> Result<(), ApiError> {
        sqlx::query_scalar::<_, i32>("UPDATE voters SET considered = $1 WHERE id = $2 RETURNING id")
            .bind(considered)
            .bind(voter_id)
            .fetch_optional(pool)
            .await?
            .map(|_| ())
            .ok_or(ApiError::VoterNotFound)
    }

    pub async fn set_gender(pool: &PgPool, voter_id: i32, gender: Option<&str>) -> Result<(), ApiError> {
        sqlx::query_scalar::<_, i32>("UPDATE voters SET gender = $1 WHERE id = $2 RETURNING id")
            .bind(gender)
            .bind(voter_id)
            .fetch_optional(pool)
            .await?
            .map(|_| ())
            .ok_or(ApiError::VoterNotFound)
    }

    pub async fn upcoming_elections(pool: &PgPool, limit: i64) -> Result<Vec<Election>, ApiError> {
        let elections = sqlx::query_as::<_, Election>(
            "SELECT id, name, election_date AS date
             FROM upcoming_elections
             WHERE is_active = true AND election_date >= CURRENT_DATE
             ORDER BY election_date ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(elections)
    }

    pub async fn polling_station(pool: &PgPool, part_number: &str) -> Result<Option<PollingStation>, ApiError> {
        let station = sqlx::query_as::<_, PollingStation>(
            "SELECT part_number,
                    station_name AS polling_station_name,
                    station_address AS polling_station_address
             FROM polling_stations
             WHERE part_number = $1 AND is_active = true
             LIMIT 1",
        )
        .bind(part_number)
        .fetch_optional(pool)
        .await?;

        Ok(station)
    }

    pub async fn voting_place(pool: &PgPool, part_number: &str) -> Result<PollingStation, ApiError> {
        sqlx::query_as::<_, PollingStation>(
            "SELECT part_number, polling_station_name, polling_station_address
             FROM voting_places
             WHERE part_number = $1
             LIMIT 1",
        )
        .bind(part_number)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::VotingPlaceNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_predicates() {
        assert_eq!(filter_predicate(VoterFilter::All), None);
        assert_eq!(filter_predicate(VoterFilter::LokSabha), Some(" AND pc_name IS NOT NULL"));
        assert_eq!(filter_predicate(VoterFilter::VidhanSabha), Some(" AND ac_name IS NOT NULL"));
        assert_eq!(
            filter_predicate(VoterFilter::Municipal),
            Some(" AND pc_name IS NULL AND ac_name IS NULL")
        );
    }

    #[test]
    fn test_filter_query_binds_part_number() {
        let mut query = QueryBuilder::<Postgres>::new(VOTER_SELECT);
        query.push(" WHERE part_number = ").push_bind("101");
        query.push(filter_predicate(VoterFilter::Municipal).unwrap());
        query.push(" ORDER BY first_name, last_name NULLS LAST");

        let sql = query.sql();
        assert!(sql.contains("WHERE part_number = $1 AND pc_name IS NULL AND ac_name IS NULL"));
        assert!(sql.ends_with("ORDER BY first_name, last_name NULLS LAST"));
        assert!(!sql.contains("101"));
    }
}
