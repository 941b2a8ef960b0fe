use serde::{Serialize, Deserialize};
use std::fmt;
use time::Date;

/// Which electoral roll a voter row belongs to. Never stored; always
/// derived from the constituency and part names of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionType {
    #[serde(rename = "Lok Sabha")]
    LokSabha,
    #[serde(rename = "Vidhan Sabha")]
    VidhanSabha,
    #[serde(rename = "Municipal")]
    Municipal,
}

impl ElectionType {
    /// Assembly name wins over parliamentary name, which wins over part
    /// name. A row with none of the three falls back to Lok Sabha.
    pub fn derive(ac_name: Option<&str>, pc_name: Option<&str>, part_name: Option<&str>) -> Self {
        match (ac_name, pc_name, part_name) {
            (Some(_), _, _) => ElectionType::VidhanSabha,
            (None, Some(_), _) => ElectionType::LokSabha,
            (None, None, Some(_)) => ElectionType::Municipal,
            (None, None, None) => ElectionType::LokSabha,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ElectionType::LokSabha => "Lok Sabha",
            ElectionType::VidhanSabha => "Vidhan Sabha",
            ElectionType::Municipal => "Municipal",
        }
    }
}

impl fmt::Display for ElectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A voter row exactly as it sits in the `voters` table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct VoterRecord {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub epic_number: Option<String>,
    pub pc_number: Option<i32>,
    pub pc_name: Option<String>,
    pub ac_number: Option<i32>,
    pub ac_name: Option<String>,
    pub part_serial_number: Option<i32>,
    pub part_number: String,
    pub part_name: Option<String>,
    pub considered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voter {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub epic_number: Option<String>,
    pub pc_number: Option<i32>,
    pub pc_name: Option<String>,
    pub ac_number: Option<i32>,
    pub ac_name: Option<String>,
    pub part_serial_number: Option<i32>,
    pub part_number: String,
    pub part_name: Option<String>,
    pub election_type: ElectionType,
    pub considered: bool,
}

impl From<VoterRecord> for Voter {
    fn from(record: VoterRecord) -> Self {
        let election_type = ElectionType::derive(
            record.ac_name.as_deref(),
            record.pc_name.as_deref(),
            record.part_name.as_deref(),
        );

        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            age: record.age,
            gender: record.gender,
            epic_number: record.epic_number,
            pc_number: record.pc_number,
            pc_name: record.pc_name,
            ac_number: record.ac_number,
            ac_name: record.ac_name,
            part_serial_number: record.part_serial_number,
            part_number: record.part_number,
            part_name: record.part_name,
            election_type,
            considered: record.considered,
        }
    }
}

/// Roll filter selected by the last path segment of the filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoterFilter {
    #[default]
    All,
    LokSabha,
    VidhanSabha,
    Municipal,
}

impl VoterFilter {
    /// Unknown tags are not an error: they select every voter, same as `all`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "lok_sabha" => VoterFilter::LokSabha,
            "vidhan_sabha" => VoterFilter::VidhanSabha,
            "municipal" => VoterFilter::Municipal,
            _ => VoterFilter::All,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct PartSummary {
    pub part_number: String,
    pub part_name: Option<String>,
    pub voter_count: i64,
}

/// Per-part counters. `actual_won_votes` has no source of truth and is
/// always zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct VoterStats {
    pub total_voters: i64,
    pub male_count: i64,
    pub female_count: i64,
    pub considered_votes: i64,
    pub actual_won_votes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct Election {
    pub id: i32,
    pub name: String,
    pub date: Date,
}

/// Served by both the polling-station and the voting-place lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct PollingStation {
    pub part_number: String,
    pub polling_station_name: Option<String>,
    pub polling_station_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
    pub part_number: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub token: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConsideredUpdate {
    pub considered: bool,
}

/// `gender` is written as given; a missing or null value clears the column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderUpdate {
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
