//! Paper identity
//!
//! A Team Description Paper is addressed by league, year, team and an
//! index that separates several papers by the same team in one year.
//! The composite form `league__year__team__index` ("lyti") is used in
//! URLs and by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{League, TeamName};

/// Separator between the four segments of a composite identifier
pub const LYTI_SEPARATOR: &str = "__";

/// Markdown body of a paper. The backend returns no structured fields.
pub type Paper = String;

/// One entry of the paper listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdpName {
    pub league: League,
    pub team_name: TeamName,
    pub year: u32,
    pub index: u32,
}

impl TdpName {
    /// Composite identifier for this paper
    pub fn lyti(&self) -> String {
        PaperId::new(&self.league.name, self.year, &self.team_name.name, Some(self.index))
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaperIdError {
    #[error("expected 4 fields separated by '__', got {0}")]
    BadFieldCount(usize),

    #[error("invalid year: {0}")]
    Year(String),

    #[error("invalid index: {0}")]
    Index(String),
}

/// Parsed composite identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaperId {
    pub league: String,
    pub year: u32,
    pub team: String,
    pub index: u32,
}

impl PaperId {
    pub fn new(league: &str, year: u32, team: &str, index: Option<u32>) -> Self {
        Self {
            league: league.to_string(),
            year,
            team: team.to_string(),
            index: index.unwrap_or(0),
        }
    }
}

impl FromStr for PaperId {
    type Err = PaperIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(LYTI_SEPARATOR).collect();
        let [league, year, team, index] = parts.as_slice() else {
            return Err(PaperIdError::BadFieldCount(parts.len()));
        };

        let year = parse_digits(year).ok_or_else(|| PaperIdError::Year((*year).to_string()))?;
        let index = parse_digits(index).ok_or_else(|| PaperIdError::Index((*index).to_string()))?;

        Ok(Self {
            league: (*league).to_string(),
            year,
            team: (*team).to_string(),
            index,
        })
    }
}

/// Plain decimal digits only; `u32::from_str` alone would accept a leading `+`.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.league,
            self.year,
            self.team,
            self.index,
            sep = LYTI_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id: PaperId = "soccer_smallsize__2019__RoboTeam_Twente__1".parse().unwrap();
        assert_eq!(id.league, "soccer_smallsize");
        assert_eq!(id.year, 2019);
        assert_eq!(id.team, "RoboTeam_Twente");
        assert_eq!(id.index, 1);
        assert_eq!(id.to_string(), "soccer_smallsize__2019__RoboTeam_Twente__1");
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        assert_eq!(
            "soccer_smallsize__2019__RoboTeam".parse::<PaperId>(),
            Err(PaperIdError::BadFieldCount(3))
        );
        assert_eq!(
            "a__2019__b__0__extra".parse::<PaperId>(),
            Err(PaperIdError::BadFieldCount(5))
        );
        assert_eq!("".parse::<PaperId>(), Err(PaperIdError::BadFieldCount(1)));
    }

    #[test]
    fn test_parse_non_numeric_parts() {
        assert_eq!(
            "league__twenty__team__0".parse::<PaperId>(),
            Err(PaperIdError::Year("twenty".into()))
        );
        assert_eq!(
            "league__2020__team__x".parse::<PaperId>(),
            Err(PaperIdError::Index("x".into()))
        );
    }

    #[test]
    fn test_parse_rejects_signed_numbers() {
        assert_eq!(
            "league__+2019__team__0".parse::<PaperId>(),
            Err(PaperIdError::Year("+2019".into()))
        );
        assert_eq!(
            "league__2019__team__-1".parse::<PaperId>(),
            Err(PaperIdError::Index("-1".into()))
        );
        assert_eq!(
            "league__2019__team__".parse::<PaperId>(),
            Err(PaperIdError::Index(String::new()))
        );
    }

    #[test]
    fn test_index_defaults_to_zero() {
        let id = PaperId::new("soccer_midsize", 2021, "Tech_United", None);
        assert_eq!(id.to_string(), "soccer_midsize__2021__Tech_United__0");
    }

    #[test]
    fn test_tdp_name_lyti() {
        let name = TdpName {
            league: League::new("soccer", "smallsize", None),
            team_name: TeamName::new("RoboTeam_Twente"),
            year: 2019,
            index: 2,
        };
        assert_eq!(name.lyti(), "soccer_smallsize__2019__RoboTeam_Twente__2");
    }
}
