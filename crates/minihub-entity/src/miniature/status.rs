//! Paint-progress status of a miniature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far along a miniature is: unpainted, assembled, or finished.
///
/// Stored as text in the database and serialized as the exact variant
/// names, matching what the frontend sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressStatus {
    /// Unpainted, possibly still on the sprue.
    Gray,
    /// Assembled but unpainted.
    Built,
    /// Painting complete.
    Painted,
}

impl ProgressStatus {
    /// All statuses, in display order.
    pub const ALL: [ProgressStatus; 3] = [Self::Gray, Self::Built, Self::Painted];

    /// The canonical string form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::Built => "Built",
            Self::Painted => "Painted",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown progress status: {0}")]
pub struct ParseProgressStatusError(String);

impl FromStr for ProgressStatus {
    type Err = ParseProgressStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gray" => Ok(Self::Gray),
            "Built" => Ok(Self::Built),
            "Painted" => Ok(Self::Painted),
            other => Err(ParseProgressStatusError(other.to_string())),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for ProgressStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ProgressStatus {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProgressStatus {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_exact_variant_names() {
        let json = serde_json::to_string(&ProgressStatus::Painted).expect("serialize");
        assert_eq!(json, "\"Painted\"");
        let parsed: ProgressStatus = serde_json::from_str("\"Gray\"").expect("deserialize");
        assert_eq!(parsed, ProgressStatus::Gray);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("gray".parse::<ProgressStatus>().is_err());
        assert!("".parse::<ProgressStatus>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        for status in ProgressStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
