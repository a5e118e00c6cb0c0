//! Status enum for service history entries.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a service visit.
///
/// Stored lowercase on the wire (`completed | pending | scheduled`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Work is finished and the mower has been returned.
    Completed,
    /// Work has been accepted but not yet scheduled.
    #[default]
    Pending,
    /// A service date has been booked.
    Scheduled,
}

impl ServiceStatus {
    /// All statuses, in display order. Used to render form selects.
    pub const ALL: [Self; 3] = [Self::Completed, Self::Pending, Self::Scheduled];

    /// The lowercase wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown service status: {0}")]
pub struct ParseServiceStatusError(String);

impl FromStr for ServiceStatus {
    type Err = ParseServiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(ParseServiceStatusError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for status in ServiceStatus::ALL {
            let parsed: ServiceStatus = status.as_str().parse().expect("known status");
            assert_eq!(parsed, status);
        }
        assert!("done".parse::<ServiceStatus>().is_err());
    }

    #[test]
    fn wire_format_is_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Scheduled).expect("serialize");
        assert_eq!(json, "\"scheduled\"");
        let back: ServiceStatus = serde_json::from_str("\"completed\"").expect("deserialize");
        assert_eq!(back, ServiceStatus::Completed);
    }
}
