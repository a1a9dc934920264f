/**
 * Connection Request Types
 *
 * Model types for the connection request state machine.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a stored connection request.
///
/// Rejection deletes the row rather than storing a terminal status, so only
/// the two active states exist in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }
}

/// A directed connection request between two identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            ConnectionStatus::from_str(ConnectionStatus::Pending.as_str()),
            Some(ConnectionStatus::Pending)
        );
        assert_eq!(
            ConnectionStatus::from_str(ConnectionStatus::Accepted.as_str()),
            Some(ConnectionStatus::Accepted)
        );
        assert_eq!(ConnectionStatus::from_str("rejected"), None);
    }
}
