//! Travel alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use travelmate_shared::types::AlertId;

use super::error::TravelError;

/// Alert source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    /// Flight status change.
    Flight,
    /// Weather warning.
    Weather,
    /// Traffic disruption.
    Traffic,
    /// Emergency notice.
    Emergency,
}

/// A notification shown to the traveller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert ID.
    pub id: AlertId,
    /// Alert source.
    #[serde(rename = "type")]
    pub kind: AlertType,
    /// Message text.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the traveller has seen it.
    #[serde(default)]
    pub read: bool,
}

/// Input for a new alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    /// Alert source.
    pub kind: AlertType,
    /// Message text.
    pub message: String,
}

impl Alert {
    /// Creates an unread alert.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::EmptyAlertMessage` if the message is blank.
    pub fn raise(input: NewAlert, created_at: DateTime<Utc>) -> Result<Self, TravelError> {
        let message = input.message.trim();
        if message.is_empty() {
            return Err(TravelError::EmptyAlertMessage);
        }

        Ok(Self {
            id: AlertId::new(),
            kind: input.kind,
            message: message.to_string(),
            created_at,
            read: false,
        })
    }
}

/// Newest-first alert list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertFeed(Vec<Alert>);

impl AlertFeed {
    /// Wraps a stored list, assumed newest first.
    #[must_use]
    pub fn from_vec(alerts: Vec<Alert>) -> Self {
        Self(alerts)
    }

    /// Puts an alert at the front.
    pub fn push(&mut self, alert: Alert) {
        self.0.insert(0, alert);
    }

    /// Marks an alert as read.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::AlertNotFound` if no alert has that ID.
    pub fn mark_read(&mut self, id: AlertId) -> Result<(), TravelError> {
        let alert = self
            .0
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or(TravelError::AlertNotFound(id))?;
        alert.read = true;
        Ok(())
    }

    /// Removes an alert.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::AlertNotFound` if no alert has that ID.
    pub fn dismiss(&mut self, id: AlertId) -> Result<Alert, TravelError> {
        let index = self
            .0
            .iter()
            .position(|alert| alert.id == id)
            .ok_or(TravelError::AlertNotFound(id))?;
        Ok(self.0.remove(index))
    }

    /// Number of unread alerts.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.0.iter().filter(|alert| !alert.read).count()
    }

    /// Alerts, newest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Alert] {
        &self.0
    }

    /// Number of alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no alerts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
