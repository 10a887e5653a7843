//! Portal records and the candidate shape used to create them.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{PortalId, Timestamp, ValidationError};

/// Natural key of a portal: at most one stored portal per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortalKey {
    pub source: String,
    pub target: String,
}

impl PortalKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for PortalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A portal that has not been stored yet.
///
/// `size` is kept raw so an out-of-range value can reach validation
/// and be rejected there rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPortal {
    pub source: String,
    pub target: String,
    pub size: i32,
    pub expires: Timestamp,
}

impl NewPortal {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        size: i32,
        expires: Timestamp,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            size,
            expires,
        }
    }

    /// A portal closing `hours` and `minutes` after `now`.
    ///
    /// # Errors
    ///
    /// `ValidationError::OutOfRange` naming the offending field when the
    /// expiry cannot be represented.
    pub fn expiring_in(
        source: impl Into<String>,
        target: impl Into<String>,
        size: i32,
        hours: i64,
        minutes: i64,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let expires = now
            .checked_plus_hours(hours)
            .ok_or_else(|| ValidationError::out_of_range("hours", hours))?
            .checked_plus_minutes(minutes)
            .ok_or_else(|| ValidationError::out_of_range("minutes", minutes))?;
        Ok(Self::new(source, target, size, expires))
    }

    pub fn key(&self) -> PortalKey {
        PortalKey::new(self.source.clone(), self.target.clone())
    }
}

/// A stored portal as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portal {
    #[serde(skip)]
    id: PortalId,
    source: String,
    target: String,
    size: i32,
    expires: Timestamp,
    time_left: f64,
}

impl Portal {
    /// Rebuilds a stored portal, computing minutes remaining relative to `now`.
    pub fn reconstitute(
        id: PortalId,
        source: String,
        target: String,
        size: i32,
        expires: Timestamp,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            source,
            target,
            size,
            expires,
            time_left: expires.minutes_since(&now),
        }
    }

    pub fn id(&self) -> PortalId {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn expires(&self) -> Timestamp {
        self.expires
    }

    /// Minutes until expiry at read time; negative once expired.
    pub fn minutes_remaining(&self) -> f64 {
        self.time_left
    }

    /// True if the portal closed strictly before `now`.
    pub fn is_expired_at(&self, now: &Timestamp) -> bool {
        self.expires.is_before(now)
    }

    pub fn key(&self) -> PortalKey {
        PortalKey::new(self.source.clone(), self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::parse_storage("2024-03-01 12:00:00").unwrap()
    }

    #[test]
    fn expiring_in_adds_hours_and_minutes() {
        let portal =
            NewPortal::expiring_in("Bridgewatch", "Qiitun-Duosum", 7, 3, 15, now()).unwrap();
        assert_eq!(portal.expires.to_storage_string(), "2024-03-01 15:15:00");
        assert_eq!(portal.key(), PortalKey::new("Bridgewatch", "Qiitun-Duosum"));
    }

    #[test]
    fn expiring_in_rejects_unrepresentable_expiry() {
        let err = NewPortal::expiring_in("A", "B", 7, 3_000_000_000, 0, now()).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("hours", 3_000_000_000));

        let err = NewPortal::expiring_in("A", "B", 7, 1, i64::MAX, now()).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("minutes", i64::MAX));
    }

    #[test]
    fn reconstitute_computes_time_left() {
        let portal = Portal::reconstitute(
            PortalId::from_raw(1),
            "A".to_string(),
            "B".to_string(),
            20,
            now().plus_minutes(90),
            now(),
        );
        assert_eq!(portal.minutes_remaining(), 90.0);
        assert!(!portal.is_expired_at(&now()));
    }

    #[test]
    fn expired_portal_has_negative_time_left() {
        let portal = Portal::reconstitute(
            PortalId::from_raw(1),
            "A".to_string(),
            "B".to_string(),
            2,
            now().plus_minutes(-5),
            now(),
        );
        assert_eq!(portal.minutes_remaining(), -5.0);
        assert!(portal.is_expired_at(&now()));
    }

    #[test]
    fn portal_expiring_exactly_now_is_not_expired() {
        let portal = Portal::reconstitute(
            PortalId::from_raw(1),
            "A".to_string(),
            "B".to_string(),
            2,
            now(),
            now(),
        );
        assert!(!portal.is_expired_at(&now()));
    }

    #[test]
    fn serializes_without_storage_id() {
        let portal = Portal::reconstitute(
            PortalId::from_raw(99),
            "A".to_string(),
            "B".to_string(),
            7,
            now().plus_hours(1),
            now(),
        );
        let json = serde_json::to_value(&portal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "A",
                "target": "B",
                "size": 7,
                "expires": "2024-03-01T13:00:00Z",
                "timeLeft": 60.0
            })
        );
    }
}
