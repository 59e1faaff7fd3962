//! Lifecycle stage resolution
//!
//! The persisted status and the displayed stage are distinct types: Lost and
//! Remind exist only as time-derived overlays of Sent and To Pay and are
//! never written back.

use chrono::{DateTime, Utc};

use crate::schemas::RawStatus;

/// Days after which a Sent propal is shown as Lost
pub const SENT_TO_LOST_DAYS: i64 = 30;

/// Days after which a To Pay propal is shown as Remind
pub const TO_PAY_TO_REMIND_DAYS: i64 = 21;

/// Display-only lifecycle stage: the raw vocabulary plus the Lost and Remind
/// overlays. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectiveStage {
    Draft,
    Sent,
    Lost,
    Won,
    Done,
    ToPay,
    Remind,
    Paid,
}

impl EffectiveStage {
    /// Numeric stage id used for ordering and display
    pub fn id(self) -> u8 {
        match self {
            EffectiveStage::Draft => 0,
            EffectiveStage::Sent => 1,
            EffectiveStage::Lost => 2,
            EffectiveStage::Won => 3,
            EffectiveStage::Done => 4,
            EffectiveStage::ToPay => 6,
            EffectiveStage::Remind => 7,
            EffectiveStage::Paid => 9,
        }
    }

    /// Whether this stage is a derived overlay rather than a stored value
    pub fn is_overlay(self) -> bool {
        matches!(self, EffectiveStage::Lost | EffectiveStage::Remind)
    }

    /// Terminal stage: nothing is reachable from Paid
    pub fn is_terminal(self) -> bool {
        self == EffectiveStage::Paid
    }
}

impl std::fmt::Display for EffectiveStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveStage::Draft => write!(f, "draft"),
            EffectiveStage::Sent => write!(f, "sent"),
            EffectiveStage::Lost => write!(f, "lost"),
            EffectiveStage::Won => write!(f, "won"),
            EffectiveStage::Done => write!(f, "done"),
            EffectiveStage::ToPay => write!(f, "to_pay"),
            EffectiveStage::Remind => write!(f, "remind"),
            EffectiveStage::Paid => write!(f, "paid"),
        }
    }
}

impl From<RawStatus> for EffectiveStage {
    fn from(raw: RawStatus) -> Self {
        match raw {
            RawStatus::Draft => EffectiveStage::Draft,
            RawStatus::Sent => EffectiveStage::Sent,
            RawStatus::Won => EffectiveStage::Won,
            RawStatus::Done => EffectiveStage::Done,
            RawStatus::ToPay => EffectiveStage::ToPay,
            RawStatus::Paid => EffectiveStage::Paid,
        }
    }
}

/// Whole days elapsed between the reference timestamp and now, rounded up.
///
/// Millisecond-resolution `ceil(|now - date| / 1 day)`: any nonzero
/// difference, even sub-second, counts as at least one day.
pub fn elapsed_days(reference: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - reference).num_milliseconds().abs();
    // Ceiling division written out by hand: `i64::div_ceil` is not available
    // on this toolchain. `millis` is non-negative, so this is equivalent.
    (millis + 86_400_000 - 1) / 86_400_000
}

/// Compute the effective stage shown to the user.
///
/// Pure function of (raw, reference, now); recomputed on every read and
/// never written back. Escalation rules:
/// - Sent for more than 30 days displays as Lost
/// - Won for more than 0 days displays as Done
/// - To Pay for more than 21 days displays as Remind
pub fn resolve_effective_stage(
    raw: RawStatus,
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EffectiveStage {
    let days = elapsed_days(reference, now);
    match raw {
        RawStatus::Sent if days > SENT_TO_LOST_DAYS => EffectiveStage::Lost,
        RawStatus::Won if days > 0 => EffectiveStage::Done,
        RawStatus::ToPay if days > TO_PAY_TO_REMIND_DAYS => EffectiveStage::Remind,
        _ => EffectiveStage::from(raw),
    }
}
