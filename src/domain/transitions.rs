//! Status transition logic
//!
//! Pure functions that map a control activation to the new raw status. The
//! caller persists the result; nothing here mutates the propal.

use chrono::{DateTime, Utc};

use crate::errors::{PropalError, Result};
use crate::schemas::RawStatus;

use super::capabilities::capabilities;
use super::stages::{resolve_effective_stage, EffectiveStage};

fn no_such_control(stage: EffectiveStage, control: &str) -> PropalError {
    PropalError::NoSuchControl {
        stage: stage.to_string(),
        control: control.to_string(),
    }
}

/// Apply the advance checkbox at the propal's current effective stage.
///
/// Checking validates the stage (Sent -> Won, To Pay/Remind -> Paid);
/// unchecking walks the single back-edge (-> Sent, -> To Pay). Paid is
/// terminal: no control is exposed there.
///
/// # Errors
/// `NoSuchControl` if the effective stage has no advance checkbox; the
/// stored status is left untouched.
pub fn apply_advance(
    raw: RawStatus,
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
    checked: bool,
) -> Result<RawStatus> {
    let stage = resolve_effective_stage(raw, reference, now);
    if !capabilities(stage, raw).can_advance {
        return Err(no_such_control(stage, "advance"));
    }

    let next = match stage {
        EffectiveStage::Sent | EffectiveStage::Lost => {
            if checked {
                RawStatus::Won
            } else {
                RawStatus::Sent
            }
        }
        EffectiveStage::ToPay | EffectiveStage::Remind => {
            if checked {
                RawStatus::Paid
            } else {
                RawStatus::ToPay
            }
        }
        _ => return Err(no_such_control(stage, "advance")),
    };

    Ok(next)
}

/// Apply the notify control at the propal's current effective stage.
///
/// Draft -> Sent (send the devis), Done -> To Pay (send the invoice),
/// Remind -> To Pay (re-send; the stage does not change, only the
/// notification side effect fires again).
///
/// # Errors
/// `NoSuchControl` if the effective stage has no notify control.
pub fn apply_notify(
    raw: RawStatus,
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<RawStatus> {
    let stage = resolve_effective_stage(raw, reference, now);
    let controls = capabilities(stage, raw);
    if !controls.can_notify {
        return Err(no_such_control(stage, "notify"));
    }

    controls
        .notify_target
        .ok_or_else(|| no_such_control(stage, "notify"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_advance_check_at_sent_wins() {
        let now = Utc::now();
        let next = apply_advance(RawStatus::Sent, now - Duration::days(5), now, true).unwrap();
        assert_eq!(next, RawStatus::Won);
    }

    #[test]
    fn test_advance_uncheck_at_sent_reverts() {
        let now = Utc::now();
        let next = apply_advance(RawStatus::Sent, now - Duration::days(5), now, false).unwrap();
        assert_eq!(next, RawStatus::Sent);
    }

    #[test]
    fn test_advance_at_lost_overlay() {
        let now = Utc::now();
        let reference = now - Duration::days(40);
        // Unchecking from the Lost overlay walks back to Sent
        let next = apply_advance(RawStatus::Sent, reference, now, false).unwrap();
        assert_eq!(next, RawStatus::Sent);
        // Checking still validates the devis
        let next = apply_advance(RawStatus::Sent, reference, now, true).unwrap();
        assert_eq!(next, RawStatus::Won);
    }

    #[test]
    fn test_advance_check_at_to_pay_pays() {
        let now = Utc::now();
        let next = apply_advance(RawStatus::ToPay, now - Duration::days(5), now, true).unwrap();
        assert_eq!(next, RawStatus::Paid);
    }

    #[test]
    fn test_advance_uncheck_at_to_pay_reverts() {
        let now = Utc::now();
        let next = apply_advance(RawStatus::ToPay, now - Duration::days(5), now, false).unwrap();
        assert_eq!(next, RawStatus::ToPay);
    }

    #[test]
    fn test_advance_at_remind_overlay_pays() {
        let now = Utc::now();
        let next = apply_advance(RawStatus::ToPay, now - Duration::days(25), now, true).unwrap();
        assert_eq!(next, RawStatus::Paid);
    }

    #[test]
    fn test_advance_at_paid_is_rejected() {
        let now = Utc::now();
        let result = apply_advance(RawStatus::Paid, now - Duration::days(5), now, false);
        assert!(matches!(
            result,
            Err(PropalError::NoSuchControl { .. })
        ));
    }

    #[test]
    fn test_advance_at_draft_and_won_is_rejected() {
        let now = Utc::now();
        assert!(apply_advance(RawStatus::Draft, now, now, true).is_err());
        // Won at the same instant has no controls
        assert!(apply_advance(RawStatus::Won, now, now, true).is_err());
        // Won after a day resolves to Done, which has no advance either
        assert!(apply_advance(RawStatus::Won, now - Duration::days(2), now, true).is_err());
    }

    #[test]
    fn test_notify_at_draft_sends() {
        let now = Utc::now();
        let next = apply_notify(RawStatus::Draft, now, now).unwrap();
        assert_eq!(next, RawStatus::Sent);
    }

    #[test]
    fn test_notify_at_done_requests_payment() {
        let now = Utc::now();
        let next = apply_notify(RawStatus::Done, now - Duration::days(3), now).unwrap();
        assert_eq!(next, RawStatus::ToPay);
    }

    #[test]
    fn test_notify_at_won_after_a_day_behaves_as_done() {
        // Won escalates to Done after a day, and Done exposes notify.
        let now = Utc::now();
        let next = apply_notify(RawStatus::Won, now - Duration::days(2), now).unwrap();
        assert_eq!(next, RawStatus::ToPay);
    }

    #[test]
    fn test_notify_at_remind_resends_without_stage_change() {
        let now = Utc::now();
        let next = apply_notify(RawStatus::ToPay, now - Duration::days(25), now).unwrap();
        assert_eq!(next, RawStatus::ToPay);
    }

    #[test]
    fn test_notify_at_sent_and_paid_is_rejected() {
        let now = Utc::now();
        assert!(apply_notify(RawStatus::Sent, now - Duration::days(5), now).is_err());
        assert!(apply_notify(RawStatus::Paid, now - Duration::days(5), now).is_err());
        // To Pay before the remind threshold has no notify control
        assert!(apply_notify(RawStatus::ToPay, now - Duration::days(5), now).is_err());
    }
}
