//! Interactive capability table
//!
//! One row per effective stage: whether the advance checkbox and the notify
//! control are shown, and which raw status each one targets. Implemented as
//! a single lookup so overlay logic is not re-derived at call sites.

use crate::schemas::RawStatus;

use super::stages::EffectiveStage;

/// Controls available at one effective stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageControls {
    /// Whether the advance checkbox is shown
    pub can_advance: bool,

    /// Whether the notify control is shown
    pub can_notify: bool,

    /// Raw status the advance checkbox targets when checked; for the Lost
    /// overlay this is the uncheck path back to Sent
    pub advance_target: Option<RawStatus>,

    /// Raw status written after a notification fires
    pub notify_target: Option<RawStatus>,
}

impl StageControls {
    const NONE: StageControls = StageControls {
        can_advance: false,
        can_notify: false,
        advance_target: None,
        notify_target: None,
    };
}

/// Look up the controls for a stage row.
///
/// `raw` is the propal's stored status: the Sent/Lost advance checkbox is
/// suppressed once the raw stage has progressed to Done or beyond, so a
/// completed propal can no longer be un-sent.
pub fn capabilities(stage: EffectiveStage, raw: RawStatus) -> StageControls {
    let controls = match stage {
        EffectiveStage::Draft => StageControls {
            can_advance: false,
            can_notify: true,
            advance_target: None,
            notify_target: Some(RawStatus::Sent),
        },
        EffectiveStage::Sent => StageControls {
            can_advance: true,
            can_notify: false,
            advance_target: Some(RawStatus::Won),
            notify_target: None,
        },
        EffectiveStage::Lost => StageControls {
            can_advance: true,
            can_notify: false,
            advance_target: Some(RawStatus::Sent),
            notify_target: None,
        },
        EffectiveStage::Won => StageControls::NONE,
        EffectiveStage::Done => StageControls {
            can_advance: false,
            can_notify: true,
            advance_target: None,
            notify_target: Some(RawStatus::ToPay),
        },
        EffectiveStage::ToPay => StageControls {
            can_advance: true,
            can_notify: false,
            advance_target: Some(RawStatus::Paid),
            notify_target: None,
        },
        EffectiveStage::Remind => StageControls {
            can_advance: true,
            can_notify: true,
            advance_target: Some(RawStatus::Paid),
            notify_target: Some(RawStatus::ToPay),
        },
        EffectiveStage::Paid => StageControls::NONE,
    };

    // A propal completed (Done or beyond) can no longer be un-sent.
    if matches!(stage, EffectiveStage::Sent | EffectiveStage::Lost) && raw.stage_id() >= 4 {
        return StageControls {
            can_advance: false,
            advance_target: None,
            ..controls
        };
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_has_notify_only() {
        let c = capabilities(EffectiveStage::Draft, RawStatus::Draft);
        assert!(!c.can_advance);
        assert!(c.can_notify);
        assert_eq!(c.notify_target, Some(RawStatus::Sent));
    }

    #[test]
    fn test_sent_has_advance_to_won() {
        let c = capabilities(EffectiveStage::Sent, RawStatus::Sent);
        assert!(c.can_advance);
        assert!(!c.can_notify);
        assert_eq!(c.advance_target, Some(RawStatus::Won));
    }

    #[test]
    fn test_lost_overlay_advance_targets_sent() {
        let c = capabilities(EffectiveStage::Lost, RawStatus::Sent);
        assert!(c.can_advance);
        assert_eq!(c.advance_target, Some(RawStatus::Sent));
    }

    #[test]
    fn test_won_and_paid_expose_nothing() {
        for stage in [EffectiveStage::Won, EffectiveStage::Paid] {
            let c = capabilities(stage, RawStatus::Won);
            assert!(!c.can_advance);
            assert!(!c.can_notify);
        }
    }

    #[test]
    fn test_done_has_notify_to_to_pay() {
        let c = capabilities(EffectiveStage::Done, RawStatus::Done);
        assert!(!c.can_advance);
        assert!(c.can_notify);
        assert_eq!(c.notify_target, Some(RawStatus::ToPay));
    }

    #[test]
    fn test_to_pay_has_advance_to_paid() {
        let c = capabilities(EffectiveStage::ToPay, RawStatus::ToPay);
        assert!(c.can_advance);
        assert!(!c.can_notify);
        assert_eq!(c.advance_target, Some(RawStatus::Paid));
    }

    #[test]
    fn test_remind_has_both_controls() {
        let c = capabilities(EffectiveStage::Remind, RawStatus::ToPay);
        assert!(c.can_advance);
        assert!(c.can_notify);
        assert_eq!(c.advance_target, Some(RawStatus::Paid));
        // Re-send keeps the status at To Pay
        assert_eq!(c.notify_target, Some(RawStatus::ToPay));
    }

    #[test]
    fn test_sent_advance_hidden_once_completed() {
        // The row for Sent loses its checkbox once the stored status has
        // progressed to Done or beyond.
        for raw in [RawStatus::Done, RawStatus::ToPay, RawStatus::Paid] {
            let c = capabilities(EffectiveStage::Sent, raw);
            assert!(!c.can_advance, "advance should be hidden for raw {}", raw);
            assert!(c.advance_target.is_none());
        }
        // Still present while the stored status is Won
        let c = capabilities(EffectiveStage::Sent, RawStatus::Won);
        assert!(c.can_advance);
    }
}
