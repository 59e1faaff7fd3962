//! Notification boundary
//!
//! The notify control fires a fire-and-forget message to an external
//! collaborator (mail in the original app). Failures are logged; the caller
//! only learns about them through the status write that follows.

use tracing::info;

use crate::domain::EffectiveStage;
use crate::errors::Result;
use crate::schemas::Propal;

/// Outbound notification sender
pub trait Notifier {
    /// Send the notification that the given stage's notify control triggers
    fn send(&self, propal: &Propal, stage: EffectiveStage) -> Result<()>;
}

/// Default sender: records the notification in the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, propal: &Propal, stage: EffectiveStage) -> Result<()> {
        let kind = match stage {
            EffectiveStage::Draft => "devis",
            EffectiveStage::Remind => "relance",
            _ => "facture",
        };
        info!(
            "Notification ({}) for propal {} (devis {}) at stage {}",
            kind, propal.id, propal.devis_number, stage
        );
        Ok(())
    }
}
