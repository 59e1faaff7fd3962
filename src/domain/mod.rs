//! Domain logic: lifecycle stages, capability table, transitions, pricing

mod capabilities;
mod pricing;
mod stages;
mod transitions;


pub use capabilities::{capabilities, StageControls};
pub use pricing::{
    aggregate, default_line_items, find_tarif, format_amount, format_hhmm, parse_hhmm,
    round_amount, update_line_item, Aggregate,
};
pub use stages::{
    elapsed_days, resolve_effective_stage, EffectiveStage, SENT_TO_LOST_DAYS,
    TO_PAY_TO_REMIND_DAYS,
};
pub use transitions::{apply_advance, apply_notify};
