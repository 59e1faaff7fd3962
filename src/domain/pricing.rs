//! Line-item aggregation
//!
//! Turns a sparse map of tarif references into a total duration and total
//! amount. References whose tarif has been deleted are pruned silently; the
//! pruned map is returned so callers persist it and stale keys do not
//! reappear.

use tracing::{debug, warn};

use crate::schemas::{Client, LineItem, LineItemMap, Tarif};

/// Result of aggregating a line-item map against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Total duration, "HH:MM"; hours are not wrapped at 24
    pub duree: String,

    /// Total amount, rounded to 2 decimal places
    pub montant: f64,

    /// Total duration in minutes
    pub total_minutes: i64,

    /// The input map minus stale references
    pub pruned: LineItemMap,
}

/// Parse a "HH:MM" duration into minutes. Unparsable pieces count as zero.
pub fn parse_hhmm(value: &str) -> i64 {
    let mut parts = value.splitn(2, ':');
    let hours = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let minutes = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

/// Format minutes as "HH:MM", zero-padded, hours unbounded
pub fn format_hhmm(total_minutes: i64) -> String {
    let total_minutes = total_minutes.max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Round an amount to 2 decimal places, half away from zero
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount with exactly 2 decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round_amount(amount))
}

/// Look up a tarif by id
pub fn find_tarif<'a>(catalog: &'a [Tarif], id: &str) -> Option<&'a Tarif> {
    catalog.iter().find(|t| t.id == id)
}

/// Aggregate a line-item map against the catalog.
///
/// Pure apart from logging: entries whose tarif no longer exists are dropped
/// from the returned map without erroring, every surviving entry contributes
/// `prix * qtt` to the amount and `unit minutes * qtt` to the duration.
pub fn aggregate(items: &LineItemMap, catalog: &[Tarif]) -> Aggregate {
    let mut minutes = 0.0f64;
    let mut montant = 0.0f64;
    let mut pruned = LineItemMap::new();

    for (tarif_id, line) in items {
        let Some(tarif) = find_tarif(catalog, tarif_id) else {
            debug!("Pruning stale line item, tarif {} no longer exists", tarif_id);
            continue;
        };
        montant += tarif.prix * line.qtt;
        minutes += parse_hhmm(&tarif.time_by_units) as f64 * line.qtt;
        pruned.insert(tarif_id.clone(), line.clone());
    }

    let total_minutes = minutes.round() as i64;
    Aggregate {
        duree: format_hhmm(total_minutes),
        montant: round_amount(montant),
        total_minutes,
        pruned,
    }
}

/// Set or clear one line item in place.
///
/// A positive quantity inserts or updates the entry; a new entry's detail
/// defaults to the tarif's comment. A zero or negative quantity removes the
/// entry entirely.
pub fn update_line_item(
    items: &mut LineItemMap,
    catalog: &[Tarif],
    tarif_id: &str,
    qtt: f64,
    detail: Option<String>,
) {
    if qtt > 0.0 {
        let entry = items.entry(tarif_id.to_string()).or_insert_with(|| {
            let comment = find_tarif(catalog, tarif_id)
                .and_then(|t| t.comment.clone())
                .unwrap_or_default();
            LineItem::new(0.0, comment)
        });
        entry.qtt = qtt;
        if let Some(detail) = detail {
            entry.detail = detail;
        }
    } else {
        items.remove(tarif_id);
    }
}

/// Seed the line-item map for a brand-new propal when a client is attached.
///
/// Replaces the whole map with a single entry for the tarif flagged default:
/// quantity = the client's distance hint (or 1), detail = the client's
/// comment. Returns None when no default tarif exists, leaving the map
/// untouched. Several tarifs flagged default is a data ambiguity, not an
/// error: the first match wins and the ambiguity is logged.
pub fn default_line_items(catalog: &[Tarif], client: &Client) -> Option<LineItemMap> {
    let mut defaults = catalog.iter().filter(|t| t.default);
    let tarif = defaults.next()?;
    if defaults.next().is_some() {
        warn!(
            "Multiple tarifs flagged default, keeping the first match ({})",
            tarif.id
        );
    }

    let qtt = match client.distance {
        Some(d) if d > 0.0 => d,
        _ => 1.0,
    };
    let detail = client.comment.clone().unwrap_or_default();

    let mut items = LineItemMap::new();
    items.insert(tarif.id.clone(), LineItem::new(qtt, detail));
    Some(items)
}
