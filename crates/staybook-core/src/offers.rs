//! Best-offer ranking: each hotel's largest discount, top ten overall.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::hotels::{id_label, BestOfferSummary, HotelView, PricingOption};
use crate::store::HotelStore;

pub const BEST_OFFER_LIMIT: usize = 10;

/// What to do with a hotel the ranking cannot use: one with no pricing
/// options, or one whose `id`, `images` or `pricing` has an unexpected shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPricingPolicy {
    /// Leave the hotel out of the ranking.
    #[default]
    Skip,
    /// Fail the whole ranking.
    Reject,
}

impl FromStr for EmptyPricingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected skip or reject; got '{other}'")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("hotel '{id}' cannot be ranked: {reason}")]
    MalformedRecord { id: String, reason: String },
}

const NO_PRICING: &str = "no pricing options";

/// Index and value of the option with the strictly greatest discount;
/// earlier options win ties.
///
/// Options without a computable percentage lose to any option that has one.
#[must_use]
pub fn best_pricing(hotel: &HotelView) -> Option<(usize, &PricingOption)> {
    hotel.pricing.iter().enumerate().fold(
        None,
        |best: Option<(usize, &PricingOption)>, current| match best {
            Some(best) if !beats(current.1.discount_percent(), best.1.discount_percent()) => {
                Some(best)
            }
            _ => Some(current),
        },
    )
}

fn beats(candidate: Option<f64>, incumbent: Option<f64>) -> bool {
    match (candidate, incumbent) {
        (Some(candidate), Some(incumbent)) => candidate > incumbent,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Descending by percentage, uncomputable percentages last.
fn by_discount_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn leave_out(policy: EmptyPricingPolicy, id: String, reason: String) -> Result<(), RankingError> {
    match policy {
        EmptyPricingPolicy::Skip => {
            tracing::warn!(hotel_id = %id, %reason, "hotel left out of best offers");
            Ok(())
        }
        EmptyPricingPolicy::Reject => Err(RankingError::MalformedRecord { id, reason }),
    }
}

/// Rank every hotel by its best discount and keep the top [`BEST_OFFER_LIMIT`].
///
/// The sort is stable, so hotels with equal discounts keep document order.
/// Hotels with no pricing, or whose record cannot be typed as a
/// [`HotelView`], are handled by `policy`.
///
/// # Errors
///
/// Returns [`RankingError::MalformedRecord`] for the first such hotel when
/// `policy` is [`EmptyPricingPolicy::Reject`].
pub fn rank_best_offers(
    store: &HotelStore,
    policy: EmptyPricingPolicy,
) -> Result<Vec<BestOfferSummary>, RankingError> {
    let mut offers = Vec::with_capacity(store.hotels().len());

    for record in store.hotels() {
        let view = match HotelView::from_record(record) {
            Ok(view) => view,
            Err(e) => {
                leave_out(policy, id_label(record), e.to_string())?;
                continue;
            }
        };

        match best_pricing(&view) {
            Some((index, _)) => offers.push(BestOfferSummary::from_offer(record, &view, index)),
            None => leave_out(policy, view.id.to_string(), NO_PRICING.to_string())?,
        }
    }

    offers.sort_by(|a, b| by_discount_desc(a.discount_percent(), b.discount_percent()));
    offers.truncate(BEST_OFFER_LIMIT);
    Ok(offers)
}

#[cfg(test)]
#[path = "offers_test.rs"]
mod tests;
