//! Data-quality report over a loaded store.
//!
//! Queries tolerate all of these problems; the report exists so they can be
//! fixed in the document instead of papered over at request time.

use serde::Serialize;

use crate::hotels::{HotelId, HotelView};
use crate::store::HotelStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub hotel_count: usize,
    pub recommended_count: usize,
    pub duplicate_ids: Vec<HotelId>,
    /// Hotels the ranking cannot type, as `(position in document, reason)`.
    pub unreadable: Vec<(usize, String)>,
    pub empty_pricing: Vec<HotelId>,
    /// Options whose list price is zero or negative, as `(hotel, option index)`.
    pub invalid_list_price: Vec<(HotelId, usize)>,
    /// Options where the discounted price exceeds the list price.
    pub above_list_price: Vec<(HotelId, usize)>,
}

impl IntegrityReport {
    #[must_use]
    pub fn check(store: &HotelStore) -> Self {
        let mut report = Self {
            hotel_count: store.hotels().len(),
            recommended_count: store.recommended().len(),
            duplicate_ids: store.duplicate_ids(),
            ..Self::default()
        };

        for (position, record) in store.hotels().iter().enumerate() {
            let hotel = match HotelView::from_record(record) {
                Ok(hotel) => hotel,
                Err(e) => {
                    report.unreadable.push((position, e.to_string()));
                    continue;
                }
            };
            if hotel.pricing.is_empty() {
                report.empty_pricing.push(hotel.id.clone());
            }
            for (index, option) in hotel.pricing.iter().enumerate() {
                if option.discount_percent().is_none() {
                    report.invalid_list_price.push((hotel.id.clone(), index));
                } else if option.discounted_price > option.original_price {
                    report.above_list_price.push((hotel.id.clone(), index));
                }
            }
        }

        report
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.unreadable.is_empty()
            && self.empty_pricing.is_empty()
            && self.invalid_list_price.is_empty()
            && self.above_list_price.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn clean_store_reports_nothing() {
        let doc = json!({
            "hotels": [
                { "id": "a", "pricing": [{ "originalPrice": 100, "discountedPrice": 90 }] }
            ],
            "recommended_hotels": [{ "id": "r", "name": "R" }]
        });
        let store = HotelStore::from_json_slice(doc.to_string().as_bytes()).unwrap();
        let report = IntegrityReport::check(&store);
        assert!(report.is_clean());
        assert_eq!(report.hotel_count, 1);
        assert_eq!(report.recommended_count, 1);
    }

    #[test]
    fn flags_each_problem_kind() {
        let doc = json!({
            "hotels": [
                { "id": "dup", "pricing": [{ "originalPrice": 100, "discountedPrice": 90 }] },
                { "id": "dup", "name": "2", "pricing": [] },
                { "id": "zero", "name": "Z", "pricing": [
                    { "originalPrice": 100, "discountedPrice": 90 },
                    { "originalPrice": 0, "discountedPrice": 0 }
                ] },
                { "id": "markup", "pricing": [{ "originalPrice": 100, "discountedPrice": 120 }] },
                { "name": "No Id" }
            ]
        });
        let store = HotelStore::from_json_slice(doc.to_string().as_bytes()).unwrap();
        let report = IntegrityReport::check(&store);

        let text = |s: &str| HotelId::Text(s.to_string());
        assert!(!report.is_clean());
        assert_eq!(report.duplicate_ids, vec![text("dup")]);
        assert_eq!(report.empty_pricing, vec![text("dup")]);
        assert_eq!(report.invalid_list_price, vec![(text("zero"), 1)]);
        assert_eq!(report.above_list_price, vec![(text("markup"), 0)]);
        assert_eq!(report.unreadable.len(), 1);
        assert_eq!(report.unreadable[0].0, 4);
    }
}
