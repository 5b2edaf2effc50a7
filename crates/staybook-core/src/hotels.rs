//! Hotel records as they appear in the booking document.
//!
//! Records are kept as raw JSON so lookups and the recommendation passthrough
//! hand them back exactly as stored. [`HotelView`] types the few fields the
//! best-offer ranking reads and is built from a record only when ranking.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Hotel identifier. The document uses both slugs and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelId {
    Text(String),
    Number(Number),
}

impl HotelId {
    /// The `id` of a raw record, when it is a string or a number.
    #[must_use]
    pub fn of(record: &Value) -> Option<Self> {
        match record.get("id")? {
            Value::String(id) => Some(Self::Text(id.clone())),
            Value::Number(id) => Some(Self::Number(id.clone())),
            _ => None,
        }
    }

    /// Exact comparison against an identifier taken from a URL or argv.
    ///
    /// Numeric ids match their canonical JSON form only (`12` matches `"12"`,
    /// never `"012"` or `"12.0"`).
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            HotelId::Text(id) => id == raw,
            HotelId::Number(id) => id.to_string() == raw,
        }
    }
}

impl std::fmt::Display for HotelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelId::Text(id) => write!(f, "{id}"),
            HotelId::Number(id) => write!(f, "{id}"),
        }
    }
}

/// Label for log lines and reports; records without a usable id get a placeholder.
#[must_use]
pub fn id_label(record: &Value) -> String {
    HotelId::of(record).map_or_else(|| "<no id>".to_string(), |id| id.to_string())
}

/// The fields of a hotel record that ranking depends on.
///
/// Everything else on the record is ignored here, so an odd `name` or
/// `rating` never stops a hotel from being ranked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotelView {
    pub id: HotelId,
    #[serde(default)]
    pub images: Option<HotelImages>,
    #[serde(default)]
    pub pricing: Vec<PricingOption>,
}

impl HotelView {
    /// Type a raw record.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when `id` is missing or not a string
    /// or number, or when `pricing` is not a list of options with numeric
    /// `originalPrice` and `discountedPrice`.
    pub fn from_record(record: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(record)
    }

    /// Main image URL, whichever shape the `images` field uses.
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.images.as_ref().and_then(HotelImages::main)
    }
}

/// The `images` field is a single URL, a URL list, or an object with a `main` URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HotelImages {
    Single(String),
    List(Vec<String>),
    Gallery { main: String },
    /// Any other shape. Has no main image.
    Other(Value),
}

impl HotelImages {
    #[must_use]
    pub fn main(&self) -> Option<&str> {
        match self {
            HotelImages::Single(url) | HotelImages::Gallery { main: url } => Some(url.as_str()),
            HotelImages::List(urls) => urls.first().map(String::as_str),
            HotelImages::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    pub original_price: f64,
    pub discounted_price: f64,
}

impl PricingOption {
    /// Actual discount of this option in percent, recomputed from the prices.
    #[must_use]
    pub fn discount_percent(&self) -> Option<f64> {
        discount_percent(self.original_price, self.discounted_price)
    }
}

/// `(original - discounted) / original * 100`.
///
/// `None` when the list price is zero, negative or not finite.
#[must_use]
pub fn discount_percent(original_price: f64, discounted_price: f64) -> Option<f64> {
    if !original_price.is_finite() || original_price <= 0.0 {
        return None;
    }
    Some((original_price - discounted_price) / original_price * 100.0)
}

/// One hotel's best offer, as served by the best-offer ranking.
///
/// Display fields are copied from the raw record and pricing option, so
/// numbers and nested objects come out as the document wrote them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestOfferSummary {
    pub id: HotelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Value>,
    pub original_price: Value,
    pub discounted_price: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    #[serde(skip)]
    percent: Option<f64>,
}

impl BestOfferSummary {
    /// Summary of `record` using its pricing option at `index`.
    ///
    /// `view` must be the typed view of the same record.
    #[must_use]
    pub fn from_offer(record: &Value, view: &HotelView, index: usize) -> Self {
        let option = &record["pricing"][index];
        let field = |value: &Value, key: &str| value.get(key).cloned();
        Self {
            id: view.id.clone(),
            name: field(record, "name"),
            discount: field(option, "discount"),
            original_price: option["originalPrice"].clone(),
            discounted_price: option["discountedPrice"].clone(),
            currency: field(option, "currency"),
            room_type: field(option, "roomType"),
            image: view.main_image().map(ToOwned::to_owned),
            rating: field(record, "rating"),
            address: field(record, "address"),
            percent: view
                .pricing
                .get(index)
                .and_then(PricingOption::discount_percent),
        }
    }

    #[must_use]
    pub fn discount_percent(&self) -> Option<f64> {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn view(value: &Value) -> HotelView {
        HotelView::from_record(value).expect("rankable hotel record")
    }

    #[test]
    fn hotel_id_matches_exactly() {
        let slug = HotelId::Text("marriott_marquis_sf".to_string());
        assert!(slug.matches("marriott_marquis_sf"));
        assert!(!slug.matches("Marriott_Marquis_SF"));
        assert!(!slug.matches("marriott"));

        let numeric = HotelId::Number(42.into());
        assert!(numeric.matches("42"));
        assert!(!numeric.matches("042"));
        assert!(!numeric.matches("42.0"));
    }

    #[test]
    fn hotel_id_of_raw_record() {
        assert_eq!(
            HotelId::of(&json!({ "id": "a" })),
            Some(HotelId::Text("a".to_string()))
        );
        assert_eq!(HotelId::of(&json!({ "id": 7 })), Some(HotelId::Number(7.into())));
        assert!(HotelId::of(&json!({ "id": 7.5 })).is_some_and(|id| id.matches("7.5")));
        assert_eq!(HotelId::of(&json!({ "id": null })), None);
        assert_eq!(HotelId::of(&json!({ "name": "No Id" })), None);
        assert_eq!(HotelId::of(&json!("not an object")), None);
        assert_eq!(id_label(&json!({ "name": "No Id" })), "<no id>");
    }

    #[test]
    fn images_resolve_main_from_any_shape() {
        let listed = view(&json!({
            "id": "a",
            "images": ["https://img.example.com/a1.jpg", "https://img.example.com/a2.jpg"]
        }));
        assert_eq!(listed.main_image(), Some("https://img.example.com/a1.jpg"));

        let gallery = view(&json!({
            "id": "b",
            "images": { "main": "https://img.example.com/b.jpg", "gallery": ["x.jpg"] }
        }));
        assert_eq!(gallery.main_image(), Some("https://img.example.com/b.jpg"));

        let single = view(&json!({ "id": "s", "images": "https://img.example.com/s.jpg" }));
        assert_eq!(single.main_image(), Some("https://img.example.com/s.jpg"));

        let odd = view(&json!({ "id": "o", "images": { "thumbs": [] } }));
        assert_eq!(odd.main_image(), None);

        let missing = view(&json!({ "id": "c" }));
        assert_eq!(missing.main_image(), None);
        assert!(missing.pricing.is_empty());
    }

    #[test]
    fn view_ignores_fields_ranking_does_not_read() {
        let record = json!({
            "id": "sf_1",
            "name": null,
            "rating": 4.5,
            "address": "somewhere",
            "amenities": "wifi",
            "pricing": [{ "originalPrice": 300, "discountedPrice": 240, "refundable": true }]
        });
        let hotel = view(&record);
        assert_eq!(hotel.id, HotelId::Text("sf_1".to_string()));
        assert_eq!(hotel.pricing[0].discount_percent(), Some(20.0));
    }

    #[test]
    fn view_rejects_unusable_id_or_pricing() {
        assert!(HotelView::from_record(&json!({ "name": "No Id" })).is_err());
        assert!(HotelView::from_record(&json!({ "id": true })).is_err());
        assert!(HotelView::from_record(&json!({ "id": "p", "pricing": "call us" })).is_err());
        assert!(HotelView::from_record(&json!({
            "id": "q",
            "pricing": [{ "originalPrice": "100", "discountedPrice": 80 }]
        }))
        .is_err());
    }

    #[test]
    fn discount_percent_is_recomputed_from_prices() {
        assert_eq!(discount_percent(200.0, 150.0), Some(25.0));
        assert_eq!(discount_percent(100.0, 100.0), Some(0.0));
        assert_eq!(discount_percent(0.0, 0.0), None);
        assert_eq!(discount_percent(-10.0, 5.0), None);
    }

    #[test]
    fn summary_copies_raw_values_and_omits_missing_fields() {
        let record = json!({
            "id": "a",
            "name": "Alpha",
            "images": ["a.jpg"],
            "pricing": [{ "originalPrice": 100, "discountedPrice": 80, "roomType": "Twin" }]
        });
        let summary = BestOfferSummary::from_offer(&record, &view(&record), 0);
        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "a",
                "name": "Alpha",
                "originalPrice": 100,
                "discountedPrice": 80,
                "roomType": "Twin",
                "image": "a.jpg"
            })
        );
        assert_eq!(summary.discount_percent(), Some(20.0));
    }
}
