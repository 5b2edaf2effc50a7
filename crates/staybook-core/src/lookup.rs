use serde_json::Value;
use thiserror::Error;

use crate::hotels::HotelId;
use crate::store::HotelStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("hotel '{id}' not found")]
    NotFound { id: String },
}

/// Resolve one hotel by exact id. The first record wins when ids repeat.
///
/// String ids compare verbatim: no trimming, case folding or prefix matching.
/// A numeric id matches only its canonical JSON form, so `"12"` finds
/// `"id": 12` but `"012"` and `"12.0"` do not. This is looser than comparing
/// a string path segment to a number with strict equality, which would never
/// match, and lets documents that number their hotels stay reachable by URL.
/// Records without a string or numeric id are never matched.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when no record has this id.
pub fn find_by_id<'a>(store: &'a HotelStore, id: &str) -> Result<&'a Value, LookupError> {
    store
        .hotels()
        .iter()
        .find(|hotel| HotelId::of(hotel).is_some_and(|hotel_id| hotel_id.matches(id)))
        .ok_or_else(|| LookupError::NotFound { id: id.to_string() })
}

/// Recommended hotels exactly as stored.
#[must_use]
pub fn recommended(store: &HotelStore) -> &[Value] {
    store.recommended()
}

#[must_use]
pub fn all_hotels(store: &HotelStore) -> &[Value] {
    store.hotels()
}
