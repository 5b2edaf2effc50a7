//! Read-only query layer over the hotel booking document.
//!
//! The document is a single JSON file (or a remote JSON endpoint) holding a
//! `hotels` array and a `recommended_hotels` array. Every query re-reads it;
//! nothing is cached between calls.

mod app_config;
mod config;
pub mod hotels;
pub mod integrity;
pub mod lookup;
pub mod offers;
pub mod store;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_for_document, load_app_config_from_env};
pub use hotels::{BestOfferSummary, HotelId, HotelImages, HotelView, PricingOption};
pub use integrity::IntegrityReport;
pub use lookup::{all_hotels, find_by_id, recommended, LookupError};
pub use offers::{rank_best_offers, EmptyPricingPolicy, RankingError, BEST_OFFER_LIMIT};
pub use store::{HotelDocument, HotelStore, RemoteStore, StoreError, StoreSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
