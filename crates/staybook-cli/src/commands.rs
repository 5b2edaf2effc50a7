//! Subcommand handlers. Each loads the document once and prints JSON to stdout.

use serde::Serialize;
use staybook_core::{EmptyPricingPolicy, IntegrityReport, StoreSource};

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_hotel(source: &StoreSource, id: &str) -> anyhow::Result<()> {
    let store = source.load().await?;
    let hotel = staybook_core::find_by_id(&store, id)?;
    print_json(hotel)
}

pub(crate) async fn run_recommended(source: &StoreSource) -> anyhow::Result<()> {
    let store = source.load().await?;
    print_json(staybook_core::recommended(&store))
}

pub(crate) async fn run_best_offers(
    source: &StoreSource,
    policy: EmptyPricingPolicy,
) -> anyhow::Result<()> {
    let store = source.load().await?;
    let offers = staybook_core::rank_best_offers(&store, policy)?;
    print_json(&offers)
}

/// Print the integrity report; fails when the document has any problem.
pub(crate) async fn run_validate(source: &StoreSource) -> anyhow::Result<()> {
    let store = source.load().await?;
    let report = IntegrityReport::check(&store);
    print_json(&report)?;

    if report.is_clean() {
        tracing::info!(hotels = report.hotel_count, "hotel document is clean");
        return Ok(());
    }

    anyhow::bail!(
        "hotel document has problems: {} duplicate ids, {} unreadable hotels, \
         {} hotels without pricing, {} invalid list prices, {} prices above list",
        report.duplicate_ids.len(),
        report.unreadable.len(),
        report.empty_pricing.len(),
        report.invalid_list_price.len(),
        report.above_list_price.len()
    )
}
