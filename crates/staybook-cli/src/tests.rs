use super::*;

#[test]
fn parses_hotel_command() {
    let cli = Cli::try_parse_from(["staybook-cli", "hotel", "marriott_marquis_sf"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Hotel { ref id } if id == "marriott_marquis_sf"
    ));
    assert!(cli.db.is_none());
}

#[test]
fn parses_recommended_command() {
    let cli =
        Cli::try_parse_from(["staybook-cli", "recommended"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Recommended));
}

#[test]
fn best_offers_defaults_to_configured_policy() {
    let cli =
        Cli::try_parse_from(["staybook-cli", "best-offers"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::BestOffers {
            reject_empty_pricing: false
        }
    ));
}

#[test]
fn best_offers_accepts_reject_flag() {
    let cli = Cli::try_parse_from(["staybook-cli", "best-offers", "--reject-empty-pricing"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::BestOffers {
            reject_empty_pricing: true
        }
    ));
}

#[test]
fn db_flag_is_global() {
    let cli = Cli::try_parse_from(["staybook-cli", "validate", "--db", "/tmp/booking-db.json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Validate));
    assert_eq!(cli.db, Some(PathBuf::from("/tmp/booking-db.json")));
}

#[test]
fn hotel_requires_id() {
    assert!(Cli::try_parse_from(["staybook-cli", "hotel"]).is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["staybook-cli"]).is_err());
}
