//! Tests for CLI argument parsing.

use clap::Parser;

use super::cli::{Cli, Command};
use super::validated::env_var;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("paygate").chain(args.iter().copied())).unwrap()
}

mod subcommands {
    use super::*;

    #[test]
    fn create_parses_all_transaction_fields() {
        let cli = parse(&[
            "create",
            "--amount",
            "9.99",
            "--reference",
            "order-42",
            "--email",
            "customer@example.com",
            "--return-url",
            "https://shop.example/return",
            "--cancel-url",
            "https://shop.example/cancel",
            "--notification-url",
            "https://shop.example/notify",
        ]);

        match cli.command {
            Command::Create {
                amount,
                reference,
                email,
                ..
            } => {
                assert!((amount - 9.99).abs() < f64::EPSILON);
                assert_eq!(reference, "order-42");
                assert_eq!(email, "customer@example.com");
            }
            other => panic!("expected create command, got {other:?}"),
        }
    }

    #[test]
    fn status_takes_positional_id() {
        let cli = parse(&["status", "abc123"]);
        assert!(matches!(cli.command, Command::Status { id } if id == "abc123"));
    }

    #[test]
    fn verify_takes_positional_id() {
        let cli = parse(&["verify", "abc123"]);
        assert!(matches!(cli.command, Command::Verify { id } if id == "abc123"));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["paygate"]).is_err());
    }
}

mod global_flags {
    use super::*;

    #[test]
    fn route_flags_parse_after_subcommand() {
        let cli = parse(&[
            "status",
            "abc123",
            "--api-url",
            "https://gateway.example/v1",
            "--store-id",
            "store-1",
            "--secret-key",
            "secret",
        ]);

        assert_eq!(cli.api_url.as_deref(), Some("https://gateway.example/v1"));
        assert_eq!(cli.store_id.as_deref(), Some("store-1"));
        assert_eq!(cli.secret_key.as_deref(), Some("secret"));
    }

    #[test]
    fn poll_flags_parse() {
        let cli = parse(&["verify", "abc123", "--poll-attempts", "5", "--poll-delay", "1"]);

        assert_eq!(cli.poll_attempts, Some(5));
        assert_eq!(cli.poll_delay, Some(1));
    }

    #[test]
    fn verbose_defaults_to_off() {
        let cli = parse(&["status", "abc123"]);
        assert!(!cli.verbose);

        let verbose = parse(&["status", "abc123", "--verbose"]);
        assert!(verbose.verbose);
    }
}

mod overrides {
    use super::*;

    #[test]
    fn override_for_maps_variables_to_flags() {
        let cli = parse(&[
            "status",
            "abc123",
            "--relay-url",
            "https://relay.example/hook",
        ]);

        assert_eq!(
            cli.override_for(env_var::RELAY_URL).as_deref(),
            Some("https://relay.example/hook")
        );
        assert_eq!(cli.override_for(env_var::API_URL), None);
        assert_eq!(cli.override_for("UNRELATED"), None);
    }
}
