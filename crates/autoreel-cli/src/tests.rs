use super::*;

#[test]
fn parses_db_ping_command() {
    let cli =
        Cli::try_parse_from(["autoreel-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["autoreel-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_seed_with_path() {
    let cli = Cli::try_parse_from(["autoreel-cli", "db", "seed", "--path", "demo.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { path: Some(ref p) }
        }) if p.as_os_str() == "demo.yaml"
    ));
}

#[test]
fn parses_db_seed_without_path() {
    let cli =
        Cli::try_parse_from(["autoreel-cli", "db", "seed"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { path: None }
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["autoreel-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn reels_status_filter_parses() {
    let cli = Cli::try_parse_from(["autoreel-cli", "reels", "--status", "posted"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Reels {
            status: Some(ReelStatus::Posted)
        })
    ));

    let cli = Cli::try_parse_from(["autoreel-cli", "reels"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Reels { status: None })));
}

#[test]
fn reels_rejects_unknown_status() {
    let result = Cli::try_parse_from(["autoreel-cli", "reels", "--status", "archived"]);
    assert!(result.is_err());
}

#[test]
fn analytics_range_defaults_to_seven_days() {
    let cli = Cli::try_parse_from(["autoreel-cli", "analytics"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analytics {
            range: TimeRange::SevenDays
        })
    ));

    let cli = Cli::try_parse_from(["autoreel-cli", "analytics", "--range", "1y"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analytics {
            range: TimeRange::OneYear
        })
    ));
}

#[test]
fn logs_defaults_and_overrides() {
    let cli = Cli::try_parse_from(["autoreel-cli", "logs"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Logs {
            level: None,
            limit: 50
        })
    ));

    let cli =
        Cli::try_parse_from(["autoreel-cli", "logs", "--level", "warn", "--limit", "10"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Logs {
            level: Some(ref l),
            limit: 10
        }) if l == "warn"
    ));
}

#[test]
fn open_collects_query_words() {
    let cli = Cli::try_parse_from(["autoreel-cli", "open", "logs", "do", "sistema"]).unwrap();
    match cli.command {
        Some(Commands::Open { query, skip }) => {
            assert_eq!(query.join(" "), "logs do sistema");
            assert_eq!(skip, 0);
        }
        other => panic!("expected open command, got {other:?}"),
    }
}

#[test]
fn page_commands_parse() {
    for (arg, expected) in [
        ("home", "Home"),
        ("dashboard", "Dashboard"),
        ("profiles", "Profiles"),
        ("settings", "Settings"),
    ] {
        let cli = Cli::try_parse_from(["autoreel-cli", arg]).unwrap();
        assert_eq!(format!("{:?}", cli.command), format!("Some({expected})"));
    }
}
