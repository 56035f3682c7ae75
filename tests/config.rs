use clap::Parser;

use img2ico::cli::Cli;
use img2ico::config::{Config, Options};
use img2ico::error::IconError;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("img2ico").chain(args.iter().copied())).unwrap()
}

#[test]
fn empty_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img2ico.toml");
    std::fs::write(&path, "").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.round.enabled);
    assert_eq!(config.round.rate, 5);
    assert!(config.round.smooth);
    assert!(config.output.downscale);
}

#[test]
fn parse_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img2ico.toml");
    std::fs::write(
        &path,
        r#"
[round]
enabled = true
rate = 3
smooth = false

[output]
downscale = false
"#,
    )
    .unwrap();

    let options = Options::from_config(&Config::load(&path).unwrap());
    assert_eq!(
        options,
        Options {
            round: true,
            round_rate: 3,
            smooth: false,
            downscale: false,
        }
    );
}

#[test]
fn invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img2ico.toml");
    std::fs::write(&path, "[round]\nrate = \"five\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn cli_defaults() {
    let cli = parse(&["photo.png"]);
    assert_eq!(cli.input.to_str(), Some("photo.png"));
    assert!(cli.output.is_none());
    assert!(!cli.round);
    assert!(cli.round_rate.is_none());

    assert_eq!(Options::resolve(&cli, &Config::default()), Options::default());
}

#[test]
fn cli_flags_override_config() {
    let mut config = Config::default();
    config.round.rate = 8;
    config.round.smooth = true;

    let cli = parse(&[
        "photo.png",
        "-o",
        "app.ico",
        "--round",
        "--round-rate",
        "3",
        "--no-smooth",
        "--no-downscale",
    ]);
    assert_eq!(cli.output.as_deref().and_then(|p| p.to_str()), Some("app.ico"));

    let options = Options::resolve(&cli, &config);
    assert!(options.round);
    assert_eq!(options.round_rate, 3);
    assert!(!options.smooth);
    assert!(!options.downscale);
}

#[test]
fn config_values_apply_without_flags() {
    let mut config = Config::default();
    config.round.enabled = true;
    config.round.rate = 8;

    let options = Options::resolve(&parse(&["photo.png"]), &config);
    assert!(options.round);
    assert_eq!(options.round_rate, 8);
}

#[test]
fn negative_round_rate_parses_then_fails_validation() {
    let cli = parse(&["photo.png", "--round", "--round-rate", "-3"]);
    assert_eq!(cli.round_rate, Some(-3));

    let err = Options::resolve(&cli, &Config::default())
        .validate()
        .unwrap_err();
    assert!(matches!(err, IconError::InvalidArgument(_)));
}

#[test]
fn radius_is_side_divided_by_rate() {
    let options = Options::default();
    assert_eq!(options.radius_for(200).unwrap(), 40);
    assert_eq!(options.radius_for(4).unwrap(), 0);

    let circle = Options {
        round_rate: 2,
        ..Default::default()
    };
    assert_eq!(circle.radius_for(201).unwrap(), 100);
}
