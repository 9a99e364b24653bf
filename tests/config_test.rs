use clap::Parser;
use stecker::config::{MachineArgs, SearchParams};
use stecker::error::SteckerError;
use stecker::machine::{MachineConfig, RotorSetting};
use stecker::optimizer::SearchOptions;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    machine: MachineArgs,

    #[command(flatten)]
    search: SearchParams,
}

fn parse(args: &[&str]) -> TestCli {
    TestCli::try_parse_from(std::iter::once("stecker").chain(args.iter().copied())).unwrap()
}

fn settings(machine: &MachineConfig) -> Vec<(String, u8, char)> {
    machine
        .rotors
        .iter()
        .map(|r| (r.rotor.clone(), r.ring, r.position))
        .collect()
}

#[test]
fn test_defaults_are_the_m4_setting() {
    let cli = parse(&[]);
    let machine = cli.machine.resolve().unwrap();
    assert_eq!(machine, MachineConfig::default());
    assert_eq!(
        settings(&machine),
        vec![
            ("Gamma".to_string(), 1, 'D'),
            ("VI".to_string(), 1, 'A'),
            ("IV".to_string(), 1, 'B'),
            ("III".to_string(), 16, 'Q'),
        ]
    );
    assert_eq!(machine.reflector, "C-Thin");

    let opts = SearchOptions::from(&cli.search);
    assert_eq!(opts.max_rounds, 10);
    assert!((opts.improvement_threshold - 0.05).abs() < 1e-12);
    assert!(!opts.parallel);
    assert_eq!(opts.max_time, None);
}

#[test]
fn test_new_rotors_get_neutral_settings() {
    let machine = parse(&["--rotors", "I II III", "--reflector", "B"])
        .machine
        .resolve()
        .unwrap();
    assert_eq!(
        settings(&machine),
        vec![
            ("I".to_string(), 1, 'A'),
            ("II".to_string(), 1, 'A'),
            ("III".to_string(), 1, 'A'),
        ]
    );
    assert_eq!(machine.reflector, "B");
}

#[test]
fn test_explicit_settings() {
    let machine = parse(&[
        "--rotors", "I II III", "--rings", "2 2 2", "--position", "a d u", "--reflector", "B",
    ])
    .machine
    .resolve()
    .unwrap();
    assert_eq!(
        settings(&machine),
        vec![
            ("I".to_string(), 2, 'A'),
            ("II".to_string(), 2, 'D'),
            ("III".to_string(), 2, 'U'),
        ]
    );
}

#[test]
fn test_count_mismatch_is_rejected() {
    let err = parse(&["--rotors", "I II III", "--rings", "1 2"])
        .machine
        .resolve()
        .unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)));

    let err = parse(&["--position", "AB"]).machine.resolve().unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)));
}

#[test]
fn test_list_flags_take_one_value() {
    let cli = TestCli::try_parse_from(["stecker", "--rotors", "I II III", "--rings", "3 3 3", "extra"]);
    assert!(cli.is_err());

    let cli = parse(&["--rotors", "I II III", "--position", "Q", "--position", "E V"]);
    assert_eq!(cli.machine.rotors, ["I", "II", "III"]);
    assert_eq!(cli.machine.position, ["Q", "E", "V"]);
}

#[test]
fn test_search_flags() {
    let cli = parse(&["--rounds", "4", "--threshold", "0.06", "--parallel", "-T", "30"]);
    let opts = SearchOptions::from(&cli.search);
    assert_eq!(opts.max_rounds, 4);
    assert!((opts.improvement_threshold - 0.06).abs() < 1e-12);
    assert!(opts.parallel);
    assert_eq!(opts.max_time, Some(Duration::from_secs(30)));
}

#[test]
fn test_machine_file_round_trip_and_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("machine.json");

    let stored = MachineConfig {
        rotors: vec![
            RotorSetting::new("V", 3, 'K'),
            RotorSetting::new("I", 5, 'E'),
            RotorSetting::new("VII", 9, 'Y'),
        ],
        reflector: "A".to_string(),
    };
    stored.save_to_file(&path).unwrap();
    assert_eq!(MachineConfig::load_from_file(&path).unwrap(), stored);

    let path_arg = path.to_str().unwrap();
    let from_file = parse(&["--machine", path_arg]).machine.resolve().unwrap();
    assert_eq!(from_file, stored);

    let overridden = parse(&["--machine", path_arg, "--position", "A A A", "--reflector", "C"])
        .machine
        .resolve()
        .unwrap();
    assert_eq!(
        settings(&overridden),
        vec![
            ("V".to_string(), 3, 'A'),
            ("I".to_string(), 5, 'A'),
            ("VII".to_string(), 9, 'A'),
        ]
    );
    assert_eq!(overridden.reflector, "C");
}

#[test]
fn test_broken_machine_files() {
    let dir = tempdir().unwrap();
    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "{ not json").unwrap();

    let args = MachineArgs {
        machine: Some(garbage),
        ..MachineArgs::default()
    };
    assert!(matches!(args.resolve(), Err(SteckerError::Json(_))));

    let missing = MachineArgs {
        machine: Some(dir.path().join("missing.json")),
        ..MachineArgs::default()
    };
    assert!(matches!(missing.resolve(), Err(SteckerError::Io(_))));
}
