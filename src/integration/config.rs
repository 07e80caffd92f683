use rescalc_lib::config::Config;
use rescalc_lib::config::ReservationDefaults;

use crate::init;
use crate::rescalc;
use crate::save_rescalc_toml;
use crate::stderr;
use crate::stdout;

#[test]
fn test_defaults_from_working_directory() {
    let env = init();

    let conf = Config {
        buffer_fraction: Some(0.15),
        reservation: ReservationDefaults {
            partition: Some("compute".to_string()),
            accounts: Some("research".to_string()),
            ..Default::default()
        },
    };

    save_rescalc_toml(&conf, &env.temp_dir);

    let output = rescalc!(env; "--N", "2", "--S", "10", "--Q", "100", "--H", "50"; "config defaults");

    let out = stdout(&output);
    assert!(out.starts_with("Nodes R ≈ 46  (NH_eff=23.000 node-hours/job)"));
    assert!(out.contains("PartitionName=compute"));
    assert!(out.contains("Accounts=research"));
}

#[test]
fn test_flags_beat_config() {
    let env = init();

    let conf = Config {
        buffer_fraction: Some(0.15),
        reservation: ReservationDefaults {
            partition: Some("compute".to_string()),
            ..Default::default()
        },
    };

    let conf_path = save_rescalc_toml(&conf, &env.temp_dir);

    let output = rescalc!(
        env;
        "-c", conf_path.to_str().unwrap(),
        "--N", "2", "--S", "10", "--b", "0", "--R", "100", "--H", "50",
        "--partition", "gpu";
        "config override"
    );

    let out = stdout(&output);
    assert!(out.starts_with("Jobs Q ≈ 250  (NH_eff=20.000 node-hours/job)"));
    assert!(out.contains("PartitionName=gpu"));
}

#[test]
fn test_missing_explicit_config() {
    let env = init();

    let output = rescalc!(env; "-c", "absent.toml", "--N", "1", "--S", "1", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Could not read the config file"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_config() {
    let env = init();

    std::fs::write(env.temp_dir.path().join("rescalc.toml"), "nodes = 3\n").unwrap();

    let output = rescalc!(env; "--N", "1", "--S", "1", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Could not parse"));
}
