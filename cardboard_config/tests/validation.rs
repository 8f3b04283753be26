use cardboard_config::load_toml;
use rstest::rstest;

#[test]
fn empty_config_uses_defaults_and_validates() {
    let cfg = load_toml("").expect("parse TOML");
    cfg.validate().expect("defaults should pass");
    assert!((cfg.magnet.max_window_secs - 0.1).abs() < 1e-6);
    assert!((cfg.magnet.absent_magnitude - 150.0).abs() < 1e-6);
    assert!((cfg.trigger.click_speed_secs - 0.4).abs() < 1e-9);
    assert!(cfg.trigger.vibrate_on_click);
    assert!(!cfg.trigger.vibrate_on_down);
    assert_eq!(cfg.trigger.key, "space");
    assert_eq!(cfg.debug.status_every_ticks, 0);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let toml = r#"
[magnet]
ratio_max = 0.3

[trigger]
key = "enter"
vibrate_on_down = true
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert!((cfg.magnet.ratio_max - 0.3).abs() < 1e-6);
    assert!((cfg.magnet.ratio_min - 0.03).abs() < 1e-6);
    assert_eq!(cfg.trigger.key, "enter");
    assert!(cfg.trigger.vibrate_on_down);
    assert!(cfg.trigger.vibrate_on_click);
}

#[rstest]
#[case("[magnet]\nmax_window_secs = 0.0", "max_window_secs must be > 0")]
#[case("[magnet]\nmax_window_secs = 60.0", "unreasonably large")]
#[case("[magnet]\nratio_min = -0.1", "ratio_min must be >= 0")]
#[case("[magnet]\nratio_min = 0.2\nratio_max = 0.1", "ratio_min must be < magnet.ratio_max")]
#[case("[magnet]\nratio_max = 1.5", "ratio_max must be <= 1.0")]
#[case("[magnet]\nabsent_magnitude = -1.0", "absent_magnitude must be >= 0")]
#[case("[magnet]\nstable_ratio = -0.001", "stable_ratio must be >= 0")]
#[case("[magnet]\nstable_delta = -2.0", "stable_delta must be >= 0")]
#[case("[trigger]\nclick_speed_secs = -0.4", "click_speed_secs must be >= 0")]
#[case("[trigger]\nkey = \"  \"", "key must not be empty")]
#[case("[logging]\nrotation = \"weekly\"", "rotation must be one of")]
fn rejects_out_of_range_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject");
    assert!(
        format!("{err}").contains(needle),
        "expected '{needle}' in '{err}'"
    );
}

#[test]
fn unknown_types_fail_to_parse() {
    assert!(load_toml("[magnet]\nratio_min = \"small\"").is_err());
}
