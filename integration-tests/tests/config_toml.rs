use contrail_sac::SacConfig;
use contrail_solve::equation::newton;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    sac: SacConfig,
}

#[test]
fn empty_table_uses_defaults() {
    let settings: Settings = toml::from_str("[sac]").unwrap();
    assert_eq!(settings.sac, SacConfig::default());
}

#[test]
fn partial_table_keeps_remaining_defaults() {
    let settings: Settings = toml::from_str(
        r#"
        [sac]
        iterate_critical = false

        [sac.newton]
        max_iters = 50
        "#,
    )
    .unwrap();

    assert_eq!(
        settings.sac,
        SacConfig {
            iterate_threshold: true,
            iterate_critical: false,
            newton: newton::Config {
                max_iters: 50,
                x_abs_tol: 1e-3,
            },
        }
    );
}

#[test]
fn config_round_trips_through_toml() {
    let config = SacConfig {
        iterate_threshold: false,
        newton: newton::Config {
            max_iters: 5,
            x_abs_tol: 1e-6,
        },
        ..SacConfig::default()
    };

    let text = toml::to_string(&config).unwrap();
    let parsed: SacConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn unknown_types_are_rejected() {
    let result: Result<Settings, _> = toml::from_str("[sac]\niterate_threshold = \"yes\"");
    assert!(result.is_err());
}
