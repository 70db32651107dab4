use proptest::prelude::*;
use serde_json::json;
use sqlgen_config::config::{ConfigError, Format, Settings, combine, parse_config};

fn parse(value: &serde_json::Value) -> Result<Settings, ConfigError> {
    let body = serde_json::to_vec(value).expect("serialize");
    parse_config(&body, Format::Json, &mut Vec::<String>::new())
}

fn arb_engine() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("postgresql")), Just(Some("mysql"))]
}

fn arb_go_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("string".to_string()),
        Just("int64".to_string()),
        Just("github.com/segmentio/ksuid.KSUID".to_string()),
        Just("*github.com/google/uuid.UUID".to_string()),
    ]
}

fn arb_override() -> impl Strategy<Value = serde_json::Value> {
    (arb_go_type(), "[a-z]{1,8}", any::<bool>()).prop_map(|(go_type, db_type, nullable)| {
        json!({"go_type": go_type, "db_type": db_type, "null": nullable})
    })
}

#[test]
fn documented_examples_hold() {
    let settings = parse(&json!({
        "version": "1",
        "packages": [{
            "path": "internal/gen",
            "overrides": [
                {"go_type": "string", "column": "accounts.id"},
                {"go_type": "github.com/segmentio/ksuid.KSUID", "column": "app.accounts.id"},
                {"go_type": "*github.com/segmentio/ksuid.KSUID", "db_type": "uuid"}
            ]
        }]
    }))
    .expect("valid");

    let pkg = &settings.packages[0];
    assert_eq!(pkg.name, "gen");

    let first = &pkg.overrides[0];
    assert!(first.is_builtin());
    assert_eq!(first.go_package(), "");
    assert_eq!(first.go_type_name(), "string");
    let table = first.table().expect("table");
    assert_eq!((table.schema.as_str(), table.name.as_str()), ("public", "accounts"));
    assert_eq!(first.column_name(), Some("id"));

    let second = &pkg.overrides[1];
    assert_eq!(second.table().expect("table").schema, "app");
    assert_eq!(second.go_package(), "github.com/segmentio/ksuid");
    assert_eq!(second.go_type_name(), "KSUID");
    assert!(!second.is_builtin());

    let third = &pkg.overrides[2];
    assert!(third.go_type.is_pointer());
    assert_eq!(third.go_type_name(), "*KSUID");
    assert_eq!(third.go_package(), "github.com/segmentio/ksuid");
}

#[test]
fn column_with_wrong_segment_count_is_rejected() {
    for column in ["id", "a.b.c.d.e"] {
        let err = parse(&json!({
            "version": "1",
            "packages": [{"path": "db", "overrides": [{"go_type": "string", "column": column}]}]
        }))
        .expect_err("invalid column");
        assert!(matches!(err, ConfigError::InvalidColumnSpecifier(_)), "{}", column);
    }
}

#[test]
fn engine_requirement_follows_engine_count() {
    let mut doc = json!({
        "version": "1",
        "packages": [
            {"path": "pg", "engine": "postgresql"},
            {"path": "my", "engine": "mysql"}
        ],
        "overrides": [{"go_type": "string", "db_type": "uuid"}]
    });
    assert!(matches!(
        parse(&doc),
        Err(ConfigError::EngineRequiredForGlobalOverride { index: 0 })
    ));

    doc["overrides"][0]["engine"] = json!("mysql");
    assert!(parse(&doc).is_ok());
}

proptest! {
    #[test]
    fn missing_version_always_fails(packages in prop::collection::vec("[a-z]{1,6}", 0..3)) {
        let packages: Vec<_> = packages.iter().map(|path| json!({"path": path})).collect();
        let err = parse(&json!({"packages": packages})).expect_err("no version");
        let missing = matches!(err, ConfigError::MissingVersion);
        prop_assert!(missing);
    }

    #[test]
    fn empty_package_list_always_fails(overrides in prop::collection::vec(arb_override(), 0..3)) {
        let err = parse(&json!({"version": "1", "packages": [], "overrides": overrides}))
            .expect_err("no packages");
        let none = matches!(err, ConfigError::NoPackages);
        prop_assert!(none, "unexpected error: {}", err);
    }

    #[test]
    fn empty_path_always_fails(
        leading in prop::collection::vec("[a-z]{1,6}", 0..3),
        name in "[a-z]{0,6}",
    ) {
        let mut packages: Vec<_> = leading.iter().map(|path| json!({"path": path})).collect();
        packages.push(json!({"name": name, "path": ""}));
        let err = parse(&json!({"version": "1", "packages": packages})).expect_err("no path");
        let at_last = matches!(err, ConfigError::NoPackagePath { index } if index == leading.len());
        prop_assert!(at_last, "unexpected error: {}", err);
    }

    #[test]
    fn conflicting_targets_always_fail(go_type in arb_go_type(), db_type in "[a-z]{1,6}") {
        let err = parse(&json!({
            "version": "1",
            "packages": [{"path": "db", "overrides": [
                {"go_type": go_type, "db_type": db_type, "column": "authors.id"}
            ]}]
        }))
        .expect_err("conflict");
        prop_assert!(
            matches!(err, ConfigError::ConflictingOverrideFields { .. }),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn override_without_target_always_fails(go_type in arb_go_type(), nullable in any::<bool>()) {
        let err = parse(&json!({
            "version": "1",
            "packages": [{"path": "db"}],
            "overrides": [{"go_type": go_type, "null": nullable}]
        }))
        .expect_err("incomplete");
        let incomplete = matches!(err, ConfigError::IncompleteOverride);
        prop_assert!(incomplete, "unexpected error: {}", err);
    }

    #[test]
    fn multi_engine_check_counts_effective_engines(
        engines in prop::collection::vec(arb_engine(), 1..5),
        scoped in any::<bool>(),
    ) {
        let packages: Vec<_> = engines
            .iter()
            .enumerate()
            .map(|(idx, engine)| match engine {
                Some(engine) => json!({"path": format!("gen/p{}", idx), "engine": engine}),
                None => json!({"path": format!("gen/p{}", idx)}),
            })
            .collect();
        let oride = if scoped {
            json!({"go_type": "string", "db_type": "uuid", "engine": "postgresql"})
        } else {
            json!({"go_type": "string", "db_type": "uuid"})
        };
        let result = parse(&json!({"version": "1", "packages": packages, "overrides": [oride]}));

        let uses_mysql = engines.contains(&Some("mysql"));
        let uses_postgres = engines.iter().any(|engine| *engine != Some("mysql"));
        if uses_mysql && uses_postgres && !scoped {
            let required = matches!(
                result,
                Err(ConfigError::EngineRequiredForGlobalOverride { .. })
            );
            prop_assert!(required);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn combine_preserves_order_and_length(
        global in prop::collection::vec(arb_override(), 0..4),
        local in prop::collection::vec(arb_override(), 0..4),
    ) {
        let settings = parse(&json!({
            "version": "1",
            "packages": [{"path": "db", "overrides": local}],
            "overrides": global
        }))
        .expect("valid");
        let pkg = &settings.packages[0];
        let combined = combine(&settings, pkg);

        prop_assert_eq!(combined.overrides.len(), settings.overrides.len() + pkg.overrides.len());
        let expected = settings.overrides.iter().chain(pkg.overrides.iter());
        for (got, want) in combined.overrides.iter().zip(expected) {
            prop_assert!(std::ptr::eq(*got, want));
        }
    }
}
