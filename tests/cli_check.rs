mod common;

use common::{TestEnv, BROKEN_CHAIN_SEED, CONFIG_WITH_TYPO, TINY_JSON_SEED};

#[test]
fn test_check_builtin_seed() {
    let env = TestEnv::new();

    let result = env.run(&["check"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("[OK] Seed OK: <builtin>"));
    assert!(result
        .stdout
        .contains("2 paths, 8 talents, 6 total points"));
}

#[test]
fn test_check_json_seed_from_flag() {
    let env = TestEnv::new();
    env.write_project_file("trees/arcane.json", TINY_JSON_SEED);

    let result = env.run(&["check", "--json", "--seed", "trees/arcane.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.json_lines();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "check");
    assert_eq!(events[0]["valid"], true);
    assert_eq!(events[0]["paths"], 1);
    assert_eq!(events[0]["talents"], 3);
    assert_eq!(events[0]["total_points"], 2);
}

#[test]
fn test_check_rejects_broken_chain() {
    let env = TestEnv::new();
    env.write_project_file("broken.toml", BROKEN_CHAIN_SEED);

    let result = env.run(&["check", "--seed", "broken.toml"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("invalid talent tree seed"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("FIX:"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_check_missing_seed_file_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["check", "--json", "--seed", "nope.toml"]);

    assert!(!result.success);
    let events = result.json_lines();
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["kind"], "io");
}

#[test]
fn test_project_config_applies_and_warns_on_unknown_keys() {
    let env = TestEnv::new();
    env.write_project_file("talent-calc.toml", CONFIG_WITH_TYPO);

    let result = env.run(&["check"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("4 total points"), "{}", result.stdout);
    assert!(
        result.stderr.contains("Unknown config key 'colour'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("Did you mean 'color'?"));
    assert_eq!(
        result.stderr.matches("colour").count(),
        1,
        "warning printed more than once:\n{}",
        result.stderr
    );
}

#[test]
fn test_config_seed_resolves_relative_to_config_file() {
    let env = TestEnv::new();
    env.write_project_file("trees/arcane.json", TINY_JSON_SEED);
    env.write_project_file("talent-calc.toml", "[tree]\nseed = \"trees/arcane.json\"\n");

    let result = env.run(&["show"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("0 / 2 Points Spent"));
    assert!(result
        .stdout
        .contains("Arcane   [ ] spark --- [ ] nova --- [ ] rift"));
}

#[test]
fn test_precedence_flag_over_env_over_project_over_user() {
    let env = TestEnv::new();
    env.write_user_config("[tree]\ntotal_points = 3\n");

    let user_only = env.run(&["check", "--json"]);
    assert_eq!(user_only.json_lines()[0]["total_points"], 3);

    env.write_project_file("talent-calc.toml", "[tree]\ntotal_points = 4\n");
    let project = env.run(&["check", "--json"]);
    assert_eq!(project.json_lines()[0]["total_points"], 4);

    let with_env = env.run_with_env(&["check", "--json"], &[("TALENT_CALC_POINTS", "5")]);
    assert_eq!(with_env.json_lines()[0]["total_points"], 5);

    let with_flag = env.run_with_env(
        &["check", "--json", "--points", "7"],
        &[("TALENT_CALC_POINTS", "5")],
    );
    assert_eq!(with_flag.json_lines()[0]["total_points"], 7);
}

#[test]
fn test_missing_seed_file_is_named_in_error() {
    let env = TestEnv::new();

    let result = env.run(&["check", "--seed", "trees/my_tree.toml"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("Error: failed to read seed trees/my_tree.toml"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("FIX: Check that trees/my_tree.toml exists"));
    assert_eq!(result.stderr.matches("caused by:").count(), 1);
}
