//! Trees loaded from seed files.

use std::fs;

use talent_calc::config::TreeConfig;
use talent_calc::{seed, TalentCalculator, TalentError, TreeSeed};
use tempfile::tempdir;

const THREE_PATHS: &str = r#"
total_points = 3

[[paths]]
id = "fire"
name = "Fire"
talents = [{ id = 1, icon = "ember" }, { id = 2, icon = "blaze" }]

[[paths]]
id = "frost"
name = "Frost"
talents = [{ id = 3, icon = "chill" }]

[[paths]]
id = "storm"
name = "Storm"
talents = [{ id = 4, icon = "gust" }, { id = 5, icon = "bolt" }, { id = 6, icon = "tempest" }]
"#;

#[test]
fn scenario_seed_file_with_points_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("elements.toml");
    fs::write(&path, THREE_PATHS).unwrap();

    let config = TreeConfig {
        seed: Some(path),
        total_points: Some(4),
    };
    let tree = seed::resolve(&config).unwrap().into_tree().unwrap();
    assert_eq!(tree.paths().len(), 3);
    assert_eq!(tree.budget().total(), 4);

    let mut calc = TalentCalculator::new(tree);
    calc.select("storm", 4).unwrap();
    calc.select("storm", 5).unwrap();
    calc.select("frost", 3).unwrap();
    calc.select("fire", 1).unwrap();
    assert!(matches!(
        calc.select("storm", 6),
        Err(TalentError::BudgetExhausted { spent: 4, total: 4 })
    ));
}

#[test]
fn scenario_talent_ids_are_scoped_to_their_path() {
    let seed = TreeSeed::parse(
        THREE_PATHS,
        talent_calc::seed::SeedFormat::Toml,
        std::path::Path::new("elements.toml"),
    )
    .unwrap();
    let mut calc = TalentCalculator::new(seed.into_tree().unwrap());

    assert!(matches!(
        calc.select("fire", 3),
        Err(TalentError::UnknownTalent { .. })
    ));
}
