//! Walking a chain forward and back on the built-in tree.

use talent_calc::{TalentCalculator, TalentError, TreeSeed};

fn calculator() -> TalentCalculator {
    TalentCalculator::new(TreeSeed::builtin().unwrap().into_tree().unwrap())
}

fn spent(calc: &TalentCalculator) -> u32 {
    calc.tree().budget().spent()
}

#[test]
fn scenario_select_three_then_unwind() {
    let mut calc = calculator();

    calc.select("path1", 1).unwrap();
    assert_eq!(spent(&calc), 1);
    calc.select("path1", 2).unwrap();
    assert_eq!(spent(&calc), 2);
    calc.select("path1", 3).unwrap();
    assert_eq!(spent(&calc), 3);

    let err = calc.deselect("path1", 2).unwrap_err();
    assert!(matches!(err, TalentError::SuccessorStillActive { .. }));
    assert_eq!(spent(&calc), 3);

    calc.deselect("path1", 3).unwrap();
    assert_eq!(spent(&calc), 2);
    calc.deselect("path1", 2).unwrap();
    assert_eq!(spent(&calc), 1);
}

#[test]
fn scenario_full_budget_blocks_other_path() {
    let mut calc = calculator();
    for talent in 1..=4 {
        calc.select("path1", talent).unwrap();
    }
    calc.select("path2", 5).unwrap();
    calc.select("path2", 6).unwrap();
    assert_eq!(spent(&calc), 6);

    // Freeing a point on one path makes room on the other.
    calc.deselect("path1", 4).unwrap();
    calc.select("path2", 7).unwrap();
    assert_eq!(spent(&calc), 6);

    let err = calc.select("path1", 4).unwrap_err();
    assert!(matches!(err, TalentError::BudgetExhausted { spent: 6, total: 6 }));
}

#[test]
fn scenario_spent_six_rejects_fresh_select() {
    let mut calc = calculator();
    for talent in 1..=4 {
        calc.select("path1", talent).unwrap();
    }
    calc.select("path2", 5).unwrap();
    calc.select("path2", 6).unwrap();

    // Already enabled, yet the full budget is reported first.
    let err = calc.select("path2", 5).unwrap_err();
    assert!(matches!(err, TalentError::BudgetExhausted { .. }));
    assert_eq!(spent(&calc), 6);
}

#[test]
fn scenario_nothing_spent_rejects_deselect() {
    let mut calc = calculator();
    let err = calc.deselect("path2", 8).unwrap_err();
    assert!(matches!(err, TalentError::NoPointsSpent));
}
