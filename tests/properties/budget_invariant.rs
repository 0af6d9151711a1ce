//! Property tests for select/deselect sequences.

use proptest::prelude::*;

use talent_calc::{TalentCalculator, TalentCommand, TalentTree, TreeSeed};

fn step() -> impl Strategy<Value = TalentCommand> {
    // Talent 0 and 9 do not exist; they exercise the unknown-id path.
    let path = prop_oneof![Just("path1"), Just("path2"), Just("path3")];
    (any::<bool>(), path, 0u32..=9).prop_map(|(select, path, talent)| {
        if select {
            TalentCommand::select(path, talent)
        } else {
            TalentCommand::deselect(path, talent)
        }
    })
}

fn tree(total: u32) -> TalentTree {
    TreeSeed::builtin()
        .unwrap()
        .with_total_points(total)
        .into_tree()
        .unwrap()
}

/// Every enabled talent's predecessor is enabled too.
fn chains_are_contiguous(tree: &TalentTree) -> bool {
    tree.paths().iter().all(|path| {
        path.talents()
            .iter()
            .filter(|t| t.is_enabled())
            .all(|t| t.prev().map_or(true, |prev| path.is_enabled(prev)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: spent == enabled count and 0 <= spent <= total after every step.
    #[test]
    fn property_budget_matches_enabled_talents(
        total in 1u32..=8,
        steps in proptest::collection::vec(step(), 0..64),
    ) {
        let mut calc = TalentCalculator::new(tree(total));
        for command in &steps {
            let _ = calc.apply(command);
            let budget = calc.tree().budget();
            prop_assert_eq!(budget.spent() as usize, calc.tree().enabled_count());
            prop_assert!(budget.spent() <= budget.total());
        }
    }

    /// PROPERTY: enabled talents always form a prefix of their chain.
    #[test]
    fn property_chains_stay_contiguous(
        steps in proptest::collection::vec(step(), 0..64),
    ) {
        let mut calc = TalentCalculator::new(tree(6));
        for command in &steps {
            let _ = calc.apply(command);
            prop_assert!(chains_are_contiguous(calc.tree()));
        }
    }

    /// PROPERTY: a rejected or no-op step leaves the tree untouched.
    #[test]
    fn property_failed_steps_do_not_mutate(
        steps in proptest::collection::vec(step(), 0..64),
    ) {
        let mut calc = TalentCalculator::new(tree(6));
        for command in &steps {
            let before = calc.tree().clone();
            match calc.apply(command) {
                Ok(transition) if transition.is_applied() => {
                    prop_assert_ne!(calc.tree(), &before);
                }
                _ => prop_assert_eq!(calc.tree(), &before),
            }
        }
    }
}
