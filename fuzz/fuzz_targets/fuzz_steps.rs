#![no_main]

use libfuzzer_sys::fuzz_target;
use talent_calc::{TalentCalculator, TalentCommand, TreeSeed};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tree) = TreeSeed::builtin().and_then(TreeSeed::into_tree) else {
        return;
    };

    // Any step sequence keeps the budget in line with the enabled talents
    let mut calc = TalentCalculator::new(tree);
    for line in text.lines() {
        if let Ok(command) = line.parse::<TalentCommand>() {
            let _ = calc.apply(&command);
        }
        let budget = calc.tree().budget();
        assert_eq!(budget.spent() as usize, calc.tree().enabled_count());
        assert!(budget.spent() <= budget.total());
    }
});
