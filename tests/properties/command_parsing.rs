//! Property tests for the step syntax.

use proptest::prelude::*;

use talent_calc::{TalentCommand, TalentError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Display output always parses back to the same command.
    #[test]
    fn property_display_parses_back(
        select in any::<bool>(),
        path in "[a-z][a-z0-9_-]{0,12}",
        talent in any::<u32>(),
    ) {
        let cmd = if select {
            TalentCommand::select(path.as_str(), talent)
        } else {
            TalentCommand::deselect(path.as_str(), talent)
        };
        let parsed: TalentCommand = cmd.to_string().parse().unwrap();
        prop_assert_eq!(parsed, cmd);
    }

    /// PROPERTY: parsing never panics and only fails with InvalidCommand.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        if let Err(err) = input.parse::<TalentCommand>() {
            let is_invalid_command = matches!(err, TalentError::InvalidCommand { .. });
            prop_assert!(is_invalid_command, "unexpected error: {:?}", err);
        }
    }
}
