//! Reusable seeds and config snippets.

/// One short path, JSON encoded, with explicit links
pub const TINY_JSON_SEED: &str = r#"{
  "total_points": 2,
  "paths": [
    {
      "id": "arcane",
      "name": "Arcane",
      "talents": [
        { "id": 10, "icon": "spark", "post": 11 },
        { "id": 11, "icon": "nova", "prev": 10, "post": 12 },
        { "id": 12, "icon": "rift", "prev": 11 }
      ]
    }
  ]
}
"#;

/// Links disagree with list order
pub const BROKEN_CHAIN_SEED: &str = r#"
total_points = 3

[[paths]]
id = "p"
name = "Broken"
talents = [
  { id = 1, icon = "a" },
  { id = 2, icon = "b", prev = 3 },
  { id = 3, icon = "c" },
]
"#;

/// Project config with a misspelled key
pub const CONFIG_WITH_TYPO: &str = r#"
[tree]
total_points = 4

[output]
colour = "never"
"#;
