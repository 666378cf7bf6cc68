//! Property tests for the parser's value and lookup guarantees.

mod common;

use common::*;
use proptest::prelude::*;

// Keys and section names must not start with a comment or header marker and
// must not contain the separator.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9=:/;#. _-]{0,24}".prop_map(|v| v.trim().to_string())
}

proptest! {
    #[test]
    fn value_is_everything_after_first_equals(
        section in key_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let input = format!("[{section}]\n{key}={value}\n");
        let cfg = inibind::parse_str(&input).unwrap();
        prop_assert_eq!(cfg.section(&section).field(&key).as_str(), value.as_str());
    }

    #[test]
    fn absent_lookups_are_empty(section in key_strategy(), key in key_strategy()) {
        let cfg = inibind::parse_str("[present]\nk=v\n").unwrap();
        prop_assume!(section != "present");
        let field = cfg.section(&section).field(&key);
        prop_assert_eq!(field.as_str(), "");
        prop_assert_eq!(field.as_i64(), 0);
        prop_assert_eq!(field.as_f64(), 0.0);
    }

    #[test]
    fn integer_values_round_trip(n in any::<i64>()) {
        let cfg = inibind::parse_str(&format!("[s]\nn={n}\n")).unwrap();
        prop_assert_eq!(cfg.section("s").field("n").as_i64(), n);
    }

    #[test]
    fn loading_same_file_twice_is_equal(
        entries in proptest::collection::btree_map(key_strategy(), value_strategy(), 0..8),
    ) {
        let mut content = String::from("[section]\n");
        for (key, value) in &entries {
            content.push_str(&format!("{key}={value}\n"));
        }
        let file = write_temp_ini(&content);
        let first = inibind::load(file.path()).unwrap();
        let second = inibind::load(file.path()).unwrap();
        prop_assert_eq!(first.section("section").len(), entries.len());
        prop_assert_eq!(first, second);
    }
}
