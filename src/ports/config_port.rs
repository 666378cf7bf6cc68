//! Configuration access port trait.

use crate::domain::configuration::{Configuration, parse_bool};

/// Keyed access to configuration values with caller-supplied defaults.
///
/// Unlike the total accessors on [`Field`](crate::Field), these distinguish
/// an absent or unparsable value by falling back to `default`.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}

impl ConfigPort for Configuration {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        let section = self.section(section);
        section
            .has_field(key)
            .then(|| section.field(key).as_string())
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.section(section)
            .field(key)
            .as_str()
            .parse()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.section(section)
            .field(key)
            .as_str()
            .parse()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        parse_bool(self.section(section).field(key).as_str()).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::parse_str;

    fn config() -> Configuration {
        parse_str("[person]\nName=\nAge=18\nWeight=64.5\nMarried=true\nNick=abc\n").unwrap()
    }

    #[test]
    fn get_string_distinguishes_empty_from_missing() {
        let config = config();
        assert_eq!(config.get_string("person", "Name"), Some(String::new()));
        assert_eq!(config.get_string("person", "Missing"), None);
        assert_eq!(config.get_string("db", "Name"), None);
    }

    #[test]
    fn get_int_falls_back_to_default() {
        let config = config();
        assert_eq!(config.get_int("person", "Age", 0), 18);
        assert_eq!(config.get_int("person", "Missing", 42), 42);
        assert_eq!(config.get_int("person", "Nick", 42), 42);
    }

    #[test]
    fn get_double_falls_back_to_default() {
        let config = config();
        assert_eq!(config.get_double("person", "Weight", 0.0), 64.5);
        assert_eq!(config.get_double("person", "Nick", 99.9), 99.9);
    }

    #[test]
    fn get_bool_falls_back_to_default() {
        let config = config();
        assert!(config.get_bool("person", "Married", false));
        assert!(config.get_bool("person", "Missing", true));
        assert!(!config.get_bool("person", "Nick", false));
    }
}
