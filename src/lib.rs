//! inibind — minimal INI configuration loader with typed section binding.
//!
//! Parsing lives in [`domain`], the keyed access trait in [`ports`], and
//! file-backed loading in [`adapters`].
//!
//! ```
//! #[derive(Debug, Default)]
//! struct Person {
//!     name: String,
//!     age: i64,
//!     weight: f64,
//! }
//!
//! #[derive(Debug, Default)]
//! struct Settings {
//!     person: Person,
//! }
//!
//! inibind::ini_section! { Person { name: "Name", age: "Age", weight: "Weight" } }
//! inibind::ini_record! { Settings { person: "person" } }
//!
//! let config = inibind::parse_str("[person]\nName=zhangsan\nAge=18\nWeight=64.5\n").unwrap();
//! let mut settings = Settings::default();
//! inibind::bind_config(&config, &mut settings);
//! assert_eq!(settings.person.name, "zhangsan");
//! assert_eq!(settings.person.age, 18);
//! assert_eq!(settings.person.weight, 64.5);
//! ```

pub mod domain;
pub mod ports;
pub mod adapters;

pub use adapters::file_config_adapter::{FileConfigAdapter, bind, load, load_with};
pub use domain::bind::{Bind, BindSection, FieldValue, bind_config};
pub use domain::configuration::{Configuration, Field, Section};
pub use domain::error::{IniError, Result};
pub use domain::options::{DuplicateSections, OrphanFields, ParseOptions};
pub use domain::parser::{Parser, parse, parse_str};
pub use ports::config_port::ConfigPort;
