//! INI file configuration adapter.

use crate::domain::bind::{Bind, bind_config};
use crate::domain::configuration::Configuration;
use crate::domain::error::Result;
use crate::domain::options::ParseOptions;
use crate::domain::parser::Parser;
use crate::ports::config_port::ConfigPort;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct FileConfigAdapter {
    config: Configuration,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, ParseOptions::default())
    }

    pub fn from_file_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        // The reader, and with it the file handle, is dropped on every return path.
        let reader = BufReader::new(File::open(path)?);
        let config = Parser::new(options).parse(reader)?;
        tracing::debug!(path = %path.display(), sections = config.len(), "loaded configuration");
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self> {
        let config = Parser::default().parse_str(content)?;
        Ok(Self { config })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn into_inner(self) -> Configuration {
        self.config
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get_string(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config.get_int(section, key, default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config.get_double(section, key, default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config.get_bool(section, key, default)
    }
}

/// Open, parse and close the INI file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    FileConfigAdapter::from_file(path).map(FileConfigAdapter::into_inner)
}

pub fn load_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Configuration> {
    FileConfigAdapter::from_file_with(path, options).map(FileConfigAdapter::into_inner)
}

/// Load the INI file at `path` and bind it onto `dest`.
///
/// Fails only when the file cannot be read or parsed, in which case `dest` is
/// left unmodified.
///
/// ```no_run
/// #[derive(Default)]
/// struct Database {
///     user: String,
/// }
///
/// #[derive(Default)]
/// struct Settings {
///     db: Database,
/// }
///
/// inibind::ini_section! { Database { user: "User" } }
/// inibind::ini_record! { Settings { db: "db" } }
///
/// let mut settings = Settings::default();
/// inibind::bind("app.ini", &mut settings).unwrap();
/// ```
///
/// The destination must be a mutable reference to a bound record. Passing the
/// record by value does not compile:
///
/// ```compile_fail
/// # #[derive(Default)]
/// # struct Database {
/// #     user: String,
/// # }
/// # #[derive(Default)]
/// # struct Settings {
/// #     db: Database,
/// # }
/// # inibind::ini_section! { Database { user: "User" } }
/// # inibind::ini_record! { Settings { db: "db" } }
/// let settings = Settings::default();
/// inibind::bind("app.ini", settings).unwrap();
/// ```
///
/// Neither does a reference to a scalar:
///
/// ```compile_fail
/// let mut port: i64 = 0;
/// inibind::bind("app.ini", &mut port).unwrap();
/// ```
pub fn bind<P: AsRef<Path>, T: Bind + ?Sized>(path: P, dest: &mut T) -> Result<()> {
    let config = load(path)?;
    bind_config(&config, dest);
    Ok(())
}
