#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows on failure.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("inibind=trace"))
            .with_test_writer()
            .try_init();
    });
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[derive(Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub height: f64,
    pub weight: f64,
}

inibind::ini_section! {
    Person {
        name: "Name",
        age: "Age",
        height: "Height",
        weight: "Weight",
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Database {
    pub user: String,
    pub passwd: String,
    pub addr: String,
    pub db_name: String,
}

inibind::ini_section! {
    Database {
        user: "User",
        passwd: "Passwd",
        addr: "Addr",
        db_name: "DBName",
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Foo {
    pub db: Database,
    pub person: Person,
}

inibind::ini_record! {
    Foo {
        db: "db",
        person: "person",
    }
}
