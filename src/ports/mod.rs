//! Port traits describing how callers read configuration.

pub mod config_port;
