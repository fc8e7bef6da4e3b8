//! Scriptable Deploy - copy Scriptable scripts into the iCloud sync folder.
//!
//! After copying, placeholder tokens of the form `<NAME>_SECRET` are replaced
//! with the contents of `.secrets/<NAME>.txt`.

pub mod config;
pub mod deploy;
pub mod error;
pub mod injector;
pub mod secrets;
