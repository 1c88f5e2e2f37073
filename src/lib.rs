//! Utilities for the Humans of Descholars student database.
//!
//! Two binaries share this library:
//! - `create_directories` scaffolds one kebab-case directory per student and
//!   fills it with copies of a template directory's files;
//! - `sort_database` regroups the database by admit year and major and writes
//!   the result as indented JSON.

pub mod database;
pub mod scaffold;
pub mod slug;
pub mod sort;
