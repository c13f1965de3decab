//! repogen - repository scaffolding for Eloquent models
//!
//! Derives class names and namespaces from a model name and writes a
//! repository implementation plus its contract from templates. The binary
//! is a thin wrapper; [`generator::RepositoryCreator`] is the entry point
//! for library use.

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod templates;
