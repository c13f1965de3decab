//! Command implementations for repogen CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod make;
pub mod version;
