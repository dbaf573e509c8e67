//! Command implementations for the draft league CLI

pub mod common;
pub mod quality;
pub mod standings;
pub mod team;
pub mod transfers;
pub mod warnings;
