//! Command-line front ends for the sigswap service.
//!
//! `sigswap` answers one query per invocation; `sigswap-server` keeps a
//! project of opened files behind a line-delimited JSON protocol.

pub mod args;
pub mod driver;
