//! LinkVault - a link-sharing service
//!
//! Users register with a bare username, curate a list of links, and share
//! a public profile page. Visitors navigate through an interstitial
//! preview page that records click-throughs. The whole database is one
//! JSON document rewritten atomically on every mutation.
//!
//! # Architecture
//! - `storages`: the registry trait and its JSON file backend
//! - `services`: user and link business logic
//! - `api`: HTTP handlers, wire types and route registration
//! - `config`: TOML + environment configuration
//! - `system`: logging initialization
//! - `errors`: the crate-wide error type

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storages;
pub mod system;
pub mod utils;
