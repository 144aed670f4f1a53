//! # Shelflife Architecture
//!
//! Shelflife tracks perishable stock: what you have, how much, and when it
//! expires. Each product is classified by how close it is to expiry, and an
//! SMS goes out when a product reaches the configured number of days left.
//!
//! Like any UI-agnostic library, the core knows nothing about terminals. The
//! bundled binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that reads the clock or the environment   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, settings and sender                          │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, update, delete, check, settings, classify     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + collaborators                                       │
//! │  - urgency.rs (classifier), alerts.rs (scanner)             │
//! │  - store/ (FileStore, InMemoryStore)                        │
//! │  - sms/ (TwilioSender, RecordingSender)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dates
//!
//! Every date is a calendar date with no time zone. "Today" is an argument
//! everywhere below the CLI, which makes classification and scanning pure
//! functions of their inputs.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`urgency`]: Expiry tiers and status text
//! - [`alerts`]: The exact-day alert scan
//! - [`sms`]: Message delivery
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product` and date helpers
//! - [`config`]: `settings.json` and `config.json`
//! - [`error`]: Error types

pub mod alerts;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sms;
pub mod store;
pub mod urgency;
