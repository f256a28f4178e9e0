//! blogquiz-core — Ranking engine, quiz synthesizer, and session state machine.
//!
//! Everything in this crate is synchronous and pure: the store is an in-memory
//! collection, searching and quiz generation are functions of their inputs, and
//! no operation here can fail given well-typed arguments. I/O (WordPress
//! loading, AI summaries) lives in the sibling crates.

pub mod model;
pub mod quiz;
pub mod sample;
pub mod search;
pub mod session;
pub mod store;
