//! Game module — the scoring core and its rendering.
//!
//! State lives in WASM memory (thread_local) for the lifetime of the Web
//! Worker. Everything outside `state` and `screens` is plain data and logic
//! with no globals, so it can be tested directly.

pub mod controller;
pub mod entry;
pub mod messages;
pub mod notice;
pub mod screens;
pub mod settings;
pub mod state;
pub mod team;
