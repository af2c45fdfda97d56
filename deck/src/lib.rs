//! Slide navigation engine for the portfolio deck.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns
//! raw keyboard, wheel, touch, and button input into "scroll to slide N"
//! requests, deferring to nested scrollable panels so scrolling inside them
//! never flips a slide. The host layer wires DOM events to [`host::Deck`];
//! everything underneath it is plain Rust and testable without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable [`controller::NavCore`] and the [`controller::Action`]s it emits |
//! | [`host`] | `web-sys` binding: live DOM layout, scroll tree, and action execution |
//! | [`input`] | Event payloads and per-channel gesture state |
//! | [`layout`] | Slide spans and current-slide resolution |
//! | [`scroll`] | Nested scroll regions and hijack prevention |
//! | [`header`] | Auto-hiding header state machine |
//! | [`throttle`] | One-sample-per-frame pointer throttle |
//! | [`clock`] | Injectable millisecond clock |
//! | [`config`] | Tunable thresholds and windows |
//! | [`consts`] | Default values for [`config::NavConfig`] |

pub mod clock;
pub mod config;
pub mod consts;
pub mod controller;
pub mod header;
pub mod host;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod throttle;
