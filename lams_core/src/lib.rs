//! # lams_core
//!
//! Framework-agnostic state core for the LAMS progressive web app shell.
//!
//! Everything that can be expressed without touching the DOM lives here:
//! the light/dark theme mode and its derived color palette, the user
//! model served by the REST user directory, the demo login flow
//! (directory lookup + credential table + fabricated token), the session
//! snapshot, and the route guard decision functions.
//!
//! The `app` crate wraps these types in Leptos signals and performs the
//! actual side effects (localStorage writes, body class swaps, fetch
//! calls, navigation). Keeping this crate pure means the whole behavior
//! surface is testable with plain `cargo test` - no browser required.
//!
//! ## Modules
//!
//! - [`theme`] - [`ThemeMode`](theme::ThemeMode), palette derivation, CSS class helpers
//! - [`user`] - the [`User`](user::User) record and login response shape
//! - [`session`] - session snapshot, credential validation, token fabrication
//! - [`guard`] - navigation guard decisions over a session snapshot
//! - [`storage`] - durable storage key constants and the API base URL

pub mod guard;
pub mod session;
pub mod storage;
pub mod theme;
pub mod user;
