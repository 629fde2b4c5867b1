//! tintd - a tinted-text chat server.
//!
//! Clients connect over TCP, send newline-terminated text, and every line is
//! either an in-band command (`/help`, `/who`, `/nick`, `/color`, `/w`) or a
//! chat message rebroadcast to everyone as colorized text.
//!
//! The crate is a library so integration tests can drive a server
//! in-process; the `tintd` binary is a thin wrapper around [`network::Gateway`].

pub mod commands;
pub mod config;
pub mod error;
pub mod network;
pub mod router;
pub mod state;
