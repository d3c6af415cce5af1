//! # Orchardstay
//!
//! A terminal client for the Orchard Homestay in Villagam, Kupwara.
//! Browse rooms, meal plans, photo albums and nearby attractions, then send
//! a booking request straight from the terminal.
//!
//! ## Architecture Overview
//!
//! The app is a single-threaded, event-driven TUI:
//!
//! - **Events** (`tui`): terminal events (keys, ticks, frames) from an async
//!   crossterm stream
//! - **Actions** (`action`): domain events produced from events via per-mode
//!   keybindings
//! - **Components** (`components`): each section of the site owns its local
//!   state, consumes actions and renders itself
//! - **Booking engine** (`booking`): the only multi-step workflow in the
//!   app, covering form state, validation and relay submission
//!
//! Components never read each other's state. The only suspension point is
//! the booking relay POST, executed as a single tokio task by the app loop.

pub mod action;
pub mod app;
pub mod booking;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod editor;
pub mod links;
pub mod mode;
pub mod section;
pub mod tui;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
