//! Reservas Dashboard - Leptos frontend
//!
//! Reactive web UI for managing cabaña reservations, kept in sync with the
//! backend through a server-push update stream.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod live;
pub mod pages;

pub use app::App;
