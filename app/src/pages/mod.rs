//! Page-level views

pub mod cabanas;
pub mod reservas;
