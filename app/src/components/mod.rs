//! Presentation components

pub mod cabana_card;
pub mod estado_badge;
pub mod notices;
