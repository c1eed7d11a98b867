//! Доменная модель раунда: фишки, карты, игроки, стол, действия.

pub mod action;
pub mod card;
pub mod chips;
pub mod client;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod table;

// Базовые идентификаторы.
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use action::*;
pub use card::*;
pub use chips::*;
pub use client::*;
pub use config::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
pub use table::*;
