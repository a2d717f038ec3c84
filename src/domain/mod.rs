//! Доменная модель дурака: карты, колода, руки, игроки, стол.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор партии (нужен менеджеру нескольких партий).
pub type GameId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
