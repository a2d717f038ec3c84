//! Движок дурака: легальность ходов, розыгрыш стола, добор, конец партии.
//!
//! Основной объект: `GameState`
//! Основные операции:
//!   - `start_game` – раздать новую партию
//!   - `attack` / `defend` – ходы игроков
//!   - `finish_round` – розыгрыш стола (отбой или взятие)
//!   - `check_end` – проверка конца партии
//!   - `apply_action` – единая точка входа для действий

pub mod actions;
pub mod errors;
pub mod game;
pub mod history;
pub mod manager;
pub mod rules;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game::{
    apply_action, attack, check_end, defend, finish_round, start_game, ActionStatus, GameResult,
    GameState, GameStatus, RoundOutcome,
};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use manager::{GameManager, ManagerError};
pub use rules::{AttackLimit, GameRules};
pub use validation::beats;

/// RNG интерфейс для движка.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
