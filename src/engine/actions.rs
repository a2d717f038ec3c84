use serde::{Deserialize, Serialize};

use crate::domain::{Card, Player};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    /// Подкинуть карту на стол.
    Attack(Card),
    /// Покрыть атакующую карту `target` картой `card`.
    Defend { card: Card, target: Card },
    /// Завершить розыгрыш стола (отбой либо взятие).
    FinishRound,
}

/// Конкретное действие игрока.
///
/// Движок не различает, кто вызывает операцию — человек или бот:
/// важен только `player` внутри действия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player: Player,
    /// Само действие.
    pub kind: PlayerActionKind,
}
