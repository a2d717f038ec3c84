use thiserror::Error;

use crate::domain::{Card, Player, Rank};

/// Ошибки движка дурака.
///
/// Все варианты — отказ принять нелегальный ход, не сбой:
/// при ошибке состояние партии остаётся ровно тем же, что до вызова.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Сейчас не ход игрока {0}")]
    WrongTurn(Player),

    #[error("Карты {0} нет в руке игрока")]
    CardNotOwned(Card),

    #[error("Ранг {0} не совпадает ни с одной картой на столе")]
    InvalidRank(Rank),

    #[error("На столе нет непокрытой атаки картой {0}")]
    NoSuchOpenStack(Card),

    #[error("Атака картой {0} уже побита")]
    AlreadyDefended(Card),

    #[error("Картой {defender} нельзя побить {attacker}")]
    IllegalDefense { attacker: Card, defender: Card },

    #[error("Достигнут лимит атакующих карт на столе")]
    AttackLimitReached,
}
