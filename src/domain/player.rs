use core::fmt;

use serde::{Deserialize, Serialize};

/// Игрок. Партия в дурака здесь всегда на двоих,
/// поэтому вместо числового ID — закрытый enum.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Соперник данного игрока.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Индекс для массивов вида `[T; 2]` (руки, счётчики).
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Оба игрока в фиксированном порядке.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
