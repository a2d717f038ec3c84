use serde::{Deserialize, Serialize};

use crate::domain::{Card, Player};
use crate::engine::game::GameResult;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия началась: известен козырь и первый атакующий.
    GameStarted {
        trump_card: Card,
        first_attacker: Player,
    },

    /// Атакующий подкинул карту.
    CardPlayed { player: Player, card: Card },

    /// Карта `target` покрыта картой `card`.
    CardCovered {
        player: Player,
        card: Card,
        target: Card,
    },

    /// Защита провалена: игрок забрал все карты со стола.
    RoundTaken { player: Player, cards: Vec<Card> },

    /// Все атаки отбиты: карты ушли в сброс.
    RoundBeaten { cards: Vec<Card> },

    /// Игрок добрал карты из колоды.
    CardsDrawn { player: Player, count: usize },

    /// Игрок забрал открытый козырь (последняя карта колоды).
    TrumpTaken { player: Player },

    /// Партия завершена.
    GameFinished { result: GameResult },
}

/// Событие партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }
}
