use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Рука игрока: набор карт без дубликатов.
/// Порядок не имеет игрового смысла, но сохраняется стабильным,
/// чтобы представление было воспроизводимым.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Положить карту в руку.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Забрать конкретную карту из руки.
    /// Возвращает None, если карты в руке нет.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let idx = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(idx))
    }
}
