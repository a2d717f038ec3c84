use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Одна «стопка» на столе: атакующая карта и (опционально) покрывающая её.
/// Защитная карта ставится не больше одного раза; снять её может
/// только полный розыгрыш стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stack {
    pub attacker: Card,
    pub defender: Option<Card>,
}

impl Stack {
    pub fn new(attacker: Card) -> Self {
        Self {
            attacker,
            defender: None,
        }
    }

    pub fn is_covered(&self) -> bool {
        self.defender.is_some()
    }
}

/// Стол: упорядоченный список стопок текущего розыгрыша.
/// Порядок — порядок подкидывания (первая атака = stacks[0]).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub stacks: Vec<Stack>,
}

impl Table {
    pub fn new() -> Self {
        Self { stacks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Есть ли на столе карта такого ранга (атакующая или защитная).
    /// Именно это множество рангов определяет, что можно подкинуть.
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.stacks.iter().any(|s| {
            s.attacker.rank == rank || s.defender.map(|d| d.rank == rank).unwrap_or(false)
        })
    }

    /// Найти стопку по её атакующей карте.
    pub fn stack_index(&self, attacker: Card) -> Option<usize> {
        self.stacks.iter().position(|s| s.attacker == attacker)
    }

    /// Все ли стопки покрыты.
    pub fn is_fully_covered(&self) -> bool {
        self.stacks.iter().all(Stack::is_covered)
    }

    /// Все карты на столе (атакующие и защитные) в порядке стопок.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.stacks.len() * 2);
        for s in &self.stacks {
            cards.push(s.attacker);
            if let Some(d) = s.defender {
                cards.push(d);
            }
        }
        cards
    }

    /// Снять со стола все карты, очистив его.
    pub fn take_all(&mut self) -> Vec<Card> {
        let cards = self.all_cards();
        self.stacks.clear();
        cards
    }
}
