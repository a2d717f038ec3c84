use serde::{Deserialize, Serialize};

/// Лимит одновременных атак на столе.
///
/// В разных ревизиях правил лимит отличается, поэтому он вынесен
/// в конфигурацию, а не зашит в движок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttackLimit {
    /// Лимита нет: подкидывать можно, пока есть легальные карты.
    Unlimited,
    /// Классическое правило: не больше, чем карт в руке защитника.
    DefenderHandSize,
    /// Жёсткий потолок (например, 6 стопок).
    Fixed(usize),
}

/// Настраиваемые правила партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRules {
    /// Сколько атак может лежать на столе одновременно.
    pub attack_limit: AttackLimit,

    /// Разрешено ли атакующему самому покрывать свои карты
    /// (вариант правил из одной из ревизий).
    pub attacker_may_cover: bool,

    /// До скольких карт добираются руки после розыгрыша.
    pub refill_target: usize,

    /// Выбирать ли первого атакующего случайно.
    /// false = всегда начинает Player 1.
    pub random_first_attacker: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            attack_limit: AttackLimit::Unlimited,
            attacker_may_cover: false,
            refill_target: 6,
            random_first_attacker: false,
        }
    }
}

impl GameRules {
    /// Классический подкидной: лимит атак по руке защитника.
    pub fn classic() -> Self {
        Self {
            attack_limit: AttackLimit::DefenderHandSize,
            ..Self::default()
        }
    }
}
