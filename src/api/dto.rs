use serde::{Deserialize, Serialize};

use crate::domain::{Card, GameId, Player, Suit};
use crate::engine::GameStatus;

/// DTO одной стопки на столе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StackDto {
    pub attacker: Card,
    pub defender: Option<Card>,
}

/// DTO руки игрока.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerHandDto {
    pub player: Player,
    /// Количество карт — публичная информация (рубашки видны всегда).
    pub card_count: usize,
    /// Сами карты — только для «героя»; чужая рука = None.
    pub cards: Option<Vec<Card>>,
}

/// DTO партии для presentation-слоя.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameViewDto {
    pub game_id: GameId,
    pub trump_suit: Suit,
    /// Открытый козырь под колодой. None — уже разобран,
    /// фронту пора убрать его с экрана.
    pub trump_card: Option<Card>,
    /// Сколько карт осталось в колоде (для отображения рубашки).
    pub deck_remaining: usize,
    pub attacker: Player,
    pub defender: Player,
    pub table: Vec<StackDto>,
    pub discard_count: usize,
    pub players: Vec<PlayerHandDto>,
    pub status: GameStatus,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Вернуть обновлённое состояние партии.
    GameState(GameViewDto),
}
