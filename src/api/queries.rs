use serde::{Deserialize, Serialize};

use crate::domain::{GameId, Player};
use crate::engine::{check_end, GameManager, GameState};

use super::dto::{GameViewDto, PlayerHandDto, StackDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить состояние партии глазами конкретного игрока.
    /// `viewer = None` — режим наблюдателя/отладки: видны обе руки.
    GetGame {
        game_id: GameId,
        viewer: Option<Player>,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Game(GameViewDto),
}

/// Обработать запрос поверх менеджера партий.
pub fn handle_query(manager: &GameManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetGame { game_id, viewer } => {
            let game = manager
                .game(game_id)
                .ok_or(ApiError::GameNotFound(game_id))?;
            Ok(QueryResponse::Game(build_game_view(game_id, game, viewer)))
        }
    }
}

/// Сформировать DTO партии.
///
/// Карты соперника не раскрываются: для каждого игрока `cards` заполнен
/// только если он «герой» запроса (или запрос без viewer — отладка).
pub fn build_game_view(game_id: GameId, game: &GameState, viewer: Option<Player>) -> GameViewDto {
    let players = Player::BOTH
        .iter()
        .map(|&p| {
            let hand = game.hand(p);
            let visible = viewer.map(|v| v == p).unwrap_or(true);
            PlayerHandDto {
                player: p,
                card_count: hand.len(),
                cards: if visible {
                    Some(hand.cards.clone())
                } else {
                    None
                },
            }
        })
        .collect();

    let table = game
        .table
        .stacks
        .iter()
        .map(|s| StackDto {
            attacker: s.attacker,
            defender: s.defender,
        })
        .collect();

    GameViewDto {
        game_id,
        trump_suit: game.trump_suit,
        trump_card: game.trump_card,
        deck_remaining: game.deck_remaining(),
        attacker: game.attacker,
        defender: game.defender(),
        table,
        discard_count: game.discard.len(),
        players,
        status: check_end(game),
    }
}
