use crate::domain::{Card, Player, Suit};
use crate::engine::errors::EngineError;
use crate::engine::game::GameState;
use crate::engine::rules::AttackLimit;

/// Бьёт ли `defender` карту `attacker` при данном козыре.
///
/// Легальные случаи:
/// - та же масть и старше рангом (в том числе козырь против козыря);
/// - козырь против некозырной карты.
pub fn beats(defender: Card, attacker: Card, trump: Suit) -> bool {
    if defender.suit == attacker.suit {
        defender.rank > attacker.rank
    } else {
        defender.suit == trump
    }
}

/// Проверка атаки до каких-либо мутаций.
/// Порядок проверок фиксирован: ход → владение → ранг → лимит.
pub fn validate_attack(game: &GameState, player: Player, card: Card) -> Result<(), EngineError> {
    if player != game.attacker {
        return Err(EngineError::WrongTurn(player));
    }
    if !game.hand(player).contains(card) {
        return Err(EngineError::CardNotOwned(card));
    }
    if !game.table.is_empty() && !game.table.contains_rank(card.rank) {
        return Err(EngineError::InvalidRank(card.rank));
    }
    check_attack_limit(game)
}

/// Лимит одновременных атак (правило настраиваемое, см. `GameRules`).
fn check_attack_limit(game: &GameState) -> Result<(), EngineError> {
    let limit = match game.rules.attack_limit {
        AttackLimit::Unlimited => return Ok(()),
        AttackLimit::DefenderHandSize => game.hand(game.defender()).len(),
        AttackLimit::Fixed(n) => n,
    };
    if game.table.len() >= limit {
        return Err(EngineError::AttackLimitReached);
    }
    Ok(())
}

/// Проверка защиты до каких-либо мутаций.
/// Возвращает индекс стопки, которую предстоит покрыть.
pub fn validate_defense(
    game: &GameState,
    player: Player,
    card: Card,
    target: Card,
) -> Result<usize, EngineError> {
    let is_defender = player == game.defender();
    let covers_own = game.rules.attacker_may_cover && player == game.attacker;
    if !is_defender && !covers_own {
        return Err(EngineError::WrongTurn(player));
    }
    if !game.hand(player).contains(card) {
        return Err(EngineError::CardNotOwned(card));
    }
    let idx = game
        .table
        .stack_index(target)
        .ok_or(EngineError::NoSuchOpenStack(target))?;
    if game.table.stacks[idx].is_covered() {
        return Err(EngineError::AlreadyDefended(target));
    }
    if !beats(card, target, game.trump_suit) {
        return Err(EngineError::IllegalDefense {
            attacker: target,
            defender: card,
        });
    }
    Ok(idx)
}
