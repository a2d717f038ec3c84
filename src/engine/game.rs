use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, Hand, Player, Suit, Table};
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::rules::GameRules;
use crate::engine::validation::{validate_attack, validate_defense};
use crate::engine::RandomSource;

/// Результат завершённой партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    /// Обе руки опустели одновременно.
    Draw,
    /// Игрок избавился от карт первым; его соперник — «дурак».
    Winner(Player),
}

/// Статус партии для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

/// Итог розыгрыша стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Стол был пуст — повторный вызов ничего не делает.
    Idle,
    /// Все атаки отбиты: карты в сброс, роли меняются.
    Beaten,
    /// Защита провалена: защитник забрал стол, атакующий ходит снова.
    Taken,
}

/// Статус после применения действия через `apply_action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStatus {
    /// Ход принят, розыгрыш стола продолжается.
    Ongoing,
    /// Стол разыгран, партия продолжается.
    RoundFinished(RoundOutcome),
    /// Стол разыгран, и партия на этом закончилась.
    GameFinished(RoundOutcome, GameResult),
}

/// Полное состояние одной партии.
///
/// Всё игровое состояние (колода, руки, стол, сброс, чей ход) живёт
/// здесь; снаружи оно меняется только через операции движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub rules: GameRules,

    /// Остаток колоды (без отложенного козыря).
    pub deck: Deck,

    /// Отложенная козырная карта. Берётся последней;
    /// None — уже ушла в чью-то руку.
    pub trump_card: Option<Card>,

    /// Козырная масть — фиксирована на всю партию.
    pub trump_suit: Suit,

    /// Руки игроков: индекс = `Player::index()`.
    pub hands: [Hand; 2],

    /// Текущий розыгрыш.
    pub table: Table,

    /// Сброс: побитые карты, навсегда вне игры.
    pub discard: Vec<Card>,

    /// Кто сейчас атакует; защитник — его соперник.
    pub attacker: Player,

    /// История партии.
    pub history: GameHistory,
}

impl GameState {
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    pub fn hand_mut(&mut self, player: Player) -> &mut Hand {
        &mut self.hands[player.index()]
    }

    /// Текущий защитник.
    pub fn defender(&self) -> Player {
        self.attacker.opponent()
    }

    /// Сколько карт осталось в колоде (без отложенного козыря).
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Можно ли ещё хоть откуда-то добрать карту.
    pub fn cards_obtainable(&self) -> bool {
        !self.deck.is_empty() || self.trump_card.is_some()
    }
}

/// Старт новой партии:
/// - собирает и перемешивает 36-карточную колоду;
/// - раздаёт по 6 карт (сначала Player 1, потом Player 2);
/// - откладывает козырную карту;
/// - выбирает первого атакующего.
pub fn start_game<R: RandomSource>(rules: GameRules, rng: &mut R) -> GameState {
    let mut deck = Deck::durak_36();
    rng.shuffle(&mut deck.cards);

    let mut hands = [Hand::new(), Hand::new()];
    for card in deck.draw_n(6) {
        hands[Player::One.index()].add(card);
    }
    for card in deck.draw_n(6) {
        hands[Player::Two.index()].add(card);
    }

    // После раздачи в колоде 24 карты, так что карта точно есть.
    let trump_card = deck
        .draw_one()
        .expect("после раздачи в колоде остаются карты");
    let trump_suit = trump_card.suit;

    let attacker = if rules.random_first_attacker {
        let mut both = Player::BOTH;
        rng.shuffle(&mut both);
        both[0]
    } else {
        Player::One
    };

    let mut history = GameHistory::new();
    history.push(GameEventKind::GameStarted {
        trump_card,
        first_attacker: attacker,
    });

    GameState {
        rules,
        deck,
        trump_card: Some(trump_card),
        trump_suit,
        hands,
        table: Table::new(),
        discard: Vec::new(),
        attacker,
        history,
    }
}

/// Атака: положить карту на стол новой стопкой.
/// Никаких побочных эффектов на очередь хода.
pub fn attack(game: &mut GameState, player: Player, card: Card) -> Result<(), EngineError> {
    validate_attack(game, player, card)?;

    let card = game
        .hand_mut(player)
        .take(card)
        .ok_or(EngineError::CardNotOwned(card))?;
    game.table.stacks.push(crate::domain::Stack::new(card));
    game.history.push(GameEventKind::CardPlayed { player, card });
    Ok(())
}

/// Защита: покрыть атакующую карту `target` картой `card`.
pub fn defend(
    game: &mut GameState,
    player: Player,
    card: Card,
    target: Card,
) -> Result<(), EngineError> {
    let idx = validate_defense(game, player, card, target)?;

    let card = game
        .hand_mut(player)
        .take(card)
        .ok_or(EngineError::CardNotOwned(card))?;
    game.table.stacks[idx].defender = Some(card);
    game.history.push(GameEventKind::CardCovered {
        player,
        card,
        target,
    });
    Ok(())
}

/// Розыгрыш стола.
///
/// Есть хоть одна непокрытая атака → защитник забирает все карты,
/// атакующий сохраняет ход. Всё покрыто → карты в сброс, роли меняются.
/// В обоих случаях стол очищается и руки добираются из колоды.
/// Пустой стол — безопасный no-op.
pub fn finish_round(game: &mut GameState) -> RoundOutcome {
    if game.table.is_empty() {
        return RoundOutcome::Idle;
    }

    let defense_failed = !game.table.is_fully_covered();
    let cards = game.table.take_all();

    let outcome = if defense_failed {
        let defender = game.defender();
        for &card in &cards {
            game.hand_mut(defender).add(card);
        }
        game.history.push(GameEventKind::RoundTaken {
            player: defender,
            cards,
        });
        RoundOutcome::Taken
    } else {
        game.discard.extend_from_slice(&cards);
        game.history.push(GameEventKind::RoundBeaten { cards });
        game.attacker = game.attacker.opponent();
        RoundOutcome::Beaten
    };

    refill_hands(game);
    outcome
}

/// Добор карт после розыгрыша.
///
/// Порядок фиксирован: сначала тот, кто будет атаковать следующим,
/// затем его соперник, каждый до `refill_target`. Источник: колода,
/// потом — ровно один раз — отложенный козырь.
fn refill_hands(game: &mut GameState) {
    let order = [game.attacker, game.attacker.opponent()];
    for player in order {
        let mut drawn = 0usize;
        while game.hand(player).len() < game.rules.refill_target {
            let card = if let Some(c) = game.deck.draw_one() {
                c
            } else if let Some(c) = game.trump_card.take() {
                game.history.push(GameEventKind::TrumpTaken { player });
                c
            } else {
                break;
            };
            game.hand_mut(player).add(card);
            drawn += 1;
        }
        if drawn > 0 {
            game.history
                .push(GameEventKind::CardsDrawn { player, count: drawn });
        }
    }
}

/// Проверка конца партии.
///
/// Осмысленна только при пустом столе и исчерпанных источниках добора;
/// во всех остальных случаях партия продолжается — это не ошибка.
pub fn check_end(game: &GameState) -> GameStatus {
    if !game.table.is_empty() || game.cards_obtainable() {
        return GameStatus::InProgress;
    }

    let one_empty = game.hand(Player::One).is_empty();
    let two_empty = game.hand(Player::Two).is_empty();
    match (one_empty, two_empty) {
        (true, true) => GameStatus::Finished(GameResult::Draw),
        (true, false) => GameStatus::Finished(GameResult::Winner(Player::One)),
        (false, true) => GameStatus::Finished(GameResult::Winner(Player::Two)),
        (false, false) => GameStatus::InProgress,
    }
}

/// Применить действие игрока. Единая точка входа для presentation-слоя
/// и ботов: диспетчеризует на attack/defend/finish_round и сама
/// проверяет конец партии после розыгрыша стола.
pub fn apply_action(
    game: &mut GameState,
    action: crate::engine::actions::PlayerAction,
) -> Result<ActionStatus, EngineError> {
    use crate::engine::actions::PlayerActionKind;

    match action.kind {
        PlayerActionKind::Attack(card) => {
            attack(game, action.player, card)?;
            Ok(ActionStatus::Ongoing)
        }
        PlayerActionKind::Defend { card, target } => {
            defend(game, action.player, card, target)?;
            Ok(ActionStatus::Ongoing)
        }
        PlayerActionKind::FinishRound => {
            // Завершает розыгрыш только текущий атакующий.
            if action.player != game.attacker {
                return Err(EngineError::WrongTurn(action.player));
            }
            let outcome = finish_round(game);
            match check_end(game) {
                GameStatus::Finished(result) => {
                    // Idle после конца партии не записываем повторно.
                    if !matches!(outcome, RoundOutcome::Idle) {
                        game.history.push(GameEventKind::GameFinished { result });
                    }
                    Ok(ActionStatus::GameFinished(outcome, result))
                }
                GameStatus::InProgress => Ok(ActionStatus::RoundFinished(outcome)),
            }
        }
    }
}
