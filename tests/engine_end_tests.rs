// tests/engine_end_tests.rs
//
// Конец партии (check_end):
//  1) Обе руки пусты, карт не добрать → ничья
//  2) Ровно одна рука пуста → её владелец победил, соперник — дурак
//  3) Карты ещё можно добрать → всегда InProgress, даже с пустой рукой
//  4) Незакрытый стол → InProgress
//  5) apply_action(FinishRound) сам сообщает о конце партии

use durak_engine::domain::{Card, Deck, Hand, Player, Suit, Table};
use durak_engine::engine::{
    apply_action, attack, check_end, ActionStatus, GameEventKind, GameHistory, GameResult,
    GameRules, GameState, GameStatus, PlayerAction, PlayerActionKind, RoundOutcome,
};

fn card(s: &str) -> Card {
    s.parse().expect("card literal")
}

fn hand(cards: &[&str]) -> Hand {
    Hand {
        cards: cards.iter().map(|s| card(s)).collect(),
    }
}

fn fixed_game(trump: Suit, attacker: Player, p1: &[&str], p2: &[&str]) -> GameState {
    GameState {
        rules: GameRules::default(),
        deck: Deck::empty(),
        trump_card: None,
        trump_suit: trump,
        hands: [hand(p1), hand(p2)],
        table: Table::new(),
        discard: Vec::new(),
        attacker,
        history: GameHistory::new(),
    }
}

#[test]
fn both_hands_empty_is_draw() {
    let game = fixed_game(Suit::Hearts, Player::One, &[], &[]);
    assert_eq!(check_end(&game), GameStatus::Finished(GameResult::Draw));
}

#[test]
fn single_empty_hand_wins() {
    let game = fixed_game(Suit::Hearts, Player::One, &[], &["9c"]);
    assert_eq!(
        check_end(&game),
        GameStatus::Finished(GameResult::Winner(Player::One)),
        "избавившийся от карт побеждает; оставшийся с картами — дурак"
    );

    let game = fixed_game(Suit::Hearts, Player::One, &["9c"], &[]);
    assert_eq!(
        check_end(&game),
        GameStatus::Finished(GameResult::Winner(Player::Two))
    );
}

#[test]
fn no_premature_result_while_cards_obtainable() {
    // В колоде ещё есть карта — рука опустела лишь временно.
    let mut game = fixed_game(Suit::Hearts, Player::One, &[], &["9c"]);
    game.deck = Deck {
        cards: vec![card("Ac")],
    };
    assert_eq!(check_end(&game), GameStatus::InProgress);

    // Колода пуста, но отложенный козырь не разобран.
    let mut game = fixed_game(Suit::Hearts, Player::One, &[], &["9c"]);
    game.trump_card = Some(card("Ah"));
    assert_eq!(check_end(&game), GameStatus::InProgress);
}

#[test]
fn open_table_means_in_progress() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &["8c"], &[]);
    attack(&mut game, Player::One, card("8c")).unwrap();

    // Рука Player 1 пуста, но стол не разыгран — результата нет.
    assert_eq!(check_end(&game), GameStatus::InProgress);
}

#[test]
fn both_hands_nonempty_is_in_progress() {
    let game = fixed_game(Suit::Hearts, Player::One, &["8c"], &["9c"]);
    assert_eq!(check_end(&game), GameStatus::InProgress);
}

#[test]
fn finish_round_reports_game_end() {
    // Последняя карта атакующего не покрыта: защитник забирает её,
    // рука атакующего пустеет — партия кончается его победой.
    let mut game = fixed_game(Suit::Hearts, Player::One, &["6c"], &["9c"]);
    attack(&mut game, Player::One, card("6c")).unwrap();

    let status = apply_action(
        &mut game,
        PlayerAction {
            player: Player::One,
            kind: PlayerActionKind::FinishRound,
        },
    )
    .unwrap();

    assert_eq!(
        status,
        ActionStatus::GameFinished(RoundOutcome::Taken, GameResult::Winner(Player::One))
    );

    // Конец партии записан в историю ровно один раз.
    let finished: Vec<_> = game
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::GameFinished { .. }))
        .collect();
    assert_eq!(finished.len(), 1);

    // Повторный FinishRound безопасен и не дублирует событие.
    let status = apply_action(
        &mut game,
        PlayerAction {
            player: Player::One,
            kind: PlayerActionKind::FinishRound,
        },
    )
    .unwrap();
    assert_eq!(
        status,
        ActionStatus::GameFinished(RoundOutcome::Idle, GameResult::Winner(Player::One))
    );
    let finished = game
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::GameFinished { .. }))
        .count();
    assert_eq!(finished, 1);
}
