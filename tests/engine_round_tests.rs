// tests/engine_round_tests.rs
//
// Розыгрыш стола (finish_round) и добор:
//  1) Провал защиты: защитник забирает стол, атакующий сохраняет ход
//  2) Полный отбой: карты в сброс, роли меняются
//  3) Идемпотентность: повторный finish_round на пустом столе — no-op
//  4) Добор: первым берёт следующий атакующий (обе ветки)
//  5) Отложенный козырь берётся последним и ровно один раз
//  6) Игрок с полной рукой добор пропускает

use durak_engine::domain::{Card, Deck, Hand, Player, Suit, Table};
use durak_engine::engine::{
    attack, defend, finish_round, GameEventKind, GameHistory, GameRules, GameState, RoundOutcome,
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
fn failed_defense_gives_table_to_defender() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &["6c", "7d"], &["9c"]);
    attack(&mut game, Player::One, card("6c")).unwrap();

    let outcome = finish_round(&mut game);
    assert_eq!(outcome, RoundOutcome::Taken);

    // Карта ушла в руку защитника, стол пуст, сброс не тронут.
    assert!(game.hand(Player::Two).contains(card("6c")));
    assert_eq!(game.hand(Player::Two).len(), 2);
    assert!(game.table.is_empty());
    assert!(game.discard.is_empty());

    // Атакующий НЕ меняется.
    assert_eq!(game.attacker, Player::One);
}

#[test]
fn failed_defense_transfers_covered_cards_too() {
    // Две стопки: одна покрыта, одна нет — защитник забирает ВСЁ.
    let mut game = fixed_game(Suit::Hearts, Player::One, &["8c", "8d"], &["9c", "6s"]);
    attack(&mut game, Player::One, card("8c")).unwrap();
    defend(&mut game, Player::Two, card("9c"), card("8c")).unwrap();
    attack(&mut game, Player::One, card("8d")).unwrap();

    let outcome = finish_round(&mut game);
    assert_eq!(outcome, RoundOutcome::Taken);

    for c in ["8c", "9c", "8d"] {
        assert!(game.hand(Player::Two).contains(card(c)), "{c} у защитника");
    }
    assert_eq!(game.hand(Player::Two).len(), 4);
}

#[test]
fn full_defense_discards_and_swaps_roles() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &["8c"], &["9c"]);
    attack(&mut game, Player::One, card("8c")).unwrap();
    defend(&mut game, Player::Two, card("9c"), card("8c")).unwrap();

    let outcome = finish_round(&mut game);
    assert_eq!(outcome, RoundOutcome::Beaten);

    assert!(game.table.is_empty());
    assert_eq!(game.discard.len(), 2);
    assert!(game.discard.contains(&card("8c")));
    assert!(game.discard.contains(&card("9c")));

    // Защитник становится атакующим.
    assert_eq!(game.attacker, Player::Two);
}

#[test]
fn finish_round_is_idempotent_on_empty_table() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &["8c"], &["9c"]);
    attack(&mut game, Player::One, card("8c")).unwrap();
    defend(&mut game, Player::Two, card("9c"), card("8c")).unwrap();

    assert_eq!(finish_round(&mut game), RoundOutcome::Beaten);
    let snapshot = game.clone();

    // Повторный вызов ничего не двигает.
    assert_eq!(finish_round(&mut game), RoundOutcome::Idle);
    assert_eq!(game, snapshot);
}

#[test]
fn refill_draws_for_same_attacker_first_after_take() {
    // Провал защиты: атакующий остаётся и добирает первым.
    // Верх колоды — последний элемент вектора (draw = pop).
    let mut game = fixed_game(Suit::Hearts, Player::One, &["6c"], &["9c"]);
    game.hands[0] = hand(&["6c", "6d", "6h", "6s", "7c", "7d"]); // после атаки нужна одна
    game.deck = Deck {
        cards: vec![card("Ad"), card("Ac")], // Ac сверху
    };

    attack(&mut game, Player::One, card("6c")).unwrap();
    assert_eq!(finish_round(&mut game), RoundOutcome::Taken);

    // Атакующий добрал Ac первым; защитнику достался Ad.
    assert!(game.hand(Player::One).contains(card("Ac")));
    assert!(!game.hand(Player::One).contains(card("Ad")));
    assert!(game.hand(Player::Two).contains(card("Ad")));
}

#[test]
fn refill_draws_for_new_attacker_first_after_beaten() {
    // Полный отбой: новый атакующий (бывший защитник) добирает первым.
    let mut game = fixed_game(Suit::Hearts, Player::One, &[], &[]);
    game.hands[0] = hand(&["8c", "6d", "6h", "6s", "7c", "7d"]);
    game.hands[1] = hand(&["9c", "Td", "Th", "Ts", "Jc", "Jd"]);
    game.deck = Deck {
        cards: vec![card("Ad"), card("Ac")], // Ac сверху
    };

    attack(&mut game, Player::One, card("8c")).unwrap();
    defend(&mut game, Player::Two, card("9c"), card("8c")).unwrap();
    assert_eq!(finish_round(&mut game), RoundOutcome::Beaten);

    assert_eq!(game.attacker, Player::Two);
    // Player 2 (новый атакующий) взял верхнюю карту Ac.
    assert!(game.hand(Player::Two).contains(card("Ac")));
    assert!(game.hand(Player::One).contains(card("Ad")));
}

#[test]
fn reserved_trump_is_drawn_last_and_once() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &["6c"], &["9c", "Td"]);
    game.deck = Deck {
        cards: vec![card("Ac")],
    };
    game.trump_card = Some(card("Ah"));

    attack(&mut game, Player::One, card("6c")).unwrap();
    assert_eq!(finish_round(&mut game), RoundOutcome::Taken);

    // Порядок добора: атакующему нужно 6 карт. Сначала Ac из колоды,
    // затем — когда колода пуста — отложенный козырь Ah.
    assert!(game.hand(Player::One).contains(card("Ac")));
    assert!(game.hand(Player::One).contains(card("Ah")));
    assert!(game.deck.is_empty());
    assert_eq!(game.trump_card, None, "козырь разобран и больше не виден");
    assert!(!game.cards_obtainable());

    let trump_taken: Vec<_> = game
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::TrumpTaken { .. }))
        .collect();
    assert_eq!(trump_taken.len(), 1, "козырь берётся ровно один раз");
}

#[test]
fn refill_skips_player_at_target() {
    let mut game = fixed_game(Suit::Hearts, Player::One, &[], &[]);
    game.hands[0] = hand(&["6c", "6d", "6h", "6s", "7c", "7d"]); // уже 6
    game.hands[1] = hand(&["9c", "Td", "Th", "Ts", "Jc", "Jd"]);
    game.deck = Deck {
        cards: vec![card("Ac")],
    };

    attack(&mut game, Player::One, card("6c")).unwrap();
    defend(&mut game, Player::Two, card("9c"), card("6c")).unwrap();
    assert_eq!(finish_round(&mut game), RoundOutcome::Beaten);

    // Оба были по 6 до розыгрыша; после отбоя каждому не хватает одной.
    // Новый атакующий (Player 2) берёт единственную карту, Player 1 — нет.
    assert_eq!(game.hand(Player::Two).len(), 6);
    assert_eq!(game.hand(Player::One).len(), 5);
    assert!(game.deck.is_empty());
}
