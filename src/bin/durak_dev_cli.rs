// src/bin/durak_dev_cli.rs

use durak_engine::api::{build_game_view, GameViewDto};
use durak_engine::domain::{Card, GameId, Player};
use durak_engine::engine::{
    beats, ActionStatus, GameManager, GameResult, GameRules, ManagerError, PlayerAction,
    PlayerActionKind,
};
use durak_engine::infra::{DeterministicRng, IdGenerator};

fn main() {
    println!("durak_dev_cli: стартуем dev-CLI движка дурака…");

    let id_gen = IdGenerator::new();
    let mut manager = GameManager::new();

    // Несколько партий с фиксированными seed'ами: удобно воспроизводить
    // при отладке конкретную раздачу.
    for seed in [1u64, 7, 42] {
        let game_id = id_gen.next_game_id();
        let mut rng = DeterministicRng::from_seed(seed);

        println!();
        println!("================ GAME id={} (seed={}) ================", game_id, seed);

        manager.create_game(game_id, GameRules::default(), &mut rng);
        debug_print_view(&manager, game_id);

        match play_to_the_end(&mut manager, game_id) {
            Ok(result) => match result {
                GameResult::Draw => println!("[CLI] Партия {}: ничья.", game_id),
                GameResult::Winner(p) => {
                    println!("[CLI] Партия {}: победил {}, его соперник — дурак.", game_id, p)
                }
            },
            Err(e) => println!("[CLI] ОШИБКА в партии {}: {:?}", game_id, e),
        }
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Сыграть партию до конца простейшей стратегией за обоих игроков:
/// - атака: минимальная легальная карта (некозырные раньше козырей);
/// - защита: минимальная карта, которой можно побить, иначе взять.
fn play_to_the_end(manager: &mut GameManager, game_id: GameId) -> Result<GameResult, ManagerError> {
    let mut round = 0u32;
    loop {
        round += 1;

        // Одна атака + попытка защиты, затем подкидывания, затем finish.
        loop {
            let attack_card = {
                let game = manager
                    .game(game_id)
                    .ok_or(ManagerError::GameNotFound(game_id))?;
                choose_attack(game)
            };

            let Some(card) = attack_card else { break };
            manager.apply_action(
                game_id,
                PlayerAction {
                    player: current_attacker(manager, game_id)?,
                    kind: PlayerActionKind::Attack(card),
                },
            )?;

            let defense = {
                let game = manager
                    .game(game_id)
                    .ok_or(ManagerError::GameNotFound(game_id))?;
                choose_defense(game)
            };

            match defense {
                Some((def_card, target)) => {
                    let defender = current_attacker(manager, game_id)?.opponent();
                    manager.apply_action(
                        game_id,
                        PlayerAction {
                            player: defender,
                            kind: PlayerActionKind::Defend {
                                card: def_card,
                                target,
                            },
                        },
                    )?;
                }
                // Нечем бить — атакующий закрывает розыгрыш, защитник берёт.
                None => break,
            }
        }

        let attacker = current_attacker(manager, game_id)?;
        let status = manager.apply_action(
            game_id,
            PlayerAction {
                player: attacker,
                kind: PlayerActionKind::FinishRound,
            },
        )?;

        match status {
            ActionStatus::GameFinished(outcome, result) => {
                println!("[CLI] Раунд {}: {:?} — партия завершена.", round, outcome);
                return Ok(result);
            }
            ActionStatus::RoundFinished(outcome) => {
                println!("[CLI] Раунд {}: {:?}.", round, outcome);
            }
            ActionStatus::Ongoing => {}
        }

        // Страховка от зацикливания при ошибке в стратегии.
        if round > 500 {
            println!("[CLI] Слишком много раундов, обрываем партию {}.", game_id);
            return Ok(GameResult::Draw);
        }
    }
}

fn current_attacker(manager: &GameManager, game_id: GameId) -> Result<Player, ManagerError> {
    manager
        .game(game_id)
        .map(|g| g.attacker)
        .ok_or(ManagerError::GameNotFound(game_id))
}

/// Минимальная легальная атакующая карта: сперва некозырные по рангу,
/// потом козыри. None — атаковать нечем (или нечего подкинуть).
fn choose_attack(game: &durak_engine::engine::GameState) -> Option<Card> {
    let hand = &game.hand(game.attacker).cards;
    let mut candidates: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| game.table.is_empty() || game.table.contains_rank(c.rank))
        .collect();
    candidates.sort_by_key(|c| (c.suit == game.trump_suit, c.rank));
    candidates.first().copied()
}

/// Минимальная карта, которой можно покрыть первую открытую стопку.
fn choose_defense(game: &durak_engine::engine::GameState) -> Option<(Card, Card)> {
    let open = game
        .table
        .stacks
        .iter()
        .find(|s| !s.is_covered())
        .map(|s| s.attacker)?;

    let defender = game.defender();
    let mut options: Vec<Card> = game
        .hand(defender)
        .cards
        .iter()
        .copied()
        .filter(|c| beats(*c, open, game.trump_suit))
        .collect();
    options.sort_by_key(|c| (c.suit == game.trump_suit, c.rank));
    options.first().map(|c| (*c, open))
}

/// Отладочная печать состояния партии (в JSON, глазами наблюдателя).
fn debug_print_view(manager: &GameManager, game_id: GameId) {
    let Some(game) = manager.game(game_id) else {
        println!("[CLI] Партия {} не найдена.", game_id);
        return;
    };
    let view: GameViewDto = build_game_view(game_id, game, None);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("[CLI] Не удалось сериализовать view: {e}"),
    }
}
