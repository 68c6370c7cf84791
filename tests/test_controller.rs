use std::time::Duration;

use bridge_legends::config::GameConfig;
use bridge_legends::controller::GameController;
use bridge_legends::entities::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SECOND: Duration = Duration::from_secs(1);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn playing_against(enemy: EnemyId) -> Session {
    Session {
        screen: Screen::Playing,
        level: 1,
        time_remaining: 25,
        current_enemy: Some(enemy),
        ..Session::default()
    }
}

fn controller(session: Session) -> GameController<StdRng> {
    GameController::from_session(GameConfig::default(), StdRng::seed_from_u64(7), session)
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_combo_and_weakness_kill() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);

    let outcome = game.attack();
    assert!(matches!(outcome, Some(Outcome::Kill { points: 80, .. })));
    assert_eq!(game.session().score, 80);
    assert_eq!(game.session().streak, 1);
    assert!(game.session().resolving);

    game.advance(ms(1500));
    let s = game.session();
    assert!(!s.resolving);
    assert_ne!(s.current_enemy, Some(EnemyId::Goblin));
    assert!(s.selected_character.is_none());
    assert!(s.selected_weapon.is_none());
    assert!(s.feedback.is_none());
}

#[test]
fn scenario_b_combo_without_weakness_misses() {
    let mut start = playing_against(EnemyId::Goblin);
    start.streak = 2;
    let mut game = controller(start);
    game.select_character(CharacterId::Thief);
    game.select_weapon(WeaponId::Dagger);

    let outcome = game.attack();
    match outcome {
        Some(Outcome::Miss { damage, enemy_hp }) => {
            assert!(damage.combo);
            assert!(!damage.weakness);
            assert_eq!(damage.total, 14);
            assert_eq!(enemy_hp, 15);
        }
        other => panic!("expected miss, got {other:?}"),
    }
    let s = game.session();
    assert_eq!(s.streak, 0);
    assert!(!s.resolving);
    assert_eq!(
        s.feedback.as_ref().map(|f| f.to_string()).as_deref(),
        Some("❌ Fallaste (14 daño). El Goblin tiene 15 HP.")
    );
    assert!(game.clock_running());
}

#[test]
fn scenario_c_last_second_loses() {
    let mut start = playing_against(EnemyId::Orc);
    start.time_remaining = 1;
    let mut game = controller(start);

    game.advance(SECOND);
    assert_eq!(game.session().time_remaining, 0);
    assert_eq!(game.session().screen, Screen::Lost);
    assert!(!game.clock_running());
}

#[test]
fn scenario_d_level_up_adds_time() {
    let mut start = playing_against(EnemyId::Wolf);
    start.score = 190;
    let mut game = controller(start);
    game.select_character(CharacterId::Thief);
    game.select_weapon(WeaponId::Wand); // 12 vs 12 hp, no bonuses

    let outcome = game.attack();
    assert!(matches!(outcome, Some(Outcome::Kill { points: 50, level_up: true, .. })));
    let s = game.session();
    assert_eq!(s.score, 240);
    assert_eq!(s.level, 2);
    assert_eq!(s.time_remaining, 45);
}

// ── Intents ───────────────────────────────────────────────────────────────────

#[test]
fn full_navigation_cycle() {
    let mut game = GameController::new(GameConfig::default(), StdRng::seed_from_u64(1));
    assert_eq!(game.session().screen, Screen::Menu);

    game.view_rules();
    assert_eq!(game.session().screen, Screen::Rules);
    game.start_game(); // not from rules
    assert_eq!(game.session().screen, Screen::Rules);
    game.acknowledge_rules();
    assert_eq!(game.session().screen, Screen::Menu);

    game.start_game();
    assert_eq!(game.session().screen, Screen::Playing);
    assert!(game.session().current_enemy.is_some());
    assert!(game.clock_running());

    game.advance(Duration::from_secs(30));
    assert_eq!(game.session().screen, Screen::Lost);

    game.start_game();
    assert_eq!(game.session().screen, Screen::Playing);
    assert_eq!(game.session().time_remaining, 25);

    game.exit_to_menu();
    assert_eq!(game.snapshot(), Session::default());
    assert!(!game.clock_running());
}

#[test]
fn start_game_mid_match_is_ignored() {
    let mut start = playing_against(EnemyId::Dragon);
    start.score = 130;
    let mut game = controller(start.clone());
    game.start_game();
    assert_eq!(game.snapshot(), start);
}

#[test]
fn attack_without_selection_changes_nothing() {
    let mut game = controller(playing_against(EnemyId::Dragon));
    game.select_weapon(WeaponId::Wand);
    let before = game.snapshot();
    assert!(game.attack().is_none());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn selections_rejected_while_resolving() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);
    game.attack();

    let before = game.snapshot();
    game.select_character(CharacterId::Mage);
    game.select_weapon(WeaponId::Wand);
    assert!(game.attack().is_none());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn selections_in_menu_are_ignored() {
    let mut game = GameController::new(GameConfig::default(), StdRng::seed_from_u64(1));
    game.select_character(CharacterId::Mage);
    assert!(game.session().selected_character.is_none());
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[test]
fn countdown_ticks_once_per_second() {
    let mut game = controller(playing_against(EnemyId::Orc));
    game.advance(ms(999));
    assert_eq!(game.session().time_remaining, 25);
    game.advance(ms(1));
    assert_eq!(game.session().time_remaining, 24);
    game.advance(ms(3500));
    assert_eq!(game.session().time_remaining, 21);
}

#[test]
fn countdown_paused_while_resolving() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);
    game.attack();
    assert!(!game.clock_running());
    assert!(game.resolution_pending());

    game.advance(ms(1499));
    assert_eq!(game.session().time_remaining, 25);
    assert!(game.session().resolving);
}

#[test]
fn pause_discards_partial_second() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.advance(ms(600));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);
    game.attack();

    game.advance(ms(1500)); // resolution ends, clock restarts from zero
    assert!(!game.session().resolving);
    assert_eq!(game.session().time_remaining, 25);
    game.advance(ms(999));
    assert_eq!(game.session().time_remaining, 25);
    game.advance(ms(1));
    assert_eq!(game.session().time_remaining, 24);
}

#[test]
fn long_advance_handles_deadlines_in_order() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);
    game.attack();

    // 1.5 s paused, then ticks at 2.5 .. 9.5
    game.advance(Duration::from_secs(10));
    assert_eq!(game.session().time_remaining, 17);
    assert!(!game.session().resolving);
}

#[test]
fn missed_ticks_never_go_below_zero() {
    let mut game = controller(playing_against(EnemyId::Orc));
    game.advance(Duration::from_secs(120));
    assert_eq!(game.session().time_remaining, 0);
    assert_eq!(game.session().screen, Screen::Lost);
}

#[test]
fn exit_mid_resolution_cancels_pending_enemy() {
    let mut game = controller(playing_against(EnemyId::Goblin));
    game.select_character(CharacterId::Warrior);
    game.select_weapon(WeaponId::Sword);
    game.attack();

    game.exit_to_menu();
    assert!(!game.resolution_pending());
    assert!(!game.clock_running());
    game.advance(Duration::from_secs(5));
    assert_eq!(game.snapshot(), Session::default());
}

#[test]
fn resumed_resolving_session_gets_a_fresh_delay() {
    let mut start = playing_against(EnemyId::Goblin);
    start.resolving = true;
    let mut game = controller(start);
    assert!(game.resolution_pending());
    assert!(!game.clock_running());
    game.advance(ms(1500));
    assert!(!game.session().resolving);
    assert!(game.clock_running());
}

#[test]
fn custom_timing_is_respected() {
    let config = GameConfig {
        tick_period: ms(100),
        resolve_delay: ms(250),
    };
    let mut game = GameController::from_session(
        config,
        StdRng::seed_from_u64(3),
        playing_against(EnemyId::Orc),
    );
    game.advance(ms(500));
    assert_eq!(game.session().time_remaining, 20);
}

// ── Properties over random play ───────────────────────────────────────────────

#[test]
fn random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = GameController::new(GameConfig::default(), StdRng::seed_from_u64(5));
    game.start_game();

    let mut last_enemy = game.session().current_enemy;
    let mut last_score = 0;

    for _ in 0..2_000 {
        match rng.gen_range(0..4) {
            0 => game.select_character(CharacterId::ALL[rng.gen_range(0..5)]),
            1 => game.select_weapon(WeaponId::ALL[rng.gen_range(0..5)]),
            2 => {
                game.attack();
            }
            _ => game.advance(ms(rng.gen_range(0..700))),
        }

        let s = game.session();
        assert_ne!(s.screen, Screen::Won);
        if s.screen == Screen::Lost {
            game.start_game();
            last_enemy = game.session().current_enemy;
            last_score = 0;
            continue;
        }
        assert!(s.score >= last_score);
        assert!(s.level >= 1);
        if s.current_enemy != last_enemy {
            assert!(s.selected_character.is_none() && s.selected_weapon.is_none());
        }
        last_score = s.score;
        last_enemy = s.current_enemy;
    }
}
