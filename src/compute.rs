/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `Session` (and, where needed, an RNG handle) and returns a brand-new
/// `Session`.  Side effects are limited to the injected RNG.  Intents
/// that are not valid in the current state return an unchanged copy.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::entities::{
    CharacterId, DamageBreakdown, EnemyId, Feedback, Outcome, Screen, Session, WeaponId,
};
use crate::error::Rejected;

// ── Tuning tables ─────────────────────────────────────────────────────────────

pub const START_TIME: u32 = 25;
/// Seconds added to the countdown on every level-up.
pub const LEVEL_UP_TIME: u32 = 20;
/// A level is gained once score reaches `level * LEVEL_THRESHOLD`.
pub const LEVEL_THRESHOLD: u32 = 200;

pub const COMBO_DAMAGE: u32 = 5;
pub const WEAKNESS_DAMAGE: u32 = 8;

pub const KILL_POINTS: u32 = 50;
/// Awarded once for a combo and once more for a weakness hit.
pub const BONUS_POINTS: u32 = 15;
pub const STREAK_POINTS: u32 = 10;

// ── Screen transitions ───────────────────────────────────────────────────────

/// The empty session shown behind the main menu.
pub fn new_session() -> Session {
    Session::default()
}

/// Begin a fresh match.  Valid from the menu and both end screens.
pub fn start_game(state: &Session, rng: &mut impl Rng) -> Session {
    match state.screen {
        Screen::Menu | Screen::Won | Screen::Lost => {}
        _ => return state.clone(),
    }
    let fresh = Session {
        screen: Screen::Playing,
        score: 0,
        level: 1,
        time_remaining: START_TIME,
        streak: 0,
        ..Session::default()
    };
    // The previous match's last enemy is not repeated either.
    with_new_enemy(&fresh, state.current_enemy, rng)
}

pub fn view_rules(state: &Session) -> Session {
    if state.screen != Screen::Menu {
        return state.clone();
    }
    Session {
        screen: Screen::Rules,
        ..state.clone()
    }
}

pub fn acknowledge_rules(state: &Session) -> Session {
    if state.screen != Screen::Rules {
        return state.clone();
    }
    Session {
        screen: Screen::Menu,
        ..state.clone()
    }
}

/// Discard the session and go back to the menu.  Accepted from the end
/// screens and from an ongoing match.
pub fn exit_to_menu(state: &Session) -> Session {
    match state.screen {
        Screen::Playing | Screen::Won | Screen::Lost => new_session(),
        _ => state.clone(),
    }
}

// ── Enemy roller ─────────────────────────────────────────────────────────────

/// Pick uniformly from `pool`, skipping `excluding` unless it is the only
/// entry.  `None` only for an empty pool.
pub fn roll_from(pool: &[EnemyId], excluding: Option<EnemyId>, rng: &mut impl Rng) -> Option<EnemyId> {
    let candidates: Vec<EnemyId> = match excluding {
        Some(prev) if pool.len() > 1 => pool.iter().copied().filter(|&e| e != prev).collect(),
        _ => pool.to_vec(),
    };
    candidates.choose(rng).copied()
}

/// Roll the next enemy from the catalog.
pub fn roll_enemy(excluding: Option<EnemyId>, rng: &mut impl Rng) -> EnemyId {
    roll_from(&EnemyId::ALL, excluding, rng).unwrap_or(EnemyId::Goblin)
}

/// Put a new enemy on the field and wipe the previous turn.
pub fn with_new_enemy(state: &Session, excluding: Option<EnemyId>, rng: &mut impl Rng) -> Session {
    let enemy = roll_enemy(excluding, rng);
    log::debug!("enemy rolled: {}", enemy);
    Session {
        current_enemy: Some(enemy),
        selected_character: None,
        selected_weapon: None,
        feedback: None,
        resolving: false,
        ..state.clone()
    }
}

// ── Selections ───────────────────────────────────────────────────────────────

pub fn validate_selection(state: &Session) -> Result<(), Rejected> {
    if state.screen != Screen::Playing {
        return Err(Rejected::WrongScreen(state.screen));
    }
    if state.resolving {
        return Err(Rejected::Resolving);
    }
    Ok(())
}

pub fn select_character(state: &Session, id: CharacterId) -> Session {
    if validate_selection(state).is_err() {
        return state.clone();
    }
    Session {
        selected_character: Some(id),
        ..state.clone()
    }
}

pub fn select_weapon(state: &Session, id: WeaponId) -> Session {
    if validate_selection(state).is_err() {
        return state.clone();
    }
    Session {
        selected_weapon: Some(id),
        ..state.clone()
    }
}

// ── Damage ───────────────────────────────────────────────────────────────────

/// Damage dealt by `weapon`, optionally wielded by `character`, against
/// an optional `enemy`.
pub fn damage(
    character: Option<CharacterId>,
    weapon: WeaponId,
    enemy: Option<EnemyId>,
) -> DamageBreakdown {
    let base = catalog::weapon(weapon).power;
    let combo = character.is_some_and(|c| catalog::character(c).bonus == weapon);
    let weakness = enemy.is_some_and(|e| catalog::enemy(e).weakness == weapon);

    let mut total = base;
    if combo {
        total += COMBO_DAMAGE;
    }
    if weakness {
        total += WEAKNESS_DAMAGE;
    }
    DamageBreakdown {
        base,
        combo,
        weakness,
        total,
    }
}

/// What the current selection would deal, for the attack button readout.
/// Needs a weapon; the character and enemy only add bonuses.
pub fn preview_damage(state: &Session) -> Option<DamageBreakdown> {
    let weapon = state.selected_weapon?;
    Some(damage(state.selected_character, weapon, state.current_enemy))
}

/// Points for a kill, given the streak going into it.
pub fn kill_points(d: &DamageBreakdown, streak_before: u32) -> u32 {
    let mut bonus = 0;
    if d.combo {
        bonus += BONUS_POINTS;
    }
    if d.weakness {
        bonus += BONUS_POINTS;
    }
    KILL_POINTS + bonus + streak_before * STREAK_POINTS
}

// ── Turn resolution ──────────────────────────────────────────────────────────

pub fn validate_attack(state: &Session) -> Result<(CharacterId, WeaponId, EnemyId), Rejected> {
    validate_selection(state)?;
    let character = state.selected_character.ok_or(Rejected::MissingCharacter)?;
    let weapon = state.selected_weapon.ok_or(Rejected::MissingWeapon)?;
    let enemy = state.current_enemy.ok_or(Rejected::NoEnemy)?;
    Ok((character, weapon, enemy))
}

/// Resolve one attack.  Returns `None` and an unchanged copy when the
/// attack is not allowed.
///
/// A kill leaves the session `resolving`; the caller schedules
/// [`finish_resolution`] after the post-kill delay.  A miss keeps the
/// current enemy and selections so the player can retry at once.
pub fn resolve_attack(state: &Session) -> (Option<Outcome>, Session) {
    let (character, weapon, enemy_id) = match validate_attack(state) {
        Ok(sel) => sel,
        Err(_) => return (None, state.clone()),
    };
    let enemy = catalog::enemy(enemy_id);
    let dmg = damage(Some(character), weapon, Some(enemy_id));

    if dmg.total < enemy.hp {
        let next = Session {
            streak: 0,
            feedback: Some(Feedback::Miss {
                damage: dmg.total,
                enemy_name: enemy.name,
                enemy_hp: enemy.hp,
            }),
            ..state.clone()
        };
        return (
            Some(Outcome::Miss {
                damage: dmg,
                enemy_hp: enemy.hp,
            }),
            next,
        );
    }

    let points = kill_points(&dmg, state.streak);
    let score = state.score + points;
    // At most one level per kill, checked against the level going in.
    let level_up = score >= state.level * LEVEL_THRESHOLD;
    let (level, time_remaining) = if level_up {
        (state.level + 1, state.time_remaining + LEVEL_UP_TIME)
    } else {
        (state.level, state.time_remaining)
    };

    let next = Session {
        score,
        streak: state.streak + 1,
        level,
        time_remaining,
        resolving: true,
        feedback: Some(Feedback::Kill {
            combo: dmg.combo,
            weakness: dmg.weakness,
            points,
            level_up,
        }),
        ..state.clone()
    };
    (
        Some(Outcome::Kill {
            damage: dmg,
            points,
            level_up,
        }),
        next,
    )
}

/// End the post-kill pause: bring in a different enemy.
pub fn finish_resolution(state: &Session, rng: &mut impl Rng) -> Session {
    if state.screen != Screen::Playing || !state.resolving {
        return state.clone();
    }
    with_new_enemy(state, state.current_enemy, rng)
}

// ── Countdown ────────────────────────────────────────────────────────────────

/// One countdown second.  Suppressed outside play and while resolving;
/// hitting zero loses the match.
pub fn tick(state: &Session) -> Session {
    if state.screen != Screen::Playing || state.resolving {
        return state.clone();
    }
    let time_remaining = state.time_remaining.saturating_sub(1);
    let screen = if time_remaining == 0 {
        Screen::Lost
    } else {
        Screen::Playing
    };
    Session {
        time_remaining,
        screen,
        ..state.clone()
    }
}
