//! The game session controller.
//!
//! Sole owner and writer of the `Session`.  The presentation layer
//! forwards intents here, advances virtual time once per frame and reads
//! the session back through [`GameController::session`] or
//! [`GameController::snapshot`].

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::clock::{next_deadline, Timer};
use crate::compute;
use crate::config::GameConfig;
use crate::entities::{CharacterId, Outcome, Screen, Session, WeaponId};

pub struct GameController<R: Rng> {
    session: Session,
    rng: R,
    /// Repeating countdown; armed only while the clock is allowed to run.
    countdown: Timer,
    /// One-shot post-kill pause.
    resolution: Timer,
}

impl<R: Rng> GameController<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        GameController {
            session: compute::new_session(),
            rng,
            countdown: Timer::new(config.tick_period),
            resolution: Timer::new(config.resolve_delay),
        }
    }

    /// Resume from an existing session, e.g. a snapshot taken earlier.
    /// Pending post-kill pauses are not carried over; a resolving session
    /// gets a full delay from now.
    pub fn from_session(config: GameConfig, rng: R, session: Session) -> Self {
        let mut controller = GameController::new(config, rng);
        controller.session = session;
        if controller.session.screen == Screen::Playing && controller.session.resolving {
            controller.resolution.arm();
        }
        controller.sync_countdown();
        controller
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// Whether the countdown is currently counting.
    pub fn clock_running(&self) -> bool {
        self.countdown.is_armed()
    }

    /// Whether a post-kill pause is waiting to bring in the next enemy.
    pub fn resolution_pending(&self) -> bool {
        self.resolution.is_armed()
    }

    // ── Intents ───────────────────────────────────────────────────────────────

    pub fn start_game(&mut self) {
        let next = compute::start_game(&self.session, &mut self.rng);
        if next.screen != Screen::Playing || self.session.screen == Screen::Playing {
            debug!("start ignored on {:?}", self.session.screen);
            return;
        }
        info!("match started against {:?}", next.current_enemy);
        // Fresh session: nothing scheduled for the old one may fire.
        self.countdown.cancel();
        self.resolution.cancel();
        self.session = next;
        self.sync_countdown();
    }

    pub fn view_rules(&mut self) {
        self.session = compute::view_rules(&self.session);
    }

    pub fn acknowledge_rules(&mut self) {
        self.session = compute::acknowledge_rules(&self.session);
    }

    pub fn exit_to_menu(&mut self) {
        if self.session.screen == Screen::Playing {
            info!("match abandoned with score {}", self.session.score);
        }
        self.session = compute::exit_to_menu(&self.session);
        self.sync_countdown();
    }

    pub fn select_character(&mut self, id: CharacterId) {
        if let Err(reason) = compute::validate_selection(&self.session) {
            debug!("character {} ignored: {}", id, reason);
            return;
        }
        self.session = compute::select_character(&self.session, id);
    }

    pub fn select_weapon(&mut self, id: WeaponId) {
        if let Err(reason) = compute::validate_selection(&self.session) {
            debug!("weapon {} ignored: {}", id, reason);
            return;
        }
        self.session = compute::select_weapon(&self.session, id);
    }

    /// Resolve an attack with the current selection.  `None` when the
    /// attack was not allowed; the session is then untouched.
    pub fn attack(&mut self) -> Option<Outcome> {
        if let Err(reason) = compute::validate_attack(&self.session) {
            debug!("attack ignored: {}", reason);
            return None;
        }
        let (outcome, next) = compute::resolve_attack(&self.session);
        self.session = next;

        match outcome {
            Some(Outcome::Kill {
                damage,
                points,
                level_up,
            }) => {
                debug!("kill for {} damage, +{} pts", damage.total, points);
                if level_up {
                    info!(
                        "level {} reached, {}s left",
                        self.session.level, self.session.time_remaining
                    );
                }
                self.resolution.arm();
            }
            Some(Outcome::Miss { damage, enemy_hp }) => {
                debug!("miss: {} damage against {} hp", damage.total, enemy_hp);
            }
            None => {}
        }
        self.sync_countdown();
        outcome
    }

    // ── Time ──────────────────────────────────────────────────────────────────

    /// Let `dt` of virtual time pass.  Timer deadlines inside `dt` are
    /// handled one at a time, in order.
    pub fn advance(&mut self, dt: Duration) {
        let mut left = dt;
        self.sync_countdown();

        while let Some(step) = next_deadline(&[&self.countdown, &self.resolution]) {
            if step > left {
                self.countdown.advance(left);
                self.resolution.advance(left);
                return;
            }
            left -= step;

            if self.resolution.advance(step) {
                self.session = compute::finish_resolution(&self.session, &mut self.rng);
                debug!("next enemy: {:?}", self.session.current_enemy);
            }
            if self.countdown.advance(step) {
                self.session = compute::tick(&self.session);
                if self.session.screen == Screen::Lost {
                    info!("time up, final score {}", self.session.score);
                }
            }
            self.sync_countdown();
        }
    }

    /// Arm the countdown exactly when the clock may run, and drop anything
    /// scheduled for a match that is no longer being played.
    fn sync_countdown(&mut self) {
        let playing = self.session.screen == Screen::Playing;
        if !playing {
            self.resolution.cancel();
        }
        if playing && !self.session.resolving {
            if !self.countdown.is_armed() {
                self.countdown.arm();
            }
        } else {
            self.countdown.cancel();
        }
    }
}
