mod display;
mod logging;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use bridge_legends::config::GameConfig;
use bridge_legends::controller::GameController;
use bridge_legends::entities::{CharacterId, Screen, WeaponId};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Path of the log file; logging is off when unset.
const LOG_ENV: &str = "BRIDGE_LEGENDS_LOG";
/// Fixed RNG seed for reproducible enemy order.
const SEED_ENV: &str = "BRIDGE_LEGENDS_SEED";

/// Weapon hotkeys, in catalog order.
const WEAPON_KEYS: [char; 5] = ['a', 's', 'd', 'f', 'g'];

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("BRIDGE_LEGENDS_SEED must be an unsigned integer, got `{0}`")]
    Seed(String),
}

// ── Input mapping ─────────────────────────────────────────────────────────────

enum Flow {
    Continue,
    Quit,
}

fn character_for(c: char) -> Option<CharacterId> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    CharacterId::ALL.get(index).copied()
}

fn weapon_for(c: char) -> Option<WeaponId> {
    let c = c.to_ascii_lowercase();
    let index = WEAPON_KEYS.iter().position(|&k| k == c)?;
    WeaponId::ALL.get(index).copied()
}

/// Forward one key press to the controller as the intent it stands for
/// on the current screen.
fn handle_key(game: &mut GameController<StdRng>, code: KeyCode, modifiers: KeyModifiers) -> Flow {
    if let KeyCode::Char('c') = code {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }
    }

    match game.session().screen {
        Screen::Menu => match code {
            KeyCode::Enter | KeyCode::Char('1') => game.start_game(),
            KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => game.view_rules(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            _ => {}
        },
        Screen::Rules => match code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => game.acknowledge_rules(),
            _ => {}
        },
        Screen::Playing => match code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                game.attack();
            }
            KeyCode::Esc => game.exit_to_menu(),
            KeyCode::Char(c) => {
                if let Some(id) = character_for(c) {
                    game.select_character(id);
                } else if let Some(id) = weapon_for(c) {
                    game.select_weapon(id);
                }
            }
            _ => {}
        },
        Screen::Won | Screen::Lost => match code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => game.start_game(),
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => game.exit_to_menu(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
            _ => {}
        },
    }
    Flow::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    game: &mut GameController<StdRng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = ev
            {
                if let Flow::Quit = handle_key(game, code, modifiers) {
                    return Ok(());
                }
            }
        }

        game.advance(frame_start - last);
        last = frame_start;

        display::render(out, game.session())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn rng_from_env() -> Result<StdRng, AppError> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => {
            let seed = raw.trim().parse::<u64>().map_err(|_| AppError::Seed(raw.clone()))?;
            info!("seeded rng with {}", seed);
            Ok(StdRng::seed_from_u64(seed))
        }
        Err(_) => Ok(StdRng::from_entropy()),
    }
}

fn main() -> Result<(), AppError> {
    if let Ok(path) = std::env::var(LOG_ENV) {
        logging::init(&path)?;
    }
    let rng = rng_from_env()?;
    let mut game = GameController::new(GameConfig::default(), rng);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &mut game, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exited with score {}", game.session().score);
    result.map_err(AppError::from)
}
