/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bridge_legends::catalog::{self, CHARACTERS, WEAPONS};
use bridge_legends::compute::preview_damage;
use bridge_legends::entities::{Screen, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Magenta;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Blue;
const C_HUD_TIME: Color = Color::White;
const C_HUD_TIME_LOW: Color = Color::Red;
const C_HUD_STREAK: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_SELECTED: Color = Color::Yellow;
const C_IDLE: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;
const C_HIT: Color = Color::Green;
const C_MISS: Color = Color::Red;
const C_BONUS: Color = Color::Yellow;

/// Seconds at which the timer turns red.
const LOW_TIME: u32 = 10;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever screen the session is on.
pub fn render<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match session.screen {
        Screen::Menu => draw_menu(out, width, height)?,
        Screen::Rules => draw_rules(out, width, height)?,
        Screen::Playing => draw_playing(out, session, width, height)?,
        Screen::Won | Screen::Lost => draw_end(out, session, width, height)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn centered<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn at<W: Write>(out: &mut W, col: u16, row: u16, text: &str, color: Color) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, height: u16, hint: &str) -> std::io::Result<()> {
    at(out, 1, height.saturating_sub(1), hint, C_HINT)
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let cy = height / 2;

    centered(out, width, cy.saturating_sub(5), "B R I D G E", C_TITLE)?;
    centered(out, width, cy.saturating_sub(4), "LEGENDS", Color::White)?;
    centered(
        out,
        width,
        cy.saturating_sub(2),
        "Domina el Patrón Bridge combinando héroes y armas legendarias.",
        Color::Grey,
    )?;

    let options: &[(&str, &str, Color)] = &[
        ("1", "⚔️  Jugar Ahora", Color::Cyan),
        ("2", "📖 Aprender Teoría", Color::Grey),
    ];
    for (i, (key, label, color)) in options.iter().enumerate() {
        let row = cy + 1 + i as u16;
        let col = (width / 2).saturating_sub(10);
        at(out, col, row, &format!("[{}] ", key), C_HINT)?;
        at(out, col + 4, row, label, *color)?;
    }

    draw_hint(out, height, "ENTER / 1 : Play   2 / R : Rules   Q : Quit")
}

// ── Rules ─────────────────────────────────────────────────────────────────────

fn draw_rules<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("🌉 Teoría", Color::White),
        ("", Color::White),
        ("✗ El Problema", Color::Red),
        ("La herencia tradicional crea demasiadas combinaciones:", Color::Grey),
        ("GuerreroConEspada, GuerreroConHacha, BárbaroConHacha...", Color::DarkRed),
        ("¡Explosión de clases! 💥", Color::DarkGrey),
        ("", Color::White),
        ("✓ La Solución", Color::Green),
        ("Abstracción: el Personaje (Guerrero, Bárbaro...)", Color::Blue),
        ("        ↕ puente", Color::DarkGrey),
        ("Implementación: el Arma (Espada, Hacha...)", Color::DarkYellow),
        ("", Color::White),
        ("Personaje + su arma favorita = COMBO (+5 daño, +15 pts)", C_BONUS),
        ("Arma contra la debilidad del enemigo = +8 daño, +15 pts", C_BONUS),
    ];

    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        centered(out, width, start_row + i as u16, msg, *color)?;
    }

    draw_hint(out, height, "ENTER : Entendido, ¡A jugar!")
}

// ── Gameplay ──────────────────────────────────────────────────────────────────

fn draw_playing<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;
    draw_hud(out, session, width)?;

    let mut row = 3;
    row = draw_enemy(out, session, width, row)?;
    row = draw_feedback(out, session, width, row)?;
    row = draw_characters(out, session, row)?;
    row = draw_weapons(out, session, row)?;
    draw_attack_bar(out, session, width, row)?;

    draw_hint(
        out,
        height,
        "1-5 : Personaje   A S D F G : Arma   SPACE : Atacar   ESC : Menu",
    )
}

fn draw_hud<W: Write>(out: &mut W, session: &Session, width: u16) -> std::io::Result<()> {
    // Score and streak — left
    at(out, 1, 0, &format!("Score:{:>6}", session.score), C_HUD_SCORE)?;
    if session.streak > 0 {
        at(out, 15, 0, &format!("Racha x{}", session.streak), C_HUD_STREAK)?;
    }

    // Level — centre
    centered(out, width, 0, &format!("[ NIVEL {} ]", session.level), C_HUD_LEVEL)?;

    // Countdown — right
    let time_str = format!("{:>3}s", session.time_remaining);
    let time_color = if session.time_remaining <= LOW_TIME {
        C_HUD_TIME_LOW
    } else {
        C_HUD_TIME
    };
    let rx = width.saturating_sub(time_str.chars().count() as u16 + 1);
    at(out, rx, 0, &time_str, time_color)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    row: u16,
) -> std::io::Result<u16> {
    let Some(id) = session.current_enemy else {
        return Ok(row);
    };
    let enemy = catalog::enemy(id);
    let weakness = catalog::weapon(enemy.weakness);

    centered(out, width, row, &format!("{}  {}", enemy.icon, enemy.name.to_uppercase()), C_ENEMY)?;
    centered(
        out,
        width,
        row + 1,
        &format!("♥ {}   Débil a: {} {}", enemy.hp, weakness.icon, weakness.name),
        Color::White,
    )?;
    Ok(row + 3)
}

fn draw_feedback<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    row: u16,
) -> std::io::Result<u16> {
    if let Some(feedback) = &session.feedback {
        let color = if feedback.is_miss() { C_MISS } else { C_HIT };
        centered(out, width, row, &feedback.to_string(), color)?;
    }
    Ok(row + 2)
}

fn draw_characters<W: Write>(out: &mut W, session: &Session, row: u16) -> std::io::Result<u16> {
    at(out, 3, row, "● Personaje (Abstracción)", C_HINT)?;
    for (i, character) in CHARACTERS.iter().enumerate() {
        let selected = session.selected_character == Some(character.id);
        let bonded = session.selected_weapon == Some(character.bonus);
        let marker = if selected { "▶" } else { " " };
        let line = format!("{} [{}] {} {}", marker, i + 1, character.icon, character.name);
        let r = row + 1 + i as u16;
        at(out, 3, r, &line, if selected { C_SELECTED } else { C_IDLE })?;
        if bonded {
            at(out, 30, r, "⚡ combo", C_BONUS)?;
        }
    }
    Ok(row + CHARACTERS.len() as u16 + 2)
}

fn draw_weapons<W: Write>(out: &mut W, session: &Session, row: u16) -> std::io::Result<u16> {
    at(out, 3, row, "● Arma (Implementación)", C_HINT)?;
    let weak_to = session.current_enemy.map(|e| catalog::enemy(e).weakness);
    for (i, weapon) in WEAPONS.iter().enumerate() {
        let selected = session.selected_weapon == Some(weapon.id);
        let marker = if selected { "▶" } else { " " };
        let key = crate::WEAPON_KEYS[i].to_ascii_uppercase();
        let line = format!(
            "{} [{}] {} {:<8} {:>2} DMG",
            marker, key, weapon.icon, weapon.name, weapon.power
        );
        let r = row + 1 + i as u16;
        at(out, 3, r, &line, if selected { C_SELECTED } else { C_IDLE })?;
        if weak_to == Some(weapon.id) {
            at(out, 30, r, "● debilidad", C_HIT)?;
        }
    }
    Ok(row + WEAPONS.len() as u16 + 2)
}

fn draw_attack_bar<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    row: u16,
) -> std::io::Result<()> {
    if session.resolving {
        return centered(out, width, row, "⚔️ Resolviendo...", C_HINT);
    }
    if session.selected_character.is_none() || session.selected_weapon.is_none() {
        return centered(out, width, row, "Elige tu equipo", C_HINT);
    }
    let Some(damage) = preview_damage(session) else {
        return Ok(());
    };
    let color = if damage.combo || damage.weakness {
        C_BONUS
    } else {
        Color::Cyan
    };
    centered(out, width, row, &format!("[ ATACAR  {} ]", damage.total), color)
}

// ── End screens ───────────────────────────────────────────────────────────────

fn draw_end<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let won = session.screen == Screen::Won;
    let (banner, color) = if won {
        ("║  🏆  VICTORIA      ║", Color::Yellow)
    } else {
        ("║  ☠️  DERROTA       ║", Color::Red)
    };
    let score_line = format!("Puntuación Final: {}", session.score);
    let level_line = format!("Nivel alcanzado: {}", session.level);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", color),
        (banner, color),
        ("╚════════════════════╝", color),
        (score_line.as_str(), Color::Yellow),
        (level_line.as_str(), Color::Blue),
        ("R - Reintentar   M - Salir al Menú   Q - Quit", Color::White),
    ];

    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        centered(out, width, start_row + i as u16, msg, *color)?;
    }

    Ok(())
}
