//! HUD and full-screen messages

use glam::Vec2;

use super::{Color, Font, Renderer, Sprite};
use crate::consts::*;
use crate::sim::{GameOverReason, GamePhase, GameSession, PauseReason, Rect};

/// Headline and prompt for a non-playing phase
pub fn pause_text(phase: GamePhase, level: u32) -> Option<(String, &'static str)> {
    let text = match phase {
        GamePhase::Playing => return None,
        GamePhase::Paused(PauseReason::Welcome) => (
            "Welcome to Snowball Rush!".to_string(),
            "Press 'Enter' to play!",
        ),
        GamePhase::Paused(PauseReason::LevelUp) => (
            format!("You've made it to level {level}!"),
            "Press 'Enter' to resume the game",
        ),
        GamePhase::GameOver(GameOverReason::LivesExhausted) => (
            "You lost all of your lives! Game Over!".to_string(),
            "Press 'Enter' to play again.",
        ),
        GamePhase::GameOver(GameOverReason::Overheat) => (
            "Your temperature exceeded 10°C! Game Over!".to_string(),
            "Press 'Enter' to play again.",
        ),
    };
    Some(text)
}

/// Temperature as shown on the HUD (truncated toward zero)
pub fn temperature_label(temperature: f64) -> String {
    format!("Temp {}°C", temperature.trunc() as i64)
}

/// Draw the top band: title, temperature, lives and level
pub fn draw_hud<R: Renderer>(renderer: &mut R, session: &GameSession) {
    let panel = Rect::new(
        Vec2::new(WINDOW_WIDTH / 2.0, HUD_HEIGHT / 2.0),
        Vec2::new(WINDOW_WIDTH, HUD_HEIGHT),
    );
    renderer.draw_sprite(Sprite::HudPanel, panel);

    renderer.draw_text(
        "Snowball Rush",
        Font::Title,
        Color::WHITE,
        Vec2::new(WINDOW_WIDTH / 2.0, 30.0),
    );
    renderer.draw_text(
        &temperature_label(session.player.temperature),
        Font::Regular,
        Color::WHITE,
        Vec2::new(85.0, 30.0),
    );
    renderer.draw_text(
        &format!("Lives {}", session.player.lives),
        Font::Regular,
        Color::WHITE,
        Vec2::new(525.0, 30.0),
    );
    renderer.draw_text(
        &format!("Level: {}", session.progression.level),
        Font::Regular,
        Color::WHITE,
        Vec2::new(WINDOW_WIDTH / 2.0, 80.0),
    );
}

/// Start a frame with the player and every projectile
pub fn draw_sprites<R: Renderer>(renderer: &mut R, session: &GameSession) {
    renderer.clear();
    renderer.draw_sprite(Sprite::Player, session.player.rect);
    for snowball in &session.snowballs {
        renderer.draw_sprite(Sprite::Snowball, snowball.rect);
    }
    for rock in &session.rocks {
        renderer.draw_sprite(Sprite::Rock, rock.rect);
    }
}

/// Draw the pause or game-over screen for the session's phase
pub fn draw_pause_screen<R: Renderer>(
    renderer: &mut R,
    session: &GameSession,
) -> crate::Result<()> {
    let Some((main, sub)) = pause_text(session.phase, session.progression.level) else {
        return Ok(());
    };

    renderer.clear();
    renderer.draw_text(
        &main,
        Font::Regular,
        Color::WHITE,
        Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - 100.0),
    );
    renderer.draw_text(
        sub,
        Font::Regular,
        Color::WHITE,
        Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 + 100.0),
    );
    renderer.present()
}
