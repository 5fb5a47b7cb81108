//! Fixed-tick simulation step
//!
//! `tick` is the only entry point the frontend needs: it applies input,
//! moves entities, and runs the session update while playing, or handles
//! the resume key while paused.

use super::collision::resolve;
use super::progression::{check_game_over, level_up, resume};
use super::spawner::{SpawnEvent, spawn_tick};
use super::state::{GameEvent, GameSession};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left/A held
    pub move_left: bool,
    /// Right/D held
    pub move_right: bool,
    /// Enter pressed (leaves pause and game-over screens)
    pub resume: bool,
    /// Demo mode - AI steers and dismisses pause screens
    pub autopilot: bool,
}

/// Advance the session by one tick, returning what happened
pub fn tick(session: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    let input = if input.autopilot {
        autopilot_input(session)
    } else {
        input.clone()
    };

    if !session.phase.is_playing() {
        return if input.resume {
            resume(session)
        } else {
            Vec::new()
        };
    }

    session.time_ticks += 1;
    session.player.steer(input.move_left, input.move_right);
    for projectile in session.snowballs.iter_mut().chain(session.rocks.iter_mut()) {
        projectile.advance();
    }

    update(session)
}

/// One session update: melt, contacts, game-over check, spawning.
///
/// Does nothing unless the session is playing.
pub fn update(session: &mut GameSession) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.phase.is_playing() {
        return events;
    }

    session.melt();

    let contacts = resolve(
        &mut session.player,
        &mut session.rocks,
        &mut session.snowballs,
    );
    if contacts.snowballs > 0 {
        events.push(GameEvent::SnowballContact {
            count: contacts.snowballs,
        });
    }
    if contacts.rocks > 0 {
        events.push(GameEvent::RockContact {
            count: contacts.rocks,
        });
    }

    if let Some(event) = check_game_over(session) {
        events.push(event);
        return events;
    }

    let (progression, rocks, snowballs, rng) = session.spawn_parts();
    if spawn_tick(progression, rocks, snowballs, rng) == SpawnEvent::LevelCompleted {
        events.push(level_up(session));
    }

    events
}

/// How close (vertically) a rock must be before the autopilot dodges it
const DODGE_DISTANCE: f32 = 220.0;

/// Demo-mode input: dismiss any pause, dodge the most pressing rock,
/// otherwise chase the lowest snowball that can still be caught
pub fn autopilot_input(session: &GameSession) -> TickInput {
    let mut input = TickInput {
        resume: !session.phase.is_playing(),
        ..Default::default()
    };
    if input.resume {
        return input;
    }

    let player = &session.player.rect;
    let px = player.center.x;
    let half_span = (player.size.x + ROCK_SIZE.x) / 2.0;

    let threat = session
        .rocks
        .iter()
        .filter(|r| r.rect.bottom() <= player.bottom())
        .filter(|r| player.top() - r.rect.bottom() < DODGE_DISTANCE)
        .filter(|r| (r.rect.center.x - px).abs() < half_span + session.player.speed)
        .max_by(|a, b| a.rect.center.y.total_cmp(&b.rect.center.y));

    if let Some(rock) = threat {
        // Dodge toward the side with more room
        let go_left = if rock.rect.center.x > px {
            player.left() > 0.0
        } else {
            player.right() >= WINDOW_WIDTH
        };
        input.move_left = go_left;
        input.move_right = !go_left;
        return input;
    }

    let target = session
        .snowballs
        .iter()
        .filter(|s| s.rect.top() < player.bottom())
        .max_by(|a, b| a.rect.center.y.total_cmp(&b.rect.center.y));

    if let Some(snowball) = target {
        let dx = snowball.rect.center.x - px;
        if dx.abs() > session.player.speed {
            input.move_left = dx < 0.0;
            input.move_right = dx > 0.0;
        }
    }

    input
}
