//! Difficulty progression and the phase state machine
//!
//! ```text
//!   Paused(Welcome) --resume--> Playing
//!   Playing --quota met & field clear--> Paused(LevelUp) --resume--> Playing
//!   Playing --lives <= 0 | temp >= 10--> GameOver(reason) --resume--> reset, Playing
//! ```

use super::entity::Player;
use super::state::{GameEvent, GameSession};
use crate::consts::*;

/// Why the game is paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Title screen shown once at startup
    Welcome,
    /// A level was just completed
    LevelUp,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    LivesExhausted,
    Overheat,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Waiting for the resume key
    Paused(PauseReason),
    /// Run ended; resuming starts a fresh run
    GameOver(GameOverReason),
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Per-level difficulty parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionState {
    pub level: u32,
    /// Temperature gained per tick
    pub melt_rate: f64,
    /// A new rock waits until no rock's top edge is above this line
    pub rock_threshold: f32,
    /// Throw quota for the current level
    pub rocks_to_be_thrown: u32,
    /// Gate openings counted this level, saturating at the quota
    pub rocks_thrown: u32,
    pub rock_damage: u32,
    pub rock_velocity: f32,
    pub snowball_velocity: f32,
    pub snowball_heal_amount: u32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            level: 1,
            melt_rate: START_MELT_RATE,
            rock_threshold: WINDOW_HEIGHT,
            rocks_to_be_thrown: START_ROCKS_TO_BE_THROWN,
            rocks_thrown: 0,
            rock_damage: ROCK_DAMAGE,
            rock_velocity: ROCK_VELOCITY,
            snowball_velocity: SNOWBALL_VELOCITY,
            snowball_heal_amount: SNOWBALL_HEAL_AMOUNT,
        }
    }
}

impl ProgressionState {
    /// Count one gate opening; returns true while the quota still allows a throw
    pub fn record_throw(&mut self) -> bool {
        self.rocks_thrown = (self.rocks_thrown + 1).min(self.rocks_to_be_thrown);
        self.rocks_thrown < self.rocks_to_be_thrown
    }

    /// Advance to the next level and scale difficulty
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.rocks_thrown = 0;
        self.rocks_to_be_thrown += ROCKS_PER_LEVEL;
        self.melt_rate = (self.melt_rate + MELT_RATE_STEP).min(MAX_MELT_RATE);
        self.rock_threshold = (self.rock_threshold - ROCK_THRESHOLD_STEP).max(MIN_ROCK_THRESHOLD);
    }
}

/// Game-over condition; running out of lives takes precedence over melting
pub fn game_over_reason(player: &Player) -> Option<GameOverReason> {
    if player.lives <= 0 {
        Some(GameOverReason::LivesExhausted)
    } else if player.temperature >= MELTING_TEMPERATURE {
        Some(GameOverReason::Overheat)
    } else {
        None
    }
}

/// Playing -> Paused(LevelUp)
pub fn level_up(session: &mut GameSession) -> GameEvent {
    session.progression.advance_level();
    session.player.recenter();
    session.phase = GamePhase::Paused(PauseReason::LevelUp);

    let p = &session.progression;
    log::info!(
        "Level {}: melt rate {:.1}, rock threshold {}, quota {}",
        p.level,
        p.melt_rate,
        p.rock_threshold,
        p.rocks_to_be_thrown
    );
    GameEvent::LevelUp { level: p.level }
}

/// Playing -> GameOver(reason), if the player is out of lives or melted
pub fn check_game_over(session: &mut GameSession) -> Option<GameEvent> {
    let reason = game_over_reason(&session.player)?;
    session.phase = GamePhase::GameOver(reason);
    log::info!(
        "Game over ({:?}) at level {} after {} ticks",
        reason,
        session.progression.level,
        session.time_ticks
    );
    Some(GameEvent::GameOver {
        reason,
        level: session.progression.level,
        ticks: session.time_ticks,
    })
}

/// Leave a pause or game-over screen
pub fn resume(session: &mut GameSession) -> Vec<GameEvent> {
    match session.phase {
        GamePhase::Playing => Vec::new(),
        GamePhase::Paused(reason) => {
            session.phase = GamePhase::Playing;
            vec![GameEvent::Resumed(reason)]
        }
        GamePhase::GameOver(_) => {
            session.reset();
            session.phase = GamePhase::Playing;
            log::info!("New run started");
            vec![GameEvent::SessionReset]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_throw_saturates_at_quota() {
        let mut p = ProgressionState::default();
        for _ in 0..9 {
            assert!(p.record_throw());
        }
        assert_eq!(p.rocks_thrown, 9);
        assert!(!p.record_throw());
        assert_eq!(p.rocks_thrown, 10);
        assert!(!p.record_throw());
        assert_eq!(p.rocks_thrown, 10);
    }

    #[test]
    fn test_advance_level() {
        let mut p = ProgressionState {
            rocks_thrown: 10,
            ..Default::default()
        };
        p.advance_level();
        assert_eq!(p.level, 2);
        assert_eq!(p.rocks_thrown, 0);
        assert_eq!(p.rocks_to_be_thrown, 15);
        assert!((p.melt_rate - 0.2).abs() < 1e-9);
        assert_eq!(p.rock_threshold, 700.0);
    }

    #[test]
    fn test_game_over_reason_precedence() {
        let mut player = Player::default();
        assert_eq!(game_over_reason(&player), None);

        player.temperature = 10.0;
        assert_eq!(game_over_reason(&player), Some(GameOverReason::Overheat));

        player.lives = 0;
        assert_eq!(game_over_reason(&player), Some(GameOverReason::LivesExhausted));

        player.temperature = 9.99;
        player.lives = -1;
        assert_eq!(game_over_reason(&player), Some(GameOverReason::LivesExhausted));
    }

    #[test]
    fn test_level_up_transition() {
        let mut session = GameSession::new(1);
        session.phase = GamePhase::Playing;
        session.player.rect.center.x = 100.0;
        session.player.lives = 2;
        session.player.temperature = -42.0;

        let event = level_up(&mut session);
        assert_eq!(event, GameEvent::LevelUp { level: 2 });
        assert_eq!(session.phase, GamePhase::Paused(PauseReason::LevelUp));
        assert_eq!(session.player.rect.center.x, 300.0);
        assert_eq!(session.player.lives, 2);
        assert_eq!(session.player.temperature, -42.0);
    }

    #[test]
    fn test_resume_from_level_up_keeps_progress() {
        let mut session = GameSession::new(1);
        session.phase = GamePhase::Playing;
        level_up(&mut session);

        let events = resume(&mut session);
        assert_eq!(events, vec![GameEvent::Resumed(PauseReason::LevelUp)]);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.progression.level, 2);
    }

    #[test]
    fn test_resume_from_game_over_resets() {
        let mut session = GameSession::new(1);
        session.phase = GamePhase::Playing;
        session.progression.advance_level();
        session.player.lives = 0;
        assert!(check_game_over(&mut session).is_some());
        assert_eq!(
            session.phase,
            GamePhase::GameOver(GameOverReason::LivesExhausted)
        );

        let events = resume(&mut session);
        assert_eq!(events, vec![GameEvent::SessionReset]);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.progression, ProgressionState::default());
        assert_eq!(session.player.lives, 3);
    }

    #[test]
    fn test_resume_while_playing_is_noop() {
        let mut session = GameSession::new(1);
        session.phase = GamePhase::Playing;
        assert!(resume(&mut session).is_empty());
        assert_eq!(session.phase, GamePhase::Playing);
    }

    proptest! {
        #[test]
        fn prop_difficulty_stays_clamped(levels in 0usize..200) {
            let mut p = ProgressionState::default();
            for _ in 0..levels {
                p.advance_level();
                prop_assert!(p.melt_rate >= START_MELT_RATE && p.melt_rate <= MAX_MELT_RATE);
                prop_assert!(p.rock_threshold >= MIN_ROCK_THRESHOLD && p.rock_threshold <= WINDOW_HEIGHT);
            }
            prop_assert_eq!(p.level as usize, levels + 1);
            prop_assert_eq!(p.rocks_to_be_thrown as usize, 10 + 5 * levels);
        }

        #[test]
        fn prop_rocks_thrown_never_exceeds_quota(openings in 0u32..100, quota in 1u32..50) {
            let mut p = ProgressionState {
                rocks_to_be_thrown: quota,
                ..Default::default()
            };
            for _ in 0..openings {
                p.record_throw();
                prop_assert!(p.rocks_thrown <= p.rocks_to_be_thrown);
            }
        }
    }
}
