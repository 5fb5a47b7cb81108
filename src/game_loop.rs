//! Fixed-tick game loop
//!
//! One frame: poll input, draw the sprites, simulate, draw the HUD, present,
//! wait. Sprites go down before the tick so a projectile caught this frame
//! is still shown. Pause and game-over are session phases checked every
//! frame; while in one, the loop draws the message once and then only polls
//! input until resume or quit.

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::{AudioPlayer, MusicTrack, SoundCue};
use crate::error::Result;
use crate::platform::{InputEvent, InputSource, Key};
use crate::records::{LevelRecord, LevelRecords};
use crate::renderer::{Renderer, hud};
use crate::sim::{GameEvent, GameSession, TickInput, tick};

/// Sleeps out the remainder of each frame to hold a fixed tick rate
#[derive(Debug)]
pub struct FrameClock {
    period: Option<Duration>,
    last_tick: Instant,
}

impl FrameClock {
    /// Clock for `fps` ticks per second; 0 never waits
    pub fn new(fps: u32) -> Self {
        Self {
            period: (fps > 0).then(|| Duration::from_secs(1) / fps),
            last_tick: Instant::now(),
        }
    }

    pub fn unthrottled() -> Self {
        Self::new(0)
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        let now = Instant::now();
        let deadline = self.last_tick + period;
        if deadline > now {
            thread::sleep(deadline - now);
            self.last_tick = deadline;
        } else {
            // Running behind: don't try to catch up
            self.last_tick = now;
        }
    }
}

/// Everything the loop talks to, built once at startup
pub struct GameContext<R, A, I> {
    pub renderer: R,
    pub audio: A,
    pub input: I,
    pub clock: FrameClock,
}

impl<R: Renderer, A: AudioPlayer, I: InputSource> GameContext<R, A, I> {
    pub fn new(renderer: R, audio: A, input: I, clock: FrameClock) -> Self {
        Self {
            renderer,
            audio,
            input,
            clock,
        }
    }
}

/// Translate one batch of events into tick input; `None` means quit
fn tick_input(events: &[InputEvent]) -> Option<TickInput> {
    let mut input = TickInput::default();
    for event in events {
        match *event {
            InputEvent::Quit => return None,
            InputEvent::KeyDown(Key::Enter) => input.resume = true,
            InputEvent::KeyDown(key) | InputEvent::KeyHeld(key) => {
                input.move_left |= key.is_left();
                input.move_right |= key.is_right();
            }
        }
    }
    Some(input)
}

/// Drives a [`GameSession`] against its collaborators
pub struct GameLoop {
    running: bool,
    session: GameSession,
    autopilot: bool,
    frame_limit: Option<u64>,
    frames: u64,
    /// The current pause screen is already on display
    pause_drawn: bool,
    records: LevelRecords,
}

impl GameLoop {
    pub fn new(seed: u64) -> Self {
        Self {
            running: true,
            session: GameSession::new(seed),
            autopilot: false,
            frame_limit: None,
            frames: 0,
            pause_drawn: false,
            records: LevelRecords::new(),
        }
    }

    /// Let the AI play (demo/headless mode)
    pub fn with_autopilot(mut self, autopilot: bool) -> Self {
        self.autopilot = autopilot;
        self
    }

    /// Stop after `limit` frames
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Start from an existing records table
    pub fn with_records(mut self, records: LevelRecords) -> Self {
        self.records = records;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn records(&self) -> &LevelRecords {
        &self.records
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run until quit (or the frame limit). Music starts before the welcome
    /// screen.
    pub fn run<R, A, I>(&mut self, ctx: &mut GameContext<R, A, I>) -> Result<()>
    where
        R: Renderer,
        A: AudioPlayer,
        I: InputSource,
    {
        log::info!("Game loop starting (seed {})", self.session.seed);
        ctx.audio.play_looping(MusicTrack::Background);

        while self.running {
            self.frame(ctx)?;
            if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
                log::info!("Frame limit reached after {} frames", self.frames);
                self.running = false;
            }
        }

        log::info!(
            "Game loop stopped after {} frames at level {}",
            self.frames,
            self.session.progression.level
        );
        Ok(())
    }

    /// One iteration of the loop
    pub fn frame<R, A, I>(&mut self, ctx: &mut GameContext<R, A, I>) -> Result<()>
    where
        R: Renderer,
        A: AudioPlayer,
        I: InputSource,
    {
        let events = ctx.input.poll()?;
        let Some(mut input) = tick_input(&events) else {
            log::info!("Quit requested");
            self.running = false;
            return Ok(());
        };
        input.autopilot = self.autopilot;

        let was_playing = self.session.phase.is_playing();
        if was_playing {
            hud::draw_sprites(&mut ctx.renderer, &self.session);
        }

        let events = tick(&mut self.session, &input);
        self.dispatch(&events, &mut ctx.audio);

        if self.session.phase.is_playing() {
            if !was_playing {
                hud::draw_sprites(&mut ctx.renderer, &self.session);
            }
            self.pause_drawn = false;
            hud::draw_hud(&mut ctx.renderer, &self.session);
            ctx.renderer.present()?;
        } else if !self.pause_drawn {
            hud::draw_pause_screen(&mut ctx.renderer, &self.session)?;
            self.pause_drawn = true;
        }

        ctx.clock.wait();
        self.frames += 1;
        Ok(())
    }

    /// Route simulation events to audio and records
    fn dispatch<A: AudioPlayer>(&mut self, events: &[GameEvent], audio: &mut A) {
        for event in events {
            match *event {
                GameEvent::SnowballContact { .. } => audio.play_once(SoundCue::SnowballCollision),
                GameEvent::RockContact { .. } => audio.play_once(SoundCue::RockCollision),
                GameEvent::LevelUp { .. } => audio.play_once(SoundCue::LevelUp),
                GameEvent::GameOver { level, ticks, .. } => {
                    audio.stop_music();
                    let record = LevelRecord {
                        level,
                        ticks,
                        seed: self.session.seed,
                    };
                    if let Some(rank) = self.records.add(record) {
                        log::info!("New record #{rank}: level {level} in {ticks} ticks");
                    }
                }
                GameEvent::SessionReset => audio.play_looping(MusicTrack::Background),
                GameEvent::Resumed(_) => {}
            }
        }
    }
}
