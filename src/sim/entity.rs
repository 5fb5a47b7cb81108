//! Moving entities: the player and the falling projectiles
//!
//! Positions are center-based. Every entity carries an axis-aligned
//! rectangle matching its sprite footprint; overlap tests use it directly.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle stored as center + size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not touch
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The snowperson
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal step per tick
    pub speed: f32,
    /// Body temperature in °C (game over at [`MELTING_TEMPERATURE`])
    pub temperature: f64,
    pub lives: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(Self::home(), PLAYER_SIZE),
            speed: PLAYER_SPEED,
            temperature: STARTING_TEMPERATURE,
            lives: STARTING_LIVES,
        }
    }
}

impl Player {
    /// Starting position: horizontally centered, resting on the bottom edge
    fn home() -> Vec2 {
        Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT - PLAYER_SIZE.y / 2.0)
    }

    /// Move back to the horizontal center, keeping lives and temperature
    pub fn recenter(&mut self) {
        self.rect.center.x = Self::home().x;
    }

    /// Restore the starting position, temperature and lives
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one tick of held direction keys.
    ///
    /// Each direction only moves while that edge is still inside the window,
    /// so the player can overshoot by at most one step.
    pub fn steer(&mut self, left: bool, right: bool) {
        if left && self.rect.left() > 0.0 {
            self.rect.center.x -= self.speed;
        }
        if right && self.rect.right() < WINDOW_WIDTH {
            self.rect.center.x += self.speed;
        }
    }
}

/// What a projectile does on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Carries a damage value; contact costs one life regardless
    Rock { damage: u32 },
    /// Carries a heal amount; contact resets temperature regardless
    Snowball { heal_amount: u32 },
}

/// A falling rock or snowball
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub rect: Rect,
    /// Downward speed in pixels per tick
    pub velocity: f32,
}

impl Projectile {
    pub fn rock(x: f32, y: f32, velocity: f32, damage: u32) -> Self {
        Self {
            kind: ProjectileKind::Rock { damage },
            rect: Rect::new(Vec2::new(x, y), ROCK_SIZE),
            velocity,
        }
    }

    pub fn snowball(x: f32, y: f32, velocity: f32, heal_amount: u32) -> Self {
        Self {
            kind: ProjectileKind::Snowball { heal_amount },
            rect: Rect::new(Vec2::new(x, y), SNOWBALL_SIZE),
            velocity,
        }
    }

    /// Fall by one tick's worth of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.rect.center.y += self.velocity;
    }

    /// Off the bottom of the visible area
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.rect.top() > WINDOW_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect.left(), 90.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 45.0);
        assert_eq!(rect.bottom(), 55.0);
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));

        let c = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_player_starts_at_bottom_center() {
        let player = Player::default();
        assert_eq!(player.rect.center, Vec2::new(300.0, 768.0));
        assert_eq!(player.rect.bottom(), WINDOW_HEIGHT);
        assert_eq!(player.lives, 3);
        assert_eq!(player.temperature, -500.0);
    }

    #[test]
    fn test_player_steer_stops_at_edges() {
        let mut player = Player::default();
        for _ in 0..100 {
            player.steer(true, false);
        }
        assert!(player.rect.left() <= 0.0);
        assert!(player.rect.left() > -player.speed);

        for _ in 0..100 {
            player.steer(false, true);
        }
        assert!(player.rect.right() >= WINDOW_WIDTH);
        assert!(player.rect.right() < WINDOW_WIDTH + player.speed);
    }

    #[test]
    fn test_player_steer_both_keys_cancel() {
        let mut player = Player::default();
        player.steer(true, true);
        assert_eq!(player.rect.center.x, 300.0);
    }

    #[test]
    fn test_recenter_keeps_vitals() {
        let mut player = Player::default();
        player.rect.center.x = 40.0;
        player.lives = 1;
        player.temperature = 3.0;
        player.recenter();
        assert_eq!(player.rect.center.x, 300.0);
        assert_eq!(player.lives, 1);
        assert_eq!(player.temperature, 3.0);
    }

    #[test]
    fn test_projectile_advance_and_expiry() {
        let mut rock = Projectile::rock(100.0, SPAWN_Y, 10.0, 3);
        rock.advance();
        assert_eq!(rock.rect.center.y, -90.0);
        assert!(!rock.is_expired());

        rock.rect.center.y = WINDOW_HEIGHT + ROCK_SIZE.y / 2.0;
        assert!(!rock.is_expired(), "top exactly at the edge is still visible");
        rock.advance();
        assert!(rock.is_expired());
    }
}
