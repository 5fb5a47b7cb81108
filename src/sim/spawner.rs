//! Projectile spawning and throw-rate gating
//!
//! Rocks are throttled by position rather than by time: a new rock waits
//! until every rock in flight has dropped below the level's threshold line.
//! Each rock comes with a pair of snowballs.

use rand::Rng;

use super::entity::Projectile;
use super::progression::ProgressionState;
use crate::consts::*;

/// Outcome of one spawner pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEvent {
    /// A rock is still above the threshold
    Gated,
    /// One rock and two snowballs entered the field
    Thrown,
    /// Quota met; waiting for the field to empty
    Draining,
    /// Quota met and the field is empty
    LevelCompleted,
}

/// Drop projectiles that have fallen past the bottom edge
pub fn purge_expired(rocks: &mut Vec<Projectile>, snowballs: &mut Vec<Projectile>) {
    rocks.retain(|p| !p.is_expired());
    snowballs.retain(|p| !p.is_expired());
}

/// No rock's top edge is still above `threshold`
pub fn rock_gate_open(rocks: &[Projectile], threshold: f32) -> bool {
    rocks.iter().all(|rock| rock.rect.top() >= threshold)
}

/// Run one spawner pass: purge, gate, count, then throw or report
pub fn spawn_tick<R: Rng>(
    progression: &mut ProgressionState,
    rocks: &mut Vec<Projectile>,
    snowballs: &mut Vec<Projectile>,
    rng: &mut R,
) -> SpawnEvent {
    purge_expired(rocks, snowballs);

    if !rock_gate_open(rocks, progression.rock_threshold) {
        return SpawnEvent::Gated;
    }

    if !progression.record_throw() {
        return if rocks.is_empty() && snowballs.is_empty() {
            SpawnEvent::LevelCompleted
        } else {
            SpawnEvent::Draining
        };
    }

    let rock_x = rng.random_range(ROCK_MARGIN..=WINDOW_WIDTH as i32 - ROCK_MARGIN) as f32;
    rocks.push(Projectile::rock(
        rock_x,
        SPAWN_Y,
        progression.rock_velocity,
        progression.rock_damage,
    ));

    let snowball_x =
        rng.random_range(SNOWBALL_MARGIN..=WINDOW_WIDTH as i32 - SNOWBALL_MARGIN) as f32;
    let offset = if rng.random_bool(0.5) {
        SNOWBALL_PAIR_OFFSET
    } else {
        -SNOWBALL_PAIR_OFFSET
    };
    snowballs.push(Projectile::snowball(
        snowball_x,
        SPAWN_Y,
        progression.snowball_velocity + SNOWBALL_SPEED_BONUS,
        progression.snowball_heal_amount,
    ));
    snowballs.push(Projectile::snowball(
        snowball_x + offset,
        SPAWN_Y,
        progression.snowball_velocity,
        progression.snowball_heal_amount,
    ));

    log::debug!(
        "Throw {}/{}: rock at x={}, snowballs at x={} and x={}",
        progression.rocks_thrown,
        progression.rocks_to_be_thrown,
        rock_x,
        snowball_x,
        snowball_x + offset
    );
    SpawnEvent::Thrown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ProjectileKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_first_throw_spawns_one_rock_two_snowballs() {
        let mut progression = ProgressionState::default();
        let (mut rocks, mut snowballs) = (Vec::new(), Vec::new());

        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng());
        assert_eq!(event, SpawnEvent::Thrown);
        assert_eq!(progression.rocks_thrown, 1);
        assert_eq!(rocks.len(), 1);
        assert_eq!(snowballs.len(), 2);

        let rock = &rocks[0];
        assert_eq!(rock.kind, ProjectileKind::Rock { damage: 3 });
        assert_eq!(rock.velocity, 10.0);
        assert_eq!(rock.rect.center.y, SPAWN_Y);
        assert!(rock.rect.center.x >= 32.0 && rock.rect.center.x <= 568.0);

        let (fast, slow) = (&snowballs[0], &snowballs[1]);
        assert_eq!(fast.velocity, 9.0);
        assert_eq!(slow.velocity, 7.0);
        assert_eq!((fast.rect.center.x - slow.rect.center.x).abs(), 50.0);
        assert!(fast.rect.center.x >= 64.0 && fast.rect.center.x <= 536.0);
    }

    #[test]
    fn test_gate_holds_while_rock_above_threshold() {
        let mut progression = ProgressionState::default();
        let (mut rocks, mut snowballs) = (Vec::new(), Vec::new());
        let mut rng = rng();

        spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(rocks.len(), 1);

        // Threshold is the window height: the rock must fall out of view first
        while rocks[0].rect.top() < WINDOW_HEIGHT {
            let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
            assert_eq!(event, SpawnEvent::Gated);
            assert_eq!(rocks.len(), 1);
            assert_eq!(progression.rocks_thrown, 1);
            rocks[0].advance();
        }

        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(event, SpawnEvent::Thrown);
        assert_eq!(progression.rocks_thrown, 2);
    }

    #[test]
    fn test_gate_opens_when_rock_removed() {
        let mut progression = ProgressionState::default();
        let (mut rocks, mut snowballs) = (Vec::new(), Vec::new());
        let mut rng = rng();

        spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(
            spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng),
            SpawnEvent::Gated
        );
        rocks.clear();
        assert_eq!(
            spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng),
            SpawnEvent::Thrown
        );
    }

    #[test]
    fn test_lower_threshold_allows_denser_rocks() {
        let mut progression = ProgressionState {
            rock_threshold: 150.0,
            ..Default::default()
        };
        let mut rocks = vec![Projectile::rock(100.0, 200.0, 10.0, 3)];
        let mut snowballs = Vec::new();
        // Top edge at 168 is below the 150 line
        assert_eq!(
            spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng()),
            SpawnEvent::Thrown
        );
        assert_eq!(rocks.len(), 2);
    }

    #[test]
    fn test_purge_runs_before_gating() {
        let mut progression = ProgressionState::default();
        let mut rocks = vec![Projectile::rock(100.0, WINDOW_HEIGHT + 40.0, 10.0, 3)];
        let mut snowballs = vec![Projectile::snowball(100.0, WINDOW_HEIGHT + 20.0, 7.0, 2)];

        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng());
        assert_eq!(event, SpawnEvent::Thrown);
        assert_eq!(rocks.len(), 1);
        assert_eq!(snowballs.len(), 2);
        assert!(rocks.iter().all(|r| r.rect.center.y == SPAWN_Y));
    }

    #[test]
    fn test_quota_drains_then_completes() {
        let mut progression = ProgressionState {
            rocks_thrown: 9,
            ..Default::default()
        };
        let mut rocks = Vec::new();
        let mut snowballs = vec![Projectile::snowball(100.0, 500.0, 7.0, 2)];
        let mut rng = rng();

        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(event, SpawnEvent::Draining);
        assert_eq!(progression.rocks_thrown, 10);
        assert!(rocks.is_empty());
        assert_eq!(snowballs.len(), 1, "no spawns while draining");

        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(event, SpawnEvent::Draining);
        assert_eq!(progression.rocks_thrown, 10);

        snowballs.clear();
        let event = spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng);
        assert_eq!(event, SpawnEvent::LevelCompleted);
    }

    #[test]
    fn test_nine_rocks_thrown_per_ten_quota() {
        let mut progression = ProgressionState::default();
        let (mut rocks, mut snowballs) = (Vec::new(), Vec::new());
        let mut rng = rng();
        let mut thrown = 0;

        loop {
            match spawn_tick(&mut progression, &mut rocks, &mut snowballs, &mut rng) {
                SpawnEvent::Thrown => thrown += 1,
                SpawnEvent::LevelCompleted => break,
                SpawnEvent::Gated | SpawnEvent::Draining => {}
            }
            rocks.clear();
            snowballs.clear();
        }
        assert_eq!(thrown, 9);
        assert_eq!(progression.rocks_thrown, progression.rocks_to_be_thrown);
    }
}
