//! Player/projectile contact resolution
//!
//! Overlapping projectiles are consumed in the same tick. Effects are applied
//! once per category, so two snowballs caught together still produce a single
//! reset and a single cue.

use super::entity::{Player, Projectile};
use crate::consts::HEALED_TEMPERATURE;

/// Contacts resolved during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactEvents {
    pub snowballs: usize,
    pub rocks: usize,
}

/// Remove every projectile overlapping the player, returning how many went
fn consume_overlapping(projectiles: &mut Vec<Projectile>, player: &Player) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| !p.rect.overlaps(&player.rect));
    before - projectiles.len()
}

/// Detect and apply contacts between the player and both projectile sets.
///
/// A snowball resets temperature to the healed value (its `heal_amount` is
/// not added). A rock costs exactly one life per tick (its `damage` is not
/// applied).
pub fn resolve(
    player: &mut Player,
    rocks: &mut Vec<Projectile>,
    snowballs: &mut Vec<Projectile>,
) -> ContactEvents {
    let contacts = ContactEvents {
        snowballs: consume_overlapping(snowballs, player),
        rocks: consume_overlapping(rocks, player),
    };

    if contacts.snowballs > 0 {
        player.temperature = HEALED_TEMPERATURE;
        log::debug!("Caught {} snowball(s)", contacts.snowballs);
    }

    if contacts.rocks > 0 {
        player.lives -= 1;
        log::debug!("Hit by {} rock(s), {} lives left", contacts.rocks, player.lives);
    }

    contacts
}
