//! Cleanup system: removes dead and escaped units at end of tick.
//!
//! Removal is deferred through a pre-allocated despawn buffer so the
//! collections are never mutated mid-iteration. Enemy deaths credit the
//! archetype kill reward to the economy; escapes are silent.

use hecs::{Entity, World};

use catlane_core::catalog::UnitCatalog;
use catlane_core::components::{Effect, Health, LanePos, UnitTag};
use catlane_core::constants::LANE_LENGTH;
use catlane_core::enums::{EffectKind, Team};

use catlane_campaign::economy::Economy;

/// Remove units whose health reached zero (with death rewards) and units
/// that crossed the far lane edge without being stopped by a target.
pub fn run(
    world: &mut World,
    catalog: &UnitCatalog,
    economy: &mut Economy,
    effects: &mut Vec<Effect>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (tag, health, pos)) in world.query_mut::<(&UnitTag, &Health, &LanePos)>() {
        if health.current == 0 {
            if tag.team == Team::Enemy {
                economy.add(catalog.get(tag.kind).kill_reward);
            }
            effects.push(Effect::new(EffectKind::Explosion, pos.x));
            despawn_buffer.push(entity);
        } else if escaped(tag.team, pos.x) {
            // Walked off the far edge without reaching the tower: removed
            // with no reward or penalty.
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn escaped(team: Team, x: f64) -> bool {
    match team {
        Team::Ally => x <= 0.0,
        Team::Enemy => x >= LANE_LENGTH,
    }
}
