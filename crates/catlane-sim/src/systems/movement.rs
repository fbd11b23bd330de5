//! Lane movement: un-engaged units advance toward the opposing tower.

use hecs::World;

use catlane_core::components::{AttackState, CombatStats, LanePos, UnitTag};

/// Advance every unit that is not stopped by a target.
pub fn run(world: &mut World, dt_ms: f64) {
    for (_entity, (tag, pos, stats, attack)) in
        world.query_mut::<(&UnitTag, &mut LanePos, &CombatStats, &AttackState)>()
    {
        if attack.engaged {
            continue;
        }
        pos.x += tag.team.advance_direction() * stats.speed * (dt_ms / 1000.0);
    }
}
