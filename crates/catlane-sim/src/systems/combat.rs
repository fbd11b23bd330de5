//! Attack resolution.
//!
//! An engaged unit swings when the absolute sim time since its last
//! attack reaches its cooldown. Units and towers take damage under the
//! same flat rule; health saturates at zero. No randomness.

use hecs::{Entity, World};

use catlane_core::components::{
    AttackState, CombatStats, Effect, Health, LanePos, Target, Towers, UnitTag,
};
use catlane_core::enums::{EffectKind, Team};

struct Strike {
    target: Target,
    damage: u32,
    attacker_team: Team,
    attacker_x: f64,
}

/// Resolve all ready attacks at absolute time `now_ms`.
pub fn run(world: &mut World, towers: &mut Towers, now_ms: f64, effects: &mut Vec<Effect>) {
    // Collect ready strikes first; applying damage while iterating the
    // attacker query would alias the Health borrows.
    let mut strikes: Vec<Strike> = Vec::new();
    for (_entity, (tag, pos, stats, attack)) in
        world.query_mut::<(&UnitTag, &LanePos, &CombatStats, &mut AttackState)>()
    {
        if !attack.engaged {
            continue;
        }
        let Some(target) = attack.target else {
            continue;
        };
        let ready = attack
            .last_attack_ms
            .is_none_or(|last| now_ms - last >= stats.attack_cooldown_ms);
        if !ready {
            continue;
        }
        attack.last_attack_ms = Some(now_ms);
        strikes.push(Strike {
            target,
            damage: stats.damage,
            attacker_team: tag.team,
            attacker_x: pos.x,
        });
    }

    for strike in strikes {
        match strike.target {
            Target::Unit(entity) => apply_unit_damage(world, entity, strike, effects),
            Target::Tower => {
                let tower = towers.get_mut(strike.attacker_team.opponent());
                tower.take_damage(strike.damage);
                effects.push(Effect::new(EffectKind::Attack, tower.x));
            }
        }
    }
}

fn apply_unit_damage(world: &mut World, entity: Entity, strike: Strike, effects: &mut Vec<Effect>) {
    // The target may already have been despawned in a previous tick's
    // cleanup; a stale handle is simply a missed swing.
    if let Ok(health) = world.query_one_mut::<&mut Health>(entity) {
        health.take_damage(strike.damage);
        effects.push(Effect::new(EffectKind::Attack, strike.attacker_x));
    }
}
