//! Target acquisition: each unit resolves what it is fighting this tick.
//!
//! Candidates are opposing units strictly ahead in the unit's advance
//! direction, by minimum lane distance. The opposing tower joins the
//! race when inside its acquisition range; a distance tie between the
//! tower and a unit candidate resolves to the tower.

use std::collections::HashMap;

use hecs::{Entity, World};

use catlane_core::components::{AttackState, CombatStats, LanePos, Target, Towers, UnitTag};
use catlane_core::constants::TOWER_ACQUISITION_RANGE;
use catlane_core::enums::Team;

/// Resolve targets and engagement mode for every unit.
pub fn run(world: &mut World, towers: &Towers) {
    // Positions are read in one immutable pass so target resolution sees
    // a consistent view of the lane.
    let units: Vec<(Entity, f64, Team)> = {
        let mut query = world.query::<(&LanePos, &UnitTag)>();
        query
            .iter()
            .map(|(entity, (pos, tag))| (entity, pos.x, tag.team))
            .collect()
    };

    let mut decisions: HashMap<Entity, (Target, f64)> = HashMap::new();
    for &(entity, x, team) in &units {
        let direction = team.advance_direction();

        let mut best: Option<(Entity, f64)> = None;
        for &(other, other_x, other_team) in &units {
            if other_team == team {
                continue;
            }
            // Strictly ahead: behind or level with the unit is ignored.
            if (other_x - x) * direction <= 0.0 {
                continue;
            }
            let distance = (x - other_x).abs();
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((other, distance));
            }
        }

        let tower = towers.get(team.opponent());
        let tower_distance = (x - tower.x).abs();
        let tower_wins = tower_distance <= TOWER_ACQUISITION_RANGE
            && best.is_none_or(|(_, best_distance)| tower_distance <= best_distance);

        if tower_wins {
            decisions.insert(entity, (Target::Tower, tower_distance));
        } else if let Some((candidate, distance)) = best {
            decisions.insert(entity, (Target::Unit(candidate), distance));
        }
    }

    for (entity, (stats, attack)) in world.query_mut::<(&CombatStats, &mut AttackState)>() {
        match decisions.get(&entity) {
            Some(&(target, distance)) => {
                attack.target = Some(target);
                attack.engaged = distance <= stats.attack_range;
            }
            None => {
                attack.target = None;
                attack.engaged = false;
            }
        }
    }
}
