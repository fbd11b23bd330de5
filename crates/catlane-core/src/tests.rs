#[cfg(test)]
mod tests {
    use crate::catalog::{CatalogError, UnitCatalog};
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::SimTime;

    /// Verify the enums round-trip through serde_json.
    #[test]
    fn test_team_serde() {
        for v in [Team::Ally, Team::Enemy] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Team = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_unit_kind_serde() {
        let variants = vec![
            UnitKind::Basic,
            UnitKind::Tank,
            UnitKind::Axe,
            UnitKind::Doge,
            UnitKind::Hippoe,
            UnitKind::Piggie,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: UnitKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Briefing,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Victory,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_serde() {
        let commands = vec![
            PlayerCommand::Deploy {
                unit: "basic".into(),
                x: 600.0,
            },
            PlayerCommand::UpgradeCapacity,
            PlayerCommand::SelectStage { stage: 3 },
            PlayerCommand::StartStage,
            PlayerCommand::AdvanceStage,
            PlayerCommand::RestartRun,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            GameEvent::MoneyChanged { balance: 60 },
            GameEvent::CapacityLevelChanged {
                level: 2,
                next_cost: Some(80),
            },
            GameEvent::StageUnlocked { stage: 2 },
            GameEvent::StageCompleted { stage: 1 },
            GameEvent::GameCompleted,
            GameEvent::StageOutcome { victory: true },
        ];
        for ev in events {
            let json = serde_json::to_string(&ev).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(ev, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stage, 0);
        assert!(back.ally_units.is_empty());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(16.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_lookup_known_types() {
        let catalog = UnitCatalog::default();
        for name in ["basic", "tank", "axe", "doge", "hippoe", "piggie"] {
            let archetype = catalog.lookup(name).unwrap();
            assert_eq!(archetype.kind.name(), name);
            assert!(archetype.health > 0);
        }
    }

    #[test]
    fn test_catalog_lookup_unknown_type() {
        let catalog = UnitCatalog::default();
        let err = catalog.lookup("nonexistent-type").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownUnitType("nonexistent-type".into())
        );
    }

    #[test]
    fn test_catalog_kill_rewards() {
        let catalog = UnitCatalog::default();
        assert_eq!(catalog.get(UnitKind::Doge).kill_reward, 15);
        assert_eq!(catalog.get(UnitKind::Hippoe).kill_reward, 70);
        assert_eq!(catalog.get(UnitKind::Piggie).kill_reward, 150);
        // Anything else falls back to the default reward.
        assert_eq!(catalog.get(UnitKind::Basic).kill_reward, 5);
    }

    #[test]
    fn test_advance_directions_oppose() {
        assert_eq!(Team::Ally.advance_direction(), -1.0);
        assert_eq!(Team::Enemy.advance_direction(), 1.0);
        assert_eq!(Team::Ally.opponent(), Team::Enemy);
    }
}
