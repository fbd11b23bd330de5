//! The in-stage resource economy: a clamped money balance, passive
//! income on a fixed timer, and a bounded capacity upgrade ladder.

use catlane_core::constants::*;

/// Economy operation failures. Failed operations are normal outcomes the
/// caller checks; nothing here panics or aborts a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("capacity level already at maximum")]
    MaxLevelReached,
}

/// Money balance and capacity ladder. Invariants: `0 <= balance <=
/// capacity` and `1 <= capacity_level <= MAX_CAPACITY_LEVEL`.
#[derive(Debug, Clone)]
pub struct Economy {
    balance: u32,
    capacity: u32,
    capacity_level: u32,
    income_per_tick: u32,
    passive_timer_ms: f64,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            balance: START_BALANCE,
            capacity: START_CAPACITY,
            capacity_level: 1,
            income_per_tick: BASE_INCOME,
            passive_timer_ms: 0.0,
        }
    }
}

impl Economy {
    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn capacity_level(&self) -> u32 {
        self.capacity_level
    }

    pub fn income_per_tick(&self) -> u32 {
        self.income_per_tick
    }

    /// Accumulate `dt_ms` into the passive-income timer; every full
    /// interval credits `income_per_tick` and resets the timer.
    pub fn tick(&mut self, dt_ms: f64) {
        self.passive_timer_ms += dt_ms;
        if self.passive_timer_ms >= PASSIVE_INCOME_INTERVAL_MS {
            self.add(self.income_per_tick);
            self.passive_timer_ms = 0.0;
        }
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.balance >= amount
    }

    /// Spend `amount` if affordable. Returns whether the balance was
    /// reduced; a failed spend mutates nothing.
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.can_afford(amount) {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    /// Credit `amount`, clamped to capacity.
    pub fn add(&mut self, amount: u32) {
        self.balance = (self.balance + amount).min(self.capacity);
    }

    /// Cost of the next capacity level, or `None` at max level.
    pub fn upgrade_cost(&self) -> Option<u32> {
        if self.capacity_level >= MAX_CAPACITY_LEVEL {
            None
        } else {
            Some((self.capacity_level + 1) * UPGRADE_COST_STEP)
        }
    }

    /// Buy the next capacity level: pay the upgrade cost, bump the
    /// level, and recalculate capacity and income.
    pub fn upgrade_capacity_level(&mut self) -> Result<(), EconomyError> {
        let cost = self.upgrade_cost().ok_or(EconomyError::MaxLevelReached)?;
        if !self.spend(cost) {
            return Err(EconomyError::InsufficientFunds);
        }
        self.capacity_level += 1;
        self.recalculate();
        Ok(())
    }

    /// Restore stage-1 defaults. Used when the player restarts the run.
    pub fn reset_full(&mut self) {
        *self = Economy::default();
    }

    /// Reset for the next stage. Numerically identical to `reset_full`:
    /// upgrades intentionally do not carry across stages.
    pub fn reset_for_next_stage(&mut self) {
        self.reset_full();
    }

    fn recalculate(&mut self) {
        self.capacity = START_CAPACITY + (self.capacity_level - 1) * CAPACITY_PER_LEVEL;
        let bonus = INCOME_BONUS_PER_LEVEL * (self.capacity_level - 1) as f64;
        self.income_per_tick = (BASE_INCOME as f64 * (1.0 + bonus)).round() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_state() {
        let eco = Economy::default();
        assert_eq!(eco.balance(), 50);
        assert_eq!(eco.capacity(), 100);
        assert_eq!(eco.capacity_level(), 1);
        assert_eq!(eco.income_per_tick(), 10);
    }

    #[test]
    fn passive_income_after_full_interval() {
        let mut eco = Economy::default();
        eco.tick(999.0);
        assert_eq!(eco.balance(), 50);
        eco.tick(1.0);
        assert_eq!(eco.balance(), 60);
    }

    #[test]
    fn balance_clamped_to_capacity() {
        let mut eco = Economy::default();
        eco.add(500);
        assert_eq!(eco.balance(), 100);
        // Income ticks cannot push past the cap either.
        eco.tick(1000.0);
        assert_eq!(eco.balance(), 100);
    }

    #[test]
    fn failed_spend_mutates_nothing() {
        let mut eco = Economy::default();
        assert!(!eco.spend(51));
        assert_eq!(eco.balance(), 50);
        assert!(eco.spend(50));
        assert_eq!(eco.balance(), 0);
    }

    #[test]
    fn upgrade_ladder_step() {
        let mut eco = Economy::default();
        eco.add(40);
        assert_eq!(eco.balance(), 90);
        eco.upgrade_capacity_level().unwrap();
        assert_eq!(eco.balance(), 10);
        assert_eq!(eco.capacity_level(), 2);
        assert_eq!(eco.capacity(), 150);
        // Income grows 5% per level, rounded.
        assert_eq!(eco.income_per_tick(), 11);
    }

    #[test]
    fn upgrade_fails_without_funds() {
        let mut eco = Economy::default();
        assert_eq!(
            eco.upgrade_capacity_level(),
            Err(EconomyError::InsufficientFunds)
        );
        assert_eq!(eco.capacity_level(), 1);
        assert_eq!(eco.balance(), 50);
    }

    #[test]
    fn upgrade_fails_at_max_level() {
        let mut eco = Economy::default();
        for _ in 1..MAX_CAPACITY_LEVEL {
            eco.add(1000);
            eco.upgrade_capacity_level().unwrap();
        }
        assert_eq!(eco.capacity_level(), MAX_CAPACITY_LEVEL);
        assert_eq!(eco.upgrade_cost(), None);
        eco.add(1000);
        assert_eq!(
            eco.upgrade_capacity_level(),
            Err(EconomyError::MaxLevelReached)
        );
        assert_eq!(eco.capacity_level(), MAX_CAPACITY_LEVEL);
    }

    #[test]
    fn reset_full_is_idempotent() {
        let mut eco = Economy::default();
        eco.add(40);
        eco.upgrade_capacity_level().unwrap();
        eco.reset_full();
        let snapshot = (
            eco.balance(),
            eco.capacity(),
            eco.capacity_level(),
            eco.income_per_tick(),
        );
        eco.reset_full();
        assert_eq!(
            snapshot,
            (
                eco.balance(),
                eco.capacity(),
                eco.capacity_level(),
                eco.income_per_tick()
            )
        );
        assert_eq!(snapshot, (50, 100, 1, 10));
    }

    #[test]
    fn next_stage_reset_matches_full_reset() {
        let mut a = Economy::default();
        let mut b = Economy::default();
        a.add(100);
        b.add(100);
        a.upgrade_capacity_level().unwrap();
        b.upgrade_capacity_level().unwrap();
        a.reset_full();
        b.reset_for_next_stage();
        assert_eq!(a.balance(), b.balance());
        assert_eq!(a.capacity(), b.capacity());
        assert_eq!(a.capacity_level(), b.capacity_level());
        assert_eq!(a.income_per_tick(), b.income_per_tick());
    }
}
