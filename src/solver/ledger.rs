//! Budget and capacity bookkeeping.

use crate::models::Developer;

/// Running totals while a plan is being built.
///
/// Each developer can book `hours_per_day * deadline` hours. Budget and
/// capacity are soft limits: the ledger records overruns, it never
/// refuses a booking.
#[derive(Debug, Clone)]
pub struct AllocationLedger {
    budget: f64,
    spent: f64,
    remaining_hours: Vec<f64>,
}

impl AllocationLedger {
    /// Opens a ledger for the given pool, budget and horizon.
    pub fn new(developers: &[Developer], budget: f64, horizon_days: f64) -> Self {
        Self {
            budget,
            spent: 0.0,
            remaining_hours: developers
                .iter()
                .map(|d| d.capacity_hours(horizon_days))
                .collect(),
        }
    }

    /// Whether developer `d` can take `hours` more.
    #[inline]
    pub fn fits_capacity(&self, d: usize, hours: f64) -> bool {
        self.remaining_hours[d] >= hours
    }

    /// Whether `cost` more keeps spend within budget.
    #[inline]
    pub fn fits_budget(&self, cost: f64) -> bool {
        self.spent + cost <= self.budget
    }

    /// Records a booking.
    pub fn book(&mut self, d: usize, hours: f64, cost: f64) {
        self.remaining_hours[d] -= hours;
        self.spent += cost;
    }

    /// Total spend so far.
    pub fn spent(&self) -> f64 {
        self.spent
    }

    /// Budget left (negative when overrun).
    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.spent
    }

    /// Hours developer `d` can still book (negative when overcommitted).
    pub fn remaining_hours(&self, d: usize) -> f64 {
        self.remaining_hours[d]
    }
}
