//! Simulated annealing over assignment plans.
//!
//! The in-process sampler behind the quantum-inspired strategy. Starts
//! from the greedy plan and explores the plan space with two moves:
//!
//! - **Reassign**: give one project to a different developer.
//! - **Swap**: exchange the developers of two projects.
//!
//! A worse candidate is accepted with the Metropolis probability
//! `exp(-(E_new - E_old) / T)`. The temperature decays geometrically;
//! once it drops below the minimum the search only accepts improvements.
//! The best plan seen is returned.
//!
//! # Reference
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{AnnealingBackend, AssignmentModel, GreedySolver, Plan};
use crate::config::StochasticConfig;
use crate::error::SolverError;

/// Temperature management for the annealing loop.
pub trait CoolingSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature. Called once before the search.
    fn on_start(&mut self);

    /// Advances the temperature by one step.
    fn update(&mut self);

    /// Current temperature.
    fn current(&self) -> f64;

    /// Whether worsening moves are no longer accepted.
    fn is_frozen(&self) -> bool;
}

/// Geometric cooling: `T_{k+1} = T_k * alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    initial: f64,
    current: f64,
    alpha: f64,
    min_temp: f64,
}

impl GeometricCooling {
    /// Creates a geometric schedule.
    ///
    /// `alpha` must lie in (0, 1); [`crate::OptimizerConfig::validate`]
    /// enforces this for configured values.
    pub fn new(initial: f64, alpha: f64, min_temp: f64) -> Self {
        Self {
            initial,
            current: initial,
            alpha,
            min_temp,
        }
    }
}

impl CoolingSchedule for GeometricCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current *= self.alpha;
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.min_temp
    }
}

/// Neighborhood move applied to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    /// Give one project to another developer.
    Reassign,
    /// Exchange the developers of two projects.
    Swap,
}

impl MoveType {
    /// Applies the move in place. Returns `false` if the plan is unchanged.
    pub fn apply<R: Rng>(self, plan: &mut [usize], developer_count: usize, rng: &mut R) -> bool {
        let n = plan.len();
        if n == 0 || developer_count < 2 {
            return false;
        }
        match self {
            MoveType::Reassign => {
                let p = rng.random_range(0..n);
                // Draw from the other developers only.
                let mut d = rng.random_range(0..developer_count - 1);
                if d >= plan[p] {
                    d += 1;
                }
                plan[p] = d;
                true
            }
            MoveType::Swap => {
                if n < 2 {
                    return MoveType::Reassign.apply(plan, developer_count, rng);
                }
                let a = rng.random_range(0..n);
                let mut b = rng.random_range(0..n - 1);
                if b >= a {
                    b += 1;
                }
                if plan[a] == plan[b] {
                    return MoveType::Reassign.apply(plan, developer_count, rng);
                }
                plan.swap(a, b);
                true
            }
        }
    }
}

/// Steps between wall-clock checks (mask + 1).
const CLOCK_CHECK_MASK: u32 = 0x3F;

/// In-process annealing sampler.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealer {
    config: StochasticConfig,
}

impl SimulatedAnnealer {
    /// Creates a sampler with the given settings.
    pub fn new(config: StochasticConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    fn pick_move<R: Rng>(&self, rng: &mut R) -> MoveType {
        if rng.random_bool(self.config.reassign_probability.clamp(0.0, 1.0)) {
            MoveType::Reassign
        } else {
            MoveType::Swap
        }
    }

    /// Runs the search until the iteration budget is spent.
    ///
    /// # Errors
    /// [`SolverError::Timeout`] if `time_limit` elapses first.
    pub fn anneal(&self, model: &AssignmentModel, time_limit: Duration) -> Result<Plan, SolverError> {
        let started = Instant::now();
        let mut rng = self.rng();
        let mut cooling = GeometricCooling::new(
            self.config.initial_temperature,
            self.config.cooling_rate,
            self.config.min_temperature,
        );
        cooling.on_start();

        let mut current = GreedySolver::new().plan(model);
        let mut current_energy = model.energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;
        let start_energy = current_energy;

        let developer_count = model.developer_count();
        let mut accepted = 0u32;

        for step in 0..self.config.iterations {
            if step & CLOCK_CHECK_MASK == 0 && started.elapsed() >= time_limit {
                return Err(SolverError::Timeout { limit: time_limit });
            }

            let mut candidate = current.clone();
            if !self.pick_move(&mut rng).apply(&mut candidate, developer_count, &mut rng) {
                // Single developer: the greedy plan is the only plan.
                break;
            }

            let candidate_energy = model.energy(&candidate);
            if accept(current_energy, candidate_energy, &cooling, &mut rng) {
                current = candidate;
                current_energy = candidate_energy;
                accepted += 1;
                if current_energy < best_energy {
                    best.clone_from(&current);
                    best_energy = current_energy;
                }
            }
            cooling.update();
        }

        tracing::debug!(
            iterations = self.config.iterations,
            accepted,
            start_energy,
            best_energy,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "annealing finished"
        );
        Ok(best)
    }
}

/// Metropolis acceptance.
fn accept<C: CoolingSchedule, R: Rng>(current: f64, candidate: f64, cooling: &C, rng: &mut R) -> bool {
    let delta = candidate - current;
    if delta <= 0.0 {
        return true;
    }
    if cooling.is_frozen() || !delta.is_finite() {
        return false;
    }
    let t = cooling.current();
    if t <= 0.0 {
        return false;
    }
    rng.random::<f64>() < (-delta / t).exp()
}

impl AnnealingBackend for SimulatedAnnealer {
    fn name(&self) -> &str {
        "simulated-annealing"
    }

    fn sample(&self, model: &AssignmentModel, time_limit: Duration) -> Result<Plan, SolverError> {
        self.anneal(model, time_limit)
    }
}
