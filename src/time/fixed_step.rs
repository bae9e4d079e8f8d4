/// Outcome of one [`FixedStep::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Number of simulation updates that ran.
    pub updates: u32,
    /// Whether the backlog was discarded because it exceeded the cap.
    pub stalled: bool,
}

/// Fixed-timestep accumulator with a bounded catch-up count.
///
/// Simulation time trails real time and is advanced `step_ms` at a time, at
/// most `max_updates` times per rendered frame. When simulation time falls
/// more than `max_updates * step_ms` behind, the backlog is dropped and the
/// baseline reset to one step behind real time.
#[derive(Debug, Clone)]
pub struct FixedStep {
    simulation_time: Option<i64>,
    step_ms: i64,
    max_updates: u32,
}

impl FixedStep {
    pub fn new(step_ms: i64, max_updates: u32) -> Self {
        debug_assert!(step_ms > 0);
        Self {
            simulation_time: None,
            step_ms,
            max_updates,
        }
    }

    /// Starts simulation time at `time` instead of at the first `advance`.
    pub fn starting_at(time: i64, step_ms: i64, max_updates: u32) -> Self {
        Self {
            simulation_time: Some(time),
            ..Self::new(step_ms, max_updates)
        }
    }

    pub fn step_ms(&self) -> i64 {
        self.step_ms
    }

    /// Current simulation time, or `None` before the first `advance`.
    pub fn simulation_time(&self) -> Option<i64> {
        self.simulation_time
    }

    /// Catches simulation time up toward `real_time`, calling `update` with
    /// the step length once per step.
    ///
    /// The first call only records the baseline and runs no updates.
    pub fn advance<F>(&mut self, real_time: i64, mut update: F) -> StepReport
    where
        F: FnMut(i64),
    {
        let mut simulation_time = *self.simulation_time.get_or_insert(real_time);

        let max_delta = self.max_updates as i64 * self.step_ms;
        let delta = real_time - simulation_time;
        let stalled = delta > max_delta;
        if stalled {
            log::debug!("simulation {} ms behind, discarding backlog", delta);
            simulation_time = real_time - self.step_ms;
        }

        let mut updates = 0;
        while simulation_time < real_time && updates < self.max_updates {
            simulation_time += self.step_ms;
            update(self.step_ms);
            updates += 1;
        }

        self.simulation_time = Some(simulation_time);
        StepReport { updates, stalled }
    }
}
