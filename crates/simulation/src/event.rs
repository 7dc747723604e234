//! Run events handed to an explicit, caller-owned log.
//!
//! The runner never publishes to a global bus. Callers pass an [`EventLog`]
//! into each run and inspect it afterwards.

use eqsim_domain::value_objects::percentiles::Percentiles;

/// Types of events a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEventType {
    /// Generation started.
    RunStarted,
    /// A trajectory reached zero equity.
    TrajectoryRuined,
    /// Generation and aggregation finished.
    RunCompleted,
    /// The run was aborted through its cancellation flag.
    RunCancelled,
}

/// A run event with its context.
#[derive(Debug, Clone, PartialEq)]
pub struct RunEvent {
    /// Trial the event belongs to, if any.
    pub trial: Option<usize>,
    /// Time index the event belongs to, if any.
    pub step: Option<usize>,
    /// Type of event.
    pub event_type: RunEventType,
    /// Additional event-specific data.
    pub data: EventData,
}

/// Event-specific data payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    /// No additional data.
    None,
    /// Run started data.
    RunStarted {
        /// Trajectories requested.
        trials: usize,
        /// Steps per trajectory.
        steps: usize,
        /// Return model name.
        model: &'static str,
        /// Seed of the run.
        seed: u64,
    },
    /// Run completed data.
    RunCompleted {
        /// Final equity percentiles.
        final_equity: Percentiles,
        /// Max drawdown of the representative trajectory.
        max_drawdown: f64,
        /// Fraction of ruined trajectories.
        ruin_probability: f64,
    },
    /// Run cancelled data.
    RunCancelled {
        /// Trajectories finished before cancellation.
        completed: usize,
        /// Trajectories requested.
        requested: usize,
    },
}

impl RunEvent {
    /// Creates a run started event.
    #[must_use]
    pub fn run_started(trials: usize, steps: usize, model: &'static str, seed: u64) -> Self {
        Self {
            trial: None,
            step: None,
            event_type: RunEventType::RunStarted,
            data: EventData::RunStarted {
                trials,
                steps,
                model,
                seed,
            },
        }
    }

    /// Creates a ruin event for `trial` at time index `step`.
    #[must_use]
    pub fn trajectory_ruined(trial: usize, step: usize) -> Self {
        Self {
            trial: Some(trial),
            step: Some(step),
            event_type: RunEventType::TrajectoryRuined,
            data: EventData::None,
        }
    }

    /// Creates a run completed event.
    #[must_use]
    pub fn run_completed(final_equity: Percentiles, max_drawdown: f64, ruin_probability: f64) -> Self {
        Self {
            trial: None,
            step: None,
            event_type: RunEventType::RunCompleted,
            data: EventData::RunCompleted {
                final_equity,
                max_drawdown,
                ruin_probability,
            },
        }
    }

    /// Creates a run cancelled event.
    #[must_use]
    pub fn run_cancelled(completed: usize, requested: usize) -> Self {
        Self {
            trial: None,
            step: None,
            event_type: RunEventType::RunCancelled,
            data: EventData::RunCancelled {
                completed,
                requested,
            },
        }
    }
}

/// Caller-owned record of what happened during one or more runs.
///
/// Events are appended in the order the runner emits them: the start marker,
/// ruin events in trial order, then exactly one terminal event per run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<RunEvent>,
}

impl EventLog {
    /// Creates a log with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event`.
    pub fn record(&mut self, event: RunEvent) {
        self.events.push(event);
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// Iterates over the events of one kind, oldest first.
    pub fn of_type(&self, event_type: RunEventType) -> impl Iterator<Item = &RunEvent> + '_ {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }

    /// Number of recorded events of one kind.
    #[must_use]
    pub fn count_by_type(&self, event_type: RunEventType) -> usize {
        self.of_type(event_type).count()
    }

    /// Number of trajectories that ended at zero equity.
    #[must_use]
    pub fn ruin_count(&self) -> usize {
        self.count_by_type(RunEventType::TrajectoryRuined)
    }

    /// Trial indices of the ruined trajectories, in trial order.
    #[must_use]
    pub fn ruined_trials(&self) -> Vec<usize> {
        self.of_type(RunEventType::TrajectoryRuined)
            .filter_map(|e| e.trial)
            .collect()
    }

    /// Terminal event of the most recent run, if it has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&RunEvent> {
        self.events.iter().rev().find(|e| {
            matches!(
                e.event_type,
                RunEventType::RunCompleted | RunEventType::RunCancelled
            )
        })
    }

    /// Drops every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
