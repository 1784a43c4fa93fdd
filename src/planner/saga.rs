use crate::domain::PlannerError;
use log::{debug, warn};

type Action<S> = Box<dyn Fn(&mut S) -> Result<(), PlannerError>>;

/// An action paired with the action that undoes it
pub struct Step<S> {
    name: String,
    action: Action<S>,
    compensation: Action<S>,
}

impl<S> Step<S> {
    pub fn new(
        name: impl Into<String>,
        action: impl Fn(&mut S) -> Result<(), PlannerError> + 'static,
        compensation: impl Fn(&mut S) -> Result<(), PlannerError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
            compensation: Box::new(compensation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SagaState {
    Committed,
    RolledBack,
}

/// What happened while running a saga
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SagaReport {
    pub state: SagaState,
    /// The step whose action failed, with its error
    pub failed_step: Option<(String, PlannerError)>,
    /// Compensations that failed themselves; each wraps the original error
    pub compensation_failures: Vec<PlannerError>,
}

impl SagaReport {
    pub fn is_committed(&self) -> bool {
        self.state == SagaState::Committed
    }

    /// Rollback itself went wrong and the state may be inconsistent
    pub fn has_double_fault(&self) -> bool {
        !self.compensation_failures.is_empty()
    }
}

/// Run `steps` in order against `state`
///
/// On the first failing action, the compensations of every step that already
/// succeeded run in reverse order. A failing compensation is recorded and the
/// remaining compensations still run.
pub fn run<S>(state: &mut S, steps: Vec<Step<S>>) -> SagaReport {
    let mut applied: Vec<&Step<S>> = Vec::with_capacity(steps.len());

    for step in &steps {
        match (step.action)(&mut *state) {
            Ok(()) => {
                debug!("event=saga_step step={} status=ok", step.name);
                applied.push(step);
            }
            Err(err) => {
                warn!("event=saga_step step={} status=failed reason=\"{}\"", step.name, err);
                let compensation_failures = compensate(state, &applied);
                return SagaReport {
                    state: SagaState::RolledBack,
                    failed_step: Some((step.name.clone(), err)),
                    compensation_failures,
                };
            }
        }
    }

    SagaReport {
        state: SagaState::Committed,
        failed_step: None,
        compensation_failures: Vec::new(),
    }
}

fn compensate<S>(state: &mut S, applied: &[&Step<S>]) -> Vec<PlannerError> {
    applied
        .iter()
        .rev()
        .filter_map(|step| match (step.compensation)(&mut *state) {
            Ok(()) => {
                debug!("event=saga_compensate step={} status=ok", step.name);
                None
            }
            Err(err) => Some(PlannerError::Compensation {
                step: step.name.clone(),
                source: Box::new(err),
            }),
        })
        .collect()
}
