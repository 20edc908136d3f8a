use std::sync::Mutex;
use std::time::Duration;

/// Events emitted by a [`super::ChainedFilter`] while it runs.
///
/// `index` is the position of the step in the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainEvent {
    StepStarted { index: usize, input_fields: usize },
    StepFinished {
        index: usize,
        output_fields: usize,
        elapsed: Duration,
    },
    StepFailed { index: usize, error: String },
}

/// Observer hook for chain events.
///
/// Observers only watch; they cannot change a result or an error.
pub trait ChainObserver: Send + Sync {
    fn on_event(&self, event: &ChainEvent);
}

/// A simple stderr logger for chain events.
#[derive(Debug, Default)]
pub struct StdErrChainObserver;

impl ChainObserver for StdErrChainObserver {
    fn on_event(&self, event: &ChainEvent) {
        match event {
            ChainEvent::StepStarted { index, input_fields } => {
                eprintln!("[filter][start] step={index} fields={input_fields}")
            }
            ChainEvent::StepFinished {
                index,
                output_fields,
                elapsed,
            } => eprintln!("[filter][ok] step={index} fields={output_fields} elapsed={elapsed:?}"),
            ChainEvent::StepFailed { index, error } => {
                eprintln!("[filter][error] step={index} err={error}")
            }
        }
    }
}

/// Collects events in memory, mostly for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingChainObserver {
    events: Mutex<Vec<ChainEvent>>,
}

impl RecordingChainObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all events seen so far.
    pub fn events(&self) -> Vec<ChainEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ChainObserver for RecordingChainObserver {
    fn on_event(&self, event: &ChainEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}
