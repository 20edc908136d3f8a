//! Sequential filter composition.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::error::FilterResult;
use crate::types::Record;

use super::Filter;
use super::observer::{ChainEvent, ChainObserver};

/// Runs a list of filters in order, feeding each output into the next filter.
///
/// An empty chain is the identity. The first failing step aborts the chain and its error is
/// returned unchanged; later steps do not run and no partial result is produced.
///
/// A chain is itself a [`Filter`], so chains nest. Children are held behind [`Arc`], so cloning a
/// chain shares its steps.
///
/// An optional [`ChainObserver`] receives one event per step start/finish/failure. Without an
/// observer the chain has no side effects.
#[derive(Clone, Default)]
pub struct ChainedFilter {
    filters: Vec<Arc<dyn Filter>>,
    observer: Option<Arc<dyn ChainObserver>>,
}

impl ChainedFilter {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain from already shared filters.
    pub fn from_filters<I>(filters: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Filter>>,
    {
        let mut chain = Self::new();
        chain.set_filters(filters);
        chain
    }

    /// Replace all steps with `filters`.
    pub fn set_filters<I>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Filter>>,
    {
        self.clear_filters();
        for filter in filters {
            self.add_shared(filter);
        }
        self
    }

    /// Append a filter.
    pub fn add_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Filter + 'static,
    {
        self.add_shared(Arc::new(filter))
    }

    /// Append a filter that is shared with other owners.
    pub fn add_shared(&mut self, filter: Arc<dyn Filter>) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Builder-style [`ChainedFilter::add_filter`].
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.add_filter(filter);
        self
    }

    /// Remove all steps. The chain becomes the identity.
    pub fn clear_filters(&mut self) -> &mut Self {
        self.filters.clear();
        self
    }

    /// Returns the steps in execution order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Attach (or detach, with `None`) an observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn ChainObserver>>) -> &mut Self {
        self.observer = observer;
        self
    }

    /// Builder-style [`ChainedFilter::set_observer`].
    pub fn with_observer(mut self, observer: Arc<dyn ChainObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn emit(&self, event: ChainEvent) {
        if let Some(observer) = &self.observer {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for ChainedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedFilter")
            .field("filters_len", &self.filters.len())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl Filter for ChainedFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        let mut current = record.clone();

        for (index, step) in self.filters.iter().enumerate() {
            self.emit(ChainEvent::StepStarted {
                index,
                input_fields: current.len(),
            });
            let started = Instant::now();

            match step.filter(&current) {
                Ok(next) => {
                    self.emit(ChainEvent::StepFinished {
                        index,
                        output_fields: next.len(),
                        elapsed: started.elapsed(),
                    });
                    current = next;
                }
                Err(err) => {
                    self.emit(ChainEvent::StepFailed {
                        index,
                        error: err.to_string(),
                    });
                    return Err(err);
                }
            }
        }

        Ok(current)
    }
}
