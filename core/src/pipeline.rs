// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent fetch-and-decode of calendar sources.

use std::fmt;
use std::sync::Arc;

use icsfeed_ical::{Calendar, Event, decode_calendar_with};
use tokio::sync::{Semaphore, mpsc, watch};

use crate::config::PipelineConfig;
use crate::error::{FetchError, PipelineError};
use crate::fetch::{Fetch, SourceFetcher};

/// Ingestion pipeline.
///
/// Each accepted source identifier gets its own task that fetches the text and decodes it.
/// Decoded events are streamed through an unbounded internal buffer to a single dispatcher,
/// which is the only writer of the output queue. Fetch failures are reported on the error
/// queue; decode anomalies never are.
///
/// Results are additive: the in-flight counter and the calendar list live as long as the
/// pipeline and are never reset.
///
/// ```no_run
/// # use icsfeed_core::{Pipeline, PipelineConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut pipeline = Pipeline::from_config(&PipelineConfig::default())?;
/// let mut events = pipeline.take_output().unwrap();
/// let mut errors = pipeline.take_errors().unwrap();
///
/// pipeline.submit("https://example.com/team.ics");
/// pipeline.submit("~/calendars/personal.ics");
///
/// tokio::spawn(async move {
///     while let Some(err) = errors.recv().await {
///         eprintln!("{err}");
///     }
/// });
/// tokio::spawn(async move {
///     while let Some(event) = events.recv().await {
///         println!("{}", event.summary);
///     }
/// });
///
/// pipeline.wait().await;
/// let calendars = pipeline.calendars()?;
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    inner: Arc<Inner>,
    input: mpsc::Sender<String>,
    output: Option<mpsc::Receiver<Arc<Event>>>,
    errors: Option<mpsc::Receiver<FetchError>>,
}

struct Inner {
    fetcher: Arc<dyn Fetch>,
    limit: Option<Arc<Semaphore>>,
    state: watch::Sender<RunState>,
    buffer: mpsc::UnboundedSender<Arc<Event>>,
    errors: mpsc::Sender<FetchError>,
}

/// In-flight counter and finished calendars, guarded by the same lock.
#[derive(Debug, Default)]
struct RunState {
    in_flight: usize,
    calendars: Vec<Calendar>,
}

impl Pipeline {
    /// Creates a pipeline that retrieves sources with `fetcher`.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn new(config: &PipelineConfig, fetcher: Arc<dyn Fetch>) -> Self {
        // tokio has no zero-capacity channel; capacity 1 is the closest to a hand-off
        let (input, intake) = mpsc::channel(1);
        let (output_tx, output) = mpsc::channel(1);
        let (errors_tx, errors) = mpsc::channel(1);
        let (buffer, buffered) = mpsc::unbounded_channel();

        let limit = match config.max_concurrent_sources {
            0 => None,
            n => Some(Arc::new(Semaphore::new(n))),
        };

        let inner = Arc::new(Inner {
            fetcher,
            limit,
            state: watch::Sender::new(RunState::default()),
            buffer,
            errors: errors_tx,
        });

        tokio::spawn(dispatch(buffered, output_tx));
        tokio::spawn(Arc::clone(&inner).intake(intake));

        Self {
            inner,
            input,
            output: Some(output),
            errors: Some(errors),
        }
    }

    /// Creates a pipeline with the default [`SourceFetcher`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let fetcher = SourceFetcher::new(&config.fetch)?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }

    /// Intake queue of source identifiers.
    ///
    /// A source sent here is accepted once the intake task receives it, so [`Pipeline::done`]
    /// may still report `true` right after the send. Use [`Pipeline::submit`] to accept a
    /// source immediately.
    #[must_use]
    pub fn input(&self) -> mpsc::Sender<String> {
        self.input.clone()
    }

    /// Accepts a source identifier and starts processing it.
    ///
    /// The source counts as in flight when this returns.
    pub fn submit(&self, source: impl Into<String>) {
        self.inner.accept(source.into());
    }

    /// Takes the output queue of decoded events. Returns `None` after the first call.
    ///
    /// Events of one source arrive in source order; events of different sources interleave
    /// in no particular order.
    pub fn take_output(&mut self) -> Option<mpsc::Receiver<Arc<Event>>> {
        self.output.take()
    }

    /// Takes the error queue of fetch failures. Returns `None` after the first call.
    ///
    /// A failing task waits until its error is received before it counts as finished, so
    /// this queue must be drained (or dropped) for [`Pipeline::wait`] to return.
    pub fn take_errors(&mut self) -> Option<mpsc::Receiver<FetchError>> {
        self.errors.take()
    }

    /// Whether every accepted source has finished fetching and decoding.
    ///
    /// This says nothing about delivery: decoded events may still sit in the buffer.
    #[must_use]
    pub fn done(&self) -> bool {
        self.in_flight() == 0
    }

    /// Number of sources accepted but not yet finished.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.inner.state.borrow().in_flight
    }

    /// Waits until every accepted source has completed or failed.
    pub async fn wait(&self) {
        let mut state = self.inner.state.subscribe();
        if let Err(err) = state.wait_for(|s| s.in_flight == 0).await {
            tracing::warn!(%err, "run state closed while waiting");
        }
    }

    /// Snapshot of the decoded calendars, in completion order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NotDone`] while any source is in flight.
    pub fn calendars(&self) -> Result<Vec<Calendar>, PipelineError> {
        let state = self.inner.state.borrow();
        match state.in_flight {
            0 => Ok(state.calendars.clone()),
            in_flight => Err(PipelineError::NotDone { in_flight }),
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Pipeline")
            .field("in_flight", &state.in_flight)
            .field("calendars", &state.calendars.len())
            .finish_non_exhaustive()
    }
}

impl Inner {
    async fn intake(self: Arc<Self>, mut intake: mpsc::Receiver<String>) {
        while let Some(source) = intake.recv().await {
            self.accept(source);
        }
        tracing::debug!("intake queue closed");
    }

    fn accept(self: &Arc<Self>, source: String) {
        self.state.send_modify(|s| s.in_flight += 1);
        tracing::debug!(%source, "accepted source");
        tokio::spawn(Arc::clone(self).process(source));
    }

    #[tracing::instrument(skip(self))]
    async fn process(self: Arc<Self>, source: String) {
        let permit = match &self.limit {
            Some(limit) => Arc::clone(limit).acquire_owned().await.ok(),
            None => None,
        };

        let text = match self.fetcher.fetch(&source).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(%err, "failed to fetch source");
                drop(permit);
                if self.errors.send(err).await.is_err() {
                    tracing::debug!("error queue closed, failure dropped");
                }
                self.finish(None);
                return;
            }
        };

        let buffer = self.buffer.clone();
        let span = tracing::Span::current();
        let decoded = tokio::task::spawn_blocking(move || {
            span.in_scope(|| {
                decode_calendar_with(&source, &text, |event| {
                    // Fails only once the dispatcher is gone, i.e. nobody listens any more.
                    if buffer.send(Arc::clone(event)).is_err() {
                        tracing::trace!("event buffer closed");
                    }
                })
            })
        })
        .await;

        match decoded {
            Ok(calendar) => {
                tracing::debug!(events = calendar.events.len(), "source completed");
                self.finish(Some(calendar));
            }
            Err(err) => {
                tracing::error!(%err, "decoder task failed");
                self.finish(None);
            }
        }
    }

    fn finish(&self, calendar: Option<Calendar>) {
        self.state.send_modify(|s| {
            s.in_flight -= 1;
            s.calendars.extend(calendar);
        });
    }
}

/// Moves buffered events to the output queue, oldest first.
///
/// While the consumer is busy, producers keep filling the unbounded buffer and never stall.
async fn dispatch(
    mut buffered: mpsc::UnboundedReceiver<Arc<Event>>,
    output: mpsc::Sender<Arc<Event>>,
) {
    while let Some(event) = buffered.recv().await {
        if output.send(event).await.is_err() {
            tracing::debug!("output queue closed, stopping dispatcher");
            return;
        }
    }
}
