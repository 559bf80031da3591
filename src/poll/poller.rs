//! Interval poller — background tokio task driving a [`PageState`].
//!
//! - Fetches immediately, then every `interval` (missed ticks are delayed)
//! - Tags each request with a sequence number; stale responses are dropped
//! - Bounded fixed-delay retries through the state's retry controller
//! - Publishes every state change on a `watch` channel
//!
//! The public handle talks to the task over an mpsc command channel.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, Stream};
use futures_util::{FutureExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, Sleep};

use crate::error::SdkError;
use crate::failure::{self, Failure};
use crate::http::RetryConfig;
use crate::poll::state::{Action, Effect, PageState};

/// Interval and retry profile for one poller.
#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    pub interval: Duration,
    pub retry: RetryConfig,
}

impl PollConfig {
    /// `interval` with the standard polling retry profile.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            retry: RetryConfig::polling(),
        }
    }
}

// ─── Commands from the handle to the task ────────────────────────────────────

#[derive(Debug)]
enum Command {
    Retry,
    Dismiss,
    Stop,
}

type Settled<S> = (u64, Result<S, String>);

enum Event<S> {
    Tick,
    RetryDue,
    Settled(Settled<S>),
    Command(Command),
}

// ─── Poller ──────────────────────────────────────────────────────────────────

/// A not-yet-started poller. Call [`Poller::spawn`] to run it.
pub struct Poller<F> {
    name: String,
    config: PollConfig,
    fetch: F,
}

impl<F, Fut, S, E> Poller<F>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<S, E>> + Send + 'static,
    S: Send + Sync + 'static,
    E: Into<Failure> + Send + 'static,
{
    pub fn new(name: impl Into<String>, config: PollConfig, fetch: F) -> Self {
        Self {
            name: name.into(),
            config,
            fetch,
        }
    }

    /// Spawn the polling task on the current tokio runtime.
    pub fn spawn(self) -> PollHandle<S> {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let state = PageState::new(self.config.retry.max_retries);
        let (state_tx, state_rx) = watch::channel(state.clone());

        tracing::info!(
            poller = %self.name,
            interval_ms = self.config.interval.as_millis() as u64,
            "Poller started"
        );

        let task = PollTask {
            name: self.name.clone(),
            config: self.config,
            fetch: self.fetch,
            state,
            state_tx,
            cmd_rx,
            in_flight: FuturesUnordered::new(),
            retry_sleep: Box::pin(tokio::time::sleep(Duration::ZERO)),
        };

        PollHandle {
            name: self.name,
            cmd_tx,
            state_rx,
            task: Some(tokio::spawn(task.run())),
        }
    }
}

// ─── Handle ──────────────────────────────────────────────────────────────────

/// Owner's side of a running poller. Dropping it aborts the task.
pub struct PollHandle<S> {
    name: String,
    cmd_tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<PageState<S>>,
    task: Option<JoinHandle<()>>,
}

impl<S: Send + Sync + 'static> PollHandle<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest published state.
    pub fn state(&self) -> PageState<S> {
        self.state_rx.borrow().clone()
    }

    /// Wait for the next state change.
    pub async fn changed(&mut self) -> Result<PageState<S>, SdkError> {
        self.state_rx
            .changed()
            .await
            .map_err(|_| SdkError::PollerStopped)?;
        Ok(self.state_rx.borrow_and_update().clone())
    }

    /// Stream of states, starting with the current one. Ends when the task
    /// stops.
    pub fn updates(&self) -> Pin<Box<dyn Stream<Item = PageState<S>> + Send>> {
        let mut rx = self.state_rx.clone();
        Box::pin(async_stream::stream! {
            let current = rx.borrow_and_update().clone();
            yield current;
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                yield next;
            }
        })
    }

    /// Reset the retry counter and fetch now.
    pub fn retry(&self) -> Result<(), SdkError> {
        self.send(Command::Retry)
    }

    /// Clear the error message.
    pub fn dismiss(&self) -> Result<(), SdkError> {
        self.send(Command::Dismiss)
    }

    /// Tear the poller down and wait for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.cmd_tx.send(Command::Stop);
        if let Some(handle) = self.task.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }
    }

    fn send(&self, cmd: Command) -> Result<(), SdkError> {
        self.cmd_tx.send(cmd).map_err(|_| SdkError::PollerStopped)
    }
}

impl<S> Drop for PollHandle<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

struct PollTask<S, F> {
    name: String,
    config: PollConfig,
    fetch: F,
    state: PageState<S>,
    state_tx: watch::Sender<PageState<S>>,
    cmd_rx: mpsc::UnboundedReceiver<Command>,
    in_flight: FuturesUnordered<BoxFuture<'static, Settled<S>>>,
    retry_sleep: Pin<Box<Sleep>>,
}

impl<S, F, Fut, E> PollTask<S, F>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<S, E>> + Send + 'static,
    S: Send + Sync + 'static,
    E: Into<Failure> + Send + 'static,
{
    async fn run(mut self) {
        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let event = tokio::select! {
                _ = interval.tick() => Event::Tick,
                () = &mut self.retry_sleep, if self.state.retry_pending() => Event::RetryDue,
                Some(settled) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    Event::Settled(settled)
                }
                cmd = self.cmd_rx.recv() => Event::Command(cmd.unwrap_or(Command::Stop)),
            };

            match event {
                Event::Tick => self.start_fetch(),
                Event::RetryDue => {
                    tracing::debug!(poller = %self.name, "Retry timer fired");
                    self.dispatch(Action::RetryFired);
                }
                Event::Settled((seq, Ok(snapshot))) => {
                    self.dispatch(Action::FetchSucceeded {
                        seq,
                        snapshot,
                        at: Utc::now(),
                    });
                }
                Event::Settled((seq, Err(message))) => {
                    tracing::warn!(poller = %self.name, seq, error = %message, "Fetch failed");
                    self.dispatch(Action::FetchFailed { seq, message });
                    if self.state.retry().is_exhausted() && self.state.error().is_some() {
                        tracing::info!(
                            poller = %self.name,
                            attempts = self.state.retry().count,
                            "Retries exhausted"
                        );
                    }
                }
                Event::Command(Command::Retry) => {
                    tracing::info!(poller = %self.name, "Manual retry requested");
                    self.dispatch(Action::ManualRetry);
                }
                Event::Command(Command::Dismiss) => self.dispatch(Action::Dismiss),
                Event::Command(Command::Stop) => {
                    self.dispatch(Action::TearDown);
                    break;
                }
            }
        }

        // In-flight requests are dropped with the task state.
        tracing::info!(poller = %self.name, "Poller stopped");
    }

    fn start_fetch(&mut self) {
        let seq = self.state.next_seq();
        self.state.reduce(Action::FetchStarted { seq });
        tracing::debug!(poller = %self.name, seq, "Fetch started");

        let fut = (self.fetch)();
        self.in_flight.push(
            async move {
                let result = fut
                    .await
                    .map_err(|e| failure::normalize(&e.into()));
                (seq, result)
            }
            .boxed(),
        );
        self.publish();
    }

    fn dispatch(&mut self, action: Action<S>) {
        match self.state.reduce(action) {
            Effect::None | Effect::CancelRetry => {}
            Effect::ScheduleRetry { attempt } => {
                let delay = self
                    .config
                    .retry
                    .delay_for_attempt(attempt.saturating_sub(1));
                tracing::info!(
                    poller = %self.name,
                    attempt,
                    max = self.state.retry().max,
                    delay_ms = delay.as_millis() as u64,
                    "Retry scheduled"
                );
                self.retry_sleep.as_mut().reset(Instant::now() + delay);
            }
            Effect::FetchNow => self.start_fetch(),
        }
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}
