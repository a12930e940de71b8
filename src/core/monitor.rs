use futures_util::StreamExt;
use log::{debug, warn};
use std::time::Duration;
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::CancellationToken;

use crate::core::{AdcChannel, RawReading, Report, Source};

/// How long the shipped binary waits between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// One successful poll of a channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub raw: RawReading,
    pub volts: f64,
}

/// Drives an [`AdcChannel`] on a fixed interval until cancelled.
///
/// Each tick polls the channel once and hands the outcome to the reporter;
/// the interval elapses regardless of outcome, so a failing device is retried
/// at the same cadence with no backoff. Cancellation is checked once per
/// iteration, which keeps the loop testable without an unbounded process;
/// a caller that never cancels gets the poll-until-killed behaviour.
pub struct Monitor<S>
where
    S: Source,
{
    channel: AdcChannel<S>,
    interval: Duration,
}

impl<S> Monitor<S>
where
    S: Source,
{
    pub fn new(channel: AdcChannel<S>, interval: Duration) -> Monitor<S> {
        Monitor { channel, interval }
    }

    /// Polls forever, or until `token` is cancelled. The first poll happens
    /// immediately; the delay rides the tokio clock, so tests under a paused
    /// runtime advance it without sleeping in real time.
    ///
    /// Returns the reporter so callers can inspect what was emitted.
    pub async fn run<R>(mut self, token: CancellationToken, mut reporter: R) -> R
    where
        R: Report,
    {
        let mut ticks = IntervalStream::new(tokio::time::interval(self.interval));

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    debug!("Poll loop cancelled");
                    break;
                }
                _ = ticks.next() => {
                    match self.channel.sample() {
                        Ok(sample) => reporter.sample(&sample),
                        Err(error) => {
                            warn!("Poll failed: {error}");
                            reporter.failure(&error);
                        }
                    }
                }
            }
        }

        reporter
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    fn monitor(source: EmulatedSource) -> Monitor<EmulatedSource> {
        Monitor::new(
            AdcChannel::new(source, Scale::default()),
            Duration::from_millis(100),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn alternating_outcomes_are_reported_in_call_order() {
        let source = EmulatedSource::new()
            .then_value(10)
            .then_offline()
            .then_value(20)
            .then_offline();

        let token = CancellationToken::new();
        let handle = tokio::spawn(monitor(source).run(token.clone(), Memory::new()));

        // Ticks land at 0, 100, 200, 300 and 400 ms; the last one finds the
        // script exhausted and reads as offline.
        tokio::time::sleep(Duration::from_millis(450)).await;
        token.cancel();

        let memory = handle.await.expect("monitor task");

        let raws = memory.samples().map(|s| s.raw).collect::<Vec<_>>();
        assert_eq!(raws, vec![RawReading(10), RawReading(20)]);
        assert_eq!(memory.failures().count(), 3);

        assert!(matches!(memory.events[0], Event::Sample(_)));
        assert!(matches!(memory.events[1], Event::Failure(_)));
        assert!(matches!(memory.events[2], Event::Sample(_)));
        assert!(matches!(memory.events[3], Event::Failure(_)));
        assert!(matches!(memory.events[4], Event::Failure(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_stops_before_the_first_poll() {
        let token = CancellationToken::new();
        token.cancel();

        let source = EmulatedSource::new().then_value(1);
        let memory = monitor(source).run(token, Memory::new()).await;

        assert!(memory.events.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn interval_elapses_after_failures_too() {
        let source = EmulatedSource::new().then_offline().then_value(5);

        let token = CancellationToken::new();
        let handle = tokio::spawn(monitor(source).run(token.clone(), Memory::new()));

        tokio::time::sleep(Duration::from_millis(150)).await;
        token.cancel();

        let memory = handle.await.expect("monitor task");
        assert_eq!(memory.failures().count(), 1);
        assert_eq!(memory.samples().count(), 1);
        assert_eq!(memory.samples().next().map(|s| s.raw), Some(RawReading(5)));
    }
}
