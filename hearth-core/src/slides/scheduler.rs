//! Repeating timers for autoplay.
//!
//! Timers are polled rather than pushed: the host asks the scheduler which
//! timers are due and turns each firing into a [`Tick`]. With a
//! [`ManualClock`] nothing ever sleeps, which keeps autoplay deterministic
//! under test.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};
use tracing::trace;

use super::types::WidgetKey;

new_key_type! {
    /// Handle of a scheduled timer. Handles are never reused, so a handle
    /// that outlived its timer stays invalid.
    pub struct TimerHandle;
}

/// One firing of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Timer that fired.
    pub handle: TimerHandle,
    /// Widget that scheduled it.
    pub owner: WidgetKey,
}

/// Schedules repeating timers on behalf of slide widgets.
pub trait Scheduler {
    /// Fire every `interval` until cancelled. The first firing is one
    /// interval from now.
    fn schedule_repeating(
        &mut self,
        owner: WidgetKey,
        interval: Duration,
    ) -> TimerHandle;

    /// Cancel a timer. Returns `false` when it was not live.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Whether `handle` is live.
    fn is_active(&self, handle: TimerHandle) -> bool;

    /// Number of live timers.
    fn active_count(&self) -> usize;

    /// Every firing that is due, in firing order. A repeating timer that
    /// missed several intervals yields one tick per interval.
    fn poll_due(&mut self) -> Vec<Tick>;
}

/// Monotonic time source, as elapsed time since the clock's origin.
pub trait Clock {
    /// Time elapsed since the origin.
    fn now(&self) -> Duration;
}

/// Wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones observe the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(nanos, AtomicOrdering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(AtomicOrdering::SeqCst))
    }
}

#[derive(Debug)]
struct TimerData {
    owner: WidgetKey,
    interval: Duration,
    next_fire: Duration,
}

/// Queue entry, ordered as a min-heap by fire time then insertion order.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    handle: TimerHandle,
    fire_at: Duration,
    seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// [`Scheduler`] over a [`Clock`].
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    timers: SlotMap<TimerHandle, TimerData>,
    queue: BinaryHeap<QueueEntry>,
    seq: u64,
}

impl<C: Clock> TimerQueue<C> {
    /// Empty queue reading time from `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// The queue's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time until the earliest live timer fires, `None` when idle.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.drop_stale_head();
        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_at.saturating_sub(now))
    }

    fn push(&mut self, handle: TimerHandle, fire_at: Duration) {
        self.seq += 1;
        self.queue.push(QueueEntry {
            handle,
            fire_at,
            seq: self.seq,
        });
    }

    fn drop_stale_head(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.handle) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl Default for TimerQueue<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule_repeating(
        &mut self,
        owner: WidgetKey,
        interval: Duration,
    ) -> TimerHandle {
        let interval = interval.max(Duration::from_millis(1));
        let next_fire = self.clock.now() + interval;
        let handle = self.timers.insert(TimerData {
            owner,
            interval,
            next_fire,
        });
        self.push(handle, next_fire);
        trace!(?owner, ?interval, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(handle).is_some()
    }

    fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(handle)
    }

    fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn poll_due(&mut self) -> Vec<Tick> {
        let now = self.clock.now();
        let mut ticks = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_at > now {
                break;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.handle) else {
                continue;
            };
            if timer.next_fire != entry.fire_at {
                continue;
            }
            ticks.push(Tick {
                handle: entry.handle,
                owner: timer.owner,
            });
            timer.next_fire = entry.fire_at + timer.interval;
            let next_fire = timer.next_fire;
            self.push(entry.handle, next_fire);
        }

        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> (ManualClock, TimerQueue<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), TimerQueue::new(clock))
    }

    #[test]
    fn fires_once_per_elapsed_interval() {
        let (clock, mut timers) = queue();
        let handle = timers
            .schedule_repeating(WidgetKey::FeaturedCarousel, Duration::from_secs(5));

        clock.advance(Duration::from_millis(4999));
        assert!(timers.poll_due().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(timers.poll_due().len(), 1);

        clock.advance(Duration::from_secs(15));
        let ticks = timers.poll_due();
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|tick| tick.handle == handle));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let (clock, mut timers) = queue();
        let handle =
            timers.schedule_repeating(WidgetKey::Gallery, Duration::from_secs(1));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(!timers.is_active(handle));

        clock.advance(Duration::from_secs(3));
        assert!(timers.poll_due().is_empty());
        assert_eq!(timers.time_until_next(), None);
    }

    #[test]
    fn ticks_come_out_in_firing_order() {
        let (clock, mut timers) = queue();
        timers.schedule_repeating(WidgetKey::Custom("slow"), Duration::from_secs(3));
        timers.schedule_repeating(WidgetKey::Custom("fast"), Duration::from_secs(2));

        clock.advance(Duration::from_secs(4));
        let owners: Vec<WidgetKey> =
            timers.poll_due().into_iter().map(|tick| tick.owner).collect();
        assert_eq!(
            owners,
            [
                WidgetKey::Custom("fast"),
                WidgetKey::Custom("slow"),
                WidgetKey::Custom("fast"),
            ]
        );
    }

    #[test]
    fn time_until_next_tracks_the_clock() {
        let (clock, mut timers) = queue();
        timers.schedule_repeating(WidgetKey::Lightbox, Duration::from_millis(800));
        clock.advance(Duration::from_millis(300));
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(500)));
    }
}
