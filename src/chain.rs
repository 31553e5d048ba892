//! Chains of back-to-back periods.
//!
//! A [`TimePeriodChain`] keeps its periods ordered and touching: every period
//! starts exactly where its predecessor ends. Appending, inserting and
//! removing move the downstream periods so that no gap or overlap appears.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use timechain_core::{ChainError, InsertPolicy};
use timechain_protocol::period::{HasDuration, TimePeriod, TimePeriodGroup};
use tracing::{debug, trace, warn};

pub type ChainResult<T> = Result<T, ChainError>;

/// Ordered sequence of adjacent periods, e.g. a day of back-to-back meetings.
///
/// # Invariants
///
/// For every `i`, `periods[i + 1].start == periods[i].end`, and no period
/// ends before it starts. Every operation
/// except [`insert`](Self::insert) keeps this on its own; `insert` relies on
/// the caller supplying a period that already starts at the insertion point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<TimePeriod>", into = "Vec<TimePeriod>")]
pub struct TimePeriodChain {
    periods: Vec<TimePeriod>,
}

impl TimePeriodChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain holding a single period to anchor later appends to.
    ///
    /// Fails with [`ChainError::ReversedPeriod`] if the period ends before it starts.
    pub fn starting_with(period: TimePeriod) -> ChainResult<Self> {
        Self::from_periods(vec![period])
    }

    /// Builds a chain from an existing sequence, rejecting any gap, overlap
    /// or reversed period.
    pub fn from_periods(periods: Vec<TimePeriod>) -> ChainResult<Self> {
        check_periods(&periods)?;
        Ok(Self { periods })
    }

    /// Whether every period starts where its predecessor ends and none is reversed.
    pub fn is_contiguous(&self) -> bool {
        check_periods(&self.periods).is_ok()
    }

    pub fn get(&self, index: usize) -> Option<&TimePeriod> {
        self.periods.get(index)
    }

    pub fn first(&self) -> Option<&TimePeriod> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&TimePeriod> {
        self.periods.last()
    }

    /// Appends a period of `period`'s length starting at the current end of the chain.
    ///
    /// Only the duration of the argument is used. Returns the period that was
    /// actually pushed.
    pub fn append<D: HasDuration>(&mut self, period: D) -> ChainResult<TimePeriod> {
        let length = non_negative(period.duration())?;
        let start = self.tail_end()?;
        let appended = TimePeriod::from_start(start, length).ok_or(ChainError::Overflow)?;
        self.periods.push(appended);

        debug!(
            len = self.periods.len(),
            duration = %appended.duration(),
            "appended period to chain"
        );
        self.update_variables();
        Ok(appended)
    }

    /// Appends one period per member of `group`, in the group's order.
    ///
    /// Each new period chains off this chain's end; the group's own instants
    /// are ignored. Nothing is appended if any step would fail. Returns the
    /// number of periods added.
    pub fn append_contents_of<G: TimePeriodGroup>(&mut self, group: &G) -> ChainResult<usize> {
        if group.is_empty() {
            return Ok(0);
        }

        let mut cursor = self.tail_end()?;
        let mut batch = Vec::with_capacity(group.count());
        for period in group.iter() {
            let end = cursor
                .checked_add_signed(non_negative(period.duration())?)
                .ok_or(ChainError::Overflow)?;
            batch.push(TimePeriod::from_parts(Some(cursor), Some(end)));
            cursor = end;
        }

        let added = batch.len();
        self.periods.extend(batch);

        debug!(added, len = self.periods.len(), "appended group to chain");
        self.update_variables();
        Ok(added)
    }

    /// Inserts `period` unchanged at `index` and pushes every later period
    /// forward by its duration.
    ///
    /// The period is expected to start where its predecessor ends; a warning
    /// is logged when it does not, and the chain is left with a break at
    /// `index`. See [`insert_anchored`](Self::insert_anchored) for a variant
    /// that positions the period itself.
    pub fn insert(&mut self, period: TimePeriod, index: usize) -> ChainResult<TimePeriod> {
        self.check_insert_index(index)?;
        let shift = non_negative(period.duration())?;
        let tail = self.shifted_from(index, shift)?;

        match self.anchor_at(index) {
            Ok(None) => {}
            Ok(Some(anchor)) if period.start == Some(anchor) => {}
            _ => warn!(
                index,
                "inserted period does not start where its predecessor ends"
            ),
        }

        self.splice_tail(index, Some(period), tail);
        debug!(index, len = self.periods.len(), %shift, "inserted period");
        self.update_variables();
        Ok(period)
    }

    /// Inserts a period of `period`'s length at `index`, moved so it starts
    /// where its predecessor ends, and pushes every later period forward.
    ///
    /// On an empty chain the period is inserted unchanged. Returns the period
    /// that was actually inserted.
    pub fn insert_anchored(
        &mut self,
        period: TimePeriod,
        index: usize,
    ) -> ChainResult<TimePeriod> {
        self.check_insert_index(index)?;
        let shift = non_negative(period.duration())?;
        let inserted = match self.anchor_at(index)? {
            Some(anchor) => TimePeriod::from_start(anchor, shift).ok_or(ChainError::Overflow)?,
            None => period,
        };
        let tail = self.shifted_from(index, shift)?;

        self.splice_tail(index, Some(inserted), tail);
        debug!(index, len = self.periods.len(), %shift, "inserted anchored period");
        self.update_variables();
        Ok(inserted)
    }

    /// Inserts according to `policy`.
    ///
    /// [`InsertPolicy::Strict`] behaves like [`insert`](Self::insert) but
    /// fails with [`ChainError::NotContiguous`] instead of inserting a period
    /// that does not start at the insertion point.
    pub fn insert_with(
        &mut self,
        period: TimePeriod,
        index: usize,
        policy: InsertPolicy,
    ) -> ChainResult<TimePeriod> {
        match policy {
            InsertPolicy::Verbatim => self.insert(period, index),
            InsertPolicy::Anchored => self.insert_anchored(period, index),
            InsertPolicy::Strict => {
                self.check_insert_index(index)?;
                non_negative(period.duration())?;
                match self.anchor_at(index)? {
                    Some(anchor) if period.start != Some(anchor) => {
                        Err(ChainError::NotContiguous { index })
                    }
                    _ => self.insert(period, index),
                }
            }
        }
    }

    /// Removes the period at `index` and pulls every later period back by its duration.
    pub fn remove(&mut self, index: usize) -> ChainResult<TimePeriod> {
        let len = self.periods.len();
        if index >= len {
            return Err(ChainError::IndexOutOfBounds { index, len });
        }

        let removed = self.periods[index];
        let tail = self.shifted_from(index + 1, -removed.duration())?;
        self.splice_tail(index, None, tail);

        debug!(index, len = self.periods.len(), shift = %removed.duration(), "removed period");
        self.update_variables();
        Ok(removed)
    }

    pub fn remove_all(&mut self) {
        self.periods.clear();
        debug!("cleared chain");
        self.update_variables();
    }

    /// Removes the last period. Later periods do not exist, so nothing moves.
    pub fn pop(&mut self) -> Option<TimePeriod> {
        let popped = self.periods.pop();
        if popped.is_some() {
            self.update_variables();
        }
        popped
    }

    /// Structural equality: same length and pairwise identical start and end instants.
    pub fn equals(&self, other: &TimePeriodChain) -> bool {
        self.periods.len() == other.periods.len()
            && self
                .periods
                .iter()
                .zip(&other.periods)
                .all(|(a, b)| a.start == b.start && a.end == b.end)
    }

    /// Hook run after every mutation to refresh chain-level aggregates.
    ///
    /// Start, end and duration are read straight from the stored periods, so
    /// there is nothing cached to refresh.
    pub fn update_variables(&mut self) {
        trace!(len = self.periods.len(), "chain aggregates need no refresh");
    }

    fn tail_end(&self) -> ChainResult<DateTime<Utc>> {
        let index = self
            .periods
            .len()
            .checked_sub(1)
            .ok_or(ChainError::EmptyChain)?;
        self.periods[index]
            .end
            .ok_or(ChainError::UnanchoredPeriod { index })
    }

    /// Instant a period inserted at `index` has to start at; `None` on an empty chain.
    fn anchor_at(&self, index: usize) -> ChainResult<Option<DateTime<Utc>>> {
        match self.periods.get(index) {
            Some(next) => next
                .start
                .map(Some)
                .ok_or(ChainError::UnanchoredPeriod { index }),
            None if self.periods.is_empty() => Ok(None),
            None => self.tail_end().map(Some),
        }
    }

    fn check_insert_index(&self, index: usize) -> ChainResult<()> {
        let len = self.periods.len();
        if index > len {
            return Err(ChainError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    /// Copies of `periods[from..]` moved by `delta`, computed without touching the chain.
    fn shifted_from(&self, from: usize, delta: Duration) -> ChainResult<Vec<TimePeriod>> {
        self.periods[from..]
            .iter()
            .map(|period| period.shifted(delta).ok_or(ChainError::Overflow))
            .collect()
    }

    /// Replaces everything from `index` on with `head` followed by `tail`.
    fn splice_tail(&mut self, index: usize, head: Option<TimePeriod>, tail: Vec<TimePeriod>) {
        self.periods.truncate(index);
        self.periods.extend(head);
        self.periods.extend(tail);
    }
}

/// Reports the first reversed period, or the first one that does not start
/// where its predecessor ends.
fn check_periods(periods: &[TimePeriod]) -> ChainResult<()> {
    for (index, period) in periods.iter().enumerate() {
        if period.is_reversed() {
            return Err(ChainError::ReversedPeriod { index });
        }
        if index > 0 && !periods[index - 1].abuts(period) {
            return Err(ChainError::NotContiguous { index });
        }
    }
    Ok(())
}

fn non_negative(duration: Duration) -> ChainResult<Duration> {
    if duration < Duration::zero() {
        return Err(ChainError::NegativeDuration);
    }
    Ok(duration)
}

impl TimePeriodGroup for TimePeriodChain {
    fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    fn start(&self) -> Option<DateTime<Utc>> {
        self.periods.first().and_then(TimePeriod::start)
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.periods.last().and_then(TimePeriod::end)
    }

    fn map<T, F>(&self, transform: F) -> Vec<T>
    where
        F: FnMut(&TimePeriod) -> T,
    {
        self.periods.iter().map(transform).collect()
    }

    fn filter<P>(&self, mut is_included: P) -> Vec<TimePeriod>
    where
        P: FnMut(&TimePeriod) -> bool,
    {
        self.periods
            .iter()
            .filter(|period| is_included(*period))
            .copied()
            .collect()
    }

    fn reduce<R, F>(&self, initial: R, next_partial: F) -> R
    where
        F: FnMut(R, &TimePeriod) -> R,
    {
        self.periods.iter().fold(initial, next_partial)
    }
}

impl PartialEq for TimePeriodChain {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for TimePeriodChain {}

impl TryFrom<Vec<TimePeriod>> for TimePeriodChain {
    type Error = ChainError;

    fn try_from(periods: Vec<TimePeriod>) -> Result<Self, Self::Error> {
        Self::from_periods(periods)
    }
}

impl From<TimePeriodChain> for Vec<TimePeriod> {
    fn from(chain: TimePeriodChain) -> Self {
        chain.periods
    }
}

impl<'a> IntoIterator for &'a TimePeriodChain {
    type Item = &'a TimePeriod;
    type IntoIter = std::slice::Iter<'a, TimePeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
