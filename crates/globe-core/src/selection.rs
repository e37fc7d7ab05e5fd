//! The committed selection and its single write path.

use globe_model::{ActiveDataset, CanonicalDate, TimeKey};
use globe_temporal::{TemporalIndex, normalize};

/// Last `(dataset, date)` pair let through to recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGate {
    last: Option<(ActiveDataset, CanonicalDate)>,
}

impl CommitGate {
    /// `true` when the pair differs from the previous admitted one.
    pub fn admit(&mut self, dataset: ActiveDataset, date: &CanonicalDate) -> bool {
        if self
            .last
            .as_ref()
            .is_some_and(|(d, last)| *d == dataset && last == date)
        {
            return false;
        }
        self.last = Some((dataset, date.clone()));
        true
    }

    pub fn last(&self) -> Option<(ActiveDataset, &CanonicalDate)> {
        self.last.as_ref().map(|(d, date)| (*d, date))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new `(dataset, date)` pair; the value map must be rebuilt.
    Propagated,
    /// Same pair as the previous commit; nothing to do.
    Duplicate,
}

impl Commit {
    pub fn propagated(self) -> bool {
        matches!(self, Self::Propagated)
    }
}

/// Active dataset, committed date, draft cursor and playing flag.
///
/// The committed date is only reachable through [`SelectionState::commit`],
/// which normalizes against the active dataset's index and applies the
/// commit gate. The draft cursor is preview state and follows the committed
/// date whenever a commit goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active: ActiveDataset,
    committed: CanonicalDate,
    draft: TimeKey,
    playing: bool,
    gate: CommitGate,
}

impl SelectionState {
    pub fn new(active: ActiveDataset, raw_date: &str, index: &TemporalIndex) -> Self {
        let committed = normalize(raw_date, active, index);
        let draft = committed
            .time_key(active.granularity())
            .unwrap_or_else(|| index.bounds().0);
        let mut gate = CommitGate::default();
        gate.admit(active, &committed);
        Self {
            active,
            committed,
            draft,
            playing: false,
            gate,
        }
    }

    pub fn active(&self) -> ActiveDataset {
        self.active
    }

    pub fn committed(&self) -> &CanonicalDate {
        &self.committed
    }

    /// Time key of the committed date in the active granularity.
    pub fn committed_key(&self) -> Option<TimeKey> {
        self.committed.time_key(self.active.granularity())
    }

    pub fn draft(&self) -> TimeKey {
        self.draft
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_draft(&mut self, draft: TimeKey) {
        self.draft = draft;
    }

    /// Normalize `raw` for the active dataset and commit it if it is new.
    pub fn commit(&mut self, raw: &str, index: &TemporalIndex) -> Commit {
        let normalized = normalize(raw, self.active, index);
        if !self.gate.admit(self.active, &normalized) {
            return Commit::Duplicate;
        }
        tracing::debug!(dataset = %self.active, raw, date = %normalized, "date committed");
        self.committed = normalized;
        if let Some(key) = self.committed_key() {
            self.draft = key;
        }
        Commit::Propagated
    }

    /// Switch datasets and re-commit the current date under the new
    /// dataset's policy. Always propagates: the composite key changed.
    pub fn switch_dataset(&mut self, dataset: ActiveDataset, index: &TemporalIndex) -> Commit {
        self.active = dataset;
        let current = self.committed.clone();
        self.commit(current.as_str(), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_model::Granularity;
    use globe_temporal::FallbackDomain;

    fn temperature_index() -> TemporalIndex {
        TemporalIndex::with_fallback(
            Granularity::Month,
            [TimeKey::month(1900, 1), TimeKey::month(1900, 4)],
            FallbackDomain::fixed(1800, 2026, 10),
        )
    }

    #[test]
    fn draft_months_snapping_to_one_date_commit_once() {
        let index = temperature_index();
        let mut selection = SelectionState::new(ActiveDataset::Temperature, "1900-01-01", &index);
        assert_eq!(selection.commit("1900-02-01", &index), Commit::Propagated);
        assert_eq!(selection.committed(), &"1900-04-01");
        assert_eq!(selection.commit("1900-03-01", &index), Commit::Duplicate);
        assert_eq!(selection.commit("1900-04-01", &index), Commit::Duplicate);
    }

    #[test]
    fn gate_remembers_last_admitted_pair() {
        let mut gate = CommitGate::default();
        assert_eq!(gate.last(), None);

        let date = CanonicalDate::from_key(TimeKey::year(1950), Granularity::Year);
        assert!(gate.admit(ActiveDataset::Co2, &date));
        assert!(!gate.admit(ActiveDataset::Co2, &date));
        assert_eq!(gate.last(), Some((ActiveDataset::Co2, &date)));

        // Same date under the other dataset is a new pair.
        assert!(gate.admit(ActiveDataset::Temperature, &date));
        assert_eq!(gate.last(), Some((ActiveDataset::Temperature, &date)));
    }

    #[test]
    fn initial_date_is_already_committed() {
        let index = temperature_index();
        let mut selection = SelectionState::new(ActiveDataset::Temperature, "1900-01-01", &index);
        assert_eq!(selection.commit("1900-01-01", &index), Commit::Duplicate);
    }

    #[test]
    fn draft_follows_commits() {
        let index = temperature_index();
        let mut selection = SelectionState::new(ActiveDataset::Temperature, "1900-01-01", &index);
        selection.set_draft(TimeKey::month(1900, 3));
        selection.commit("1900-03-01", &index);
        assert_eq!(selection.draft(), TimeKey::month(1900, 4));
    }

    #[test]
    fn switching_dataset_renormalizes() {
        let temperature = temperature_index();
        let co2 = TemporalIndex::with_fallback(
            Granularity::Year,
            [TimeKey::year(1950), TimeKey::year(2000)],
            FallbackDomain::fixed(1800, 2026, 10),
        );
        let mut selection =
            SelectionState::new(ActiveDataset::Temperature, "1900-04-01", &temperature);
        assert_eq!(
            selection.switch_dataset(ActiveDataset::Co2, &co2),
            Commit::Propagated
        );
        assert_eq!(selection.committed(), &"1950-01-01");
        assert_eq!(selection.draft(), TimeKey::year(1950));
    }
}
