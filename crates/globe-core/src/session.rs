//! Session orchestration.
//!
//! A [`Session`] owns every piece of mutable state: loaded rows, their
//! indexes, the selection, the playback stepper and its interval, and the
//! current value map. All date changes, whether typed, scrubbed or played,
//! go through the same commit path, and every propagated commit rebuilds
//! the value map and hands it to the registered sinks.

use std::time::{Duration, Instant};

use globe_ingest::{DatasetSource, IngestEvent, IngestWorker};
use globe_model::{
    ActiveDataset, CanonicalDate, Co2Row, DatasetRows, Granularity, TemperatureRow, TimeKey,
    ValueMap,
};
use globe_names::{CoverageReport, NameReconciler, coverage};
use globe_temporal::{
    DateNormalizer, FallbackDomain, GlobalTemperatureReading, GlobalTemperatureSeries,
    SeaLevelReading, SeaLevelSeries, Sparkline, TemporalIndex,
};

use crate::legend::DatasetStyle;
use crate::playback::{PlaybackStepper, Tick};
use crate::render::RenderSink;
use crate::selection::{Commit, SelectionState};
use crate::settings::{PlaybackSettings, Settings, TimelineSettings};
use crate::timer::Interval;
use crate::value_map::build_value_map;

pub struct Session {
    playback: PlaybackSettings,
    timeline: TimelineSettings,
    fallback: FallbackDomain,
    reconciler: NameReconciler,

    temperature: Vec<TemperatureRow>,
    co2: Vec<Co2Row>,
    temperature_index: TemporalIndex,
    co2_index: TemporalIndex,
    sea_level: SeaLevelSeries,
    global_temperature: GlobalTemperatureSeries,

    selection: SelectionState,
    stepper: PlaybackStepper,
    timer: Option<Interval>,
    values: ValueMap,

    sinks: Vec<Box<dyn RenderSink>>,
    ingest: Option<IngestWorker>,
}

impl Session {
    /// Empty session; the fallback domain ends at the current month.
    pub fn new(settings: &Settings) -> Self {
        let fallback = FallbackDomain::through_today(settings.timeline.fallback_earliest_year);
        Self::with_fallback(settings, fallback)
    }

    pub fn with_fallback(settings: &Settings, fallback: FallbackDomain) -> Self {
        let temperature_index = TemporalIndex::empty(Granularity::Month, fallback);
        let co2_index = TemporalIndex::empty(Granularity::Year, fallback);
        let active = settings.session.active_dataset();
        let index = DateNormalizer::new(&temperature_index, &co2_index).index_for(active);
        let selection = SelectionState::new(active, &settings.session.date, index);

        Self {
            playback: settings.playback.clone(),
            timeline: settings.timeline.clone(),
            fallback,
            reconciler: NameReconciler::with_overrides(&settings.names),
            temperature: Vec::new(),
            co2: Vec::new(),
            temperature_index,
            co2_index,
            sea_level: SeaLevelSeries::default(),
            global_temperature: GlobalTemperatureSeries::default(),
            selection,
            stepper: PlaybackStepper::default(),
            timer: None,
            values: ValueMap::new(),
            sinks: Vec::new(),
            ingest: None,
        }
    }

    // ---- data ----------------------------------------------------------

    /// Replace one dataset's rows. Installing the active dataset re-commits
    /// the current date against the new index and rebuilds the value map.
    pub fn install(&mut self, rows: DatasetRows) {
        let kind = rows.kind();
        let index = TemporalIndex::from_rows(&rows, self.fallback);
        match rows {
            DatasetRows::Temperature(rows) => {
                self.temperature = rows;
                self.temperature_index = index;
            }
            DatasetRows::Co2(rows) => {
                self.co2 = rows;
                self.co2_index = index;
            }
            DatasetRows::SeaLevel(rows) => self.sea_level = SeaLevelSeries::new(rows),
            DatasetRows::GlobalTemperature(rows) => {
                self.global_temperature = GlobalTemperatureSeries::new(rows);
            }
        }
        tracing::debug!(dataset = %kind, "rows installed");

        if kind.active() == Some(self.selection.active()) {
            // Playback bounds were taken from the previous index.
            self.stop_playback();
            let current = self.selection.committed().clone();
            self.commit(current.as_str(), false);
            self.recompute();
        }
    }

    /// Load `sources` on background threads. Results are applied by
    /// [`Session::drain_ingest`].
    ///
    /// A worker still pending from an earlier call is drained first, so
    /// loads that already finished are installed rather than dropped.
    pub fn start_ingest(&mut self, sources: Vec<DatasetSource>) {
        if self.ingest.is_some() {
            let installed = self.drain_ingest();
            if let Some(previous) = self.ingest.take() {
                tracing::debug!(
                    installed,
                    abandoned = previous.pending(),
                    "replacing pending ingest worker"
                );
            }
        }
        self.ingest = Some(IngestWorker::spawn(sources));
    }

    /// Install every dataset that finished loading since the last call.
    /// Returns how many were installed.
    pub fn drain_ingest(&mut self) -> usize {
        let mut loaded = Vec::new();
        if let Some(worker) = self.ingest.as_mut() {
            while let Some(IngestEvent::Loaded(dataset)) = worker.try_next() {
                loaded.push(dataset);
            }
            if worker.is_finished() {
                self.ingest = None;
            }
        }
        let count = loaded.len();
        for dataset in loaded {
            self.install(dataset.rows);
        }
        count
    }

    pub fn is_ingesting(&self) -> bool {
        self.ingest.is_some()
    }

    // ---- selection -----------------------------------------------------

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn active_dataset(&self) -> ActiveDataset {
        self.selection.active()
    }

    pub fn committed_date(&self) -> &CanonicalDate {
        self.selection.committed()
    }

    pub fn draft(&self) -> TimeKey {
        self.selection.draft()
    }

    pub fn index_for(&self, dataset: ActiveDataset) -> &TemporalIndex {
        self.normalizer().index_for(dataset)
    }

    fn normalizer(&self) -> DateNormalizer<'_> {
        DateNormalizer::new(&self.temperature_index, &self.co2_index)
    }

    fn active_index(&self) -> &TemporalIndex {
        self.index_for(self.selection.active())
    }

    /// Commit a user-entered date. Returns whether the value map changed.
    pub fn commit_date(&mut self, raw: &str) -> bool {
        let propagated = self.commit(raw, true).propagated();
        if propagated {
            self.recompute();
        }
        propagated
    }

    /// Switch the map-bound dataset. Stops playback and re-commits the
    /// current date under the new dataset's snapping policy.
    pub fn set_dataset(&mut self, dataset: ActiveDataset) -> bool {
        if dataset == self.selection.active() {
            return false;
        }
        self.stop_playback();
        let index =
            DateNormalizer::new(&self.temperature_index, &self.co2_index).index_for(dataset);
        self.selection.switch_dataset(dataset, index);
        self.recompute();
        true
    }

    /// Lenient variant for UI-provided keys.
    pub fn set_dataset_key(&mut self, key: &str) -> bool {
        self.set_dataset(ActiveDataset::from_key_or_default(key))
    }

    fn commit(&mut self, raw: &str, manual: bool) -> Commit {
        let active = self.selection.active();
        let index =
            DateNormalizer::new(&self.temperature_index, &self.co2_index).index_for(active);
        let commit = self.selection.commit(raw, index);
        if manual
            && commit.propagated()
            && let Some(key) = self.selection.committed_key()
        {
            self.stepper.reseat(key);
        }
        commit
    }

    fn recompute(&mut self) {
        let dataset = self.selection.active();
        let names = self.reconciler.map_for(dataset);
        let committed = self.selection.committed();
        self.values = match dataset {
            ActiveDataset::Temperature => build_value_map(&self.temperature, committed, names),
            ActiveDataset::Co2 => build_value_map(&self.co2, committed, names),
        };
        for sink in &mut self.sinks {
            sink.present(dataset, &self.values);
        }
    }

    // ---- scrubber ------------------------------------------------------

    /// Scrubber range in the active granularity.
    pub fn scrub_bounds(&self) -> (TimeKey, TimeKey) {
        self.active_index().bounds()
    }

    /// Move the draft cursor without committing.
    pub fn scrub(&mut self, draft: TimeKey) {
        let draft = self.active_index().clamp(draft);
        self.selection.set_draft(draft);
    }

    /// Date the draft cursor would commit to.
    pub fn preview_date(&self) -> CanonicalDate {
        let index = self.active_index();
        let draft = index.clamp(self.selection.draft());
        match index.granularity() {
            Granularity::Year => index.date_for(draft),
            Granularity::Month => index.date_for(index.ceiling(draft)),
        }
    }

    pub fn commit_scrub(&mut self) -> bool {
        let preview = self.preview_date();
        self.commit_date(preview.as_str())
    }

    // ---- playback ------------------------------------------------------

    pub fn is_playing(&self) -> bool {
        self.stepper.is_playing()
    }

    pub fn cadence(&self) -> Duration {
        self.playback.cadence(self.selection.active())
    }

    /// Start playing from the committed date. No-op while already playing.
    pub fn start_playback(&mut self, now: Instant) -> bool {
        let bounds = self.active_index().bounds();
        if !self.stepper.start(self.selection.committed_key(), bounds) {
            return false;
        }
        self.timer = Some(Interval::new(
            self.cadence(),
            now,
            self.playback.max_catch_up,
        ));
        self.selection.set_playing(true);
        true
    }

    /// Stop playing and drop the interval.
    pub fn stop_playback(&mut self) -> bool {
        self.timer = None;
        self.selection.set_playing(false);
        self.stepper.stop()
    }

    /// Returns whether the session is playing afterwards.
    pub fn toggle_playback(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.stop_playback();
            false
        } else {
            self.start_playback(now)
        }
    }

    /// When the host should pump next, if playing.
    pub fn next_tick_due(&self) -> Option<Instant> {
        self.timer.as_ref().map(Interval::next_due)
    }

    /// Run the ticks due at `now`. Returns how many advanced the cursor.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let due = timer.due(now);
        let mut advanced = 0;
        for _ in 0..due {
            match self.stepper.tick() {
                Tick::Advanced(cursor) => {
                    self.selection.set_draft(cursor);
                    let date = self.tick_date(cursor);
                    if self.commit(date.as_str(), false).propagated() {
                        self.recompute();
                    }
                    advanced += 1;
                }
                Tick::Finished | Tick::Idle => {
                    self.stop_playback();
                    break;
                }
            }
        }
        advanced
    }

    fn tick_date(&self, cursor: TimeKey) -> CanonicalDate {
        let index = self.active_index();
        match index.granularity() {
            Granularity::Year => index.date_for(cursor),
            Granularity::Month => index.date_for(index.ceiling(cursor)),
        }
    }

    // ---- outputs -------------------------------------------------------

    pub fn value_map(&self) -> &ValueMap {
        &self.values
    }

    pub fn style(&self) -> DatasetStyle {
        DatasetStyle::for_dataset(self.selection.active())
    }

    /// Register a sink and present the current map to it.
    pub fn add_sink(&mut self, mut sink: Box<dyn RenderSink>) {
        sink.present(self.selection.active(), &self.values);
        self.sinks.push(sink);
    }

    /// Compare the current map with the geometry's country names.
    pub fn coverage<'a, I>(&self, geometry_names: I) -> CoverageReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        coverage(&self.values, geometry_names)
    }

    pub fn sea_level_at(&self) -> Option<SeaLevelReading> {
        self.sea_level.at(self.selection.committed().as_str())
    }

    pub fn global_temperature_at(&self) -> Option<GlobalTemperatureReading> {
        self.global_temperature
            .at(self.selection.committed().as_str())
    }

    pub fn sea_level_sparkline(&self) -> Option<Sparkline> {
        self.sea_level
            .sparkline(self.sea_level_at(), self.timeline.sea_level_spark_points)
    }

    pub fn global_temperature_sparkline(&self) -> Option<Sparkline> {
        let selected = self.global_temperature_at();
        self.global_temperature.sparkline(
            selected.as_ref(),
            self.timeline.global_temperature_spark_points,
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("selection", &self.selection)
            .field("stepper", &self.stepper.state())
            .field("temperature_rows", &self.temperature.len())
            .field("co2_rows", &self.co2.len())
            .field("values", &self.values.len())
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}
