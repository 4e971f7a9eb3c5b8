use crate::availability::{self, EvalContext, Verdict};
use crate::calendar::{CalendarGrid, MonthGrid};
use crate::config::PickerConfig;
use crate::core::aliases::AvailabilityMap;
use crate::core::models::Season;
use crate::core::source::{AvailabilitySource, SeasonSource};
use crate::core::types::{BookingMode, DateRange, Property, ReasonCode, SelectionState};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::selection::{SelectionMachine, Transition};
use chrono::NaiveDate;


/// Host callback fired when the selection cycle completes with a closed
/// range. Persisting the tentative booking is the host's concern.
pub trait SelectionObserver {
    fn range_committed(&self, property: Property, range: DateRange);
}

/// One mounted calendar: selection state, the availability snapshot for the
/// visible month, and the collaborators that refresh it. Created per mount
/// and discarded on unmount; nothing here persists across sessions.
pub struct CalendarSession {
    property: Property,
    mode: BookingMode,
    machine: SelectionMachine,
    anchor: NaiveDate,
    today: NaiveDate,
    min: NaiveDate,
    max: Option<NaiveDate>,
    state: SelectionState,
    range: DateRange,
    availability: AvailabilityMap,
    seasons: Vec<Season>,
    source: Box<dyn AvailabilitySource>,
    season_source: Box<dyn SeasonSource>,
    observer: Option<Box<dyn SelectionObserver>>,
    logger: Logger,
}

impl CalendarSession {
    /// Mount a fresh session anchored on `today`'s month.
    pub fn open(
        property: Property,
        mode: BookingMode,
        today: NaiveDate,
        config: PickerConfig,
        source: Box<dyn AvailabilitySource>,
        season_source: Box<dyn SeasonSource>,
        logger: Logger,
    ) -> Result<Self> {
        Self::resume(
            property,
            mode,
            today,
            DateRange::empty(),
            config,
            source,
            season_source,
            logger,
        )
    }

    /// Re-mount with an existing tentative range; a dangling start resumes
    /// the cycle in SetEnd, a complete range readies a fresh selection.
    #[allow(clippy::too_many_arguments)]
    pub fn resume(
        property: Property,
        mode: BookingMode,
        today: NaiveDate,
        range: DateRange,
        config: PickerConfig,
        source: Box<dyn AvailabilitySource>,
        season_source: Box<dyn SeasonSource>,
        logger: Logger,
    ) -> Result<Self> {
        let seasons = season_source.list(property);
        let mut session = Self {
            property,
            mode,
            machine: SelectionMachine::new(config),
            anchor: CalendarGrid::month_of(today),
            today,
            min: today,
            max: None,
            state: SelectionMachine::resume_state(&range),
            range,
            availability: AvailabilityMap::new(),
            seasons,
            source,
            season_source,
            observer: None,
            logger,
        };
        session.refresh()?;
        session.logger.info(
            format!(
                "Calendar session opened: property={}, mode={}, anchor={}",
                session.property,
                session.mode,
                session.anchor.format("%Y-%m")
            ),
            LogTarget::FileOnly,
        );
        Ok(session)
    }

    pub fn set_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observer = Some(observer);
    }

    /// Bound the selectable window; `min` defaults to `today` on open.
    pub fn set_window(&mut self, min: NaiveDate, max: Option<NaiveDate>) {
        self.min = min;
        self.max = max;
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn mode(&self) -> BookingMode {
        self.mode
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn grid(&self) -> MonthGrid {
        CalendarGrid::new(self.anchor)
            .with_week_start(self.machine.config().week_start_weekday())
            .build()
    }

    fn eval_ctx(&self) -> EvalContext<'_> {
        EvalContext {
            min: self.min,
            max: self.max,
            range_start: self.range.start,
            state: self.state,
            property: self.property,
            today: self.today,
            mode: self.mode,
            availability: &self.availability,
            seasons: &self.seasons,
            allow_saturdays: self.machine.config().allow_saturdays,
        }
    }

    pub fn verdict(&self, day: NaiveDate) -> Verdict {
        availability::evaluate(day, &self.eval_ctx())
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.verdict(day).is_disabled()
    }

    pub fn reason(&self, day: NaiveDate) -> ReasonCode {
        availability::unavailability_reason(day, &self.eval_ctx())
    }

    /// Apply one pick. Disabled days are a no-op; a completed cycle logs the
    /// range and notifies the observer.
    pub fn pick(&mut self, day: NaiveDate) -> Transition {
        let transition = {
            let ctx = self.eval_ctx();
            if self.pick_is_blocked(day, &ctx) {
                Transition {
                    state: self.state,
                    range: self.range,
                    committed: false,
                }
            } else {
                self.machine.pick(self.state, self.range, day, &ctx)
            }
        };

        self.state = transition.state;
        self.range = transition.range;

        self.logger.info(
            format!(
                "Pick {}: state={}, range={}",
                day.format("%Y-%m-%d"),
                self.state,
                self.range
            ),
            LogTarget::FileOnly,
        );

        if transition.committed {
            self.logger.info(
                format!("Range committed for {}: {}", self.property, self.range),
                LogTarget::FileOnly,
            );
            if let Some(observer) = &self.observer {
                observer.range_committed(self.property, self.range);
            }
        }

        transition
    }

    /// Gate for `pick`. While an end pick is pending, the machine's collapse
    /// and restart branches are not end picks: re-picking the start always
    /// goes through, and an earlier day is judged as a fresh check-in, not an
    /// end date.
    fn pick_is_blocked(&self, day: NaiveDate, ctx: &EvalContext<'_>) -> bool {
        if self.state.is_picking_end() {
            if let Some(start) = self.range.start {
                if day == start {
                    return false;
                }
                if day < start {
                    let mut start_ctx = ctx.clone();
                    start_ctx.state = SelectionState::SetStart;
                    start_ctx.range_start = None;
                    return availability::is_disabled(day, &start_ctx);
                }
            }
        }
        availability::is_disabled(day, ctx)
    }

    /// Hover preview of the would-be end date; advisory only.
    pub fn preview(&self, hovered: NaiveDate) -> Option<NaiveDate> {
        self.machine
            .preview_end(self.state, self.range, hovered, &self.eval_ctx())
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Reset;
        self.range = DateRange::empty();
    }

    /// Switch booking mode; a tentative range that the new mode's rules
    /// reject is cleared rather than carried over.
    pub fn set_mode(&mut self, mode: BookingMode) {
        self.mode = mode;
        let invalid = {
            let ctx = self.eval_ctx();
            match (self.range.start, self.range.end) {
                (Some(start), Some(end)) => !availability::is_range_valid(start, end, &ctx),
                (Some(start), None) => {
                    // Re-judge the dangling start as if it were picked fresh.
                    let mut start_ctx = ctx.clone();
                    start_ctx.state = SelectionState::SetStart;
                    start_ctx.range_start = None;
                    availability::is_disabled(start, &start_ctx)
                }
                _ => false,
            }
        };
        if invalid {
            self.reset();
        }
    }

    pub fn next_month(&mut self) -> Result<()> {
        self.anchor = CalendarGrid::next_month(self.anchor);
        self.refresh()
    }

    pub fn prev_month(&mut self) -> Result<()> {
        self.anchor = CalendarGrid::prev_month(self.anchor);
        self.refresh()
    }

    pub fn goto_today(&mut self) -> Result<()> {
        self.anchor = CalendarGrid::month_of(self.today);
        self.refresh()
    }

    /// Replace the snapshot with fresh facts for the visible grid span. The
    /// engine itself never fetches; navigation is the only trigger here.
    fn refresh(&mut self) -> Result<()> {
        let grid = self.grid();
        let (first, last) = match (grid.first_day(), grid.last_day()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(()),
        };
        self.availability = self.source.fetch(first, last, self.property)?;
        self.seasons = self.season_source.list(self.property);
        self.logger.info(
            format!(
                "Snapshot refreshed: {} days for {} ({}..{})",
                self.availability.len(),
                self.property,
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ),
            LogTarget::FileOnly,
        );
        Ok(())
    }
}
