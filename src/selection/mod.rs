use crate::availability::{self, EvalContext};
use crate::config::PickerConfig;
use crate::core::types::{DateRange, SelectionState};
use chrono::NaiveDate;


/// Result of feeding one pick through the machine. Pure value: no observer
/// calls, no shared state. `committed` flags a completed cycle so the caller
/// knows when to notify downstream (persist the tentative range, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    pub range: DateRange,
    pub committed: bool,
}

impl Transition {
    fn stay(state: SelectionState, range: DateRange) -> Self {
        Self {
            state,
            range,
            committed: false,
        }
    }
}

/// The 3-state date-range selection cycle: SetStart -> SetEnd -> (commit) ->
/// SetStart, with Reset as a transient alias for SetStart. Configuration is
/// passed in explicitly; the machine carries no module-level state.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    config: PickerConfig,
}

impl SelectionMachine {
    pub fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// State to resume in when a component re-initializes mid-selection:
    /// a dangling start means the next pick closes the range.
    pub fn resume_state(range: &DateRange) -> SelectionState {
        if range.start.is_some() && range.end.is_none() {
            SelectionState::SetEnd
        } else {
            SelectionState::SetStart
        }
    }

    /// Apply one pick. Validation of the full span is delegated to the rule
    /// engine; an invalid end pick is a no-op so the UI must not advance.
    pub fn pick(
        &self,
        state: SelectionState,
        range: DateRange,
        day: NaiveDate,
        ctx: &EvalContext<'_>,
    ) -> Transition {
        match state.effective() {
            SelectionState::SetStart | SelectionState::Reset => {
                Transition::stay(SelectionState::SetEnd, DateRange::starting(day))
            }
            SelectionState::SetEnd => {
                let Some(start) = range.start else {
                    // Dangling SetEnd without a start; recover as a fresh start.
                    return Transition::stay(SelectionState::SetEnd, DateRange::starting(day));
                };

                if day == start {
                    // Clicking the selected start collapses the selection.
                    return Transition::stay(SelectionState::SetStart, DateRange::empty());
                }

                if day < start {
                    return Transition::stay(SelectionState::SetEnd, DateRange::starting(day));
                }

                if availability::is_range_valid(start, day, ctx) {
                    Transition {
                        state: SelectionState::SetStart,
                        range: DateRange {
                            start: Some(start),
                            end: Some(day),
                        },
                        committed: true,
                    }
                } else {
                    Transition::stay(state, range)
                }
            }
        }
    }

    /// Would-be end date for hover highlighting. Advisory only; never
    /// mutates anything.
    pub fn preview_end(
        &self,
        state: SelectionState,
        range: DateRange,
        hovered: NaiveDate,
        ctx: &EvalContext<'_>,
    ) -> Option<NaiveDate> {
        if !state.is_picking_end() {
            return None;
        }
        let start = range.start?;
        if hovered < start {
            return None;
        }
        if availability::is_disabled(hovered, ctx) {
            return None;
        }
        if !availability::is_range_valid(start, hovered, ctx) {
            return None;
        }
        Some(hovered)
    }
}
