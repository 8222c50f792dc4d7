//! Display implementations for domain models.
//!
//! Everything renders as markdown for the terminal renderer: a scenario as a
//! detail block (headline, stage bullets, completion date), a schedule as the
//! full overview (dates, selection state, projected timeline, risk verdict).
//! The model definitions stay free of formatting concerns; all of it lives
//! here.

use std::fmt;

use super::datetime::CalendarDate;
use crate::durations;
use crate::models::{
    ConfirmationMethod, ProductionSpeed, Scenario, Schedule, StageKind, StageSlot, Timeline,
};

impl fmt::Display for ConfirmationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProductionSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Scenario {
    /// Format the scenario as a detail block.
    ///
    /// The same format serves the standalone Display and the list entries
    /// rendered by [`ScenarioList`](crate::display::ScenarioList): the list
    /// passes the 1-based position for the headline plus the recommended
    /// and selected markers.
    pub(crate) fn fmt_entry(
        &self,
        f: &mut fmt::Formatter<'_>,
        position: Option<usize>,
        recommended: bool,
        selected: bool,
    ) -> fmt::Result {
        match position {
            Some(position) => {
                write!(f, "### {}. {} ({} weeks)", position, self.id, self.total_weeks)?;
            }
            None => write!(f, "### {} ({} weeks)", self.id, self.total_weeks)?,
        }
        if recommended {
            write!(f, " ★ recommended")?;
        }
        if selected {
            write!(f, " ✓ selected")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Initial sample: {} ({} weeks)",
            self.initial_sample_method.label(),
            durations::initial_sample_weeks(self.initial_sample_method)
        )?;
        for (index, method) in self.revision_methods.iter().enumerate() {
            writeln!(
                f,
                "- Revision {}: {} ({} weeks)",
                index + 1,
                method.label(),
                durations::revision_weeks(*method)
            )?;
        }
        writeln!(
            f,
            "- Production: {} ({} weeks)",
            self.production_speed.as_str(),
            durations::production_weeks(self.production_speed)
        )?;
        writeln!(f, "- Completion: {}", CalendarDate(&self.end_date))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_entry(f, None, false, false)
    }
}

impl fmt::Display for StageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.revision_id) {
            (StageKind::Revision, Some(id)) => write!(f, "Revision {id}")?,
            (kind, _) => write!(f, "{}", kind.label())?,
        }
        if let Some(method) = self.method {
            write!(f, " ({})", method.label())?;
        } else if let Some(speed) = self.speed {
            write!(f, " ({})", speed.as_str())?;
        }
        write!(
            f,
            ": weeks {}-{}, starts {}",
            self.offset_weeks,
            self.offset_weeks + self.weeks,
            CalendarDate(&self.starts_on)
        )
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Delivery Schedule")?;
        writeln!(f)?;

        // Metadata section
        match &self.order_date {
            Some(date) => writeln!(f, "- Order date: {}", CalendarDate(date))?,
            None => writeln!(f, "- Order date: not set")?,
        }
        match &self.event_date {
            Some(date) => writeln!(f, "- Event date: {}", CalendarDate(date))?,
            None => writeln!(f, "- Event date: not set")?,
        }
        match &self.selected_scenario_id {
            Some(id) => writeln!(f, "- Scenario: {id}")?,
            None if self.manually_modified => {
                writeln!(f, "- Scenario: none (manually configured)")?
            }
            None => writeln!(f, "- Scenario: none")?,
        }

        let timeline = Timeline::project(self);
        if timeline.stages.is_empty() {
            writeln!(f)?;
            writeln!(f, "Set an order date to project the timeline.")?;
            return Ok(());
        }

        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        for (position, stage) in timeline.stages.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, stage)?;
        }
        writeln!(f)?;
        writeln!(f, "- Total: {} weeks", timeline.total_weeks)?;
        if let Some(end) = &timeline.end_date {
            writeln!(f, "- Completion: {}", CalendarDate(end))?;
        }
        if let Some(event) = &self.event_date {
            if timeline.at_risk {
                writeln!(
                    f,
                    "- ⚠ At risk: the event date {} falls before completion",
                    CalendarDate(event)
                )?;
            } else {
                writeln!(f, "- ✓ On track for the event date {}", CalendarDate(event))?;
            }
        }

        Ok(())
    }
}
