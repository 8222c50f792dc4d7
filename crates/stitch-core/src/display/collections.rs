//! Collection wrapper for displaying the enumerated scenarios.
//!
//! [`ScenarioList`] owns an ordered scenario snapshot plus the ids needed for
//! the recommended and selected markers, and renders the speed-grouped
//! listing with global numbering. An empty list renders the no-scenarios
//! hint instead of headings.

use std::{fmt, ops::Index};

use crate::models::{ProductionSpeed, Scenario};

/// Wrapper for displaying an ordered scenario listing.
///
/// Owns the scenarios in their display order (recommended first, then
/// ascending by total weeks) together with the recommended id and the
/// currently applied id, so entries can carry their markers. Rendering
/// groups the entries by production speed while keeping the global 1-based
/// numbering of the flat order, matching the "Scenario N" labels used
/// elsewhere. Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stitch_core::{enumerate_scenarios, RecommendationPolicy, ScenarioList};
///
/// let policy = RecommendationPolicy::default();
/// let scenarios = enumerate_scenarios(Some(date(2025, 1, 6)), &policy);
///
/// let list = ScenarioList::new(scenarios, policy.recommended_id(), None);
/// assert_eq!(list.len(), 28);
///
/// let output = format!("{}", list);
/// assert!(output.contains("1. photo-1-physical-normal"));
/// assert!(output.contains("★ recommended"));
/// ```
pub struct ScenarioList {
    scenarios: Vec<Scenario>,
    recommended_id: String,
    selected_id: Option<String>,
    speed_filter: Option<ProductionSpeed>,
}

impl ScenarioList {
    /// Wrap an ordered scenario collection with its marker context.
    pub fn new(
        scenarios: Vec<Scenario>,
        recommended_id: String,
        selected_id: Option<String>,
    ) -> Self {
        Self {
            scenarios,
            recommended_id,
            selected_id,
            speed_filter: None,
        }
    }

    /// Restrict rendering to one production speed group.
    ///
    /// The filter affects Display only; lookups and positions keep working
    /// against the full collection so global numbering stays stable.
    pub fn with_speed(mut self, speed: Option<ProductionSpeed>) -> Self {
        self.speed_filter = speed;
        self
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Get the number of scenarios in the collection.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Get a reference to the scenario at the given index.
    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Get an iterator over the scenarios.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    /// Zero-based position of a scenario id in the display order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }
}

impl Index<usize> for ScenarioList {
    type Output = Scenario;

    fn index(&self, index: usize) -> &Self::Output {
        &self.scenarios[index]
    }
}

impl IntoIterator for ScenarioList {
    type Item = Scenario;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScenarioList {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

impl fmt::Display for ScenarioList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scenarios.is_empty() {
            writeln!(f, "No scenarios available.")?;
            writeln!(f)?;
            writeln!(
                f,
                "Set an order date to enumerate delivery scenarios, or configure \
                 the schedule stages manually."
            )?;
            return Ok(());
        }

        for speed in [ProductionSpeed::Normal, ProductionSpeed::Express] {
            if self.speed_filter.is_some_and(|filter| filter != speed) {
                continue;
            }
            let group: Vec<(usize, &Scenario)> = self
                .scenarios
                .iter()
                .enumerate()
                .filter(|(_, s)| s.production_speed == speed)
                .collect();
            if group.is_empty() {
                continue;
            }

            let heading = match speed {
                ProductionSpeed::Normal => "Normal production",
                ProductionSpeed::Express => "Express production",
            };
            writeln!(f, "## {heading}")?;
            writeln!(f)?;

            for (index, scenario) in group {
                let recommended = scenario.id == self.recommended_id;
                let selected = self.selected_id.as_deref() == Some(scenario.id.as_str());
                scenario.fmt_entry(f, Some(index + 1), recommended, selected)?;
            }
        }

        Ok(())
    }
}
