//! User actions over a schedule.

use jiff::civil::Date;

use crate::models::{ConfirmationMethod, ProductionSpeed};

/// One discrete user action in a planning session.
///
/// Actions are the only way schedule state changes. Each maps to a single
/// transition in [`reducer::apply`](super::reducer::apply); anything a
/// transition cannot honor (cap reached, unknown id) is a silent no-op
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set or clear the production start date
    SetOrderDate(Option<Date>),

    /// Set or clear the desired delivery date
    SetEventDate(Option<Date>),

    /// Directly choose the initial sample confirmation method
    SetInitialSampleMethod(ConfirmationMethod),

    /// Directly choose the production speed
    SetProductionSpeed(ProductionSpeed),

    /// Append a revision round with the default method
    AddRevision,

    /// Remove the revision round with the given id
    RemoveRevision(u64),

    /// Change the confirmation method of one revision round
    SetRevisionMethod { id: u64, method: ConfirmationMethod },

    /// Apply the scenario with the given id, or deselect with `None`
    SelectScenario(Option<String>),
}
