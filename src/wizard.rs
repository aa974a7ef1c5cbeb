//! Customer booking wizard.
//!
//! One immutable state value threaded through the flow, updated only by
//! [`apply`]. The host resolves the slot picker (fetch + resolve) and pushes
//! the result in via `SlotsResolved`; the reducer itself never does I/O.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::model::{Branch, SlotStatus, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Branch,
    Schedule,
    Contact,
    Payment,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub nama: String,
    pub no_hp: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub branch: Option<Branch>,
    pub play_date: Option<NaiveDate>,
    pub unit: Option<Unit>,
    /// Resolved picker statuses for the chosen (unit, date), keyed by slot
    /// label. `None` until the host has pushed a resolution.
    pub slot_statuses: Option<BTreeMap<String, SlotStatus>>,
    pub selected: BTreeSet<String>,
    pub contact: Option<Contact>,
    pub metode_pembayaran: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Branch,
            branch: None,
            play_date: None,
            unit: None,
            slot_statuses: None,
            selected: BTreeSet::new(),
            contact: None,
            metode_pembayaran: None,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SelectBranch(Branch),
    SelectDate(NaiveDate),
    SelectUnit(Unit),
    /// Freshly resolved picker statuses for the current (unit, date).
    SlotsResolved(BTreeMap<String, SlotStatus>),
    ToggleSlot(String),
    SetContact(Contact),
    SelectPayment(String),
    Next,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    Incomplete(&'static str),
    SlotUnavailable(String),
    NoSlotsResolved,
    AtFirstStep,
    AtLastStep,
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::Incomplete(what) => write!(f, "step incomplete: {what}"),
            WizardError::SlotUnavailable(jam) => write!(f, "slot {jam} is not available"),
            WizardError::NoSlotsResolved => write!(f, "slot picker has not been resolved yet"),
            WizardError::AtFirstStep => write!(f, "already at the first step"),
            WizardError::AtLastStep => write!(f, "already at the review step"),
        }
    }
}

impl std::error::Error for WizardError {}

/// The single update function. On error the previous state is untouched and
/// stays valid.
pub fn apply(state: &WizardState, action: WizardAction) -> Result<WizardState, WizardError> {
    let mut next = state.clone();
    match action {
        WizardAction::SelectBranch(branch) => {
            next.branch = Some(branch);
            next.play_date = None;
            next.unit = None;
            next.slot_statuses = None;
            next.selected.clear();
        }
        WizardAction::SelectDate(date) => {
            next.play_date = Some(date);
            next.slot_statuses = None;
            next.selected.clear();
        }
        WizardAction::SelectUnit(unit) => {
            next.unit = Some(unit);
            next.slot_statuses = None;
            next.selected.clear();
        }
        WizardAction::SlotsResolved(statuses) => {
            // A slot someone else booked since the last resolution drops out
            // of the selection.
            next.selected.retain(|jam| {
                statuses.get(jam).copied() == Some(SlotStatus::Available)
            });
            next.slot_statuses = Some(statuses);
        }
        WizardAction::ToggleSlot(jam) => {
            let Some(statuses) = &next.slot_statuses else {
                return Err(WizardError::NoSlotsResolved);
            };
            if next.selected.contains(&jam) {
                next.selected.remove(&jam);
            } else {
                match statuses.get(&jam) {
                    Some(SlotStatus::Available) => {
                        next.selected.insert(jam);
                    }
                    _ => return Err(WizardError::SlotUnavailable(jam)),
                }
            }
        }
        WizardAction::SetContact(contact) => {
            next.contact = Some(contact);
        }
        WizardAction::SelectPayment(metode) => {
            next.metode_pembayaran = Some(metode);
        }
        WizardAction::Next => {
            next.step = advance(state)?;
        }
        WizardAction::Back => {
            next.step = match state.step {
                WizardStep::Branch => return Err(WizardError::AtFirstStep),
                WizardStep::Schedule => WizardStep::Branch,
                WizardStep::Contact => WizardStep::Schedule,
                WizardStep::Payment => WizardStep::Contact,
                WizardStep::Review => WizardStep::Payment,
            };
        }
    }
    Ok(next)
}

fn advance(state: &WizardState) -> Result<WizardStep, WizardError> {
    match state.step {
        WizardStep::Branch => {
            if state.branch.is_none() {
                return Err(WizardError::Incomplete("no branch selected"));
            }
            Ok(WizardStep::Schedule)
        }
        WizardStep::Schedule => {
            if state.play_date.is_none() || state.unit.is_none() {
                return Err(WizardError::Incomplete("no unit and date selected"));
            }
            if state.selected.is_empty() {
                return Err(WizardError::Incomplete("no slots selected"));
            }
            Ok(WizardStep::Contact)
        }
        WizardStep::Contact => {
            if state.contact.is_none() {
                return Err(WizardError::Incomplete("no contact details"));
            }
            Ok(WizardStep::Payment)
        }
        WizardStep::Payment => {
            if state.metode_pembayaran.is_none() {
                return Err(WizardError::Incomplete("no payment method"));
            }
            Ok(WizardStep::Review)
        }
        WizardStep::Review => Err(WizardError::AtLastStep),
    }
}
