//! Contract between the add-item modal and whoever opened it

use crate::state::NewItemRecord;

/// Ordered option lists for the choice fields
///
/// Supplied once when the modal opens and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub voivodeships: Vec<String>,
}

/// Callbacks the modal invokes when it exits
///
/// The modal calls exactly one of these, at most once.
#[cfg_attr(test, mockall::automock)]
pub trait ItemModalHost {
    /// The user cancelled; the host should unmount the modal
    fn on_close(&mut self);

    /// The draft passed validation
    fn on_add_item(&mut self, record: NewItemRecord);
}

/// How the modal ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    Closed,
    Added(NewItemRecord),
}

/// Host used by the application shell: remembers the outcome for `main`
#[derive(Debug, Default)]
pub struct RecordingHost {
    outcome: Option<ModalOutcome>,
}

impl RecordingHost {
    #[cfg(test)]
    pub fn outcome(&self) -> Option<&ModalOutcome> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Option<ModalOutcome> {
        self.outcome
    }
}

impl ItemModalHost for RecordingHost {
    fn on_close(&mut self) {
        tracing::info!("Add-item modal closed without submitting");
        self.outcome = Some(ModalOutcome::Closed);
    }

    fn on_add_item(&mut self, record: NewItemRecord) {
        tracing::info!("Item \"{}\" submitted", record.name);
        self.outcome = Some(ModalOutcome::Added(record));
    }
}
