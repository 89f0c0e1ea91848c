//! Application shell hosting the add-item modal

use crate::config::TuiConfig;
use crate::host::{ModalOutcome, RecordingHost};
use crate::modal::AddItemModal;
use crate::state::ImageLoaded;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Main application state
pub struct App {
    pub modal: AddItemModal<RecordingHost>,
    image_rx: UnboundedReceiver<ImageLoaded>,
}

impl App {
    /// Mount the modal with the configured option lists
    pub fn new(config: &TuiConfig) -> Self {
        let (image_tx, image_rx) = mpsc::unbounded_channel();
        let options = config.listing_options();
        Self {
            modal: AddItemModal::new(&options, RecordingHost::default(), image_tx),
            image_rx,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit: Ctrl+C cancels the modal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.modal.close();
            return;
        }
        self.modal.handle_key(key);
    }

    /// Apply image reads that finished since the last tick. Returns how many arrived.
    pub fn poll_image_events(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.image_rx.try_recv() {
            self.modal.apply_image(event);
            count += 1;
        }
        count
    }

    /// Check if app wants to quit
    pub fn should_quit(&self) -> bool {
        !self.modal.is_open()
    }

    pub fn into_outcome(self) -> Option<ModalOutcome> {
        self.modal.into_host().into_outcome()
    }
}
