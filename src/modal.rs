//! The add-item modal: form state, validation, image loading and exits

use crate::host::{ItemModalHost, ListingOptions};
use crate::platform;
use crate::state::{
    validate, Form, FormButton, FormField, ImageLoaded, ImageLoader, ImageState, ItemForm,
    ItemPreview, NewItemRecord, ValidationErrors,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use tokio::sync::mpsc::UnboundedSender;

/// Modal dialog for creating a new listing
///
/// Owns the draft for its whole lifetime. Exactly one of the host callbacks
/// fires, once; afterwards the modal ignores all input.
pub struct AddItemModal<H: ItemModalHost> {
    form: ItemForm,
    errors: ValidationErrors,
    /// Once set, errors are recomputed after every edit
    submit_attempted: bool,
    loader: ImageLoader,
    host: H,
    exited: bool,
}

impl<H: ItemModalHost> AddItemModal<H> {
    pub fn new(options: &ListingOptions, host: H, image_tx: UnboundedSender<ImageLoaded>) -> Self {
        tracing::debug!(
            "Opening add-item modal ({} categories, {} locations, {} regions)",
            options.categories.len(),
            options.locations.len(),
            options.voivodeships.len()
        );
        Self {
            form: ItemForm::new(options),
            errors: ValidationErrors::default(),
            submit_attempted: false,
            loader: ImageLoader::new(image_tx),
            host,
            exited: false,
        }
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn image_state(&self) -> &ImageState {
        self.loader.state()
    }

    pub fn is_open(&self) -> bool {
        !self.exited
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Preview of the current draft
    pub fn preview(&self) -> ItemPreview {
        ItemPreview::from_draft(&self.form.draft(), self.loader.image())
    }

    /// Validate the current draft and build the record it would submit
    pub fn record(&self) -> Result<NewItemRecord, ValidationErrors> {
        let draft = self.form.draft();
        validate(&draft)?;
        Ok(NewItemRecord::from_draft(
            draft,
            self.typed_image_path().map(Path::to_path_buf),
            self.loader.image_url().to_string(),
        ))
    }

    /// Path in the image input, if any. A path that was typed but not yet
    /// loaded is still the selected file; it just has no data URL.
    fn typed_image_path(&self) -> Option<&Path> {
        let text = self.form.image_path.as_text().trim();
        (!text.is_empty()).then_some(Path::new(text))
    }

    /// Validate and hand the record to the host. Returns true on success.
    pub fn submit(&mut self) -> bool {
        if self.exited {
            return false;
        }
        self.submit_attempted = true;

        match self.record() {
            Ok(record) => {
                self.errors = ValidationErrors::default();
                self.exited = true;
                self.host.on_add_item(record);
                true
            }
            Err(errors) => {
                let failing: Vec<_> = errors.iter().map(|(field, _)| field.key()).collect();
                tracing::debug!("Submission rejected: {errors} ({})", failing.join(", "));
                self.errors = errors;
                false
            }
        }
    }

    /// Cancel: discard the draft and tell the host
    pub fn close(&mut self) {
        if self.exited {
            return;
        }
        self.exited = true;
        self.host.on_close();
    }

    /// Apply a finished background image read
    pub fn apply_image(&mut self, event: ImageLoaded) {
        if self.exited {
            return;
        }
        self.loader.apply(event);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.exited {
            return;
        }

        let on_buttons = self.form.is_buttons_row_active();
        let on_choice = self.form.is_active_field_choice();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Keyboard shortcuts (work from any field)
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Enter if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Esc => self.close(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.form.selected_button = self.form.selected_button.toggle();
            }
            KeyCode::Left if on_choice => self.edit(|f| f.prev_option()),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.edit(|f| f.next_option()),
            KeyCode::Enter if on_buttons => match self.form.selected_button {
                FormButton::AddItem => {
                    self.submit();
                }
                FormButton::Close => self.close(),
            },
            KeyCode::Enter if self.form.is_image_field_active() => self.pick_image(),
            KeyCode::Enter if self.form.is_active_field_multiline() => {
                self.edit(|f| f.push_char('\n'))
            }
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Char(c) if !on_buttons && !on_choice && !ctrl => {
                self.edit(|f| f.push_char(c))
            }
            KeyCode::Backspace if !on_buttons => self.edit(|f| f.pop_char()),
            KeyCode::Delete if on_choice => self.edit(|f| f.clear()),
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut FormField)) {
        if let Some(field) = self.form.get_active_field_mut() {
            change(field);
            tracing::debug!("Field {} changed", field.name);
        }
        // The loaded image must always be the one named in the input
        if self.form.is_image_field_active()
            && self.loader.selected_file() != self.typed_image_path()
        {
            self.loader.clear();
        }
        if self.submit_attempted {
            self.errors = validate(&self.form.draft()).err().unwrap_or_default();
        }
    }

    /// Start loading the typed image path, or drop the image if it is empty
    fn pick_image(&mut self) {
        match self.typed_image_path().map(Path::to_path_buf) {
            Some(path) => {
                self.loader.select(path);
            }
            None => self.loader.clear(),
        }
    }
}
