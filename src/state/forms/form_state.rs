//! Add-item form state

use super::field::FormField;
use crate::host::ListingOptions;
use crate::state::NewItemDraft;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    AddItem,
    Close,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::AddItem => Self::Close,
            Self::Close => Self::AddItem,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddItem => "Add item",
            Self::Close => "Close",
        }
    }
}

// Add Item Form
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub name: FormField,
    pub category: FormField,
    pub description: FormField,
    pub location: FormField,
    pub phone_number: FormField,
    pub voivodeship: FormField,
    /// Path typed into the image picker
    pub image_path: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl ItemForm {
    pub const NAME: usize = 0;
    pub const CATEGORY: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const LOCATION: usize = 3;
    pub const PHONE_NUMBER: usize = 4;
    pub const VOIVODESHIP: usize = 5;
    pub const IMAGE: usize = 6;
    pub const BUTTONS: usize = 7;

    pub fn new(options: &ListingOptions) -> Self {
        Self {
            name: FormField::text("name", "Item name", "Item name", false),
            category: FormField::choice(
                "category",
                "Category",
                "Choose a category",
                &options.categories,
            ),
            description: FormField::text("description", "Description", "Item description", true),
            location: FormField::choice(
                "location",
                "Location",
                "Choose a location",
                &options.locations,
            ),
            phone_number: FormField::text("phoneNumber", "Phone number", "Phone number", false),
            voivodeship: FormField::choice(
                "voivodeship",
                "Region",
                "Choose a region",
                &options.voivodeships,
            ),
            image_path: FormField::text("imageFile", "Item photo", "Path to an image file", false),
            active_field_index: Self::NAME,
            selected_button: FormButton::AddItem,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS
    }

    pub fn is_image_field_active(&self) -> bool {
        self.active_field_index == Self::IMAGE
    }

    /// Snapshot of the current values as a draft
    pub fn draft(&self) -> NewItemDraft {
        NewItemDraft {
            name: self.name.as_text().to_string(),
            category: self.category.as_text().to_string(),
            description: self.description.as_text().to_string(),
            location: self.location.as_text().to_string(),
            phone_number: self.phone_number.as_text().to_string(),
            voivodeship: self.voivodeship.as_text().to_string(),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    pub fn is_active_field_choice(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_choice())
    }
}

impl Form for ItemForm {
    fn field_count(&self) -> usize {
        8 // seven inputs, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            Self::NAME => Some(&mut self.name),
            Self::CATEGORY => Some(&mut self.category),
            Self::DESCRIPTION => Some(&mut self.description),
            Self::LOCATION => Some(&mut self.location),
            Self::PHONE_NUMBER => Some(&mut self.phone_number),
            Self::VOIVODESHIP => Some(&mut self.voivodeship),
            Self::IMAGE => Some(&mut self.image_path),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::NAME => Some(&self.name),
            Self::CATEGORY => Some(&self.category),
            Self::DESCRIPTION => Some(&self.description),
            Self::LOCATION => Some(&self.location),
            Self::PHONE_NUMBER => Some(&self.phone_number),
            Self::VOIVODESHIP => Some(&self.voivodeship),
            Self::IMAGE => Some(&self.image_path),
            // Buttons row has no FormField
            _ => None,
        }
    }
}
