//! Draft and record types for a new listing

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// In-progress values of the add-item form
///
/// Exists only while the modal is open. Every field is plain text; choice
/// fields hold the selected option or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub voivodeship: String,
}

/// Validated payload handed to the host on submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRecord {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub voivodeship: String,
    /// The file selected in the image picker, if any
    pub image_file: Option<PathBuf>,
    /// Data URL of the decoded image, empty when no image is ready
    pub image_url: String,
}

impl NewItemRecord {
    /// Build a record from a draft that already passed validation
    pub fn from_draft(draft: NewItemDraft, image_file: Option<PathBuf>, image_url: String) -> Self {
        Self {
            name: draft.name,
            category: draft.category,
            description: draft.description,
            location: draft.location,
            phone_number: draft.phone_number,
            voivodeship: draft.voivodeship,
            image_file,
            image_url,
        }
    }
}
