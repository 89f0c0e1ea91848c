//! Read-only projection of the draft for the preview pane

use super::{LoadedImage, NewItemDraft};

pub const NO_NAME: &str = "no name yet";
pub const NOT_SELECTED: &str = "not selected";
pub const NO_DESCRIPTION: &str = "no description";

/// What the preview card shows for the current draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPreview {
    pub title: String,
    pub category: String,
    pub location: String,
    pub voivodeship: String,
    /// Only listed once something has been typed
    pub phone_number: Option<String>,
    pub description: String,
    /// Summary line for a ready image
    pub image: Option<String>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl ItemPreview {
    pub fn from_draft(draft: &NewItemDraft, image: Option<&LoadedImage>) -> Self {
        Self {
            title: or_placeholder(&draft.name, NO_NAME),
            category: or_placeholder(&draft.category, NOT_SELECTED),
            location: or_placeholder(&draft.location, NOT_SELECTED),
            voivodeship: or_placeholder(&draft.voivodeship, NOT_SELECTED),
            phone_number: (!draft.phone_number.is_empty()).then(|| draft.phone_number.clone()),
            description: or_placeholder(&draft.description, NO_DESCRIPTION),
            image: image.map(|i| {
                format!("{} ({}x{}, {})", i.file_name(), i.width, i.height, i.mime)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_empty_draft_shows_placeholders() {
        let preview = ItemPreview::from_draft(&NewItemDraft::default(), None);
        assert_eq!(
            preview,
            ItemPreview {
                title: NO_NAME.to_string(),
                category: NOT_SELECTED.to_string(),
                location: NOT_SELECTED.to_string(),
                voivodeship: NOT_SELECTED.to_string(),
                phone_number: None,
                description: NO_DESCRIPTION.to_string(),
                image: None,
            }
        );
    }

    #[test]
    fn test_filled_draft_is_mirrored() {
        let draft = NewItemDraft {
            name: "Lamp".to_string(),
            category: "Electronics".to_string(),
            description: "Barely used desk lamp".to_string(),
            location: "Warsaw".to_string(),
            phone_number: "123".to_string(),
            voivodeship: "Mazowieckie".to_string(),
        };
        let preview = ItemPreview::from_draft(&draft, None);
        assert_eq!(preview.title, "Lamp");
        assert_eq!(preview.category, "Electronics");
        assert_eq!(preview.location, "Warsaw");
        assert_eq!(preview.voivodeship, "Mazowieckie");
        assert_eq!(preview.phone_number.as_deref(), Some("123"));
        assert_eq!(preview.description, "Barely used desk lamp");
    }

    #[test]
    fn test_clearing_a_field_restores_its_placeholder() {
        let mut draft = NewItemDraft {
            name: "Lamp".to_string(),
            ..Default::default()
        };
        assert_eq!(ItemPreview::from_draft(&draft, None).title, "Lamp");
        draft.name.clear();
        assert_eq!(ItemPreview::from_draft(&draft, None).title, NO_NAME);
    }

    #[test]
    fn test_image_summary() {
        let image = LoadedImage {
            path: PathBuf::from("/photos/lamp.jpg"),
            mime: "image/jpeg",
            width: 640,
            height: 480,
            data_url: "data:image/jpeg;base64,AAAA".to_string(),
        };
        let preview = ItemPreview::from_draft(&NewItemDraft::default(), Some(&image));
        assert_eq!(
            preview.image.as_deref(),
            Some("lamp.jpg (640x480, image/jpeg)")
        );
    }
}
