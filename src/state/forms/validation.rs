//! Field rules for the add-item form

use crate::state::NewItemDraft;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());

/// Validated fields of a draft, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemField {
    Name,
    Category,
    Description,
    Location,
    PhoneNumber,
    Voivodeship,
}

impl ItemField {
    #[cfg(test)]
    pub const ALL: [ItemField; 6] = [
        ItemField::Name,
        ItemField::Category,
        ItemField::Description,
        ItemField::Location,
        ItemField::PhoneNumber,
        ItemField::Voivodeship,
    ];

    /// Key of the field in the submitted record
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Description => "description",
            Self::Location => "location",
            Self::PhoneNumber => "phoneNumber",
            Self::Voivodeship => "voivodeship",
        }
    }

    fn value<'a>(&self, draft: &'a NewItemDraft) -> &'a str {
        match self {
            Self::Name => &draft.name,
            Self::Category => &draft.category,
            Self::Description => &draft.description,
            Self::Location => &draft.location,
            Self::PhoneNumber => &draft.phone_number,
            Self::Voivodeship => &draft.voivodeship,
        }
    }
}

enum Rule {
    /// At least this many characters, counted as Unicode scalar values
    /// rather than UTF-16 units, so a character like 😀 counts once
    MinLength(usize),
    /// Whole value must match
    Matches(&'static Lazy<Regex>),
}

impl Rule {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::Matches(re) => re.is_match(value),
        }
    }
}

struct FieldRule {
    field: ItemField,
    rule: Rule,
    message: &'static str,
}

static RULES: [FieldRule; 6] = [
    FieldRule {
        field: ItemField::Name,
        rule: Rule::MinLength(1),
        message: "item name is required",
    },
    FieldRule {
        field: ItemField::Category,
        rule: Rule::MinLength(1),
        message: "category is required",
    },
    FieldRule {
        field: ItemField::Description,
        rule: Rule::MinLength(10),
        message: "description must be at least 10 characters",
    },
    FieldRule {
        field: ItemField::Location,
        rule: Rule::MinLength(1),
        message: "location is required",
    },
    FieldRule {
        field: ItemField::PhoneNumber,
        rule: Rule::Matches(&PHONE_NUMBER_RE),
        message: "phone number must be 9 digits",
    },
    FieldRule {
        field: ItemField::Voivodeship,
        rule: Rule::MinLength(1),
        message: "region is required",
    },
];

/// Every failing field of a draft with its message
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<ItemField, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: ItemField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Check every rule independently and collect all failures
pub fn validate(draft: &NewItemDraft) -> Result<(), ValidationErrors> {
    let failures: BTreeMap<_, _> = RULES
        .iter()
        .filter(|r| !r.rule.accepts(r.field.value(draft)))
        .map(|r| (r.field, r.message))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> NewItemDraft {
        NewItemDraft {
            name: "Lamp".to_string(),
            category: "Electronics".to_string(),
            description: "Barely used desk lamp".to_string(),
            location: "Warsaw".to_string(),
            phone_number: "123456789".to_string(),
            voivodeship: "Mazowieckie".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate(&NewItemDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(ItemField::Name), Some("item name is required"));
        assert_eq!(errors.get(ItemField::Category), Some("category is required"));
        assert_eq!(
            errors.get(ItemField::Description),
            Some("description must be at least 10 characters")
        );
        assert_eq!(errors.get(ItemField::Location), Some("location is required"));
        assert_eq!(
            errors.get(ItemField::PhoneNumber),
            Some("phone number must be 9 digits")
        );
        assert_eq!(errors.get(ItemField::Voivodeship), Some("region is required"));
    }

    #[test]
    fn test_errors_iterate_in_display_order() {
        let errors = validate(&NewItemDraft::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, ItemField::ALL.to_vec());
    }

    #[test]
    fn test_short_phone_only_flags_phone() {
        let draft = NewItemDraft {
            phone_number: "12345".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ItemField::PhoneNumber),
            Some("phone number must be 9 digits")
        );
        assert!(errors.get(ItemField::Name).is_none());
    }

    mod boundaries {
        use super::*;
        use pretty_assertions::assert_eq;

        fn with_description(description: &str) -> NewItemDraft {
            NewItemDraft {
                description: description.to_string(),
                ..valid_draft()
            }
        }

        fn with_phone(phone: &str) -> NewItemDraft {
            NewItemDraft {
                phone_number: phone.to_string(),
                ..valid_draft()
            }
        }

        #[test]
        fn test_description_of_nine_chars_fails() {
            assert!(validate(&with_description("123456789")).is_err());
        }

        #[test]
        fn test_description_of_ten_chars_passes() {
            assert!(validate(&with_description("1234567890")).is_ok());
        }

        #[test]
        fn test_description_counts_characters_not_bytes() {
            // 9 characters, 18 bytes
            assert!(validate(&with_description("żżżżżżżżż")).is_err());
            assert!(validate(&with_description("żżżżżżżżżż")).is_ok());
        }

        #[test]
        fn test_description_counts_scalars_not_utf16_units() {
            // 5 characters, 10 UTF-16 units
            assert!(validate(&with_description("😀😀😀😀😀")).is_err());
            assert!(validate(&with_description(&"😀".repeat(10))).is_ok());
        }

        #[test]
        fn test_phone_of_eight_or_ten_digits_fails() {
            assert!(validate(&with_phone("12345678")).is_err());
            assert!(validate(&with_phone("1234567890")).is_err());
        }

        #[test]
        fn test_phone_of_nine_digits_passes() {
            assert!(validate(&with_phone("987654321")).is_ok());
        }

        #[test]
        fn test_phone_with_non_digits_fails() {
            assert!(validate(&with_phone("12345678a")).is_err());
            assert!(validate(&with_phone("123 45678")).is_err());
            assert!(validate(&with_phone("+48123456")).is_err());
        }

        #[test]
        fn test_phone_rejects_non_ascii_digits() {
            // Arabic-Indic digits
            assert!(validate(&with_phone("١٢٣٤٥٦٧٨٩")).is_err());
        }

        #[test]
        fn test_phone_rejects_trailing_newline() {
            assert!(validate(&with_phone("123456789\n")).is_err());
        }
    }

    #[test]
    fn test_field_keys_match_record_keys() {
        let keys: Vec<_> = ItemField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "category",
                "description",
                "location",
                "phoneNumber",
                "voivodeship"
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let errors = validate(&NewItemDraft::default()).unwrap_err();
        assert_eq!(errors.to_string(), "6 field(s) failed validation");
    }
}
