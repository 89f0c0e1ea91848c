//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Selection over host-supplied options; `None` is the placeholder entry
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Shown in place of an empty value
    pub placeholder: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(name: &str, label: &str, placeholder: &str, options: &[String]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Choice {
                options: options.to_vec(),
                selected: None,
            },
            is_multiline: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the text value (the selected option for choices, empty if unselected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Advance a choice to the next option, passing through the placeholder
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None if options.is_empty() => None,
                None => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                Some(_) => None,
            };
        }
    }

    /// Step a choice back to the previous option, passing through the placeholder
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None => options.len().checked_sub(1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => {
                let value = self.as_text();
                if value.is_empty() {
                    format!("‹ {} ›", self.placeholder)
                } else {
                    format!("‹ {value} ›")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        vec!["Warsaw".to_string(), "Krakow".to_string()]
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("name", "Item name", "Item name", false);
        field.push_char('L');
        field.push_char('a');
        assert_eq!(field.as_text(), "La");
        field.pop_char();
        assert_eq!(field.as_text(), "L");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_choice_starts_unselected() {
        let field = FormField::choice("location", "Location", "Choose a location", &cities());
        assert!(field.is_choice());
        assert_eq!(field.as_text(), "");
        assert_eq!(field.display_value(), "‹ Choose a location ›");
    }

    #[test]
    fn test_next_option_wraps_through_placeholder() {
        let mut field = FormField::choice("location", "Location", "Choose", &cities());
        field.next_option();
        assert_eq!(field.as_text(), "Warsaw");
        field.next_option();
        assert_eq!(field.as_text(), "Krakow");
        field.next_option();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_prev_option_from_placeholder_goes_to_last() {
        let mut field = FormField::choice("location", "Location", "Choose", &cities());
        field.prev_option();
        assert_eq!(field.as_text(), "Krakow");
        field.prev_option();
        field.prev_option();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_choice_with_no_options_stays_unselected() {
        let mut field = FormField::choice("category", "Category", "Choose", &[]);
        field.next_option();
        assert_eq!(field.as_text(), "");
        field.prev_option();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_typing_into_choice_is_ignored() {
        let mut field = FormField::choice("location", "Location", "Choose", &cities());
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
