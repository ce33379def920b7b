/// Text entry for the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current contents of the text box.
    pub text: String,
    /// Set when the text box should grab keyboard focus on the next frame.
    pub focus_requested: bool,
}

impl InputState {
    /// Text exactly as typed, or `None` when only whitespace was entered.
    ///
    /// Surrounding whitespace is kept: the service counts it in its metrics.
    pub fn submittable_text(&self) -> Option<&str> {
        (!self.text.trim().is_empty()).then_some(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_not_submittable() {
        let mut input = InputState::default();
        assert_eq!(input.submittable_text(), None);
        input.text = " \n\t ".into();
        assert_eq!(input.submittable_text(), None);
        input.text = "  hello  ".into();
        assert_eq!(input.submittable_text(), Some("  hello  "));
    }
}
