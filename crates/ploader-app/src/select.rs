//! Generic single-select dropdown state
//!
//! Holds an enumerated option list keyed by an opaque comparable value. The
//! list is either closed (showing the current value) or open with one option
//! highlighted. No filtering.

/// One selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
    /// Secondary text rendered dimmed after the label (e.g. a domain).
    pub sublabel: Option<String>,
    /// Glyph rendered before the label.
    pub flag: Option<&'static str>,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            sublabel: None,
            flag: None,
        }
    }

    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn with_flag(mut self, flag: &'static str) -> Self {
        self.flag = Some(flag);
        self
    }
}

/// Navigation applied to an open or closed select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Open when closed, close when open (value unchanged)
    Toggle,
    /// Highlight the next option
    Next,
    /// Highlight the previous option
    Prev,
    /// Take the highlighted option and close
    Confirm,
    /// Close without changing the value
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectState<T> {
    options: Vec<SelectOption<T>>,
    value: T,
    open: bool,
    highlighted: usize,
}

impl<T: Clone + PartialEq> SelectState<T> {
    pub fn new(options: Vec<SelectOption<T>>, value: T) -> Self {
        Self {
            options,
            value,
            open: false,
            highlighted: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// Option matching the current value, if any.
    pub fn selected_option(&self) -> Option<&SelectOption<T>> {
        self.options.iter().find(|o| o.value == self.value)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.highlighted = self
            .options
            .iter()
            .position(|o| o.value == self.value)
            .unwrap_or(0);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a navigation action. Returns `true` when the value changed.
    pub fn apply(&mut self, action: SelectAction) -> bool {
        match action {
            SelectAction::Toggle => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
                false
            }
            SelectAction::Next if self.open => {
                self.highlighted = (self.highlighted + 1) % self.options.len();
                false
            }
            SelectAction::Prev if self.open => {
                let len = self.options.len();
                self.highlighted = (self.highlighted + len - 1) % len;
                false
            }
            SelectAction::Confirm if self.open => {
                self.open = false;
                match self.options.get(self.highlighted) {
                    Some(option) if option.value != self.value => {
                        self.value = option.value.clone();
                        true
                    }
                    _ => false,
                }
            }
            SelectAction::Dismiss => {
                self.close();
                false
            }
            // Navigation on a closed list is a no-op
            _ => false,
        }
    }
}
