//! Form buttons

use crate::state::View;

/// Where a button leads when pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    /// Navigate to another console view
    Link(View),
    /// External URL
    Anchor(String),
    /// Plain button, runs the form's own action
    Native,
}

/// Outcome of pressing a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    Navigate(View),
    OpenUrl(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub target: ButtonTarget,
    pub disabled: bool,
}

impl Button {
    pub fn link(label: &str, view: View) -> Self {
        Self::new(label, ButtonTarget::Link(view))
    }

    pub fn anchor(label: &str, href: impl Into<String>) -> Self {
        Self::new(label, ButtonTarget::Anchor(href.into()))
    }

    pub fn native(label: &str) -> Self {
        Self::new(label, ButtonTarget::Native)
    }

    fn new(label: &str, target: ButtonTarget) -> Self {
        Self {
            label: label.to_string(),
            target,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Press the button. Disabled buttons do nothing.
    pub fn activate(&self) -> Option<ButtonAction> {
        if self.disabled {
            return None;
        }
        Some(match &self.target {
            ButtonTarget::Link(view) => ButtonAction::Navigate(view.clone()),
            ButtonTarget::Anchor(href) => ButtonAction::OpenUrl(href.clone()),
            ButtonTarget::Native => ButtonAction::Submit,
        })
    }
}
