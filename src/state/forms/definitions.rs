//! Form declarations for every console form

use super::button::Button;
use super::field::FieldState;
use super::form_state::{use_form, FormStore};
use super::input::{Input, InputEdit};
use crate::state::View;
use crate::validation::{email, max_length, min_length, phone, required};

/// Focus movement shared by all forms
pub trait Form {
    fn focus_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);
    fn next_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus();
        self.set_focus((current + 1) % count);
    }
    fn prev_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus();
        if current == 0 {
            self.set_focus(count - 1);
        } else {
            self.set_focus(current - 1);
        }
    }
}

/// Every form the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    Category,
    ContactUs,
    Newsletter,
    CommentAnswer,
    ContactAnswer,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Category => "New Category",
            Self::ContactUs => "Contact Us",
            Self::Newsletter => "Newsletter",
            Self::CommentAnswer => "Answer Comment",
            Self::ContactAnswer => "Answer Contact",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Category => "Create",
            Self::ContactUs => "Send",
            Self::Newsletter => "Subscribe",
            Self::CommentAnswer | Self::ContactAnswer => "Answer",
        }
    }

    /// View that hosts the form
    pub fn view(&self) -> View {
        match self {
            Self::Login => View::Login,
            Self::Register => View::Register,
            Self::Category => View::CategoryCreate,
            Self::ContactUs => View::ContactUs,
            Self::Newsletter => View::NewsletterSubscribe,
            Self::CommentAnswer => View::CommentAnswer,
            Self::ContactAnswer => View::ContactAnswer,
        }
    }

    pub fn from_view(view: &View) -> Option<Self> {
        match view {
            View::Login => Some(Self::Login),
            View::Register => Some(Self::Register),
            View::CategoryCreate => Some(Self::Category),
            View::ContactUs => Some(Self::ContactUs),
            View::NewsletterSubscribe => Some(Self::Newsletter),
            View::CommentAnswer => Some(Self::CommentAnswer),
            View::ContactAnswer => Some(Self::ContactAnswer),
            _ => None,
        }
    }

    pub fn inputs(&self) -> Vec<Input> {
        match self {
            Self::Login => vec![
                Input::text(
                    "identifier",
                    "Username or email",
                    vec![required(), min_length(8), max_length(20)],
                ),
                Input::text(
                    "password",
                    "Password",
                    vec![required(), min_length(8), max_length(18)],
                )
                .masked(),
            ],
            Self::Register => vec![
                Input::text("name", "Full name", vec![required(), min_length(6), max_length(20)]),
                Input::text(
                    "username",
                    "Username",
                    vec![required(), min_length(8), max_length(20)],
                ),
                Input::text(
                    "email",
                    "Email",
                    vec![required(), min_length(8), max_length(40), email()],
                ),
                Input::text("phone", "Phone (09xxxxxxxxx)", vec![required(), phone()]),
                Input::text(
                    "password",
                    "Password",
                    vec![required(), min_length(8), max_length(18)],
                )
                .masked(),
            ],
            Self::Category => vec![
                Input::text("title", "Title", vec![required(), min_length(5), max_length(20)]),
                Input::text(
                    "shortname",
                    "Short name",
                    vec![required(), min_length(5), max_length(20)],
                ),
            ],
            Self::ContactUs => vec![
                Input::text("name", "Full name", vec![required(), min_length(6), max_length(20)]),
                Input::text(
                    "email",
                    "Email",
                    vec![required(), min_length(8), max_length(40), email()],
                ),
                Input::text("phone", "Phone (09xxxxxxxxx)", vec![required(), phone()]),
                Input::textarea("body", "Message", vec![required(), min_length(10)]),
            ],
            Self::Newsletter => vec![Input::text("email", "Email", vec![required(), email()])],
            Self::CommentAnswer | Self::ContactAnswer => {
                vec![Input::textarea("body", "Answer", vec![required(), min_length(5)])]
            }
        }
    }

    /// Secondary buttons shown after the submit button
    fn links(&self, site_url: &str) -> Vec<Button> {
        match self {
            Self::Login => vec![
                Button::link("Register", View::Register),
                Button::link("Cancel", View::Home),
            ],
            Self::Register => vec![
                Button::link("Have an account? Login", View::Login),
                Button::link("Cancel", View::Home),
            ],
            Self::Category => vec![Button::link("Cancel", View::Categories)],
            Self::ContactUs => vec![
                Button::anchor("Website", site_url),
                Button::link("Cancel", View::Home),
            ],
            Self::Newsletter => vec![Button::link("Cancel", View::Home)],
            Self::CommentAnswer => vec![Button::link("Cancel", View::Comments)],
            Self::ContactAnswer => vec![Button::link("Cancel", View::Contacts)],
        }
    }
}

/// A mounted form: its inputs, its state and which control has focus
#[derive(Debug, Clone)]
pub struct ActiveForm {
    pub kind: FormKind,
    pub inputs: Vec<Input>,
    pub store: FormStore,
    links: Vec<Button>,
    focus_index: usize,
}

impl ActiveForm {
    pub fn new(kind: FormKind, site_url: &str) -> Self {
        let inputs = kind.inputs();
        let store = use_form(
            inputs
                .iter()
                .map(|input| (input.id.clone(), FieldState::empty())),
            false,
        );
        Self {
            kind,
            inputs,
            store,
            links: kind.links(site_url),
            focus_index: 0,
        }
    }

    /// Submit button first, then the form's links
    pub fn buttons(&self) -> Vec<Button> {
        let mut buttons =
            vec![Button::native(self.kind.submit_label()).disabled(!self.store.is_form_valid())];
        buttons.extend(self.links.iter().cloned());
        buttons
    }

    pub fn can_submit(&self) -> bool {
        self.store.is_form_valid()
    }

    pub fn value(&self, id: &str) -> &str {
        self.store.value(id)
    }

    pub fn focused_input(&self) -> Option<&Input> {
        self.inputs.get(self.focus_index)
    }

    /// Index into `buttons()` when a button has focus
    pub fn focused_button_index(&self) -> Option<usize> {
        self.focus_index.checked_sub(self.inputs.len())
    }

    pub fn focused_button(&self) -> Option<Button> {
        self.focused_button_index()
            .and_then(|i| self.buttons().into_iter().nth(i))
    }

    pub fn is_focused_multiline(&self) -> bool {
        self.focused_input().is_some_and(|i| i.is_multiline())
    }

    /// Route a key edit to the focused input; ignored on buttons
    pub fn handle_edit(&mut self, edit: InputEdit) {
        if let Some(input) = self.inputs.get(self.focus_index) {
            input.handle_edit(edit, &mut self.store);
        }
    }

    /// Put a value into a field as if it had been typed
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(input) = self.inputs.iter().find(|i| i.id == id) {
            input.on_change(value.to_string(), &mut self.store);
        }
    }
}

impl Form for ActiveForm {
    fn focus_count(&self) -> usize {
        self.inputs.len() + 1 + self.links.len()
    }
    fn focus(&self) -> usize {
        self.focus_index
    }
    fn set_focus(&mut self, index: usize) {
        self.focus_index = index.min(self.focus_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ButtonAction;

    const SITE: &str = "https://learn.example.com";

    fn type_into(form: &mut ActiveForm, text: &str) {
        for c in text.chars() {
            form.handle_edit(InputEdit::Insert(c));
        }
    }

    mod declarations {
        use super::*;

        #[test]
        fn test_view_round_trip() {
            let kinds = [
                FormKind::Login,
                FormKind::Register,
                FormKind::Category,
                FormKind::ContactUs,
                FormKind::Newsletter,
                FormKind::CommentAnswer,
                FormKind::ContactAnswer,
            ];
            for kind in kinds {
                assert_eq!(FormKind::from_view(&kind.view()), Some(kind));
            }
            assert_eq!(FormKind::from_view(&View::Courses), None);
        }

        #[test]
        fn test_login_password_is_masked() {
            let inputs = FormKind::Login.inputs();
            assert_eq!(inputs[0].id, "identifier");
            assert!(inputs[1].masked);
        }

        #[test]
        fn test_contact_body_is_textarea() {
            let inputs = FormKind::ContactUs.inputs();
            assert!(inputs.iter().any(|i| i.id == "body" && i.is_multiline()));
        }

        #[test]
        fn test_ids_are_unique() {
            let inputs = FormKind::Register.inputs();
            let mut ids: Vec<_> = inputs.iter().map(|i| i.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), inputs.len());
        }
    }

    mod active_form {
        use super::*;

        #[test]
        fn test_new_form_is_invalid_with_empty_fields() {
            let form = ActiveForm::new(FormKind::Category, SITE);
            assert!(!form.can_submit());
            assert_eq!(form.value("title"), "");
            assert_eq!(form.value("shortname"), "");
        }

        #[test]
        fn test_submit_button_follows_validity() {
            let mut form = ActiveForm::new(FormKind::Newsletter, SITE);
            assert!(form.buttons()[0].disabled);

            type_into(&mut form, "a@b.co");
            assert!(form.can_submit());
            assert!(!form.buttons()[0].disabled);
            assert_eq!(form.buttons()[0].activate(), Some(ButtonAction::Submit));
        }

        #[test]
        fn test_category_needs_both_fields() {
            let mut form = ActiveForm::new(FormKind::Category, SITE);
            type_into(&mut form, "Frontend");
            assert!(!form.can_submit());

            form.next_focus();
            type_into(&mut form, "frontend");
            assert!(form.can_submit());
        }

        #[test]
        fn test_focus_cycles_through_inputs_and_buttons() {
            let mut form = ActiveForm::new(FormKind::Login, SITE);
            // identifier, password, Login, Register, Cancel
            assert_eq!(form.focus_count(), 5);

            form.next_focus();
            form.next_focus();
            assert_eq!(form.focused_button_index(), Some(0));
            assert!(form.focused_input().is_none());

            form.next_focus();
            form.next_focus();
            form.next_focus();
            assert_eq!(form.focus(), 0);

            form.prev_focus();
            assert_eq!(
                form.focused_button().map(|b| b.label),
                Some("Cancel".to_string())
            );
        }

        #[test]
        fn test_edits_on_buttons_are_ignored() {
            let mut form = ActiveForm::new(FormKind::Newsletter, SITE);
            form.set_focus(1);
            type_into(&mut form, "x");
            assert_eq!(form.value("email"), "");
        }

        #[test]
        fn test_set_focus_clamps() {
            let mut form = ActiveForm::new(FormKind::Newsletter, SITE);
            form.set_focus(100);
            assert_eq!(form.focus(), form.focus_count() - 1);
        }

        #[test]
        fn test_contact_us_has_website_anchor() {
            let form = ActiveForm::new(FormKind::ContactUs, SITE);
            assert!(form
                .buttons()
                .iter()
                .any(|b| b.activate() == Some(ButtonAction::OpenUrl(SITE.to_string()))));
        }

        #[test]
        fn test_set_value_validates() {
            let mut form = ActiveForm::new(FormKind::Newsletter, SITE);
            form.set_value("email", "bad");
            assert!(!form.can_submit());
            form.set_value("email", "good@mail.com");
            assert!(form.can_submit());
        }

        #[test]
        fn test_multiline_focus() {
            let mut form = ActiveForm::new(FormKind::CommentAnswer, SITE);
            assert!(form.is_focused_multiline());
            form.handle_edit(InputEdit::Insert('h'));
            form.handle_edit(InputEdit::Newline);
            form.handle_edit(InputEdit::Insert('i'));
            assert_eq!(form.value("body"), "h\ni");
        }
    }
}
