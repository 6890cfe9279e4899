//! List Management UI State Machine
//!
//! Transient state for the Manage screen: which dialog or menu is open, the
//! captured target habit, form drafts, inline errors, and the snackbar flags.
//! Pure transitions only; components call them through a signal and run the
//! API effects around them.

use std::collections::HashMap;

/// Client-side capacity check before opening the add dialog
pub const MAX_HABITS: usize = 10;

/// Snackbar auto-hide delay in milliseconds
pub const SNACKBAR_HIDE_MS: u32 = 5000;

/// At most one dialog is open at any instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    None,
    Add,
    Edit,
    Delete,
}

/// Message slot shared by the add and edit success snackbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InfoMessage {
    #[default]
    Added,
    Edited,
}

impl InfoMessage {
    pub fn text(self) -> &'static str {
        match self {
            InfoMessage::Added => "Habit added!",
            InfoMessage::Edited => "Habit edited!",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManageUi {
    pub dialog: Dialog,
    pub menu_open: bool,
    /// Habit captured when its row menu was opened
    pub target_id: Option<String>,
    pub target_name: String,
    /// Draft for the add dialog
    pub draft_name: String,
    /// Draft for the edit dialog, prefilled from the captured name
    pub edit_draft: String,
    /// Field-keyed validation errors for the open dialog
    pub errors: HashMap<String, String>,
    pub info_open: bool,
    pub info_message: InfoMessage,
    pub error_open: bool,
    pub delete_open: bool,
}

impl ManageUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the add dialog, or the capacity snackbar when the collection is full
    pub fn open_add(&mut self, habit_count: usize) {
        self.close_menu();
        if habit_count >= MAX_HABITS {
            self.error_open = true;
            return;
        }
        self.dialog = Dialog::Add;
        self.draft_name.clear();
        self.errors.clear();
    }

    pub fn add_succeeded(&mut self) {
        self.reset_dialog_state();
        self.info_message = InfoMessage::Added;
        self.info_open = true;
    }

    /// Keeps the dialog open so the user can correct and resubmit
    pub fn add_failed(&mut self, errors: HashMap<String, String>) {
        self.errors = errors;
    }

    /// Capture the habit behind the row whose menu was opened
    pub fn open_menu(&mut self, id: &str, name: &str) {
        self.dialog = Dialog::None;
        self.menu_open = true;
        self.target_id = Some(id.to_string());
        self.target_name = name.to_string();
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Menu entry: edit. The menu always closes before the dialog opens.
    pub fn menu_to_edit(&mut self) {
        self.close_menu();
        self.dialog = Dialog::Edit;
        self.edit_draft = self.target_name.clone();
        self.errors.clear();
    }

    pub fn edit_succeeded(&mut self) {
        self.reset_dialog_state();
        self.info_message = InfoMessage::Edited;
        self.info_open = true;
    }

    pub fn edit_failed(&mut self, errors: HashMap<String, String>) {
        self.errors = errors;
    }

    /// Menu entry: delete. Shows the captured name for confirmation.
    pub fn menu_to_delete(&mut self) {
        self.close_menu();
        self.dialog = Dialog::Delete;
        self.errors.clear();
    }

    pub fn delete_succeeded(&mut self) {
        self.reset_dialog_state();
        self.delete_open = true;
    }

    /// Cancel/close for any dialog; a no-op when nothing is open
    pub fn close_dialog(&mut self) {
        self.reset_dialog_state();
    }

    pub fn dismiss_info(&mut self) {
        self.info_open = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error_open = false;
    }

    pub fn dismiss_delete(&mut self) {
        self.delete_open = false;
    }

    pub fn set_draft_name(&mut self, value: String) {
        self.draft_name = value;
    }

    pub fn set_edit_draft(&mut self, value: String) {
        self.edit_draft = value;
    }

    fn reset_dialog_state(&mut self) {
        self.dialog = Dialog::None;
        self.menu_open = false;
        self.target_id = None;
        self.target_name.clear();
        self.draft_name.clear();
        self.edit_draft.clear();
        self.errors.clear();
    }
}
