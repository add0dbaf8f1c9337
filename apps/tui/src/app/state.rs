use crate::config::AppConfig;
use crate::domain::{ItemId, ShoppingItem};
use crate::list::ShoppingListState;
use tracing::{debug, warn};

/// Which text box of a two-field form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
}

impl FormField {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
        }
    }
}

/// Text buffers of the inline editor row. They only reach the list on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditItemState {
    pub id: ItemId,
    pub field: FormField,
    pub name: String,
    pub quantity: String,
}

impl EditItemState {
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            field: FormField::Name,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Quantity => &mut self.quantity,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub list: ShoppingListState,
    pub selected_index: usize,
    pub dialog_field: FormField,
    pub edit_state: Option<EditItemState>,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            running: true,
            list: ShoppingListState::new(config.add_quantity_policy),
            selected_index: 0,
            dialog_field: FormField::Name,
            edit_state: None,
            show_help: false,
            status_message: String::new(),
        }
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.list.items().get(self.selected_index)
    }

    pub fn is_editing(&self) -> bool {
        self.edit_state.is_some()
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog_field = FormField::Name;
        self.list.open_add_dialog();
        self.status_message.clear();
    }

    pub fn dialog_input_mut(&mut self) -> &mut String {
        match self.dialog_field {
            FormField::Name => &mut self.list.dialog.draft_name,
            FormField::Quantity => &mut self.list.dialog.draft_quantity,
        }
    }

    pub fn confirm_add(&mut self) {
        match self.list.confirm_add() {
            Ok(Some(id)) => {
                if let Some(index) = self.list.position(id) {
                    self.selected_index = index;
                }
                self.dialog_field = FormField::Name;
                self.status_message = format!("Added item #{id}");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "add rejected");
                self.dialog_field = FormField::Quantity;
                self.status_message = e.to_string();
            }
        }
    }

    pub fn cancel_add(&mut self) {
        self.list.cancel_add();
        self.dialog_field = FormField::Name;
        self.status_message.clear();
    }

    /// Opens the inline editor on the selected row, replacing any editor
    /// already open along with its unsaved text.
    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };

        if self.list.begin_edit(id) {
            self.edit_state = self.list.get(id).map(EditItemState::from_item);
            self.status_message.clear();
        }
    }

    pub fn save_edit(&mut self) {
        let Some(edit) = self.edit_state.take() else {
            return;
        };

        if self.list.complete_edit(edit.id, &edit.name, &edit.quantity) {
            self.status_message = format!("Saved item #{}", edit.id);
        } else {
            debug!(id = %edit.id, "edited item no longer exists");
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };

        if self.list.delete_item(id) {
            if self.edit_state.as_ref().is_some_and(|edit| edit.id == id) {
                self.edit_state = None;
            }
            self.clamp_selection();
            self.status_message = format!("Deleted item #{id}");
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.list.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    fn type_into(target: &mut String, text: &str) {
        target.push_str(text);
    }

    #[test]
    fn confirm_add_selects_the_new_row() {
        let mut app = app();
        app.list.add_item("Bread", "1").ok();
        app.open_add_dialog();
        type_into(app.dialog_input_mut(), "Milk");
        app.dialog_field = FormField::Quantity;
        type_into(app.dialog_input_mut(), "2");

        app.confirm_add();

        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_item().map(|item| item.quantity), Some(2));
        assert!(!app.list.dialog.open);
        assert_eq!(app.dialog_field, FormField::Name);
    }

    #[test]
    fn rejected_quantity_is_reported_and_focused() {
        let mut app = app();
        app.open_add_dialog();
        type_into(app.dialog_input_mut(), "Milk");
        app.dialog_field = FormField::Quantity;
        type_into(app.dialog_input_mut(), "lots");

        app.confirm_add();

        assert!(app.list.is_empty());
        assert!(app.list.dialog.open);
        assert_eq!(app.dialog_field, FormField::Quantity);
        assert!(app.status_message.contains("whole number"));
    }

    #[test]
    fn switching_editor_discards_unsaved_text() {
        let mut app = app();
        app.list.add_item("Eggs", "6").ok();
        app.list.add_item("Ham", "1").ok();

        app.begin_edit_selected();
        if let Some(edit) = app.edit_state.as_mut() {
            edit.name.push_str(" (free range)");
        }
        app.selected_index = 1;
        app.begin_edit_selected();

        assert_eq!(app.edit_state.as_ref().map(|e| e.name.as_str()), Some("Ham"));
        assert_eq!(app.list.items()[0].name, "Eggs");
        assert!(!app.list.items()[0].is_editing);
        assert!(app.list.items()[1].is_editing);
    }

    #[test]
    fn save_edit_writes_buffers_back() {
        let mut app = app();
        app.list.add_item("Eggs", "6").ok();
        app.begin_edit_selected();
        if let Some(edit) = app.edit_state.as_mut() {
            edit.quantity = "12".to_string();
        }

        app.save_edit();

        assert!(!app.is_editing());
        assert_eq!(app.list.items()[0].quantity, 12);
        assert!(app.list.editing_item().is_none());
    }

    #[test]
    fn deleting_last_row_moves_selection_up() {
        let mut app = app();
        app.list.add_item("A", "1").ok();
        app.list.add_item("B", "1").ok();
        app.selected_index = 1;

        app.delete_selected();

        assert_eq!(app.selected_index, 0);
        assert_eq!(app.list.len(), 1);
    }

    #[test]
    fn deleting_from_empty_list_does_nothing() {
        let mut app = app();
        app.delete_selected();
        assert!(app.list.is_empty());
        assert!(app.status_message.is_empty());
    }
}
