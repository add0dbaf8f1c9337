use crate::domain::{
    parse_quantity_or_default, ItemId, QuantityError, QuantityPolicy, ShoppingItem,
};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Draft buffers and visibility of the "add item" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddItemDialog {
    pub open: bool,
    pub draft_name: String,
    pub draft_quantity: String,
}

impl AddItemDialog {
    fn clear_drafts(&mut self) {
        self.draft_name.clear();
        self.draft_quantity.clear();
    }
}

/// Copy of the list handed back to callers after every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSnapshot {
    pub items: Vec<ShoppingItem>,
    pub dialog: AddItemDialog,
    pub editing: Option<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    AddOpen,
    AddConfirm { name: String, quantity: String },
    AddCancel,
    EditStart(ItemId),
    EditSave {
        id: ItemId,
        name: String,
        quantity: String,
    },
    Delete(ItemId),
}

impl fmt::Display for ListEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddOpen => write!(f, "AddOpen"),
            Self::AddConfirm { name, quantity } => write!(f, "AddConfirm({name:?}, {quantity:?})"),
            Self::AddCancel => write!(f, "AddCancel"),
            Self::EditStart(id) => write!(f, "EditStart({id})"),
            Self::EditSave { id, name, quantity } => {
                write!(f, "EditSave({id}, {name:?}, {quantity:?})")
            }
            Self::Delete(id) => write!(f, "Delete({id})"),
        }
    }
}

/// The shopping list and its transient form state.
///
/// Items move between viewing and editing; at most one item is in the
/// editing state, and saving is the only way back out of it.
#[derive(Debug, Clone)]
pub struct ShoppingListState {
    items: Vec<ShoppingItem>,
    pub dialog: AddItemDialog,
    next_id: u64,
    add_quantity_policy: QuantityPolicy,
}

impl Default for ShoppingListState {
    fn default() -> Self {
        Self::new(QuantityPolicy::default())
    }
}

impl ShoppingListState {
    pub const fn new(add_quantity_policy: QuantityPolicy) -> Self {
        Self {
            items: Vec::new(),
            dialog: AddItemDialog {
                open: false,
                draft_name: String::new(),
                draft_quantity: String::new(),
            },
            next_id: 1,
            add_quantity_policy,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn editing_item(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    pub const fn add_quantity_policy(&self) -> QuantityPolicy {
        self.add_quantity_policy
    }

    /// Appends a new item unless `name` is blank.
    ///
    /// Returns `Ok(None)` for a blank name. A quantity the add policy rejects
    /// aborts the add and leaves the list, drafts and dialog as they were.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity_text: &str,
    ) -> Result<Option<ItemId>, QuantityError> {
        if name.trim().is_empty() {
            debug!("ignoring add with blank name");
            return Ok(None);
        }

        let quantity = self.add_quantity_policy.apply(quantity_text)?;

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(ShoppingItem::new(id, name, quantity));

        self.dialog.clear_drafts();
        self.dialog.open = false;

        debug!(%id, name, quantity, "item added");
        Ok(Some(id))
    }

    /// Puts the matching item into edit mode and every other item out of it.
    /// An unknown id changes nothing.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        for item in &mut self.items {
            item.is_editing = item.id == id;
        }
        debug!(%id, "editing item");
        true
    }

    /// Applies an edit; unreadable quantity text falls back to 1.
    pub fn complete_edit(&mut self, id: ItemId, name: &str, quantity_text: &str) -> bool {
        let quantity = parse_quantity_or_default(quantity_text);

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        item.name = name.to_string();
        item.quantity = quantity;
        item.is_editing = false;

        debug!(%id, name, quantity, "item saved");
        true
    }

    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.items.remove(index);
        debug!(%id, "item deleted");
        true
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog.open = true;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.dialog.draft_name = name.into();
    }

    pub fn set_draft_quantity(&mut self, quantity: impl Into<String>) {
        self.dialog.draft_quantity = quantity.into();
    }

    pub fn confirm_add(&mut self) -> Result<Option<ItemId>, QuantityError> {
        let name = self.dialog.draft_name.clone();
        let quantity = self.dialog.draft_quantity.clone();
        self.add_item(&name, &quantity)
    }

    pub fn cancel_add(&mut self) {
        self.dialog.open = false;
        self.dialog.clear_drafts();
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            dialog: self.dialog.clone(),
            editing: self.editing_item().map(|item| item.id),
        }
    }

    pub fn dispatch(&mut self, event: ListEvent) -> Result<ListSnapshot, QuantityError> {
        debug!(%event, "dispatching list event");
        match event {
            ListEvent::AddOpen => self.open_add_dialog(),
            ListEvent::AddConfirm { name, quantity } => {
                self.set_draft_name(name);
                self.set_draft_quantity(quantity);
                self.confirm_add()?;
            }
            ListEvent::AddCancel => self.cancel_add(),
            ListEvent::EditStart(id) => {
                self.begin_edit(id);
            }
            ListEvent::EditSave { id, name, quantity } => {
                self.complete_edit(id, &name, &quantity);
            }
            ListEvent::Delete(id) => {
                self.delete_item(id);
            }
        }
        Ok(self.snapshot())
    }

    pub fn on_add_confirm(
        &mut self,
        name: &str,
        quantity_text: &str,
    ) -> Result<ListSnapshot, QuantityError> {
        self.dispatch(ListEvent::AddConfirm {
            name: name.to_string(),
            quantity: quantity_text.to_string(),
        })
    }

    pub fn on_add_cancel(&mut self) -> ListSnapshot {
        self.cancel_add();
        self.snapshot()
    }

    pub fn on_edit_start(&mut self, id: ItemId) -> ListSnapshot {
        self.begin_edit(id);
        self.snapshot()
    }

    pub fn on_edit_save(&mut self, id: ItemId, name: &str, quantity_text: &str) -> ListSnapshot {
        self.complete_edit(id, name, quantity_text);
        self.snapshot()
    }

    pub fn on_delete(&mut self, id: ItemId) -> ListSnapshot {
        self.delete_item(id);
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> ShoppingListState {
        let mut list = ShoppingListState::default();
        for name in names {
            list.add_item(name, "1").ok();
        }
        list
    }

    fn editing_ids(list: &ShoppingListState) -> Vec<ItemId> {
        list.items()
            .iter()
            .filter(|item| item.is_editing)
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn blank_name_leaves_list_unchanged_and_dialog_open() -> Result<(), QuantityError> {
        let mut list = ShoppingListState::default();
        list.open_add_dialog();

        let snapshot = list.on_add_confirm("   ", "2")?;

        assert!(snapshot.items.is_empty());
        assert!(snapshot.dialog.open);
        Ok(())
    }

    #[test]
    fn adding_milk_yields_one_viewing_item() -> Result<(), QuantityError> {
        let mut list = ShoppingListState::default();
        list.open_add_dialog();

        let snapshot = list.on_add_confirm("Milk", "2")?;

        assert_eq!(snapshot.items.len(), 1);
        let item = &snapshot.items[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert!(!item.is_editing);
        assert!(!snapshot.dialog.open);
        assert!(snapshot.dialog.draft_name.is_empty());
        assert!(snapshot.dialog.draft_quantity.is_empty());
        Ok(())
    }

    #[test]
    fn only_one_item_is_edited_at_a_time() {
        let mut list = list_with(&["Eggs", "Bread"]);
        let a = list.items()[0].id;
        let b = list.items()[1].id;

        list.on_edit_start(a);
        let snapshot = list.on_edit_start(b);

        assert!(!snapshot.items[0].is_editing);
        assert!(snapshot.items[1].is_editing);
        assert_eq!(snapshot.editing, Some(b));
        assert_eq!(editing_ids(&list), vec![b]);
    }

    #[test]
    fn begin_edit_on_unknown_id_keeps_current_editor() {
        let mut list = list_with(&["Eggs"]);
        let id = list.items()[0].id;
        list.begin_edit(id);

        assert!(!list.begin_edit(ItemId(42)));
        assert_eq!(editing_ids(&list), vec![id]);
    }

    #[test]
    fn saving_with_bad_quantity_falls_back_to_one() {
        let mut list = list_with(&["Rice"]);
        let id = list.items()[0].id;
        list.begin_edit(id);

        let snapshot = list.on_edit_save(id, "Rice", "abc");

        assert_eq!(snapshot.items[0].quantity, 1);
        assert!(!snapshot.items[0].is_editing);
    }

    #[test]
    fn deleting_unknown_id_is_a_no_op() {
        let mut list = list_with(&["Tea", "Coffee"]);
        let before = list.snapshot();

        let after = list.on_delete(ItemId(99));

        assert_eq!(before, after);
    }

    #[test]
    fn edit_round_trip_updates_item_in_place() -> Result<(), QuantityError> {
        let mut list = ShoppingListState::default();
        list.on_add_confirm("Apples", "3")?;
        let id = list.items()[0].id;

        list.on_edit_start(id);
        let snapshot = list.on_edit_save(id, "Green apples", "6");

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, id);
        assert_eq!(snapshot.items[0].name, "Green apples");
        assert_eq!(snapshot.items[0].quantity, 6);
        assert!(!snapshot.items[0].is_editing);
        assert_eq!(snapshot.editing, None);
        Ok(())
    }

    #[test]
    fn ids_stay_unique_after_delete_then_add() -> Result<(), QuantityError> {
        let mut list = list_with(&["One", "Two"]);
        let first = list.items()[0].id;
        list.delete_item(first);

        list.add_item("Three", "1")?;

        let ids: Vec<_> = list.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(2), ItemId(3)]);
        Ok(())
    }

    #[test]
    fn strict_add_rejects_non_numeric_quantity_and_keeps_drafts() {
        let mut list = ShoppingListState::new(QuantityPolicy::Strict);
        list.open_add_dialog();

        let result = list.on_add_confirm("Butter", "abc");

        assert_eq!(
            result,
            Err(QuantityError::NotANumber("abc".to_string()))
        );
        assert!(list.is_empty());
        assert!(list.dialog.open);
        assert_eq!(list.dialog.draft_name, "Butter");
        assert_eq!(list.dialog.draft_quantity, "abc");
    }

    #[test]
    fn strict_add_aborts_on_empty_quantity() {
        let mut list = ShoppingListState::default();
        list.open_add_dialog();

        let result = list.on_add_confirm("Salt", "");

        assert_eq!(result, Err(QuantityError::Empty));
        assert!(list.is_empty());
        assert!(list.dialog.open);
        assert_eq!(list.dialog.draft_name, "Salt");
        assert!(list.dialog.draft_quantity.is_empty());
    }

    #[test]
    fn lenient_add_coerces_unreadable_quantity() -> Result<(), QuantityError> {
        let mut list = ShoppingListState::new(QuantityPolicy::Lenient);

        list.on_add_confirm("Butter", "abc")?;
        let snapshot = list.on_add_confirm("Salt", "")?;

        assert_eq!(snapshot.items[0].quantity, 1);
        assert_eq!(snapshot.items[1].quantity, 1);
        assert_eq!(list.add_quantity_policy(), QuantityPolicy::Lenient);
        Ok(())
    }

    #[test]
    fn cancel_discards_drafts_without_touching_items() {
        let mut list = list_with(&["Flour"]);
        list.open_add_dialog();
        list.set_draft_name("Sugar");
        list.set_draft_quantity("2");

        let snapshot = list.on_add_cancel();

        assert_eq!(snapshot.items.len(), 1);
        assert!(!snapshot.dialog.open);
        assert!(snapshot.dialog.draft_name.is_empty());
        assert!(snapshot.dialog.draft_quantity.is_empty());
    }

    #[test]
    fn opening_dialog_keeps_existing_drafts() -> Result<(), QuantityError> {
        let mut list = ShoppingListState::default();
        list.set_draft_name("Oats");

        list.dispatch(ListEvent::AddOpen)?;

        assert!(list.dialog.open);
        assert_eq!(list.dialog.draft_name, "Oats");
        Ok(())
    }

    #[test]
    fn deleting_the_edited_item_clears_the_editor() {
        let mut list = list_with(&["Jam"]);
        let id = list.items()[0].id;
        list.begin_edit(id);

        list.delete_item(id);

        assert!(list.editing_item().is_none());
    }

    #[test]
    fn events_render_readably() {
        let event = ListEvent::EditSave {
            id: ItemId(2),
            name: "Milk".to_string(),
            quantity: "3".to_string(),
        };
        assert_eq!(event.to_string(), "EditSave(2, \"Milk\", \"3\")");
        assert_eq!(ListEvent::Delete(ItemId(1)).to_string(), "Delete(1)");
    }
}
