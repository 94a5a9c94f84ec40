use crate::content::Categorized;

/// Filter value that disables filtering.
pub const ALL: &str = "All";

/// Items whose category equals `filter` exactly, in their original order.
/// [`ALL`] returns every item.
pub fn apply_filter<'a, T: Categorized>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter == ALL {
        return items.iter().collect();
    }
    items.iter().filter(|i| i.category() == filter).collect()
}

/// At most one selected item, chosen by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<u32>,
}

impl Selection {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// Selecting the current item clears it, anything else replaces it.
    pub fn toggle(&mut self, id: u32) {
        self.selected = if self.is_selected(id) { None } else { Some(id) };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Local state of a filterable, selectable list (projects, gallery).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    filter: String,
    selection: Selection,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            filter: ALL.to_string(),
            selection: Selection::default(),
        }
    }
}

impl ListState {
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn toggle(&mut self, id: u32) {
        self.selection.toggle(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        apply_filter(items, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Keyed, GALLERY, PROJECTS};

    fn ids<T: Keyed>(items: &[&T]) -> Vec<u32> {
        items.iter().map(|i| i.key()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let visible = apply_filter(&GALLERY, ALL);
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_category_subset_keeps_order() {
        assert_eq!(ids(&apply_filter(&GALLERY, "Academic")), vec![2, 5]);
        assert_eq!(ids(&apply_filter(&GALLERY, "Research")), vec![4, 6]);
        assert_eq!(ids(&apply_filter(&PROJECTS, "Education")), vec![4]);
    }

    #[test]
    fn test_filter_is_exact_match() {
        assert!(apply_filter(&GALLERY, "academic").is_empty());
        assert!(apply_filter(&GALLERY, "Lead").is_empty());
        assert!(apply_filter(&PROJECTS, "").is_empty());
    }

    #[test]
    fn test_toggle_same_item_deselects() {
        let mut sel = Selection::default();
        sel.toggle(3);
        assert_eq!(sel.selected(), Some(3));
        sel.toggle(3);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_toggle_other_item_replaces() {
        let mut sel = Selection::default();
        sel.toggle(1);
        sel.toggle(2);
        assert_eq!(sel.selected(), Some(2));
        assert!(!sel.is_selected(1));
    }

    #[test]
    fn test_list_state_defaults_and_filtering() {
        let mut state = ListState::default();
        assert_eq!(state.filter(), ALL);
        assert_eq!(state.selection().selected(), None);

        state.set_filter("Leadership");
        assert_eq!(ids(&state.visible(&GALLERY)), vec![1, 7]);

        state.toggle(7);
        state.clear_selection();
        assert_eq!(state.selection(), Selection::default());
    }
}
