use crate::world::Item;

/// Items the player carries. Membership and removal go by item name only, ignoring ASCII case.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Adds an item. Returns the item back if one with the same name is already carried.
    pub fn insert(&mut self, item: Item) -> Result<(), Item> {
        if self.contains(&item.name) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.name.eq_ignore_ascii_case(name))?;
        Some(self.items.remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_counts_as_same_item() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("old book", "paper", true)).unwrap();

        let twin = Item::new("old book", "a different book", true);
        let rejected = inv.insert(twin).unwrap_err();
        assert_eq!(rejected.description, "a different book");
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_by_name() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("old book", "paper", true)).unwrap();
        inv.insert(Item::new("key", "brass", true)).unwrap();

        let book = inv.remove("old book").unwrap();
        assert_eq!(book.description, "paper");
        assert!(!inv.contains("old book"));
        assert!(inv.remove("old book").is_none());
        assert!(inv.contains("key"));
    }

    #[test]
    fn names_match_regardless_of_case() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Brass Key", "heavy", true)).unwrap();

        assert!(inv.contains("brass key"));
        assert!(inv.insert(Item::new("BRASS KEY", "twin", true)).is_err());
        assert_eq!(inv.remove("brass key").unwrap().name, "Brass Key");
    }
}
