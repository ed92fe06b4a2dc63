//! # Owner List
//!
//! Ordered, growable list of the dog's owners. The list always holds at least
//! one owner and the first owner can never be removed. Display numbers and
//! the visibility of the remove control are derived from the position alone,
//! so they are correct again immediately after any add or remove.

use log::{info, warn};
use shared::OwnerRecord;

use crate::backend::domain::errors::OwnerListError;

/// Read-only view of one owner section for UI binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerSlot<'a> {
    /// Zero-based position in the list
    pub index: usize,
    /// One-based number shown as "Owner N"
    pub display_number: usize,
    /// Whether the section shows a remove control
    pub removable: bool,
    pub owner: &'a OwnerRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerList {
    owners: Vec<OwnerRecord>,
}

impl OwnerList {
    /// Create a list holding the mandatory first owner with empty fields
    pub fn new() -> Self {
        Self {
            owners: vec![OwnerRecord::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Append an owner with empty fields and return its display number
    pub fn add_owner(&mut self) -> usize {
        self.owners.push(OwnerRecord::default());
        let display_number = self.owners.len();
        info!("👤 OWNERS: Added Owner {}", display_number);
        display_number
    }

    /// Remove the owner at zero-based `index`, shifting later owners down.
    ///
    /// Index 0 is refused with [`OwnerListError::InvalidOperation`] and the
    /// list is left untouched.
    pub fn remove_owner(&mut self, index: usize) -> Result<OwnerRecord, OwnerListError> {
        if index == 0 {
            warn!("⚠️ OWNERS: Refusing to remove the first owner");
            return Err(OwnerListError::InvalidOperation { position: index });
        }
        if index >= self.owners.len() {
            warn!(
                "⚠️ OWNERS: No owner at index {} (list has {})",
                index,
                self.owners.len()
            );
            return Err(OwnerListError::OutOfRange {
                position: index,
                len: self.owners.len(),
            });
        }

        let removed = self.owners.remove(index);
        info!(
            "👤 OWNERS: Removed Owner {}, {} owner(s) remain",
            Self::display_number(index),
            self.owners.len()
        );
        Ok(removed)
    }

    pub fn display_number(index: usize) -> usize {
        index + 1
    }

    pub fn title(index: usize) -> String {
        format!("Owner {}", Self::display_number(index))
    }

    pub fn is_removable(index: usize) -> bool {
        index != 0
    }

    pub fn owner(&self, index: usize) -> Option<&OwnerRecord> {
        self.owners.get(index)
    }

    pub fn owner_mut(&mut self, index: usize) -> Option<&mut OwnerRecord> {
        self.owners.get_mut(index)
    }

    pub fn owners(&self) -> &[OwnerRecord] {
        &self.owners
    }

    pub fn slots(&self) -> impl Iterator<Item = OwnerSlot<'_>> {
        self.owners.iter().enumerate().map(|(index, owner)| OwnerSlot {
            index,
            display_number: Self::display_number(index),
            removable: Self::is_removable(index),
            owner,
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut OwnerRecord)> {
        self.owners.iter_mut().enumerate()
    }

    /// Copy of the owners in order, for record assembly
    pub fn to_records(&self) -> Vec<OwnerRecord> {
        self.owners.clone()
    }
}

impl Default for OwnerList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first_name: &str) -> OwnerRecord {
        OwnerRecord {
            first_name: first_name.to_string(),
            ..OwnerRecord::default()
        }
    }

    fn assert_contiguous(list: &OwnerList) {
        let numbers: Vec<usize> = list.slots().map(|slot| slot.display_number).collect();
        let expected: Vec<usize> = (1..=list.len()).collect();
        assert_eq!(numbers, expected);

        for slot in list.slots() {
            assert_eq!(slot.removable, slot.index != 0);
        }
    }

    #[test]
    fn test_new_list_has_one_empty_owner() {
        let list = OwnerList::new();
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert_eq!(list.owner(0), Some(&OwnerRecord::default()));
        assert!(!OwnerList::is_removable(0));
    }

    #[test]
    fn test_add_owner_returns_display_number() {
        let mut list = OwnerList::new();
        assert_eq!(list.add_owner(), 2);
        assert_eq!(list.add_owner(), 3);
        assert_eq!(list.len(), 3);
        assert_eq!(OwnerList::title(2), "Owner 3");
    }

    #[test]
    fn test_remove_first_owner_is_rejected() {
        let mut list = OwnerList::new();
        list.add_owner();
        list.owner_mut(0).unwrap().first_name = "Anna".to_string();
        let before = list.clone();

        let result = list.remove_owner(0);
        assert_eq!(result, Err(OwnerListError::InvalidOperation { position: 0 }));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut list = OwnerList::new();
        let result = list.remove_owner(3);
        assert_eq!(result, Err(OwnerListError::OutOfRange { position: 3, len: 1 }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_middle_owner_renumbers() {
        let mut list = OwnerList::new();
        list.add_owner();
        list.add_owner();
        *list.owner_mut(0).unwrap() = named("first");
        *list.owner_mut(1).unwrap() = named("second");
        *list.owner_mut(2).unwrap() = named("third");

        // "Owner 2" in the UI is index 1
        let removed = list.remove_owner(1).unwrap();
        assert_eq!(removed.first_name, "second");
        assert_eq!(list.len(), 2);

        let slot = list.slots().nth(1).unwrap();
        assert_eq!(slot.owner.first_name, "third");
        assert_eq!(slot.display_number, 2);
        assert!(slot.removable);
        assert_contiguous(&list);
    }

    #[test]
    fn test_random_add_remove_keeps_invariants() {
        let mut list = OwnerList::new();
        let mut seed: u64 = 0x5eed;

        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let roll = (seed >> 33) as usize;

            if roll % 3 == 0 {
                list.add_owner();
            } else {
                let index = roll % (list.len() + 1);
                let before = list.len();
                match list.remove_owner(index) {
                    Ok(_) => assert_eq!(list.len(), before - 1),
                    Err(_) => assert_eq!(list.len(), before),
                }
                if index == 0 {
                    assert_eq!(list.len(), before);
                }
            }

            assert!(list.len() >= 1);
            assert_contiguous(&list);
        }
    }

    #[test]
    fn test_iter_mut_binds_by_index() {
        let mut list = OwnerList::new();
        list.add_owner();
        for (index, owner) in list.iter_mut() {
            owner.country = format!("Country {}", index);
        }
        assert_eq!(list.owners()[1].country, "Country 1");
        assert_eq!(list.to_records().len(), 2);
    }
}
