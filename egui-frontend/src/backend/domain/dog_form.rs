//! Live form state and the snapshot taken from it at export time.

use chrono::{Local, NaiveDate};
use shared::{resolve_choice, DogRecord, Gender, BREED_OPTIONS, CLASS_OPTIONS, OTHER_OPTION};

use crate::backend::domain::owner_list::OwnerList;

/// A field that is picked from a list or typed in after choosing "Other"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceField {
    pub selected: String,
    pub custom: String,
}

impl ChoiceField {
    /// Start on the first option of `options` with no typed text
    pub fn new(options: &[&str]) -> Self {
        Self {
            selected: options.first().copied().unwrap_or(OTHER_OPTION).to_string(),
            custom: String::new(),
        }
    }

    pub fn resolve(&self) -> String {
        resolve_choice(&self.selected, &self.custom)
    }

    /// The free-text input is only visible while "Other" is selected
    pub fn shows_custom_input(&self) -> bool {
        self.selected == OTHER_OPTION
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogForm {
    pub name: String,
    pub breed: ChoiceField,
    pub class: ChoiceField,
    pub gender: Gender,
    pub chip_number: String,
    pub license_number: String,
    pub pedigree_number: String,
    pub birth_date: NaiveDate,
    pub owners: OwnerList,
}

impl DogForm {
    /// Empty form with the birth date preset to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            breed: ChoiceField::new(BREED_OPTIONS),
            class: ChoiceField::new(CLASS_OPTIONS),
            gender: Gender::default(),
            chip_number: String::new(),
            license_number: String::new(),
            pedigree_number: String::new(),
            birth_date: today,
            owners: OwnerList::new(),
        }
    }

    /// Snapshot the current field values into an immutable record
    pub fn assemble_record(&self) -> DogRecord {
        DogRecord {
            name: self.name.clone(),
            breed: self.breed.resolve(),
            class: self.class.resolve(),
            gender: self.gender,
            chip_number: self.chip_number.clone(),
            license_number: self.license_number.clone(),
            pedigree_number: self.pedigree_number.clone(),
            birth_date: self.birth_date,
            owners: self.owners.to_records(),
        }
    }
}

impl Default for DogForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
