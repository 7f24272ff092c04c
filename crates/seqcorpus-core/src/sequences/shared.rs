//! Shared handle to a [`LabelDictionary`].
//!
//! A corpus owns its word and tag dictionaries and every sequence list it
//! produces holds a clone of the same handle, so vocabulary growth made while
//! reading one file is visible to every list. Borrows never escape the
//! methods below.

use std::cell::RefCell;
use std::rc::Rc;

use super::label_dictionary::LabelDictionary;
use crate::error::Result;

/// Reference-counted, single-threaded handle to a growing dictionary.
#[derive(Debug, Clone, Default)]
pub struct SharedDictionary(Rc<RefCell<LabelDictionary>>);

impl SharedDictionary {
    pub fn new(dict: LabelDictionary) -> Self {
        Self(Rc::new(RefCell::new(dict)))
    }

    /// Register `label`, returning its id.
    pub fn add(&self, label: &str) -> usize {
        self.0.borrow_mut().add(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.borrow().contains(label)
    }

    pub fn get_label_id(&self, label: &str) -> Option<usize> {
        self.0.borrow().get_label_id(label)
    }

    /// Owned copy of the label registered under `id`.
    pub fn get_label_name(&self, id: usize) -> Result<String> {
        self.0.borrow().get_label_name(id).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Same as [`SharedDictionary::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Run `f` against the dictionary under a shared borrow.
    pub fn with<R>(&self, f: impl FnOnce(&LabelDictionary) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Whether both handles point at the same dictionary.
    pub fn same_as(&self, other: &SharedDictionary) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<LabelDictionary> for SharedDictionary {
    fn from(dict: LabelDictionary) -> Self {
        Self::new(dict)
    }
}
