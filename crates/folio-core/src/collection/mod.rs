//! The editable collection behind every list editor of the profile page.
//!
//! An [`EditableCollection`] owns an ordered list of records, a draft buffer
//! for the popup editor, the editor [`Mode`] and a display flag which unlocks
//! the per-record edit and delete controls. Records are addressed by their
//! current index.
//!
//! ```
//! use folio_core::{collection::EditableCollection, model::Skill};
//!
//! let mut skills = EditableCollection::<Skill>::new();
//! skills.begin_add()?;
//! skills.update_draft_field("label", " Rust ".into())?;
//! skills.commit()?;
//! assert_eq!(skills.get(0).map(|skill| skill.label.as_str()), Some("Rust"));
//! # Ok::<(), folio_core::Error>(())
//! ```

use crate::{
    Error,
    model::{FieldValue, Record},
};
use std::mem;

mod entry;

pub use entry::{Entry, EntryKey};

/// The editor state of a collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No editor is open.
    #[default]
    Idle,
    /// The editor is open for a new record.
    Adding,
    /// The editor is open for the record at the index.
    Editing(usize),
}

impl Mode {
    /// Returns `true` if no editor is open.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// An ordered list of records with a draft-based popup editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableCollection<T> {
    /// Committed records in insertion order.
    entries: Vec<Entry<T>>,
    /// The add/edit buffer. Never aliases a committed record.
    draft: T,
    /// The editor state.
    mode: Mode,
    /// A display flag for the per-record edit and delete controls.
    editing_unlocked: bool,
    /// The next render key.
    next_key: u64,
}

impl<T: Record> Default for EditableCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EditableCollection<T> {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            draft: T::default(),
            mode: Mode::Idle,
            editing_unlocked: false,
            next_key: 0,
        }
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the record at the index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|entry| entry.value())
    }

    /// Returns an iterator over the records in storage order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| entry.value())
    }

    /// Returns the entries in storage order.
    #[inline]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Returns the draft.
    #[inline]
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Returns the editor mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the editor is open for a new record.
    #[inline]
    pub fn is_adding(&self) -> bool {
        self.mode == Mode::Adding
    }

    /// Returns the index of the record being edited.
    #[inline]
    pub fn editing_index(&self) -> Option<usize> {
        match self.mode {
            Mode::Editing(index) => Some(index),
            _ => None,
        }
    }

    /// Returns `true` if the per-record controls are unlocked.
    #[inline]
    pub fn is_editing_unlocked(&self) -> bool {
        self.editing_unlocked
    }

    /// Returns the required fields of the draft which are still blank.
    #[inline]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.draft.missing_fields()
    }

    /// Opens the editor for a new record with an empty draft.
    pub fn begin_add(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        self.draft = T::default();
        self.mode = Mode::Adding;
        tracing::debug!(collection = T::NAME, "begin to add a record");
        Ok(())
    }

    /// Opens the editor for the record at the index with a copy of it as the draft.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), Error> {
        self.ensure_idle()?;
        if !T::EDITABLE {
            return Err(Error::NotEditable {
                collection: T::NAME,
            });
        }
        let record = self.entry(index)?.value().clone();
        self.draft = record;
        self.mode = Mode::Editing(index);
        tracing::debug!(collection = T::NAME, index, "begin to edit a record");
        Ok(())
    }

    /// Writes a draft field by name.
    pub fn update_draft_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        self.ensure_open()?;
        self.draft.set_field(name, value)
    }

    /// Mutates the draft with a closure.
    pub fn edit_draft<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, Error> {
        self.ensure_open()?;
        Ok(f(&mut self.draft))
    }

    /// Commits the draft and closes the editor.
    ///
    /// A new record is appended at the end; an edited record replaces the one
    /// at its index. Returns the storage index of the committed record.
    /// An incomplete draft is rejected and the editor stays open.
    pub fn commit(&mut self) -> Result<usize, Error> {
        let index = match self.mode {
            Mode::Idle => return Err(self.no_draft()),
            Mode::Adding => self.entries.len(),
            Mode::Editing(index) => {
                self.entry(index)?;
                index
            }
        };
        let fields = self.draft.missing_fields();
        if !fields.is_empty() {
            tracing::debug!(collection = T::NAME, ?fields, "reject an incomplete draft");
            return Err(Error::IncompleteDraft { fields });
        }

        let mut record = mem::take(&mut self.draft);
        if self.mode == Mode::Adding {
            record.on_create();
            let key = self.next_key;
            self.next_key += 1;
            self.entries.push(Entry::new(key, record));
            tracing::debug!(collection = T::NAME, index, "append a record");
        } else {
            // The previous record is dropped here, releasing media handles
            // which the draft does not share.
            self.entries[index].replace(record);
            tracing::debug!(collection = T::NAME, index, "replace a record");
        }
        self.mode = Mode::Idle;
        Ok(index)
    }

    /// Discards the draft and closes the editor. Records are never touched.
    pub fn cancel(&mut self) {
        if !self.mode.is_idle() {
            tracing::debug!(collection = T::NAME, mode = ?self.mode, "cancel the editor");
        }
        self.draft = T::default();
        self.mode = Mode::Idle;
    }

    /// Removes and returns the record at the index. Later records shift down by one.
    ///
    /// An open edit of the removed record is cancelled, and an open edit of a
    /// later record follows it to its new index.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        self.entry(index)?;
        let record = self.entries.remove(index).into_value();
        match self.mode {
            Mode::Editing(editing) if editing == index => {
                tracing::warn!(
                    collection = T::NAME,
                    index,
                    "cancel the editor because its record has been removed"
                );
                self.draft = T::default();
                self.mode = Mode::Idle;
            }
            Mode::Editing(editing) if editing > index => {
                self.mode = Mode::Editing(editing - 1);
            }
            _ => {}
        }
        tracing::debug!(collection = T::NAME, index, "remove a record");
        Ok(record)
    }

    /// Flips the display flag of the per-record controls and returns the new value.
    #[inline]
    pub fn toggle_editing_unlocked(&mut self) -> bool {
        self.editing_unlocked = !self.editing_unlocked;
        self.editing_unlocked
    }

    /// Mutates a committed record in place, for state which is not edited
    /// through the draft such as likes.
    pub fn update_item<R>(&mut self, index: usize, f: impl FnOnce(&mut T) -> R) -> Result<R, Error> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .map(|entry| f(entry.value_mut()))
            .ok_or(Error::IndexOutOfRange {
                collection: T::NAME,
                index,
                len,
            })
    }

    /// Returns the entries in display order, paired with their storage indices.
    ///
    /// The order comes from a stable sort with [`Record::display_order`],
    /// so ties keep the insertion order. Storage is left unchanged.
    pub fn projected(&self) -> Vec<(usize, &Entry<T>)> {
        let mut entries = self.entries.iter().enumerate().collect::<Vec<_>>();
        entries.sort_by(|(_, a), (_, b)| a.value().display_order(b.value()));
        entries
    }

    /// Returns the entry at the index.
    fn entry(&self, index: usize) -> Result<&Entry<T>, Error> {
        self.entries.get(index).ok_or(Error::IndexOutOfRange {
            collection: T::NAME,
            index,
            len: self.entries.len(),
        })
    }

    /// Ensures that no editor is open.
    #[inline]
    fn ensure_idle(&self) -> Result<(), Error> {
        if self.mode.is_idle() {
            Ok(())
        } else {
            Err(Error::DraftActive {
                collection: T::NAME,
            })
        }
    }

    /// Ensures that an editor is open.
    #[inline]
    fn ensure_open(&self) -> Result<(), Error> {
        if self.mode.is_idle() {
            Err(self.no_draft())
        } else {
            Ok(())
        }
    }

    /// Returns an error for operations which need an open editor.
    #[inline]
    fn no_draft(&self) -> Error {
        Error::NoDraft {
            collection: T::NAME,
        }
    }
}

#[cfg(test)]
mod tests;
