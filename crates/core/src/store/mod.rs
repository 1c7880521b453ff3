//! Generic in-memory record store underlying every CRUD screen.
//!
//! Each screen keeps its rows in a [`RecordStore`]: an ordered collection
//! keyed by a generated identifier. The store renumbers the derived "No."
//! column after every structural change so the displayed index stays
//! contiguous regardless of how many rows were inserted or deleted.

use std::fmt;

#[cfg(test)]
mod props;

/// A record that can live in a [`RecordStore`].
pub trait Record {
    /// The identifier type for this record.
    type Id: Copy + Eq + fmt::Debug;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the derived 1-based display number.
    fn display_no(&self) -> u32;

    /// Sets the derived 1-based display number.
    fn set_display_no(&mut self, no: u32);
}

/// Where new records land in the display order.
///
/// Screens that show newest-first prepend; ledgers and logs append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertOrder {
    /// New records go to the end of the list.
    #[default]
    Append,
    /// New records go to the front of the list.
    Prepend,
}

/// An ordered, in-memory collection of records with display renumbering.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    insert_order: InsertOrder,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new(InsertOrder::default())
    }
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store with the given insert convention.
    #[must_use]
    pub const fn new(insert_order: InsertOrder) -> Self {
        Self {
            records: Vec::new(),
            insert_order,
        }
    }

    /// Inserts a record and renumbers the display column.
    ///
    /// Returns a reference to the stored record.
    pub fn insert(&mut self, record: R) -> &R {
        let index = match self.insert_order {
            InsertOrder::Append => self.records.len(),
            InsertOrder::Prepend => 0,
        };
        self.records.insert(index, record);
        self.renumber();
        &self.records[index]
    }

    /// Replaces the record with the matching id, preserving its position and
    /// display number. The replacement is expected to carry the same id.
    ///
    /// Returns `false` (and changes nothing) when the id is absent.
    pub fn update(&mut self, id: R::Id, mut record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                record.set_display_no(slot.display_no());
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the matching id and renumbers.
    ///
    /// Returns `false` (and changes nothing) when the id is absent.
    pub fn delete(&mut self, id: R::Id) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                self.renumber();
                true
            }
            None => false,
        }
    }

    /// Returns the record with the matching id, if present.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns the full ordered sequence.
    ///
    /// Callers must not rely on being able to mutate records in place; all
    /// mutation goes through [`RecordStore::update`].
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Returns the number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recomputes the contiguous 1-based display numbers.
    ///
    /// Runs after structural changes only, never on filter or page changes.
    fn renumber(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            let no = u32::try_from(index + 1).unwrap_or(u32::MAX);
            record.set_display_no(no);
        }
    }
}
