//! The models module houses all of the data types the core operates on, along
//! with the modification machinery transactions use to describe the writes a
//! caller must apply to its storage.

#[macro_use]
mod lib;

load_models!{ pub mod }

load_models!{ pub enum SavedModel }

load_models!{ impl from SavedModel }

use crate::error::{Error, Result};
use std::convert::TryInto;

/// A type for designating a modification (create/update/delete) that needs to
/// be applied to a model.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Op {
    /// Create the model in storage
    Create,
    /// Update the model in storage
    Update,
    /// Delete the model from storage
    Delete,
}

/// A single modification on a single model: the operation and the model it
/// should be applied to.
#[derive(Clone, Debug, PartialEq, getset::Getters, serde::Serialize, serde::Deserialize)]
#[getset(get = "pub")]
pub struct Modification {
    /// The type of modification
    op: Op,
    /// The model we're modifying
    model: SavedModel,
}

impl Modification {
    /// Create a new modification
    fn new(op: Op, model: SavedModel) -> Self {
        Self { op, model }
    }

    /// Consume this modification and verify it holds the given op and model
    /// type, returning the model. Mainly useful for testing and for callers
    /// that need the concrete record back out of a transaction's result.
    pub fn expect_op<T>(self, verify_op: Op) -> Result<T>
        where SavedModel: TryInto<T, Error = Error>,
    {
        if self.op != verify_op {
            Err(Error::OpMismatch)?;
        }
        self.model.try_into()
    }
}

/// An ordered set of modifications a transaction wants the caller to apply.
///
/// Multi-entry sets are one atomic unit: the caller must apply all of them in
/// a single storage transaction or none of them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Modifications {
    /// The model modifications we're saving
    modifications: Vec<Modification>,
}

impl Modifications {
    /// Create a new modification set
    pub fn new() -> Self {
        Self { modifications: Vec::new() }
    }

    /// Create a new modification set with one modification already in it
    pub fn new_single<T: Into<SavedModel>>(op: Op, model: T) -> Self {
        let mut mods = Self::new();
        mods.push(op, model);
        mods
    }

    /// Add a new modification to the set
    pub fn push<T: Into<SavedModel>>(&mut self, op: Op, model: T) {
        self.modifications.push(Modification::new(op, model.into()));
    }

    /// Whether the set carries any modifications at all
    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    /// Consume the set, returning the list of modifications
    pub fn into_vec(self) -> Vec<Modification> {
        self.modifications
    }
}
