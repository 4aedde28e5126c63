//! Raw building blocks for the cell layer.
//!
//! Nothing here is public: this layer exists so that every unsafe operation on
//! a cell's storage goes through one small, audited set of functions.

pub(crate) mod access;
