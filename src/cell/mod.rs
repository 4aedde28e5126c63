//! Deferred-construction cells.
//!
//! The module tree is stratified:
//! - `raw::*` holds the minimal unsafe slot accessors.
//! - `object` is the safe Empty/Occupied cell built on them.
//! - `visit` is the conditional-access combinator over cell borrows.

pub mod error;
pub mod object;
mod raw;
pub mod visit;

pub use error::{CellError, TryConstructError};
pub use object::ObjectCell;
pub use visit::{visit, CellAccess};
