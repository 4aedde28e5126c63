//! Property-testing support, enabled with the `proptest` feature.
//!
//! [`Probe`] counts constructions and drops through a shared [`Tally`], and
//! [`op_strategy`] generates sequences of cell operations that can be replayed
//! against an [`ObjectCell`] and an `Option` model side by side.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use crate::ObjectCell;

/// Shared construction/drop counters.
#[derive(Debug, Default)]
pub struct Tally {
    built: Cell<usize>,
    dropped: Cell<usize>,
}

impl Tally {
    /// Creates a fresh tally behind an `Rc` so probes can share it.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of probes built so far.
    pub fn built(&self) -> usize {
        self.built.get()
    }

    /// Number of probes dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Probes currently alive.
    pub fn live(&self) -> usize {
        self.built() - self.dropped()
    }
}

/// A value that records its own construction and drop.
#[derive(Debug)]
pub struct Probe {
    tally: Rc<Tally>,
    /// Payload used to tell instances apart.
    pub id: u32,
}

impl Probe {
    /// Builds a probe and counts it.
    pub fn new(tally: &Rc<Tally>, id: u32) -> Self {
        tally.built.set(tally.built.get() + 1);
        Self {
            tally: Rc::clone(tally),
            id,
        }
    }

    /// Like [`Probe::new`], but fails for odd ids without counting anything.
    ///
    /// # Errors
    /// Returns the rejected id when it is odd.
    pub fn try_new(tally: &Rc<Tally>, id: u32) -> Result<Self, u32> {
        if id % 2 == 1 {
            Err(id)
        } else {
            Ok(Self::new(tally, id))
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.tally.dropped.set(self.tally.dropped.get() + 1);
    }
}

/// One step applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `construct(Probe::new(id))`.
    Construct(u32),
    /// `try_construct_with(|| Probe::try_new(id))`.
    TryConstruct(u32),
    /// `destruct()`.
    Destruct,
    /// `take()`.
    Take,
    /// `replace(Probe::new(id))`.
    Replace(u32),
}

/// Strategy producing arbitrary [`Op`]s.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Construct),
        any::<u32>().prop_map(Op::TryConstruct),
        Just(Op::Destruct),
        Just(Op::Take),
        any::<u32>().prop_map(Op::Replace),
    ]
}

/// Applies `op` to both `cell` and `model`, returning whether they still agree.
///
/// A rejected `construct` drops the probe it was handed, so the tally stays
/// balanced on every path.
pub fn apply(op: Op, tally: &Rc<Tally>, cell: &mut ObjectCell<Probe>, model: &mut Option<u32>) -> bool {
    match op {
        Op::Construct(id) => {
            let was_empty = model.is_none();
            let ok = cell.construct(Probe::new(tally, id)).is_ok();
            if was_empty {
                *model = Some(id);
            }
            ok == was_empty
        }
        Op::TryConstruct(id) => {
            let was_empty = model.is_none();
            let ok = cell.try_construct_with(|| Probe::try_new(tally, id)).is_ok();
            if was_empty && ok {
                *model = Some(id);
            }
            ok == (was_empty && id % 2 == 0)
        }
        Op::Destruct => {
            let ok = cell.destruct().is_ok();
            ok == model.take().is_some()
        }
        Op::Take => cell.take().map(|p| p.id) == model.take(),
        Op::Replace(id) => {
            let old = cell.replace(Probe::new(tally, id)).map(|p| p.id);
            old == model.replace(id)
        }
    }
}
