//! Visitor tests over shared and exclusive cell borrows.

use cellar::{visit, CellAccess, ObjectCell};

#[test]
fn test_visit_empty_never_invokes_callback() {
    let mut cell: ObjectCell<String> = ObjectCell::new();
    let mut calls = 0;

    assert_eq!(visit(&cell, |_| calls += 1), None);
    assert_eq!(visit(&mut cell, |_| calls += 1), None);
    assert_eq!(cell.visit(|_| calls += 1), None);
    assert_eq!(cell.visit_mut(|_| calls += 1), None);

    assert_eq!(calls, 0);
}

#[test]
fn test_visit_occupied_invokes_once_with_live_value() {
    let mut cell = ObjectCell::with(String::from("live"));
    let mut calls = 0;

    let addr = visit(&cell, |s: &String| {
        calls += 1;
        core::ptr::from_ref(s)
    });
    assert_eq!(calls, 1);
    assert_eq!(addr, cell.get().map(core::ptr::from_ref));
}

#[test]
fn test_visit_mut_edits_in_place() {
    let mut cell = ObjectCell::with(vec![1, 2, 3]);
    visit(&mut cell, |v: &mut Vec<i32>| v.retain(|x| x % 2 == 1));
    assert_eq!(cell.get(), Some(&vec![1, 3]));

    let total = cell.visit_mut(|v| {
        v.push(5);
        v.iter().sum::<i32>()
    });
    assert_eq!(total, Some(9));
}

#[test]
fn test_visit_after_destruct() {
    let mut cell = ObjectCell::with(1u8);
    cell.destruct().unwrap();
    assert_eq!(visit(&cell, |v| *v), None);
}

#[test]
fn test_cell_access_query_forms() {
    let mut cell = ObjectCell::with(3i64);
    assert_eq!((&cell).query(), Some(&3));
    if let Some(v) = (&mut cell).query() {
        *v = 4;
    }
    assert_eq!(cell.get(), Some(&4));
}

/// Generic code can take either borrow through `CellAccess`.
fn describe<C>(cell: C) -> String
where
    C: CellAccess,
    C::Ref: core::fmt::Debug,
{
    visit(cell, |v| format!("{v:?}")).unwrap_or_else(|| String::from("<empty>"))
}

#[test]
fn test_generic_over_borrow_kind() {
    let mut cell = ObjectCell::with('x');
    assert_eq!(describe(&cell), "'x'");
    assert_eq!(describe(&mut cell), "'x'");
    cell.take();
    assert_eq!(describe(&cell), "<empty>");
}
