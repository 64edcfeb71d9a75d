//! Property tests for list operations
//!
//! Lists are generated as a sequence of titles plus a done flag per todo.

use proptest::prelude::*;
use std::rc::Rc;
use todo_list::{Todo, TodoList, TodoListError};

fn todos_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z ]{0,8}", any::<bool>()), 0..12)
}

fn build(entries: &[(String, bool)]) -> (TodoList, Vec<Rc<Todo>>) {
    let mut list = TodoList::new("Props");
    let mut added = Vec::new();
    for (title, done) in entries {
        let todo = Rc::new(Todo::new(title.as_str()));
        if *done {
            todo.mark_done();
        }
        list.add(Rc::clone(&todo));
        added.push(todo);
    }
    (list, added)
}

proptest! {
    #[test]
    fn item_at_returns_added_todo(entries in todos_strategy()) {
        let (list, added) = build(&entries);

        for (i, todo) in added.iter().enumerate() {
            prop_assert!(Rc::ptr_eq(list.item_at(i).unwrap(), todo));
        }
    }

    #[test]
    fn indexed_operations_reject_unoccupied_positions(
        entries in todos_strategy(),
        extra in 0usize..20,
    ) {
        let (mut list, _) = build(&entries);
        let index = list.size() + extra;
        let expected = TodoListError::InvalidIndex { index, size: list.size() };

        prop_assert_eq!(list.item_at(index).unwrap_err(), expected.clone());
        prop_assert_eq!(list.mark_done_at(index).unwrap_err(), expected.clone());
        prop_assert_eq!(list.mark_undone_at(index).unwrap_err(), expected.clone());
        prop_assert_eq!(list.remove_at(index).unwrap_err(), expected);
        prop_assert_eq!(list.size(), entries.len());
    }

    #[test]
    fn index_past_shrunk_end_becomes_invalid(entries in todos_strategy()) {
        let (mut list, _) = build(&entries);
        prop_assume!(!list.is_empty());

        let last = list.size() - 1;
        prop_assert!(list.item_at(last).is_ok());
        list.pop();
        prop_assert!(list.item_at(last).is_err());
    }

    #[test]
    fn removals_shrink_by_one(entries in todos_strategy(), pick in any::<prop::sample::Index>()) {
        let (list, added) = build(&entries);
        prop_assume!(!added.is_empty());

        let mut popped = list.clone();
        let todo = popped.pop().unwrap();
        prop_assert!(Rc::ptr_eq(&todo, added.last().unwrap()));
        prop_assert_eq!(popped.size(), added.len() - 1);

        let mut shifted = list.clone();
        let todo = shifted.shift().unwrap();
        prop_assert!(Rc::ptr_eq(&todo, &added[0]));
        prop_assert_eq!(shifted.size(), added.len() - 1);

        let mut removed = list.clone();
        let i = pick.index(added.len());
        let taken = removed.remove_at(i).unwrap();
        prop_assert_eq!(taken.len(), 1);
        prop_assert!(Rc::ptr_eq(&taken[0], &added[i]));
        prop_assert_eq!(removed.size(), added.len() - 1);
    }

    #[test]
    fn is_done_matches_empty_not_done_view(entries in todos_strategy()) {
        let (list, _) = build(&entries);
        prop_assert_eq!(list.is_done(), list.all_not_done().is_empty());

        list.mark_all_done();
        prop_assert!(list.is_done());
    }

    #[test]
    fn done_views_partition_the_list(entries in todos_strategy()) {
        let (list, added) = build(&entries);
        let done = list.all_done().to_array();
        let open = list.all_not_done().to_array();

        prop_assert_eq!(done.len() + open.len(), added.len());
        prop_assert!(done.iter().all(|d| !open.iter().any(|o| Rc::ptr_eq(d, o))));

        let expected_done: Vec<_> = added.iter().filter(|t| t.is_done()).collect();
        let expected_open: Vec<_> = added.iter().filter(|t| !t.is_done()).collect();
        prop_assert!(done.iter().zip(&expected_done).all(|(a, b)| Rc::ptr_eq(a, b)));
        prop_assert!(open.iter().zip(&expected_open).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn to_array_matches_item_at_and_is_detached(entries in todos_strategy()) {
        let (list, _) = build(&entries);
        let mut snapshot = list.to_array();

        for (i, todo) in snapshot.iter().enumerate() {
            prop_assert!(Rc::ptr_eq(todo, list.item_at(i).unwrap()));
        }

        snapshot.clear();
        snapshot.push(Rc::new(Todo::new("intruder")));
        prop_assert_eq!(list.size(), entries.len());
    }

    #[test]
    fn mark_done_unknown_title_changes_nothing(entries in todos_strategy()) {
        let (list, _) = build(&entries);
        let before = list.to_string();

        // Generated titles never contain digits.
        list.mark_done("no such title 0");

        prop_assert_eq!(list.to_string(), before);
    }

    #[test]
    fn render_has_one_line_per_todo(entries in todos_strategy()) {
        let (list, _) = build(&entries);
        let rendered = list.to_string();

        prop_assert_eq!(rendered.split('\n').count(), entries.len() + 1);
        prop_assert!(rendered.starts_with("---- Props ----"));
    }
}

#[test]
fn empty_list_is_vacuously_done() {
    let list = TodoList::new("Empty");
    assert!(list.is_done());
    assert!(list.all_not_done().is_empty());
}
