//! Tests for OrgTree: lookup, moves with promotion, and undo/redo
//!
//! All scenarios run against the reference hierarchy in
//! `tests/resources/charts/reference.json`:
//!
//! ```text
//! 1 Mark
//! ├── 2 Sarah
//! │   └── 3 Cassandra
//! │       ├── 4 Mary
//! │       └── 5 Bob
//! │           └── 9 Tina
//! │               └── 10 Will
//! └── 6 Tyler
//!     ├── 7 Harry
//!     │   └── 8 Thomas
//!     ├── 12 George
//!     └── 11 Gray
//! ```

use rstest::{fixture, rstest};

use orgtree::domain::{DomainError, Employee, EmployeeId, OrgTree};
use orgtree::util::testing;

#[fixture]
fn chart() -> Employee {
    testing::init_test_setup();
    serde_json::from_str(include_str!("resources/charts/reference.json"))
        .expect("reference chart parses")
}

#[fixture]
fn org(chart: Employee) -> OrgTree {
    OrgTree::new(chart).expect("reference chart is valid")
}

fn ids(employees: &[Employee]) -> Vec<u64> {
    employees.iter().map(|e| e.id.0).collect()
}

/// Every employee of a subtree, pre-order.
fn flatten(employee: &Employee, out: &mut Vec<Employee>) {
    out.push(employee.clone());
    for sub in &employee.subordinates {
        flatten(sub, out);
    }
}

// ============================================================
// Construction and lookup
// ============================================================

#[rstest]
fn given_chart_when_constructing_then_ceo_equals_input(chart: Employee) {
    let org = OrgTree::new(chart.clone()).unwrap();

    assert_eq!(org.ceo(), chart);
    assert_eq!(org.ceo_id(), EmployeeId(1));
    assert_eq!(org.len(), 12);
    assert_eq!(org.history().len(), 1);
    assert_eq!(org.history().cursor(), 0);
}

#[rstest]
fn given_chart_when_getting_every_employee_then_returns_deep_equal_subtrees(
    chart: Employee,
    org: OrgTree,
) {
    let mut all = Vec::new();
    flatten(&chart, &mut all);

    for employee in &all {
        assert_eq!(org.get(employee.id).as_ref(), Some(employee));
    }
}

#[rstest]
fn given_leaf_id_when_getting_then_returns_childless_employee(org: OrgTree) {
    assert_eq!(org.get(EmployeeId(12)), Some(Employee::new(12, "George Carrey")));
}

#[rstest]
#[case(0)]
#[case(13)]
#[case(999)]
fn given_unknown_id_when_getting_then_returns_none(org: OrgTree, #[case] id: u64) {
    assert!(org.get(EmployeeId(id)).is_none());
    assert!(!org.contains(EmployeeId(id)));
}

#[test]
fn given_childless_root_when_getting_other_id_then_returns_none() {
    let org = OrgTree::new(Employee::new(1, "Solo")).unwrap();

    assert_eq!(org.get(EmployeeId(1)), Some(Employee::new(1, "Solo")));
    assert!(org.get(EmployeeId(2)).is_none());
}

#[rstest]
#[case(1, None)]
#[case(2, Some(1))]
#[case(6, Some(1))]
#[case(5, Some(3))]
#[case(10, Some(9))]
#[case(11, Some(6))]
#[case(77, None)]
fn given_id_when_asking_supervisor_then_returns_direct_parent(
    org: OrgTree,
    #[case] id: u64,
    #[case] expected: Option<u64>,
) {
    assert_eq!(org.supervisor_of(EmployeeId(id)), expected.map(EmployeeId));
}

#[test]
fn given_duplicate_ids_when_constructing_then_fails() {
    let chart = Employee::new(1, "root").with_subordinates(vec![
        Employee::new(2, "a").with_subordinates(vec![Employee::new(1, "root again")]),
    ]);

    let result = OrgTree::new(chart);
    assert!(matches!(result, Err(DomainError::DuplicateId(EmployeeId(1)))));
}

// ============================================================
// move_employee()
// ============================================================

#[rstest]
fn given_bob_when_moving_under_george_then_reports_are_promoted_to_cassandra(mut org: OrgTree) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();

    let george = org.get(EmployeeId(12)).unwrap();
    assert_eq!(george.subordinates, vec![Employee::new(5, "Bob Saget")]);

    let cassandra = org.get(EmployeeId(3)).unwrap();
    assert_eq!(
        cassandra.subordinates,
        vec![
            Employee::new(4, "Mary Blue"),
            Employee::new(9, "Tina Teff")
                .with_subordinates(vec![Employee::new(10, "Will Turner")]),
        ]
    );
    assert_eq!(org.len(), 12);
    assert_eq!(org.history().len(), 2);
    assert_eq!(org.history().cursor(), 1);
}

#[rstest]
fn given_move_when_committed_then_supervisor_links_follow(mut org: OrgTree) {
    org.move_employee(EmployeeId(7), EmployeeId(2)).unwrap();

    assert_eq!(org.supervisor_of(EmployeeId(7)), Some(EmployeeId(2)));
    assert_eq!(org.supervisor_of(EmployeeId(8)), Some(EmployeeId(6)));
    assert_eq!(ids(&org.get(EmployeeId(6)).unwrap().subordinates), vec![12, 11, 8]);
    assert_eq!(ids(&org.get(EmployeeId(2)).unwrap().subordinates), vec![3, 7]);
}

#[rstest]
fn given_move_onto_own_descendant_when_committed_then_chart_stays_a_tree(mut org: OrgTree) {
    org.move_employee(EmployeeId(3), EmployeeId(10)).unwrap();

    assert_eq!(ids(&org.get(EmployeeId(2)).unwrap().subordinates), vec![4, 5]);
    assert_eq!(org.supervisor_of(EmployeeId(3)), Some(EmployeeId(10)));
    assert_eq!(org.employees().count(), 12);
    assert_eq!(org.depth(), 6);
}

#[rstest]
fn given_both_ids_unknown_when_moving_then_not_found_and_state_unchanged(
    chart: Employee,
    mut org: OrgTree,
) {
    let result = org.move_employee(EmployeeId(25), EmployeeId(122));

    match result {
        Err(DomainError::NotFound {
            employee,
            supervisor,
        }) => {
            assert_eq!(employee, EmployeeId(25));
            assert_eq!(supervisor, EmployeeId(122));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(org.ceo(), chart);
    assert_eq!(org.history().len(), 1);
}

#[rstest]
fn given_one_unknown_id_when_moving_then_names_the_missing_side(mut org: OrgTree) {
    assert!(matches!(
        org.move_employee(EmployeeId(25), EmployeeId(12)),
        Err(DomainError::EmployeeNotFound(EmployeeId(25)))
    ));
    assert!(matches!(
        org.move_employee(EmployeeId(5), EmployeeId(122)),
        Err(DomainError::SupervisorNotFound(EmployeeId(122)))
    ));
    assert!(!org.can_undo());
}

#[rstest]
fn given_ceo_when_moving_then_rejects(mut org: OrgTree) {
    assert!(matches!(
        org.move_employee(EmployeeId(1), EmployeeId(12)),
        Err(DomainError::CannotMoveRoot(EmployeeId(1)))
    ));
}

// ============================================================
// undo() / redo()
// ============================================================

#[rstest]
fn given_move_when_undoing_then_restores_original_chart(chart: Employee, mut org: OrgTree) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();

    assert!(org.undo());

    assert_eq!(org.ceo(), chart);
    assert_eq!(org.history().cursor(), 0);
    assert!(org.can_redo());
}

#[rstest]
fn given_undone_move_when_redoing_then_restores_moved_chart(mut org: OrgTree) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();
    let moved = org.ceo();

    org.undo();
    assert!(org.redo());

    assert_eq!(org.ceo(), moved);
    assert!(!org.can_redo());
}

#[rstest]
fn given_several_moves_when_undoing_past_start_then_stays_at_initial_chart(
    chart: Employee,
    mut org: OrgTree,
) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();
    org.move_employee(EmployeeId(7), EmployeeId(2)).unwrap();

    assert!(org.undo());
    assert!(org.undo());
    assert!(!org.undo());
    assert!(!org.undo());

    assert_eq!(org.ceo(), chart);
    assert_eq!(org.history().cursor(), 0);
}

#[rstest]
fn given_latest_state_when_redoing_then_is_a_no_op(mut org: OrgTree) {
    assert!(!org.redo());

    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();
    let moved = org.ceo();

    assert!(!org.redo());
    assert!(!org.redo());
    assert_eq!(org.ceo(), moved);
    assert_eq!(org.history().cursor(), 1);
}

#[rstest]
fn given_two_moves_when_walking_history_then_each_state_is_reproduced(
    chart: Employee,
    mut org: OrgTree,
) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();
    let first = org.ceo();
    org.move_employee(EmployeeId(9), EmployeeId(1)).unwrap();
    let second = org.ceo();

    org.undo();
    assert_eq!(org.ceo(), first);
    org.undo();
    assert_eq!(org.ceo(), chart);
    org.redo();
    assert_eq!(org.ceo(), first);
    org.redo();
    assert_eq!(org.ceo(), second);
}

#[rstest]
fn given_undo_when_moving_again_then_old_redo_branch_is_discarded(mut org: OrgTree) {
    org.move_employee(EmployeeId(5), EmployeeId(12)).unwrap();
    org.move_employee(EmployeeId(7), EmployeeId(2)).unwrap();
    org.undo();
    org.undo();

    org.move_employee(EmployeeId(11), EmployeeId(4)).unwrap();
    let branched = org.ceo();

    assert_eq!(org.history().len(), 2);
    assert!(!org.can_redo());
    assert!(!org.redo());
    assert_eq!(org.ceo(), branched);

    org.undo();
    assert!(org.redo());
    assert_eq!(org.supervisor_of(EmployeeId(11)), Some(EmployeeId(4)));
    assert_eq!(org.supervisor_of(EmployeeId(5)), Some(EmployeeId(3)));
}

#[rstest]
fn given_renamed_employee_when_moving_then_rename_is_captured_in_history(mut org: OrgTree) {
    org.get_mut(EmployeeId(4)).unwrap().name = "Mary Green".to_string();
    org.move_employee(EmployeeId(4), EmployeeId(6)).unwrap();

    org.undo();
    assert_eq!(org.get(EmployeeId(4)).unwrap().name, "Mary Blue");
    org.redo();
    assert_eq!(org.get(EmployeeId(4)).unwrap().name, "Mary Green");
}
