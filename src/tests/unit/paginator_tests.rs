//! Paginator Unit Tests
//!
//! Control visibility and boundary navigation across list sizes and
//! starting positions.

use rstest::rstest;

use crate::core::directory::{ActiveList, ModalPaginator, PaginationControls, PaginatorError};
use crate::tests::common::employee;

fn list_of(len: usize) -> ActiveList {
    (0..len)
        .map(|i| employee(&format!("id-{i}"), &format!("First{i}"), "Last"))
        .collect::<Vec<_>>()
        .into()
}

#[rstest]
#[case::single(1, 0, false, false, false)]
#[case::first_of_two(2, 0, true, false, true)]
#[case::last_of_two(2, 1, true, true, false)]
#[case::first_of_twelve(12, 0, true, false, true)]
#[case::middle_of_twelve(12, 5, true, true, true)]
#[case::last_of_twelve(12, 11, true, true, false)]
fn controls_follow_position(
    #[case] len: usize,
    #[case] index: usize,
    #[case] container: bool,
    #[case] prev: bool,
    #[case] next: bool,
) {
    let mut paginator = ModalPaginator::new();
    paginator.open_at(list_of(len), index).unwrap();
    assert_eq!(
        paginator.controls(),
        PaginationControls {
            container,
            prev,
            next
        }
    );
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(12)]
fn walking_forward_visits_every_record(#[case] len: usize) {
    let list = list_of(len);
    let mut paginator = ModalPaginator::new();
    paginator.open_at(list.clone(), 0).unwrap();

    let mut seen = vec![paginator.current().unwrap().id().to_string()];
    while paginator.next() {
        seen.push(paginator.current().unwrap().id().to_string());
    }

    let expected: Vec<String> = list.iter().map(|r| r.id().to_string()).collect();
    assert_eq!(seen, expected);
    assert_eq!(paginator.index(), Some(len - 1));
    assert!(!paginator.controls().next);
}

#[rstest]
#[case(1, 1)]
#[case(5, 5)]
#[case(13, 12)]
fn open_past_end_is_rejected(#[case] index: usize, #[case] len: usize) {
    let mut paginator = ModalPaginator::new();
    assert_eq!(
        paginator.open_at(list_of(len), index),
        Err(PaginatorError::IndexOutOfRange { index, len })
    );
    assert!(!paginator.is_open());
}

#[test]
fn container_returns_after_single_record_list() {
    let mut paginator = ModalPaginator::new();
    paginator.open_at(list_of(1), 0).unwrap();
    assert!(!paginator.controls().container);
    paginator.close();

    paginator.open_at(list_of(4), 2).unwrap();
    assert!(paginator.controls().container);
    assert!(paginator.controls().prev_visible());
    assert!(paginator.controls().next_visible());
}

#[test]
fn closed_paginator_ignores_navigation() {
    let mut paginator = ModalPaginator::new();
    assert!(!paginator.next());
    assert!(!paginator.prev());
    assert_eq!(paginator.controls(), PaginationControls::HIDDEN);
    assert!(paginator.current().is_none());
}
