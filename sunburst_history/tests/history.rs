// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `sunburst_history` crate.
//!
//! These exercise stack ordering and the difference between the guarded
//! `back` and the unguarded `pop`.

use sunburst_history::NavigationHistory;

#[test]
fn root_only_history() {
    let history = NavigationHistory::with_root(0_u32);
    assert_eq!(history.size(), 1);
    assert_eq!(history.current(), Some(&0));
    assert_eq!(history.previous(), None);
    assert!(!history.can_go_back());
    assert!(!history.is_empty());
}

#[test]
fn navigate_then_back() {
    let mut history = NavigationHistory::with_root("root");
    history.navigate("a");
    assert_eq!(history.current(), Some(&"a"));
    assert_eq!(history.previous(), Some(&"root"));
    assert_eq!(history.size(), 2);

    history.back();
    assert_eq!(history.current(), Some(&"root"));
    assert_eq!(history.size(), 1);
}

#[test]
fn back_keeps_bottom_entry() {
    let mut history = NavigationHistory::with_root(1);
    history.back();
    history.back();
    assert_eq!(history.size(), 1);
    assert_eq!(history.current(), Some(&1));
}

#[test]
fn pop_can_empty_the_stack() {
    let mut history = NavigationHistory::with_root(1);
    assert_eq!(history.pop(), Some(1));
    assert!(history.is_empty());
    assert_eq!(history.current(), None);
    assert_eq!(history.previous(), None);
    assert_eq!(history.pop(), None);

    // `back` on an empty history is a no-op as well.
    history.back();
    assert_eq!(history.size(), 0);
}

#[test]
fn deep_navigation_unwinds_in_order() {
    let mut history = NavigationHistory::new(vec![10, 20]);
    history.navigate(30);
    history.navigate(40);
    assert_eq!(history.entries(), &[10, 20, 30, 40]);
    assert_eq!(history.previous(), Some(&30));

    let mut seen = Vec::new();
    while history.can_go_back() {
        seen.push(*history.current().unwrap());
        history.back();
    }
    assert_eq!(seen, [40, 30, 20]);
    assert_eq!(history.iter().copied().collect::<Vec<_>>(), [10]);
}

#[test]
fn same_entry_may_repeat() {
    let mut history = NavigationHistory::with_root('r');
    history.navigate('r');
    assert_eq!(history.size(), 2);
    assert_eq!(history.current(), history.previous());
    let all: Vec<char> = (&history).into_iter().copied().collect();
    assert_eq!(all, ['r', 'r']);
}
