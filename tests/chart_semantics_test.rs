//! Tests for copy/move semantics, live cursors, algorithms and rendering

use orgchart::util::testing;
use orgchart::{ChartError, OrgChart, Traversal, TreeNodeConvert};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn chart() -> OrgChart {
    let mut chart = OrgChart::new();
    chart
        .set_root("A")
        .add_child("A", "B")
        .and_then(|c| c.add_child("A", "C"))
        .and_then(|c| c.add_child("A", "D"))
        .and_then(|c| c.add_child("C", "CC"))
        .and_then(|c| c.add_child("CC", "CCC"))
        .and_then(|c| c.add_child("B", "BB"))
        .expect("canonical chart");
    chart
}

fn levels(chart: &OrgChart) -> Vec<String> {
    chart.iter().map(String::from).collect()
}

// ============================================================
// Copy / Move Tests
// ============================================================

#[rstest]
fn given_clone_when_modifying_copy_then_original_unchanged(chart: OrgChart) {
    let mut copy = chart.clone();
    copy.add_child("A", "E").unwrap();
    let cursor = copy.begin();
    copy.replace(cursor, "B", "Bee");

    assert_eq!(levels(&chart), vec!["A", "B", "C", "D", "BB", "CC", "CCC"]);
    assert_eq!(
        levels(&copy),
        vec!["A", "Bee", "C", "D", "E", "BB", "CC", "CCC"]
    );
}

#[rstest]
fn given_clone_when_modifying_original_then_copy_unchanged(mut chart: OrgChart) {
    let copy = chart.clone();
    chart.set_root("Z");

    assert_eq!(levels(&chart), vec!["Z"]);
    assert_eq!(copy.len(), 7);
    assert_eq!(copy.root_label(), Some("A"));
}

#[rstest]
fn given_chart_when_taken_then_source_is_empty(mut chart: OrgChart) {
    let moved = chart.take();

    assert!(chart.is_empty());
    assert_eq!(chart.iter().count(), 0);
    assert_eq!(
        chart.add_child("A", "X").err(),
        Some(ChartError::NotFound("A".to_string()))
    );
    assert_eq!(levels(&moved), vec!["A", "B", "C", "D", "BB", "CC", "CCC"]);
}

#[rstest]
fn given_taken_chart_when_rebuilding_source_then_both_independent(mut chart: OrgChart) {
    let moved = chart.take();
    chart.set_root("Fresh").add_child("Fresh", "New").unwrap();

    assert_eq!(levels(&chart), vec!["Fresh", "New"]);
    assert_eq!(moved.root_label(), Some("A"));
}

// ============================================================
// Live Cursor Tests
// ============================================================

#[rstest]
fn given_cursor_when_root_replaced_before_advancing_then_yields_new_root(mut chart: OrgChart) {
    let cursor = chart.begin();
    chart.set_root("Testing");

    let labels: Vec<&str> = cursor.labels(&chart).collect();
    assert_eq!(labels.first(), Some(&"Testing"));
    assert_eq!(labels, vec!["Testing"]);
}

#[rstest]
fn given_root_replaced_when_iterating_fresh_then_only_new_root(mut chart: OrgChart) {
    chart.set_root("NewRoot");
    assert_eq!(levels(&chart), vec!["NewRoot"]);
}

#[rstest]
fn given_cursor_when_label_changed_ahead_then_change_is_visible(mut chart: OrgChart) {
    let mut cursor = chart.begin_preorder();
    cursor.advance();

    let cc = chart.find("CC").unwrap();
    *chart.label_mut(cc).unwrap() = "Changed".to_string();

    let labels: Vec<&str> = cursor.labels(&chart).collect();
    assert_eq!(labels, vec!["B", "BB", "C", "Changed", "CCC", "D"]);
}

#[rstest]
fn given_cursor_when_writing_through_it_then_chart_updated(mut chart: OrgChart) {
    let cursor = chart.begin_reverse_order();
    cursor.get_mut(&mut chart).unwrap().push_str("_deep");

    assert_eq!(cursor.get(&chart), Some("CCC_deep"));
    assert!(chart.find("CCC_deep").is_some());
}

#[rstest]
fn given_cursor_when_child_added_later_then_shape_is_fixed(mut chart: OrgChart) {
    let cursor = chart.begin();
    chart.add_child("D", "DD").unwrap();

    assert_eq!(cursor.labels(&chart).count(), 7);
    assert_eq!(chart.iter().count(), 8);
}

// ============================================================
// Algorithm Tests
// ============================================================

#[rstest]
fn given_chart_when_transforming_to_lower_then_level_order_is_lower(mut chart: OrgChart) {
    let cursor = chart.begin();
    chart.transform(cursor, str::to_lowercase);

    assert_eq!(levels(&chart), vec!["a", "b", "c", "d", "bb", "cc", "ccc"]);
}

#[rstest]
fn given_chart_when_for_each_then_sees_every_label(chart: OrgChart) {
    let mut total = 0;
    chart.iter().for_each(|label| total += label.len());
    assert_eq!(total, 11);
}

#[rstest]
fn given_repeated_labels_when_replacing_then_all_occurrences_replaced(mut chart: OrgChart) {
    chart.add_child("D", "B").unwrap();
    let cursor = chart.begin_preorder();
    let replaced = chart.replace(cursor, "B", "Bob");

    assert_eq!(replaced, 2);
    assert!(chart.find("B").is_none());
    assert_eq!(
        chart.iter_preorder().filter(|&label| label == "Bob").count(),
        2
    );
}

#[rstest]
fn given_partially_advanced_cursor_when_mutating_then_only_rest_affected(mut chart: OrgChart) {
    let mut cursor = chart.begin();
    cursor.advance();
    chart.for_each_mut(cursor, |label| label.insert(0, '_'));

    assert_eq!(
        levels(&chart),
        vec!["A", "_B", "_C", "_D", "_BB", "_CC", "_CCC"]
    );
}

// ============================================================
// Rendering Tests
// ============================================================

#[rstest]
fn given_chart_when_rendered_then_tree_layout(chart: OrgChart) {
    let text = chart.to_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.first(), Some(&"A"));
    assert_eq!(lines.len(), 7);
    assert!(lines.iter().any(|line| line.ends_with("CCC")));
    assert!(lines.last().unwrap().ends_with("D"));
    assert_eq!(format!("{}", chart), text);
    assert_eq!(chart.to_tree_string().to_string(), text);
}

#[test]
fn given_empty_chart_when_rendered_then_placeholder() {
    let chart = OrgChart::new();
    assert_eq!(chart.to_text().trim_end(), "Empty chart");
}
