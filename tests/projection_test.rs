//! Projection properties over a loaded page: filtering, sorting, column
//! visibility, and the fixed-size page-count formula.

mod common;

use common::*;

use holodex::projection::{page_count, Column, SortDirection};

#[tokio::test]
async fn test_filter_with_no_match_yields_empty_projection() {
    let TestHarness { mock, mut app } = harness();
    mock.set_response(LIST_URL, page_body(&page(3, &["Luke Skywalker", "C-3PO", "R2-D2"], None, None)));

    app.initialize();
    pump(&mut app, 1).await;

    app.projection.filter = "vader".to_string();
    assert!(app.projected_rows().is_empty());
    // The page itself is untouched by the projection
    assert_eq!(app.page().unwrap().results.len(), 3);
}

#[tokio::test]
async fn test_filter_is_case_insensitive() {
    let TestHarness { mock, mut app } = harness();
    mock.set_response(LIST_URL, page_body(&page(3, &["Luke Skywalker", "Leia Organa", "C-3PO"], None, None)));

    app.initialize();
    pump(&mut app, 1).await;

    app.projection.filter = "LEIA".to_string();
    let rows = app.projected_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Leia Organa");
}

#[tokio::test]
async fn test_sort_orders_rows_without_mutating_page() {
    let TestHarness { mock, mut app } = harness();
    mock.set_response(LIST_URL, page_body(&page(3, &["Owen Lars", "Beru Lars", "Anakin Skywalker"], None, None)));

    app.initialize();
    pump(&mut app, 1).await;

    app.projection.toggle_sort();
    assert_eq!(app.projection.sort, Some(SortDirection::Ascending));
    let names: Vec<&str> = app.projected_rows().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anakin Skywalker", "Beru Lars", "Owen Lars"]);

    // Server order is preserved underneath
    assert_eq!(app.page().unwrap().results[0].name, "Owen Lars");
}

#[tokio::test]
async fn test_hidden_column_leaves_data_model_intact() {
    let TestHarness { mock, mut app } = harness();
    mock.set_response(LIST_URL, page_body(&page(1, &["Luke Skywalker"], None, None)));

    app.initialize();
    pump(&mut app, 1).await;

    app.projection.toggle_column(Column::Gender);
    assert!(!app.projection.visible_columns().contains(&Column::Gender));
    // The record still carries the hidden field
    assert_eq!(app.page().unwrap().results[0].gender, "male");
}

#[tokio::test]
async fn test_filter_editing_clamps_selection() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let TestHarness { mock, mut app } = harness();
    mock.set_response(LIST_URL, page_body(&page(3, &["Luke Skywalker", "Leia Organa", "C-3PO"], None, None)));

    app.initialize();
    pump(&mut app, 1).await;
    app.select_last();
    assert_eq!(app.selected, 2);

    // Typing a filter that narrows the rows pulls the selection back in range
    for code in [KeyCode::Char('/'), KeyCode::Char('l'), KeyCode::Char('e'), KeyCode::Enter] {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }
    assert_eq!(app.projected_rows().len(), 1);
    assert_eq!(app.selected, 0);
}

#[test]
fn test_page_count_formula() {
    assert_eq!(page_count(82, 10), 9);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(0, 10), 0);
}
