use std::cmp::Ordering;

use inspector_lib::object::Value;
use inspector_lib::table::{
    SortDirection, SortKey, SortState, TableView, compare_values, get_headers,
};

fn people() -> Value {
    Value::array([
        Value::object([("name", "carol".into()), ("age", 41.into())]),
        Value::object([("name", "alice".into()), ("city", "Oslo".into())]),
        Value::object([("name", "bob".into()), ("age", 29.into())]),
    ])
}

fn header_texts(view: &TableView) -> Vec<String> {
    view.table()
        .unwrap()
        .rows
        .into_iter()
        .map(|row| row.header)
        .collect()
}

// =============================================================================
// Headers
// =============================================================================

#[test]
fn test_headers_of_array_rows() {
    let headers = get_headers(&people()).unwrap();
    assert_eq!(
        headers.row_headers,
        vec![Value::from(0), Value::from(1), Value::from(2)]
    );
    assert_eq!(headers.col_headers, vec!["name", "age", "city"]);
}

#[test]
fn test_headers_of_object_rows() {
    let data = Value::object([
        ("x", Value::array([1.into(), 2.into()])),
        ("y", Value::array([3.into()])),
        ("z", 5.into()),
    ]);
    let headers = get_headers(&data).unwrap();
    assert_eq!(
        headers.row_headers,
        vec![Value::from("x"), Value::from("y"), Value::from("z")]
    );
    assert_eq!(headers.col_headers, vec!["0", "1"]);
}

#[test]
fn test_headers_skip_non_enumerable_keys() {
    let row = Value::object([("shown", 1.into())]);
    row.as_object().unwrap().define("hidden", 2.into(), false);
    let headers = get_headers(&Value::array([row])).unwrap();
    assert_eq!(headers.col_headers, vec!["shown"]);
}

#[test]
fn test_scalars_have_no_headers() {
    assert_eq!(get_headers(&Value::from("nope")), None);
    assert_eq!(get_headers(&Value::Null), None);
    assert!(TableView::new(Value::from(1)).table().is_none());
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_compare_same_type() {
    assert_eq!(compare_values(&"a".into(), &"b".into()), Ordering::Less);
    assert_eq!(compare_values(&10.into(), &9.into()), Ordering::Greater);
    assert_eq!(compare_values(&Value::BigInt(3), &Value::Number(2.5)), Ordering::Greater);
    assert_eq!(compare_values(&false.into(), &true.into()), Ordering::Less);
    assert_eq!(
        compare_values(&Value::object([("a", 1.into())]), &Value::array([])),
        Ordering::Equal
    );
}

#[test]
fn test_compare_type_precedence() {
    let ordered = [
        Value::from("s"),
        Value::from(1),
        Value::object::<&str>([]),
        Value::symbol("sym"),
        Value::from(true),
        Value::Undefined,
        Value::function("f"),
    ];
    for pair in ordered.windows(2) {
        assert_eq!(compare_values(&pair[0], &pair[1]), Ordering::Less, "{pair:?}");
        assert_eq!(compare_values(&pair[1], &pair[0]), Ordering::Greater, "{pair:?}");
    }
}

#[test]
fn test_sort_state_clicks() {
    let mut sort = SortState::new();
    assert_eq!(sort.direction(), None);

    sort.click_column("age");
    assert_eq!(sort.key(), Some(&SortKey::Column("age".to_string())));
    assert_eq!(sort.direction(), Some(SortDirection::Ascending));

    sort.click_column("age");
    assert_eq!(sort.direction(), Some(SortDirection::Descending));

    sort.click_column("name");
    assert_eq!(sort.direction(), Some(SortDirection::Ascending));
    assert_eq!(sort.direction_of(&SortKey::Column("age".to_string())), None);

    sort.click_index();
    assert_eq!(sort.direction_of(&SortKey::Index), Some(SortDirection::Ascending));
}

#[test]
fn test_sort_by_column() {
    let mut view = TableView::new(people());
    assert_eq!(header_texts(&view), vec!["0", "1", "2"]);

    view.click_column("name");
    assert_eq!(header_texts(&view), vec!["1", "2", "0"]);

    view.click_column("name");
    assert_eq!(header_texts(&view), vec!["0", "2", "1"]);
}

#[test]
fn test_missing_cells_sort_last() {
    let mut view = TableView::new(people());
    view.click_column("age");
    assert_eq!(header_texts(&view), vec!["2", "0", "1"]);
}

#[test]
fn test_sort_by_index() {
    let data = Value::object([("b", 1.into()), ("c", 2.into()), ("a", 3.into())]);
    let mut view = TableView::new(data);
    view.click_index();
    assert_eq!(header_texts(&view), vec!["a", "b", "c"]);
    view.click_index();
    assert_eq!(header_texts(&view), vec!["c", "b", "a"]);
}

// =============================================================================
// Cells
// =============================================================================

#[test]
fn test_table_cells() {
    let table = TableView::new(people()).table().unwrap();
    let labels: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["name", "age", "city"]);
    assert_eq!(table.index.label, "(index)");

    let cells: Vec<Option<String>> = table.rows[1]
        .cells
        .iter()
        .map(|cell| cell.as_ref().map(|f| f.plain_text()))
        .collect();
    assert_eq!(
        cells,
        vec![Some("\"alice\"".to_string()), None, Some("\"Oslo\"".to_string())]
    );
}

#[test]
fn test_column_override_and_sort_glyph() {
    let mut view = TableView::new(people()).with_columns(vec!["age".to_string()]);
    view.click_column("age");
    let table = view.table().unwrap();

    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].sort, Some(SortDirection::Ascending));
    assert_eq!(table.index.sort, None);
    assert_eq!(table.rows[0].cells[0].as_ref().unwrap().plain_text(), "29");
    assert_eq!(SortDirection::Descending.glyph(), "▼");
}

#[test]
fn test_scalar_rows_have_empty_cells() {
    let data = Value::array([1.into(), Value::object([("a", 2.into())])]);
    let table = TableView::new(data).table().unwrap();
    assert_eq!(table.rows[0].cells, vec![None]);
    assert!(table.rows[1].cells[0].is_some());
}
