use inspector_lib::object::{
    ENTRIES_NAME, KeySort, Object, ObjectInspector, ObjectKind, ObjectNode, ObjectOptions,
    ObjectTreeAdapter, PROTO_NAME, PropertyKey, Value, format, from_json_str, own_property_names,
};
use inspector_lib::tree::{Token, TreeAdapter, TreeItem};
use inspector_lib::{AccessError, AdapterError, LoadError};

fn children(adapter: &ObjectTreeAdapter, value: &Value) -> Vec<TreeItem<ObjectNode>> {
    adapter
        .children(&ObjectNode::Value(value.clone()))
        .unwrap()
        .unwrap_or_default()
}

fn names(items: &[TreeItem<ObjectNode>]) -> Vec<&str> {
    items.iter().filter_map(|item| item.name.as_deref()).collect()
}

fn showing_non_enumerable() -> ObjectTreeAdapter {
    ObjectTreeAdapter::new(ObjectOptions {
        show_non_enumerable: true,
        ..ObjectOptions::default()
    })
}

// =============================================================================
// Children
// =============================================================================

#[test]
fn test_map_has_single_entries_child() {
    let adapter = ObjectTreeAdapter::default();
    let map = Value::map([("key".into(), "value".into())]);

    let items = children(&adapter, &map);
    assert_eq!(items.len(), 1);
    let entries = &items[0];
    assert_eq!(entries.name.as_deref(), Some(ENTRIES_NAME));
    assert!(entries.synthetic);
    assert_eq!(entries.expanded, Some(true));

    let inner = adapter.children(&entries.data).unwrap().unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].name.as_deref(), Some("key"));
    assert_eq!(inner[0].data, ObjectNode::Value(Value::from("value")));
}

#[test]
fn test_set_entries_are_indexed() {
    let adapter = ObjectTreeAdapter::default();
    let set = Value::set(["a".into(), "b".into()]);
    let entries = children(&adapter, &set).remove(0);

    let inner = adapter.children(&entries.data).unwrap().unwrap();
    assert_eq!(names(&inner), vec!["0", "1"]);
    assert_eq!(inner[1].data, ObjectNode::Value(Value::from("b")));
}

#[test]
fn test_empty_and_scalar_values_have_no_children() {
    let adapter = ObjectTreeAdapter::default();
    for value in [
        Value::object::<&str>([]),
        Value::array([]),
        Value::map([]),
        Value::set([]),
        Value::buffer(Vec::<u8>::new()),
        Value::function("noop"),
        Value::date("2024-01-01"),
        Value::Null,
        Value::from(3),
        Value::from("text"),
    ] {
        let node = ObjectNode::Value(value);
        assert!(!adapter.has_children(&node), "{node:?}");
        assert_eq!(adapter.children(&node), Ok(None));
    }
}

#[test]
fn test_array_elements_come_before_properties() {
    let adapter = ObjectTreeAdapter::default();
    let array = Value::array(["x".into(), "y".into()]);
    array.as_object().unwrap().insert("extra", Value::Bool(true));

    assert_eq!(names(&children(&adapter, &array)), vec!["0", "1", "extra"]);
}

#[test]
fn test_buffer_bytes_are_indexed() {
    let adapter = ObjectTreeAdapter::default();
    let buffer = Value::buffer(vec![1, 2, 255]);
    let node = ObjectNode::Value(buffer.clone());
    assert!(adapter.has_children(&node));

    let items = children(&adapter, &buffer);
    assert_eq!(names(&items), vec!["0", "1", "2"]);
    assert_eq!(items[2].data, ObjectNode::Value(Value::Number(255.0)));

    assert_eq!(
        adapter.child(&node, "1"),
        Some(ObjectNode::Value(Value::Number(2.0)))
    );
    assert_eq!(adapter.child(&node, "3"), None);
}

#[test]
fn test_alphabetical_sort() {
    let adapter = ObjectTreeAdapter::new(ObjectOptions {
        sort_object_keys: KeySort::Alphabetical,
        ..ObjectOptions::default()
    });
    let object = Value::object([("b", 1.into()), ("a", 2.into()), ("c", 3.into())]);
    assert_eq!(names(&children(&adapter, &object)), vec!["a", "b", "c"]);
}

#[test]
fn test_custom_sort() {
    let adapter = ObjectTreeAdapter::new(ObjectOptions {
        sort_object_keys: KeySort::custom(|a, b| b.cmp(a)),
        ..ObjectOptions::default()
    });
    let object = Value::object([("b", 1.into()), ("a", 2.into()), ("c", 3.into())]);
    assert_eq!(names(&children(&adapter, &object)), vec!["c", "b", "a"]);
}

#[test]
fn test_sort_never_reorders_array_elements() {
    let adapter = ObjectTreeAdapter::new(ObjectOptions {
        sort_object_keys: KeySort::custom(|a, b| b.cmp(a)),
        ..ObjectOptions::default()
    });
    let array = Value::array((0..12).map(|i: i32| Value::from(i)));
    let items = children(&adapter, &array);
    let expected: Vec<String> = (0..12).map(|i| i.to_string()).collect();
    assert_eq!(names(&items), expected);
}

#[test]
fn test_non_enumerable_properties_are_hidden_by_default() {
    let object = Object::new(ObjectKind::Plain);
    object.insert("visible", 1.into());
    object.define("secret", 2.into(), false);
    object.set_prototype(Some(Value::object([("inherited", 3.into())])));
    let value = Value::from(std::rc::Rc::new(object));

    let items = children(&ObjectTreeAdapter::default(), &value);
    assert_eq!(names(&items), vec!["visible"]);

    let items = children(&showing_non_enumerable(), &value);
    assert_eq!(names(&items), vec!["visible", "secret", PROTO_NAME]);
    assert!(!items[0].non_enumerable);
    assert!(items[1].non_enumerable);
    assert!(items[2].synthetic);
    assert!(items[2].non_enumerable);
}

#[test]
fn test_array_length_shown_with_non_enumerable() {
    let array = Value::array([1.into(), 2.into()]);
    let items = children(&showing_non_enumerable(), &array);
    assert_eq!(names(&items), vec!["0", "1", "length"]);
    assert_eq!(items[2].data, ObjectNode::Value(Value::Number(2.0)));
    assert!(items[2].non_enumerable);

    let empty = ObjectNode::Value(Value::array([]));
    assert!(showing_non_enumerable().has_children(&empty));
}

#[test]
fn test_symbol_keys() {
    let object = Object::new(ObjectKind::Plain);
    object.insert(PropertyKey::symbol("tag"), "v".into());
    let value = Value::from(std::rc::Rc::new(object));
    assert_eq!(
        names(&children(&ObjectTreeAdapter::default(), &value)),
        vec!["Symbol(tag)"]
    );
}

#[test]
fn test_failing_getter_yields_undefined() {
    let value = Value::object([("before", 1.into())]);
    let object = value.as_object().unwrap();
    object.define_getter("bad", || Err(AccessError::new("boom")), true);
    object.define_getter("good", || Ok(Value::from(5)), true);

    let items = children(&ObjectTreeAdapter::default(), &value);
    assert_eq!(names(&items), vec!["before", "bad", "good"]);
    assert_eq!(items[1].data, ObjectNode::Value(Value::Undefined));
    assert_eq!(items[2].data, ObjectNode::Value(Value::from(5)));
}

#[test]
fn test_busy_object_reports_error() {
    let value = Value::object([("a", 1.into())]);
    let object = value.as_object().unwrap();
    let _guard = object.properties().borrow_mut();

    let node = ObjectNode::Value(value.clone());
    let adapter = ObjectTreeAdapter::default();
    assert!(adapter.has_children(&node));
    assert!(matches!(
        adapter.children(&node),
        Err(AdapterError::Busy { .. })
    ));
}

#[test]
fn test_child_lookup() {
    let adapter = ObjectTreeAdapter::default();
    let data = ObjectNode::Value(Value::object([
        ("a", 1.into()),
        ("list", Value::array(["x".into(), "y".into()])),
        ("m", Value::map([("k".into(), 1.into())])),
    ]));

    assert_eq!(adapter.child(&data, "a"), Some(ObjectNode::Value(1.into())));
    assert_eq!(adapter.child(&data, "missing"), None);

    let list = adapter.child(&data, "list").unwrap();
    assert_eq!(adapter.child(&list, "1"), Some(ObjectNode::Value("y".into())));
    assert_eq!(adapter.child(&list, "5"), None);

    let map = adapter.child(&data, "m").unwrap();
    let entries = adapter.child(&map, ENTRIES_NAME).unwrap();
    assert!(matches!(entries, ObjectNode::Entries(_)));
    assert_eq!(adapter.child(&entries, "k"), Some(ObjectNode::Value(1.into())));
}

#[test]
fn test_property_names_include_non_enumerable() {
    let object = Object::new(ObjectKind::Plain);
    object.insert("a", 1.into());
    object.define("b", 2.into(), false);
    assert_eq!(
        own_property_names(&object),
        vec![PropertyKey::from("a"), PropertyKey::from("b")]
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_child_labels() {
    let data = Value::object([
        ("s", "str".into()),
        ("n", Value::Number(1.5)),
        ("big", Value::BigInt(10)),
        ("u", Value::Undefined),
        ("nul", Value::Null),
        ("t", true.into()),
        ("sym", Value::symbol("desc")),
        ("arr", Value::array([1.into(), 2.into(), 3.into()])),
        ("m", Value::map([("k".into(), 1.into())])),
        ("f", Value::function("run")),
        ("d", Value::date("2024-01-01T00:00:00.000Z")),
        ("r", Value::regexp("a+", "g")),
        ("buf", Value::buffer(vec![1, 2])),
        ("", 1.into()),
    ]);
    let mut view = ObjectInspector::inspect(data);
    let root = view.render();
    let labels: Vec<String> = root
        .children
        .iter()
        .map(|child| child.label.content.plain_text())
        .collect();

    assert_eq!(
        labels,
        vec![
            "s: \"str\"",
            "n: 1.5",
            "big: 10n",
            "u: undefined",
            "nul: null",
            "t: true",
            "sym: Symbol(desc)",
            "arr: Array(3)",
            "m: Map(1)",
            "f: ƒ run()",
            "d: 2024-01-01T00:00:00.000Z",
            "r: /a+/g",
            "buf: Buffer[2]",
            "\"\": 1",
        ]
    );
}

#[test]
fn test_value_tokens() {
    let string = format::value(&Value::from("x"));
    assert_eq!(string.spans()[0].token, Token::String);

    let function = format::value(&Value::function("f"));
    let tokens: Vec<Token> = function.spans().iter().map(|span| span.token).collect();
    assert_eq!(tokens, vec![Token::FunctionPrefix, Token::FunctionName]);

    assert_eq!(format::name("hidden", true).spans()[0].token, Token::DimmedName);
}

#[test]
fn test_number_formatting() {
    let text = |n: f64| format::value(&Value::Number(n)).plain_text();
    assert_eq!(text(42.0), "42");
    assert_eq!(text(-0.0), "-0");
    assert_eq!(text(f64::NAN), "NaN");
    assert_eq!(text(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_array_preview() {
    let preview = |value: &Value, max: usize| format::preview(value, 5, max).plain_text();
    let array = Value::array([1.into(), "two".into(), 3.into()]);

    assert_eq!(preview(&array, 10), "(3) [1, \"two\", 3]");
    assert_eq!(preview(&array, 2), "(3) [1, \"two\", …]");
    assert_eq!(preview(&Value::array([]), 10), "[]");

    let buffer = Value::buffer(vec![1, 2, 3]);
    assert_eq!(preview(&buffer, 10), "Buffer(3) [1, 2, 3]");
    assert_eq!(preview(&buffer, 2), "Buffer(3) [1, 2, …]");
    assert_eq!(preview(&Value::buffer(Vec::<u8>::new()), 10), "Buffer []");
}

#[test]
fn test_object_preview() {
    let preview = |value: &Value, max: usize| format::preview(value, max, 10).plain_text();

    let point = Object::with_class(ObjectKind::Plain, "Point");
    point.insert("x", 1.into());
    point.insert("y", 2.into());
    let point = Value::from(std::rc::Rc::new(point));
    assert_eq!(preview(&point, 5), "Point {x: 1, y: 2}");
    assert_eq!(preview(&point, 1), "Point {x: 1, …}");

    let plain = Value::object([("a", Value::object([("deep", 1.into())]))]);
    assert_eq!(preview(&plain, 5), "{a: Object}");
    assert_eq!(preview(&Value::map([]), 5), "Map {}");
    assert_eq!(preview(&Value::regexp("x", ""), 5), "/x/");
    assert_eq!(preview(&Value::from(7), 5), "7");
}

#[test]
fn test_root_label_is_preview() {
    let mut view = ObjectInspector::inspect(Value::array([7.into(), 8.into(), 9.into()]))
        .with_name("nums");
    let root = view.render();
    assert_eq!(root.label.content.plain_text(), "nums: (3) [7, 8, 9]");
}

#[test]
fn test_buffer_root_expands_to_bytes() {
    let mut view = ObjectInspector::inspect(Value::buffer(vec![7, 8])).with_name("buf");
    let root = view.render();

    assert!(root.show_arrow);
    assert!(root.expanded);
    assert_eq!(root.label.content.plain_text(), "buf: Buffer(2) [7, 8]");
    let labels: Vec<String> = root
        .children
        .iter()
        .map(|child| child.label.content.plain_text())
        .collect();
    assert_eq!(labels, vec!["0: 7", "1: 8"]);
}

#[test]
fn test_cyclic_value_renders_to_requested_depth() {
    let data = Value::object([("name", "loop".into())]);
    data.as_object().unwrap().insert("self", data.clone());

    let mut view = ObjectInspector::inspect(data).with_expand_level(3);
    let root = view.render();
    assert!(root.find("$.self.self").is_some_and(|node| node.expanded));
    assert!(root.find("$.self.self.self").is_some_and(|node| !node.expanded));
    assert_eq!(root.height(), 7);
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_json_keeps_key_order() {
    let value = from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(
        own_property_names(object),
        vec![PropertyKey::from("z"), PropertyKey::from("a"), PropertyKey::from("m")]
    );
}

#[test]
fn test_json_tags() {
    let value = from_json_str(
        r#"{
            "u": {"$undefined": true},
            "big": {"$bigint": "-12345678901234567890"},
            "sym": {"$symbol": "id"},
            "d": {"$date": "2024-01-01"},
            "re": {"$regexp": {"source": "a+", "flags": "gi"}},
            "f": {"$function": "handler"},
            "m": {"$map": [[1, "one"], ["two", 2]]},
            "s": {"$set": [1, 2, 3]},
            "buf": {"$buffer": [0, 255]},
            "huge": 9007199254740993,
            "two_keys": {"$bigint": "1", "x": 2}
        }"#,
    )
    .unwrap();
    let mut view = ObjectInspector::inspect(value);
    let root = view.render();
    let labels: Vec<String> = root
        .children
        .iter()
        .map(|child| child.label.content.plain_text())
        .collect();

    assert_eq!(
        labels,
        vec![
            "u: undefined",
            "big: -12345678901234567890n",
            "sym: Symbol(id)",
            "d: 2024-01-01",
            "re: /a+/gi",
            "f: ƒ handler()",
            "m: Map(2)",
            "s: Set(3)",
            "buf: Buffer[2]",
            "huge: 9007199254740993n",
            "two_keys: Object",
        ]
    );
}

#[test]
fn test_json_map_keys() {
    let value = from_json_str(r#"{"$map": [[1, "one"], [null, "none"]]}"#).unwrap();
    let adapter = ObjectTreeAdapter::default();
    let entries = children(&adapter, &value).remove(0);
    let inner = adapter.children(&entries.data).unwrap().unwrap();
    assert_eq!(names(&inner), vec!["1", "null"]);
}

#[test]
fn test_json_errors() {
    assert!(matches!(from_json_str("{"), Err(LoadError::Json(_))));
    assert!(matches!(
        from_json_str(r#"{"$bigint": "12x"}"#),
        Err(LoadError::Shape { .. })
    ));
    assert!(matches!(
        from_json_str(r#"{"$buffer": [256]}"#),
        Err(LoadError::Shape { .. })
    ));
    assert!(matches!(
        from_json_str(r#"{"$map": [[1]]}"#),
        Err(LoadError::Shape { .. })
    ));
}
