use std::rc::Rc;

use inspector_lib::dom::{
    DomInspector, DomNode, DomTreeAdapter, MAX_INLINE_CHARS, format, from_json_str,
    should_inline_content,
};
use inspector_lib::tree::{RowKind, Token, TreeAdapter};

fn div() -> DomNode {
    DomNode::element("DIV")
        .attr("class", "box")
        .child(DomNode::text("hello"))
        .child(DomNode::element("span").child(DomNode::text("x")))
}

// =============================================================================
// Inline rule
// =============================================================================

#[test]
fn test_single_short_text_child_is_inlined() {
    let p = DomNode::element("p").child(DomNode::text("hi"));
    assert!(should_inline_content(&p, MAX_INLINE_CHARS));
    assert!(!DomTreeAdapter.has_children(&Rc::new(p)));
}

#[test]
fn test_long_or_mixed_content_is_not_inlined() {
    let long = DomNode::element("p").child(DomNode::text("a".repeat(MAX_INLINE_CHARS)));
    assert!(!should_inline_content(&long, MAX_INLINE_CHARS));
    assert!(!should_inline_content(&div(), MAX_INLINE_CHARS));
    assert!(!should_inline_content(&DomNode::element("br"), MAX_INLINE_CHARS));
    assert!(!should_inline_content(&DomNode::text("loose"), MAX_INLINE_CHARS));
}

// =============================================================================
// Adapter
// =============================================================================

#[test]
fn test_children_named_by_node_name_and_index() {
    let items = DomTreeAdapter.children(&Rc::new(div())).unwrap().unwrap();
    let names: Vec<&str> = items.iter().filter_map(|item| item.name.as_deref()).collect();
    assert_eq!(names, vec!["#text[0]", "span[1]"]);
}

#[test]
fn test_leaf_nodes_have_no_children() {
    for node in [
        DomNode::element("br"),
        DomNode::text("t"),
        DomNode::comment("c"),
        DomNode::document([]),
    ] {
        let node = Rc::new(node);
        assert!(!DomTreeAdapter.has_children(&node));
        assert_eq!(DomTreeAdapter.children(&node), Ok(None));
    }
}

#[test]
fn test_collapsed_element_label() {
    let mut view = DomInspector::inspect(div()).with_expand_level(0);
    let root = view.render();
    assert_eq!(
        root.label.content.plain_text(),
        "<div class=\"box\">…</div>"
    );
    assert_eq!(root.label.footer, None);
    assert_eq!(root.height(), 1);
}

#[test]
fn test_expanded_element_has_closing_footer() {
    let mut view = DomInspector::inspect(div());
    let root = view.render();

    assert_eq!(root.label.content.plain_text(), "<div class=\"box\">");
    let rows = root.rows();
    let text: Vec<String> = rows.iter().map(|row| row.content().plain_text()).collect();
    assert_eq!(
        text,
        vec!["<div class=\"box\">", "hello", "<span>x</span>", "</div>"]
    );
    assert_eq!(rows[3].kind, RowKind::Footer);
    assert_eq!(rows[3].depth(), 0);
    assert!(!rows[3].is_toggleable());

    assert_eq!(root.toggle_target(0).map(|n| n.path.as_str()), Some("$"));
    assert!(root.toggle_target(1).is_none());
    assert!(root.toggle_target(3).is_none());
}

#[test]
fn test_expand_path_through_document() {
    let doc = DomNode::document([
        DomNode::DocumentType {
            name: "html".to_string(),
            public_id: None,
            system_id: None,
        },
        DomNode::element("html").child(
            DomNode::element("body")
                .child(DomNode::element("main").child(DomNode::comment("a")).child(DomNode::text("b"))),
        ),
    ]);
    let mut view = DomInspector::inspect(doc)
        .with_expand_level(0)
        .with_expand_paths(["$", "$.html[1]", "$.html[1].body[0]"]);
    let root = view.render();

    let body = root.find("$.html[1].body[0]").unwrap();
    assert!(body.expanded);
    assert_eq!(body.label.content.plain_text(), "<body>");
    assert_eq!(
        body.children[0].label.content.plain_text(),
        "<main>…</main>"
    );
    assert_eq!(root.label.content.plain_text(), "#document");
    assert_eq!(root.children[0].label.content.plain_text(), "<!DOCTYPE html>");
}

#[test]
fn test_node_that_lost_its_children_renders_collapsed() {
    let mut view = DomInspector::inspect(
        DomNode::element("p")
            .child(DomNode::text("a"))
            .child(DomNode::element("b")),
    );
    assert!(view.render().expanded);

    view.set_data(Rc::new(DomNode::element("p").child(DomNode::text("hello"))));
    let root = view.render();

    // The stored entry survives; only the rendering ignores it.
    assert_eq!(view.state().get("$"), Some(true));
    assert!(!root.expanded);
    assert!(!root.show_arrow);
    assert_eq!(root.label.content.plain_text(), "<p>hello</p>");
    assert_eq!(root.label.footer, None);
    assert_eq!(root.height(), 1);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_tag_tokens() {
    let tag = format::open_tag("A", &[]);
    let tokens: Vec<Token> = tag.spans().iter().map(|span| span.token).collect();
    assert_eq!(tokens, vec![Token::TagBracket, Token::TagName, Token::TagBracket]);
    assert_eq!(tag.plain_text(), "<a>");
    assert_eq!(format::close_tag("A").plain_text(), "</a>");
}

#[test]
fn test_doctype_variants() {
    let doctype = |public_id: Option<&str>, system_id: Option<&str>| {
        format::node_preview(
            &DomNode::DocumentType {
                name: "html".to_string(),
                public_id: public_id.map(String::from),
                system_id: system_id.map(String::from),
            },
            false,
        )
        .plain_text()
    };
    assert_eq!(doctype(None, None), "<!DOCTYPE html>");
    assert_eq!(
        doctype(Some("-//W3C//DTD HTML 4.01//EN"), Some("http://www.w3.org/TR/html4/strict.dtd")),
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
    );
    assert_eq!(
        doctype(None, Some("about:legacy-compat")),
        "<!DOCTYPE html SYSTEM \"about:legacy-compat\">"
    );
}

#[test]
fn test_other_node_kinds() {
    let preview = |node: DomNode| format::node_preview(&node, false).plain_text();
    assert_eq!(preview(DomNode::comment(" note ")), "<!-- note -->");
    assert_eq!(
        preview(DomNode::CdataSection {
            text_content: "x < y".to_string()
        }),
        "<![CDATA[x < y]]>"
    );
    assert_eq!(
        preview(DomNode::ProcessingInstruction {
            name: "xml-stylesheet".to_string()
        }),
        "xml-stylesheet"
    );
    assert_eq!(
        preview(DomNode::DocumentFragment {
            child_nodes: Vec::new()
        }),
        "#document-fragment"
    );
    assert_eq!(preview(DomNode::Unsupported), "undefined");
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_parse_serialized_tree() {
    let node = from_json_str(
        r#"{
            "type": "element",
            "tagName": "ul",
            "attributes": [{"name": "id", "value": "list"}],
            "childNodes": [
                {"type": "element", "tagName": "li", "childNodes": [{"type": "text", "textContent": "one"}]},
                {"type": "comment", "textContent": "gap"},
                {"type": "shadow-root"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(node.node_name(), "ul");
    let children = node.child_nodes();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1].text_content(), Some("gap"));
    assert_eq!(*children[2], DomNode::Unsupported);

    let mut view = DomInspector::inspect(node);
    let root = view.render();
    assert_eq!(root.children[0].label.content.plain_text(), "<li>one</li>");
    assert_eq!(root.children[2].label.content.plain_text(), "undefined");
}

#[test]
fn test_parse_rejects_missing_type() {
    assert!(from_json_str(r#"{"tagName": "p"}"#).is_err());
}
