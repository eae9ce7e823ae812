use webidl::dom::{
    Comment, Element, HtmlElement, Node, create_comment, create_element, create_element_ns,
    try_into_element,
};

fn get_node() -> Box<dyn Node> {
    create_element("div")
}

#[test]
fn element_round_trips_through_node() {
    let node = get_node();
    let element = node.downcast_ref::<dyn Element>().expect("div is an element");

    assert_eq!(element.tag_name(), "div");
    assert_eq!(element.local_name(), "div");
    assert_eq!(element.node_value_pair(), ("", false));
}

#[test]
fn namespaced_names_survive_downcast() {
    let node = create_element_ns("svg:circle", "circle");
    let element = node.downcast_ref::<HtmlElement>().unwrap();
    assert_eq!(element.tag_name(), "svg:circle");
    assert_eq!(element.local_name(), "circle");
}

#[test]
fn base_only_node_fails_downcast() {
    let node = create_comment("note");
    assert!(node.downcast_ref::<dyn Element>().is_none());
    assert!(!node.is::<dyn Element>());
    assert!(node.downcast_ref::<Comment>().is_some());

    let node = try_into_element(node).unwrap_err().into_inner();
    assert_eq!(node.node_value(), Some("note"));
}

#[test]
fn presence_flag_governs_absence() {
    let mut node = get_node();

    node.set_node_value_pair("x", true);
    assert_eq!(node.node_value_pair(), ("x", true));

    node.set_node_value_pair("", true);
    assert_eq!(node.node_value_pair(), ("", true));
    assert_eq!(node.node_value(), Some(""));

    node.set_node_value_pair("", false);
    assert_eq!(node.node_value_pair(), ("", false));
    assert_eq!(node.node_value(), None);
}

#[test]
fn element_edits_are_seen_through_node() {
    let node = get_node();
    let mut element = try_into_element(node).unwrap();
    element.set_node_value(Some("v".to_string()));

    let node = element.as_node();
    assert_eq!(node.node_value(), Some("v"));
    assert!(node.is::<HtmlElement>());
}

#[test]
fn mixed_nodes_can_be_filtered() {
    let nodes = vec![
        create_element("p"),
        create_comment("c"),
        create_element("span"),
    ];

    let tags: Vec<&str> = nodes
        .iter()
        .filter_map(|n| n.downcast_ref::<dyn Element>())
        .map(|e| e.tag_name())
        .collect();
    assert_eq!(tags, vec!["p", "span"]);
}
