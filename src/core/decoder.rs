//! Recursive decoding of a node tree into [`Value`]s
//!
//! Default properties only seed the map at the root of a document. Nested
//! maps, and maps inside sequences, always start empty.

use super::node::Node;
use super::scalar::coerce_scalar;
use super::value::{PropertyBag, Value};
use log::{debug, warn};

/// Decode one node.
///
/// Returns `None` for a node that cannot be represented (an unresolved
/// alias). That is logged and otherwise treated as absence, never as an
/// error.
pub fn decode_node(node: &Node, defaults: Option<&PropertyBag>) -> Option<Value> {
    match node {
        Node::Document(root) => decode_node(root, defaults),
        Node::Map(pairs) => Some(Value::Map(decode_map(pairs, defaults))),
        Node::Sequence(items) => Some(Value::Sequence(
            items.iter().filter_map(|item| decode_node(item, None)).collect(),
        )),
        Node::Scalar { value, style } => Some(coerce_scalar(value, *style)),
        Node::Alias(id) => {
            warn!(
                "Skipping unsupported node type '{}' (anchor id {})",
                node.kind(),
                id
            );
            None
        }
    }
}

fn decode_map(pairs: &[(Node, Node)], defaults: Option<&PropertyBag>) -> PropertyBag {
    let mut bag = defaults.cloned().unwrap_or_default();

    for (key_node, value_node) in pairs {
        let Some(key) = decode_node(key_node, None) else {
            continue;
        };
        if let Some(value) = decode_node(value_node, None) {
            bag.insert(key.to_string(), value);
        }
    }

    bag
}

/// Decode every document of a stream independently, in stream order.
///
/// A document whose root produces no value is left out of the result.
pub fn decode_documents(documents: &[Node], defaults: Option<&PropertyBag>) -> Vec<Value> {
    let values: Vec<Value> = documents
        .iter()
        .filter_map(|document| decode_node(document, defaults))
        .collect();

    debug!(
        "Decoded {} of {} document(s)",
        values.len(),
        documents.len()
    );
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::ScalarStyle;
    use pretty_assertions::assert_eq;

    fn pair(key: &str, value: Node) -> (Node, Node) {
        (Node::plain(key), value)
    }

    fn bag(entries: &[(&str, Value)]) -> PropertyBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_fill_gaps_and_lose_collisions() {
        let root = Node::document(Node::Map(vec![
            pair("A", Node::plain("1")),
            pair("B", Node::plain("2")),
        ]));
        let defaults = bag(&[("B", Value::Int32(99)), ("C", Value::Int32(3))]);

        let value = decode_node(&root, Some(&defaults)).unwrap();

        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["A"], Value::Int32(1));
        assert_eq!(map["B"], Value::Int32(2));
        assert_eq!(map["C"], Value::Int32(3));
    }

    #[test]
    fn test_defaults_do_not_reach_nested_maps() {
        let root = Node::document(Node::Map(vec![pair(
            "inner",
            Node::Map(vec![pair("X", Node::plain("1"))]),
        )]));
        let defaults = bag(&[("Y", Value::Int32(2))]);

        let value = decode_node(&root, Some(&defaults)).unwrap();

        let inner = value.get("inner").unwrap().as_map().unwrap();
        assert_eq!(inner, &bag(&[("X", Value::Int32(1))]));
        assert_eq!(value.get("Y"), Some(&Value::Int32(2)));
    }

    #[test]
    fn test_defaults_do_not_reach_maps_inside_sequences() {
        let root = Node::document(Node::Sequence(vec![Node::Map(vec![pair(
            "X",
            Node::plain("1"),
        )])]));
        let defaults = bag(&[("Y", Value::Int32(2))]);

        let value = decode_node(&root, Some(&defaults)).unwrap();

        assert_eq!(
            value,
            Value::Sequence(vec![Value::Map(bag(&[("X", Value::Int32(1))]))])
        );
    }

    #[test]
    fn test_defaults_ignored_for_scalar_root() {
        let root = Node::document(Node::plain("hello"));
        let defaults = bag(&[("Y", Value::Int32(2))]);

        assert_eq!(
            decode_node(&root, Some(&defaults)),
            Some(Value::string("hello"))
        );
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let root = Node::Map(vec![
            pair("k", Node::plain("first")),
            pair("other", Node::plain("x")),
            pair("k", Node::plain("second")),
        ]);

        let value = decode_node(&root, None).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["k"], Value::string("second"));
        // Overwrite keeps the original position
        assert_eq!(map.get_index(0).unwrap().0, "k");
    }

    #[test]
    fn test_map_keys_rendered_as_strings() {
        let root = Node::Map(vec![
            (Node::plain("1"), Node::plain("one")),
            (Node::plain("true"), Node::plain("yes")),
        ]);

        let value = decode_node(&root, None).unwrap();
        assert_eq!(value.get("1"), Some(&Value::string("one")));
        assert_eq!(value.get("true"), Some(&Value::string("yes")));
    }

    #[test]
    fn test_quoted_scalars_stay_strings() {
        let root = Node::Sequence(vec![
            Node::scalar("42", ScalarStyle::DoubleQuoted),
            Node::plain("42"),
        ]);

        assert_eq!(
            decode_node(&root, None),
            Some(Value::Sequence(vec![Value::string("42"), Value::Int32(42)]))
        );
    }

    #[test]
    fn test_unresolved_alias_is_skipped() {
        let root = Node::Map(vec![
            pair("a", Node::Sequence(vec![Node::plain("1"), Node::Alias(0)])),
            pair("b", Node::Alias(0)),
        ]);
        let defaults = bag(&[("b", Value::string("kept"))]);

        let value = decode_node(&root, Some(&defaults)).unwrap();
        assert_eq!(
            value.get("a"),
            Some(&Value::Sequence(vec![Value::Int32(1)]))
        );
        assert_eq!(value.get("b"), Some(&Value::string("kept")));
    }

    #[test]
    fn test_documents_decoded_independently() {
        let documents = vec![
            Node::document(Node::Map(vec![pair("a", Node::plain("1"))])),
            Node::document(Node::plain("two")),
            Node::document(Node::Map(vec![])),
        ];
        let defaults = bag(&[("d", Value::Bool(true))]);

        let values = decode_documents(&documents, Some(&defaults));

        assert_eq!(values.len(), 3);
        assert_eq!(values[0].get("d"), Some(&Value::Bool(true)));
        assert_eq!(values[1], Value::string("two"));
        assert_eq!(values[2], Value::Map(defaults.clone()));
    }
}
