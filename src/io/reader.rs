//! YAML text to node trees and decoded values
//!
//! Parsing is delegated to `yaml-rust2`'s event parser. The events are folded
//! into [`Node`] trees here, keeping each scalar's style so the decoder can
//! tell plain scalars from quoted ones.

use crate::core::{decode_documents, Node, PropertyBag, ScalarStyle, Value};
use crate::error::{Result, YamlCastError};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// YAML reader
#[derive(Debug, Clone, Default)]
pub struct YamlReader {
    _private: (),
}

impl YamlReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML stream into one [`Node::Document`] per document
    pub fn parse_str(&self, text: &str) -> Result<Vec<Node>> {
        let mut builder = NodeBuilder::default();
        let mut parser = Parser::new(text.chars());
        parser.load(&mut builder, true)?;

        debug!("Parsed {} YAML document(s)", builder.documents.len());
        Ok(builder.documents)
    }

    /// Parse and decode a YAML stream, one value per document
    pub fn read_str(&self, text: &str, defaults: Option<&PropertyBag>) -> Result<Vec<Value>> {
        let documents = self.parse_str(text)?;
        Ok(decode_documents(&documents, defaults))
    }

    /// Read a file and decode it, one value per document
    pub fn read_file<P: AsRef<Path>>(
        &self,
        path: P,
        defaults: Option<&PropertyBag>,
    ) -> Result<Vec<Value>> {
        let text = fs::read_to_string(path.as_ref())?;
        self.read_str(&text, defaults)
    }

    /// Read a file whose single document must be a map, for use as defaults
    pub fn read_defaults_file<P: AsRef<Path>>(&self, path: P) -> Result<PropertyBag> {
        let path = path.as_ref();
        let mut values = self.read_file(path, None)?;

        match (values.len(), values.pop()) {
            (1, Some(Value::Map(map))) => Ok(map),
            (1, Some(other)) => Err(YamlCastError::validation(format!(
                "defaults in {} must be a map, found {}",
                path.display(),
                other.type_name()
            ))),
            (n, _) => Err(YamlCastError::validation(format!(
                "defaults in {} must contain exactly one document, found {}",
                path.display(),
                n
            ))),
        }
    }
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Node>,
    },
    Map {
        anchor: usize,
        pairs: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
}

/// Folds parser events into document trees.
///
/// Anchors are registered when their node closes, so an alias inside its
/// own anchored node stays unresolved as [`Node::Alias`].
#[derive(Default)]
struct NodeBuilder {
    documents: Vec<Node>,
    stack: Vec<Frame>,
    root: Option<Node>,
    anchors: HashMap<usize, Node>,
}

impl NodeBuilder {
    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Map {
                pairs, pending_key, ..
            }) => match pending_key.take() {
                Some(key) => pairs.push((key, node)),
                None => *pending_key = Some(node),
            },
            None => self.root = Some(node),
        }
    }

    fn register(&mut self, anchor: usize, node: &Node) {
        // Zero means the node carried no anchor
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
    }

    fn close(&mut self) {
        let (anchor, node) = match self.stack.pop() {
            Some(Frame::Sequence { anchor, items }) => (anchor, Node::Sequence(items)),
            Some(Frame::Map { anchor, pairs, .. }) => (anchor, Node::Map(pairs)),
            None => return,
        };
        self.register(anchor, &node);
        self.push(node);
    }
}

impl MarkedEventReceiver for NodeBuilder {
    fn on_event(&mut self, event: Event, mark: Marker) {
        match event {
            Event::DocumentStart { .. } => {
                self.root = None;
                self.stack.clear();
            }
            Event::DocumentEnd { .. } => {
                let root = self.root.take().unwrap_or_else(|| Node::plain("~"));
                self.documents.push(Node::document(root));
            }
            Event::Scalar(value, style, anchor, _) => {
                let node = Node::scalar(value, scalar_style(style));
                self.register(anchor, &node);
                self.push(node);
            }
            Event::SequenceStart(anchor, _) => self.stack.push(Frame::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, _) => self.stack.push(Frame::Map {
                anchor,
                pairs: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(id) => {
                let node = match self.anchors.get(&id) {
                    Some(node) => node.clone(),
                    None => {
                        debug!(
                            "Alias to open anchor {} at line {}, column {}",
                            id,
                            mark.line(),
                            mark.col()
                        );
                        Node::Alias(id)
                    }
                };
                self.push(node);
            }
            Event::StreamStart | Event::StreamEnd | Event::Nothing => {}
        }
    }
}

fn scalar_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::Plain => ScalarStyle::Plain,
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        _ => ScalarStyle::Folded,
    }
}
