//! Parsed YAML structure handed to the decoder
//!
//! The tree is a closed set of variants; the decoder matches on it
//! exhaustively. Nodes are built fresh for every decode call and dropped
//! once the values have been produced.

use std::fmt;

/// How a scalar was written in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Unquoted; eligible for type inference
    Plain,
    SingleQuoted,
    DoubleQuoted,
    /// Block scalar introduced with `|`
    Literal,
    /// Block scalar introduced with `>`
    Folded,
}

impl ScalarStyle {
    pub fn is_plain(self) -> bool {
        self == Self::Plain
    }
}

/// A node of the parsed YAML tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value pairs in document order; duplicate keys are kept
    Map(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    Scalar { value: String, style: ScalarStyle },
    /// One document of a stream, wrapping its root node
    Document(Box<Node>),
    /// A reference to an anchor that could not be resolved when it was
    /// seen (the anchored node was still open)
    Alias(usize),
}

impl Node {
    /// Create a plain scalar node
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Scalar {
            value: value.into(),
            style: ScalarStyle::Plain,
        }
    }

    /// Create a scalar node with an explicit style
    pub fn scalar(value: impl Into<String>, style: ScalarStyle) -> Self {
        Self::Scalar {
            value: value.into(),
            style,
        }
    }

    /// Wrap a root node in a document
    pub fn document(root: Node) -> Self {
        Self::Document(Box::new(root))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Map(_) => NodeKind::Map,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Scalar { .. } => NodeKind::Scalar,
            Self::Document(_) => NodeKind::Document,
            Self::Alias(_) => NodeKind::Alias,
        }
    }
}

/// Discriminant of a [`Node`], for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Map,
    Sequence,
    Scalar,
    Document,
    Alias,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map => write!(f, "map"),
            Self::Sequence => write!(f, "sequence"),
            Self::Scalar => write!(f, "scalar"),
            Self::Document => write!(f, "document"),
            Self::Alias => write!(f, "alias"),
        }
    }
}
