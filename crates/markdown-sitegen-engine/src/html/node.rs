/// Errors raised while constructing HTML nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

/// Attribute list of an element.
///
/// Insertion order is preserved and is the order attributes are serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A tagged HTML element owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element, rejecting tag names that cannot be rendered.
    ///
    /// A tag must be non-empty ASCII alphanumeric and start with a letter.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, NodeError> {
        let tag = tag.into();
        if !is_valid_tag(&tag) {
            return Err(NodeError::InvalidNode(format!("bad tag name {tag:?}")));
        }
        Ok(Self {
            tag,
            attributes: Attributes::new(),
            children,
        })
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// A node of the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text, rendered verbatim.
    Leaf(String),
    /// A tagged element.
    Element(Element),
    /// Children rendered back to back with no surrounding markup.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf(text.into())
    }

    /// Shorthand for an element without attributes.
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, NodeError> {
        Element::new(tag, children).map(Node::Element)
    }

    /// Element wrapping a single text leaf, e.g. `<b>text</b>`.
    pub fn text_element(tag: impl Into<String>, text: impl Into<String>) -> Result<Self, NodeError> {
        Self::element(tag, vec![Node::leaf(text)])
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(el.tag()),
            Node::Leaf(_) | Node::Fragment(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => el.children(),
            Node::Fragment(children) => children,
            Node::Leaf(_) => &[],
        }
    }

    /// The literal value of a leaf.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(text) => Some(text),
            Node::Element(_) | Node::Fragment(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}
