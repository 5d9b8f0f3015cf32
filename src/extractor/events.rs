use ego_tree::iter::Edge;
use scraper::Html;
use scraper::node::{Element, Node};
use tracing::debug;

/// Attribute map of an opening tag. Missing attributes read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    fn from_element(element: &Element) -> Self {
        Self(
            element
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get("class").split_whitespace()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    Open { name: String, attrs: Attributes },
    Close { name: String },
    Text(String),
}

impl TagEvent {
    pub fn is_open(&self, tag: &str) -> bool {
        matches!(self, TagEvent::Open { name, .. } if name == tag)
    }
}

/// Flatten an HTML document into open / close / text events in document order.
///
/// html5ever repairs unclosed and mismatched tags while building the tree, so
/// every `Open` has a matching `Close` and no input is rejected.
pub fn tokenize(html: &str) -> Vec<TagEvent> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(errors = document.errors.len(), "recovered from malformed markup");
    }

    let mut events = Vec::new();
    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => events.push(TagEvent::Open {
                    name: element.name().to_string(),
                    attrs: Attributes::from_element(element),
                }),
                Node::Text(text) => events.push(TagEvent::Text(String::from(&**text))),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    events.push(TagEvent::Close {
                        name: element.name().to_string(),
                    });
                }
            }
        }
    }
    events
}
