use crate::link_type::EdgeStyle;
use anyhow::{Result, anyhow};
use roxmltree::Node;

pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
pub const YWORKS_NS: &str = "http://www.yworks.com/xml/graphml";

///
/// Check if `node` is a GraphML element with local name `name`.
/// Files without a default namespace declaration are accepted, too.
///
pub fn is_graphml_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some(GRAPHML_NS))
}

///
/// Find the first yWorks sub-element `name` below `node` in document order.
///
pub fn find_yworks_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| {
        n.is_element()
            && n.tag_name().name() == name
            && n.tag_name().namespace() == Some(YWORKS_NS)
    })
}

///
/// Position of `node` in its document as `line:column`.
///
pub fn position(node: &Node) -> String {
    node.document().text_pos_at(node.range().start).to_string()
}

///
/// Read the non-empty attribute `name` of `node`.
///
pub fn required_attribute<'a>(node: &Node<'a, '_>, name: &str) -> Result<&'a str> {
    match node.attribute(name) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(anyhow!(
            "Attribute {name} of element {} at {} is empty",
            node.tag_name().name(),
            position(node)
        )),
        None => Err(anyhow!(
            "Element {} at {} is missing required attribute {name}",
            node.tag_name().name(),
            position(node)
        )),
    }
}

///
/// Read the caption of the first label sub-element `label_name`.
///
/// Only the direct text children are taken, nested model elements
/// (e.g. `y:LabelModel`) do not contribute. Whitespace-only text between
/// those elements is layout, not caption.
///
pub fn read_label(node: Node, label_name: &str) -> Option<String> {
    find_yworks_element(node, label_name).map(|label| {
        label
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .filter(|t| !t.trim().is_empty())
            .collect()
    })
}

///
/// Style of a yEd edge, read from its `y:Arrows` and `y:LineStyle` sub-elements.
///
pub struct YedEdgeStyle<'a, 'input> {
    edge: Node<'a, 'input>,
}

impl<'a, 'input> YedEdgeStyle<'a, 'input> {
    pub fn new(edge: Node<'a, 'input>) -> Self {
        YedEdgeStyle { edge }
    }

    fn style_element(&self, name: &str) -> Result<Node<'a, 'input>> {
        find_yworks_element(self.edge, name).ok_or_else(|| {
            anyhow!(
                "Element {} at {} has no y:{name} style",
                self.edge.tag_name().name(),
                position(&self.edge)
            )
        })
    }

    fn arrow(&self, end: &str) -> Result<&'a str> {
        let arrows = self.style_element("Arrows")?;
        arrows.attribute(end).ok_or_else(|| {
            anyhow!(
                "Element y:Arrows at {} is missing required attribute {end}",
                position(&arrows)
            )
        })
    }
}

impl EdgeStyle for YedEdgeStyle<'_, '_> {
    fn target_arrow(&self) -> Result<&str> {
        self.arrow("target")
    }

    fn source_arrow(&self) -> Result<&str> {
        self.arrow("source")
    }

    fn is_dashed(&self) -> Result<bool> {
        let line = self.style_element("LineStyle")?;
        Ok(line.attribute("type") == Some("dashed"))
    }
}
