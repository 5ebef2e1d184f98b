use crate::{
    diagnostics::Diagnostics,
    link_type::{self, LinkType},
    yed::{self, YedEdgeStyle},
};
use anyhow::{Context, Result};
use roxmltree::Node;
use serde::Serialize;
use std::fmt::Display;

///
/// One directed connection of a diagram.
///
/// Endpoints are node ids and are not resolved here.
/// The link type is fixed at construction, the other fields may be
/// adjusted by later enrichment passes.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    id: String,
    source_id: String,
    target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link_type: Option<LinkType>,
}

impl EdgeRecord {
    pub fn new(
        id: &str,
        source_id: &str,
        target_id: &str,
        label: Option<String>,
        link_type: Option<LinkType>,
    ) -> Self {
        EdgeRecord {
            id: id.to_owned(),
            source_id: source_id.to_owned(),
            target_id: target_id.to_owned(),
            label,
            link_type,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_owned();
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn set_source_id(&mut self, source_id: &str) {
        self.source_id = source_id.to_owned();
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn set_target_id(&mut self, target_id: &str) {
        self.target_id = target_id.to_owned();
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn link_type(&self) -> Option<LinkType> {
        self.link_type
    }
}

impl Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.id, self.source_id, self.target_id)?;
        if let Some(link_type) = self.link_type {
            write!(f, " [{link_type}]")?;
        }
        if let Some(label) = &self.label {
            write!(f, " {label:?}")?;
        }
        Ok(())
    }
}

///
/// Parse an edge element like `<edge id="e94" source="n104" target="n105">`.
///
/// Fails if `id`, `source` or `target` are missing or empty, or if the style
/// needed for classification is missing. The label is taken from `y:EdgeLabel`.
///
pub fn parse_edge(
    diag: &mut Diagnostics,
    document: Option<&str>,
    element: Node,
) -> Result<EdgeRecord> {
    let id = yed::required_attribute(&element, "id")?;
    let source = yed::required_attribute(&element, "source")
        .with_context(|| format!("Edge {id} has no source"))?;
    let target = yed::required_attribute(&element, "target")
        .with_context(|| format!("Edge {id} has no target"))?;
    let label = yed::read_label(element, "EdgeLabel");
    let link_type = link_type::classify(diag, document, id, &YedEdgeStyle::new(element))
        .with_context(|| format!("Edge {id} cannot be classified"))?;
    Ok(EdgeRecord::new(id, source, target, label, link_type))
}
