use crate::{
    diagnostics::Diagnostics,
    edge::{self, EdgeRecord},
    yed,
};
use anyhow::{Context, Result};
use roxmltree::Document;
use std::collections::BTreeSet;

///
/// The edges of one GraphML document together with the ids of its nodes.
///
#[derive(Debug, Default)]
pub struct EdgeDocument {
    pub name: String,
    pub node_ids: BTreeSet<String>,
    pub edges: Vec<EdgeRecord>,
}

///
/// Load all edges of the GraphML text `input`.
///
/// Edges that cannot be parsed are reported as errors and skipped,
/// so the rest of the document is still available.
/// Only XML syntax errors make the whole document fail.
///
pub fn load_document(diag: &mut Diagnostics, name: &str, input: &str) -> Result<EdgeDocument> {
    let xml = Document::parse(input).with_context(|| format!("Failed to parse XML from {name}"))?;
    let mut document = EdgeDocument {
        name: name.to_owned(),
        ..Default::default()
    };

    document.node_ids = xml
        .descendants()
        .filter(|n| yed::is_graphml_element(n, "node"))
        .filter_map(|n| n.attribute("id"))
        .map(|id| id.to_owned())
        .collect();

    let mut edge_ids = BTreeSet::new();
    for element in xml
        .descendants()
        .filter(|n| yed::is_graphml_element(n, "edge"))
    {
        match edge::parse_edge(diag, Some(name), element) {
            Ok(edge) => {
                if edge_ids.insert(edge.id().to_owned()) {
                    log::debug!("Parsed edge {edge}");
                    document.edges.push(edge);
                } else {
                    diag.add_error(
                        Some(name),
                        format!("E03: Edge id {} is used more than once.", edge.id()),
                    );
                }
            }
            Err(err) => diag.add_error(Some(name), format!("E02: {err:#}.")),
        }
    }

    check_references(diag, &document);
    log::debug!(
        "Loaded {} edges and {} nodes from {name}",
        document.edges.len(),
        document.node_ids.len()
    );
    Ok(document)
}

///
/// Report endpoints that do not name a node of the document.
///
fn check_references(diag: &mut Diagnostics, document: &EdgeDocument) {
    for edge in &document.edges {
        for endpoint in [edge.source_id(), edge.target_id()] {
            if !document.node_ids.contains(endpoint) {
                diag.add_warning(
                    Some(&document.name),
                    format!(
                        "E04: Edge {} references unknown node {endpoint}.",
                        edge.id()
                    ),
                );
            }
        }
    }
}
