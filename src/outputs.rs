use crate::{document::EdgeDocument, edge::EdgeRecord, link_type::LinkType};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Write};

///
/// Write the edges of all `documents` as one YAML map keyed by document name.
///
pub fn render_documents(output: &mut impl Write, documents: &[EdgeDocument]) -> Result<()> {
    let map: BTreeMap<&str, &[EdgeRecord]> = documents
        .iter()
        .map(|d| (d.name.as_str(), d.edges.as_slice()))
        .collect();
    serde_yaml_ng::to_writer(output, &map).with_context(|| "Failed to write to output.")?;
    Ok(())
}

///
/// Write the edges of a single document as a YAML list.
///
pub fn render_edges(output: &mut impl Write, document: &EdgeDocument) -> Result<()> {
    serde_yaml_ng::to_writer(output, &document.edges)
        .with_context(|| format!("Failed to write edges of {}.", document.name))?;
    Ok(())
}

///
/// Print statistics
///
///
pub fn render_statistics(output: &mut impl Write, documents: &[EdgeDocument]) -> Result<()> {
    for document in documents {
        writeln!(output, "{}", document.name)?;
        writeln!(output, "{}", "=".repeat(document.name.len()))?;
        writeln!(output, "Number of nodes:        {}", document.node_ids.len())?;
        writeln!(output, "Number of edges:        {}", document.edges.len())?;
        for link_type in LinkType::ALL {
            let count = document
                .edges
                .iter()
                .filter(|e| e.link_type() == Some(link_type))
                .count();
            writeln!(
                output,
                "  {:<22}{count}",
                format!("{}:", link_type.as_str())
            )?;
        }
        let unclassified = document
            .edges
            .iter()
            .filter(|e| e.link_type().is_none())
            .count();
        writeln!(output, "  {:<22}{unclassified}", "Unclassified:")?;
    }
    Ok(())
}
