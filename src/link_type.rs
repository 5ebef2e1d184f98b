use crate::diagnostics::Diagnostics;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

///
/// Semantic relationship between two pieces of information.
///
/// Edges that are not information links have no link type at all,
/// which is modelled as `Option<LinkType>::None`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LinkType {
    #[serde(rename = "SUPPLEMENT")]
    Supplement,
    #[serde(rename = "SUPPORT")]
    Support,
    #[serde(rename = "STRONG_SUPPORT")]
    StrongSupport,
    #[serde(rename = "ATTACK")]
    Attack,
    #[serde(rename = "STRONG_ATTACK")]
    StrongAttack,
    #[serde(rename = "IMPLICATION")]
    Implication,
    /// Implication with the source negated.
    #[serde(rename = "SNEGATED_IMPLICATION")]
    SNegatedImplication,
    /// Implication with the target negated.
    #[serde(rename = "TNEGATED_IMPLICATION")]
    TNegatedImplication,
}

impl LinkType {
    pub const ALL: [LinkType; 8] = [
        LinkType::Supplement,
        LinkType::Support,
        LinkType::StrongSupport,
        LinkType::Attack,
        LinkType::StrongAttack,
        LinkType::Implication,
        LinkType::SNegatedImplication,
        LinkType::TNegatedImplication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Supplement => "SUPPLEMENT",
            LinkType::Support => "SUPPORT",
            LinkType::StrongSupport => "STRONG_SUPPORT",
            LinkType::Attack => "ATTACK",
            LinkType::StrongAttack => "STRONG_ATTACK",
            LinkType::Implication => "IMPLICATION",
            LinkType::SNegatedImplication => "SNEGATED_IMPLICATION",
            LinkType::TNegatedImplication => "TNEGATED_IMPLICATION",
        }
    }
}

impl Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Visual style of an edge as far as classification needs it.
///
/// Each query may fail if the underlying style information is missing.
/// Queries are only made when the decision needs them.
///
pub trait EdgeStyle {
    fn target_arrow(&self) -> Result<&str>;
    fn source_arrow(&self) -> Result<&str>;
    fn is_dashed(&self) -> Result<bool>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetArrow {
    Circle,
    CrowsFoot,
    Cross,
    Concave,
    Dash,
    Plain,
}

// New arrowheads go here and into the match in `classify`.
const TARGET_ARROWS: &[(&str, TargetArrow)] = &[
    ("white_circle", TargetArrow::Circle),
    ("transparent_circle", TargetArrow::Circle),
    ("circle", TargetArrow::Circle),
    ("crows_foot_many", TargetArrow::CrowsFoot),
    ("cross", TargetArrow::Cross),
    ("concave", TargetArrow::Concave),
    ("dash", TargetArrow::Dash),
    ("standard", TargetArrow::Plain),
    ("none", TargetArrow::Plain),
];

const NEGATING_TAIL: &str = "dash";

fn lookup_target_arrow(shape: &str) -> Option<TargetArrow> {
    TARGET_ARROWS
        .iter()
        .find(|(name, _)| *name == shape)
        .map(|(_, arrow)| *arrow)
}

///
/// Determine the link type of edge `edge_id` from its style.
///
/// The target arrowhead decides; line style and arrow tail only refine
/// support, attack and implication.
/// An unknown arrowhead is reported as warning and yields `None`.
///
pub fn classify(
    diag: &mut Diagnostics,
    document: Option<&str>,
    edge_id: &str,
    style: &impl EdgeStyle,
) -> Result<Option<LinkType>> {
    let shape = style.target_arrow()?;
    let Some(arrow) = lookup_target_arrow(shape) else {
        diag.add_warning(
            document,
            format!("E01: Edge {edge_id} has unrecognized arrowhead shape {shape}."),
        );
        return Ok(None);
    };
    let link_type = match arrow {
        TargetArrow::Circle => Some(LinkType::Supplement),
        TargetArrow::CrowsFoot => Some(if style.is_dashed()? {
            LinkType::Support
        } else {
            LinkType::StrongSupport
        }),
        TargetArrow::Cross => Some(if style.is_dashed()? {
            LinkType::Attack
        } else {
            LinkType::StrongAttack
        }),
        TargetArrow::Concave => Some(if style.source_arrow()? == NEGATING_TAIL {
            LinkType::SNegatedImplication
        } else {
            LinkType::Implication
        }),
        TargetArrow::Dash => Some(LinkType::TNegatedImplication),
        TargetArrow::Plain => None,
    };
    Ok(link_type)
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::anyhow;

    ///
    /// Style double; `None` entries fail when queried.
    ///
    struct TestStyle {
        target: Option<&'static str>,
        source: Option<&'static str>,
        dashed: Option<bool>,
    }

    impl EdgeStyle for TestStyle {
        fn target_arrow(&self) -> Result<&str> {
            self.target.ok_or_else(|| anyhow!("no target arrow"))
        }

        fn source_arrow(&self) -> Result<&str> {
            self.source.ok_or_else(|| anyhow!("no source arrow"))
        }

        fn is_dashed(&self) -> Result<bool> {
            self.dashed.ok_or_else(|| anyhow!("no line style"))
        }
    }

    fn style(target: &'static str, source: &'static str, dashed: bool) -> TestStyle {
        TestStyle {
            target: Some(target),
            source: Some(source),
            dashed: Some(dashed),
        }
    }

    fn classify_quiet(style: &TestStyle) -> Result<Option<LinkType>> {
        let mut d = Diagnostics::default();
        let res = classify(&mut d, None, "e1", style);
        assert_eq!(d.messages.len(), 0);
        res
    }

    #[test]
    fn circles_are_supplements() -> Result<()> {
        for target in ["white_circle", "transparent_circle", "circle"] {
            for source in ["none", "dash", "standard"] {
                for dashed in [true, false] {
                    assert_eq!(
                        classify_quiet(&style(target, source, dashed))?,
                        Some(LinkType::Supplement)
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn crows_foot_depends_on_dash() -> Result<()> {
        assert_eq!(
            classify_quiet(&style("crows_foot_many", "none", true))?,
            Some(LinkType::Support)
        );
        assert_eq!(
            classify_quiet(&style("crows_foot_many", "none", false))?,
            Some(LinkType::StrongSupport)
        );
        assert_eq!(
            classify_quiet(&style("crows_foot_many", "dash", false))?,
            Some(LinkType::StrongSupport)
        );
        Ok(())
    }

    #[test]
    fn cross_depends_on_dash() -> Result<()> {
        assert_eq!(
            classify_quiet(&style("cross", "none", true))?,
            Some(LinkType::Attack)
        );
        assert_eq!(
            classify_quiet(&style("cross", "none", false))?,
            Some(LinkType::StrongAttack)
        );
        Ok(())
    }

    #[test]
    fn concave_depends_on_tail() -> Result<()> {
        assert_eq!(
            classify_quiet(&style("concave", "dash", false))?,
            Some(LinkType::SNegatedImplication)
        );
        for source in ["none", "standard", "cross", "dash_dot"] {
            assert_eq!(
                classify_quiet(&style("concave", source, true))?,
                Some(LinkType::Implication)
            );
        }
        Ok(())
    }

    #[test]
    fn dash_negates_target() -> Result<()> {
        for source in ["none", "dash"] {
            for dashed in [true, false] {
                assert_eq!(
                    classify_quiet(&style("dash", source, dashed))?,
                    Some(LinkType::TNegatedImplication)
                );
            }
        }
        Ok(())
    }

    #[test]
    fn plain_arrows() -> Result<()> {
        assert_eq!(classify_quiet(&style("standard", "none", false))?, None);
        assert_eq!(classify_quiet(&style("none", "none", true))?, None);
        Ok(())
    }

    #[test]
    fn unknown_shape() -> Result<()> {
        let mut d = Diagnostics::default();
        let res = classify(
            &mut d,
            Some("doc.graphml"),
            "e7",
            &style("unknown_shape_xyz", "none", true),
        )?;
        assert_eq!(res, None);
        assert_eq!(d.warnings, 1);
        assert_eq!(d.errors, 0);
        assert_eq!(d.messages[0].document, Some("doc.graphml".to_owned()));
        assert_eq!(
            d.messages[0].msg,
            "E01: Edge e7 has unrecognized arrowhead shape unknown_shape_xyz."
        );
        Ok(())
    }

    #[test]
    fn only_needed_styles_are_queried() -> Result<()> {
        let lazy = |target: &'static str| TestStyle {
            target: Some(target),
            source: None,
            dashed: None,
        };
        assert_eq!(
            classify_quiet(&lazy("circle"))?,
            Some(LinkType::Supplement)
        );
        assert_eq!(
            classify_quiet(&lazy("dash"))?,
            Some(LinkType::TNegatedImplication)
        );
        assert_eq!(classify_quiet(&lazy("standard"))?, None);
        assert!(classify_quiet(&lazy("cross")).is_err());
        assert!(classify_quiet(&lazy("crows_foot_many")).is_err());
        assert!(classify_quiet(&lazy("concave")).is_err());
        Ok(())
    }

    #[test]
    fn missing_target_arrow() {
        let res = classify_quiet(&TestStyle {
            target: None,
            source: Some("none"),
            dashed: Some(false),
        });
        assert_eq!(res.unwrap_err().to_string(), "no target arrow");
    }

    #[test]
    fn idempotent() -> Result<()> {
        let s = style("cross", "dash", true);
        assert_eq!(classify_quiet(&s)?, classify_quiet(&s)?);
        Ok(())
    }

    #[test]
    fn names() {
        let names: Vec<String> = LinkType::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            names,
            [
                "SUPPLEMENT",
                "SUPPORT",
                "STRONG_SUPPORT",
                "ATTACK",
                "STRONG_ATTACK",
                "IMPLICATION",
                "SNEGATED_IMPLICATION",
                "TNEGATED_IMPLICATION"
            ]
        );
    }

    #[test]
    fn serialized_names() -> Result<()> {
        for lt in LinkType::ALL {
            assert_eq!(serde_yaml_ng::to_string(&lt)?, format!("{}\n", lt.as_str()));
        }
        Ok(())
    }
}
