//!
//! Extract typed information links from yEd GraphML diagrams.
//!
//! The semantic type of a link is encoded purely visually in yEd: by the
//! shape of the target arrowhead, the arrow tail and the dash style of the
//! line. [`edge::parse_edge`] turns one `<edge>` element into an
//! [`edge::EdgeRecord`] and [`link_type::classify`] translates the styling
//! into a [`link_type::LinkType`].
//!

pub mod diagnostics;
pub mod document;
pub mod edge;
pub mod file_utils;
pub mod link_type;
pub mod outputs;
pub mod yed;
