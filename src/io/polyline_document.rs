use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, warn};
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::error::{PersistenceError, Result};
use crate::geometry::Polyline;
use crate::math::Point3;

const ROOT: &str = "poly";
const POINT: &str = "point";

/// Integer XY snapshot of a polyline, stored as
/// `<poly closed="0|1"><point x=".." y=".."/>...</poly>`.
///
/// Coordinates are truncated toward zero and z is dropped, so a round trip
/// is lossy for anything but integer planar polylines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolylineDocument {
    pub closed: bool,
    pub points: Vec<(i64, i64)>,
}

impl PolylineDocument {
    /// Snapshots a polyline.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_polyline(polyline: &Polyline) -> Self {
        Self {
            closed: polyline.closed,
            points: polyline
                .points
                .iter()
                .map(|p| (p.x.trunc() as i64, p.y.trunc() as i64))
                .collect(),
        }
    }

    /// Rebuilds a planar polyline (z = 0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_polyline(&self) -> Polyline {
        let points = self
            .points
            .iter()
            .map(|&(x, y)| Point3::new(x as f64, y as f64, 0.0))
            .collect();
        Polyline::new(points, self.closed)
    }

    /// Builds the XML element tree.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut root = Element::new(ROOT);
        root.attributes
            .insert("closed".to_owned(), u8::from(self.closed).to_string());
        for &(x, y) in &self.points {
            let mut point = Element::new(POINT);
            point.attributes.insert("x".to_owned(), x.to_string());
            point.attributes.insert("y".to_owned(), y.to_string());
            root.children.push(XMLNode::Element(point));
        }
        root
    }

    /// Reads a document from an element tree.
    ///
    /// Missing or malformed coordinates read as 0; a missing `closed`
    /// attribute reads as open.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnexpectedRoot` if the root is not `<poly>`.
    pub fn from_element(root: &Element) -> Result<Self> {
        if root.name != ROOT {
            return Err(PersistenceError::UnexpectedRoot(root.name.clone()).into());
        }
        let closed = root.attributes.get("closed").is_some_and(|v| parse_flag(v));
        let points = root
            .children
            .iter()
            .filter_map(|node| match node {
                XMLNode::Element(e) if e.name == POINT => Some(e),
                _ => None,
            })
            .map(|e| (int_attribute(e, "x"), int_attribute(e, "y")))
            .collect();
        Ok(Self { closed, points })
    }

    /// Serializes to an indented XML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.to_element()
            .write_with_config(&mut buf, emitter_config())
            .map_err(PersistenceError::from)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a document from XML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed XML or the root is
    /// not `<poly>`.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = Element::parse(xml.as_bytes()).map_err(PersistenceError::from)?;
        Self::from_element(&root)
    }
}

fn emitter_config() -> EmitterConfig {
    EmitterConfig::new().perform_indent(true)
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.parse::<i64>().map_or(value.eq_ignore_ascii_case("true"), |v| v != 0)
}

fn int_attribute(element: &Element, name: &str) -> i64 {
    element
        .attributes
        .get(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Writes `polyline` to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn try_save(polyline: &Polyline, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(PersistenceError::from)?;
    PolylineDocument::from_polyline(polyline)
        .to_element()
        .write_with_config(BufWriter::new(file), emitter_config())
        .map_err(PersistenceError::from)?;
    Ok(())
}

/// Reads a polyline from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a polyline document.
pub fn try_load(path: impl AsRef<Path>) -> Result<Polyline> {
    let xml = fs::read_to_string(path.as_ref()).map_err(PersistenceError::from)?;
    Ok(PolylineDocument::parse(&xml)?.to_polyline())
}

/// Writes `polyline` to `path`. Failures are logged, never returned.
pub fn save(polyline: &Polyline, path: impl AsRef<Path>) {
    let path = path.as_ref();
    match try_save(polyline, path) {
        Ok(()) => debug!(path = %path.display(), points = polyline.len(), "saved polyline"),
        Err(err) => warn!(path = %path.display(), %err, "failed to save polyline"),
    }
}

/// Replaces `polyline` with the document at `path`.
///
/// If the document cannot be read, `polyline` is left untouched. Only a
/// `<poly>` root is accepted; `<point>` elements nested under some other
/// root are not searched for, so such a document also leaves `polyline`
/// untouched.
pub fn load(polyline: &mut Polyline, path: impl AsRef<Path>) {
    let path = path.as_ref();
    match try_load(path) {
        Ok(loaded) => *polyline = loaded,
        Err(err) => debug!(path = %path.display(), %err, "polyline not loaded"),
    }
}
