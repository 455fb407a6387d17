//! # OpenStreetMap XML Loader
//!
//! Streams an `.osm` XML document and builds the point cache and path list.
//!
//! Only `<node>` and `<way>` elements directly below the root element are
//! read. Inside a way, `<nd ref>` and `<tag k v>` children are collected in
//! document order. Node tags, relations and any other elements are skipped.

use crate::error::{SourceError, SourceResult};
use crate::SourceModel;
use osm2dxf_core::{GeoPoint, NodeId, Path, PointCache, Tag, TagQuery};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{debug, info};

/// Depth of `<node>` and `<way>` below the document root
const ENTITY_DEPTH: usize = 2;
/// Depth of `<nd>` and `<tag>` inside a way
const MEMBER_DEPTH: usize = 3;

/// Map extract loaded from OpenStreetMap XML
#[derive(Debug, Default)]
pub struct OsmDocument {
    points: PointCache,
    paths: Vec<Path>,
}

impl OsmDocument {
    /// Load a document from a file path.
    ///
    /// The file handle is released before this returns, on success or error.
    pub fn open(path: impl AsRef<std::path::Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} nodes and {} ways from {}",
            document.points.len(),
            document.paths.len(),
            path.display()
        );
        Ok(document)
    }

    /// Parse a document held in memory
    pub fn parse_str(content: &str) -> SourceResult<Self> {
        Self::from_reader(content.as_bytes())
    }

    /// Parse a document from any buffered reader
    pub fn from_reader<R: BufRead>(source: R) -> SourceResult<Self> {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);

        let mut builder = DocumentBuilder::default();
        let mut buf = Vec::new();
        let mut depth = 0usize;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|source| SourceError::Xml {
                    position: reader.buffer_position() as u64,
                    source,
                })?;

            let position = reader.buffer_position() as u64;
            match event {
                Event::Start(ref element) => {
                    depth += 1;
                    builder.open_element(element, depth, position)?;
                }
                Event::Empty(ref element) => {
                    builder.open_element(element, depth + 1, position)?;
                    builder.close_element(element.name().as_ref(), depth + 1);
                }
                Event::End(ref element) => {
                    builder.close_element(element.name().as_ref(), depth);
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        debug!(
            "Parsed {} nodes and {} ways",
            builder.points.len(),
            builder.paths.len()
        );

        Ok(Self {
            points: builder.points,
            paths: builder.paths,
        })
    }

    /// All paths in source order
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}

impl SourceModel for OsmDocument {
    fn points(&self) -> &PointCache {
        &self.points
    }

    fn paths_with_tag(&self, query: &TagQuery) -> Vec<&Path> {
        self.paths.iter().filter(|path| query.matches(path)).collect()
    }
}

/// Accumulates model values while the XML stream is read
#[derive(Default)]
struct DocumentBuilder {
    points: PointCache,
    paths: Vec<Path>,
    current_way: Option<Path>,
}

impl DocumentBuilder {
    /// `position` is the stream offset just past `element`
    fn open_element(
        &mut self,
        element: &BytesStart<'_>,
        depth: usize,
        position: u64,
    ) -> SourceResult<()> {
        match (depth, element.name().as_ref()) {
            (ENTITY_DEPTH, b"node") => self.read_node(element, position),
            (ENTITY_DEPTH, b"way") => {
                let attrs = Attributes::read(element, position)?;
                let id = attrs.required("way", "id", "?")?;
                self.current_way = Some(Path::new(id));
                Ok(())
            }
            (MEMBER_DEPTH, b"nd") => {
                if let Some(way) = self.current_way.as_mut() {
                    let attrs = Attributes::read(element, position)?;
                    let node_ref = attrs.required("nd", "ref", &way.id)?;
                    way.refs.push(NodeId::from(node_ref));
                }
                Ok(())
            }
            (MEMBER_DEPTH, b"tag") => {
                if let Some(way) = self.current_way.as_mut() {
                    let attrs = Attributes::read(element, position)?;
                    let key = attrs.required("tag", "k", &way.id)?;
                    let value = attrs.required("tag", "v", &way.id)?;
                    way.tags.push(Tag::new(key, value));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn close_element(&mut self, name: &[u8], depth: usize) {
        if depth == ENTITY_DEPTH && name == b"way" {
            if let Some(way) = self.current_way.take() {
                self.paths.push(way);
            }
        }
    }

    fn read_node(&mut self, element: &BytesStart<'_>, position: u64) -> SourceResult<()> {
        let attrs = Attributes::read(element, position)?;
        let id = attrs.required("node", "id", "?")?;
        let lat = attrs.number("node", "lat", &id)?;
        let lon = attrs.number("node", "lon", &id)?;

        let point = GeoPoint::new(&id, lat, lon)?;
        self.points.insert(NodeId::from(id), point);
        Ok(())
    }
}

/// Unescaped attributes of a single element
struct Attributes(Vec<(Vec<u8>, String)>);

impl Attributes {
    fn read(element: &BytesStart<'_>, position: u64) -> SourceResult<Self> {
        let mut values = Vec::new();
        for attr in element.attributes() {
            let attr = attr.map_err(|err| SourceError::Xml {
                position,
                source: quick_xml::Error::from(err),
            })?;
            let value = attr.unescape_value().map_err(|source| SourceError::Xml {
                position,
                source,
            })?;
            values.push((attr.key.as_ref().to_vec(), value.into_owned()));
        }
        Ok(Self(values))
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.as_slice() == name.as_bytes())
            .map(|(_, value)| value.as_str())
    }

    fn required(
        &self,
        element: &'static str,
        attribute: &'static str,
        id: &str,
    ) -> SourceResult<String> {
        self.get(attribute)
            .map(str::to_string)
            .ok_or_else(|| SourceError::MissingAttribute {
                element,
                attribute,
                id: id.to_string(),
            })
    }

    fn number(&self, element: &'static str, attribute: &'static str, id: &str) -> SourceResult<f64> {
        let raw = self.required(element, attribute, id)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| SourceError::InvalidNumber {
                element,
                attribute,
                id: id.to_string(),
                value: raw.clone(),
            })
    }
}
