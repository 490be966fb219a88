//! Project document loading.
//!
//! This module reads the XML project file into typed records: the profile's
//! frame rate, the producer definitions, and the playlist entries placed on
//! the timeline. Elements are collected in document order, which later fixes
//! the order extraction jobs are planned and run in.
//!
//! Only three element types are consumed; everything else in the document is
//! ignored. Missing or non-numeric attributes on a consumed element abort the
//! parse rather than surfacing later as lookup failures.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Frame-rate definition from the single `<profile>` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub frame_rate_num: f64,
    pub frame_rate_den: f64,
}

impl Profile {
    /// Frames per second, `frame_rate_num / frame_rate_den`.
    ///
    /// The denominator is validated as non-zero at parse time.
    #[must_use]
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate_num / self.frame_rate_den
    }
}

/// A named reference to a source media asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    /// Unique key within the document.
    pub id: String,
    /// Base filename plus extension, separated by the last `.`.
    pub name: String,
    /// Path or URI of the source media file.
    pub resource: String,
}

/// A placed instance of a producer on some track, with in/out frame bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// Producer id, optionally suffixed `_<track>` for secondary tracks.
    pub producer: String,
    pub in_frame: i64,
    pub out_frame: i64,
}

/// The parsed project document.
#[derive(Debug, Clone)]
pub struct Project {
    pub profile: Profile,
    pub producers: Vec<Producer>,
    pub entries: Vec<PlaylistEntry>,
}

impl Project {
    /// Reads and parses the project file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// Parses a project document from an XML string.
    pub fn parse(xml: &str) -> CoreResult<Self> {
        let doc = roxmltree::Document::parse(xml)
            .map_err(|e| CoreError::XmlParse(e.to_string()))?;

        let profile = parse_profile(&doc)?;

        let mut producers = Vec::new();
        let mut entries = Vec::new();
        for node in doc.descendants().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "producer" => producers.push(parse_producer(&node)?),
                "entry" => entries.push(parse_entry(&node)?),
                _ => {}
            }
        }

        log::debug!(
            "Parsed project: {} producer(s), {} playlist entry(s), frame rate {}",
            producers.len(),
            entries.len(),
            profile.frame_rate()
        );

        Ok(Project {
            profile,
            producers,
            entries,
        })
    }
}

fn parse_profile(doc: &roxmltree::Document) -> CoreResult<Profile> {
    let node = doc
        .descendants()
        .find(|n| n.has_tag_name("profile"))
        .ok_or_else(|| CoreError::InvalidProfile("no <profile> element in document".to_string()))?;

    let frame_rate_num = profile_rate(&node, "frame_rate_num")?;
    let frame_rate_den = profile_rate(&node, "frame_rate_den")?;
    if frame_rate_den == 0.0 {
        return Err(CoreError::InvalidProfile(
            "frame_rate_den must not be zero".to_string(),
        ));
    }

    Ok(Profile {
        frame_rate_num,
        frame_rate_den,
    })
}

fn profile_rate(node: &roxmltree::Node, attr: &str) -> CoreResult<f64> {
    let raw = node
        .attribute(attr)
        .ok_or_else(|| CoreError::InvalidProfile(format!("missing '{attr}' attribute")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::InvalidProfile(format!("'{attr}' is not numeric: '{raw}'")))
}

fn parse_producer(node: &roxmltree::Node) -> CoreResult<Producer> {
    let attr = |name: &str| -> CoreResult<String> {
        node.attribute(name).map(str::to_string).ok_or_else(|| {
            let id = node
                .attribute("id")
                .map_or_else(|| "<no id>".to_string(), |id| format!("'{id}'"));
            CoreError::MalformedProducer(format!(
                "producer {id} is missing the '{name}' attribute"
            ))
        })
    };

    Ok(Producer {
        id: attr("id")?,
        name: attr("name")?,
        resource: attr("resource")?,
    })
}

fn parse_entry(node: &roxmltree::Node) -> CoreResult<PlaylistEntry> {
    let producer = node
        .attribute("producer")
        .map(str::to_string)
        .ok_or_else(|| {
            CoreError::MalformedEntry("entry is missing the 'producer' attribute".to_string())
        })?;

    let frame = |name: &str| -> CoreResult<i64> {
        let raw = node.attribute(name).ok_or_else(|| {
            CoreError::MalformedEntry(format!(
                "entry for producer '{producer}' is missing the '{name}' attribute"
            ))
        })?;
        raw.trim().parse::<i64>().map_err(|_| {
            CoreError::MalformedEntry(format!(
                "entry for producer '{producer}' has a non-integer '{name}': '{raw}'"
            ))
        })
    };

    let in_frame = frame("in")?;
    let out_frame = frame("out")?;
    Ok(PlaylistEntry {
        producer,
        in_frame,
        out_frame,
    })
}
