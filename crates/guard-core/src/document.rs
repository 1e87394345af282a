//! Parsed document model

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A protected region delimited by marker comments.
///
/// The marker texts are kept verbatim so emitting
/// `start_marker + content + end_marker` round-trips the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedRegion {
    /// Identifier carried by the start marker; unique across the whole corpus
    pub id: String,
    /// Content strictly between the markers
    pub content: String,
    /// Literal start marker comment text
    pub start_marker: String,
    /// Literal end marker comment text
    pub end_marker: String,
    /// Byte range in the original source (including markers)
    pub span: Range<usize>,
}

impl MarkedRegion {
    /// Textual representation of the region, markers included.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.start_marker, self.content, self.end_marker)
    }
}

/// A contiguous span of a parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Raw text outside any region; every merge passes it through verbatim
    Plain { text: String },
    /// A protected region
    Region(MarkedRegion),
}

/// Ordered sequence of segments produced by one parse pass over one text.
/// Immutable once parsed; merges produce new text rather than mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate the marked regions in document order.
    pub fn regions(&self) -> impl Iterator<Item = &MarkedRegion> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Region(region) => Some(region),
            Segment::Plain { .. } => None,
        })
    }

    /// Look up a marked region by id.
    pub fn region(&self, id: &str) -> Option<&MarkedRegion> {
        self.regions().find(|region| region.id == id)
    }

    /// Reassemble the parsed text. Parsing is lossless: this equals the
    /// input the document was parsed from, byte for byte.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain { text } => out.push_str(text),
                Segment::Region(region) => {
                    out.push_str(&region.start_marker);
                    out.push_str(&region.content);
                    out.push_str(&region.end_marker);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, content: &str) -> MarkedRegion {
        MarkedRegion {
            id: id.to_string(),
            content: content.to_string(),
            start_marker: format!("// [[region:{id}]]"),
            end_marker: "// [[end]]".to_string(),
            span: 0..0,
        }
    }

    #[test]
    fn contents_concatenates_segments_in_order() {
        let doc = Document::new(vec![
            Segment::Plain {
                text: "head\n".into(),
            },
            Segment::Region(region("A", "\nbody\n")),
            Segment::Plain {
                text: "\ntail".into(),
            },
        ]);

        assert_eq!(
            doc.contents(),
            "head\n// [[region:A]]\nbody\n// [[end]]\ntail"
        );
    }

    #[test]
    fn region_lookup_by_id() {
        let doc = Document::new(vec![
            Segment::Region(region("A", "a")),
            Segment::Region(region("B", "b")),
        ]);

        assert_eq!(doc.region("B").unwrap().content, "b");
        assert!(doc.region("C").is_none());
        assert_eq!(doc.regions().count(), 2);
    }

    #[test]
    fn region_text_includes_markers() {
        let r = region("A", "\nx\n");
        assert_eq!(r.text(), "// [[region:A]]\nx\n// [[end]]");
    }
}
