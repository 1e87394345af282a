//! Single-pass protected region parser

use crate::document::{Document, MarkedRegion, Segment};
use crate::error::{Error, Result};
use crate::lexicon::{CommentLexicon, CommentSyntax};
use crate::oracle::{Marker, RegionOracle};

/// Parser turning raw text into a [`Document`] of plain and region segments.
///
/// The lexicon decides where comments are, the oracle decides which comments
/// are region markers. At most one region is open at any point in the scan;
/// regions do not nest.
pub struct RegionParser {
    lexicon: CommentLexicon,
    oracle: Box<dyn RegionOracle>,
    inverse: bool,
}

/// Region currently being accumulated by the scan.
struct OpenRegion {
    id: String,
    start_marker: String,
    start: usize,
    content: String,
}

impl RegionParser {
    pub fn new(lexicon: CommentLexicon, oracle: Box<dyn RegionOracle>) -> Self {
        Self {
            lexicon,
            oracle,
            inverse: false,
        }
    }

    /// Mark this parser as inverse: instead of consulting a region pool, the
    /// merge step reads region content from the previously generated file.
    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub fn lexicon(&self) -> &CommentLexicon {
        &self.lexicon
    }

    /// Parse `text` into an ordered, lossless sequence of segments.
    ///
    /// Errors with [`Error::MalformedRegion`] on an end marker with no open
    /// region, an end marker whose id does not match the open region, a
    /// start marker while another region is open, or an open region left
    /// unterminated at end of input.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let mut segments = Vec::new();
        let mut plain = String::new();
        let mut open: Option<OpenRegion> = None;
        let mut pos = 0;

        while pos < text.len() {
            let Some((syntax, comment)) = self.scan_comment(&text[pos..]) else {
                // no comment starts here, consume one character
                match text[pos..].chars().next() {
                    Some(ch) => {
                        match &mut open {
                            Some(region) => region.content.push(ch),
                            None => plain.push(ch),
                        }
                        pos += ch.len_utf8();
                    }
                    None => break,
                }
                continue;
            };

            match self.oracle.classify(comment_body(syntax, comment)) {
                Marker::NotAMarker => {
                    // ordinary comment: flows into the surrounding segment
                    match &mut open {
                        Some(region) => region.content.push_str(comment),
                        None => plain.push_str(comment),
                    }
                }
                Marker::Start { id } => {
                    if let Some(region) = &open {
                        return Err(Error::malformed(
                            pos,
                            format!(
                                "start marker for region '{id}' while region '{}' is still open",
                                region.id
                            ),
                        ));
                    }
                    if !plain.is_empty() {
                        segments.push(Segment::Plain {
                            text: std::mem::take(&mut plain),
                        });
                    }
                    open = Some(OpenRegion {
                        id,
                        start_marker: comment.to_string(),
                        start: pos,
                        content: String::new(),
                    });
                }
                Marker::End { id } => {
                    let Some(region) = open.take() else {
                        return Err(Error::malformed(
                            pos,
                            "end marker with no open region".to_string(),
                        ));
                    };
                    if let Some(end_id) = &id
                        && *end_id != region.id
                    {
                        return Err(Error::malformed(
                            pos,
                            format!(
                                "end marker for region '{end_id}' does not match open region '{}'",
                                region.id
                            ),
                        ));
                    }
                    segments.push(Segment::Region(MarkedRegion {
                        id: region.id,
                        content: region.content,
                        start_marker: region.start_marker,
                        end_marker: comment.to_string(),
                        span: region.start..pos + comment.len(),
                    }));
                }
            }
            pos += comment.len();
        }

        if let Some(region) = open {
            return Err(Error::malformed(
                region.start,
                format!("unterminated protected region '{}'", region.id),
            ));
        }
        if !plain.is_empty() {
            segments.push(Segment::Plain { text: plain });
        }
        Ok(Document::new(segments))
    }

    /// Match a comment at the head of `input`, returning its syntax entry and
    /// full text. Line comments end before the line terminator; a multi-line
    /// comment without its end token is not a comment at all.
    fn scan_comment<'a>(&self, input: &'a str) -> Option<(&CommentSyntax, &'a str)> {
        let syntax = self.lexicon.match_at(input)?;
        let rest = &input[syntax.start.len()..];
        match &syntax.end {
            Some(end) => {
                let close = rest.find(end.as_str())?;
                Some((syntax, &input[..syntax.start.len() + close + end.len()]))
            }
            None => {
                let len = rest
                    .find(['\n', '\r'])
                    .map_or(input.len(), |i| syntax.start.len() + i);
                Some((syntax, &input[..len]))
            }
        }
    }
}

/// The comment text with its delimiter tokens stripped.
fn comment_body<'a>(syntax: &CommentSyntax, comment: &'a str) -> &'a str {
    let body = &comment[syntax.start.len()..];
    match &syntax.end {
        Some(end) => &body[..body.len() - end.len()],
        None => body,
    }
}
