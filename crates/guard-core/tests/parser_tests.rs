//! Tests for the region parser state machine

use guard_core::{
    CommentLexicon, DefaultOracle, Error, RegionParser, Segment,
};
use pretty_assertions::assert_eq;

fn c_parser() -> RegionParser {
    RegionParser::new(CommentLexicon::c_like(), Box::new(DefaultOracle))
}

fn hash_parser() -> RegionParser {
    RegionParser::new(CommentLexicon::hash(), Box::new(DefaultOracle))
}

fn xml_parser() -> RegionParser {
    RegionParser::new(CommentLexicon::xml(), Box::new(DefaultOracle))
}

#[test]
fn plain_text_parses_to_one_plain_segment() {
    let input = "no markers here\njust code();\n";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.segments().len(), 1);
    assert!(matches!(doc.segments()[0], Segment::Plain { .. }));
    assert_eq!(doc.contents(), input);
}

#[test]
fn single_region_with_line_comment_markers() {
    let input = "head\n// [[region:A]]\nbody\n// [[end]]\ntail\n";
    let doc = c_parser().parse(input).unwrap();

    let region = doc.region("A").unwrap();
    assert_eq!(region.start_marker, "// [[region:A]]");
    assert_eq!(region.end_marker, "// [[end]]");
    assert_eq!(region.content, "\nbody\n");
    assert_eq!(&input[region.span.clone()], region.text());
    assert_eq!(doc.contents(), input);
}

#[test]
fn region_with_multiline_comment_markers() {
    let input = "before /* [[region:X]] */inside/* [[end]] */ after";
    let doc = c_parser().parse(input).unwrap();

    let region = doc.region("X").unwrap();
    assert_eq!(region.start_marker, "/* [[region:X]] */");
    assert_eq!(region.content, "inside");
    assert_eq!(doc.contents(), input);
}

#[test]
fn xml_comment_markers() {
    let input = "<a>\n<!-- [[region:head]] -->\n<b/>\n<!-- [[end]] -->\n</a>\n";
    let doc = xml_parser().parse(input).unwrap();

    assert_eq!(doc.region("head").unwrap().content, "\n<b/>\n");
    assert_eq!(doc.contents(), input);
}

#[test]
fn non_marker_comments_pass_through_untouched() {
    let input = "// ordinary comment\ncode();\n/* block comment */\n";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.regions().count(), 0);
    assert_eq!(doc.contents(), input);
}

#[test]
fn non_marker_comment_inside_region_is_captured_as_content() {
    let input = "// [[region:A]]\n// a note kept by hand\ncode();\n// [[end]]";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(
        doc.region("A").unwrap().content,
        "\n// a note kept by hand\ncode();\n"
    );
    assert_eq!(doc.contents(), input);
}

#[test]
fn sequential_regions_in_one_file() {
    let input = "\
# [[region:one]]
first
# [[end]]
between
# [[region:two]]
second
# [[end]]
";
    let doc = hash_parser().parse(input).unwrap();

    assert_eq!(doc.regions().count(), 2);
    assert_eq!(doc.region("one").unwrap().content, "\nfirst\n");
    assert_eq!(doc.region("two").unwrap().content, "\nsecond\n");
    assert_eq!(doc.contents(), input);
}

#[test]
fn end_marker_may_repeat_id() {
    let input = "// [[region:A]]\nbody\n// [[end:A]]";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.region("A").unwrap().end_marker, "// [[end:A]]");
}

#[test]
fn line_comment_marker_terminated_by_eof() {
    let input = "// [[region:A]]\nbody\n// [[end]]";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.region("A").unwrap().content, "\nbody\n");
    assert_eq!(doc.contents(), input);
}

#[test]
fn crlf_line_endings_round_trip() {
    let input = "// [[region:A]]\r\nbody\r\n// [[end]]\r\n";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.region("A").unwrap().content, "\r\nbody\r\n");
    assert_eq!(doc.contents(), input);
}

#[test]
fn unterminated_region_is_an_error() {
    let err = c_parser().parse("// [[region:B]]\nbody").unwrap_err();
    assert!(matches!(err, Error::MalformedRegion { .. }));
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn end_marker_without_open_region_is_an_error() {
    let err = c_parser().parse("code();\n// [[end]]\n").unwrap_err();
    assert!(matches!(err, Error::MalformedRegion { .. }));
}

#[test]
fn mismatched_end_id_is_an_error() {
    let input = "// [[region:A]]\nbody\n// [[end:B]]";
    let err = c_parser().parse(input).unwrap_err();
    assert!(matches!(err, Error::MalformedRegion { .. }));
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn start_marker_inside_open_region_is_an_error() {
    let input = "// [[region:A]]\n// [[region:B]]\n// [[end]]";
    let err = c_parser().parse(input).unwrap_err();
    assert!(matches!(err, Error::MalformedRegion { .. }));
}

#[test]
fn empty_input_parses_to_empty_document() {
    let doc = c_parser().parse("").unwrap();
    assert!(doc.segments().is_empty());
    assert_eq!(doc.contents(), "");
}

#[test]
fn empty_region_body() {
    let input = "/* [[region:A]] *//* [[end]] */";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.region("A").unwrap().content, "");
    assert_eq!(doc.contents(), input);
}

#[test]
fn dangling_block_comment_start_is_plain_text() {
    let input = "code(); /* not closed";
    let doc = c_parser().parse(input).unwrap();

    assert_eq!(doc.regions().count(), 0);
    assert_eq!(doc.contents(), input);
}

#[test]
fn longest_start_token_wins_over_shorter_prefix() {
    // "<!--" must win over a hypothetical "<" entry declared first
    let lexicon = CommentLexicon::new()
        .with_comment("<", ">")
        .with_comment("<!--", "-->");
    let parser = RegionParser::new(lexicon, Box::new(DefaultOracle));

    let input = "<!-- [[region:A]] -->x<!-- [[end]] -->";
    let doc = parser.parse(input).unwrap();

    assert_eq!(doc.region("A").unwrap().start_marker, "<!-- [[region:A]] -->");
    assert_eq!(doc.contents(), input);
}
