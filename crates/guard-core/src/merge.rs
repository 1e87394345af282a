//! Merge engines reconciling fresh output with previously captured regions
//!
//! Both merges are pure: the result depends only on the two inputs, and
//! every marker opened in the output is closed exactly once. Marker comment
//! text always comes from the fresh/template document, so regenerated marker
//! syntax wins while hand-edited region bodies survive.

use crate::document::{Document, Segment};
use crate::pool::RegionPool;

/// Forward merge: emit `fresh` with pooled content substituted into every
/// region whose id is pooled.
///
/// Regions absent from the pool keep the freshly generated content — the
/// first generation of a region seeds what later runs will preserve.
pub fn merge(fresh: &Document, pool: &RegionPool) -> String {
    let mut out = String::new();
    for segment in fresh.segments() {
        match segment {
            Segment::Plain { text } => out.push_str(text),
            Segment::Region(region) => {
                out.push_str(&region.start_marker);
                match pool.get(&region.id) {
                    Some(pooled) => out.push_str(&pooled.content),
                    None => out.push_str(&region.content),
                }
                out.push_str(&region.end_marker);
            }
        }
    }
    out
}

/// Inverse merge: emit `template` with region content taken from `source`
/// where ids match.
///
/// Ids present only in `source` are dropped; the template dictates the
/// shape of the output.
pub fn fill_in(template: &Document, source: &Document) -> String {
    let mut out = String::new();
    for segment in template.segments() {
        match segment {
            Segment::Plain { text } => out.push_str(text),
            Segment::Region(region) => {
                out.push_str(&region.start_marker);
                match source.region(&region.id) {
                    Some(found) => out.push_str(&found.content),
                    None => out.push_str(&region.content),
                }
                out.push_str(&region.end_marker);
            }
        }
    }
    out
}
