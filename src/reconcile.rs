use crate::annotate::AnnotationMap;
use crate::asctb::ReferenceRow;
use crate::organs::MatchType;

// After the pass the map holds exactly the entries absent from the
// reference table; the return value is how many were removed.
pub fn reconcile(map: &mut AnnotationMap, rows: &[ReferenceRow], match_type: MatchType) -> usize {
    let mut removed = 0usize;

    for row in rows {
        for key in candidate_keys(row, match_type) {
            if key.is_empty() {
                continue;
            }
            if map.remove(key).is_some() {
                removed += 1;
                // A reference row accounts for at most one annotation entry,
                // even when both Name candidates would match.
                break;
            }
        }
    }

    removed
}

fn candidate_keys(row: &ReferenceRow, match_type: MatchType) -> Vec<&str> {
    match match_type {
        MatchType::Id => vec![row.ct_id.as_str()],
        MatchType::Name => vec![row.ct_name.as_str(), row.ct_label.as_str()],
    }
}
