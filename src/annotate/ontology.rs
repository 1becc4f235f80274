use once_cell::sync::Lazy;
use regex::Regex;

// Ontology references arrive as markdown links, e.g.
// "[CL:0000084](http://purl.obolibrary.org/obo/CL_0000084)". The greedy
// prefix means the last CL token in the cell wins.
static CL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*\]\(.*(CL_[0-9]+)\)").expect("valid CL link pattern"));

pub fn extract_ontology_id(field: &str) -> Option<String> {
    CL_LINK
        .captures(field)
        .map(|caps| caps[1].replacen('_', ":", 1))
}
