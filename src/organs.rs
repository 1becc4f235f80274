#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Id,
    Name,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Id => "ID",
            MatchType::Name => "Name",
        }
    }

    // None when the row carries nothing usable under this strategy.
    pub fn annotation_entry(
        self,
        label: &str,
        ontology_id: Option<String>,
    ) -> Option<(String, String)> {
        match self {
            MatchType::Id => ontology_id.map(|id| (id, label.to_string())),
            MatchType::Name => Some((label.to_string(), ontology_id.unwrap_or_default())),
        }
    }

    // Inverse of annotation_entry: (label, ontology id).
    pub fn output_fields<'a>(self, key: &'a str, value: &'a str) -> (&'a str, &'a str) {
        match self {
            MatchType::Id => (value, key),
            MatchType::Name => (key, value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrganConfig {
    pub name: &'static str,
    pub annotations: &'static [&'static str],
    pub asctb_table: &'static str,
    pub match_type: MatchType,
}

const KIDNEY_ANNOTATIONS: &[&str] = &["kidney_l1", "kidney_l2", "kidney_l3"];
const BRAIN_ANNOTATIONS: &[&str] = &[
    "humanbrain_class",
    "humanbrain_cluster",
    "humanbrain_crossspecies",
    "humanbrain_subclass",
];
const LUNG_ANNOTATIONS: &[&str] = &["lung_l1", "lung_l2"];
const PANCREAS_ANNOTATIONS: &[&str] = &["pancreas"];
const BONE_MARROW_BLOOD_ANNOTATIONS: &[&str] = &[
    "pbmc1",
    "pbmc2",
    "pbmc3",
    "bonemarrow_l1",
    "bonemarrow_l2",
];

const BUILTIN_ORGANS: &[OrganConfig] = &[
    OrganConfig {
        name: "Kidney",
        annotations: KIDNEY_ANNOTATIONS,
        asctb_table: "Kidney_v1.1_DRAFT",
        match_type: MatchType::Id,
    },
    OrganConfig {
        name: "Brain",
        annotations: BRAIN_ANNOTATIONS,
        asctb_table: "Brain_v1.1_DRAFT",
        match_type: MatchType::Name,
    },
    OrganConfig {
        name: "Lung",
        annotations: LUNG_ANNOTATIONS,
        asctb_table: "Lung_v1.1_DRAFT",
        match_type: MatchType::Id,
    },
    OrganConfig {
        name: "Pancreas",
        annotations: PANCREAS_ANNOTATIONS,
        asctb_table: "Pancreas_v1.0_DRAFT",
        match_type: MatchType::Id,
    },
    OrganConfig {
        name: "Bone_Marrow_Blood",
        annotations: BONE_MARROW_BLOOD_ANNOTATIONS,
        asctb_table: "Bone Marrow_Blood_v1.1_DRAFT",
        match_type: MatchType::Id,
    },
];

pub fn builtin_organs() -> &'static [OrganConfig] {
    BUILTIN_ORGANS
}
