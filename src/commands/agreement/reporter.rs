use super::*;

/// Which judgment a disagreement listing compares, and over which pairs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DisagreementKind {
    /// Every shared pair, compared on `affixal`.
    Affixal,
    /// Pairs both annotators call affixal, compared on `directness`.
    Directness,
    /// Pairs both annotators call affixal, whatever their directness,
    /// compared on `subtype`.
    Subtype,
}

impl DisagreementKind {
    pub const ALL: [DisagreementKind; 3] = [
        DisagreementKind::Affixal,
        DisagreementKind::Directness,
        DisagreementKind::Subtype,
    ];

    pub fn field(self) -> &'static str {
        match self {
            Self::Affixal => "affixal",
            Self::Directness => "directness",
            Self::Subtype => "subtype",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Affixal => "Disagreements on affixal",
            Self::Directness => "Disagreements on direct/indirect",
            Self::Subtype => "Disagreements on subtype",
        }
    }

    fn metric(self) -> Metric {
        match self {
            Self::Affixal => Metric::Affixal,
            Self::Directness => Metric::Directness,
            Self::Subtype => Metric::SubtypesAll,
        }
    }
}

pub fn find_disagreements(
    kind: DisagreementKind,
    a: &AnnotationSet,
    b: &AnnotationSet,
) -> Vec<Disagreement> {
    let metric = kind.metric();

    shared_records(a, b)
        .filter(|(record_a, record_b)| metric.includes(record_a, record_b))
        .filter(|(record_a, record_b)| metric.label(record_a) != metric.label(record_b))
        .map(|(record_a, record_b)| Disagreement {
            pair: record_a.key(),
            value_a: metric.label(record_a).to_string(),
            value_b: metric.label(record_b).to_string(),
            subtypes: (kind == DisagreementKind::Directness)
                .then(|| (record_a.subtype.clone(), record_b.subtype.clone())),
        })
        .collect()
}

pub fn collect_disagreements(a: &AnnotationSet, b: &AnnotationSet) -> Vec<DisagreementReport> {
    DisagreementKind::ALL
        .iter()
        .map(|kind| {
            let items = find_disagreements(*kind, a, b);
            info!(field = kind.field(), count = items.len(), "collected disagreements");
            DisagreementReport {
                field: kind.field().to_string(),
                description: kind.description().to_string(),
                count: items.len(),
                items,
            }
        })
        .collect()
}
