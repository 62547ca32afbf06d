use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Metric {
    Affixal,
    Directness,
    SubtypesIndirect,
    SubtypesAll,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Affixal,
        Metric::Directness,
        Metric::SubtypesIndirect,
        Metric::SubtypesAll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Affixal => "affixal",
            Self::Directness => "directness",
            Self::SubtypesIndirect => "subtypes_indirect",
            Self::SubtypesAll => "subtypes_all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Affixal => "Agreement on affixal/non-affixal",
            Self::Directness => "Agreement on direct/indirect",
            Self::SubtypesIndirect => "Agreement on subtypes - indirect",
            Self::SubtypesAll => "Agreement on subtypes - all",
        }
    }

    pub fn confusion_title(self) -> Option<&'static str> {
        match self {
            Self::SubtypesIndirect => Some("Confusion matrix for subtypes (indirect only)"),
            Self::SubtypesAll => Some("Confusion matrix for subtypes (all - including NA=direct)"),
            _ => None,
        }
    }

    /// Whether a pair judged by both annotators takes part in this metric.
    pub fn includes(self, a: &AnnotationRecord, b: &AnnotationRecord) -> bool {
        match self {
            Self::Affixal => true,
            Self::Directness | Self::SubtypesAll => both_affixal(a, b),
            Self::SubtypesIndirect => both_affixal(a, b) && both_indirect(a, b),
        }
    }

    pub fn label(self, record: &AnnotationRecord) -> &str {
        match self {
            Self::Affixal => &record.affixal,
            Self::Directness => &record.directness,
            Self::SubtypesIndirect | Self::SubtypesAll => &record.subtype,
        }
    }
}

fn both_affixal(a: &AnnotationRecord, b: &AnnotationRecord) -> bool {
    a.affixal == AFFIXAL && b.affixal == AFFIXAL
}

fn both_indirect(a: &AnnotationRecord, b: &AnnotationRecord) -> bool {
    a.directness == INDIRECT && b.directness == INDIRECT
}

/// Pairs annotated in both sets, in the order of `a`.
pub fn shared_records<'a>(
    a: &'a AnnotationSet,
    b: &'a AnnotationSet,
) -> impl Iterator<Item = (&'a AnnotationRecord, &'a AnnotationRecord)> + 'a {
    a.iter()
        .filter_map(move |record_a| b.get(&record_a.key()).map(|record_b| (record_a, record_b)))
}

pub fn compute_agreement(
    metric: Metric,
    a: &AnnotationSet,
    b: &AnnotationSet,
) -> Result<AgreementResult, AnnotationError> {
    let (labels_a, labels_b): (Vec<&str>, Vec<&str>) = shared_records(a, b)
        .filter(|(record_a, record_b)| metric.includes(record_a, record_b))
        .map(|(record_a, record_b)| (metric.label(record_a), metric.label(record_b)))
        .unzip();

    let kappa = cohen_kappa(metric.as_str(), &labels_a, &labels_b)?;
    let matrix = metric
        .confusion_title()
        .map(|_| confusion_matrix(&labels_a, &labels_b));
    debug_assert!(matrix.as_ref().is_none_or(|m| m.total() == labels_a.len()));

    Ok(AgreementResult {
        n: labels_a.len(),
        kappa,
        confusion_matrix: matrix,
    })
}

pub fn compute_metrics(a: &AnnotationSet, b: &AnnotationSet) -> Result<Vec<MetricReport>> {
    let mut metrics = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let result = compute_agreement(metric, a, b)
            .with_context(|| format!("failed to compute {} agreement", metric.as_str()))?;
        info!(
            metric = metric.as_str(),
            n = result.n,
            kappa = result.kappa,
            "computed agreement"
        );
        metrics.push(MetricReport {
            metric: metric.as_str().to_string(),
            description: metric.description().to_string(),
            confusion_title: metric.confusion_title().map(ToOwned::to_owned),
            result,
        });
    }
    Ok(metrics)
}
