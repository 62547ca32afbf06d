use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    pub pos_element: String,
    pub neg_element: String,
}

impl PairKey {
    pub fn new(pos_element: impl Into<String>, neg_element: impl Into<String>) -> Self {
        Self {
            pos_element: pos_element.into(),
            neg_element: neg_element.into(),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pos_element, self.neg_element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationRecord {
    pub pos_element: String,
    pub neg_element: String,
    pub affixal: String,
    pub directness: String,
    pub subtype: String,
    /// Columns beyond the five judged ones, in header order.
    pub extra: Vec<(String, String)>,
}

impl AnnotationRecord {
    pub fn key(&self) -> PairKey {
        PairKey::new(self.pos_element.clone(), self.neg_element.clone())
    }
}

/// One annotator's records keyed by pair, iterated in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationSet {
    records: Vec<AnnotationRecord>,
    index: HashMap<PairKey, usize>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record`, replacing (in place) any record with the same key.
    /// Returns the replaced record.
    pub fn insert(&mut self, record: AnnotationRecord) -> Option<AnnotationRecord> {
        let key = record.key();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, key: &PairKey) -> Option<&AnnotationRecord> {
        self.index.get(key).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, key: &PairKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationRecord> {
        self.records.iter()
    }
}

impl FromIterator<AnnotationRecord> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = AnnotationRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgreementResult {
    pub n: usize,
    /// NaN when chance agreement is 1; serialized as `null`.
    pub kappa: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confusion_matrix: Option<ConfusionMatrix>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disagreement {
    pub pair: PairKey,
    pub value_a: String,
    pub value_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtypes: Option<(String, String)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputFile {
    pub role: String,
    pub path: String,
    pub sha256: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricReport {
    pub metric: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confusion_title: Option<String>,
    #[serde(flatten)]
    pub result: AgreementResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisagreementReport {
    pub field: String,
    pub description: String,
    pub count: usize,
    pub items: Vec<Disagreement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgreementReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub inputs: Vec<InputFile>,
    pub shared_pair_count: usize,
    pub metrics: Vec<MetricReport>,
    pub disagreements: Vec<DisagreementReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntonymRelation {
    pub pos_element: String,
    pub neg_element: String,
    pub pos: String,
    pub pos_key: String,
    pub neg_key: String,
    pub pos_definition: String,
    pub neg_definition: String,
}

impl AntonymRelation {
    pub const HEADER: [&'static str; 7] = [
        "pos_element",
        "neg_element",
        "POS",
        "pos_key",
        "neg_key",
        "pos_definition",
        "neg_definition",
    ];

    pub fn fields(&self) -> [&str; 7] {
        [
            self.pos_element.as_str(),
            self.neg_element.as_str(),
            self.pos.as_str(),
            self.pos_key.as_str(),
            self.neg_key.as_str(),
            self.pos_definition.as_str(),
            self.neg_definition.as_str(),
        ]
    }
}
