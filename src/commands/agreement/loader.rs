use super::*;

const REQUIRED_COLUMNS: [&str; 5] = ["pos_element", "neg_element", "affixal", "directness", "subtype"];

/// Positions of the judged columns within an annotation file header.
#[derive(Debug)]
struct HeaderColumns {
    pos_element: usize,
    neg_element: usize,
    affixal: usize,
    directness: usize,
    subtype: usize,
    extra: Vec<(usize, String)>,
}

impl HeaderColumns {
    fn resolve(header: &[String]) -> Result<Self, String> {
        // Later duplicates of a column name shadow earlier ones.
        let [pos_element, neg_element, affixal, directness, subtype] = REQUIRED_COLUMNS
            .map(|name| header.iter().rposition(|column| column == name));

        let (
            Some(pos_element),
            Some(neg_element),
            Some(affixal),
            Some(directness),
            Some(subtype),
        ) = (pos_element, neg_element, affixal, directness, subtype)
        else {
            let found = [pos_element, neg_element, affixal, directness, subtype];
            let missing = REQUIRED_COLUMNS
                .iter()
                .zip(found)
                .filter(|(_, position)| position.is_none())
                .map(|(name, _)| *name)
                .collect::<Vec<&str>>();
            return Err(format!(
                "header is missing required column(s): {}",
                missing.join(", ")
            ));
        };

        let extra = header
            .iter()
            .enumerate()
            .filter(|(_, column)| {
                !REQUIRED_COLUMNS
                    .iter()
                    .any(|required| *required == column.as_str())
            })
            .map(|(index, column)| (index, column.clone()))
            .collect();

        Ok(Self {
            pos_element,
            neg_element,
            affixal,
            directness,
            subtype,
            extra,
        })
    }

    fn record(&self, fields: &[String]) -> AnnotationRecord {
        let field = |index: usize| fields.get(index).cloned().unwrap_or_default();

        AnnotationRecord {
            pos_element: field(self.pos_element),
            neg_element: field(self.neg_element),
            affixal: field(self.affixal),
            directness: field(self.directness),
            subtype: field(self.subtype),
            extra: self
                .extra
                .iter()
                .map(|(index, column)| (column.clone(), field(*index)))
                .collect(),
        }
    }
}

pub fn load_annotations(path: &Path) -> Result<AnnotationSet, AnnotationError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AnnotationError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnnotationError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_annotations(path, &text)
}

/// Builds an annotation set from tab-delimited text. The row right after
/// the header is always dropped, whatever it contains.
pub fn parse_annotations(
    path: &Path,
    text: &str,
) -> Result<AnnotationSet, AnnotationError> {
    let malformed = |reason: String| AnnotationError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows = tsv::parse_rows(text).map_err(|err| malformed(err.to_string()))?;
    let mut rows = rows.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| malformed("missing header row".to_string()))?;
    let columns = HeaderColumns::resolve(&header.fields).map_err(malformed)?;

    let mut annotations = AnnotationSet::new();
    for row in rows.skip(1) {
        let record = columns.record(&row.fields);
        if let Some(previous) = annotations.insert(record) {
            warn!(
                path = %path.display(),
                line = row.line,
                pair = %previous.key(),
                "duplicate annotation pair; later row replaces earlier one"
            );
        }
    }

    if annotations.is_empty() {
        warn!(path = %path.display(), "annotation file has no rows after the skipped first row");
    }

    Ok(annotations)
}
