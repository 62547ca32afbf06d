use super::*;

/// Cohen's kappa for two raters over the same items.
///
/// Counts stay integral until the final division, so swapping the raters
/// yields a bit-identical value. Returns NaN when chance agreement is 1.
pub fn cohen_kappa(metric: &str, left: &[&str], right: &[&str]) -> Result<f64, AnnotationError> {
    if left.len() != right.len() {
        return Err(AnnotationError::LengthMismatch {
            metric: metric.to_string(),
            left: left.len(),
            right: right.len(),
        });
    }
    if left.is_empty() {
        return Err(AnnotationError::InsufficientData {
            metric: metric.to_string(),
        });
    }

    let n = left.len() as u64;
    let observed = left
        .iter()
        .zip(right)
        .filter(|(l, r)| l == r)
        .count() as u64;

    let left_counts = label_counts(left);
    let right_counts = label_counts(right);
    let chance: u64 = left_counts
        .iter()
        .map(|(label, count)| count * right_counts.get(label).copied().unwrap_or(0))
        .sum();

    let total = n * n;
    if chance == total {
        return Ok(f64::NAN);
    }

    Ok(((observed * n) as f64 - chance as f64) / (total - chance) as f64)
}

fn label_counts<'a>(labels: &[&'a str]) -> HashMap<&'a str, u64> {
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(*label).or_insert(0) += 1;
    }
    counts
}

/// Cross-tabulates `left` (rows) against `right` (columns). Only labels that
/// occur on an axis get a row or column there.
pub fn confusion_matrix(left: &[&str], right: &[&str]) -> ConfusionMatrix {
    let rows = left.iter().copied().collect::<BTreeSet<&str>>();
    let columns = right.iter().copied().collect::<BTreeSet<&str>>();

    let mut cells = BTreeMap::<(&str, &str), usize>::new();
    for (l, r) in left.iter().zip(right) {
        *cells.entry((*l, *r)).or_insert(0) += 1;
    }

    let counts = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cells.get(&(*row, *column)).copied().unwrap_or(0))
                .collect::<Vec<usize>>()
        })
        .collect::<Vec<Vec<usize>>>();

    ConfusionMatrix {
        rows: rows.into_iter().map(ToOwned::to_owned).collect(),
        columns: columns.into_iter().map(ToOwned::to_owned).collect(),
        counts,
    }
}

/// Formats like a float repr: `nan`, `1.0`, `0.25`, and exponent form
/// (`1e-05`) outside `[1e-4, 1e16)`.
pub fn format_kappa(kappa: f64) -> String {
    let magnitude = kappa.abs();
    if kappa.is_nan() {
        "nan".to_string()
    } else if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format_exponent(kappa)
    } else if kappa.fract() == 0.0 {
        format!("{kappa:.1}")
    } else {
        format!("{kappa}")
    }
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
