use super::*;

const ROW_AXIS: &str = "Subtypes_1";
const COLUMN_AXIS: &str = "Subtypes_2";

pub fn write_json_report<W: Write>(output: &mut W, report: &AgreementReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, report)
        .context("failed to serialize agreement json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub fn write_text_report<W: Write>(output: &mut W, report: &AgreementReport) -> Result<()> {
    for metric in &report.metrics {
        writeln!(
            output,
            "{} (Cohen's kappa): {} (n = {})",
            metric.description,
            format_kappa(metric.result.kappa),
            metric.result.n
        )?;

        if let (Some(title), Some(matrix)) =
            (&metric.confusion_title, &metric.result.confusion_matrix)
        {
            writeln!(output)?;
            writeln!(output, "{title}:")?;
            write!(output, "{}", render_confusion_matrix(matrix))?;
            writeln!(output)?;
        }
    }

    for section in &report.disagreements {
        writeln!(output)?;
        writeln!(output, "{}:", section.description)?;
        for item in &section.items {
            write!(output, "{} {} {}", item.pair, item.value_a, item.value_b)?;
            if let Some((subtype_a, subtype_b)) = &item.subtypes {
                write!(output, " {subtype_a} {subtype_b}")?;
            }
            writeln!(output)?;
        }
        writeln!(output, "{}", section.count)?;
    }

    output.flush()?;
    Ok(())
}

/// Renders a labeled grid, one line per row label.
pub fn render_confusion_matrix(matrix: &ConfusionMatrix) -> String {
    let corner = format!("{ROW_AXIS} \\ {COLUMN_AXIS}");
    let label_width = matrix
        .rows
        .iter()
        .map(|row| row.chars().count())
        .chain(std::iter::once(corner.chars().count()))
        .max()
        .unwrap_or(0);

    let column_widths = matrix
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            matrix
                .counts
                .iter()
                .map(|row| row[index].to_string().len())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<usize>>();

    let mut lines = Vec::with_capacity(matrix.rows.len() + 1);

    let mut header = format!("{corner:<label_width$}");
    for (column, &width) in matrix.columns.iter().zip(&column_widths) {
        header.push_str(&format!("  {column:>width$}"));
    }
    lines.push(header.trim_end().to_string());

    for (row, counts) in matrix.rows.iter().zip(&matrix.counts) {
        let mut line = format!("{row:<label_width$}");
        for (count, &width) in counts.iter().zip(&column_widths) {
            line.push_str(&format!("  {count:>width$}"));
        }
        lines.push(line);
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
