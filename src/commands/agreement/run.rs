use super::*;

pub fn run(args: AgreementArgs) -> Result<()> {
    info!(
        annotator_a = %args.annotator_a.display(),
        annotator_b = %args.annotator_b.display(),
        "starting agreement evaluation"
    );

    let annotations_a = load_annotations(&args.annotator_a)
        .context("failed to load annotations of annotator A")?;
    info!(path = %args.annotator_a.display(), records = annotations_a.len(), "loaded annotations");

    let annotations_b = load_annotations(&args.annotator_b)
        .context("failed to load annotations of annotator B")?;
    info!(path = %args.annotator_b.display(), records = annotations_b.len(), "loaded annotations");

    let report = build_report(&args, &annotations_a, &annotations_b)?;

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote agreement report");
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        write_json_report(&mut output, &report)?;
    } else {
        write_text_report(&mut output, &report)?;
    }

    Ok(())
}

fn build_report(
    args: &AgreementArgs,
    annotations_a: &AnnotationSet,
    annotations_b: &AnnotationSet,
) -> Result<AgreementReport> {
    let shared_pair_count = shared_records(annotations_a, annotations_b).count();
    info!(shared_pairs = shared_pair_count, "intersected annotation sets");

    let metrics = compute_metrics(annotations_a, annotations_b)?;
    let disagreements = if args.skip_disagreements {
        Vec::new()
    } else {
        collect_disagreements(annotations_a, annotations_b)
    };

    let inputs = vec![
        input_file("annotator_a", &args.annotator_a, annotations_a)?,
        input_file("annotator_b", &args.annotator_b, annotations_b)?,
    ];

    Ok(AgreementReport {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        inputs,
        shared_pair_count,
        metrics,
        disagreements,
    })
}

fn input_file(role: &str, path: &Path, annotations: &AnnotationSet) -> Result<InputFile> {
    Ok(InputFile {
        role: role.to_string(),
        path: path.display().to_string(),
        sha256: sha256_file(path)?,
        record_count: annotations.len(),
    })
}
