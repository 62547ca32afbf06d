use super::*;

pub fn run(args: ExtractArgs) -> Result<()> {
    info!(wordnet_dir = %args.wordnet_dir.display(), "starting antonym extraction");

    let parser = WndbParser::new()?;
    let wordnet = parser
        .load(&args.wordnet_dir)
        .context("failed to load WordNet database")?;

    let relations = collect_antonyms(&wordnet, &args.pos_filter);

    ensure_parent_directory(&args.out)?;
    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    write_antonyms(&mut writer, &relations)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        path = %args.out.display(),
        relations = relations.len(),
        "wrote antonym export"
    );
    Ok(())
}
