use super::*;

/// Collects one relation per antonym pair. A pair whose reverse was already
/// collected is skipped; a repeated pair overwrites the earlier relation but
/// keeps its position.
pub fn collect_antonyms(wordnet: &WordNet, pos_filter: &[SynsetPos]) -> Vec<AntonymRelation> {
    let mut relations: Vec<AntonymRelation> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut unresolved = 0_usize;

    for synset in wordnet.synsets() {
        if !pos_filter.is_empty() && !pos_filter.contains(&synset.pos) {
            continue;
        }

        for (lemma_index, lemma) in synset.lemmas.iter().enumerate() {
            for pointer in synset.lemma_pointers(lemma_index, ANTONYM_POINTER) {
                let Some((antonym_synset, antonym)) = resolve_target(wordnet, pointer) else {
                    unresolved += 1;
                    warn!(
                        lemma = %lemma.name,
                        target_offset = pointer.target.offset,
                        "antonym pointer does not resolve to a lemma"
                    );
                    continue;
                };

                let reversed = (antonym.name.clone(), lemma.name.clone());
                if positions.contains_key(&reversed) {
                    continue;
                }

                let relation = AntonymRelation {
                    pos_element: lemma.name.clone(),
                    neg_element: antonym.name.clone(),
                    pos: synset.pos.as_str().to_string(),
                    pos_key: wordnet.sense_key(synset, lemma),
                    neg_key: wordnet.sense_key(antonym_synset, antonym),
                    pos_definition: synset.definition.clone(),
                    neg_definition: antonym_synset.definition.clone(),
                };

                let pair = (lemma.name.clone(), antonym.name.clone());
                match positions.get(&pair) {
                    Some(&slot) => relations[slot] = relation,
                    None => {
                        positions.insert(pair, relations.len());
                        relations.push(relation);
                    }
                }
            }
        }
    }

    info!(
        relations = relations.len(),
        unresolved_pointers = unresolved,
        "collected antonym relations"
    );
    relations
}

fn resolve_target<'a>(wordnet: &'a WordNet, pointer: &Pointer) -> Option<(&'a Synset, &'a Lemma)> {
    let synset = wordnet.synset(pointer.target)?;
    let lemma = synset.lemmas.get(pointer.target_lemma?)?;
    Some((synset, lemma))
}

pub fn write_antonyms<W: Write>(writer: &mut W, relations: &[AntonymRelation]) -> Result<()> {
    tsv::write_row(writer, &AntonymRelation::HEADER).context("failed to write header row")?;
    for relation in relations {
        tsv::write_row(writer, &relation.fields()).with_context(|| {
            format!(
                "failed to write relation {} / {}",
                relation.pos_element, relation.neg_element
            )
        })?;
    }
    writer.flush().context("failed to flush antonym export")?;
    Ok(())
}
