use super::*;

/// The four WNDB data files, in the order synsets are walked.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DataFile {
    Adjective,
    Adverb,
    Noun,
    Verb,
}

impl DataFile {
    pub const ALL: [DataFile; 4] = [
        DataFile::Adjective,
        DataFile::Adverb,
        DataFile::Noun,
        DataFile::Verb,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Adjective => "data.adj",
            Self::Adverb => "data.adv",
            Self::Noun => "data.noun",
            Self::Verb => "data.verb",
        }
    }

    /// Satellites live in the adjective file.
    pub fn for_pos(pos: SynsetPos) -> Self {
        match pos {
            SynsetPos::Adjective | SynsetPos::AdjectiveSatellite => Self::Adjective,
            SynsetPos::Adverb => Self::Adverb,
            SynsetPos::Noun => Self::Noun,
            SynsetPos::Verb => Self::Verb,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SynsetId {
    pub file: DataFile,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lemma {
    pub name: String,
    pub lex_id: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub symbol: String,
    pub target: SynsetId,
    /// Zero-based source lemma; `None` for pointers between whole synsets.
    pub source_lemma: Option<usize>,
    pub target_lemma: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: SynsetId,
    pub pos: SynsetPos,
    pub lex_filenum: u8,
    pub lemmas: Vec<Lemma>,
    pub pointers: Vec<Pointer>,
    pub definition: String,
}

impl Synset {
    pub fn lemma_pointers<'a>(
        &'a self,
        lemma_index: usize,
        symbol: &'a str,
    ) -> impl Iterator<Item = &'a Pointer> + 'a {
        self.pointers.iter().filter(move |pointer| {
            pointer.symbol == symbol && pointer.source_lemma == Some(lemma_index)
        })
    }
}

/// All synsets of a WordNet database, in walk order.
#[derive(Debug, Default)]
pub struct WordNet {
    synsets: Vec<Synset>,
    index: HashMap<SynsetId, usize>,
}

impl WordNet {
    pub fn from_synsets(synsets: Vec<Synset>) -> Self {
        let index = synsets
            .iter()
            .enumerate()
            .map(|(slot, synset)| (synset.id, slot))
            .collect();
        Self { synsets, index }
    }

    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.index.get(&id).map(|&slot| &self.synsets[slot])
    }

    /// WordNet sense key, e.g. `unhappy%3:00:00::` or
    /// `glad%5:00:00:happy:00` for a satellite.
    pub fn sense_key(&self, synset: &Synset, lemma: &Lemma) -> String {
        let (head_name, head_id) = if synset.pos == SynsetPos::AdjectiveSatellite {
            self.satellite_head(synset)
                .map(|head| (head.name.clone(), format!("{:02}", head.lex_id)))
                .unwrap_or_default()
        } else {
            (String::new(), String::new())
        };

        format!(
            "{}%{}:{:02}:{:02}:{}:{}",
            lemma.name,
            synset.pos.sense_key_number(),
            synset.lex_filenum,
            lemma.lex_id,
            head_name,
            head_id
        )
        .to_lowercase()
    }

    fn satellite_head(&self, synset: &Synset) -> Option<&Lemma> {
        let head = synset
            .pointers
            .iter()
            .find(|pointer| pointer.symbol == SIMILAR_TO_POINTER)
            .and_then(|pointer| self.synset(pointer.target));

        if head.is_none() {
            warn!(offset = synset.id.offset, "satellite synset without a head synset");
        }
        head.and_then(|head| head.lemmas.first())
    }
}

pub struct WndbParser {
    syntactic_marker: Regex,
    quoted_example: Regex,
}

impl WndbParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            syntactic_marker: Regex::new(r"^(.*?)(\(.*\))?$")
                .context("failed to compile syntactic marker regex")?,
            quoted_example: Regex::new(r#"".*?""#)
                .context("failed to compile gloss example regex")?,
        })
    }

    pub fn load(&self, wordnet_dir: &Path) -> Result<WordNet> {
        let mut synsets = Vec::new();

        for file in DataFile::ALL {
            let path = wordnet_dir.join(file.file_name());
            if !path.exists() {
                bail!("WordNet data file missing: {}", path.display());
            }
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let parsed = self
                .parse_data_file(file, &text)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            info!(file = file.file_name(), synsets = parsed.len(), "parsed WordNet data file");
            synsets.extend(parsed);
        }

        Ok(WordNet::from_synsets(synsets))
    }

    pub fn parse_data_file(&self, file: DataFile, text: &str) -> Result<Vec<Synset>> {
        let mut synsets = Vec::new();

        for (index, line) in text.lines().enumerate() {
            // License header lines are indented.
            if line.is_empty() || line.starts_with(char::is_whitespace) {
                continue;
            }
            let synset = self
                .parse_synset_line(file, line)
                .with_context(|| format!("line {}", index + 1))?;
            synsets.push(synset);
        }

        Ok(synsets)
    }

    pub fn parse_synset_line(&self, file: DataFile, line: &str) -> Result<Synset> {
        let (columns, gloss) = line
            .split_once('|')
            .context("synset line has no gloss separator")?;
        let mut tokens = columns.split_whitespace();
        let mut next = |field: &str| {
            tokens
                .next()
                .with_context(|| format!("synset line ends before {field}"))
        };

        let offset = next("offset")?
            .parse::<u64>()
            .context("invalid synset offset")?;
        let lex_filenum = next("lex_filenum")?
            .parse::<u8>()
            .context("invalid lex_filenum")?;
        let ss_type = next("ss_type")?;
        let pos = SynsetPos::from_code(ss_type)
            .with_context(|| format!("unknown synset type: {ss_type}"))?;

        let lemma_count = u32::from_str_radix(next("w_cnt")?, 16).context("invalid w_cnt")?;
        let mut lemmas = Vec::with_capacity(lemma_count as usize);
        for _ in 0..lemma_count {
            let word = next("word")?;
            let lex_id = u8::from_str_radix(next("lex_id")?, 16).context("invalid lex_id")?;
            lemmas.push(Lemma {
                name: self.strip_syntactic_marker(word),
                lex_id,
            });
        }

        let pointer_count = next("p_cnt")?.parse::<u32>().context("invalid p_cnt")?;
        let mut pointers = Vec::with_capacity(pointer_count as usize);
        for _ in 0..pointer_count {
            let symbol = next("pointer_symbol")?.to_string();
            let target_offset = next("pointer offset")?
                .parse::<u64>()
                .context("invalid pointer offset")?;
            let target_code = next("pointer pos")?;
            let target_pos = SynsetPos::from_code(target_code)
                .with_context(|| format!("unknown pointer pos: {target_code}"))?;
            let (source_lemma, target_lemma) = parse_source_target(next("source/target")?)?;

            pointers.push(Pointer {
                symbol,
                target: SynsetId {
                    file: DataFile::for_pos(target_pos),
                    offset: target_offset,
                },
                source_lemma,
                target_lemma,
            });
        }

        Ok(Synset {
            id: SynsetId { file, offset },
            pos,
            lex_filenum,
            lemmas,
            pointers,
            definition: self.definition(gloss),
        })
    }

    fn strip_syntactic_marker(&self, word: &str) -> String {
        self.syntactic_marker
            .captures(word)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
            .unwrap_or(word)
            .to_string()
    }

    /// Gloss text with quoted usage examples removed.
    fn definition(&self, gloss: &str) -> String {
        self.quoted_example
            .replace_all(gloss, "")
            .trim()
            .trim_matches(|ch: char| ch == ';' || ch == ' ')
            .to_string()
    }
}

fn parse_source_target(raw: &str) -> Result<(Option<usize>, Option<usize>)> {
    if raw.len() != 4 || !raw.is_ascii() {
        bail!("invalid source/target field: {raw}");
    }
    let source = usize::from_str_radix(&raw[..2], 16)
        .with_context(|| format!("invalid source/target field: {raw}"))?;
    let target = usize::from_str_radix(&raw[2..], 16)
        .with_context(|| format!("invalid source/target field: {raw}"))?;

    Ok((source.checked_sub(1), target.checked_sub(1)))
}
