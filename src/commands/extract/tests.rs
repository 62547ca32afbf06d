#[cfg(test)]
use super::*;

#[cfg(test)]
mod tests {
    use super::{DataFile, SynsetPos, WndbParser, WordNet, collect_antonyms, write_antonyms};

    const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE\n  2 by Princeton University under the following license.\n";

    const ADJ: &str = "00001740 00 a 01 able 0 002 = 05207437 n 0000 ! 00002098 a 0101 | (usually followed by `to') having the necessary means; \"able to swim\"  \n\
00002098 00 a 01 unable 0 001 ! 00001740 a 0101 | (usually followed by `to') not having the necessary means; \"unable to get to town\"  \n\
00002312 00 s 01 glad(p) 0 002 & 00001740 a 0000 ! 00002098 a 0101 | feeling happy  \n";

    const NOUN: &str = "05000000 07 n 01 inability 0 001 ! 05207437 n 0101 | lack of ability  \n\
05207437 07 n 02 ability 0 power 0 001 ! 05000000 n 0101 | the quality of being able; \"the ability to swim\"  \n";

    const VERB: &str = "00010000 29 v 01 Dress 0 001 ! 00010100 v 0101 01 + 02 00 | put on clothes  \n\
00010100 29 v 01 undress 1 001 ! 00010000 v 0101 01 + 02 00 | remove clothes  \n";

    fn fixture_wordnet() -> WordNet {
        let parser = WndbParser::new().expect("parser should build");
        let mut synsets = Vec::new();
        for (file, body) in [
            (DataFile::Adjective, ADJ),
            (DataFile::Adverb, ""),
            (DataFile::Noun, NOUN),
            (DataFile::Verb, VERB),
        ] {
            let text = format!("{LICENSE}{body}");
            synsets.extend(
                parser
                    .parse_data_file(file, &text)
                    .expect("fixture data file should parse"),
            );
        }
        WordNet::from_synsets(synsets)
    }

    #[test]
    fn parse_synset_line_reads_lemmas_pointers_and_definition() {
        let parser = WndbParser::new().expect("parser should build");
        let synsets = parser
            .parse_data_file(DataFile::Adjective, &format!("{LICENSE}{ADJ}"))
            .expect("adjective fixture should parse");

        assert_eq!(synsets.len(), 3);
        let able = &synsets[0];
        assert_eq!(able.id.offset, 1740);
        assert_eq!(able.pos, SynsetPos::Adjective);
        assert_eq!(able.lemmas[0].name, "able");
        assert_eq!(able.pointers.len(), 2);
        assert_eq!(able.pointers[0].source_lemma, None);
        assert_eq!(able.pointers[0].target.file, DataFile::Noun);
        assert_eq!(able.pointers[1].source_lemma, Some(0));
        assert_eq!(
            able.definition,
            "(usually followed by `to') having the necessary means"
        );

        let glad = &synsets[2];
        assert_eq!(glad.pos, SynsetPos::AdjectiveSatellite);
        assert_eq!(glad.lemmas[0].name, "glad");
    }

    #[test]
    fn parse_data_file_reports_line_of_malformed_synset() {
        let parser = WndbParser::new().expect("parser should build");
        let text = "00000100 00 a 01 light 0 000 | fine\n00000200 00 a 01 dark 0 000 no gloss\n";

        let error = parser
            .parse_data_file(DataFile::Adjective, text)
            .expect_err("missing gloss separator should fail");
        let message = format!("{error:#}");
        assert!(message.contains("line 2"), "unexpected error: {message}");
        assert!(message.contains("gloss separator"), "unexpected error: {message}");
    }

    #[test]
    fn parse_data_file_rejects_truncated_pointer_list() {
        let parser = WndbParser::new().expect("parser should build");
        let text = "00000100 00 a 01 light 0 002 ! 00000200 a 0101 | too few pointers\n";

        let error = parser
            .parse_data_file(DataFile::Adjective, text)
            .expect_err("truncated pointers should fail");
        assert!(
            format!("{error:#}").contains("synset line ends before"),
            "unexpected error: {error:#}"
        );
    }

    #[test]
    fn sense_keys_follow_wordnet_layout() {
        let wordnet = fixture_wordnet();
        let synsets = wordnet.synsets();

        let able = &synsets[0];
        assert_eq!(wordnet.sense_key(able, &able.lemmas[0]), "able%3:00:00::");

        let glad = &synsets[2];
        assert_eq!(
            wordnet.sense_key(glad, &glad.lemmas[0]),
            "glad%5:00:00:able:00"
        );

        let dress = synsets
            .iter()
            .find(|synset| synset.lemmas[0].name == "Dress")
            .expect("verb fixture is loaded");
        assert_eq!(wordnet.sense_key(dress, &dress.lemmas[0]), "dress%2:29:00::");
    }

    #[test]
    fn collect_antonyms_keeps_first_orientation_only() {
        let wordnet = fixture_wordnet();
        let relations = collect_antonyms(&wordnet, &[]);

        let pairs = relations
            .iter()
            .map(|relation| (relation.pos_element.as_str(), relation.neg_element.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("able", "unable"),
                ("glad", "unable"),
                ("inability", "ability"),
                ("Dress", "undress"),
            ]
        );

        let glad = &relations[1];
        assert_eq!(glad.pos, "s");
        assert_eq!(glad.pos_key, "glad%5:00:00:able:00");
        assert_eq!(glad.neg_key, "unable%3:00:00::");
        assert_eq!(glad.pos_definition, "feeling happy");

        let dress = &relations[3];
        assert_eq!(dress.neg_key, "undress%2:29:01::");
        assert_eq!(dress.neg_definition, "remove clothes");
    }

    #[test]
    fn collect_antonyms_honors_pos_filter() {
        let wordnet = fixture_wordnet();
        let relations = collect_antonyms(&wordnet, &[SynsetPos::Adjective]);

        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].pos_element, "able");
    }

    #[test]
    fn collect_antonyms_repeated_pair_takes_later_sense_in_place() {
        let parser = WndbParser::new().expect("parser should build");
        let text = "00000100 00 a 01 light 0 001 ! 00000200 a 0101 | first sense of light\n\
00000200 00 a 01 dark 0 001 ! 00000100 a 0101 | first sense of dark\n\
00000300 00 a 01 light 1 001 ! 00000400 a 0101 | second sense of light\n\
00000400 00 a 01 dark 1 001 ! 00000300 a 0101 | second sense of dark\n";
        let synsets = parser
            .parse_data_file(DataFile::Adjective, text)
            .expect("fixture should parse");
        let wordnet = WordNet::from_synsets(synsets);

        let relations = collect_antonyms(&wordnet, &[]);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].pos_definition, "second sense of light");
        assert_eq!(relations[0].pos_key, "light%3:00:01::");
    }

    #[test]
    fn collect_antonyms_skips_dangling_pointers() {
        let parser = WndbParser::new().expect("parser should build");
        let text = "00000100 00 a 01 light 0 001 ! 00009999 a 0101 | points nowhere\n";
        let synsets = parser
            .parse_data_file(DataFile::Adjective, text)
            .expect("fixture should parse");

        let relations = collect_antonyms(&WordNet::from_synsets(synsets), &[]);
        assert!(relations.is_empty());
    }

    #[test]
    fn write_antonyms_emits_header_and_quotes_when_needed() {
        let wordnet = fixture_wordnet();
        let mut relations = collect_antonyms(&wordnet, &[SynsetPos::Adjective]);
        relations[0].neg_definition = "not \"able\"".to_string();

        let mut buffer = Vec::new();
        write_antonyms(&mut buffer, &relations).expect("export should be written");
        let text = String::from_utf8(buffer).expect("export is utf-8");
        let lines = text.lines().collect::<Vec<&str>>();

        assert_eq!(
            lines[0],
            "pos_element\tneg_element\tPOS\tpos_key\tneg_key\tpos_definition\tneg_definition"
        );
        assert_eq!(
            lines[1],
            "able\tunable\ta\table%3:00:00::\tunable%3:00:00::\t(usually followed by `to') having the necessary means\t\"not \"\"able\"\"\""
        );
    }

    #[test]
    fn load_reads_all_data_files_and_requires_each() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        for (name, body) in [
            ("data.adj", ADJ),
            ("data.adv", ""),
            ("data.noun", NOUN),
        ] {
            std::fs::write(dir.path().join(name), format!("{LICENSE}{body}"))
                .expect("fixture should be written");
        }

        let parser = WndbParser::new().expect("parser should build");
        let error = parser
            .load(dir.path())
            .expect_err("data.verb is missing");
        assert!(
            format!("{error:#}").contains("data.verb"),
            "unexpected error: {error:#}"
        );

        std::fs::write(dir.path().join("data.verb"), format!("{LICENSE}{VERB}"))
            .expect("fixture should be written");
        let wordnet = parser.load(dir.path()).expect("complete database loads");
        assert_eq!(wordnet.synsets().len(), 7);
    }
}
