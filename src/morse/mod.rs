/// International Morse code, letters then figures then the punctuation that
/// shows up in casual CW traffic.
const CODE_TABLE: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('=', "-...-"),
];

pub fn encode_char(ch: char) -> Option<&'static str> {
    let ch = ch.to_ascii_lowercase();
    CODE_TABLE
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, code)| *code)
}

/// Render text as dit/dah glyph groups: one group per character, groups
/// separated by spaces, words by ` / `. Characters without an encoding are
/// skipped.
pub fn encode(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(encode_char)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_classic_distress_call() {
        assert_eq!(encode("sos"), "... --- ...");
    }

    #[test]
    fn words_are_separated_by_a_slash() {
        assert_eq!(encode("cq cq"), "-.-. --.- / -.-. --.-");
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(encode("SOS"), encode("sos"));
    }

    #[test]
    fn figures_are_encoded() {
        assert_eq!(encode("5nn"), "..... -. -.");
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(encode("a#b"), ".- -...");
        assert_eq!(encode("# #"), "");
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (ch, code) in CODE_TABLE {
            assert_eq!(encode_char(*ch), Some(*code));
        }
    }
}
