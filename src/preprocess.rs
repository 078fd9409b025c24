//! Text preprocessing.
//!
//! Applied in fixed order before tagging: full-width → half-width folding,
//! ASCII lowercasing, traditional → simplified Chinese (Chinese path), and
//! whitespace-run collapsing. The function is pure and total, and it keeps a
//! backward byte-offset map so tag spans can be reported against the
//! original text.
//!
//! Numeral canonicalization ("二〇二五" → "2025") deliberately does *not*
//! happen here: it would break span fidelity, so it lives inside the grammar
//! fragments instead.

use crate::api::Language;

/// Preprocessed text plus the backward span map.
#[derive(Debug, Clone)]
pub(crate) struct Preprocessed {
    pub text: String,
    /// Byte offset in `text` → byte offset of the source char in the input.
    back: Vec<usize>,
    original_len: usize,
}

impl Preprocessed {
    /// Map a byte span of the preprocessed text back to the original input.
    pub fn map_span(&self, start: usize, end: usize) -> crate::Span {
        let s = self.back.get(start).copied().unwrap_or(self.original_len);
        let e = self.back.get(end).copied().unwrap_or(self.original_len);
        crate::Span { start: s, end: e.max(s) }
    }
}

/// Traditional → simplified folding for the characters that occur in time
/// expressions. A full conversion table is unnecessary here; anything not
/// listed passes through unchanged.
static TRAD_TO_SIMPLE: &[(char, char)] = &[
    ('時', '时'),
    ('點', '点'),
    ('鐘', '钟'),
    ('鍾', '钟'),
    ('號', '号'),
    ('週', '周'),
    ('禮', '礼'),
    ('個', '个'),
    ('兩', '两'),
    ('後', '后'),
    ('過', '过'),
    ('來', '来'),
    ('現', '现'),
    ('間', '间'),
    ('農', '农'),
    ('曆', '历'),
    ('歷', '历'),
    ('節', '节'),
    ('誕', '诞'),
    ('聖', '圣'),
    ('萬', '万'),
    ('歲', '岁'),
    ('國', '国'),
    ('慶', '庆'),
    ('勞', '劳'),
    ('動', '动'),
    ('兒', '儿'),
    ('婦', '妇'),
    ('親', '亲'),
    ('師', '师'),
    ('復', '复'),
    ('臘', '腊'),
    ('陰', '阴'),
    ('陽', '阳'),
    ('當', '当'),
    ('這', '这'),
    ('從', '从'),
    ('幾', '几'),
    ('將', '将'),
    ('為', '为'),
    ('爲', '为'),
    ('學', '学'),
    ('開', '开'),
    ('沒', '没'),
    ('會', '会'),
    ('說', '说'),
    ('與', '与'),
    ('淩', '凌'),
];

fn fold_char(c: char, language: Language) -> char {
    // Full-width ASCII block and the ideographic space.
    let c = match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => {
            char::from_u32(c as u32 - 0xFF01 + 0x21).unwrap_or(c)
        }
        _ => c,
    };
    let c = c.to_ascii_lowercase();
    if language == Language::Chinese {
        if let Some((_, s)) = TRAD_TO_SIMPLE.iter().find(|(t, _)| *t == c) {
            return *s;
        }
    }
    c
}

/// Normalize `input` and build the backward span map.
pub(crate) fn preprocess(input: &str, language: Language) -> Preprocessed {
    let mut text = String::with_capacity(input.len());
    let mut back = Vec::with_capacity(input.len());
    let mut pending_space = false;
    let mut pending_offset = 0usize;

    for (offset, raw) in input.char_indices() {
        let c = fold_char(raw, language);
        if c.is_whitespace() {
            if !text.is_empty() {
                pending_space = true;
                pending_offset = offset;
            }
            continue;
        }
        if pending_space {
            text.push(' ');
            back.push(pending_offset);
            pending_space = false;
        }
        let at = text.len();
        text.push(c);
        for _ in at..text.len() {
            back.push(offset);
        }
    }

    Preprocessed { text, back, original_len: input.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_full_width_digits_and_punct() {
        let p = preprocess("１４：３０", Language::Chinese);
        assert_eq!(p.text, "14:30");
    }

    #[test]
    fn folds_traditional_chinese() {
        let p = preprocess("後天下午３點鐘", Language::Chinese);
        assert_eq!(p.text, "后天下午3点钟");
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        let p = preprocess("  Next   Monday\t9 AM ", Language::English);
        assert_eq!(p.text, "next monday 9 am");
    }

    #[test]
    fn span_map_points_into_original() {
        let input = "見面在１０點";
        let p = preprocess(input, Language::Chinese);
        let pos = p.text.find("10").unwrap();
        let span = p.map_span(pos, pos + "10点".len());
        assert_eq!(&input[span.start..span.end], "１０點");
    }

    #[test]
    fn total_on_empty_and_whitespace() {
        assert_eq!(preprocess("", Language::Chinese).text, "");
        assert_eq!(preprocess("   \t\n", Language::English).text, "");
    }
}
