//! Static character maps used by glyph substitution.
//!
//! Each map is declared as three aligned rows (`a-z`, `A-Z`, `0-9`) where a
//! space marks a hole, plus a list of extra pairs for punctuation and
//! multi-character outputs. The lookup index is built on first use and shared
//! for the rest of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Marks a key with no entry inside a row.
const HOLE: char = ' ';

/// An immutable mapping from a source character to its styled replacement.
pub struct CharMap {
    pub name: &'static str,
    lower: &'static str,
    upper: &'static str,
    digits: &'static str,
    extra: &'static [(char, &'static str)],
    index: OnceLock<HashMap<char, &'static str>>,
}

impl CharMap {
    const fn new(
        name: &'static str,
        lower: &'static str,
        upper: &'static str,
        digits: &'static str,
        extra: &'static [(char, &'static str)],
    ) -> Self {
        Self {
            name,
            lower,
            upper,
            digits,
            extra,
            index: OnceLock::new(),
        }
    }

    /// Exact lookup, without any case fallback.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.index().get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index().is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.index().keys().copied()
    }

    fn index(&self) -> &HashMap<char, &'static str> {
        self.index.get_or_init(|| {
            let mut index = HashMap::new();
            insert_row(&mut index, 'a'..='z', self.lower);
            insert_row(&mut index, 'A'..='Z', self.upper);
            insert_row(&mut index, '0'..='9', self.digits);
            for (key, glyph) in self.extra {
                index.insert(*key, *glyph);
            }
            index
        })
    }
}

impl std::fmt::Debug for CharMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharMap").field("name", &self.name).finish()
    }
}

fn insert_row(
    index: &mut HashMap<char, &'static str>,
    keys: std::ops::RangeInclusive<char>,
    row: &'static str,
) {
    for (key, (offset, glyph)) in keys.zip(row.char_indices()) {
        if glyph != HOLE {
            index.insert(key, &row[offset..offset + glyph.len_utf8()]);
        }
    }
}

// ============================================================================
// Mathematical alphanumerics
// ============================================================================

pub static BOLD: CharMap = CharMap::new(
    "bold",
    "𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳",
    "𝐀𝐁𝐂𝐃𝐄𝐅𝐆𝐇𝐈𝐉𝐊𝐋𝐌𝐍𝐎𝐏𝐐𝐑𝐒𝐓𝐔𝐕𝐖𝐗𝐘𝐙",
    "𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗",
    &[],
);

pub static ITALIC: CharMap = CharMap::new(
    "italic",
    "𝑎𝑏𝑐𝑑𝑒𝑓𝑔ℎ𝑖𝑗𝑘𝑙𝑚𝑛𝑜𝑝𝑞𝑟𝑠𝑡𝑢𝑣𝑤𝑥𝑦𝑧",
    "𝐴𝐵𝐶𝐷𝐸𝐹𝐺𝐻𝐼𝐽𝐾𝐿𝑀𝑁𝑂𝑃𝑄𝑅𝑆𝑇𝑈𝑉𝑊𝑋𝑌𝑍",
    "",
    &[],
);

pub static BOLD_ITALIC: CharMap = CharMap::new(
    "bold-italic",
    "𝒂𝒃𝒄𝒅𝒆𝒇𝒈𝒉𝒊𝒋𝒌𝒍𝒎𝒏𝒐𝒑𝒒𝒓𝒔𝒕𝒖𝒗𝒘𝒙𝒚𝒛",
    "𝑨𝑩𝑪𝑫𝑬𝑭𝑮𝑯𝑰𝑱𝑲𝑳𝑴𝑵𝑶𝑷𝑸𝑹𝑺𝑻𝑼𝑽𝑾𝑿𝒀𝒁",
    "",
    &[],
);

/// Script letters mixed with serif italics where the script form reads poorly.
pub static CURSIVE: CharMap = CharMap::new(
    "cursive",
    "𝒶𝒷𝒸𝒹𝑒𝒻𝑔𝒽𝒾𝒿𝓀𝓁𝓂𝓃𝑜𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏",
    "𝒜𝐵𝒞𝒟𝐸𝐹𝒢𝐻𝐼𝒥𝒦𝐿𝑀𝒩𝒪𝒫𝒬𝑅𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵",
    "",
    &[],
);

pub static BOLD_SCRIPT: CharMap = CharMap::new(
    "bold-script",
    "𝓪𝓫𝓬𝓭𝓮𝓯𝓰𝓱𝓲𝓳𝓴𝓵𝓶𝓷𝓸𝓹𝓺𝓻𝓼𝓽𝓾𝓿𝔀𝔁𝔂𝔃",
    "𝓐𝓑𝓒𝓓𝓔𝓕𝓖𝓗𝓘𝓙𝓚𝓛𝓜𝓝𝓞𝓟𝓠𝓡𝓢𝓣𝓤𝓥𝓦𝓧𝓨𝓩",
    "",
    &[],
);

pub static FRAKTUR: CharMap = CharMap::new(
    "fraktur",
    "𝔞𝔟𝔠𝔡𝔢𝔣𝔤𝔥𝔦𝔧𝔨𝔩𝔪𝔫𝔬𝔭𝔮𝔯𝔰𝔱𝔲𝔳𝔴𝔵𝔶𝔷",
    "𝔄𝔅ℭ𝔇𝔈𝔉𝔊ℌℑ𝔍𝔎𝔏𝔐𝔑𝔒𝔓𝔔ℜ𝔖𝔗𝔘𝔙𝔚𝔛𝔜ℨ",
    "",
    &[],
);

/// Bold fraktur, the blackletter used by the gothic and horror tools.
pub static GOTHIC: CharMap = CharMap::new(
    "gothic",
    "𝖆𝖇𝖈𝖉𝖊𝖋𝖌𝖍𝖎𝖏𝖐𝖑𝖒𝖓𝖔𝖕𝖖𝖗𝖘𝖙𝖚𝖛𝖜𝖝𝖞𝖟",
    "𝕬𝕭𝕮𝕯𝕰𝕱𝕲𝕳𝕴𝕵𝕶𝕷𝕸𝕹𝕺𝕻𝕼𝕽𝕾𝕿𝖀𝖁𝖂𝖃𝖄𝖅",
    "",
    &[],
);

pub static DOUBLE_STRUCK: CharMap = CharMap::new(
    "double-struck",
    "𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫",
    "𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ",
    "𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡",
    &[],
);

pub static SANS: CharMap = CharMap::new(
    "sans",
    "𝖺𝖻𝖼𝖽𝖾𝖿𝗀𝗁𝗂𝗃𝗄𝗅𝗆𝗇𝗈𝗉𝗊𝗋𝗌𝗍𝗎𝗏𝗐𝗑𝗒𝗓",
    "𝖠𝖡𝖢𝖣𝖤𝖥𝖦𝖧𝖨𝖩𝖪𝖫𝖬𝖭𝖮𝖯𝖰𝖱𝖲𝖳𝖴𝖵𝖶𝖷𝖸𝖹",
    "𝟢𝟣𝟤𝟥𝟦𝟧𝟨𝟩𝟪𝟫",
    &[],
);

pub static SANS_BOLD: CharMap = CharMap::new(
    "sans-bold",
    "𝗮𝗯𝗰𝗱𝗲𝗳𝗴𝗵𝗶𝗷𝗸𝗹𝗺𝗻𝗼𝗽𝗾𝗿𝘀𝘁𝘂𝘃𝘄𝘅𝘆𝘇",
    "𝗔𝗕𝗖𝗗𝗘𝗙𝗚𝗛𝗜𝗝𝗞𝗟𝗠𝗡𝗢𝗣𝗤𝗥𝗦𝗧𝗨𝗩𝗪𝗫𝗬𝗭",
    "𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵",
    &[],
);

pub static SANS_ITALIC: CharMap = CharMap::new(
    "sans-italic",
    "𝘢𝘣𝘤𝘥𝘦𝘧𝘨𝘩𝘪𝘫𝘬𝘭𝘮𝘯𝘰𝘱𝘲𝘳𝘴𝘵𝘶𝘷𝘸𝘹𝘺𝘻",
    "𝘈𝘉𝘊𝘋𝘌𝘍𝘎𝘏𝘐𝘑𝘒𝘓𝘔𝘕𝘖𝘗𝘘𝘙𝘚𝘛𝘜𝘝𝘞𝘟𝘠𝘡",
    "",
    &[],
);

pub static SANS_BOLD_ITALIC: CharMap = CharMap::new(
    "sans-bold-italic",
    "𝙖𝙗𝙘𝙙𝙚𝙛𝙜𝙝𝙞𝙟𝙠𝙡𝙢𝙣𝙤𝙥𝙦𝙧𝙨𝙩𝙪𝙫𝙬𝙭𝙮𝙯",
    "𝘼𝘽𝘾𝘿𝙀𝙁𝙂𝙃𝙄𝙅𝙆𝙇𝙈𝙉𝙊𝙋𝙌𝙍𝙎𝙏𝙐𝙑𝙒𝙓𝙔𝙕",
    "",
    &[],
);

pub static MONOSPACE: CharMap = CharMap::new(
    "monospace",
    "𝚊𝚋𝚌𝚍𝚎𝚏𝚐𝚑𝚒𝚓𝚔𝚕𝚖𝚗𝚘𝚙𝚚𝚛𝚜𝚝𝚞𝚟𝚠𝚡𝚢𝚣",
    "𝙰𝙱𝙲𝙳𝙴𝙵𝙶𝙷𝙸𝙹𝙺𝙻𝙼𝙽𝙾𝙿𝚀𝚁𝚂𝚃𝚄𝚅𝚆𝚇𝚈𝚉",
    "𝟶𝟷𝟸𝟹𝟺𝟻𝟼𝟽𝟾𝟿",
    &[],
);

// ============================================================================
// Enclosed forms
// ============================================================================

pub static CIRCLED: CharMap = CharMap::new(
    "circled",
    "ⓐⓑⓒⓓⓔⓕⓖⓗⓘⓙⓚⓛⓜⓝⓞⓟⓠⓡⓢⓣⓤⓥⓦⓧⓨⓩ",
    "ⒶⒷⒸⒹⒺⒻⒼⒽⒾⒿⓀⓁⓂⓃⓄⓅⓆⓇⓈⓉⓊⓋⓌⓍⓎⓏ",
    "⓪①②③④⑤⑥⑦⑧⑨",
    &[],
);

pub static NEGATIVE_CIRCLED: CharMap = CharMap::new(
    "negative-circled",
    "",
    "🅐🅑🅒🅓🅔🅕🅖🅗🅘🅙🅚🅛🅜🅝🅞🅟🅠🅡🅢🅣🅤🅥🅦🅧🅨🅩",
    "⓿❶❷❸❹❺❻❼❽❾",
    &[],
);

pub static PARENTHESIZED: CharMap = CharMap::new(
    "parenthesized",
    "⒜⒝⒞⒟⒠⒡⒢⒣⒤⒥⒦⒧⒨⒩⒪⒫⒬⒭⒮⒯⒰⒱⒲⒳⒴⒵",
    "",
    " ⑴⑵⑶⑷⑸⑹⑺⑻⑼",
    &[],
);

pub static SQUARED: CharMap = CharMap::new(
    "squared",
    "",
    "🄰🄱🄲🄳🄴🄵🄶🄷🄸🄹🄺🄻🄼🄽🄾🄿🅀🅁🅂🅃🅄🅅🅆🅇🅈🅉",
    "",
    &[],
);

pub static NEGATIVE_SQUARED: CharMap = CharMap::new(
    "negative-squared",
    "",
    "🅰🅱🅲🅳🅴🅵🅶🅷🅸🅹🅺🅻🅼🅽🅾🅿🆀🆁🆂🆃🆄🆅🆆🆇🆈🆉",
    "",
    &[],
);

// ============================================================================
// Small forms
// ============================================================================

pub static SUPERSCRIPT: CharMap = CharMap::new(
    "superscript",
    "ᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖ ʳˢᵗᵘᵛʷˣʸᶻ",
    "ᴬᴮ ᴰᴱ ᴳᴴᴵᴶᴷᴸᴹᴺᴼᴾ ᴿ ᵀᵁⱽᵂ   ",
    "⁰¹²³⁴⁵⁶⁷⁸⁹",
    &[('+', "⁺"), ('-', "⁻"), ('=', "⁼"), ('(', "⁽"), (')', "⁾")],
);

pub static SUBSCRIPT: CharMap = CharMap::new(
    "subscript",
    "ₐ   ₑ  ₕᵢⱼₖₗₘₙₒₚ ᵣₛₜᵤᵥ ₓ  ",
    "",
    "₀₁₂₃₄₅₆₇₈₉",
    &[('+', "₊"), ('-', "₋"), ('=', "₌"), ('(', "₍"), (')', "₎")],
);

pub static SMALL_CAPS: CharMap = CharMap::new(
    "small-caps",
    "ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘǫʀꜱᴛᴜᴠᴡxʏᴢ",
    "",
    "",
    &[],
);

// ============================================================================
// Rotated and mirrored
// ============================================================================

pub static UPSIDE_DOWN: CharMap = CharMap::new(
    "upside-down",
    "ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz",
    "∀𐐒ƆᗡƎℲ⅁HIſ⋊˥WNOԀÒᴚS⊥∩ΛMX⅄Z",
    "",
    &[('?', "¿"), ('!', "¡"), ('.', "˙"), ('_', "‾")],
);

pub static MIRRORED: CharMap = CharMap::new(
    "mirrored",
    "ɒdɔbɘʇϱʜiႱʞlmnoqpɿƨtuvwxyƹ",
    "AᙠƆᗡƎꟻӘHIႱ⋊⅃MͶOꟼỌЯƧTUVWXYƸ",
    "",
    &[],
);

// ============================================================================
// Lookalike alphabets
// ============================================================================

pub static RUNIC: CharMap = CharMap::new(
    "runic",
    "ᚨᛒᚲᛞᛖᚠᚷᚻᛁᛃᚲᛚᛗᚾᛟᛈᚲᚱᛊᛏᚢᚠᚹ ᛁᛉ",
    "",
    "",
    &[('x', "ᚲᛊ")],
);

pub static CURRENCY: CharMap = CharMap::new(
    "currency",
    "₳฿₵₫€₣₲♄łʝ₭Ⱡ₥₦Ø₱ɊⱤ₴₮Ʉⱴ₩ӾɎⱫ",
    "",
    "",
    &[],
);

pub static CYRILLIC: CharMap = CharMap::new(
    "cyrillic",
    "",
    "ДБҀↁЄ БНІЈЌ МИФР ЯЅГЦ ЩЖЧ ",
    "",
    &[],
);

pub static GREEK: CharMap = CharMap::new(
    "greek",
    "αβςδεғɢнιјκℓмησρφяѕтυνωχγζ",
    "",
    "",
    &[],
);

pub static ASIAN: CharMap = CharMap::new(
    "asian",
    "卂乃匚ᗪ乇千Ꮆ卄丨ﾌҜㄥ爪几ㄖ卩Ɋ尺丂ㄒㄩᐯ山乂ㄚ乙",
    "",
    "",
    &[],
);

// ============================================================================
// Symbol alphabets
// ============================================================================

/// Dingbat stand-ins; each glyph carries a text-presentation selector.
pub static WINGDINGS: CharMap = CharMap::new(
    "wingdings",
    "",
    "",
    "",
    &[
        ('a', "✌\u{FE0E}"),
        ('b', "👌\u{FE0E}"),
        ('c', "👍\u{FE0E}"),
        ('d', "👎\u{FE0E}"),
        ('e', "👈\u{FE0E}"),
        ('f', "👉\u{FE0E}"),
        ('g', "👆\u{FE0E}"),
        ('h', "👇\u{FE0E}"),
        ('i', "✋\u{FE0E}"),
        ('j', "☺\u{FE0E}"),
        ('k', "😐\u{FE0E}"),
        ('l', "☹\u{FE0E}"),
        ('m', "💣\u{FE0E}"),
        ('n', "☠\u{FE0E}"),
        ('o', "⚐\u{FE0E}"),
        ('p', "⚑\u{FE0E}"),
        ('q', "✉\u{FE0E}"),
        ('r', "✂\u{FE0E}"),
        ('s', "✁\u{FE0E}"),
        ('t', "👓\u{FE0E}"),
        ('u', "⌛\u{FE0E}"),
        ('v', "⌨\u{FE0E}"),
        ('w', "🖱\u{FE0E}"),
        ('x', "🖨\u{FE0E}"),
        ('y', "📁\u{FE0E}"),
        ('z', "📂\u{FE0E}"),
        ('0', "📁\u{FE0E}"),
        ('1', "📂\u{FE0E}"),
        ('2', "📄\u{FE0E}"),
        ('3', "📅\u{FE0E}"),
        ('4', "📦\u{FE0E}"),
        ('5', "📫\u{FE0E}"),
        ('6', "📬\u{FE0E}"),
        ('7', "📪\u{FE0E}"),
        ('8', "📪\u{FE0E}"),
        ('9', "📪\u{FE0E}"),
    ],
);

pub static SIGN_LANGUAGE: CharMap = CharMap::new(
    "sign-language",
    "",
    "",
    "",
    &[
        ('a', "👌"),
        ('b', "✋"),
        ('c', "🤏"),
        ('d', "☝\u{FE0F}"),
        ('e', "✊"),
        ('f', "👌"),
        ('g', "🫵"),
        ('h', "🤘"),
        ('i', "☝\u{FE0F}"),
        ('j', "⤴\u{FE0F}"),
        ('k', "🖖"),
        ('l', "🤙"),
        ('m', "✋"),
        ('n', "✋"),
        ('o', "👌"),
        ('p', "🤏"),
        ('q', "🫵"),
        ('r', "🤞"),
        ('s', "✊"),
        ('t', "✊"),
        ('u', "✌\u{FE0F}"),
        ('v', "✌\u{FE0F}"),
        ('w', "🤟"),
        ('x', "☝\u{FE0F}"),
        ('y', "🤙"),
        ('z', "👉"),
        (' ', "  "),
    ],
);

/// Every shipped map, in declaration order.
pub fn all() -> [&'static CharMap; 29] {
    [
        &BOLD,
        &ITALIC,
        &BOLD_ITALIC,
        &CURSIVE,
        &BOLD_SCRIPT,
        &FRAKTUR,
        &GOTHIC,
        &DOUBLE_STRUCK,
        &SANS,
        &SANS_BOLD,
        &SANS_ITALIC,
        &SANS_BOLD_ITALIC,
        &MONOSPACE,
        &CIRCLED,
        &NEGATIVE_CIRCLED,
        &PARENTHESIZED,
        &SQUARED,
        &NEGATIVE_SQUARED,
        &SUPERSCRIPT,
        &SUBSCRIPT,
        &SMALL_CAPS,
        &UPSIDE_DOWN,
        &MIRRORED,
        &RUNIC,
        &CURRENCY,
        &CYRILLIC,
        &GREEK,
        &ASIAN,
        &WINGDINGS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Row layout tests
    // ============================================================================

    #[test]
    fn test_rows_have_expected_lengths() {
        for map in all() {
            for (row, expected) in [(map.lower, 26), (map.upper, 26), (map.digits, 10)] {
                let count = row.chars().count();
                assert!(
                    count == 0 || count == expected,
                    "{} has a row of {} chars",
                    map.name,
                    count
                );
            }
        }
    }

    #[test]
    fn test_holes_are_skipped() {
        assert_eq!(SUPERSCRIPT.get('q'), None);
        assert_eq!(SUPERSCRIPT.get('C'), None);
        assert_eq!(PARENTHESIZED.get('0'), None);
        assert_eq!(PARENTHESIZED.get('1'), Some("⑴"));
    }

    #[test]
    fn test_every_map_has_entries() {
        for map in all() {
            assert!(!map.is_empty(), "{} is empty", map.name);
        }
        assert!(!SIGN_LANGUAGE.is_empty());
    }

    // ============================================================================
    // Spot checks
    // ============================================================================

    #[test]
    fn test_bold_spot_checks() {
        assert_eq!(BOLD.get('A'), Some("𝐀"));
        assert_eq!(BOLD.get('z'), Some("𝐳"));
        assert_eq!(BOLD.get('9'), Some("𝟗"));
        assert_eq!(BOLD.len(), 62);
    }

    #[test]
    fn test_letterlike_holes_use_letterlike_symbols() {
        assert_eq!(ITALIC.get('h'), Some("ℎ"));
        assert_eq!(FRAKTUR.get('C'), Some("ℭ"));
        assert_eq!(DOUBLE_STRUCK.get('R'), Some("ℝ"));
    }

    #[test]
    fn test_squared_i_and_monospace_g() {
        assert_eq!(SQUARED.get('I'), Some("🄸"));
        assert_eq!(SQUARED.get('J'), Some("🄹"));
        assert_eq!(MONOSPACE.get('g'), Some("𝚐"));
    }

    #[test]
    fn test_multi_char_outputs() {
        assert_eq!(RUNIC.get('x'), Some("ᚲᛊ"));
        assert_eq!(WINGDINGS.get('a'), Some("✌\u{FE0E}"));
        assert_eq!(SIGN_LANGUAGE.get(' '), Some("  "));
    }

    #[test]
    fn test_upside_down_extras() {
        assert_eq!(UPSIDE_DOWN.get('?'), Some("¿"));
        assert_eq!(UPSIDE_DOWN.get('a'), Some("ɐ"));
        assert_eq!(UPSIDE_DOWN.get('b'), Some("q"));
    }
}
