//! Spanish plural stemmer.
//!
//! A light, rule-based transform that rewrites Spanish plural forms to their
//! singular (`sociedades` -> `sociedad`, `luces` -> `luz`). It is not a full
//! stemmer: derivational suffixes are left alone and singular words pass
//! through unchanged.
//!
//! Words are matched literally. Patterns are lower case, so tokens are
//! expected to be lower-cased beforehand; accented vowels are distinct
//! characters and are never folded.

use ahash::{AHashMap, AHashSet};
use lazy_static::lazy_static;

use super::Stemmer;

/// Words with fewer characters than this are never stemmed.
pub const MIN_WORD_LEN: usize = 4;

/// A stem is never shorter than this many characters.
pub const MIN_STEM_LEN: usize = 3;

lazy_static! {
    /// Words ending like a plural that are singular, or have the same form in
    /// both numbers.
    static ref INVARIANTS: AHashSet<&'static str> = [
        "abrelatas", "además", "afueras", "albricias", "alrededores", "antes",
        "apenas", "ases", "atlas", "atrás", "caries", "cascanueces", "ciempiés",
        "cosquillas", "cumpleaños", "después", "detrás", "dios", "entonces",
        "estrés", "exequias", "francés", "guardabosques", "inglés", "interés",
        "jamás", "japonés", "jueves", "lavaplatos", "lejos", "lunes", "martes",
        "menos", "mientras", "miércoles", "mondadientes", "nosotras",
        "nosotros", "nupcias", "país", "paracaídas", "paraguas", "parabrisas",
        "pararrayos", "portaaviones", "portugués", "quitamanchas", "quizás",
        "revés", "rompecabezas", "sacacorchos", "salvavidas", "tocadiscos",
        "viernes", "víveres", "vosotras", "vosotros",
    ]
    .into_iter()
    .collect();

    /// Plurals whose singular is not reachable through the suffix rules:
    /// stress shifts, stressed final vowels, and monosyllables that look like
    /// another ending.
    static ref IRREGULARS: AHashMap<&'static str, &'static str> = [
        ("abdómenes", "abdomen"),
        ("álbumes", "álbum"),
        ("bambús", "bambú"),
        ("bebés", "bebé"),
        ("bisturís", "bisturí"),
        ("cafés", "café"),
        ("cánones", "canon"),
        ("caracteres", "carácter"),
        ("certámenes", "certamen"),
        ("chalés", "chalé"),
        ("champús", "champú"),
        ("clichés", "cliché"),
        ("clubes", "club"),
        ("colibrís", "colibrí"),
        ("comités", "comité"),
        ("compases", "compás"),
        ("crímenes", "crimen"),
        ("dictámenes", "dictamen"),
        ("dominós", "dominó"),
        ("especímenes", "espécimen"),
        ("esquís", "esquí"),
        ("exámenes", "examen"),
        ("gases", "gas"),
        ("gérmenes", "germen"),
        ("imágenes", "imagen"),
        ("jabalís", "jabalí"),
        ("jóvenes", "joven"),
        ("líquenes", "liquen"),
        ("mamás", "mamá"),
        ("márgenes", "margen"),
        ("menús", "menú"),
        ("meses", "mes"),
        ("órdenes", "orden"),
        ("orígenes", "origen"),
        ("países", "país"),
        ("papás", "papá"),
        ("purés", "puré"),
        ("regímenes", "régimen"),
        ("resúmenes", "resumen"),
        ("rubís", "rubí"),
        ("sándwiches", "sándwich"),
        ("sofás", "sofá"),
        ("tabús", "tabú"),
        ("vírgenes", "virgen"),
        ("volúmenes", "volumen"),
    ]
    .into_iter()
    .collect();
}

/// What must hold for the part of the word in front of a rule's suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Condition {
    Always,
    /// The stem ends in a vowel.
    Vowel,
    /// The stem ends in one of the letters, preceded by a consonant.
    ClusterEnd(&'static [char]),
    /// The stem ends in one of the letters.
    EndsWith(&'static [char]),
    /// The stem plus the first vowel of the suffix has two syllables or more.
    /// Monosyllables take no written accent (`tren`, `mes`, `bus`).
    Polysyllabic,
}

impl Condition {
    fn holds(self, stem: &str, suffix: &str) -> bool {
        let mut chars = stem.chars().rev();
        let last = chars.next();
        match self {
            Condition::Always => true,
            Condition::Vowel => last.is_some_and(is_vowel),
            Condition::ClusterEnd(letters) => {
                last.is_some_and(|c| letters.contains(&c)) && chars.next().is_some_and(is_consonant)
            }
            Condition::EndsWith(letters) => last.is_some_and(|c| letters.contains(&c)),
            Condition::Polysyllabic => syllables(stem.chars().chain(suffix.chars().next())) >= 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// The ending marks a singular word; stop looking.
    Keep,
    /// Replace the suffix.
    Replace(&'static str),
}

/// One entry of the ordered rule table.
#[derive(Clone, Copy, Debug)]
struct StemRule {
    suffix: &'static str,
    condition: Condition,
    action: Action,
    min_stem_len: usize,
}

const fn rule(suffix: &'static str, condition: Condition, action: Action) -> StemRule {
    StemRule {
        suffix,
        condition,
        action,
        min_stem_len: MIN_STEM_LEN,
    }
}

/// Most specific endings first; the first rule whose suffix and condition
/// match decides.
static RULES: &[StemRule] = &[
    // tesis, virus
    rule("is", Condition::Always, Action::Keep),
    rule("us", Condition::Always, Action::Keep),
    // A stressed vowel before the final "s" marks a singular: compás,
    // holandés, anís, adiós, autobús. Plurals like sofás are irregulars.
    rule("ás", Condition::Always, Action::Keep),
    rule("és", Condition::Always, Action::Keep),
    rule("ís", Condition::Always, Action::Keep),
    rule("ós", Condition::Always, Action::Keep),
    rule("ús", Condition::Always, Action::Keep),
    // luces -> luz, lápices -> lápiz
    rule("ces", Condition::Vowel, Action::Replace("z")),
    // clases -> clase
    rule("ases", Condition::Always, Action::Replace("ase")),
    // ingleses -> inglés, anises -> anís, adioses -> adiós, autobuses -> autobús
    rule("eses", Condition::Polysyllabic, Action::Replace("és")),
    rule("ises", Condition::Polysyllabic, Action::Replace("ís")),
    rule("oses", Condition::Polysyllabic, Action::Replace("ós")),
    rule("uses", Condition::Polysyllabic, Action::Replace("ús")),
    // alemanes -> alemán, almacenes -> almacén, jardines -> jardín,
    // canciones -> canción, comunes -> común
    rule("anes", Condition::Polysyllabic, Action::Replace("án")),
    rule("enes", Condition::Polysyllabic, Action::Replace("én")),
    rule("ines", Condition::Polysyllabic, Action::Replace("ín")),
    rule("ones", Condition::Polysyllabic, Action::Replace("ón")),
    rule("unes", Condition::Polysyllabic, Action::Replace("ún")),
    // rubíes -> rubí, tabúes -> tabú
    rule("íes", Condition::Always, Action::Replace("í")),
    rule("úes", Condition::Always, Action::Replace("ú")),
    // madres -> madre, calles -> calle, verdes -> verde
    rule("es", Condition::ClusterEnd(&['d', 'l', 'r']), Action::Replace("e")),
    // sociedades -> sociedad, leyes -> ley, relojes -> reloj, trenes -> tren
    rule(
        "es",
        Condition::EndsWith(&['d', 'l', 'n', 'r', 's', 'x', 'y', 'j']),
        Action::Replace(""),
    ),
    // casas -> casa, coches -> coche
    rule("s", Condition::Vowel, Action::Replace("")),
];

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

/// Vowels that never join a neighbouring strong vowel into one syllable.
fn is_strong(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'o' | 'á' | 'é' | 'í' | 'ó' | 'ú')
}

fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// Approximate syllable count: one per vowel group, where two adjacent strong
/// vowels are split (`le-on`) and a weak vowel joins its neighbour (`bien`).
fn syllables<I: Iterator<Item = char>>(chars: I) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;
    for c in chars {
        if is_vowel(c) {
            let joins = prev.is_some_and(|p| is_vowel(p) && !(is_strong(p) && is_strong(c)));
            if !joins {
                count += 1;
            }
        }
        prev = Some(c);
    }
    count
}

/// A rewrite of the end of a word: keep `keep` bytes, then append `append`.
/// `removed` is what the kept prefix was followed by, so the edit can be
/// undone without allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Edit {
    keep: usize,
    removed: &'static str,
    append: &'static str,
}

impl Edit {
    fn apply(self, term: &mut String) {
        term.truncate(self.keep);
        term.push_str(self.append);
    }

    fn revert(self, term: &mut String) {
        term.truncate(self.keep);
        term.push_str(self.removed);
    }
}

/// Returns the single-step rewrite the rules propose for `word`, if any.
fn propose(word: &str) -> Option<Edit> {
    let len = word.chars().count();
    if len < MIN_WORD_LEN || INVARIANTS.contains(word) {
        return None;
    }

    if let Some((&plural, &singular)) = IRREGULARS.get_key_value(word) {
        if singular.chars().count() < MIN_STEM_LEN {
            return None;
        }
        return Some(Edit {
            keep: 0,
            removed: plural,
            append: singular,
        });
    }

    for rule in RULES {
        let Some(stem) = word.strip_suffix(rule.suffix) else {
            continue;
        };
        if !rule.condition.holds(stem, rule.suffix) {
            continue;
        }
        return match rule.action {
            Action::Keep => None,
            Action::Replace(replacement) => {
                let stem_len =
                    len - rule.suffix.chars().count() + replacement.chars().count();
                if stem_len < rule.min_stem_len {
                    None
                } else {
                    Some(Edit {
                        keep: stem.len(),
                        removed: rule.suffix,
                        append: replacement,
                    })
                }
            }
        };
    }

    None
}

/// Stemmer that rewrites Spanish plurals to their singular form.
///
/// A rewrite is only kept when its result is itself left alone by the rules,
/// which makes the stemmer idempotent: `stem(stem(w)) == stem(w)` for every
/// input.
///
/// # Examples
///
/// ```
/// use plurales::analysis::token_filter::stem::{SpanishPluralStemmer, Stemmer};
///
/// let stemmer = SpanishPluralStemmer::new();
/// assert_eq!(stemmer.stem("sociedades"), "sociedad");
/// assert_eq!(stemmer.stem("luces"), "luz");
/// assert_eq!(stemmer.stem("sociedad"), "sociedad");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SpanishPluralStemmer;

impl SpanishPluralStemmer {
    /// Create a new Spanish plural stemmer.
    pub fn new() -> Self {
        SpanishPluralStemmer
    }

    /// Returns true if the stemmer leaves `word` unchanged.
    pub fn is_stable(&self, word: &str) -> bool {
        propose(word).is_none()
    }
}

impl Stemmer for SpanishPluralStemmer {
    fn stem_in_place(&self, term: &mut String) {
        let Some(edit) = propose(term) else {
            return;
        };
        edit.apply(term);
        if propose(term).is_some() {
            edit.revert(term);
        }
    }

    fn name(&self) -> &'static str {
        "spanish_plural"
    }
}
