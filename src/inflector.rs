use heck::{ToLowerCamelCase, ToUpperCamelCase};
use std::fmt::Debug;

pub trait InflectorClone {
    fn clone_box(&self) -> Box<dyn Inflector>;
}

impl<T> InflectorClone for T
where
    T: 'static + Inflector + Clone,
{
    fn clone_box(&self) -> Box<dyn Inflector> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Inflector> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Word forms and casing used to derive identifiers. Handed to the
/// [`DefaultResolver`](crate::DefaultResolver) so the rules can be swapped out
/// in tests.
pub trait Inflector: InflectorClone + Debug {
    /// Singular form of a (conventionally plural) table name
    fn singular(&self, word: &str) -> String;

    fn to_pascal_case(&self, name: &str) -> String {
        name.to_upper_camel_case()
    }

    fn to_camel_case(&self, name: &str) -> String {
        name.to_lower_camel_case()
    }
}

/// Plural forms that do not follow any suffix rule, `(plural, singular)`
pub const IRREGULAR_PLURALS: [(&str, &str); 16] = [
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("teeth", "tooth"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Words that are the same in singular and plural
pub const UNCOUNTABLE: [&str; 10] = [
    "data",
    "equipment",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

/// English singularization of the last word of a name. Words are separated by
/// `_`, `-` or a lower to upper case step, so `user_messages`, `UserMessages`
/// and `blockedPeople` all end in a word that is looked up on its own. That
/// word is checked against [`UNCOUNTABLE`] and [`IRREGULAR_PLURALS`] first;
/// anything else goes through the regular suffix rules of `pluralizer`. A word
/// none of them knows is returned unchanged and needs an explicit `structName`.
#[derive(Clone, Debug, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn singular(&self, word: &str) -> String {
        let (head, last) = word.split_at(last_word_start(word));
        if last.is_empty() {
            return pluralizer::pluralize(word, 1, false);
        }
        let lower = last.to_lowercase();
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_owned();
        }
        if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == lower) {
            return format!("{head}{}", restore_case(last, singular));
        }
        format!("{head}{}", pluralizer::pluralize(last, 1, false))
    }
}

/// Byte offset where the last word of `name` begins
fn last_word_start(name: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in name.char_indices() {
        if c == '_' || c == '-' {
            start = i + c.len_utf8();
        } else if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            start = i;
        }
        prev = Some(c);
    }
    start
}

fn restore_case(original: &str, replacement: &str) -> String {
    if original.chars().all(|c| !c.is_lowercase()) {
        replacement.to_uppercase()
    } else if original.starts_with(|c: char| c.is_uppercase()) {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_owned()
    }
}
