use bon::Builder;

use super::Register;

/// Grammatical gender of a unit noun.
///
/// Gender decides between "один"/"одна" and "два"/"две"; every other digit
/// word is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// The noun form a numeral requires of the unit name that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCase {
    /// Dictionary form, used after numbers ending in 1 ("один рубль").
    Subjective,
    /// Genitive singular, used after numbers ending in 2-4 ("два рубля").
    Genitive,
    /// Genitive plural, used after 0, 5-9 and 11-19 ("пять рублей").
    Plural,
}

impl WordCase {
    /// Select the unit-name form agreeing with a register value.
    ///
    /// Only the last two digits matter: 11-19 always take the plural, and
    /// otherwise the final digit decides.
    ///
    /// # Example
    ///
    /// ```
    /// use propis::WordCase;
    ///
    /// assert_eq!(WordCase::for_value(21), WordCase::Subjective);
    /// assert_eq!(WordCase::for_value(3), WordCase::Genitive);
    /// assert_eq!(WordCase::for_value(12), WordCase::Plural);
    /// assert_eq!(WordCase::for_value(0), WordCase::Plural);
    /// ```
    pub fn for_value(n: u64) -> WordCase {
        let n100 = n % 100;
        if n100 > 10 && n100 < 20 {
            return WordCase::Plural;
        }
        match n100 % 10 {
            1 => WordCase::Subjective,
            2..=4 => WordCase::Genitive,
            _ => WordCase::Plural,
        }
    }
}

/// How the unit of one register is named.
///
/// # Example
///
/// ```
/// use propis::{Gender, UnitNaming, WordCase};
///
/// let pieces = UnitNaming::builder()
///     .subjective("штука")
///     .genitive("штуки")
///     .plural("штук")
///     .gender(Gender::Female)
///     .build();
///
/// assert_eq!(pieces.form(WordCase::Genitive), "штуки");
/// assert_eq!(pieces.gender, Gender::Female);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder)]
#[builder(on(String, into))]
pub struct UnitNaming {
    /// Form after numbers ending in 1.
    #[builder(default)]
    pub subjective: String,

    /// Form after numbers ending in 2-4.
    #[builder(default)]
    pub genitive: String,

    /// Form after everything else.
    #[builder(default)]
    pub plural: String,

    #[builder(default)]
    pub gender: Gender,
}

impl UnitNaming {
    /// Create a naming record from its four fields.
    pub fn new(
        subjective: impl Into<String>,
        genitive: impl Into<String>,
        plural: impl Into<String>,
        gender: Gender,
    ) -> Self {
        UnitNaming::builder()
            .subjective(subjective)
            .genitive(genitive)
            .plural(plural)
            .gender(gender)
            .build()
    }

    /// A naming with no unit words, so the register renders bare numerals.
    pub fn none() -> Self {
        UnitNaming::default()
    }

    /// Get the unit name for a grammatical case. May be empty.
    pub fn form(&self, case: WordCase) -> &str {
        match case {
            WordCase::Subjective => &self.subjective,
            WordCase::Genitive => &self.genitive,
            WordCase::Plural => &self.plural,
        }
    }

    /// Default names for registers 0-4: kopecks, roubles, thousands,
    /// millions, billions.
    pub fn defaults() -> [UnitNaming; Register::COUNT] {
        [
            UnitNaming::new("копейка", "копейки", "копеек", Gender::Female),
            UnitNaming::new("рубль", "рубля", "рублей", Gender::Male),
            UnitNaming::new("тысяча", "тысячи", "тысяч", Gender::Female),
            UnitNaming::new("миллион", "миллиона", "миллионов", Gender::Male),
            UnitNaming::new("миллиард", "миллиарда", "миллиардов", Gender::Male),
        ]
    }
}
