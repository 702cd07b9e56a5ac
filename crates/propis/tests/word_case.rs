//! Tests for unit-name agreement and the per-register word lists.

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use propis::{
    DigitTriple, Gender, UnitNaming, WordCase, ZERO, morph, numeral_words, register_words,
    unit_word,
};

fn rubles() -> UnitNaming {
    UnitNaming::new("рубль", "рубля", "рублей", Gender::Male)
}

#[test]
fn word_case_matches_final_digit() {
    assert_eq!(WordCase::for_value(0), WordCase::Plural);
    assert_eq!(WordCase::for_value(1), WordCase::Subjective);
    for n in 2..=4 {
        assert_eq!(WordCase::for_value(n), WordCase::Genitive);
    }
    for n in 5..=20 {
        assert_eq!(WordCase::for_value(n), WordCase::Plural, "n = {n}");
    }
    assert_eq!(WordCase::for_value(21), WordCase::Subjective);
    assert_eq!(WordCase::for_value(104), WordCase::Genitive);
    assert_eq!(WordCase::for_value(111), WordCase::Plural);
    assert_eq!(WordCase::for_value(1_000_001), WordCase::Subjective);
}

#[test]
fn word_case_agrees_with_cldr_russian_cardinals() {
    let rules = PluralRules::try_new(locale!("ru").into(), PluralRuleType::Cardinal.into())
        .expect("russian plural rules");
    for n in 0..2000_i64 {
        let expected = match rules.category_for(n) {
            PluralCategory::One => WordCase::Subjective,
            PluralCategory::Few => WordCase::Genitive,
            _ => WordCase::Plural,
        };
        assert_eq!(WordCase::for_value(n.unsigned_abs()), expected, "n = {n}");
    }
}

#[test]
fn zero_triple_is_single_word() {
    assert_eq!(numeral_words(DigitTriple::ZERO, Gender::Male), vec![ZERO]);
    assert_eq!(
        register_words(DigitTriple::ZERO, &rubles()),
        vec!["ноль", "рублей"]
    );
}

#[test]
fn teens_replace_tens_and_units() {
    let naming = rubles();
    for n in 10..20 {
        let words = register_words(DigitTriple::from_value(n), &naming);
        assert_eq!(words.len(), 2, "n = {n}: {words:?}");
        assert_eq!(words[1], "рублей");
    }
    assert_eq!(
        numeral_words(DigitTriple::from_value(517), Gender::Female),
        vec!["пятьсот", "семнадцать"]
    );
}

#[test]
fn round_tens_have_no_unit_word() {
    assert_eq!(
        numeral_words(DigitTriple::from_value(60), Gender::Male),
        vec!["шестьдесят"]
    );
    assert_eq!(
        numeral_words(DigitTriple::from_value(900), Gender::Male),
        vec!["девятьсот"]
    );
}

#[test]
fn gender_changes_only_one_and_two() {
    for digit in 1..=9 {
        let differs = unit_word(digit, Gender::Male) != unit_word(digit, Gender::Female);
        assert_eq!(differs, digit <= 2, "digit = {digit}");
    }
    assert_eq!(unit_word(1, Gender::Female), "одна");
    assert_eq!(unit_word(2, Gender::Female), "две");
}

#[test]
fn morph_reads_triple_value() {
    let naming = rubles();
    assert_eq!(morph(&naming, DigitTriple::from_value(1)), "рубль");
    assert_eq!(morph(&naming, DigitTriple::from_value(43)), "рубля");
    assert_eq!(morph(&naming, DigitTriple::from_value(311)), "рублей");
    assert_eq!(morph(&UnitNaming::none(), DigitTriple::from_value(1)), "");
}

#[test]
fn register_words_omit_empty_unit() {
    assert_eq!(
        register_words(DigitTriple::from_value(42), &UnitNaming::none()),
        vec!["сорок", "два"]
    );
}

#[test]
fn digit_triple_parsing() {
    assert_eq!(DigitTriple::parse("7"), Some(DigitTriple::from_value(7)));
    assert_eq!(DigitTriple::parse("045"), Some(DigitTriple::from_value(45)));
    assert_eq!(DigitTriple::parse(""), None);
    assert_eq!(DigitTriple::parse("1234"), None);
    assert_eq!(DigitTriple::parse("1a"), None);

    let triple = DigitTriple::from_value(305);
    assert_eq!(triple.digits(), [3, 0, 5]);
    assert_eq!(triple.to_string(), "305");
    assert_eq!(triple.value(), 305);

    assert_eq!(DigitTriple::last_three(1_234_567), DigitTriple::from_value(567));
    assert_eq!(DigitTriple::last_three(42), DigitTriple::from_value(42));
    assert_eq!(DigitTriple::last_three(5_000), DigitTriple::ZERO);
}
