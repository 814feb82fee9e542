use strum::IntoEnumIterator;

use crate::countries::Country;
use crate::phones::errors::{InvalidDigitsError, ResolveError};
use crate::phones::Phone;

#[test]
fn resolve_without_prefix_returns_highest_priority_candidate() {
    assert_eq!(Phone::resolve(1), Ok(Phone::BB));
    assert_eq!(Phone::resolve(7), Ok(Phone::RU));
    assert_eq!(Phone::resolve(44), Ok(Phone::JE));
    assert_eq!(Phone::resolve(358), Ok(Phone::FI));
    assert_eq!(Phone::resolve(599), Ok(Phone::BQ));
}

#[test]
fn resolve_accepts_all_canonical_input_forms() {
    assert_eq!(Phone::resolve("+1"), Phone::resolve(1));
    assert_eq!(Phone::resolve("1"), Phone::resolve(1));
    assert_eq!(Phone::resolve_with_prefix("+44", "+1534"), Ok(Phone::JE));
    assert_eq!(Phone::resolve_with_prefix("44", "1534"), Ok(Phone::JE));
    assert_eq!(Phone::resolve_with_prefix(44u32, 1534u32), Ok(Phone::JE));
    assert_eq!(Phone::resolve_with_prefix(44i64, 1534i64), Ok(Phone::JE));
}

#[test]
fn resolve_is_deterministic() {
    let first = Phone::resolve(1).unwrap();
    for _ in 0..16 {
        assert_eq!(Phone::resolve(1), Ok(first));
    }
}

#[test]
fn every_declared_prefix_resolves_to_its_own_territory() {
    for phone in Phone::iter() {
        for &prefix in phone.prefixes() {
            assert_eq!(
                Phone::resolve_with_prefix(phone.calling_code(), prefix),
                Ok(phone),
                "prefix {} of {:?}",
                prefix,
                phone,
            );
        }
    }
}

#[test]
fn longest_matching_prefix_wins() {
    // 325 matches the US exactly; every other +1 territory only offers
    // shorter overlap, if any.
    assert_eq!(Phone::resolve_with_prefix(1, 325), Ok(Phone::US));
    assert_eq!(Phone::resolve_with_prefix(7, 317), Ok(Phone::KZ));
}

#[test]
fn equal_length_matches_fall_back_to_declaration_order() {
    // Hint 3 is a truncation of 3xx prefixes declared by several NANPA
    // members; Canada is declared before the other matches.
    assert_eq!(Phone::resolve_with_prefix(1, 3), Ok(Phone::CA));
}

#[test]
fn hint_may_be_a_truncation_of_a_declared_prefix() {
    assert_eq!(Phone::resolve_with_prefix(44, 15), Ok(Phone::JE));
    assert_eq!(Phone::resolve_with_prefix(358, 1), Ok(Phone::AX));
}

#[test]
fn declared_prefix_may_be_a_truncation_of_the_hint() {
    // 18 is declared for the Åland Islands; 189 extends it.
    assert_eq!(Phone::resolve_with_prefix(358, 189), Ok(Phone::AX));
    assert_eq!(Phone::resolve_with_prefix(358, 18), Ok(Phone::AX));
}

#[test]
fn unmatched_hint_falls_back_to_first_prefix_bearing_candidate() {
    assert_eq!(Phone::resolve_with_prefix(7, 999), Ok(Phone::KZ));
    assert_eq!(Phone::resolve_with_prefix(1, 999), Ok(Phone::BB));
    assert_eq!(Phone::resolve_with_prefix(358, 99), Ok(Phone::AX));
}

#[test]
fn unmatched_hint_without_any_prefixed_candidate_uses_first_overall() {
    assert_eq!(Phone::resolve_with_prefix(880, 5), Ok(Phone::BD));
    // +590 is shared by three territories, none of which declare prefixes.
    assert_eq!(Phone::resolve_with_prefix(590, 123), Ok(Phone::BL));
}

#[test]
fn unknown_calling_code_is_an_error() {
    assert_eq!(Phone::resolve(999), Err(ResolveError::UnknownCallingCode(999)));
    assert_eq!(
        Phone::resolve_with_prefix(999, 1),
        Err(ResolveError::UnknownCallingCode(999))
    );
    assert_eq!(Phone::resolve(0), Err(ResolveError::UnknownCallingCode(0)));
}

#[test]
fn malformed_code_input_is_rejected() {
    assert!(matches!(
        Phone::resolve(""),
        Err(ResolveError::InvalidCodeFormat(InvalidDigitsError::NotDigits(_)))
    ));
    assert!(matches!(
        Phone::resolve("+"),
        Err(ResolveError::InvalidCodeFormat(_))
    ));
    assert!(matches!(
        Phone::resolve("44a"),
        Err(ResolveError::InvalidCodeFormat(_))
    ));
    assert!(matches!(
        Phone::resolve("++44"),
        Err(ResolveError::InvalidCodeFormat(_))
    ));
    assert!(matches!(
        Phone::resolve(-1),
        Err(ResolveError::InvalidCodeFormat(InvalidDigitsError::Negative(-1)))
    ));
    assert!(matches!(
        Phone::resolve("99999999999999999999999999"),
        Err(ResolveError::InvalidCodeFormat(InvalidDigitsError::OutOfRange(_)))
    ));
}

#[test]
fn malformed_prefix_input_is_rejected_separately() {
    assert!(matches!(
        Phone::resolve_with_prefix(1, "abc"),
        Err(ResolveError::InvalidPrefixFormat(InvalidDigitsError::NotDigits(_)))
    ));
    assert!(matches!(
        Phone::resolve_with_prefix(1, -3),
        Err(ResolveError::InvalidPrefixFormat(InvalidDigitsError::Negative(-3)))
    ));
    // The code argument is validated first.
    assert!(matches!(
        Phone::resolve_with_prefix("x", "y"),
        Err(ResolveError::InvalidCodeFormat(_))
    ));
}

#[test]
fn strict_resolution_rejects_unmatched_hints() {
    assert_eq!(Phone::resolve_strict(7, 317), Ok(Phone::KZ));
    assert_eq!(Phone::resolve_strict(44, 15), Ok(Phone::JE));
    assert_eq!(
        Phone::resolve_strict(7, 999),
        Err(ResolveError::UnmatchedPrefix { code: 7, prefix: 999 })
    );
    assert_eq!(
        Phone::resolve_strict(999, 1),
        Err(ResolveError::UnknownCallingCode(999))
    );
}

#[test]
fn resolved_identifier_round_trips_through_serde() {
    let resolved = Phone::resolve_with_prefix(1, 325).unwrap();
    let serialized = serde_json::to_string(&resolved).unwrap();
    assert_eq!(serialized, "\"US\"");
    let deserialized: Phone = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, resolved);
}

#[test]
fn units_expose_the_owning_country() {
    assert_eq!(Phone::US.country(), Country::US);
    assert_eq!(Phone::KZ.calling_code(), 7);
    assert!(Phone::RU.prefixes().is_empty());
    assert_eq!(Phone::US.to_string(), "1");
    assert_eq!(Phone::GB.calling_code(), 44);
}

#[test]
fn prefix_support_follows_truncation_semantics() {
    assert!(Phone::US.is_prefix_supported(325));
    assert!(Phone::AX.is_prefix_supported(1));
    assert!(Phone::AX.is_prefix_supported(189));
    assert!(!Phone::US.is_prefix_supported(999));
    // Territories without declared prefixes accept anything.
    assert!(Phone::RU.is_prefix_supported(999));
}

#[test]
fn fallback_logging_does_not_disturb_resolution() {
    colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    assert_eq!(Phone::resolve_with_prefix(7, 999), Ok(Phone::KZ));
    assert_eq!(Phone::resolve_with_prefix(7, 999), Ok(Phone::KZ));
}

#[test]
fn error_messages_name_the_offending_input() {
    assert_eq!(
        Phone::resolve(999).unwrap_err().to_string(),
        "no territory is assigned the calling code +999"
    );
    assert_eq!(
        Phone::resolve("4x4").unwrap_err().to_string(),
        "invalid calling code: \"4x4\" does not match an optional '+' followed by decimal digits"
    );
}
