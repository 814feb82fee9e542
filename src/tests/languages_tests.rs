use crate::languages::Language;

#[test]
fn find_matches_alpha_3_and_alpha_2() {
    assert_eq!(Language::find("eng"), Ok(Language::ENG));
    assert_eq!(Language::find("en"), Ok(Language::ENG));
    assert_eq!(Language::find("zap"), Ok(Language::ZAP));
}

#[test]
fn unknown_code_is_an_error() {
    let err = Language::find("xx").unwrap_err();
    assert_eq!(err.to_string(), "\"xx\" is not a valid Language");
    assert!(Language::find("english").is_err());
}

#[test]
fn units_expose_bibliographic_and_terminology_variants() {
    assert_eq!(Language::GER.alpha_2(), Some("de"));
    assert_eq!(Language::GER.alpha_3(), "ger");
    assert_eq!(Language::GER.bibliographic(), Some("ger"));
    assert_eq!(Language::GER.terminology(), "deu");
    // Tibetan keeps separate bibliographic and terminology codes.
    assert_eq!(Language::BOD.bibliographic(), Some("tib"));
    assert_eq!(Language::BOD.terminology(), "bod");
}

#[test]
fn languages_without_an_alpha_2_code_report_none() {
    assert_eq!(Language::ZAP.alpha_2(), None);
    assert_eq!(Language::ZAP.name(), "Zapotec");
}

#[test]
fn display_and_serde_forms() {
    assert_eq!(Language::ENG.to_string(), "eng");
    let serialized = serde_json::to_string(&Language::ENG).unwrap();
    assert_eq!(serialized, "\"ENG\"");
    let deserialized: Language = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, Language::ENG);
}
