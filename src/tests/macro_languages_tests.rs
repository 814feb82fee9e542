use crate::macro_languages::{IndividualStatus, MacroLanguage};

#[test]
fn find_returns_all_members_in_table_order() {
    let members = MacroLanguage::find("ara").unwrap();
    assert_eq!(members.len(), 30);
    assert_eq!(members[0], MacroLanguage::AAO);
    assert!(members.iter().all(|member| member.m_id() == "ara"));
}

#[test]
fn find_is_case_insensitive() {
    assert_eq!(MacroLanguage::find("ARA"), MacroLanguage::find("ara"));
}

#[test]
fn find_with_status_filters_members() {
    let retired = MacroLanguage::find_with_status("ara", IndividualStatus::Retired).unwrap();
    assert_eq!(retired, vec![MacroLanguage::AJP, MacroLanguage::BBZ]);
    let active = MacroLanguage::find_with_status("ara", IndividualStatus::Active).unwrap();
    assert_eq!(active.len(), 28);
    assert!(active.iter().all(|member| member.i_status() == IndividualStatus::Active));
}

#[test]
fn unknown_id_is_an_error() {
    let err = MacroLanguage::find("non_existent").unwrap_err();
    assert_eq!(err.to_string(), "\"non_existent\" is not a valid MacroLanguage");
    // A known id with no members of the requested status also fails.
    assert!(MacroLanguage::find_with_status("zza", IndividualStatus::Retired).is_err());
}

#[test]
fn units_expose_membership_attributes() {
    assert_eq!(MacroLanguage::AAO.m_id(), "ara");
    assert_eq!(MacroLanguage::AAO.i_id(), "AAO");
    assert_eq!(MacroLanguage::AAO.i_status(), IndividualStatus::Active);
    assert_eq!(MacroLanguage::AAO.to_string(), "ara");
}

#[test]
fn serde_round_trips_the_individual_code() {
    let serialized = serde_json::to_string(&MacroLanguage::AAO).unwrap();
    assert_eq!(serialized, "\"AAO\"");
    let deserialized: MacroLanguage = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, MacroLanguage::AAO);
}
