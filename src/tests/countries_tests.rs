use strum::IntoEnumIterator;

use crate::countries::Country;

#[test]
fn find_matches_alpha_2_alpha_3_and_numeric() {
    assert_eq!(Country::find("US"), Ok(Country::US));
    assert_eq!(Country::find("USA"), Ok(Country::US));
    assert_eq!(Country::find("840"), Ok(Country::US));
    assert_eq!(Country::find("004"), Ok(Country::AF));
}

#[test]
fn find_numeric_ignores_zero_padding() {
    assert_eq!(Country::find_numeric(4), Ok(Country::AF));
    assert_eq!(Country::find_numeric(840), Ok(Country::US));
}

#[test]
fn unknown_value_is_an_error() {
    let err = Country::find("XX").unwrap_err();
    assert_eq!(err.to_string(), "\"XX\" is not a valid Country");
    assert_eq!(err.value(), "XX");
    assert!(Country::find("").is_err());
    assert!(Country::find_numeric(0).is_err());
}

#[test]
fn units_carry_iso_attributes() {
    assert_eq!(Country::US.alpha_2(), "US");
    assert_eq!(Country::US.alpha_3(), "USA");
    assert_eq!(Country::US.numeric(), "840");
    assert_eq!(Country::US.name(), "United States");
    assert_eq!(Country::US.official_name(), "United States of America");
    assert_eq!(Country::AF.official_name(), "Islamic Republic of Afghanistan");
}

#[test]
fn every_entry_is_discoverable_by_its_own_codes() {
    for country in Country::iter() {
        assert_eq!(Country::find(country.alpha_2()), Ok(country));
        assert_eq!(Country::find(country.alpha_3()), Ok(country));
        assert_eq!(Country::find(country.numeric()), Ok(country));
    }
}

#[test]
fn display_and_serde_use_the_alpha_2_form() {
    assert_eq!(Country::US.to_string(), "US");
    let serialized = serde_json::to_string(&Country::MT).unwrap();
    assert_eq!(serialized, "\"MT\"");
    let deserialized: Country = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, Country::MT);
}
