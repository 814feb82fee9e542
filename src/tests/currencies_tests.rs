use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::currencies::{AmountError, Currency};

#[test]
fn clean_amount_rejects_negative_amounts() {
    assert_eq!(
        Currency::USD.clean_amount(dec!(-20)),
        Err(AmountError::NegativeAmountNotAllowed(dec!(-20)))
    );
}

#[test]
fn clean_amount_rejects_excess_decimal_digits() {
    assert_eq!(
        Currency::USD.clean_amount(dec!(1.234)),
        Err(AmountError::WrongAmountDigitsNumber {
            amount: dec!(1.234),
            currency: Currency::USD,
            digits: 2,
        })
    );
    assert!(Currency::BIF.clean_amount(dec!(5.1)).is_err());
}

#[test]
fn clean_amount_pads_missing_digits() {
    assert_eq!(Currency::USD.clean_amount(dec!(20.2)).unwrap().to_string(), "20.20");
    assert_eq!(Currency::BHD.clean_amount(dec!(1.2)).unwrap().to_string(), "1.200");
    assert_eq!(Currency::BIF.clean_amount(dec!(5)).unwrap().to_string(), "5");
}

#[test]
fn clean_amount_tolerates_trailing_zeros() {
    // 1.230000 carries no significant digit beyond the second place.
    assert_eq!(Currency::USD.clean_amount(dec!(1.230000)).unwrap().to_string(), "1.23");
    assert_eq!(Currency::BIF.clean_amount(dec!(5.0)).unwrap().to_string(), "5");
}

#[test]
fn clean_amount_is_idempotent() {
    let once = Currency::BHD.clean_amount(dec!(1.2)).unwrap();
    assert_eq!(Currency::BHD.clean_amount(once), Ok(once));
    let once = Currency::USD.clean_amount(Decimal::ZERO).unwrap();
    assert_eq!(once.to_string(), "0.00");
    assert_eq!(Currency::USD.clean_amount(once), Ok(once));
}

#[test]
fn zero_amounts_are_accepted_unless_positivity_is_required() {
    assert!(Currency::USD.clean_amount(Decimal::ZERO).is_ok());
    assert_eq!(
        Currency::USD.clean_positive_amount(Decimal::ZERO),
        Err(AmountError::ZeroAmountNotAllowed)
    );
    assert_eq!(
        Currency::USD.clean_positive_amount(dec!(-1)),
        Err(AmountError::NegativeAmountNotAllowed(dec!(-1)))
    );
    assert_eq!(Currency::USD.clean_positive_amount(dec!(1)).unwrap().to_string(), "1.00");
}

#[test]
fn digit_buckets_follow_table_order() {
    let zero = Currency::zero_digits();
    assert_eq!(
        *zero,
        vec![
            Currency::BIF,
            Currency::CLP,
            Currency::DJF,
            Currency::GNF,
            Currency::JPY,
            Currency::KMF,
            Currency::KRW,
            Currency::MGA,
            Currency::PYG,
            Currency::RWF,
            Currency::UGX,
            Currency::VND,
            Currency::VUV,
            Currency::XAF,
            Currency::XOF,
            Currency::XPF,
        ]
    );
    let three = Currency::three_digits();
    assert_eq!(
        *three,
        vec![Currency::BHD, Currency::JOD, Currency::KWD, Currency::OMR, Currency::TND]
    );
}

#[test]
fn digit_buckets_are_cached_and_consistent() {
    let first = Currency::two_digits();
    let second = Currency::two_digits();
    assert_eq!(first, second);
    assert!(first.contains(&Currency::USD));
    assert!(!first.contains(&Currency::BHD));
    assert!(Currency::with_digits(7).is_empty());
}

#[test]
fn find_matches_alpha_3_and_numeric() {
    assert_eq!(Currency::find("USD"), Ok(Currency::USD));
    assert_eq!(Currency::find("840"), Ok(Currency::USD));
    assert_eq!(Currency::find("048"), Ok(Currency::BHD));
    let err = Currency::find("ZZZ").unwrap_err();
    assert_eq!(err.to_string(), "\"ZZZ\" is not a valid Currency");
}

#[test]
fn units_carry_iso_attributes() {
    assert_eq!(Currency::USD.name(), "US Dollar");
    assert_eq!(Currency::USD.digits(), 2);
    assert_eq!(Currency::BHD.digits(), 3);
    assert_eq!(Currency::JPY.digits(), 0);
    assert_eq!(Currency::USD.to_string(), "USD");
}

#[test]
fn serde_round_trips_the_alpha_3_identifier() {
    let serialized = serde_json::to_string(&Currency::USD).unwrap();
    assert_eq!(serialized, "\"USD\"");
    let deserialized: Currency = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, Currency::USD);
}
