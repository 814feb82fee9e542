// Copyright (C) 2026 The rcountries Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::errors::UnitNotFoundError;

/// Static attributes of one ISO 4217 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyUnit {
    pub alpha_3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
    /// Number of digits after the decimal separator (minor units).
    pub digits: u32,
}

/// Rejections produced by the amount cleansing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("negative amount {0} is not allowed")]
    NegativeAmountNotAllowed(Decimal),
    #[error("zero amount is not allowed")]
    ZeroAmountNotAllowed,
    #[error("amount {amount} has more decimal digits than the {digits} allowed for {currency}")]
    WrongAmountDigitsNumber {
        amount: Decimal,
        currency: Currency,
        digits: u32,
    },
}

/// Memoized digit buckets. The scan behind a bucket is pure, so a racing
/// insert for the same key produces the same value.
static CURRENCIES_BY_DIGITS: LazyLock<DashMap<u32, Arc<Vec<Currency>>>> =
    LazyLock::new(DashMap::new);

/// ISO 4217 currency registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Currency {
    AED,
    AFN,
    ALL,
    AMD,
    ANG,
    AOA,
    ARS,
    AUD,
    AWG,
    AZN,
    BAM,
    BBD,
    BDT,
    BGN,
    BHD,
    BIF,
    BMD,
    BND,
    BOB,
    BOV,
    BRL,
    BSD,
    BTN,
    BWP,
    BYN,
    BZD,
    CAD,
    CDF,
    CHE,
    CHF,
    CHW,
    CLF,
    CLP,
    CNY,
    COP,
    COU,
    CRC,
    CUC,
    CUP,
    CVE,
    CZK,
    DJF,
    DKK,
    DOP,
    DZD,
    EGP,
    ERN,
    ETB,
    EUR,
    FJD,
    FKP,
    GBP,
    GEL,
    GHS,
    GIP,
    GMD,
    GNF,
    GTQ,
    GYD,
    HKD,
    HNL,
    HRK,
    HTG,
    HUF,
    IDR,
    ILS,
    INR,
    IQD,
    IRR,
    ISK,
    JMD,
    JOD,
    JPY,
    KES,
    KGS,
    KHR,
    KMF,
    KPW,
    KRW,
    KWD,
    KYD,
    KZT,
    LAK,
    LBP,
    LKR,
    LRD,
    LSL,
    LYD,
    MAD,
    MDL,
    MGA,
    MKD,
    MMK,
    MNT,
    MOP,
    MRU,
    MUR,
    MVR,
    MWK,
    MXN,
    MXV,
    MYR,
    MZN,
    NAD,
    NGN,
    NIO,
    NOK,
    NPR,
    NZD,
    OMR,
    PAB,
    PEN,
    PGK,
    PHP,
    PKR,
    PLN,
    PYG,
    QAR,
    RON,
    RSD,
    RUB,
    RWF,
    SAR,
    SBD,
    SCR,
    SDG,
    SEK,
    SGD,
    SHP,
    SLE,
    SLL,
    SOS,
    SRD,
    SSP,
    STN,
    SVC,
    SYP,
    SZL,
    THB,
    TJS,
    TMT,
    TND,
    TOP,
    TRY,
    TTD,
    TWD,
    TZS,
    UAH,
    UGX,
    USD,
    USN,
    UYI,
    UYU,
    UYW,
    UZS,
    VED,
    VES,
    VND,
    VUV,
    WST,
    XAF,
    XAG,
    XAU,
    XBA,
    XBB,
    XBC,
    XBD,
    XCD,
    XDR,
    XOF,
    XPD,
    XPF,
    XPT,
    XSU,
    XTS,
    XUA,
    XXX,
    YER,
    ZAR,
    ZMW,
    ZWL,
}

impl Currency {
    /// The static ISO 4217 attributes attached to this entry.
    pub const fn unit(self) -> &'static CurrencyUnit {
        match self {
            Self::AED => &CurrencyUnit { alpha_3: "AED", numeric: "784", name: "UAE Dirham", digits: 2 },
            Self::AFN => &CurrencyUnit { alpha_3: "AFN", numeric: "971", name: "Afghani", digits: 2 },
            Self::ALL => &CurrencyUnit { alpha_3: "ALL", numeric: "008", name: "Lek", digits: 2 },
            Self::AMD => &CurrencyUnit { alpha_3: "AMD", numeric: "051", name: "Armenian Dram", digits: 2 },
            Self::ANG => &CurrencyUnit { alpha_3: "ANG", numeric: "532", name: "Netherlands Antillean Guilder", digits: 2 },
            Self::AOA => &CurrencyUnit { alpha_3: "AOA", numeric: "973", name: "Kwanza", digits: 2 },
            Self::ARS => &CurrencyUnit { alpha_3: "ARS", numeric: "032", name: "Argentine Peso", digits: 2 },
            Self::AUD => &CurrencyUnit { alpha_3: "AUD", numeric: "036", name: "Australian Dollar", digits: 2 },
            Self::AWG => &CurrencyUnit { alpha_3: "AWG", numeric: "533", name: "Aruban Florin", digits: 2 },
            Self::AZN => &CurrencyUnit { alpha_3: "AZN", numeric: "944", name: "Azerbaijan Manat", digits: 2 },
            Self::BAM => &CurrencyUnit { alpha_3: "BAM", numeric: "977", name: "Convertible Mark", digits: 2 },
            Self::BBD => &CurrencyUnit { alpha_3: "BBD", numeric: "052", name: "Barbados Dollar", digits: 2 },
            Self::BDT => &CurrencyUnit { alpha_3: "BDT", numeric: "050", name: "Taka", digits: 2 },
            Self::BGN => &CurrencyUnit { alpha_3: "BGN", numeric: "975", name: "Bulgarian Lev", digits: 2 },
            Self::BHD => &CurrencyUnit { alpha_3: "BHD", numeric: "048", name: "Bahraini Dinar", digits: 3 },
            Self::BIF => &CurrencyUnit { alpha_3: "BIF", numeric: "108", name: "Burundi Franc", digits: 0 },
            Self::BMD => &CurrencyUnit { alpha_3: "BMD", numeric: "060", name: "Bermudian Dollar", digits: 2 },
            Self::BND => &CurrencyUnit { alpha_3: "BND", numeric: "096", name: "Brunei Dollar", digits: 2 },
            Self::BOB => &CurrencyUnit { alpha_3: "BOB", numeric: "068", name: "Boliviano", digits: 2 },
            Self::BOV => &CurrencyUnit { alpha_3: "BOV", numeric: "984", name: "Mvdol", digits: 2 },
            Self::BRL => &CurrencyUnit { alpha_3: "BRL", numeric: "986", name: "Brazilian Real", digits: 2 },
            Self::BSD => &CurrencyUnit { alpha_3: "BSD", numeric: "044", name: "Bahamian Dollar", digits: 2 },
            Self::BTN => &CurrencyUnit { alpha_3: "BTN", numeric: "064", name: "Ngultrum", digits: 2 },
            Self::BWP => &CurrencyUnit { alpha_3: "BWP", numeric: "072", name: "Pula", digits: 2 },
            Self::BYN => &CurrencyUnit { alpha_3: "BYN", numeric: "933", name: "Belarusian Ruble", digits: 2 },
            Self::BZD => &CurrencyUnit { alpha_3: "BZD", numeric: "084", name: "Belize Dollar", digits: 2 },
            Self::CAD => &CurrencyUnit { alpha_3: "CAD", numeric: "124", name: "Canadian Dollar", digits: 2 },
            Self::CDF => &CurrencyUnit { alpha_3: "CDF", numeric: "976", name: "Congolese Franc", digits: 2 },
            Self::CHE => &CurrencyUnit { alpha_3: "CHE", numeric: "947", name: "WIR Euro", digits: 2 },
            Self::CHF => &CurrencyUnit { alpha_3: "CHF", numeric: "756", name: "Swiss Franc", digits: 2 },
            Self::CHW => &CurrencyUnit { alpha_3: "CHW", numeric: "948", name: "WIR Franc", digits: 2 },
            Self::CLF => &CurrencyUnit { alpha_3: "CLF", numeric: "990", name: "Unidad de Fomento", digits: 2 },
            Self::CLP => &CurrencyUnit { alpha_3: "CLP", numeric: "152", name: "Chilean Peso", digits: 0 },
            Self::CNY => &CurrencyUnit { alpha_3: "CNY", numeric: "156", name: "Yuan Renminbi", digits: 2 },
            Self::COP => &CurrencyUnit { alpha_3: "COP", numeric: "170", name: "Colombian Peso", digits: 2 },
            Self::COU => &CurrencyUnit { alpha_3: "COU", numeric: "970", name: "Unidad de Valor Real", digits: 2 },
            Self::CRC => &CurrencyUnit { alpha_3: "CRC", numeric: "188", name: "Costa Rican Colon", digits: 2 },
            Self::CUC => &CurrencyUnit { alpha_3: "CUC", numeric: "931", name: "Peso Convertible", digits: 2 },
            Self::CUP => &CurrencyUnit { alpha_3: "CUP", numeric: "192", name: "Cuban Peso", digits: 2 },
            Self::CVE => &CurrencyUnit { alpha_3: "CVE", numeric: "132", name: "Cabo Verde Escudo", digits: 2 },
            Self::CZK => &CurrencyUnit { alpha_3: "CZK", numeric: "203", name: "Czech Koruna", digits: 2 },
            Self::DJF => &CurrencyUnit { alpha_3: "DJF", numeric: "262", name: "Djibouti Franc", digits: 0 },
            Self::DKK => &CurrencyUnit { alpha_3: "DKK", numeric: "208", name: "Danish Krone", digits: 2 },
            Self::DOP => &CurrencyUnit { alpha_3: "DOP", numeric: "214", name: "Dominican Peso", digits: 2 },
            Self::DZD => &CurrencyUnit { alpha_3: "DZD", numeric: "012", name: "Algerian Dinar", digits: 2 },
            Self::EGP => &CurrencyUnit { alpha_3: "EGP", numeric: "818", name: "Egyptian Pound", digits: 2 },
            Self::ERN => &CurrencyUnit { alpha_3: "ERN", numeric: "232", name: "Nakfa", digits: 2 },
            Self::ETB => &CurrencyUnit { alpha_3: "ETB", numeric: "230", name: "Ethiopian Birr", digits: 2 },
            Self::EUR => &CurrencyUnit { alpha_3: "EUR", numeric: "978", name: "Euro", digits: 2 },
            Self::FJD => &CurrencyUnit { alpha_3: "FJD", numeric: "242", name: "Fiji Dollar", digits: 2 },
            Self::FKP => &CurrencyUnit { alpha_3: "FKP", numeric: "238", name: "Falkland Islands Pound", digits: 2 },
            Self::GBP => &CurrencyUnit { alpha_3: "GBP", numeric: "826", name: "Pound Sterling", digits: 2 },
            Self::GEL => &CurrencyUnit { alpha_3: "GEL", numeric: "981", name: "Lari", digits: 2 },
            Self::GHS => &CurrencyUnit { alpha_3: "GHS", numeric: "936", name: "Ghana Cedi", digits: 2 },
            Self::GIP => &CurrencyUnit { alpha_3: "GIP", numeric: "292", name: "Gibraltar Pound", digits: 2 },
            Self::GMD => &CurrencyUnit { alpha_3: "GMD", numeric: "270", name: "Dalasi", digits: 2 },
            Self::GNF => &CurrencyUnit { alpha_3: "GNF", numeric: "324", name: "Guinean Franc", digits: 0 },
            Self::GTQ => &CurrencyUnit { alpha_3: "GTQ", numeric: "320", name: "Quetzal", digits: 2 },
            Self::GYD => &CurrencyUnit { alpha_3: "GYD", numeric: "328", name: "Guyana Dollar", digits: 2 },
            Self::HKD => &CurrencyUnit { alpha_3: "HKD", numeric: "344", name: "Hong Kong Dollar", digits: 2 },
            Self::HNL => &CurrencyUnit { alpha_3: "HNL", numeric: "340", name: "Lempira", digits: 2 },
            Self::HRK => &CurrencyUnit { alpha_3: "HRK", numeric: "191", name: "Kuna", digits: 2 },
            Self::HTG => &CurrencyUnit { alpha_3: "HTG", numeric: "332", name: "Gourde", digits: 2 },
            Self::HUF => &CurrencyUnit { alpha_3: "HUF", numeric: "348", name: "Forint", digits: 2 },
            Self::IDR => &CurrencyUnit { alpha_3: "IDR", numeric: "360", name: "Rupiah", digits: 2 },
            Self::ILS => &CurrencyUnit { alpha_3: "ILS", numeric: "376", name: "New Israeli Sheqel", digits: 2 },
            Self::INR => &CurrencyUnit { alpha_3: "INR", numeric: "356", name: "Indian Rupee", digits: 2 },
            Self::IQD => &CurrencyUnit { alpha_3: "IQD", numeric: "368", name: "Iraqi Dinar", digits: 2 },
            Self::IRR => &CurrencyUnit { alpha_3: "IRR", numeric: "364", name: "Iranian Rial", digits: 2 },
            Self::ISK => &CurrencyUnit { alpha_3: "ISK", numeric: "352", name: "Iceland Krona", digits: 2 },
            Self::JMD => &CurrencyUnit { alpha_3: "JMD", numeric: "388", name: "Jamaican Dollar", digits: 2 },
            Self::JOD => &CurrencyUnit { alpha_3: "JOD", numeric: "400", name: "Jordanian Dinar", digits: 3 },
            Self::JPY => &CurrencyUnit { alpha_3: "JPY", numeric: "392", name: "Yen", digits: 0 },
            Self::KES => &CurrencyUnit { alpha_3: "KES", numeric: "404", name: "Kenyan Shilling", digits: 2 },
            Self::KGS => &CurrencyUnit { alpha_3: "KGS", numeric: "417", name: "Som", digits: 2 },
            Self::KHR => &CurrencyUnit { alpha_3: "KHR", numeric: "116", name: "Riel", digits: 2 },
            Self::KMF => &CurrencyUnit { alpha_3: "KMF", numeric: "174", name: "Comorian Franc", digits: 0 },
            Self::KPW => &CurrencyUnit { alpha_3: "KPW", numeric: "408", name: "North Korean Won", digits: 2 },
            Self::KRW => &CurrencyUnit { alpha_3: "KRW", numeric: "410", name: "Won", digits: 0 },
            Self::KWD => &CurrencyUnit { alpha_3: "KWD", numeric: "414", name: "Kuwaiti Dinar", digits: 3 },
            Self::KYD => &CurrencyUnit { alpha_3: "KYD", numeric: "136", name: "Cayman Islands Dollar", digits: 2 },
            Self::KZT => &CurrencyUnit { alpha_3: "KZT", numeric: "398", name: "Tenge", digits: 2 },
            Self::LAK => &CurrencyUnit { alpha_3: "LAK", numeric: "418", name: "Lao Kip", digits: 2 },
            Self::LBP => &CurrencyUnit { alpha_3: "LBP", numeric: "422", name: "Lebanese Pound", digits: 2 },
            Self::LKR => &CurrencyUnit { alpha_3: "LKR", numeric: "144", name: "Sri Lanka Rupee", digits: 2 },
            Self::LRD => &CurrencyUnit { alpha_3: "LRD", numeric: "430", name: "Liberian Dollar", digits: 2 },
            Self::LSL => &CurrencyUnit { alpha_3: "LSL", numeric: "426", name: "Loti", digits: 2 },
            Self::LYD => &CurrencyUnit { alpha_3: "LYD", numeric: "434", name: "Libyan Dinar", digits: 2 },
            Self::MAD => &CurrencyUnit { alpha_3: "MAD", numeric: "504", name: "Moroccan Dirham", digits: 2 },
            Self::MDL => &CurrencyUnit { alpha_3: "MDL", numeric: "498", name: "Moldovan Leu", digits: 2 },
            Self::MGA => &CurrencyUnit { alpha_3: "MGA", numeric: "969", name: "Malagasy Ariary", digits: 0 },
            Self::MKD => &CurrencyUnit { alpha_3: "MKD", numeric: "807", name: "Denar", digits: 2 },
            Self::MMK => &CurrencyUnit { alpha_3: "MMK", numeric: "104", name: "Kyat", digits: 2 },
            Self::MNT => &CurrencyUnit { alpha_3: "MNT", numeric: "496", name: "Tugrik", digits: 2 },
            Self::MOP => &CurrencyUnit { alpha_3: "MOP", numeric: "446", name: "Pataca", digits: 2 },
            Self::MRU => &CurrencyUnit { alpha_3: "MRU", numeric: "929", name: "Ouguiya", digits: 2 },
            Self::MUR => &CurrencyUnit { alpha_3: "MUR", numeric: "480", name: "Mauritius Rupee", digits: 2 },
            Self::MVR => &CurrencyUnit { alpha_3: "MVR", numeric: "462", name: "Rufiyaa", digits: 2 },
            Self::MWK => &CurrencyUnit { alpha_3: "MWK", numeric: "454", name: "Malawi Kwacha", digits: 2 },
            Self::MXN => &CurrencyUnit { alpha_3: "MXN", numeric: "484", name: "Mexican Peso", digits: 2 },
            Self::MXV => &CurrencyUnit { alpha_3: "MXV", numeric: "979", name: "Mexican Unidad de Inversion (UDI)", digits: 2 },
            Self::MYR => &CurrencyUnit { alpha_3: "MYR", numeric: "458", name: "Malaysian Ringgit", digits: 2 },
            Self::MZN => &CurrencyUnit { alpha_3: "MZN", numeric: "943", name: "Mozambique Metical", digits: 2 },
            Self::NAD => &CurrencyUnit { alpha_3: "NAD", numeric: "516", name: "Namibia Dollar", digits: 2 },
            Self::NGN => &CurrencyUnit { alpha_3: "NGN", numeric: "566", name: "Naira", digits: 2 },
            Self::NIO => &CurrencyUnit { alpha_3: "NIO", numeric: "558", name: "Cordoba Oro", digits: 2 },
            Self::NOK => &CurrencyUnit { alpha_3: "NOK", numeric: "578", name: "Norwegian Krone", digits: 2 },
            Self::NPR => &CurrencyUnit { alpha_3: "NPR", numeric: "524", name: "Nepalese Rupee", digits: 2 },
            Self::NZD => &CurrencyUnit { alpha_3: "NZD", numeric: "554", name: "New Zealand Dollar", digits: 2 },
            Self::OMR => &CurrencyUnit { alpha_3: "OMR", numeric: "512", name: "Rial Omani", digits: 3 },
            Self::PAB => &CurrencyUnit { alpha_3: "PAB", numeric: "590", name: "Balboa", digits: 2 },
            Self::PEN => &CurrencyUnit { alpha_3: "PEN", numeric: "604", name: "Sol", digits: 2 },
            Self::PGK => &CurrencyUnit { alpha_3: "PGK", numeric: "598", name: "Kina", digits: 2 },
            Self::PHP => &CurrencyUnit { alpha_3: "PHP", numeric: "608", name: "Philippine Peso", digits: 2 },
            Self::PKR => &CurrencyUnit { alpha_3: "PKR", numeric: "586", name: "Pakistan Rupee", digits: 2 },
            Self::PLN => &CurrencyUnit { alpha_3: "PLN", numeric: "985", name: "Zloty", digits: 2 },
            Self::PYG => &CurrencyUnit { alpha_3: "PYG", numeric: "600", name: "Guarani", digits: 0 },
            Self::QAR => &CurrencyUnit { alpha_3: "QAR", numeric: "634", name: "Qatari Rial", digits: 2 },
            Self::RON => &CurrencyUnit { alpha_3: "RON", numeric: "946", name: "Romanian Leu", digits: 2 },
            Self::RSD => &CurrencyUnit { alpha_3: "RSD", numeric: "941", name: "Serbian Dinar", digits: 2 },
            Self::RUB => &CurrencyUnit { alpha_3: "RUB", numeric: "643", name: "Russian Ruble", digits: 2 },
            Self::RWF => &CurrencyUnit { alpha_3: "RWF", numeric: "646", name: "Rwanda Franc", digits: 0 },
            Self::SAR => &CurrencyUnit { alpha_3: "SAR", numeric: "682", name: "Saudi Riyal", digits: 2 },
            Self::SBD => &CurrencyUnit { alpha_3: "SBD", numeric: "090", name: "Solomon Islands Dollar", digits: 2 },
            Self::SCR => &CurrencyUnit { alpha_3: "SCR", numeric: "690", name: "Seychelles Rupee", digits: 2 },
            Self::SDG => &CurrencyUnit { alpha_3: "SDG", numeric: "938", name: "Sudanese Pound", digits: 2 },
            Self::SEK => &CurrencyUnit { alpha_3: "SEK", numeric: "752", name: "Swedish Krona", digits: 2 },
            Self::SGD => &CurrencyUnit { alpha_3: "SGD", numeric: "702", name: "Singapore Dollar", digits: 2 },
            Self::SHP => &CurrencyUnit { alpha_3: "SHP", numeric: "654", name: "Saint Helena Pound", digits: 2 },
            Self::SLE => &CurrencyUnit { alpha_3: "SLE", numeric: "925", name: "Leone", digits: 2 },
            Self::SLL => &CurrencyUnit { alpha_3: "SLL", numeric: "694", name: "Leone", digits: 2 },
            Self::SOS => &CurrencyUnit { alpha_3: "SOS", numeric: "706", name: "Somali Shilling", digits: 2 },
            Self::SRD => &CurrencyUnit { alpha_3: "SRD", numeric: "968", name: "Surinam Dollar", digits: 2 },
            Self::SSP => &CurrencyUnit { alpha_3: "SSP", numeric: "728", name: "South Sudanese Pound", digits: 2 },
            Self::STN => &CurrencyUnit { alpha_3: "STN", numeric: "930", name: "Dobra", digits: 2 },
            Self::SVC => &CurrencyUnit { alpha_3: "SVC", numeric: "222", name: "El Salvador Colon", digits: 2 },
            Self::SYP => &CurrencyUnit { alpha_3: "SYP", numeric: "760", name: "Syrian Pound", digits: 2 },
            Self::SZL => &CurrencyUnit { alpha_3: "SZL", numeric: "748", name: "Lilangeni", digits: 2 },
            Self::THB => &CurrencyUnit { alpha_3: "THB", numeric: "764", name: "Baht", digits: 2 },
            Self::TJS => &CurrencyUnit { alpha_3: "TJS", numeric: "972", name: "Somoni", digits: 2 },
            Self::TMT => &CurrencyUnit { alpha_3: "TMT", numeric: "934", name: "Turkmenistan New Manat", digits: 2 },
            Self::TND => &CurrencyUnit { alpha_3: "TND", numeric: "788", name: "Tunisian Dinar", digits: 3 },
            Self::TOP => &CurrencyUnit { alpha_3: "TOP", numeric: "776", name: "Pa’anga", digits: 2 },
            Self::TRY => &CurrencyUnit { alpha_3: "TRY", numeric: "949", name: "Turkish Lira", digits: 2 },
            Self::TTD => &CurrencyUnit { alpha_3: "TTD", numeric: "780", name: "Trinidad and Tobago Dollar", digits: 2 },
            Self::TWD => &CurrencyUnit { alpha_3: "TWD", numeric: "901", name: "New Taiwan Dollar", digits: 2 },
            Self::TZS => &CurrencyUnit { alpha_3: "TZS", numeric: "834", name: "Tanzanian Shilling", digits: 2 },
            Self::UAH => &CurrencyUnit { alpha_3: "UAH", numeric: "980", name: "Hryvnia", digits: 2 },
            Self::UGX => &CurrencyUnit { alpha_3: "UGX", numeric: "800", name: "Uganda Shilling", digits: 0 },
            Self::USD => &CurrencyUnit { alpha_3: "USD", numeric: "840", name: "US Dollar", digits: 2 },
            Self::USN => &CurrencyUnit { alpha_3: "USN", numeric: "997", name: "US Dollar (Next day)", digits: 2 },
            Self::UYI => &CurrencyUnit { alpha_3: "UYI", numeric: "940", name: "Uruguay Peso en Unidades Indexadas (UI)", digits: 2 },
            Self::UYU => &CurrencyUnit { alpha_3: "UYU", numeric: "858", name: "Peso Uruguayo", digits: 2 },
            Self::UYW => &CurrencyUnit { alpha_3: "UYW", numeric: "927", name: "Unidad Previsional", digits: 2 },
            Self::UZS => &CurrencyUnit { alpha_3: "UZS", numeric: "860", name: "Uzbekistan Sum", digits: 2 },
            Self::VED => &CurrencyUnit { alpha_3: "VED", numeric: "926", name: "Bolívar Soberano", digits: 2 },
            Self::VES => &CurrencyUnit { alpha_3: "VES", numeric: "928", name: "Bolívar Soberano", digits: 2 },
            Self::VND => &CurrencyUnit { alpha_3: "VND", numeric: "704", name: "Dong", digits: 0 },
            Self::VUV => &CurrencyUnit { alpha_3: "VUV", numeric: "548", name: "Vatu", digits: 0 },
            Self::WST => &CurrencyUnit { alpha_3: "WST", numeric: "882", name: "Tala", digits: 2 },
            Self::XAF => &CurrencyUnit { alpha_3: "XAF", numeric: "950", name: "CFA Franc BEAC", digits: 0 },
            Self::XAG => &CurrencyUnit { alpha_3: "XAG", numeric: "961", name: "Silver", digits: 2 },
            Self::XAU => &CurrencyUnit { alpha_3: "XAU", numeric: "959", name: "Gold", digits: 2 },
            Self::XBA => &CurrencyUnit { alpha_3: "XBA", numeric: "955", name: "Bond Markets Unit European Composite Unit (EURCO)", digits: 2 },
            Self::XBB => &CurrencyUnit { alpha_3: "XBB", numeric: "956", name: "Bond Markets Unit European Monetary Unit (E.M.U.-6)", digits: 2 },
            Self::XBC => &CurrencyUnit { alpha_3: "XBC", numeric: "957", name: "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)", digits: 2 },
            Self::XBD => &CurrencyUnit { alpha_3: "XBD", numeric: "958", name: "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)", digits: 2 },
            Self::XCD => &CurrencyUnit { alpha_3: "XCD", numeric: "951", name: "East Caribbean Dollar", digits: 2 },
            Self::XDR => &CurrencyUnit { alpha_3: "XDR", numeric: "960", name: "SDR (Special Drawing Right)", digits: 2 },
            Self::XOF => &CurrencyUnit { alpha_3: "XOF", numeric: "952", name: "CFA Franc BCEAO", digits: 0 },
            Self::XPD => &CurrencyUnit { alpha_3: "XPD", numeric: "964", name: "Palladium", digits: 2 },
            Self::XPF => &CurrencyUnit { alpha_3: "XPF", numeric: "953", name: "CFP Franc", digits: 0 },
            Self::XPT => &CurrencyUnit { alpha_3: "XPT", numeric: "962", name: "Platinum", digits: 2 },
            Self::XSU => &CurrencyUnit { alpha_3: "XSU", numeric: "994", name: "Sucre", digits: 2 },
            Self::XTS => &CurrencyUnit { alpha_3: "XTS", numeric: "963", name: "Codes specifically reserved for testing purposes", digits: 2 },
            Self::XUA => &CurrencyUnit { alpha_3: "XUA", numeric: "965", name: "ADB Unit of Account", digits: 2 },
            Self::XXX => &CurrencyUnit { alpha_3: "XXX", numeric: "999", name: "The codes assigned for transactions where no currency is involved", digits: 2 },
            Self::YER => &CurrencyUnit { alpha_3: "YER", numeric: "886", name: "Yemeni Rial", digits: 2 },
            Self::ZAR => &CurrencyUnit { alpha_3: "ZAR", numeric: "710", name: "Rand", digits: 2 },
            Self::ZMW => &CurrencyUnit { alpha_3: "ZMW", numeric: "967", name: "Zambian Kwacha", digits: 2 },
            Self::ZWL => &CurrencyUnit { alpha_3: "ZWL", numeric: "932", name: "Zimbabwe Dollar", digits: 2 },
        }
    }

    pub fn alpha_3(self) -> &'static str {
        self.unit().alpha_3
    }

    pub fn numeric(self) -> &'static str {
        self.unit().numeric
    }

    pub fn name(self) -> &'static str {
        self.unit().name
    }

    /// Minor-unit digits.
    pub fn digits(self) -> u32 {
        self.unit().digits
    }

    /// Finds the entry whose alpha-3 or numeric code equals `value`.
    pub fn find(value: &str) -> Result<Self, UnitNotFoundError> {
        Self::iter()
            .find(|currency| {
                let unit = currency.unit();
                value == unit.alpha_3 || value == unit.numeric
            })
            .ok_or_else(|| UnitNotFoundError::new(value, "Currency"))
    }

    /// All currencies carrying exactly `digits` minor-unit digits, in
    /// table order. Buckets are computed once per process.
    pub fn with_digits(digits: u32) -> Arc<Vec<Currency>> {
        if let Some(cached) = CURRENCIES_BY_DIGITS.get(&digits) {
            return Arc::clone(cached.value());
        }
        let entry = CURRENCIES_BY_DIGITS.entry(digits).or_insert_with(|| {
            Arc::new(
                Self::iter()
                    .filter(|currency| currency.digits() == digits)
                    .collect(),
            )
        });
        Arc::clone(entry.value())
    }

    /// Currencies with no minor unit, like JPY.
    pub fn zero_digits() -> Arc<Vec<Currency>> {
        Self::with_digits(0)
    }

    pub fn two_digits() -> Arc<Vec<Currency>> {
        Self::with_digits(2)
    }

    pub fn three_digits() -> Arc<Vec<Currency>> {
        Self::with_digits(3)
    }

    /// Validates `amount` against this currency and rescales it to the
    /// exact minor-unit precision.
    ///
    /// A negative amount is rejected. An amount whose significant fraction
    /// is finer than the currency allows is rejected rather than rounded,
    /// so caller-supplied precision is never silently discarded. The
    /// result always carries exactly [`digits`](Self::digits) decimal
    /// places, which makes the function idempotent.
    pub fn clean_amount(self, amount: Decimal) -> Result<Decimal, AmountError> {
        if amount < Decimal::ZERO {
            return Err(AmountError::NegativeAmountNotAllowed(amount));
        }
        let digits = self.digits();
        let mut cleaned = amount.normalize();
        if cleaned.scale() > digits {
            return Err(AmountError::WrongAmountDigitsNumber {
                amount,
                currency: self,
                digits,
            });
        }
        cleaned.rescale(digits);
        Ok(cleaned)
    }

    /// Like [`clean_amount`](Self::clean_amount), but additionally rejects
    /// a zero amount.
    pub fn clean_positive_amount(self, amount: Decimal) -> Result<Decimal, AmountError> {
        if amount.is_zero() {
            return Err(AmountError::ZeroAmountNotAllowed);
        }
        self.clean_amount(amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha_3())
    }
}
