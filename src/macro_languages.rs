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

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::errors::UnitNotFoundError;

/// Status of an individual code element within its macrolanguage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndividualStatus {
    Active,
    Retired,
}

/// Membership record binding an individual language code to its ISO 639-3
/// macrolanguage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MacroLanguageUnit {
    /// The macrolanguage identifier.
    pub m_id: &'static str,
    /// Whether the individual code element is active or retired.
    pub i_status: IndividualStatus,
}

/// ISO 639-3 macrolanguage registry, keyed by individual language code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum MacroLanguage {
    FAT,
    TWI,
    AAO,
    ABH,
    ABV,
    ACM,
    ACQ,
    ACW,
    ACX,
    ACY,
    ADF,
    AEB,
    AEC,
    AFB,
    AJP,
    APC,
    APD,
    ARB,
    ARQ,
    ARS,
    ARY,
    ARZ,
    AUZ,
    AVL,
    AYH,
    AYL,
    AYN,
    AYP,
    BBZ,
    PGA,
    SHU,
    SSH,
    AYC,
    AYR,
    AZB,
    AZJ,
    BCC,
    BGN,
    BGP,
    BCL,
    BHK,
    BLN,
    BTO,
    CTS,
    FBL,
    LBL,
    RBL,
    UBL,
    EBK,
    LBK,
    OBK,
    RBK,
    VBK,
    BXM,
    BXR,
    BXU,
    MHR,
    MRJ,
    CRJ,
    CRK,
    CRL,
    CRM,
    CSW,
    CWD,
    UMU,
    UNM,
    SCS,
    XSL,
    DIB,
    DIK,
    DIP,
    DIW,
    DKS,
    DGO,
    XNR,
    EKK,
    VRO,
    PES,
    PRS,
    FFM,
    FUB,
    FUC,
    FUE,
    FUF,
    FUH,
    FUI,
    FUQ,
    FUV,
    BDT,
    GBP,
    GBQ,
    GMM,
    GSO,
    GYA,
    MDO,
    ESG,
    GGO,
    GNO,
    WSG,
    GBO,
    GEC,
    GRJ,
    GRV,
    GRY,
    GNW,
    GUG,
    GUI,
    GUN,
    NHD,
    HAX,
    HDN,
    BOS,
    CNR,
    HRV,
    SRP,
    BLU,
    CQD,
    HEA,
    HMA,
    HMC,
    HMD,
    HME,
    HMG,
    HMH,
    HMI,
    HMJ,
    HML,
    HMM,
    HMP,
    HMQ,
    HMS,
    HMW,
    HMY,
    HMZ,
    HNJ,
    HRM,
    HUJ,
    MMR,
    MUQ,
    MWW,
    SFM,
    IKE,
    IKT,
    ESI,
    ESK,
    AJT,
    AJU,
    JYE,
    YHD,
    YUD,
    KBY,
    KNC,
    KRT,
    ENB,
    EYO,
    NIQ,
    OKI,
    PKO,
    SGC,
    SPY,
    TEC,
    TUY,
    GOM,
    KNN,
    KOI,
    KPV,
    KNG,
    KWY,
    LDI,
    GKP,
    XPE,
    CKB,
    KMR,
    SDH,
    HND,
    HNO,
    JAT,
    PHR,
    PMU,
    PNB,
    SKR,
    XHE,
    LTG,
    LVS,
    BXK,
    IDA,
    LKB,
    LKO,
    LKS,
    LRI,
    LRM,
    LSM,
    LTO,
    LTS,
    LWG,
    NLE,
    NYD,
    RAG,
    EMK,
    MKU,
    MLQ,
    MNK,
    MSC,
    MWK,
    MYQ,
    BHR,
    BJQ,
    BMM,
    BZC,
    MSH,
    PLT,
    SKG,
    TDX,
    TKG,
    TXY,
    XMV,
    XMW,
    KHK,
    MVF,
    BJN,
    BTJ,
    BVE,
    BVU,
    COA,
    DUP,
    HJI,
    IND,
    JAK,
    JAX,
    KVB,
    KVR,
    KXD,
    LCE,
    LCF,
    LIW,
    MAX,
    MEO,
    MFA,
    MFB,
    MIN,
    MLY,
    MQG,
    MSI,
    MUI,
    ORN,
    ORS,
    PEL,
    PSE,
    TMW,
    URK,
    VKK,
    VKT,
    XMM,
    ZLM,
    ZMI,
    ZSM,
    DHD,
    MTR,
    MVE,
    RWR,
    SWV,
    WRY,
    DTY,
    NPI,
    NNO,
    NOB,
    CIW,
    OJB,
    OJC,
    OJG,
    OJS,
    OJW,
    OTW,
    ORY,
    SPV,
    GAX,
    GAZ,
    HAE,
    ORC,
    PBT,
    PBU,
    PST,
    CQU,
    QUB,
    QUD,
    QUF,
    QUG,
    QUH,
    QUK,
    QUL,
    QUP,
    QUR,
    QUS,
    QUW,
    QUX,
    QUY,
    QUZ,
    QVA,
    QVC,
    QVE,
    QVH,
    QVI,
    QVJ,
    QVL,
    QVM,
    QVN,
    QVO,
    QVP,
    QVS,
    QVW,
    QVZ,
    QWA,
    QWC,
    QWH,
    QWS,
    QXA,
    QXC,
    QXH,
    QXL,
    QXN,
    QXO,
    QXP,
    QXR,
    QXT,
    QXU,
    QXW,
    BGQ,
    GDA,
    GJU,
    HOJ,
    MUP,
    WBR,
    RMC,
    RMF,
    RML,
    RMN,
    RMO,
    RMW,
    RMY,
    CLS,
    VSN,
    AAE,
    AAT,
    ALN,
    ALS,
    SDC,
    SDN,
    SRC,
    SRO,
    SWC,
    SWH,
    AII,
    CLD,
    TAQ,
    THV,
    THZ,
    TTQ,
    UZN,
    UZS,
    YDD,
    YIH,
    ZAA,
    ZAB,
    ZAC,
    ZAD,
    ZAE,
    ZAF,
    ZAI,
    ZAM,
    ZAO,
    ZAQ,
    ZAR,
    ZAS,
    ZAT,
    ZAV,
    ZAW,
    ZAX,
    ZCA,
    ZCD,
    ZOO,
    ZPA,
    ZPB,
    ZPC,
    ZPD,
    ZPE,
    ZPF,
    ZPG,
    ZPH,
    ZPI,
    ZPJ,
    ZPK,
    ZPL,
    ZPM,
    ZPN,
    ZPO,
    ZPP,
    ZPQ,
    ZPR,
    ZPS,
    ZPT,
    ZPU,
    ZPV,
    ZPW,
    ZPX,
    ZPY,
    ZPZ,
    ZSR,
    ZTC,
    ZTE,
    ZTG,
    ZTL,
    ZTM,
    ZTN,
    ZTP,
    ZTQ,
    ZTS,
    ZTT,
    ZTU,
    ZTX,
    ZTY,
    CCX,
    CCY,
    ZCH,
    ZEH,
    ZGB,
    ZGM,
    ZGN,
    ZHD,
    ZHN,
    ZLJ,
    ZLN,
    ZLQ,
    ZQE,
    ZYB,
    ZYG,
    ZYJ,
    ZYN,
    ZZJ,
    CDO,
    CJY,
    CMN,
    CNP,
    CPX,
    CSP,
    CZH,
    CZO,
    GAN,
    HAK,
    HSN,
    LZH,
    MNP,
    NAN,
    WUU,
    YUE,
    DIQ,
    KIU,
}

impl MacroLanguage {
    /// The static membership record attached to this entry.
    pub const fn unit(self) -> &'static MacroLanguageUnit {
        match self {
            Self::FAT => &MacroLanguageUnit { m_id: "aka", i_status: IndividualStatus::Active },
            Self::TWI => &MacroLanguageUnit { m_id: "aka", i_status: IndividualStatus::Active },
            Self::AAO => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ABH => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ABV => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ACM => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ACQ => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ACW => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ACX => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ACY => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ADF => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AEB => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AEC => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AFB => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AJP => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Retired },
            Self::APC => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::APD => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ARB => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ARQ => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ARS => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ARY => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::ARZ => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AUZ => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AVL => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AYH => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AYL => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AYN => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AYP => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::BBZ => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Retired },
            Self::PGA => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::SHU => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::SSH => &MacroLanguageUnit { m_id: "ara", i_status: IndividualStatus::Active },
            Self::AYC => &MacroLanguageUnit { m_id: "aym", i_status: IndividualStatus::Active },
            Self::AYR => &MacroLanguageUnit { m_id: "aym", i_status: IndividualStatus::Active },
            Self::AZB => &MacroLanguageUnit { m_id: "aze", i_status: IndividualStatus::Active },
            Self::AZJ => &MacroLanguageUnit { m_id: "aze", i_status: IndividualStatus::Active },
            Self::BCC => &MacroLanguageUnit { m_id: "bal", i_status: IndividualStatus::Active },
            Self::BGN => &MacroLanguageUnit { m_id: "bal", i_status: IndividualStatus::Active },
            Self::BGP => &MacroLanguageUnit { m_id: "bal", i_status: IndividualStatus::Active },
            Self::BCL => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::BHK => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Retired },
            Self::BLN => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::BTO => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::CTS => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::FBL => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::LBL => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::RBL => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::UBL => &MacroLanguageUnit { m_id: "bik", i_status: IndividualStatus::Active },
            Self::EBK => &MacroLanguageUnit { m_id: "bnc", i_status: IndividualStatus::Active },
            Self::LBK => &MacroLanguageUnit { m_id: "bnc", i_status: IndividualStatus::Active },
            Self::OBK => &MacroLanguageUnit { m_id: "bnc", i_status: IndividualStatus::Active },
            Self::RBK => &MacroLanguageUnit { m_id: "bnc", i_status: IndividualStatus::Active },
            Self::VBK => &MacroLanguageUnit { m_id: "bnc", i_status: IndividualStatus::Active },
            Self::BXM => &MacroLanguageUnit { m_id: "bua", i_status: IndividualStatus::Active },
            Self::BXR => &MacroLanguageUnit { m_id: "bua", i_status: IndividualStatus::Active },
            Self::BXU => &MacroLanguageUnit { m_id: "bua", i_status: IndividualStatus::Active },
            Self::MHR => &MacroLanguageUnit { m_id: "chm", i_status: IndividualStatus::Active },
            Self::MRJ => &MacroLanguageUnit { m_id: "chm", i_status: IndividualStatus::Active },
            Self::CRJ => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::CRK => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::CRL => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::CRM => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::CSW => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::CWD => &MacroLanguageUnit { m_id: "cre", i_status: IndividualStatus::Active },
            Self::UMU => &MacroLanguageUnit { m_id: "del", i_status: IndividualStatus::Active },
            Self::UNM => &MacroLanguageUnit { m_id: "del", i_status: IndividualStatus::Active },
            Self::SCS => &MacroLanguageUnit { m_id: "den", i_status: IndividualStatus::Active },
            Self::XSL => &MacroLanguageUnit { m_id: "den", i_status: IndividualStatus::Active },
            Self::DIB => &MacroLanguageUnit { m_id: "din", i_status: IndividualStatus::Active },
            Self::DIK => &MacroLanguageUnit { m_id: "din", i_status: IndividualStatus::Active },
            Self::DIP => &MacroLanguageUnit { m_id: "din", i_status: IndividualStatus::Active },
            Self::DIW => &MacroLanguageUnit { m_id: "din", i_status: IndividualStatus::Active },
            Self::DKS => &MacroLanguageUnit { m_id: "din", i_status: IndividualStatus::Active },
            Self::DGO => &MacroLanguageUnit { m_id: "doi", i_status: IndividualStatus::Active },
            Self::XNR => &MacroLanguageUnit { m_id: "doi", i_status: IndividualStatus::Active },
            Self::EKK => &MacroLanguageUnit { m_id: "est", i_status: IndividualStatus::Active },
            Self::VRO => &MacroLanguageUnit { m_id: "est", i_status: IndividualStatus::Active },
            Self::PES => &MacroLanguageUnit { m_id: "fas", i_status: IndividualStatus::Active },
            Self::PRS => &MacroLanguageUnit { m_id: "fas", i_status: IndividualStatus::Active },
            Self::FFM => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUB => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUC => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUE => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUF => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUH => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUI => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUQ => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::FUV => &MacroLanguageUnit { m_id: "ful", i_status: IndividualStatus::Active },
            Self::BDT => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::GBP => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::GBQ => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::GMM => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::GSO => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::GYA => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Active },
            Self::MDO => &MacroLanguageUnit { m_id: "gba", i_status: IndividualStatus::Retired },
            Self::ESG => &MacroLanguageUnit { m_id: "gon", i_status: IndividualStatus::Active },
            Self::GGO => &MacroLanguageUnit { m_id: "gon", i_status: IndividualStatus::Retired },
            Self::GNO => &MacroLanguageUnit { m_id: "gon", i_status: IndividualStatus::Active },
            Self::WSG => &MacroLanguageUnit { m_id: "gon", i_status: IndividualStatus::Active },
            Self::GBO => &MacroLanguageUnit { m_id: "grb", i_status: IndividualStatus::Active },
            Self::GEC => &MacroLanguageUnit { m_id: "grb", i_status: IndividualStatus::Active },
            Self::GRJ => &MacroLanguageUnit { m_id: "grb", i_status: IndividualStatus::Active },
            Self::GRV => &MacroLanguageUnit { m_id: "grb", i_status: IndividualStatus::Active },
            Self::GRY => &MacroLanguageUnit { m_id: "grb", i_status: IndividualStatus::Active },
            Self::GNW => &MacroLanguageUnit { m_id: "grn", i_status: IndividualStatus::Active },
            Self::GUG => &MacroLanguageUnit { m_id: "grn", i_status: IndividualStatus::Active },
            Self::GUI => &MacroLanguageUnit { m_id: "grn", i_status: IndividualStatus::Active },
            Self::GUN => &MacroLanguageUnit { m_id: "grn", i_status: IndividualStatus::Active },
            Self::NHD => &MacroLanguageUnit { m_id: "grn", i_status: IndividualStatus::Active },
            Self::HAX => &MacroLanguageUnit { m_id: "hai", i_status: IndividualStatus::Active },
            Self::HDN => &MacroLanguageUnit { m_id: "hai", i_status: IndividualStatus::Active },
            Self::BOS => &MacroLanguageUnit { m_id: "hbs", i_status: IndividualStatus::Active },
            Self::CNR => &MacroLanguageUnit { m_id: "hbs", i_status: IndividualStatus::Active },
            Self::HRV => &MacroLanguageUnit { m_id: "hbs", i_status: IndividualStatus::Active },
            Self::SRP => &MacroLanguageUnit { m_id: "hbs", i_status: IndividualStatus::Active },
            Self::BLU => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Retired },
            Self::CQD => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HEA => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMA => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMC => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMD => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HME => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMG => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMH => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMI => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMJ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HML => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMM => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMP => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMQ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMS => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMW => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMY => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HMZ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HNJ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HRM => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::HUJ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::MMR => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::MUQ => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::MWW => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::SFM => &MacroLanguageUnit { m_id: "hmn", i_status: IndividualStatus::Active },
            Self::IKE => &MacroLanguageUnit { m_id: "iku", i_status: IndividualStatus::Active },
            Self::IKT => &MacroLanguageUnit { m_id: "iku", i_status: IndividualStatus::Active },
            Self::ESI => &MacroLanguageUnit { m_id: "ipk", i_status: IndividualStatus::Active },
            Self::ESK => &MacroLanguageUnit { m_id: "ipk", i_status: IndividualStatus::Active },
            Self::AJT => &MacroLanguageUnit { m_id: "jrb", i_status: IndividualStatus::Retired },
            Self::AJU => &MacroLanguageUnit { m_id: "jrb", i_status: IndividualStatus::Active },
            Self::JYE => &MacroLanguageUnit { m_id: "jrb", i_status: IndividualStatus::Active },
            Self::YHD => &MacroLanguageUnit { m_id: "jrb", i_status: IndividualStatus::Active },
            Self::YUD => &MacroLanguageUnit { m_id: "jrb", i_status: IndividualStatus::Active },
            Self::KBY => &MacroLanguageUnit { m_id: "kau", i_status: IndividualStatus::Active },
            Self::KNC => &MacroLanguageUnit { m_id: "kau", i_status: IndividualStatus::Active },
            Self::KRT => &MacroLanguageUnit { m_id: "kau", i_status: IndividualStatus::Active },
            Self::ENB => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::EYO => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::NIQ => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::OKI => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::PKO => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::SGC => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::SPY => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::TEC => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::TUY => &MacroLanguageUnit { m_id: "kln", i_status: IndividualStatus::Active },
            Self::GOM => &MacroLanguageUnit { m_id: "kok", i_status: IndividualStatus::Active },
            Self::KNN => &MacroLanguageUnit { m_id: "kok", i_status: IndividualStatus::Active },
            Self::KOI => &MacroLanguageUnit { m_id: "kom", i_status: IndividualStatus::Active },
            Self::KPV => &MacroLanguageUnit { m_id: "kom", i_status: IndividualStatus::Active },
            Self::KNG => &MacroLanguageUnit { m_id: "kon", i_status: IndividualStatus::Active },
            Self::KWY => &MacroLanguageUnit { m_id: "kon", i_status: IndividualStatus::Active },
            Self::LDI => &MacroLanguageUnit { m_id: "kon", i_status: IndividualStatus::Active },
            Self::GKP => &MacroLanguageUnit { m_id: "kpe", i_status: IndividualStatus::Active },
            Self::XPE => &MacroLanguageUnit { m_id: "kpe", i_status: IndividualStatus::Active },
            Self::CKB => &MacroLanguageUnit { m_id: "kur", i_status: IndividualStatus::Active },
            Self::KMR => &MacroLanguageUnit { m_id: "kur", i_status: IndividualStatus::Active },
            Self::SDH => &MacroLanguageUnit { m_id: "kur", i_status: IndividualStatus::Active },
            Self::HND => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::HNO => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::JAT => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::PHR => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::PMU => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Retired },
            Self::PNB => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::SKR => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::XHE => &MacroLanguageUnit { m_id: "lah", i_status: IndividualStatus::Active },
            Self::LTG => &MacroLanguageUnit { m_id: "lav", i_status: IndividualStatus::Active },
            Self::LVS => &MacroLanguageUnit { m_id: "lav", i_status: IndividualStatus::Active },
            Self::BXK => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::IDA => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LKB => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LKO => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LKS => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LRI => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LRM => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LSM => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LTO => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LTS => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::LWG => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::NLE => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::NYD => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::RAG => &MacroLanguageUnit { m_id: "luy", i_status: IndividualStatus::Active },
            Self::EMK => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MKU => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MLQ => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MNK => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MSC => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MWK => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Active },
            Self::MYQ => &MacroLanguageUnit { m_id: "man", i_status: IndividualStatus::Retired },
            Self::BHR => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::BJQ => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Retired },
            Self::BMM => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::BZC => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::MSH => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::PLT => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::SKG => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::TDX => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::TKG => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::TXY => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::XMV => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::XMW => &MacroLanguageUnit { m_id: "mlg", i_status: IndividualStatus::Active },
            Self::KHK => &MacroLanguageUnit { m_id: "mon", i_status: IndividualStatus::Active },
            Self::MVF => &MacroLanguageUnit { m_id: "mon", i_status: IndividualStatus::Active },
            Self::BJN => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::BTJ => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::BVE => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::BVU => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::COA => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::DUP => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::HJI => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::IND => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::JAK => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::JAX => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::KVB => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::KVR => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::KXD => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::LCE => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::LCF => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::LIW => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MAX => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MEO => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MFA => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MFB => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MIN => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MLY => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Retired },
            Self::MQG => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MSI => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::MUI => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::ORN => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::ORS => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::PEL => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::PSE => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::TMW => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::URK => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::VKK => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::VKT => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::XMM => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::ZLM => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::ZMI => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::ZSM => &MacroLanguageUnit { m_id: "msa", i_status: IndividualStatus::Active },
            Self::DHD => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::MTR => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::MVE => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::RWR => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::SWV => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::WRY => &MacroLanguageUnit { m_id: "mwr", i_status: IndividualStatus::Active },
            Self::DTY => &MacroLanguageUnit { m_id: "nep", i_status: IndividualStatus::Active },
            Self::NPI => &MacroLanguageUnit { m_id: "nep", i_status: IndividualStatus::Active },
            Self::NNO => &MacroLanguageUnit { m_id: "nor", i_status: IndividualStatus::Active },
            Self::NOB => &MacroLanguageUnit { m_id: "nor", i_status: IndividualStatus::Active },
            Self::CIW => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OJB => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OJC => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OJG => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OJS => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OJW => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::OTW => &MacroLanguageUnit { m_id: "oji", i_status: IndividualStatus::Active },
            Self::ORY => &MacroLanguageUnit { m_id: "ori", i_status: IndividualStatus::Active },
            Self::SPV => &MacroLanguageUnit { m_id: "ori", i_status: IndividualStatus::Active },
            Self::GAX => &MacroLanguageUnit { m_id: "orm", i_status: IndividualStatus::Active },
            Self::GAZ => &MacroLanguageUnit { m_id: "orm", i_status: IndividualStatus::Active },
            Self::HAE => &MacroLanguageUnit { m_id: "orm", i_status: IndividualStatus::Active },
            Self::ORC => &MacroLanguageUnit { m_id: "orm", i_status: IndividualStatus::Active },
            Self::PBT => &MacroLanguageUnit { m_id: "pus", i_status: IndividualStatus::Active },
            Self::PBU => &MacroLanguageUnit { m_id: "pus", i_status: IndividualStatus::Active },
            Self::PST => &MacroLanguageUnit { m_id: "pus", i_status: IndividualStatus::Active },
            Self::CQU => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Retired },
            Self::QUB => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUD => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUF => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUG => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUH => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUK => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUL => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUP => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUR => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUS => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUW => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUX => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUY => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QUZ => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVA => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVC => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVE => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVH => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVI => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVJ => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVL => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVM => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVN => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVO => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVP => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVS => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVW => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QVZ => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QWA => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QWC => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QWH => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QWS => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXA => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXC => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXH => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXL => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXN => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXO => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXP => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXR => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXT => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXU => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::QXW => &MacroLanguageUnit { m_id: "que", i_status: IndividualStatus::Active },
            Self::BGQ => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::GDA => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::GJU => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::HOJ => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::MUP => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::WBR => &MacroLanguageUnit { m_id: "raj", i_status: IndividualStatus::Active },
            Self::RMC => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RMF => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RML => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RMN => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RMO => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RMW => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::RMY => &MacroLanguageUnit { m_id: "rom", i_status: IndividualStatus::Active },
            Self::CLS => &MacroLanguageUnit { m_id: "san", i_status: IndividualStatus::Active },
            Self::VSN => &MacroLanguageUnit { m_id: "san", i_status: IndividualStatus::Active },
            Self::AAE => &MacroLanguageUnit { m_id: "sqi", i_status: IndividualStatus::Active },
            Self::AAT => &MacroLanguageUnit { m_id: "sqi", i_status: IndividualStatus::Active },
            Self::ALN => &MacroLanguageUnit { m_id: "sqi", i_status: IndividualStatus::Active },
            Self::ALS => &MacroLanguageUnit { m_id: "sqi", i_status: IndividualStatus::Active },
            Self::SDC => &MacroLanguageUnit { m_id: "srd", i_status: IndividualStatus::Active },
            Self::SDN => &MacroLanguageUnit { m_id: "srd", i_status: IndividualStatus::Active },
            Self::SRC => &MacroLanguageUnit { m_id: "srd", i_status: IndividualStatus::Active },
            Self::SRO => &MacroLanguageUnit { m_id: "srd", i_status: IndividualStatus::Active },
            Self::SWC => &MacroLanguageUnit { m_id: "swa", i_status: IndividualStatus::Active },
            Self::SWH => &MacroLanguageUnit { m_id: "swa", i_status: IndividualStatus::Active },
            Self::AII => &MacroLanguageUnit { m_id: "syr", i_status: IndividualStatus::Active },
            Self::CLD => &MacroLanguageUnit { m_id: "syr", i_status: IndividualStatus::Active },
            Self::TAQ => &MacroLanguageUnit { m_id: "tmh", i_status: IndividualStatus::Active },
            Self::THV => &MacroLanguageUnit { m_id: "tmh", i_status: IndividualStatus::Active },
            Self::THZ => &MacroLanguageUnit { m_id: "tmh", i_status: IndividualStatus::Active },
            Self::TTQ => &MacroLanguageUnit { m_id: "tmh", i_status: IndividualStatus::Active },
            Self::UZN => &MacroLanguageUnit { m_id: "uzb", i_status: IndividualStatus::Active },
            Self::UZS => &MacroLanguageUnit { m_id: "uzb", i_status: IndividualStatus::Active },
            Self::YDD => &MacroLanguageUnit { m_id: "yid", i_status: IndividualStatus::Active },
            Self::YIH => &MacroLanguageUnit { m_id: "yid", i_status: IndividualStatus::Active },
            Self::ZAA => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAB => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAC => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAD => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAE => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAF => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAI => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAM => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAO => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAQ => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAR => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAS => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAT => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAV => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAW => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZAX => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZCA => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZCD => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZOO => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPA => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPB => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPC => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPD => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPE => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPF => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPG => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPH => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPI => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPJ => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPK => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPL => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPM => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPN => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPO => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPP => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPQ => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPR => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPS => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPT => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPU => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPV => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPW => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPX => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPY => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZPZ => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZSR => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTC => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Retired },
            Self::ZTE => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTG => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTL => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTM => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTN => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTP => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTQ => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTS => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTT => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTU => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTX => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::ZTY => &MacroLanguageUnit { m_id: "zap", i_status: IndividualStatus::Active },
            Self::CCX => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Retired },
            Self::CCY => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Retired },
            Self::ZCH => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZEH => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZGB => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZGM => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZGN => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZHD => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZHN => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZLJ => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZLN => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZLQ => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZQE => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZYB => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZYG => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZYJ => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZYN => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::ZZJ => &MacroLanguageUnit { m_id: "zha", i_status: IndividualStatus::Active },
            Self::CDO => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CJY => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CMN => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CNP => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CPX => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CSP => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CZH => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::CZO => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::GAN => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::HAK => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::HSN => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::LZH => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::MNP => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::NAN => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::WUU => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::YUE => &MacroLanguageUnit { m_id: "zho", i_status: IndividualStatus::Active },
            Self::DIQ => &MacroLanguageUnit { m_id: "zza", i_status: IndividualStatus::Active },
            Self::KIU => &MacroLanguageUnit { m_id: "zza", i_status: IndividualStatus::Active },
        }
    }

    /// The macrolanguage identifier.
    pub fn m_id(self) -> &'static str {
        self.unit().m_id
    }

    /// The individual language code, i.e. the variant name.
    pub fn i_id(self) -> &'static str {
        self.into()
    }

    pub fn i_status(self) -> IndividualStatus {
        self.unit().i_status
    }

    /// All individual members of the macrolanguage `m_id`, in table order.
    /// Matching is case-insensitive; an unknown id is an error rather than
    /// an empty list.
    pub fn find(m_id: &str) -> Result<Vec<Self>, UnitNotFoundError> {
        Self::find_filtered(m_id, None)
    }

    /// Like [`find`](Self::find), restricted to members carrying the given
    /// status.
    pub fn find_with_status(
        m_id: &str,
        i_status: IndividualStatus,
    ) -> Result<Vec<Self>, UnitNotFoundError> {
        Self::find_filtered(m_id, Some(i_status))
    }

    fn find_filtered(
        m_id: &str,
        i_status: Option<IndividualStatus>,
    ) -> Result<Vec<Self>, UnitNotFoundError> {
        let wanted = m_id.to_ascii_lowercase();
        let members: Vec<Self> = Self::iter()
            .filter(|language| {
                language.m_id() == wanted
                    && i_status.map_or(true, |status| language.i_status() == status)
            })
            .collect();
        if members.is_empty() {
            return Err(UnitNotFoundError::new(m_id, "MacroLanguage"));
        }
        Ok(members)
    }
}

impl fmt::Display for MacroLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.m_id())
    }
}
