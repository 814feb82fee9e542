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
use strum::{EnumIter, IntoEnumIterator};

use crate::errors::UnitNotFoundError;

/// Static attributes of one ISO 639 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageUnit {
    /// Official language name.
    pub name: &'static str,
    /// ISO 639-1 two-letter code, where one is assigned.
    pub alpha_2: Option<&'static str>,
    /// ISO 639-2 three-letter code.
    pub alpha_3: &'static str,
    /// Alternative code used in library cataloging, where one exists.
    pub bibliographic: Option<&'static str>,
    /// Code designated for terminology purposes.
    pub terminology: &'static str,
}

/// ISO 639 language registry, covering the two-letter alpha-2 codes and
/// the three-letter alpha-3 codes, including the bibliographic and
/// terminology variants certain languages carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Language {
    AAR,
    ABK,
    ACE,
    ACH,
    ADA,
    ADY,
    AFA,
    AFH,
    AFR,
    AIN,
    AKA,
    AKK,
    ALB,
    SQI,
    ALE,
    ALG,
    ALT,
    AMH,
    ANG,
    ANP,
    APA,
    ARA,
    ARC,
    ARG,
    ARM,
    HYE,
    ARN,
    ARP,
    ART,
    ARW,
    ASM,
    AST,
    ATH,
    AUS,
    AVA,
    AVE,
    AWA,
    AYM,
    AZE,
    BAD,
    BAI,
    BAK,
    BAL,
    BAM,
    BAN,
    BAQ,
    EUS,
    BAS,
    BAT,
    BEJ,
    BEL,
    BEM,
    BEN,
    BER,
    BHO,
    BIH,
    BIK,
    BIN,
    BIS,
    BLA,
    BNT,
    TIB,
    BOD,
    BOS,
    BRA,
    BRE,
    BTK,
    BUA,
    BUG,
    BUL,
    BUR,
    MYA,
    BYN,
    CAD,
    CAI,
    CAR,
    CAT,
    CAU,
    CEB,
    CEL,
    CZE,
    CES,
    CHA,
    CHB,
    CHE,
    CHG,
    CHI,
    ZHO,
    CHK,
    CHM,
    CHN,
    CHO,
    CHP,
    CHR,
    CHU,
    CHV,
    CHY,
    CMC,
    CNR,
    COP,
    COR,
    COS,
    CPE,
    CPF,
    CPP,
    CRE,
    CRH,
    CRP,
    CSB,
    CUS,
    WEL,
    CYM,
    DAK,
    DAN,
    DAR,
    DAY,
    DEL,
    DEN,
    GER,
    DEU,
    DGR,
    DIN,
    DIV,
    DOI,
    DRA,
    DSB,
    DUA,
    DUM,
    DUT,
    NLD,
    DYU,
    DZO,
    EFI,
    EGY,
    EKA,
    GRE,
    ELL,
    ELX,
    ENG,
    ENM,
    EPO,
    EST,
    EWE,
    EWO,
    FAN,
    FAO,
    PER,
    FAS,
    FAT,
    FIJ,
    FIL,
    FIN,
    FIU,
    FON,
    FRE,
    FRA,
    FRM,
    FRO,
    FRR,
    FRS,
    FRY,
    FUL,
    FUR,
    GAA,
    GAY,
    GBA,
    GEM,
    GEO,
    KAT,
    GEZ,
    GIL,
    GLA,
    GLE,
    GLG,
    GLV,
    GMH,
    GOH,
    GON,
    GOR,
    GOT,
    GRB,
    GRC,
    GRN,
    GSW,
    GUJ,
    GWI,
    HAI,
    HAT,
    HAU,
    HAW,
    HEB,
    HER,
    HIL,
    HIM,
    HIN,
    HIT,
    HMN,
    HMO,
    HRV,
    HSB,
    HUN,
    HUP,
    IBA,
    IBO,
    ICE,
    ISL,
    IDO,
    III,
    IJO,
    IKU,
    ILE,
    ILO,
    INA,
    INC,
    IND,
    INE,
    INH,
    IPK,
    IRA,
    IRO,
    ITA,
    JAV,
    JBO,
    JPN,
    JPR,
    JRB,
    KAA,
    KAB,
    KAC,
    KAL,
    KAM,
    KAN,
    KAR,
    KAS,
    KAU,
    KAW,
    KAZ,
    KBD,
    KHA,
    KHI,
    KHM,
    KHO,
    KIK,
    KIN,
    KIR,
    KMB,
    KOK,
    KOM,
    KON,
    KOR,
    KOS,
    KPE,
    KRC,
    KRL,
    KRO,
    KRU,
    KUA,
    KUM,
    KUR,
    KUT,
    LAD,
    LAH,
    LAM,
    LAO,
    LAT,
    LAV,
    LEZ,
    LIM,
    LIN,
    LIT,
    LOL,
    LOZ,
    LTZ,
    LUA,
    LUB,
    LUG,
    LUI,
    LUN,
    LUO,
    LUS,
    MAC,
    MKD,
    MAD,
    MAG,
    MAH,
    MAI,
    MAK,
    MAL,
    MAN,
    MAO,
    MRI,
    MAP,
    MAR,
    MAS,
    MAY,
    MSA,
    MDF,
    MDR,
    MEN,
    MGA,
    MIC,
    MIN,
    MIS,
    MKH,
    MLG,
    MLT,
    MNC,
    MNI,
    MNO,
    MOH,
    MON,
    MOS,
    MUL,
    MUN,
    MUS,
    MWL,
    MWR,
    MYN,
    MYV,
    NAH,
    NAI,
    NAP,
    NAU,
    NAV,
    NBL,
    NDE,
    NDO,
    NDS,
    NEP,
    NEW,
    NIA,
    NIC,
    NIU,
    NNO,
    NOB,
    NOG,
    NON,
    NOR,
    NQO,
    NSO,
    NUB,
    NWC,
    NYA,
    NYM,
    NYN,
    NYO,
    NZI,
    OCI,
    OJI,
    ORI,
    ORM,
    OSA,
    OSS,
    OTA,
    OTO,
    PAA,
    PAG,
    PAL,
    PAM,
    PAN,
    PAP,
    PAU,
    PEO,
    PHI,
    PHN,
    PLI,
    POL,
    PON,
    POR,
    PRA,
    PRO,
    PUS,
    QUE,
    RAJ,
    RAP,
    RAR,
    ROA,
    ROH,
    ROM,
    RUM,
    RON,
    RUN,
    RUP,
    RUS,
    SAD,
    SAG,
    SAH,
    SAI,
    SAL,
    SAM,
    SAN,
    SAS,
    SAT,
    SCN,
    SCO,
    SEL,
    SEM,
    SGA,
    SGN,
    SHN,
    SID,
    SIN,
    SIO,
    SIT,
    SLA,
    SLO,
    SLK,
    SLV,
    SMA,
    SME,
    SMI,
    SMJ,
    SMN,
    SMO,
    SMS,
    SNA,
    SND,
    SNK,
    SOG,
    SOM,
    SON,
    SOT,
    SPA,
    SRD,
    SRN,
    SRP,
    SRR,
    SSA,
    SSW,
    SUK,
    SUN,
    SUS,
    SUX,
    SWA,
    SWE,
    SYC,
    SYR,
    TAH,
    TAI,
    TAM,
    TAT,
    TEL,
    TEM,
    TER,
    TET,
    TGK,
    TGL,
    THA,
    TIG,
    TIR,
    TIV,
    TKL,
    TLH,
    TLI,
    TMH,
    TOG,
    TON,
    TPI,
    TSI,
    TSN,
    TSO,
    TUK,
    TUM,
    TUP,
    TUR,
    TUT,
    TVL,
    TWI,
    TYV,
    UDM,
    UGA,
    UIG,
    UKR,
    UMB,
    UND,
    URD,
    UZB,
    VAI,
    VEN,
    VIE,
    VOL,
    VOT,
    WAK,
    WAL,
    WAR,
    WAS,
    WEN,
    WLN,
    WOL,
    XAL,
    XHO,
    YAO,
    YAP,
    YID,
    YOR,
    YPK,
    ZAP,
    ZBL,
    ZEN,
    ZGH,
    ZHA,
    ZND,
    ZUL,
    ZUN,
    ZXX,
    ZZA,
}

impl Language {
    /// The static ISO 639 attributes attached to this entry.
    pub const fn unit(self) -> &'static LanguageUnit {
        match self {
            Self::AAR => &LanguageUnit { name: "Afar", alpha_2: Some("aa"), alpha_3: "aar", bibliographic: None, terminology: "aar" },
            Self::ABK => &LanguageUnit { name: "Abkhazian", alpha_2: Some("ab"), alpha_3: "abk", bibliographic: None, terminology: "abk" },
            Self::ACE => &LanguageUnit { name: "Achinese", alpha_2: None, alpha_3: "ace", bibliographic: None, terminology: "ace" },
            Self::ACH => &LanguageUnit { name: "Acoli", alpha_2: None, alpha_3: "ach", bibliographic: None, terminology: "ach" },
            Self::ADA => &LanguageUnit { name: "Adangme", alpha_2: None, alpha_3: "ada", bibliographic: None, terminology: "ada" },
            Self::ADY => &LanguageUnit { name: "Adyghe; Adygei", alpha_2: None, alpha_3: "ady", bibliographic: None, terminology: "ady" },
            Self::AFA => &LanguageUnit { name: "Afro-Asiatic languages", alpha_2: None, alpha_3: "afa", bibliographic: None, terminology: "afa" },
            Self::AFH => &LanguageUnit { name: "Afrihili", alpha_2: None, alpha_3: "afh", bibliographic: None, terminology: "afh" },
            Self::AFR => &LanguageUnit { name: "Afrikaans", alpha_2: Some("af"), alpha_3: "afr", bibliographic: None, terminology: "afr" },
            Self::AIN => &LanguageUnit { name: "Ainu", alpha_2: None, alpha_3: "ain", bibliographic: None, terminology: "ain" },
            Self::AKA => &LanguageUnit { name: "Akan", alpha_2: Some("ak"), alpha_3: "aka", bibliographic: None, terminology: "aka" },
            Self::AKK => &LanguageUnit { name: "Akkadian", alpha_2: None, alpha_3: "akk", bibliographic: None, terminology: "akk" },
            Self::ALB => &LanguageUnit { name: "Albanian", alpha_2: Some("sq"), alpha_3: "alb", bibliographic: Some("alb"), terminology: "sqi" },
            Self::SQI => &LanguageUnit { name: "Albanian", alpha_2: Some("sq"), alpha_3: "sqi", bibliographic: Some("alb"), terminology: "sqi" },
            Self::ALE => &LanguageUnit { name: "Aleut", alpha_2: None, alpha_3: "ale", bibliographic: None, terminology: "ale" },
            Self::ALG => &LanguageUnit { name: "Algonquian languages", alpha_2: None, alpha_3: "alg", bibliographic: None, terminology: "alg" },
            Self::ALT => &LanguageUnit { name: "Southern Altai", alpha_2: None, alpha_3: "alt", bibliographic: None, terminology: "alt" },
            Self::AMH => &LanguageUnit { name: "Amharic", alpha_2: Some("am"), alpha_3: "amh", bibliographic: None, terminology: "amh" },
            Self::ANG => &LanguageUnit { name: "English, Old (ca.450-1100)", alpha_2: None, alpha_3: "ang", bibliographic: None, terminology: "ang" },
            Self::ANP => &LanguageUnit { name: "Angika", alpha_2: None, alpha_3: "anp", bibliographic: None, terminology: "anp" },
            Self::APA => &LanguageUnit { name: "Apache languages", alpha_2: None, alpha_3: "apa", bibliographic: None, terminology: "apa" },
            Self::ARA => &LanguageUnit { name: "Arabic", alpha_2: Some("ar"), alpha_3: "ara", bibliographic: None, terminology: "ara" },
            Self::ARC => &LanguageUnit { name: "Official Aramaic (700-300 BCE); Imperial Aramaic (700-300 BCE)", alpha_2: None, alpha_3: "arc", bibliographic: None, terminology: "arc" },
            Self::ARG => &LanguageUnit { name: "Aragonese", alpha_2: Some("an"), alpha_3: "arg", bibliographic: None, terminology: "arg" },
            Self::ARM => &LanguageUnit { name: "Armenian", alpha_2: Some("hy"), alpha_3: "arm", bibliographic: Some("arm"), terminology: "hye" },
            Self::HYE => &LanguageUnit { name: "Armenian", alpha_2: Some("hy"), alpha_3: "hye", bibliographic: Some("arm"), terminology: "hye" },
            Self::ARN => &LanguageUnit { name: "Mapudungun; Mapuche", alpha_2: None, alpha_3: "arn", bibliographic: None, terminology: "arn" },
            Self::ARP => &LanguageUnit { name: "Arapaho", alpha_2: None, alpha_3: "arp", bibliographic: None, terminology: "arp" },
            Self::ART => &LanguageUnit { name: "Artificial languages", alpha_2: None, alpha_3: "art", bibliographic: None, terminology: "art" },
            Self::ARW => &LanguageUnit { name: "Arawak", alpha_2: None, alpha_3: "arw", bibliographic: None, terminology: "arw" },
            Self::ASM => &LanguageUnit { name: "Assamese", alpha_2: Some("as"), alpha_3: "asm", bibliographic: None, terminology: "asm" },
            Self::AST => &LanguageUnit { name: "Asturian; Bable; Leonese; Asturleonese", alpha_2: None, alpha_3: "ast", bibliographic: None, terminology: "ast" },
            Self::ATH => &LanguageUnit { name: "Athapascan languages", alpha_2: None, alpha_3: "ath", bibliographic: None, terminology: "ath" },
            Self::AUS => &LanguageUnit { name: "Australian languages", alpha_2: None, alpha_3: "aus", bibliographic: None, terminology: "aus" },
            Self::AVA => &LanguageUnit { name: "Avaric", alpha_2: Some("av"), alpha_3: "ava", bibliographic: None, terminology: "ava" },
            Self::AVE => &LanguageUnit { name: "Avestan", alpha_2: Some("ae"), alpha_3: "ave", bibliographic: None, terminology: "ave" },
            Self::AWA => &LanguageUnit { name: "Awadhi", alpha_2: None, alpha_3: "awa", bibliographic: None, terminology: "awa" },
            Self::AYM => &LanguageUnit { name: "Aymara", alpha_2: Some("ay"), alpha_3: "aym", bibliographic: None, terminology: "aym" },
            Self::AZE => &LanguageUnit { name: "Azerbaijani", alpha_2: Some("az"), alpha_3: "aze", bibliographic: None, terminology: "aze" },
            Self::BAD => &LanguageUnit { name: "Banda languages", alpha_2: None, alpha_3: "bad", bibliographic: None, terminology: "bad" },
            Self::BAI => &LanguageUnit { name: "Bamileke languages", alpha_2: None, alpha_3: "bai", bibliographic: None, terminology: "bai" },
            Self::BAK => &LanguageUnit { name: "Bashkir", alpha_2: Some("ba"), alpha_3: "bak", bibliographic: None, terminology: "bak" },
            Self::BAL => &LanguageUnit { name: "Baluchi", alpha_2: None, alpha_3: "bal", bibliographic: None, terminology: "bal" },
            Self::BAM => &LanguageUnit { name: "Bambara", alpha_2: Some("bm"), alpha_3: "bam", bibliographic: None, terminology: "bam" },
            Self::BAN => &LanguageUnit { name: "Balinese", alpha_2: None, alpha_3: "ban", bibliographic: None, terminology: "ban" },
            Self::BAQ => &LanguageUnit { name: "Basque", alpha_2: Some("eu"), alpha_3: "baq", bibliographic: Some("baq"), terminology: "eus" },
            Self::EUS => &LanguageUnit { name: "Basque", alpha_2: Some("eu"), alpha_3: "eus", bibliographic: Some("baq"), terminology: "eus" },
            Self::BAS => &LanguageUnit { name: "Basa", alpha_2: None, alpha_3: "bas", bibliographic: None, terminology: "bas" },
            Self::BAT => &LanguageUnit { name: "Baltic languages", alpha_2: None, alpha_3: "bat", bibliographic: None, terminology: "bat" },
            Self::BEJ => &LanguageUnit { name: "Beja; Bedawiyet", alpha_2: None, alpha_3: "bej", bibliographic: None, terminology: "bej" },
            Self::BEL => &LanguageUnit { name: "Belarusian", alpha_2: Some("be"), alpha_3: "bel", bibliographic: None, terminology: "bel" },
            Self::BEM => &LanguageUnit { name: "Bemba", alpha_2: None, alpha_3: "bem", bibliographic: None, terminology: "bem" },
            Self::BEN => &LanguageUnit { name: "Bengali", alpha_2: Some("bn"), alpha_3: "ben", bibliographic: None, terminology: "ben" },
            Self::BER => &LanguageUnit { name: "Berber languages", alpha_2: None, alpha_3: "ber", bibliographic: None, terminology: "ber" },
            Self::BHO => &LanguageUnit { name: "Bhojpuri", alpha_2: None, alpha_3: "bho", bibliographic: None, terminology: "bho" },
            Self::BIH => &LanguageUnit { name: "Bihari languages", alpha_2: Some("bh"), alpha_3: "bih", bibliographic: None, terminology: "bih" },
            Self::BIK => &LanguageUnit { name: "Bikol", alpha_2: None, alpha_3: "bik", bibliographic: None, terminology: "bik" },
            Self::BIN => &LanguageUnit { name: "Bini; Edo", alpha_2: None, alpha_3: "bin", bibliographic: None, terminology: "bin" },
            Self::BIS => &LanguageUnit { name: "Bislama", alpha_2: Some("bi"), alpha_3: "bis", bibliographic: None, terminology: "bis" },
            Self::BLA => &LanguageUnit { name: "Siksika", alpha_2: None, alpha_3: "bla", bibliographic: None, terminology: "bla" },
            Self::BNT => &LanguageUnit { name: "Bantu languages", alpha_2: None, alpha_3: "bnt", bibliographic: None, terminology: "bnt" },
            Self::TIB => &LanguageUnit { name: "Tibetan", alpha_2: Some("bo"), alpha_3: "tib", bibliographic: Some("tib"), terminology: "bod" },
            Self::BOD => &LanguageUnit { name: "Tibetan", alpha_2: Some("bo"), alpha_3: "bod", bibliographic: Some("tib"), terminology: "bod" },
            Self::BOS => &LanguageUnit { name: "Bosnian", alpha_2: Some("bs"), alpha_3: "bos", bibliographic: None, terminology: "bos" },
            Self::BRA => &LanguageUnit { name: "Braj", alpha_2: None, alpha_3: "bra", bibliographic: None, terminology: "bra" },
            Self::BRE => &LanguageUnit { name: "Breton", alpha_2: Some("br"), alpha_3: "bre", bibliographic: None, terminology: "bre" },
            Self::BTK => &LanguageUnit { name: "Batak languages", alpha_2: None, alpha_3: "btk", bibliographic: None, terminology: "btk" },
            Self::BUA => &LanguageUnit { name: "Buriat", alpha_2: None, alpha_3: "bua", bibliographic: None, terminology: "bua" },
            Self::BUG => &LanguageUnit { name: "Buginese", alpha_2: None, alpha_3: "bug", bibliographic: None, terminology: "bug" },
            Self::BUL => &LanguageUnit { name: "Bulgarian", alpha_2: Some("bg"), alpha_3: "bul", bibliographic: None, terminology: "bul" },
            Self::BUR => &LanguageUnit { name: "Burmese", alpha_2: Some("my"), alpha_3: "bur", bibliographic: Some("bur"), terminology: "mya" },
            Self::MYA => &LanguageUnit { name: "Burmese", alpha_2: Some("my"), alpha_3: "mya", bibliographic: Some("bur"), terminology: "mya" },
            Self::BYN => &LanguageUnit { name: "Blin; Bilin", alpha_2: None, alpha_3: "byn", bibliographic: None, terminology: "byn" },
            Self::CAD => &LanguageUnit { name: "Caddo", alpha_2: None, alpha_3: "cad", bibliographic: None, terminology: "cad" },
            Self::CAI => &LanguageUnit { name: "Central American Indian languages", alpha_2: None, alpha_3: "cai", bibliographic: None, terminology: "cai" },
            Self::CAR => &LanguageUnit { name: "Galibi Carib", alpha_2: None, alpha_3: "car", bibliographic: None, terminology: "car" },
            Self::CAT => &LanguageUnit { name: "Catalan; Valencian", alpha_2: Some("ca"), alpha_3: "cat", bibliographic: None, terminology: "cat" },
            Self::CAU => &LanguageUnit { name: "Caucasian languages", alpha_2: None, alpha_3: "cau", bibliographic: None, terminology: "cau" },
            Self::CEB => &LanguageUnit { name: "Cebuano", alpha_2: None, alpha_3: "ceb", bibliographic: None, terminology: "ceb" },
            Self::CEL => &LanguageUnit { name: "Celtic languages", alpha_2: None, alpha_3: "cel", bibliographic: None, terminology: "cel" },
            Self::CZE => &LanguageUnit { name: "Czech", alpha_2: Some("cs"), alpha_3: "cze", bibliographic: Some("cze"), terminology: "ces" },
            Self::CES => &LanguageUnit { name: "Czech", alpha_2: Some("cs"), alpha_3: "ces", bibliographic: Some("cze"), terminology: "ces" },
            Self::CHA => &LanguageUnit { name: "Chamorro", alpha_2: Some("ch"), alpha_3: "cha", bibliographic: None, terminology: "cha" },
            Self::CHB => &LanguageUnit { name: "Chibcha", alpha_2: None, alpha_3: "chb", bibliographic: None, terminology: "chb" },
            Self::CHE => &LanguageUnit { name: "Chechen", alpha_2: Some("ce"), alpha_3: "che", bibliographic: None, terminology: "che" },
            Self::CHG => &LanguageUnit { name: "Chagatai", alpha_2: None, alpha_3: "chg", bibliographic: None, terminology: "chg" },
            Self::CHI => &LanguageUnit { name: "Chinese", alpha_2: Some("zh"), alpha_3: "chi", bibliographic: Some("chi"), terminology: "zho" },
            Self::ZHO => &LanguageUnit { name: "Chinese", alpha_2: Some("zh"), alpha_3: "zho", bibliographic: Some("chi"), terminology: "zho" },
            Self::CHK => &LanguageUnit { name: "Chuukese", alpha_2: None, alpha_3: "chk", bibliographic: None, terminology: "chk" },
            Self::CHM => &LanguageUnit { name: "Mari", alpha_2: None, alpha_3: "chm", bibliographic: None, terminology: "chm" },
            Self::CHN => &LanguageUnit { name: "Chinook jargon", alpha_2: None, alpha_3: "chn", bibliographic: None, terminology: "chn" },
            Self::CHO => &LanguageUnit { name: "Choctaw", alpha_2: None, alpha_3: "cho", bibliographic: None, terminology: "cho" },
            Self::CHP => &LanguageUnit { name: "Chipewyan; Dene Suline", alpha_2: None, alpha_3: "chp", bibliographic: None, terminology: "chp" },
            Self::CHR => &LanguageUnit { name: "Cherokee", alpha_2: None, alpha_3: "chr", bibliographic: None, terminology: "chr" },
            Self::CHU => &LanguageUnit { name: "Church Slavic; Old Slavonic; Church Slavonic; Old Bulgarian; Old Church Slavonic", alpha_2: Some("cu"), alpha_3: "chu", bibliographic: None, terminology: "chu" },
            Self::CHV => &LanguageUnit { name: "Chuvash", alpha_2: Some("cv"), alpha_3: "chv", bibliographic: None, terminology: "chv" },
            Self::CHY => &LanguageUnit { name: "Cheyenne", alpha_2: None, alpha_3: "chy", bibliographic: None, terminology: "chy" },
            Self::CMC => &LanguageUnit { name: "Chamic languages", alpha_2: None, alpha_3: "cmc", bibliographic: None, terminology: "cmc" },
            Self::CNR => &LanguageUnit { name: "Montenegrin", alpha_2: None, alpha_3: "cnr", bibliographic: None, terminology: "cnr" },
            Self::COP => &LanguageUnit { name: "Coptic", alpha_2: None, alpha_3: "cop", bibliographic: None, terminology: "cop" },
            Self::COR => &LanguageUnit { name: "Cornish", alpha_2: Some("kw"), alpha_3: "cor", bibliographic: None, terminology: "cor" },
            Self::COS => &LanguageUnit { name: "Corsican", alpha_2: Some("co"), alpha_3: "cos", bibliographic: None, terminology: "cos" },
            Self::CPE => &LanguageUnit { name: "Creoles and pidgins, English based", alpha_2: None, alpha_3: "cpe", bibliographic: None, terminology: "cpe" },
            Self::CPF => &LanguageUnit { name: "Creoles and pidgins, French-based", alpha_2: None, alpha_3: "cpf", bibliographic: None, terminology: "cpf" },
            Self::CPP => &LanguageUnit { name: "Creoles and pidgins, Portuguese-based", alpha_2: None, alpha_3: "cpp", bibliographic: None, terminology: "cpp" },
            Self::CRE => &LanguageUnit { name: "Cree", alpha_2: Some("cr"), alpha_3: "cre", bibliographic: None, terminology: "cre" },
            Self::CRH => &LanguageUnit { name: "Crimean Tatar; Crimean Turkish", alpha_2: None, alpha_3: "crh", bibliographic: None, terminology: "crh" },
            Self::CRP => &LanguageUnit { name: "Creoles and pidgins", alpha_2: None, alpha_3: "crp", bibliographic: None, terminology: "crp" },
            Self::CSB => &LanguageUnit { name: "Kashubian", alpha_2: None, alpha_3: "csb", bibliographic: None, terminology: "csb" },
            Self::CUS => &LanguageUnit { name: "Cushitic languages", alpha_2: None, alpha_3: "cus", bibliographic: None, terminology: "cus" },
            Self::WEL => &LanguageUnit { name: "Welsh", alpha_2: Some("cy"), alpha_3: "wel", bibliographic: Some("wel"), terminology: "cym" },
            Self::CYM => &LanguageUnit { name: "Welsh", alpha_2: Some("cy"), alpha_3: "cym", bibliographic: Some("wel"), terminology: "cym" },
            Self::DAK => &LanguageUnit { name: "Dakota", alpha_2: None, alpha_3: "dak", bibliographic: None, terminology: "dak" },
            Self::DAN => &LanguageUnit { name: "Danish", alpha_2: Some("da"), alpha_3: "dan", bibliographic: None, terminology: "dan" },
            Self::DAR => &LanguageUnit { name: "Dargwa", alpha_2: None, alpha_3: "dar", bibliographic: None, terminology: "dar" },
            Self::DAY => &LanguageUnit { name: "Land Dayak languages", alpha_2: None, alpha_3: "day", bibliographic: None, terminology: "day" },
            Self::DEL => &LanguageUnit { name: "Delaware", alpha_2: None, alpha_3: "del", bibliographic: None, terminology: "del" },
            Self::DEN => &LanguageUnit { name: "Slave (Athapascan)", alpha_2: None, alpha_3: "den", bibliographic: None, terminology: "den" },
            Self::GER => &LanguageUnit { name: "German", alpha_2: Some("de"), alpha_3: "ger", bibliographic: Some("ger"), terminology: "deu" },
            Self::DEU => &LanguageUnit { name: "German", alpha_2: Some("de"), alpha_3: "deu", bibliographic: Some("ger"), terminology: "deu" },
            Self::DGR => &LanguageUnit { name: "Dogrib", alpha_2: None, alpha_3: "dgr", bibliographic: None, terminology: "dgr" },
            Self::DIN => &LanguageUnit { name: "Dinka", alpha_2: None, alpha_3: "din", bibliographic: None, terminology: "din" },
            Self::DIV => &LanguageUnit { name: "Divehi; Dhivehi; Maldivian", alpha_2: Some("dv"), alpha_3: "div", bibliographic: None, terminology: "div" },
            Self::DOI => &LanguageUnit { name: "Dogri", alpha_2: None, alpha_3: "doi", bibliographic: None, terminology: "doi" },
            Self::DRA => &LanguageUnit { name: "Dravidian languages", alpha_2: None, alpha_3: "dra", bibliographic: None, terminology: "dra" },
            Self::DSB => &LanguageUnit { name: "Lower Sorbian", alpha_2: None, alpha_3: "dsb", bibliographic: None, terminology: "dsb" },
            Self::DUA => &LanguageUnit { name: "Duala", alpha_2: None, alpha_3: "dua", bibliographic: None, terminology: "dua" },
            Self::DUM => &LanguageUnit { name: "Dutch, Middle (ca.1050-1350)", alpha_2: None, alpha_3: "dum", bibliographic: None, terminology: "dum" },
            Self::DUT => &LanguageUnit { name: "Dutch; Flemish", alpha_2: Some("nl"), alpha_3: "dut", bibliographic: Some("dut"), terminology: "nld" },
            Self::NLD => &LanguageUnit { name: "Dutch; Flemish", alpha_2: Some("nl"), alpha_3: "nld", bibliographic: Some("dut"), terminology: "nld" },
            Self::DYU => &LanguageUnit { name: "Dyula", alpha_2: None, alpha_3: "dyu", bibliographic: None, terminology: "dyu" },
            Self::DZO => &LanguageUnit { name: "Dzongkha", alpha_2: Some("dz"), alpha_3: "dzo", bibliographic: None, terminology: "dzo" },
            Self::EFI => &LanguageUnit { name: "Efik", alpha_2: None, alpha_3: "efi", bibliographic: None, terminology: "efi" },
            Self::EGY => &LanguageUnit { name: "Egyptian (Ancient)", alpha_2: None, alpha_3: "egy", bibliographic: None, terminology: "egy" },
            Self::EKA => &LanguageUnit { name: "Ekajuk", alpha_2: None, alpha_3: "eka", bibliographic: None, terminology: "eka" },
            Self::GRE => &LanguageUnit { name: "Greek, Modern (1453-)", alpha_2: Some("el"), alpha_3: "gre", bibliographic: Some("gre"), terminology: "ell" },
            Self::ELL => &LanguageUnit { name: "Greek, Modern (1453-)", alpha_2: Some("el"), alpha_3: "ell", bibliographic: Some("gre"), terminology: "ell" },
            Self::ELX => &LanguageUnit { name: "Elamite", alpha_2: None, alpha_3: "elx", bibliographic: None, terminology: "elx" },
            Self::ENG => &LanguageUnit { name: "English", alpha_2: Some("en"), alpha_3: "eng", bibliographic: None, terminology: "eng" },
            Self::ENM => &LanguageUnit { name: "English, Middle (1100-1500)", alpha_2: None, alpha_3: "enm", bibliographic: None, terminology: "enm" },
            Self::EPO => &LanguageUnit { name: "Esperanto", alpha_2: Some("eo"), alpha_3: "epo", bibliographic: None, terminology: "epo" },
            Self::EST => &LanguageUnit { name: "Estonian", alpha_2: Some("et"), alpha_3: "est", bibliographic: None, terminology: "est" },
            Self::EWE => &LanguageUnit { name: "Ewe", alpha_2: Some("ee"), alpha_3: "ewe", bibliographic: None, terminology: "ewe" },
            Self::EWO => &LanguageUnit { name: "Ewondo", alpha_2: None, alpha_3: "ewo", bibliographic: None, terminology: "ewo" },
            Self::FAN => &LanguageUnit { name: "Fang", alpha_2: None, alpha_3: "fan", bibliographic: None, terminology: "fan" },
            Self::FAO => &LanguageUnit { name: "Faroese", alpha_2: Some("fo"), alpha_3: "fao", bibliographic: None, terminology: "fao" },
            Self::PER => &LanguageUnit { name: "Persian", alpha_2: Some("fa"), alpha_3: "per", bibliographic: Some("per"), terminology: "fas" },
            Self::FAS => &LanguageUnit { name: "Persian", alpha_2: Some("fa"), alpha_3: "fas", bibliographic: Some("per"), terminology: "fas" },
            Self::FAT => &LanguageUnit { name: "Fanti", alpha_2: None, alpha_3: "fat", bibliographic: None, terminology: "fat" },
            Self::FIJ => &LanguageUnit { name: "Fijian", alpha_2: Some("fj"), alpha_3: "fij", bibliographic: None, terminology: "fij" },
            Self::FIL => &LanguageUnit { name: "Filipino; Pilipino", alpha_2: None, alpha_3: "fil", bibliographic: None, terminology: "fil" },
            Self::FIN => &LanguageUnit { name: "Finnish", alpha_2: Some("fi"), alpha_3: "fin", bibliographic: None, terminology: "fin" },
            Self::FIU => &LanguageUnit { name: "Finno-Ugrian languages", alpha_2: None, alpha_3: "fiu", bibliographic: None, terminology: "fiu" },
            Self::FON => &LanguageUnit { name: "Fon", alpha_2: None, alpha_3: "fon", bibliographic: None, terminology: "fon" },
            Self::FRE => &LanguageUnit { name: "French", alpha_2: Some("fr"), alpha_3: "fre", bibliographic: Some("fre"), terminology: "fra" },
            Self::FRA => &LanguageUnit { name: "French", alpha_2: Some("fr"), alpha_3: "fra", bibliographic: Some("fre"), terminology: "fra" },
            Self::FRM => &LanguageUnit { name: "French, Middle (ca.1400-1600)", alpha_2: None, alpha_3: "frm", bibliographic: None, terminology: "frm" },
            Self::FRO => &LanguageUnit { name: "French, Old (842-ca.1400)", alpha_2: None, alpha_3: "fro", bibliographic: None, terminology: "fro" },
            Self::FRR => &LanguageUnit { name: "Northern Frisian", alpha_2: None, alpha_3: "frr", bibliographic: None, terminology: "frr" },
            Self::FRS => &LanguageUnit { name: "Eastern Frisian", alpha_2: None, alpha_3: "frs", bibliographic: None, terminology: "frs" },
            Self::FRY => &LanguageUnit { name: "Western Frisian", alpha_2: Some("fy"), alpha_3: "fry", bibliographic: None, terminology: "fry" },
            Self::FUL => &LanguageUnit { name: "Fulah", alpha_2: Some("ff"), alpha_3: "ful", bibliographic: None, terminology: "ful" },
            Self::FUR => &LanguageUnit { name: "Friulian", alpha_2: None, alpha_3: "fur", bibliographic: None, terminology: "fur" },
            Self::GAA => &LanguageUnit { name: "Ga", alpha_2: None, alpha_3: "gaa", bibliographic: None, terminology: "gaa" },
            Self::GAY => &LanguageUnit { name: "Gayo", alpha_2: None, alpha_3: "gay", bibliographic: None, terminology: "gay" },
            Self::GBA => &LanguageUnit { name: "Gbaya", alpha_2: None, alpha_3: "gba", bibliographic: None, terminology: "gba" },
            Self::GEM => &LanguageUnit { name: "Germanic languages", alpha_2: None, alpha_3: "gem", bibliographic: None, terminology: "gem" },
            Self::GEO => &LanguageUnit { name: "Georgian", alpha_2: Some("ka"), alpha_3: "geo", bibliographic: Some("geo"), terminology: "kat" },
            Self::KAT => &LanguageUnit { name: "Georgian", alpha_2: Some("ka"), alpha_3: "kat", bibliographic: Some("geo"), terminology: "kat" },
            Self::GEZ => &LanguageUnit { name: "Geez", alpha_2: None, alpha_3: "gez", bibliographic: None, terminology: "gez" },
            Self::GIL => &LanguageUnit { name: "Gilbertese", alpha_2: None, alpha_3: "gil", bibliographic: None, terminology: "gil" },
            Self::GLA => &LanguageUnit { name: "Gaelic; Scottish Gaelic", alpha_2: Some("gd"), alpha_3: "gla", bibliographic: None, terminology: "gla" },
            Self::GLE => &LanguageUnit { name: "Irish", alpha_2: Some("ga"), alpha_3: "gle", bibliographic: None, terminology: "gle" },
            Self::GLG => &LanguageUnit { name: "Galician", alpha_2: Some("gl"), alpha_3: "glg", bibliographic: None, terminology: "glg" },
            Self::GLV => &LanguageUnit { name: "Manx", alpha_2: Some("gv"), alpha_3: "glv", bibliographic: None, terminology: "glv" },
            Self::GMH => &LanguageUnit { name: "German, Middle High (ca.1050-1500)", alpha_2: None, alpha_3: "gmh", bibliographic: None, terminology: "gmh" },
            Self::GOH => &LanguageUnit { name: "German, Old High (ca.750-1050)", alpha_2: None, alpha_3: "goh", bibliographic: None, terminology: "goh" },
            Self::GON => &LanguageUnit { name: "Gondi", alpha_2: None, alpha_3: "gon", bibliographic: None, terminology: "gon" },
            Self::GOR => &LanguageUnit { name: "Gorontalo", alpha_2: None, alpha_3: "gor", bibliographic: None, terminology: "gor" },
            Self::GOT => &LanguageUnit { name: "Gothic", alpha_2: None, alpha_3: "got", bibliographic: None, terminology: "got" },
            Self::GRB => &LanguageUnit { name: "Grebo", alpha_2: None, alpha_3: "grb", bibliographic: None, terminology: "grb" },
            Self::GRC => &LanguageUnit { name: "Greek, Ancient (to 1453)", alpha_2: None, alpha_3: "grc", bibliographic: None, terminology: "grc" },
            Self::GRN => &LanguageUnit { name: "Guarani", alpha_2: Some("gn"), alpha_3: "grn", bibliographic: None, terminology: "grn" },
            Self::GSW => &LanguageUnit { name: "Swiss German; Alemannic; Alsatian", alpha_2: None, alpha_3: "gsw", bibliographic: None, terminology: "gsw" },
            Self::GUJ => &LanguageUnit { name: "Gujarati", alpha_2: Some("gu"), alpha_3: "guj", bibliographic: None, terminology: "guj" },
            Self::GWI => &LanguageUnit { name: "Gwich'in", alpha_2: None, alpha_3: "gwi", bibliographic: None, terminology: "gwi" },
            Self::HAI => &LanguageUnit { name: "Haida", alpha_2: None, alpha_3: "hai", bibliographic: None, terminology: "hai" },
            Self::HAT => &LanguageUnit { name: "Haitian; Haitian Creole", alpha_2: Some("ht"), alpha_3: "hat", bibliographic: None, terminology: "hat" },
            Self::HAU => &LanguageUnit { name: "Hausa", alpha_2: Some("ha"), alpha_3: "hau", bibliographic: None, terminology: "hau" },
            Self::HAW => &LanguageUnit { name: "Hawaiian", alpha_2: None, alpha_3: "haw", bibliographic: None, terminology: "haw" },
            Self::HEB => &LanguageUnit { name: "Hebrew", alpha_2: Some("he"), alpha_3: "heb", bibliographic: None, terminology: "heb" },
            Self::HER => &LanguageUnit { name: "Herero", alpha_2: Some("hz"), alpha_3: "her", bibliographic: None, terminology: "her" },
            Self::HIL => &LanguageUnit { name: "Hiligaynon", alpha_2: None, alpha_3: "hil", bibliographic: None, terminology: "hil" },
            Self::HIM => &LanguageUnit { name: "Himachali languages; Western Pahari languages", alpha_2: None, alpha_3: "him", bibliographic: None, terminology: "him" },
            Self::HIN => &LanguageUnit { name: "Hindi", alpha_2: Some("hi"), alpha_3: "hin", bibliographic: None, terminology: "hin" },
            Self::HIT => &LanguageUnit { name: "Hittite", alpha_2: None, alpha_3: "hit", bibliographic: None, terminology: "hit" },
            Self::HMN => &LanguageUnit { name: "Hmong; Mong", alpha_2: None, alpha_3: "hmn", bibliographic: None, terminology: "hmn" },
            Self::HMO => &LanguageUnit { name: "Hiri Motu", alpha_2: Some("ho"), alpha_3: "hmo", bibliographic: None, terminology: "hmo" },
            Self::HRV => &LanguageUnit { name: "Croatian", alpha_2: Some("hr"), alpha_3: "hrv", bibliographic: None, terminology: "hrv" },
            Self::HSB => &LanguageUnit { name: "Upper Sorbian", alpha_2: None, alpha_3: "hsb", bibliographic: None, terminology: "hsb" },
            Self::HUN => &LanguageUnit { name: "Hungarian", alpha_2: Some("hu"), alpha_3: "hun", bibliographic: None, terminology: "hun" },
            Self::HUP => &LanguageUnit { name: "Hupa", alpha_2: None, alpha_3: "hup", bibliographic: None, terminology: "hup" },
            Self::IBA => &LanguageUnit { name: "Iban", alpha_2: None, alpha_3: "iba", bibliographic: None, terminology: "iba" },
            Self::IBO => &LanguageUnit { name: "Igbo", alpha_2: Some("ig"), alpha_3: "ibo", bibliographic: None, terminology: "ibo" },
            Self::ICE => &LanguageUnit { name: "Icelandic", alpha_2: Some("is"), alpha_3: "ice", bibliographic: Some("ice"), terminology: "isl" },
            Self::ISL => &LanguageUnit { name: "Icelandic", alpha_2: Some("is"), alpha_3: "isl", bibliographic: Some("ice"), terminology: "isl" },
            Self::IDO => &LanguageUnit { name: "Ido", alpha_2: Some("io"), alpha_3: "ido", bibliographic: None, terminology: "ido" },
            Self::III => &LanguageUnit { name: "Sichuan Yi; Nuosu", alpha_2: Some("ii"), alpha_3: "iii", bibliographic: None, terminology: "iii" },
            Self::IJO => &LanguageUnit { name: "Ijo languages", alpha_2: None, alpha_3: "ijo", bibliographic: None, terminology: "ijo" },
            Self::IKU => &LanguageUnit { name: "Inuktitut", alpha_2: Some("iu"), alpha_3: "iku", bibliographic: None, terminology: "iku" },
            Self::ILE => &LanguageUnit { name: "Interlingue; Occidental", alpha_2: Some("ie"), alpha_3: "ile", bibliographic: None, terminology: "ile" },
            Self::ILO => &LanguageUnit { name: "Iloko", alpha_2: None, alpha_3: "ilo", bibliographic: None, terminology: "ilo" },
            Self::INA => &LanguageUnit { name: "Interlingua (International Auxiliary Language Association)", alpha_2: Some("ia"), alpha_3: "ina", bibliographic: None, terminology: "ina" },
            Self::INC => &LanguageUnit { name: "Indic languages", alpha_2: None, alpha_3: "inc", bibliographic: None, terminology: "inc" },
            Self::IND => &LanguageUnit { name: "Indonesian", alpha_2: Some("id"), alpha_3: "ind", bibliographic: None, terminology: "ind" },
            Self::INE => &LanguageUnit { name: "Indo-European languages", alpha_2: None, alpha_3: "ine", bibliographic: None, terminology: "ine" },
            Self::INH => &LanguageUnit { name: "Ingush", alpha_2: None, alpha_3: "inh", bibliographic: None, terminology: "inh" },
            Self::IPK => &LanguageUnit { name: "Inupiaq", alpha_2: Some("ik"), alpha_3: "ipk", bibliographic: None, terminology: "ipk" },
            Self::IRA => &LanguageUnit { name: "Iranian languages", alpha_2: None, alpha_3: "ira", bibliographic: None, terminology: "ira" },
            Self::IRO => &LanguageUnit { name: "Iroquoian languages", alpha_2: None, alpha_3: "iro", bibliographic: None, terminology: "iro" },
            Self::ITA => &LanguageUnit { name: "Italian", alpha_2: Some("it"), alpha_3: "ita", bibliographic: None, terminology: "ita" },
            Self::JAV => &LanguageUnit { name: "Javanese", alpha_2: Some("jv"), alpha_3: "jav", bibliographic: None, terminology: "jav" },
            Self::JBO => &LanguageUnit { name: "Lojban", alpha_2: None, alpha_3: "jbo", bibliographic: None, terminology: "jbo" },
            Self::JPN => &LanguageUnit { name: "Japanese", alpha_2: Some("ja"), alpha_3: "jpn", bibliographic: None, terminology: "jpn" },
            Self::JPR => &LanguageUnit { name: "Judeo-Persian", alpha_2: None, alpha_3: "jpr", bibliographic: None, terminology: "jpr" },
            Self::JRB => &LanguageUnit { name: "Judeo-Arabic", alpha_2: None, alpha_3: "jrb", bibliographic: None, terminology: "jrb" },
            Self::KAA => &LanguageUnit { name: "Kara-Kalpak", alpha_2: None, alpha_3: "kaa", bibliographic: None, terminology: "kaa" },
            Self::KAB => &LanguageUnit { name: "Kabyle", alpha_2: None, alpha_3: "kab", bibliographic: None, terminology: "kab" },
            Self::KAC => &LanguageUnit { name: "Kachin; Jingpho", alpha_2: None, alpha_3: "kac", bibliographic: None, terminology: "kac" },
            Self::KAL => &LanguageUnit { name: "Kalaallisut; Greenlandic", alpha_2: Some("kl"), alpha_3: "kal", bibliographic: None, terminology: "kal" },
            Self::KAM => &LanguageUnit { name: "Kamba", alpha_2: None, alpha_3: "kam", bibliographic: None, terminology: "kam" },
            Self::KAN => &LanguageUnit { name: "Kannada", alpha_2: Some("kn"), alpha_3: "kan", bibliographic: None, terminology: "kan" },
            Self::KAR => &LanguageUnit { name: "Karen languages", alpha_2: None, alpha_3: "kar", bibliographic: None, terminology: "kar" },
            Self::KAS => &LanguageUnit { name: "Kashmiri", alpha_2: Some("ks"), alpha_3: "kas", bibliographic: None, terminology: "kas" },
            Self::KAU => &LanguageUnit { name: "Kanuri", alpha_2: Some("kr"), alpha_3: "kau", bibliographic: None, terminology: "kau" },
            Self::KAW => &LanguageUnit { name: "Kawi", alpha_2: None, alpha_3: "kaw", bibliographic: None, terminology: "kaw" },
            Self::KAZ => &LanguageUnit { name: "Kazakh", alpha_2: Some("kk"), alpha_3: "kaz", bibliographic: None, terminology: "kaz" },
            Self::KBD => &LanguageUnit { name: "Kabardian", alpha_2: None, alpha_3: "kbd", bibliographic: None, terminology: "kbd" },
            Self::KHA => &LanguageUnit { name: "Khasi", alpha_2: None, alpha_3: "kha", bibliographic: None, terminology: "kha" },
            Self::KHI => &LanguageUnit { name: "Khoisan languages", alpha_2: None, alpha_3: "khi", bibliographic: None, terminology: "khi" },
            Self::KHM => &LanguageUnit { name: "Central Khmer", alpha_2: Some("km"), alpha_3: "khm", bibliographic: None, terminology: "khm" },
            Self::KHO => &LanguageUnit { name: "Khotanese; Sakan", alpha_2: None, alpha_3: "kho", bibliographic: None, terminology: "kho" },
            Self::KIK => &LanguageUnit { name: "Kikuyu; Gikuyu", alpha_2: Some("ki"), alpha_3: "kik", bibliographic: None, terminology: "kik" },
            Self::KIN => &LanguageUnit { name: "Kinyarwanda", alpha_2: Some("rw"), alpha_3: "kin", bibliographic: None, terminology: "kin" },
            Self::KIR => &LanguageUnit { name: "Kirghiz; Kyrgyz", alpha_2: Some("ky"), alpha_3: "kir", bibliographic: None, terminology: "kir" },
            Self::KMB => &LanguageUnit { name: "Kimbundu", alpha_2: None, alpha_3: "kmb", bibliographic: None, terminology: "kmb" },
            Self::KOK => &LanguageUnit { name: "Konkani", alpha_2: None, alpha_3: "kok", bibliographic: None, terminology: "kok" },
            Self::KOM => &LanguageUnit { name: "Komi", alpha_2: Some("kv"), alpha_3: "kom", bibliographic: None, terminology: "kom" },
            Self::KON => &LanguageUnit { name: "Kongo", alpha_2: Some("kg"), alpha_3: "kon", bibliographic: None, terminology: "kon" },
            Self::KOR => &LanguageUnit { name: "Korean", alpha_2: Some("ko"), alpha_3: "kor", bibliographic: None, terminology: "kor" },
            Self::KOS => &LanguageUnit { name: "Kosraean", alpha_2: None, alpha_3: "kos", bibliographic: None, terminology: "kos" },
            Self::KPE => &LanguageUnit { name: "Kpelle", alpha_2: None, alpha_3: "kpe", bibliographic: None, terminology: "kpe" },
            Self::KRC => &LanguageUnit { name: "Karachay-Balkar", alpha_2: None, alpha_3: "krc", bibliographic: None, terminology: "krc" },
            Self::KRL => &LanguageUnit { name: "Karelian", alpha_2: None, alpha_3: "krl", bibliographic: None, terminology: "krl" },
            Self::KRO => &LanguageUnit { name: "Kru languages", alpha_2: None, alpha_3: "kro", bibliographic: None, terminology: "kro" },
            Self::KRU => &LanguageUnit { name: "Kurukh", alpha_2: None, alpha_3: "kru", bibliographic: None, terminology: "kru" },
            Self::KUA => &LanguageUnit { name: "Kuanyama; Kwanyama", alpha_2: Some("kj"), alpha_3: "kua", bibliographic: None, terminology: "kua" },
            Self::KUM => &LanguageUnit { name: "Kumyk", alpha_2: None, alpha_3: "kum", bibliographic: None, terminology: "kum" },
            Self::KUR => &LanguageUnit { name: "Kurdish", alpha_2: Some("ku"), alpha_3: "kur", bibliographic: None, terminology: "kur" },
            Self::KUT => &LanguageUnit { name: "Kutenai", alpha_2: None, alpha_3: "kut", bibliographic: None, terminology: "kut" },
            Self::LAD => &LanguageUnit { name: "Ladino", alpha_2: None, alpha_3: "lad", bibliographic: None, terminology: "lad" },
            Self::LAH => &LanguageUnit { name: "Lahnda", alpha_2: None, alpha_3: "lah", bibliographic: None, terminology: "lah" },
            Self::LAM => &LanguageUnit { name: "Lamba", alpha_2: None, alpha_3: "lam", bibliographic: None, terminology: "lam" },
            Self::LAO => &LanguageUnit { name: "Lao", alpha_2: Some("lo"), alpha_3: "lao", bibliographic: None, terminology: "lao" },
            Self::LAT => &LanguageUnit { name: "Latin", alpha_2: Some("la"), alpha_3: "lat", bibliographic: None, terminology: "lat" },
            Self::LAV => &LanguageUnit { name: "Latvian", alpha_2: Some("lv"), alpha_3: "lav", bibliographic: None, terminology: "lav" },
            Self::LEZ => &LanguageUnit { name: "Lezghian", alpha_2: None, alpha_3: "lez", bibliographic: None, terminology: "lez" },
            Self::LIM => &LanguageUnit { name: "Limburgan; Limburger; Limburgish", alpha_2: Some("li"), alpha_3: "lim", bibliographic: None, terminology: "lim" },
            Self::LIN => &LanguageUnit { name: "Lingala", alpha_2: Some("ln"), alpha_3: "lin", bibliographic: None, terminology: "lin" },
            Self::LIT => &LanguageUnit { name: "Lithuanian", alpha_2: Some("lt"), alpha_3: "lit", bibliographic: None, terminology: "lit" },
            Self::LOL => &LanguageUnit { name: "Mongo", alpha_2: None, alpha_3: "lol", bibliographic: None, terminology: "lol" },
            Self::LOZ => &LanguageUnit { name: "Lozi", alpha_2: None, alpha_3: "loz", bibliographic: None, terminology: "loz" },
            Self::LTZ => &LanguageUnit { name: "Luxembourgish; Letzeburgesch", alpha_2: Some("lb"), alpha_3: "ltz", bibliographic: None, terminology: "ltz" },
            Self::LUA => &LanguageUnit { name: "Luba-Lulua", alpha_2: None, alpha_3: "lua", bibliographic: None, terminology: "lua" },
            Self::LUB => &LanguageUnit { name: "Luba-Katanga", alpha_2: Some("lu"), alpha_3: "lub", bibliographic: None, terminology: "lub" },
            Self::LUG => &LanguageUnit { name: "Ganda", alpha_2: Some("lg"), alpha_3: "lug", bibliographic: None, terminology: "lug" },
            Self::LUI => &LanguageUnit { name: "Luiseno", alpha_2: None, alpha_3: "lui", bibliographic: None, terminology: "lui" },
            Self::LUN => &LanguageUnit { name: "Lunda", alpha_2: None, alpha_3: "lun", bibliographic: None, terminology: "lun" },
            Self::LUO => &LanguageUnit { name: "Luo (Kenya and Tanzania)", alpha_2: None, alpha_3: "luo", bibliographic: None, terminology: "luo" },
            Self::LUS => &LanguageUnit { name: "Lushai", alpha_2: None, alpha_3: "lus", bibliographic: None, terminology: "lus" },
            Self::MAC => &LanguageUnit { name: "Macedonian", alpha_2: Some("mk"), alpha_3: "mac", bibliographic: Some("mac"), terminology: "mkd" },
            Self::MKD => &LanguageUnit { name: "Macedonian", alpha_2: Some("mk"), alpha_3: "mkd", bibliographic: Some("mac"), terminology: "mkd" },
            Self::MAD => &LanguageUnit { name: "Madurese", alpha_2: None, alpha_3: "mad", bibliographic: None, terminology: "mad" },
            Self::MAG => &LanguageUnit { name: "Magahi", alpha_2: None, alpha_3: "mag", bibliographic: None, terminology: "mag" },
            Self::MAH => &LanguageUnit { name: "Marshallese", alpha_2: Some("mh"), alpha_3: "mah", bibliographic: None, terminology: "mah" },
            Self::MAI => &LanguageUnit { name: "Maithili", alpha_2: None, alpha_3: "mai", bibliographic: None, terminology: "mai" },
            Self::MAK => &LanguageUnit { name: "Makasar", alpha_2: None, alpha_3: "mak", bibliographic: None, terminology: "mak" },
            Self::MAL => &LanguageUnit { name: "Malayalam", alpha_2: Some("ml"), alpha_3: "mal", bibliographic: None, terminology: "mal" },
            Self::MAN => &LanguageUnit { name: "Mandingo", alpha_2: None, alpha_3: "man", bibliographic: None, terminology: "man" },
            Self::MAO => &LanguageUnit { name: "Maori", alpha_2: Some("mi"), alpha_3: "mao", bibliographic: Some("mao"), terminology: "mri" },
            Self::MRI => &LanguageUnit { name: "Maori", alpha_2: Some("mi"), alpha_3: "mri", bibliographic: Some("mao"), terminology: "mri" },
            Self::MAP => &LanguageUnit { name: "Austronesian languages", alpha_2: None, alpha_3: "map", bibliographic: None, terminology: "map" },
            Self::MAR => &LanguageUnit { name: "Marathi", alpha_2: Some("mr"), alpha_3: "mar", bibliographic: None, terminology: "mar" },
            Self::MAS => &LanguageUnit { name: "Masai", alpha_2: None, alpha_3: "mas", bibliographic: None, terminology: "mas" },
            Self::MAY => &LanguageUnit { name: "Malay", alpha_2: Some("ms"), alpha_3: "may", bibliographic: Some("may"), terminology: "msa" },
            Self::MSA => &LanguageUnit { name: "Malay", alpha_2: Some("ms"), alpha_3: "msa", bibliographic: Some("may"), terminology: "msa" },
            Self::MDF => &LanguageUnit { name: "Moksha", alpha_2: None, alpha_3: "mdf", bibliographic: None, terminology: "mdf" },
            Self::MDR => &LanguageUnit { name: "Mandar", alpha_2: None, alpha_3: "mdr", bibliographic: None, terminology: "mdr" },
            Self::MEN => &LanguageUnit { name: "Mende", alpha_2: None, alpha_3: "men", bibliographic: None, terminology: "men" },
            Self::MGA => &LanguageUnit { name: "Irish, Middle (900-1200)", alpha_2: None, alpha_3: "mga", bibliographic: None, terminology: "mga" },
            Self::MIC => &LanguageUnit { name: "Mi'kmaq; Micmac", alpha_2: None, alpha_3: "mic", bibliographic: None, terminology: "mic" },
            Self::MIN => &LanguageUnit { name: "Minangkabau", alpha_2: None, alpha_3: "min", bibliographic: None, terminology: "min" },
            Self::MIS => &LanguageUnit { name: "Uncoded languages", alpha_2: None, alpha_3: "mis", bibliographic: None, terminology: "mis" },
            Self::MKH => &LanguageUnit { name: "Mon-Khmer languages", alpha_2: None, alpha_3: "mkh", bibliographic: None, terminology: "mkh" },
            Self::MLG => &LanguageUnit { name: "Malagasy", alpha_2: Some("mg"), alpha_3: "mlg", bibliographic: None, terminology: "mlg" },
            Self::MLT => &LanguageUnit { name: "Maltese", alpha_2: Some("mt"), alpha_3: "mlt", bibliographic: None, terminology: "mlt" },
            Self::MNC => &LanguageUnit { name: "Manchu", alpha_2: None, alpha_3: "mnc", bibliographic: None, terminology: "mnc" },
            Self::MNI => &LanguageUnit { name: "Manipuri", alpha_2: None, alpha_3: "mni", bibliographic: None, terminology: "mni" },
            Self::MNO => &LanguageUnit { name: "Manobo languages", alpha_2: None, alpha_3: "mno", bibliographic: None, terminology: "mno" },
            Self::MOH => &LanguageUnit { name: "Mohawk", alpha_2: None, alpha_3: "moh", bibliographic: None, terminology: "moh" },
            Self::MON => &LanguageUnit { name: "Mongolian", alpha_2: Some("mn"), alpha_3: "mon", bibliographic: None, terminology: "mon" },
            Self::MOS => &LanguageUnit { name: "Mossi", alpha_2: None, alpha_3: "mos", bibliographic: None, terminology: "mos" },
            Self::MUL => &LanguageUnit { name: "Multiple languages", alpha_2: None, alpha_3: "mul", bibliographic: None, terminology: "mul" },
            Self::MUN => &LanguageUnit { name: "Munda languages", alpha_2: None, alpha_3: "mun", bibliographic: None, terminology: "mun" },
            Self::MUS => &LanguageUnit { name: "Creek", alpha_2: None, alpha_3: "mus", bibliographic: None, terminology: "mus" },
            Self::MWL => &LanguageUnit { name: "Mirandese", alpha_2: None, alpha_3: "mwl", bibliographic: None, terminology: "mwl" },
            Self::MWR => &LanguageUnit { name: "Marwari", alpha_2: None, alpha_3: "mwr", bibliographic: None, terminology: "mwr" },
            Self::MYN => &LanguageUnit { name: "Mayan languages", alpha_2: None, alpha_3: "myn", bibliographic: None, terminology: "myn" },
            Self::MYV => &LanguageUnit { name: "Erzya", alpha_2: None, alpha_3: "myv", bibliographic: None, terminology: "myv" },
            Self::NAH => &LanguageUnit { name: "Nahuatl languages", alpha_2: None, alpha_3: "nah", bibliographic: None, terminology: "nah" },
            Self::NAI => &LanguageUnit { name: "North American Indian languages", alpha_2: None, alpha_3: "nai", bibliographic: None, terminology: "nai" },
            Self::NAP => &LanguageUnit { name: "Neapolitan", alpha_2: None, alpha_3: "nap", bibliographic: None, terminology: "nap" },
            Self::NAU => &LanguageUnit { name: "Nauru", alpha_2: Some("na"), alpha_3: "nau", bibliographic: None, terminology: "nau" },
            Self::NAV => &LanguageUnit { name: "Navajo; Navaho", alpha_2: Some("nv"), alpha_3: "nav", bibliographic: None, terminology: "nav" },
            Self::NBL => &LanguageUnit { name: "Ndebele, South; South Ndebele", alpha_2: Some("nr"), alpha_3: "nbl", bibliographic: None, terminology: "nbl" },
            Self::NDE => &LanguageUnit { name: "Ndebele, North; North Ndebele", alpha_2: Some("nd"), alpha_3: "nde", bibliographic: None, terminology: "nde" },
            Self::NDO => &LanguageUnit { name: "Ndonga", alpha_2: Some("ng"), alpha_3: "ndo", bibliographic: None, terminology: "ndo" },
            Self::NDS => &LanguageUnit { name: "Low German; Low Saxon; German, Low; Saxon, Low", alpha_2: None, alpha_3: "nds", bibliographic: None, terminology: "nds" },
            Self::NEP => &LanguageUnit { name: "Nepali", alpha_2: Some("ne"), alpha_3: "nep", bibliographic: None, terminology: "nep" },
            Self::NEW => &LanguageUnit { name: "Nepal Bhasa; Newari", alpha_2: None, alpha_3: "new", bibliographic: None, terminology: "new" },
            Self::NIA => &LanguageUnit { name: "Nias", alpha_2: None, alpha_3: "nia", bibliographic: None, terminology: "nia" },
            Self::NIC => &LanguageUnit { name: "Niger-Kordofanian languages", alpha_2: None, alpha_3: "nic", bibliographic: None, terminology: "nic" },
            Self::NIU => &LanguageUnit { name: "Niuean", alpha_2: None, alpha_3: "niu", bibliographic: None, terminology: "niu" },
            Self::NNO => &LanguageUnit { name: "Norwegian Nynorsk; Nynorsk, Norwegian", alpha_2: Some("nn"), alpha_3: "nno", bibliographic: None, terminology: "nno" },
            Self::NOB => &LanguageUnit { name: "Bokml, Norwegian; Norwegian Bokml", alpha_2: Some("nb"), alpha_3: "nob", bibliographic: None, terminology: "nob" },
            Self::NOG => &LanguageUnit { name: "Nogai", alpha_2: None, alpha_3: "nog", bibliographic: None, terminology: "nog" },
            Self::NON => &LanguageUnit { name: "Norse, Old", alpha_2: None, alpha_3: "non", bibliographic: None, terminology: "non" },
            Self::NOR => &LanguageUnit { name: "Norwegian", alpha_2: Some("no"), alpha_3: "nor", bibliographic: None, terminology: "nor" },
            Self::NQO => &LanguageUnit { name: "N'Ko", alpha_2: None, alpha_3: "nqo", bibliographic: None, terminology: "nqo" },
            Self::NSO => &LanguageUnit { name: "Pedi; Sepedi; Northern Sotho", alpha_2: None, alpha_3: "nso", bibliographic: None, terminology: "nso" },
            Self::NUB => &LanguageUnit { name: "Nubian languages", alpha_2: None, alpha_3: "nub", bibliographic: None, terminology: "nub" },
            Self::NWC => &LanguageUnit { name: "Classical Newari; Old Newari; Classical Nepal Bhasa", alpha_2: None, alpha_3: "nwc", bibliographic: None, terminology: "nwc" },
            Self::NYA => &LanguageUnit { name: "Chichewa; Chewa; Nyanja", alpha_2: Some("ny"), alpha_3: "nya", bibliographic: None, terminology: "nya" },
            Self::NYM => &LanguageUnit { name: "Nyamwezi", alpha_2: None, alpha_3: "nym", bibliographic: None, terminology: "nym" },
            Self::NYN => &LanguageUnit { name: "Nyankole", alpha_2: None, alpha_3: "nyn", bibliographic: None, terminology: "nyn" },
            Self::NYO => &LanguageUnit { name: "Nyoro", alpha_2: None, alpha_3: "nyo", bibliographic: None, terminology: "nyo" },
            Self::NZI => &LanguageUnit { name: "Nzima", alpha_2: None, alpha_3: "nzi", bibliographic: None, terminology: "nzi" },
            Self::OCI => &LanguageUnit { name: "Occitan (post 1500)", alpha_2: Some("oc"), alpha_3: "oci", bibliographic: None, terminology: "oci" },
            Self::OJI => &LanguageUnit { name: "Ojibwa", alpha_2: Some("oj"), alpha_3: "oji", bibliographic: None, terminology: "oji" },
            Self::ORI => &LanguageUnit { name: "Oriya", alpha_2: Some("or"), alpha_3: "ori", bibliographic: None, terminology: "ori" },
            Self::ORM => &LanguageUnit { name: "Oromo", alpha_2: Some("om"), alpha_3: "orm", bibliographic: None, terminology: "orm" },
            Self::OSA => &LanguageUnit { name: "Osage", alpha_2: None, alpha_3: "osa", bibliographic: None, terminology: "osa" },
            Self::OSS => &LanguageUnit { name: "Ossetian; Ossetic", alpha_2: Some("os"), alpha_3: "oss", bibliographic: None, terminology: "oss" },
            Self::OTA => &LanguageUnit { name: "Turkish, Ottoman (1500-1928)", alpha_2: None, alpha_3: "ota", bibliographic: None, terminology: "ota" },
            Self::OTO => &LanguageUnit { name: "Otomian languages", alpha_2: None, alpha_3: "oto", bibliographic: None, terminology: "oto" },
            Self::PAA => &LanguageUnit { name: "Papuan languages", alpha_2: None, alpha_3: "paa", bibliographic: None, terminology: "paa" },
            Self::PAG => &LanguageUnit { name: "Pangasinan", alpha_2: None, alpha_3: "pag", bibliographic: None, terminology: "pag" },
            Self::PAL => &LanguageUnit { name: "Pahlavi", alpha_2: None, alpha_3: "pal", bibliographic: None, terminology: "pal" },
            Self::PAM => &LanguageUnit { name: "Pampanga; Kapampangan", alpha_2: None, alpha_3: "pam", bibliographic: None, terminology: "pam" },
            Self::PAN => &LanguageUnit { name: "Panjabi; Punjabi", alpha_2: Some("pa"), alpha_3: "pan", bibliographic: None, terminology: "pan" },
            Self::PAP => &LanguageUnit { name: "Papiamento", alpha_2: None, alpha_3: "pap", bibliographic: None, terminology: "pap" },
            Self::PAU => &LanguageUnit { name: "Palauan", alpha_2: None, alpha_3: "pau", bibliographic: None, terminology: "pau" },
            Self::PEO => &LanguageUnit { name: "Persian, Old (ca.600-400 B.C.)", alpha_2: None, alpha_3: "peo", bibliographic: None, terminology: "peo" },
            Self::PHI => &LanguageUnit { name: "Philippine languages", alpha_2: None, alpha_3: "phi", bibliographic: None, terminology: "phi" },
            Self::PHN => &LanguageUnit { name: "Phoenician", alpha_2: None, alpha_3: "phn", bibliographic: None, terminology: "phn" },
            Self::PLI => &LanguageUnit { name: "Pali", alpha_2: Some("pi"), alpha_3: "pli", bibliographic: None, terminology: "pli" },
            Self::POL => &LanguageUnit { name: "Polish", alpha_2: Some("pl"), alpha_3: "pol", bibliographic: None, terminology: "pol" },
            Self::PON => &LanguageUnit { name: "Pohnpeian", alpha_2: None, alpha_3: "pon", bibliographic: None, terminology: "pon" },
            Self::POR => &LanguageUnit { name: "Portuguese", alpha_2: Some("pt"), alpha_3: "por", bibliographic: None, terminology: "por" },
            Self::PRA => &LanguageUnit { name: "Prakrit languages", alpha_2: None, alpha_3: "pra", bibliographic: None, terminology: "pra" },
            Self::PRO => &LanguageUnit { name: "Provenal, Old (to 1500);Occitan, Old (to 1500)", alpha_2: None, alpha_3: "pro", bibliographic: None, terminology: "pro" },
            Self::PUS => &LanguageUnit { name: "Pushto; Pashto", alpha_2: Some("ps"), alpha_3: "pus", bibliographic: None, terminology: "pus" },
            Self::QUE => &LanguageUnit { name: "Quechua", alpha_2: Some("qu"), alpha_3: "que", bibliographic: None, terminology: "que" },
            Self::RAJ => &LanguageUnit { name: "Rajasthani", alpha_2: None, alpha_3: "raj", bibliographic: None, terminology: "raj" },
            Self::RAP => &LanguageUnit { name: "Rapanui", alpha_2: None, alpha_3: "rap", bibliographic: None, terminology: "rap" },
            Self::RAR => &LanguageUnit { name: "Rarotongan; Cook Islands Maori", alpha_2: None, alpha_3: "rar", bibliographic: None, terminology: "rar" },
            Self::ROA => &LanguageUnit { name: "Romance languages", alpha_2: None, alpha_3: "roa", bibliographic: None, terminology: "roa" },
            Self::ROH => &LanguageUnit { name: "Romansh", alpha_2: Some("rm"), alpha_3: "roh", bibliographic: None, terminology: "roh" },
            Self::ROM => &LanguageUnit { name: "Romany", alpha_2: None, alpha_3: "rom", bibliographic: None, terminology: "rom" },
            Self::RUM => &LanguageUnit { name: "Romanian; Moldavian; Moldovan", alpha_2: Some("ro"), alpha_3: "rum", bibliographic: Some("rum"), terminology: "ron" },
            Self::RON => &LanguageUnit { name: "Romanian; Moldavian; Moldovan", alpha_2: Some("ro"), alpha_3: "ron", bibliographic: Some("rum"), terminology: "ron" },
            Self::RUN => &LanguageUnit { name: "Rundi", alpha_2: Some("rn"), alpha_3: "run", bibliographic: None, terminology: "run" },
            Self::RUP => &LanguageUnit { name: "Aromanian; Arumanian; Macedo-Romanian", alpha_2: None, alpha_3: "rup", bibliographic: None, terminology: "rup" },
            Self::RUS => &LanguageUnit { name: "Russian", alpha_2: Some("ru"), alpha_3: "rus", bibliographic: None, terminology: "rus" },
            Self::SAD => &LanguageUnit { name: "Sandawe", alpha_2: None, alpha_3: "sad", bibliographic: None, terminology: "sad" },
            Self::SAG => &LanguageUnit { name: "Sango", alpha_2: Some("sg"), alpha_3: "sag", bibliographic: None, terminology: "sag" },
            Self::SAH => &LanguageUnit { name: "Yakut", alpha_2: None, alpha_3: "sah", bibliographic: None, terminology: "sah" },
            Self::SAI => &LanguageUnit { name: "South American Indian languages", alpha_2: None, alpha_3: "sai", bibliographic: None, terminology: "sai" },
            Self::SAL => &LanguageUnit { name: "Salishan languages", alpha_2: None, alpha_3: "sal", bibliographic: None, terminology: "sal" },
            Self::SAM => &LanguageUnit { name: "Samaritan Aramaic", alpha_2: None, alpha_3: "sam", bibliographic: None, terminology: "sam" },
            Self::SAN => &LanguageUnit { name: "Sanskrit", alpha_2: Some("sa"), alpha_3: "san", bibliographic: None, terminology: "san" },
            Self::SAS => &LanguageUnit { name: "Sasak", alpha_2: None, alpha_3: "sas", bibliographic: None, terminology: "sas" },
            Self::SAT => &LanguageUnit { name: "Santali", alpha_2: None, alpha_3: "sat", bibliographic: None, terminology: "sat" },
            Self::SCN => &LanguageUnit { name: "Sicilian", alpha_2: None, alpha_3: "scn", bibliographic: None, terminology: "scn" },
            Self::SCO => &LanguageUnit { name: "Scots", alpha_2: None, alpha_3: "sco", bibliographic: None, terminology: "sco" },
            Self::SEL => &LanguageUnit { name: "Selkup", alpha_2: None, alpha_3: "sel", bibliographic: None, terminology: "sel" },
            Self::SEM => &LanguageUnit { name: "Semitic languages", alpha_2: None, alpha_3: "sem", bibliographic: None, terminology: "sem" },
            Self::SGA => &LanguageUnit { name: "Irish, Old (to 900)", alpha_2: None, alpha_3: "sga", bibliographic: None, terminology: "sga" },
            Self::SGN => &LanguageUnit { name: "Sign Languages", alpha_2: None, alpha_3: "sgn", bibliographic: None, terminology: "sgn" },
            Self::SHN => &LanguageUnit { name: "Shan", alpha_2: None, alpha_3: "shn", bibliographic: None, terminology: "shn" },
            Self::SID => &LanguageUnit { name: "Sidamo", alpha_2: None, alpha_3: "sid", bibliographic: None, terminology: "sid" },
            Self::SIN => &LanguageUnit { name: "Sinhala; Sinhalese", alpha_2: Some("si"), alpha_3: "sin", bibliographic: None, terminology: "sin" },
            Self::SIO => &LanguageUnit { name: "Siouan languages", alpha_2: None, alpha_3: "sio", bibliographic: None, terminology: "sio" },
            Self::SIT => &LanguageUnit { name: "Sino-Tibetan languages", alpha_2: None, alpha_3: "sit", bibliographic: None, terminology: "sit" },
            Self::SLA => &LanguageUnit { name: "Slavic languages", alpha_2: None, alpha_3: "sla", bibliographic: None, terminology: "sla" },
            Self::SLO => &LanguageUnit { name: "Slovak", alpha_2: Some("sk"), alpha_3: "slo", bibliographic: Some("slo"), terminology: "slk" },
            Self::SLK => &LanguageUnit { name: "Slovak", alpha_2: Some("sk"), alpha_3: "slk", bibliographic: Some("slo"), terminology: "slk" },
            Self::SLV => &LanguageUnit { name: "Slovenian", alpha_2: Some("sl"), alpha_3: "slv", bibliographic: None, terminology: "slv" },
            Self::SMA => &LanguageUnit { name: "Southern Sami", alpha_2: None, alpha_3: "sma", bibliographic: None, terminology: "sma" },
            Self::SME => &LanguageUnit { name: "Northern Sami", alpha_2: Some("se"), alpha_3: "sme", bibliographic: None, terminology: "sme" },
            Self::SMI => &LanguageUnit { name: "Sami languages", alpha_2: None, alpha_3: "smi", bibliographic: None, terminology: "smi" },
            Self::SMJ => &LanguageUnit { name: "Lule Sami", alpha_2: None, alpha_3: "smj", bibliographic: None, terminology: "smj" },
            Self::SMN => &LanguageUnit { name: "Inari Sami", alpha_2: None, alpha_3: "smn", bibliographic: None, terminology: "smn" },
            Self::SMO => &LanguageUnit { name: "Samoan", alpha_2: Some("sm"), alpha_3: "smo", bibliographic: None, terminology: "smo" },
            Self::SMS => &LanguageUnit { name: "Skolt Sami", alpha_2: None, alpha_3: "sms", bibliographic: None, terminology: "sms" },
            Self::SNA => &LanguageUnit { name: "Shona", alpha_2: Some("sn"), alpha_3: "sna", bibliographic: None, terminology: "sna" },
            Self::SND => &LanguageUnit { name: "Sindhi", alpha_2: Some("sd"), alpha_3: "snd", bibliographic: None, terminology: "snd" },
            Self::SNK => &LanguageUnit { name: "Soninke", alpha_2: None, alpha_3: "snk", bibliographic: None, terminology: "snk" },
            Self::SOG => &LanguageUnit { name: "Sogdian", alpha_2: None, alpha_3: "sog", bibliographic: None, terminology: "sog" },
            Self::SOM => &LanguageUnit { name: "Somali", alpha_2: Some("so"), alpha_3: "som", bibliographic: None, terminology: "som" },
            Self::SON => &LanguageUnit { name: "Songhai languages", alpha_2: None, alpha_3: "son", bibliographic: None, terminology: "son" },
            Self::SOT => &LanguageUnit { name: "Sotho, Southern", alpha_2: Some("st"), alpha_3: "sot", bibliographic: None, terminology: "sot" },
            Self::SPA => &LanguageUnit { name: "Spanish; Castilian", alpha_2: Some("es"), alpha_3: "spa", bibliographic: None, terminology: "spa" },
            Self::SRD => &LanguageUnit { name: "Sardinian", alpha_2: Some("sc"), alpha_3: "srd", bibliographic: None, terminology: "srd" },
            Self::SRN => &LanguageUnit { name: "Sranan Tongo", alpha_2: None, alpha_3: "srn", bibliographic: None, terminology: "srn" },
            Self::SRP => &LanguageUnit { name: "Serbian", alpha_2: Some("sr"), alpha_3: "srp", bibliographic: None, terminology: "srp" },
            Self::SRR => &LanguageUnit { name: "Serer", alpha_2: None, alpha_3: "srr", bibliographic: None, terminology: "srr" },
            Self::SSA => &LanguageUnit { name: "Nilo-Saharan languages", alpha_2: None, alpha_3: "ssa", bibliographic: None, terminology: "ssa" },
            Self::SSW => &LanguageUnit { name: "Swati", alpha_2: Some("ss"), alpha_3: "ssw", bibliographic: None, terminology: "ssw" },
            Self::SUK => &LanguageUnit { name: "Sukuma", alpha_2: None, alpha_3: "suk", bibliographic: None, terminology: "suk" },
            Self::SUN => &LanguageUnit { name: "Sundanese", alpha_2: Some("su"), alpha_3: "sun", bibliographic: None, terminology: "sun" },
            Self::SUS => &LanguageUnit { name: "Susu", alpha_2: None, alpha_3: "sus", bibliographic: None, terminology: "sus" },
            Self::SUX => &LanguageUnit { name: "Sumerian", alpha_2: None, alpha_3: "sux", bibliographic: None, terminology: "sux" },
            Self::SWA => &LanguageUnit { name: "Swahili", alpha_2: Some("sw"), alpha_3: "swa", bibliographic: None, terminology: "swa" },
            Self::SWE => &LanguageUnit { name: "Swedish", alpha_2: Some("sv"), alpha_3: "swe", bibliographic: None, terminology: "swe" },
            Self::SYC => &LanguageUnit { name: "Classical Syriac", alpha_2: None, alpha_3: "syc", bibliographic: None, terminology: "syc" },
            Self::SYR => &LanguageUnit { name: "Syriac", alpha_2: None, alpha_3: "syr", bibliographic: None, terminology: "syr" },
            Self::TAH => &LanguageUnit { name: "Tahitian", alpha_2: Some("ty"), alpha_3: "tah", bibliographic: None, terminology: "tah" },
            Self::TAI => &LanguageUnit { name: "Tai languages", alpha_2: None, alpha_3: "tai", bibliographic: None, terminology: "tai" },
            Self::TAM => &LanguageUnit { name: "Tamil", alpha_2: Some("ta"), alpha_3: "tam", bibliographic: None, terminology: "tam" },
            Self::TAT => &LanguageUnit { name: "Tatar", alpha_2: Some("tt"), alpha_3: "tat", bibliographic: None, terminology: "tat" },
            Self::TEL => &LanguageUnit { name: "Telugu", alpha_2: Some("te"), alpha_3: "tel", bibliographic: None, terminology: "tel" },
            Self::TEM => &LanguageUnit { name: "Timne", alpha_2: None, alpha_3: "tem", bibliographic: None, terminology: "tem" },
            Self::TER => &LanguageUnit { name: "Tereno", alpha_2: None, alpha_3: "ter", bibliographic: None, terminology: "ter" },
            Self::TET => &LanguageUnit { name: "Tetum", alpha_2: None, alpha_3: "tet", bibliographic: None, terminology: "tet" },
            Self::TGK => &LanguageUnit { name: "Tajik", alpha_2: Some("tg"), alpha_3: "tgk", bibliographic: None, terminology: "tgk" },
            Self::TGL => &LanguageUnit { name: "Tagalog", alpha_2: Some("tl"), alpha_3: "tgl", bibliographic: None, terminology: "tgl" },
            Self::THA => &LanguageUnit { name: "Thai", alpha_2: Some("th"), alpha_3: "tha", bibliographic: None, terminology: "tha" },
            Self::TIG => &LanguageUnit { name: "Tigre", alpha_2: None, alpha_3: "tig", bibliographic: None, terminology: "tig" },
            Self::TIR => &LanguageUnit { name: "Tigrinya", alpha_2: Some("ti"), alpha_3: "tir", bibliographic: None, terminology: "tir" },
            Self::TIV => &LanguageUnit { name: "Tiv", alpha_2: None, alpha_3: "tiv", bibliographic: None, terminology: "tiv" },
            Self::TKL => &LanguageUnit { name: "Tokelau", alpha_2: None, alpha_3: "tkl", bibliographic: None, terminology: "tkl" },
            Self::TLH => &LanguageUnit { name: "Klingon; tlhIngan-Hol", alpha_2: None, alpha_3: "tlh", bibliographic: None, terminology: "tlh" },
            Self::TLI => &LanguageUnit { name: "Tlingit", alpha_2: None, alpha_3: "tli", bibliographic: None, terminology: "tli" },
            Self::TMH => &LanguageUnit { name: "Tamashek", alpha_2: None, alpha_3: "tmh", bibliographic: None, terminology: "tmh" },
            Self::TOG => &LanguageUnit { name: "Tonga (Nyasa)", alpha_2: None, alpha_3: "tog", bibliographic: None, terminology: "tog" },
            Self::TON => &LanguageUnit { name: "Tonga (Tonga Islands)", alpha_2: Some("to"), alpha_3: "ton", bibliographic: None, terminology: "ton" },
            Self::TPI => &LanguageUnit { name: "Tok Pisin", alpha_2: None, alpha_3: "tpi", bibliographic: None, terminology: "tpi" },
            Self::TSI => &LanguageUnit { name: "Tsimshian", alpha_2: None, alpha_3: "tsi", bibliographic: None, terminology: "tsi" },
            Self::TSN => &LanguageUnit { name: "Tswana", alpha_2: Some("tn"), alpha_3: "tsn", bibliographic: None, terminology: "tsn" },
            Self::TSO => &LanguageUnit { name: "Tsonga", alpha_2: Some("ts"), alpha_3: "tso", bibliographic: None, terminology: "tso" },
            Self::TUK => &LanguageUnit { name: "Turkmen", alpha_2: Some("tk"), alpha_3: "tuk", bibliographic: None, terminology: "tuk" },
            Self::TUM => &LanguageUnit { name: "Tumbuka", alpha_2: None, alpha_3: "tum", bibliographic: None, terminology: "tum" },
            Self::TUP => &LanguageUnit { name: "Tupi languages", alpha_2: None, alpha_3: "tup", bibliographic: None, terminology: "tup" },
            Self::TUR => &LanguageUnit { name: "Turkish", alpha_2: Some("tr"), alpha_3: "tur", bibliographic: None, terminology: "tur" },
            Self::TUT => &LanguageUnit { name: "Altaic languages", alpha_2: None, alpha_3: "tut", bibliographic: None, terminology: "tut" },
            Self::TVL => &LanguageUnit { name: "Tuvalu", alpha_2: None, alpha_3: "tvl", bibliographic: None, terminology: "tvl" },
            Self::TWI => &LanguageUnit { name: "Twi", alpha_2: Some("tw"), alpha_3: "twi", bibliographic: None, terminology: "twi" },
            Self::TYV => &LanguageUnit { name: "Tuvinian", alpha_2: None, alpha_3: "tyv", bibliographic: None, terminology: "tyv" },
            Self::UDM => &LanguageUnit { name: "Udmurt", alpha_2: None, alpha_3: "udm", bibliographic: None, terminology: "udm" },
            Self::UGA => &LanguageUnit { name: "Ugaritic", alpha_2: None, alpha_3: "uga", bibliographic: None, terminology: "uga" },
            Self::UIG => &LanguageUnit { name: "Uighur; Uyghur", alpha_2: Some("ug"), alpha_3: "uig", bibliographic: None, terminology: "uig" },
            Self::UKR => &LanguageUnit { name: "Ukrainian", alpha_2: Some("uk"), alpha_3: "ukr", bibliographic: None, terminology: "ukr" },
            Self::UMB => &LanguageUnit { name: "Umbundu", alpha_2: None, alpha_3: "umb", bibliographic: None, terminology: "umb" },
            Self::UND => &LanguageUnit { name: "Undetermined", alpha_2: None, alpha_3: "und", bibliographic: None, terminology: "und" },
            Self::URD => &LanguageUnit { name: "Urdu", alpha_2: Some("ur"), alpha_3: "urd", bibliographic: None, terminology: "urd" },
            Self::UZB => &LanguageUnit { name: "Uzbek", alpha_2: Some("uz"), alpha_3: "uzb", bibliographic: None, terminology: "uzb" },
            Self::VAI => &LanguageUnit { name: "Vai", alpha_2: None, alpha_3: "vai", bibliographic: None, terminology: "vai" },
            Self::VEN => &LanguageUnit { name: "Venda", alpha_2: Some("ve"), alpha_3: "ven", bibliographic: None, terminology: "ven" },
            Self::VIE => &LanguageUnit { name: "Vietnamese", alpha_2: Some("vi"), alpha_3: "vie", bibliographic: None, terminology: "vie" },
            Self::VOL => &LanguageUnit { name: "Volapk", alpha_2: Some("vo"), alpha_3: "vol", bibliographic: None, terminology: "vol" },
            Self::VOT => &LanguageUnit { name: "Votic", alpha_2: None, alpha_3: "vot", bibliographic: None, terminology: "vot" },
            Self::WAK => &LanguageUnit { name: "Wakashan languages", alpha_2: None, alpha_3: "wak", bibliographic: None, terminology: "wak" },
            Self::WAL => &LanguageUnit { name: "Wolaitta; Wolaytta", alpha_2: None, alpha_3: "wal", bibliographic: None, terminology: "wal" },
            Self::WAR => &LanguageUnit { name: "Waray", alpha_2: None, alpha_3: "war", bibliographic: None, terminology: "war" },
            Self::WAS => &LanguageUnit { name: "Washo", alpha_2: None, alpha_3: "was", bibliographic: None, terminology: "was" },
            Self::WEN => &LanguageUnit { name: "Sorbian languages", alpha_2: None, alpha_3: "wen", bibliographic: None, terminology: "wen" },
            Self::WLN => &LanguageUnit { name: "Walloon", alpha_2: Some("wa"), alpha_3: "wln", bibliographic: None, terminology: "wln" },
            Self::WOL => &LanguageUnit { name: "Wolof", alpha_2: Some("wo"), alpha_3: "wol", bibliographic: None, terminology: "wol" },
            Self::XAL => &LanguageUnit { name: "Kalmyk; Oirat", alpha_2: None, alpha_3: "xal", bibliographic: None, terminology: "xal" },
            Self::XHO => &LanguageUnit { name: "Xhosa", alpha_2: Some("xh"), alpha_3: "xho", bibliographic: None, terminology: "xho" },
            Self::YAO => &LanguageUnit { name: "Yao", alpha_2: None, alpha_3: "yao", bibliographic: None, terminology: "yao" },
            Self::YAP => &LanguageUnit { name: "Yapese", alpha_2: None, alpha_3: "yap", bibliographic: None, terminology: "yap" },
            Self::YID => &LanguageUnit { name: "Yiddish", alpha_2: Some("yi"), alpha_3: "yid", bibliographic: None, terminology: "yid" },
            Self::YOR => &LanguageUnit { name: "Yoruba", alpha_2: Some("yo"), alpha_3: "yor", bibliographic: None, terminology: "yor" },
            Self::YPK => &LanguageUnit { name: "Yupik languages", alpha_2: None, alpha_3: "ypk", bibliographic: None, terminology: "ypk" },
            Self::ZAP => &LanguageUnit { name: "Zapotec", alpha_2: None, alpha_3: "zap", bibliographic: None, terminology: "zap" },
            Self::ZBL => &LanguageUnit { name: "Blissymbols; Blissymbolics; Bliss", alpha_2: None, alpha_3: "zbl", bibliographic: None, terminology: "zbl" },
            Self::ZEN => &LanguageUnit { name: "Zenaga", alpha_2: None, alpha_3: "zen", bibliographic: None, terminology: "zen" },
            Self::ZGH => &LanguageUnit { name: "Standard Moroccan Tamazight", alpha_2: None, alpha_3: "zgh", bibliographic: None, terminology: "zgh" },
            Self::ZHA => &LanguageUnit { name: "Zhuang; Chuang", alpha_2: Some("za"), alpha_3: "zha", bibliographic: None, terminology: "zha" },
            Self::ZND => &LanguageUnit { name: "Zande languages", alpha_2: None, alpha_3: "znd", bibliographic: None, terminology: "znd" },
            Self::ZUL => &LanguageUnit { name: "Zulu", alpha_2: Some("zu"), alpha_3: "zul", bibliographic: None, terminology: "zul" },
            Self::ZUN => &LanguageUnit { name: "Zuni", alpha_2: None, alpha_3: "zun", bibliographic: None, terminology: "zun" },
            Self::ZXX => &LanguageUnit { name: "No linguistic content; Not applicable", alpha_2: None, alpha_3: "zxx", bibliographic: None, terminology: "zxx" },
            Self::ZZA => &LanguageUnit { name: "Zaza; Dimili; Dimli; Kirdki; Kirmanjki; Zazaki", alpha_2: None, alpha_3: "zza", bibliographic: None, terminology: "zza" },
        }
    }

    /// Official language name.
    pub fn name(self) -> &'static str {
        self.unit().name
    }

    pub fn alpha_2(self) -> Option<&'static str> {
        self.unit().alpha_2
    }

    pub fn alpha_3(self) -> &'static str {
        self.unit().alpha_3
    }

    pub fn bibliographic(self) -> Option<&'static str> {
        self.unit().bibliographic
    }

    pub fn terminology(self) -> &'static str {
        self.unit().terminology
    }

    /// Finds the entry whose alpha-3 or alpha-2 code equals `value`.
    pub fn find(value: &str) -> Result<Self, UnitNotFoundError> {
        Self::iter()
            .find(|language| {
                let unit = language.unit();
                value == unit.alpha_3 || unit.alpha_2 == Some(value)
            })
            .ok_or_else(|| UnitNotFoundError::new(value, "Language"))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha_3())
    }
}
