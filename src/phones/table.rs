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
use strum::EnumIter;

use crate::countries::Country;

/// One calling-code entry: the owning country, the base code shared with
/// sibling territories, and the dialing prefixes that tell those siblings
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneUnit {
    pub country: Country,
    /// International calling code, without the leading '+'.
    pub calling_code: u32,
    /// Disambiguating digit prefixes, highest priority first. Empty for
    /// territories reachable by their bare calling code.
    pub prefixes: &'static [u32],
}

/// Telephone calling-code registry.
///
/// Declaration order is load-bearing: among entries sharing a base code
/// the earlier entry has the higher priority, and the resolver breaks
/// ties by this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Phone {
    BD,
    BE,
    BF,
    BG,
    BA,
    BB,
    WF,
    BL,
    BM,
    BN,
    BO,
    BH,
    BI,
    BJ,
    BT,
    JM,
    BW,
    WS,
    BQ,
    BR,
    BS,
    JE,
    BY,
    BZ,
    RU,
    RW,
    RS,
    TL,
    RE,
    TM,
    TJ,
    RO,
    TK,
    GW,
    GU,
    GT,
    GR,
    GQ,
    GP,
    JP,
    GY,
    GG,
    GF,
    GE,
    GD,
    GB,
    GA,
    SV,
    GN,
    GM,
    GL,
    GI,
    GH,
    OM,
    TN,
    JO,
    HR,
    HT,
    HU,
    HK,
    HN,
    VE,
    PR,
    PS,
    PW,
    PT,
    SJ,
    PY,
    IQ,
    PA,
    PF,
    PG,
    PE,
    PK,
    PH,
    PN,
    PL,
    PM,
    ZM,
    EH,
    EE,
    EG,
    ZA,
    EC,
    IT,
    VN,
    SB,
    ET,
    SO,
    ZW,
    SA,
    ES,
    ER,
    ME,
    MD,
    MG,
    MF,
    MA,
    MC,
    UZ,
    MM,
    ML,
    MO,
    MN,
    MH,
    MK,
    MU,
    MT,
    MW,
    MV,
    MQ,
    MP,
    MS,
    MR,
    IM,
    UG,
    TZ,
    MY,
    MX,
    IL,
    FR,
    IO,
    SH,
    FI,
    FJ,
    FK,
    FM,
    FO,
    NI,
    NL,
    NO,
    NA,
    VU,
    NC,
    NE,
    NF,
    NG,
    NZ,
    NP,
    NR,
    NU,
    CK,
    CI,
    CH,
    CO,
    CN,
    CM,
    CL,
    CC,
    CA,
    CG,
    CF,
    CD,
    CZ,
    CY,
    CX,
    CR,
    CW,
    CV,
    CU,
    SZ,
    SY,
    SX,
    KG,
    KE,
    SS,
    SR,
    KI,
    KH,
    KN,
    KM,
    ST,
    SK,
    KR,
    SI,
    KP,
    KW,
    SN,
    SM,
    SL,
    SC,
    KZ,
    KY,
    SG,
    SE,
    SD,
    DO,
    DM,
    DJ,
    DK,
    VG,
    DE,
    YE,
    DZ,
    US,
    UY,
    YT,
    UM,
    LB,
    LC,
    LA,
    TV,
    TW,
    TT,
    TR,
    LK,
    LI,
    LV,
    TO,
    LT,
    LU,
    LR,
    LS,
    TH,
    TG,
    TD,
    TC,
    LY,
    VA,
    VC,
    AE,
    AD,
    AG,
    AF,
    AI,
    VI,
    IS,
    IR,
    AM,
    AL,
    AO,
    AS,
    AR,
    AU,
    AT,
    AW,
    IN,
    AX,
    AZ,
    IE,
    ID,
    UA,
    QA,
    MZ,
}

impl Phone {
    /// The static calling-code entry attached to this territory.
    pub const fn unit(self) -> &'static PhoneUnit {
        match self {
            Self::BD => &PhoneUnit { country: Country::BD, calling_code: 880, prefixes: &[] },
            Self::BE => &PhoneUnit { country: Country::BE, calling_code: 32, prefixes: &[] },
            Self::BF => &PhoneUnit { country: Country::BF, calling_code: 226, prefixes: &[] },
            Self::BG => &PhoneUnit { country: Country::BG, calling_code: 359, prefixes: &[] },
            Self::BA => &PhoneUnit { country: Country::BA, calling_code: 387, prefixes: &[] },
            Self::BB => &PhoneUnit {
                country: Country::BB,
                calling_code: 1,
                prefixes: &[246],
            },
            Self::WF => &PhoneUnit { country: Country::WF, calling_code: 681, prefixes: &[] },
            Self::BL => &PhoneUnit { country: Country::BL, calling_code: 590, prefixes: &[] },
            Self::BM => &PhoneUnit {
                country: Country::BM,
                calling_code: 1,
                prefixes: &[441],
            },
            Self::BN => &PhoneUnit { country: Country::BN, calling_code: 673, prefixes: &[] },
            Self::BO => &PhoneUnit { country: Country::BO, calling_code: 591, prefixes: &[] },
            Self::BH => &PhoneUnit { country: Country::BH, calling_code: 973, prefixes: &[] },
            Self::BI => &PhoneUnit { country: Country::BI, calling_code: 257, prefixes: &[] },
            Self::BJ => &PhoneUnit { country: Country::BJ, calling_code: 229, prefixes: &[] },
            Self::BT => &PhoneUnit { country: Country::BT, calling_code: 975, prefixes: &[] },
            Self::JM => &PhoneUnit {
                country: Country::JM,
                calling_code: 1,
                prefixes: &[876],
            },
            Self::BW => &PhoneUnit { country: Country::BW, calling_code: 267, prefixes: &[] },
            Self::WS => &PhoneUnit { country: Country::WS, calling_code: 685, prefixes: &[] },
            Self::BQ => &PhoneUnit { country: Country::BQ, calling_code: 599, prefixes: &[] },
            Self::BR => &PhoneUnit { country: Country::BR, calling_code: 55, prefixes: &[] },
            Self::BS => &PhoneUnit {
                country: Country::BS,
                calling_code: 1,
                prefixes: &[242],
            },
            Self::JE => &PhoneUnit {
                country: Country::JE,
                calling_code: 44,
                prefixes: &[1534],
            },
            Self::BY => &PhoneUnit { country: Country::BY, calling_code: 375, prefixes: &[] },
            Self::BZ => &PhoneUnit { country: Country::BZ, calling_code: 501, prefixes: &[] },
            Self::RU => &PhoneUnit { country: Country::RU, calling_code: 7, prefixes: &[] },
            Self::RW => &PhoneUnit { country: Country::RW, calling_code: 250, prefixes: &[] },
            Self::RS => &PhoneUnit { country: Country::RS, calling_code: 381, prefixes: &[] },
            Self::TL => &PhoneUnit { country: Country::TL, calling_code: 670, prefixes: &[] },
            Self::RE => &PhoneUnit { country: Country::RE, calling_code: 262, prefixes: &[] },
            Self::TM => &PhoneUnit { country: Country::TM, calling_code: 993, prefixes: &[] },
            Self::TJ => &PhoneUnit { country: Country::TJ, calling_code: 992, prefixes: &[] },
            Self::RO => &PhoneUnit { country: Country::RO, calling_code: 40, prefixes: &[] },
            Self::TK => &PhoneUnit { country: Country::TK, calling_code: 690, prefixes: &[] },
            Self::GW => &PhoneUnit { country: Country::GW, calling_code: 245, prefixes: &[] },
            Self::GU => &PhoneUnit {
                country: Country::GU,
                calling_code: 1,
                prefixes: &[671],
            },
            Self::GT => &PhoneUnit { country: Country::GT, calling_code: 502, prefixes: &[] },
            Self::GR => &PhoneUnit { country: Country::GR, calling_code: 30, prefixes: &[] },
            Self::GQ => &PhoneUnit { country: Country::GQ, calling_code: 240, prefixes: &[] },
            Self::GP => &PhoneUnit { country: Country::GP, calling_code: 590, prefixes: &[] },
            Self::JP => &PhoneUnit { country: Country::JP, calling_code: 81, prefixes: &[] },
            Self::GY => &PhoneUnit { country: Country::GY, calling_code: 592, prefixes: &[] },
            Self::GG => &PhoneUnit {
                country: Country::GG,
                calling_code: 44,
                prefixes: &[1481],
            },
            Self::GF => &PhoneUnit { country: Country::GF, calling_code: 594, prefixes: &[] },
            Self::GE => &PhoneUnit { country: Country::GE, calling_code: 995, prefixes: &[] },
            Self::GD => &PhoneUnit {
                country: Country::GD,
                calling_code: 1,
                prefixes: &[473],
            },
            Self::GB => &PhoneUnit {
                country: Country::GB,
                calling_code: 44,
                prefixes: &[
                    1224, 1235, 1339, 1252, 1507, 1259, 1420, 1269, 1264, 1461, 1241, 1294,
                    1301, 1276, 1335, 1364, 1233, 1297, 1296, 1292, 1295, 1330, 1261, 1248,
                    1341, 1226, 1271, 1229, 1446, 1246, 1225, 1506, 1234, 1434, 1289, 1299,
                    1237, 121, 1388, 1279, 1254, 1253, 1250, 1258, 1208, 1204, 1423, 1205,
                    1202, 1451, 1344, 1274, 1376, 1356, 1277, 1278, 1262, 1308, 1273, 117,
                    1275, 1471, 1508, 1280, 1288, 1395, 1425, 1282, 1543, 1283, 1284, 1298,
                    1286, 1223, 1227, 29, 1239, 1228, 1267, 1556, 1300, 1460, 1245, 1242,
                    1244, 1243, 1249, 1285, 1255, 1200, 1437, 1530, 1236, 1206, 1492, 1260,
                    1477, 1207, 1257, 1490, 24, 1340, 1363, 1270, 1263, 1290, 1325, 1332,
                    1362, 1380, 1349, 1379, 1485, 1354, 1302, 1305, 1304, 1366, 1377, 1398,
                    1389, 1387, 1368, 1382, 1383, 1350, 1369, 1361, 191, 1453, 1347, 1342,
                    1355, 1357, 1323, 1470, 131, 1343, 1358, 1353, 1372, 1392, 1328, 1324,
                    1326, 1329, 1489, 1367, 1348, 1303, 1561, 1307, 1309, 1320, 1397, 1381,
                    1346, 1373, 1427, 1445, 1465, 141, 1458, 1456, 1457, 1452, 1408, 1405,
                    1476, 1479, 1474, 1371, 1488, 1493, 1475, 1472, 1483, 1287, 1422, 1501,
                    1429, 1428, 1424, 1433, 1440, 1450, 1497, 1444, 1435, 1436, 1431, 1439,
                    1432, 1494, 1455, 1462, 1406, 1409, 1407, 1400, 1404, 1403, 1484, 1482,
                    1480, 1466, 1464, 1499, 1463, 1467, 1473, 1505, 1535, 1542, 1573, 1539,
                    1536, 1538, 1360, 1567, 1469, 1563, 1553, 1548, 1544, 1540, 1577, 1557,
                    1575, 1438, 1547, 1565, 1337, 1528, 1549, 1570, 1555, 1524, 1564, 1578,
                    1566, 113, 116, 1525, 1568, 1522, 151, 1545, 1558, 1550, 1559, 1554,
                    1520, 1546, 1571, 1576, 20, 1503, 1509, 1502, 161, 1430, 1442, 1526,
                    1352, 1560, 1491, 1293, 1306, 28, 115, 1572, 1359, 1333, 1334, 1495,
                    1443, 1496, 1478, 23, 1454, 118, 1527, 1209, 114, 1291, 1394, 1529,
                    1268, 1375, 1569, 1384, 1386, 1562, 1449, 1322, 1487, 1327,
                ],
            },
            Self::GA => &PhoneUnit { country: Country::GA, calling_code: 241, prefixes: &[] },
            Self::SV => &PhoneUnit { country: Country::SV, calling_code: 503, prefixes: &[] },
            Self::GN => &PhoneUnit { country: Country::GN, calling_code: 224, prefixes: &[] },
            Self::GM => &PhoneUnit { country: Country::GM, calling_code: 220, prefixes: &[] },
            Self::GL => &PhoneUnit { country: Country::GL, calling_code: 299, prefixes: &[] },
            Self::GI => &PhoneUnit { country: Country::GI, calling_code: 350, prefixes: &[] },
            Self::GH => &PhoneUnit { country: Country::GH, calling_code: 233, prefixes: &[] },
            Self::OM => &PhoneUnit { country: Country::OM, calling_code: 968, prefixes: &[] },
            Self::TN => &PhoneUnit { country: Country::TN, calling_code: 216, prefixes: &[] },
            Self::JO => &PhoneUnit { country: Country::JO, calling_code: 962, prefixes: &[] },
            Self::HR => &PhoneUnit { country: Country::HR, calling_code: 385, prefixes: &[] },
            Self::HT => &PhoneUnit { country: Country::HT, calling_code: 509, prefixes: &[] },
            Self::HU => &PhoneUnit { country: Country::HU, calling_code: 36, prefixes: &[] },
            Self::HK => &PhoneUnit { country: Country::HK, calling_code: 852, prefixes: &[] },
            Self::HN => &PhoneUnit { country: Country::HN, calling_code: 504, prefixes: &[] },
            Self::VE => &PhoneUnit { country: Country::VE, calling_code: 58, prefixes: &[] },
            Self::PR => &PhoneUnit {
                country: Country::PR,
                calling_code: 1,
                prefixes: &[787, 939],
            },
            Self::PS => &PhoneUnit { country: Country::PS, calling_code: 970, prefixes: &[] },
            Self::PW => &PhoneUnit { country: Country::PW, calling_code: 680, prefixes: &[] },
            Self::PT => &PhoneUnit { country: Country::PT, calling_code: 351, prefixes: &[] },
            Self::SJ => &PhoneUnit { country: Country::SJ, calling_code: 47, prefixes: &[] },
            Self::PY => &PhoneUnit { country: Country::PY, calling_code: 595, prefixes: &[] },
            Self::IQ => &PhoneUnit { country: Country::IQ, calling_code: 964, prefixes: &[] },
            Self::PA => &PhoneUnit { country: Country::PA, calling_code: 507, prefixes: &[] },
            Self::PF => &PhoneUnit { country: Country::PF, calling_code: 689, prefixes: &[] },
            Self::PG => &PhoneUnit { country: Country::PG, calling_code: 675, prefixes: &[] },
            Self::PE => &PhoneUnit { country: Country::PE, calling_code: 51, prefixes: &[] },
            Self::PK => &PhoneUnit { country: Country::PK, calling_code: 92, prefixes: &[] },
            Self::PH => &PhoneUnit { country: Country::PH, calling_code: 63, prefixes: &[] },
            Self::PN => &PhoneUnit { country: Country::PN, calling_code: 870, prefixes: &[] },
            Self::PL => &PhoneUnit { country: Country::PL, calling_code: 48, prefixes: &[] },
            Self::PM => &PhoneUnit { country: Country::PM, calling_code: 508, prefixes: &[] },
            Self::ZM => &PhoneUnit { country: Country::ZM, calling_code: 260, prefixes: &[] },
            Self::EH => &PhoneUnit { country: Country::EH, calling_code: 212, prefixes: &[] },
            Self::EE => &PhoneUnit { country: Country::EE, calling_code: 372, prefixes: &[] },
            Self::EG => &PhoneUnit { country: Country::EG, calling_code: 20, prefixes: &[] },
            Self::ZA => &PhoneUnit { country: Country::ZA, calling_code: 27, prefixes: &[] },
            Self::EC => &PhoneUnit { country: Country::EC, calling_code: 593, prefixes: &[] },
            Self::IT => &PhoneUnit { country: Country::IT, calling_code: 39, prefixes: &[] },
            Self::VN => &PhoneUnit { country: Country::VN, calling_code: 84, prefixes: &[] },
            Self::SB => &PhoneUnit { country: Country::SB, calling_code: 677, prefixes: &[] },
            Self::ET => &PhoneUnit { country: Country::ET, calling_code: 251, prefixes: &[] },
            Self::SO => &PhoneUnit { country: Country::SO, calling_code: 252, prefixes: &[] },
            Self::ZW => &PhoneUnit { country: Country::ZW, calling_code: 263, prefixes: &[] },
            Self::SA => &PhoneUnit { country: Country::SA, calling_code: 966, prefixes: &[] },
            Self::ES => &PhoneUnit { country: Country::ES, calling_code: 34, prefixes: &[] },
            Self::ER => &PhoneUnit { country: Country::ER, calling_code: 291, prefixes: &[] },
            Self::ME => &PhoneUnit { country: Country::ME, calling_code: 382, prefixes: &[] },
            Self::MD => &PhoneUnit { country: Country::MD, calling_code: 373, prefixes: &[] },
            Self::MG => &PhoneUnit { country: Country::MG, calling_code: 261, prefixes: &[] },
            Self::MF => &PhoneUnit { country: Country::MF, calling_code: 590, prefixes: &[] },
            Self::MA => &PhoneUnit { country: Country::MA, calling_code: 212, prefixes: &[] },
            Self::MC => &PhoneUnit { country: Country::MC, calling_code: 377, prefixes: &[] },
            Self::UZ => &PhoneUnit { country: Country::UZ, calling_code: 998, prefixes: &[] },
            Self::MM => &PhoneUnit { country: Country::MM, calling_code: 95, prefixes: &[] },
            Self::ML => &PhoneUnit { country: Country::ML, calling_code: 223, prefixes: &[] },
            Self::MO => &PhoneUnit { country: Country::MO, calling_code: 853, prefixes: &[] },
            Self::MN => &PhoneUnit { country: Country::MN, calling_code: 976, prefixes: &[] },
            Self::MH => &PhoneUnit { country: Country::MH, calling_code: 692, prefixes: &[] },
            Self::MK => &PhoneUnit { country: Country::MK, calling_code: 389, prefixes: &[] },
            Self::MU => &PhoneUnit { country: Country::MU, calling_code: 230, prefixes: &[] },
            Self::MT => &PhoneUnit { country: Country::MT, calling_code: 356, prefixes: &[] },
            Self::MW => &PhoneUnit { country: Country::MW, calling_code: 265, prefixes: &[] },
            Self::MV => &PhoneUnit { country: Country::MV, calling_code: 960, prefixes: &[] },
            Self::MQ => &PhoneUnit { country: Country::MQ, calling_code: 596, prefixes: &[] },
            Self::MP => &PhoneUnit {
                country: Country::MP,
                calling_code: 1,
                prefixes: &[670],
            },
            Self::MS => &PhoneUnit {
                country: Country::MS,
                calling_code: 1,
                prefixes: &[664],
            },
            Self::MR => &PhoneUnit { country: Country::MR, calling_code: 222, prefixes: &[] },
            Self::IM => &PhoneUnit {
                country: Country::IM,
                calling_code: 44,
                prefixes: &[1624],
            },
            Self::UG => &PhoneUnit { country: Country::UG, calling_code: 256, prefixes: &[] },
            Self::TZ => &PhoneUnit { country: Country::TZ, calling_code: 255, prefixes: &[] },
            Self::MY => &PhoneUnit { country: Country::MY, calling_code: 60, prefixes: &[] },
            Self::MX => &PhoneUnit { country: Country::MX, calling_code: 52, prefixes: &[] },
            Self::IL => &PhoneUnit { country: Country::IL, calling_code: 972, prefixes: &[] },
            Self::FR => &PhoneUnit { country: Country::FR, calling_code: 33, prefixes: &[] },
            Self::IO => &PhoneUnit { country: Country::IO, calling_code: 246, prefixes: &[] },
            Self::SH => &PhoneUnit { country: Country::SH, calling_code: 290, prefixes: &[] },
            Self::FI => &PhoneUnit { country: Country::FI, calling_code: 358, prefixes: &[] },
            Self::FJ => &PhoneUnit { country: Country::FJ, calling_code: 679, prefixes: &[] },
            Self::FK => &PhoneUnit { country: Country::FK, calling_code: 500, prefixes: &[] },
            Self::FM => &PhoneUnit { country: Country::FM, calling_code: 691, prefixes: &[] },
            Self::FO => &PhoneUnit { country: Country::FO, calling_code: 298, prefixes: &[] },
            Self::NI => &PhoneUnit { country: Country::NI, calling_code: 505, prefixes: &[] },
            Self::NL => &PhoneUnit { country: Country::NL, calling_code: 31, prefixes: &[] },
            Self::NO => &PhoneUnit { country: Country::NO, calling_code: 47, prefixes: &[] },
            Self::NA => &PhoneUnit { country: Country::NA, calling_code: 264, prefixes: &[] },
            Self::VU => &PhoneUnit { country: Country::VU, calling_code: 678, prefixes: &[] },
            Self::NC => &PhoneUnit { country: Country::NC, calling_code: 687, prefixes: &[] },
            Self::NE => &PhoneUnit { country: Country::NE, calling_code: 227, prefixes: &[] },
            Self::NF => &PhoneUnit { country: Country::NF, calling_code: 672, prefixes: &[] },
            Self::NG => &PhoneUnit { country: Country::NG, calling_code: 234, prefixes: &[] },
            Self::NZ => &PhoneUnit { country: Country::NZ, calling_code: 64, prefixes: &[] },
            Self::NP => &PhoneUnit { country: Country::NP, calling_code: 977, prefixes: &[] },
            Self::NR => &PhoneUnit { country: Country::NR, calling_code: 674, prefixes: &[] },
            Self::NU => &PhoneUnit { country: Country::NU, calling_code: 683, prefixes: &[] },
            Self::CK => &PhoneUnit { country: Country::CK, calling_code: 682, prefixes: &[] },
            Self::CI => &PhoneUnit { country: Country::CI, calling_code: 225, prefixes: &[] },
            Self::CH => &PhoneUnit { country: Country::CH, calling_code: 41, prefixes: &[] },
            Self::CO => &PhoneUnit { country: Country::CO, calling_code: 57, prefixes: &[] },
            Self::CN => &PhoneUnit { country: Country::CN, calling_code: 86, prefixes: &[] },
            Self::CM => &PhoneUnit { country: Country::CM, calling_code: 237, prefixes: &[] },
            Self::CL => &PhoneUnit { country: Country::CL, calling_code: 56, prefixes: &[] },
            Self::CC => &PhoneUnit { country: Country::CC, calling_code: 61, prefixes: &[] },
            Self::CA => &PhoneUnit {
                country: Country::CA,
                calling_code: 1,
                prefixes: &[
                    587, 403, 780, 819, 902, 226, 519, 289, 905, 438, 514, 343,
                    613, 418, 581, 306, 705, 249, 600, 506, 709, 450, 579, 807,
                    647, 416, 236, 778, 604, 250, 204, 867,
                ],
            },
            Self::CG => &PhoneUnit { country: Country::CG, calling_code: 242, prefixes: &[] },
            Self::CF => &PhoneUnit { country: Country::CF, calling_code: 236, prefixes: &[] },
            Self::CD => &PhoneUnit { country: Country::CD, calling_code: 243, prefixes: &[] },
            Self::CZ => &PhoneUnit { country: Country::CZ, calling_code: 420, prefixes: &[] },
            Self::CY => &PhoneUnit { country: Country::CY, calling_code: 357, prefixes: &[] },
            Self::CX => &PhoneUnit { country: Country::CX, calling_code: 61, prefixes: &[] },
            Self::CR => &PhoneUnit { country: Country::CR, calling_code: 506, prefixes: &[] },
            Self::CW => &PhoneUnit { country: Country::CW, calling_code: 599, prefixes: &[] },
            Self::CV => &PhoneUnit { country: Country::CV, calling_code: 238, prefixes: &[] },
            Self::CU => &PhoneUnit { country: Country::CU, calling_code: 53, prefixes: &[] },
            Self::SZ => &PhoneUnit { country: Country::SZ, calling_code: 268, prefixes: &[] },
            Self::SY => &PhoneUnit { country: Country::SY, calling_code: 963, prefixes: &[] },
            Self::SX => &PhoneUnit { country: Country::SX, calling_code: 599, prefixes: &[] },
            Self::KG => &PhoneUnit { country: Country::KG, calling_code: 996, prefixes: &[] },
            Self::KE => &PhoneUnit { country: Country::KE, calling_code: 254, prefixes: &[] },
            Self::SS => &PhoneUnit { country: Country::SS, calling_code: 211, prefixes: &[] },
            Self::SR => &PhoneUnit { country: Country::SR, calling_code: 597, prefixes: &[] },
            Self::KI => &PhoneUnit { country: Country::KI, calling_code: 686, prefixes: &[] },
            Self::KH => &PhoneUnit { country: Country::KH, calling_code: 855, prefixes: &[] },
            Self::KN => &PhoneUnit {
                country: Country::KN,
                calling_code: 1,
                prefixes: &[869],
            },
            Self::KM => &PhoneUnit { country: Country::KM, calling_code: 269, prefixes: &[] },
            Self::ST => &PhoneUnit { country: Country::ST, calling_code: 239, prefixes: &[] },
            Self::SK => &PhoneUnit { country: Country::SK, calling_code: 421, prefixes: &[] },
            Self::KR => &PhoneUnit { country: Country::KR, calling_code: 82, prefixes: &[] },
            Self::SI => &PhoneUnit { country: Country::SI, calling_code: 386, prefixes: &[] },
            Self::KP => &PhoneUnit { country: Country::KP, calling_code: 850, prefixes: &[] },
            Self::KW => &PhoneUnit { country: Country::KW, calling_code: 965, prefixes: &[] },
            Self::SN => &PhoneUnit { country: Country::SN, calling_code: 221, prefixes: &[] },
            Self::SM => &PhoneUnit { country: Country::SM, calling_code: 378, prefixes: &[] },
            Self::SL => &PhoneUnit { country: Country::SL, calling_code: 232, prefixes: &[] },
            Self::SC => &PhoneUnit { country: Country::SC, calling_code: 248, prefixes: &[] },
            Self::KZ => &PhoneUnit {
                country: Country::KZ,
                calling_code: 7,
                prefixes: &[
                    317, 329, 313, 327, 330, 717, 312, 321, 314, 324, 336, 318,
                    315, 322, 325, 328, 311, 323, 326, 310,
                ],
            },
            Self::KY => &PhoneUnit {
                country: Country::KY,
                calling_code: 1,
                prefixes: &[345],
            },
            Self::SG => &PhoneUnit { country: Country::SG, calling_code: 65, prefixes: &[] },
            Self::SE => &PhoneUnit { country: Country::SE, calling_code: 46, prefixes: &[] },
            Self::SD => &PhoneUnit { country: Country::SD, calling_code: 249, prefixes: &[] },
            Self::DO => &PhoneUnit {
                country: Country::DO,
                calling_code: 1,
                prefixes: &[809, 829],
            },
            Self::DM => &PhoneUnit {
                country: Country::DM,
                calling_code: 1,
                prefixes: &[767],
            },
            Self::DJ => &PhoneUnit { country: Country::DJ, calling_code: 253, prefixes: &[] },
            Self::DK => &PhoneUnit { country: Country::DK, calling_code: 45, prefixes: &[] },
            Self::VG => &PhoneUnit {
                country: Country::VG,
                calling_code: 1,
                prefixes: &[284],
            },
            Self::DE => &PhoneUnit { country: Country::DE, calling_code: 49, prefixes: &[] },
            Self::YE => &PhoneUnit { country: Country::YE, calling_code: 967, prefixes: &[] },
            Self::DZ => &PhoneUnit { country: Country::DZ, calling_code: 213, prefixes: &[] },
            Self::US => &PhoneUnit {
                country: Country::US,
                calling_code: 1,
                prefixes: &[
                    325, 330, 234, 518, 229, 957, 505, 320, 730, 618, 657, 909,
                    752, 714, 907, 734, 278, 703, 571, 828, 606, 404, 770, 678,
                    470, 609, 762, 706, 331, 737, 512, 667, 443, 410, 225, 425,
                    360, 240, 610, 484, 835, 406, 228, 659, 205, 952, 208, 857,
                    617, 802, 631, 203, 475, 718, 347, 979, 818, 747, 856, 239,
                    319, 447, 217, 843, 681, 304, 980, 704, 423, 872, 773, 312,
                    413, 708, 464, 283, 513, 931, 440, 216, 573, 803, 614, 380,
                    925, 361, 214, 972, 469, 764, 650, 276, 563, 937, 386, 940,
                    720, 303, 313, 679, 620, 218, 715, 534, 848, 732, 915, 908,
                    607, 814, 760, 442, 541, 458, 812, 701, 910, 810, 954, 754,
                    479, 260, 682, 817, 559, 352, 409, 219, 970, 616, 231, 920,
                    274, 336, 864, 254, 985, 959, 860, 516, 808, 832, 713, 281,
                    938, 256, 936, 317, 515, 949, 769, 601, 731, 904, 551, 201,
                    870, 913, 975, 816, 308, 262, 845, 865, 337, 765, 863, 717,
                    740, 517, 307, 956, 575, 702, 580, 859, 501, 562, 323, 310,
                    213, 502, 978, 351, 806, 434, 339, 781, 478, 608, 603, 507,
                    660, 641, 830, 901, 786, 305, 414, 612, 251, 334, 630, 615,
                    724, 504, 917, 646, 212, 973, 862, 716, 510, 341, 432, 405,
                    531, 402, 927, 689, 407, 321, 269, 364, 270, 445, 267, 215,
                    623, 602, 480, 878, 412, 763, 626, 248, 772, 971, 503, 207,
                    401, 719, 919, 984, 530, 775, 804, 951, 540, 585, 309, 815,
                    779, 252, 916, 989, 831, 801, 385, 210, 935, 858, 619, 628,
                    415, 408, 669, 805, 661, 424, 627, 369, 707, 941, 906, 912,
                    570, 206, 564, 318, 301, 227, 712, 605, 574, 509, 417, 636,
                    435, 314, 557, 651, 727, 662, 209, 315, 253, 850, 813, 419,
                    567, 785, 947, 520, 918, 430, 903, 757, 586, 202, 847, 224,
                    561, 316, 302, 774, 508, 914, 928,
                ],
            },
            Self::UY => &PhoneUnit { country: Country::UY, calling_code: 598, prefixes: &[] },
            Self::YT => &PhoneUnit { country: Country::YT, calling_code: 262, prefixes: &[] },
            Self::UM => &PhoneUnit { country: Country::UM, calling_code: 1, prefixes: &[] },
            Self::LB => &PhoneUnit { country: Country::LB, calling_code: 961, prefixes: &[] },
            Self::LC => &PhoneUnit {
                country: Country::LC,
                calling_code: 1,
                prefixes: &[758],
            },
            Self::LA => &PhoneUnit { country: Country::LA, calling_code: 856, prefixes: &[] },
            Self::TV => &PhoneUnit { country: Country::TV, calling_code: 688, prefixes: &[] },
            Self::TW => &PhoneUnit { country: Country::TW, calling_code: 886, prefixes: &[] },
            Self::TT => &PhoneUnit {
                country: Country::TT,
                calling_code: 1,
                prefixes: &[868],
            },
            Self::TR => &PhoneUnit { country: Country::TR, calling_code: 90, prefixes: &[] },
            Self::LK => &PhoneUnit { country: Country::LK, calling_code: 94, prefixes: &[] },
            Self::LI => &PhoneUnit { country: Country::LI, calling_code: 423, prefixes: &[] },
            Self::LV => &PhoneUnit { country: Country::LV, calling_code: 371, prefixes: &[] },
            Self::TO => &PhoneUnit { country: Country::TO, calling_code: 676, prefixes: &[] },
            Self::LT => &PhoneUnit { country: Country::LT, calling_code: 370, prefixes: &[] },
            Self::LU => &PhoneUnit { country: Country::LU, calling_code: 352, prefixes: &[] },
            Self::LR => &PhoneUnit { country: Country::LR, calling_code: 231, prefixes: &[] },
            Self::LS => &PhoneUnit { country: Country::LS, calling_code: 266, prefixes: &[] },
            Self::TH => &PhoneUnit { country: Country::TH, calling_code: 66, prefixes: &[] },
            Self::TG => &PhoneUnit { country: Country::TG, calling_code: 228, prefixes: &[] },
            Self::TD => &PhoneUnit { country: Country::TD, calling_code: 235, prefixes: &[] },
            Self::TC => &PhoneUnit {
                country: Country::TC,
                calling_code: 1,
                prefixes: &[649],
            },
            Self::LY => &PhoneUnit { country: Country::LY, calling_code: 218, prefixes: &[] },
            Self::VA => &PhoneUnit { country: Country::VA, calling_code: 379, prefixes: &[] },
            Self::VC => &PhoneUnit {
                country: Country::VC,
                calling_code: 1,
                prefixes: &[784],
            },
            Self::AE => &PhoneUnit { country: Country::AE, calling_code: 971, prefixes: &[] },
            Self::AD => &PhoneUnit { country: Country::AD, calling_code: 376, prefixes: &[] },
            Self::AG => &PhoneUnit {
                country: Country::AG,
                calling_code: 1,
                prefixes: &[268],
            },
            Self::AF => &PhoneUnit { country: Country::AF, calling_code: 93, prefixes: &[] },
            Self::AI => &PhoneUnit {
                country: Country::AI,
                calling_code: 1,
                prefixes: &[264],
            },
            Self::VI => &PhoneUnit {
                country: Country::VI,
                calling_code: 1,
                prefixes: &[340],
            },
            Self::IS => &PhoneUnit { country: Country::IS, calling_code: 354, prefixes: &[] },
            Self::IR => &PhoneUnit { country: Country::IR, calling_code: 98, prefixes: &[] },
            Self::AM => &PhoneUnit { country: Country::AM, calling_code: 374, prefixes: &[] },
            Self::AL => &PhoneUnit { country: Country::AL, calling_code: 355, prefixes: &[] },
            Self::AO => &PhoneUnit { country: Country::AO, calling_code: 244, prefixes: &[] },
            Self::AS => &PhoneUnit {
                country: Country::AS,
                calling_code: 1,
                prefixes: &[684],
            },
            Self::AR => &PhoneUnit { country: Country::AR, calling_code: 54, prefixes: &[] },
            Self::AU => &PhoneUnit { country: Country::AU, calling_code: 61, prefixes: &[] },
            Self::AT => &PhoneUnit { country: Country::AT, calling_code: 43, prefixes: &[] },
            Self::AW => &PhoneUnit { country: Country::AW, calling_code: 297, prefixes: &[] },
            Self::IN => &PhoneUnit { country: Country::IN, calling_code: 91, prefixes: &[] },
            Self::AX => &PhoneUnit {
                country: Country::AX,
                calling_code: 358,
                prefixes: &[18],
            },
            Self::AZ => &PhoneUnit { country: Country::AZ, calling_code: 994, prefixes: &[] },
            Self::IE => &PhoneUnit { country: Country::IE, calling_code: 353, prefixes: &[] },
            Self::ID => &PhoneUnit { country: Country::ID, calling_code: 62, prefixes: &[] },
            Self::UA => &PhoneUnit { country: Country::UA, calling_code: 380, prefixes: &[] },
            Self::QA => &PhoneUnit { country: Country::QA, calling_code: 974, prefixes: &[] },
            Self::MZ => &PhoneUnit { country: Country::MZ, calling_code: 258, prefixes: &[] },
        }
    }

    pub fn country(self) -> Country {
        self.unit().country
    }

    /// The base calling code, without the leading '+'.
    pub fn calling_code(self) -> u32 {
        self.unit().calling_code
    }

    /// Disambiguating prefixes in priority order; may be empty.
    pub fn prefixes(self) -> &'static [u32] {
        self.unit().prefixes
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        f.write_str(buf.format(self.calling_code()))
    }
}
