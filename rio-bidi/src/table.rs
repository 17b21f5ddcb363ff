// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Bidirectional class data.
//!
//! Generated from the Unicode 14.0.0 `Bidi_Class` property of the Basic
//! Multilingual Plane. Unassigned code points carry the
//! `DerivedBidiClass.txt` defaults and the isolate controls
//! (U+2066..U+2069) are folded into `ON`. Do not edit by hand.

use crate::class::BidiClass::{self, *};

/// Classes of the code units below [`DENSE_LIMIT`], indexed directly.
#[rustfmt::skip]
pub(crate) static DENSE: [BidiClass; DENSE_LIMIT as usize] = [
    BN, BN, BN, BN, BN, BN, BN, BN, BN, S, B, S, WS, B, BN, BN, // 0x00
    BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, B, B, B, S, // 0x10
    WS, ON, ON, ET, ET, ET, ON, ON, ON, ON, ON, ES, CS, ES, CS, CS, // 0x20
    EN, EN, EN, EN, EN, EN, EN, EN, EN, EN, CS, ON, ON, ON, ON, ON, // 0x30
    ON, L, L, L, L, L, L, L, L, L, L, L, L, L, L, L, // 0x40
    L, L, L, L, L, L, L, L, L, L, L, ON, ON, ON, ON, ON, // 0x50
    ON, L, L, L, L, L, L, L, L, L, L, L, L, L, L, L, // 0x60
    L, L, L, L, L, L, L, L, L, L, L, ON, ON, ON, ON, BN, // 0x70
    BN, BN, BN, BN, BN, B, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, // 0x80
    BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, BN, // 0x90
    CS, ON, ET, ET, ET, ET, ON, ON, ON, ON, L, ON, ON, BN, ON, ON, // 0xA0
    ET, ET, EN, EN, ON, L, ON, ON, ON, EN, L, ON, ON, ON, ON, ON, // 0xB0
];

/// First code unit served by [`RANGES`] instead of [`DENSE`].
pub(crate) const DENSE_LIMIT: u16 = 0x00C0;

/// Inclusive upper bound of each contiguous range starting at
/// [`DENSE_LIMIT`], sorted ascending. A range starts right after the
/// previous bound.
#[rustfmt::skip]
pub(crate) static RANGES: [(u16, BidiClass); 713] = [
    (0x00D6, L), (0x00D7, ON), (0x00F6, L), (0x00F7, ON), (0x02B8, L),
    (0x02BA, ON), (0x02C1, L), (0x02CF, ON), (0x02D1, L), (0x02DF, ON),
    (0x02E4, L), (0x02ED, ON), (0x02EE, L), (0x02FF, ON), (0x036F, NSM),
    (0x0373, L), (0x0375, ON), (0x037D, L), (0x037E, ON), (0x0383, L),
    (0x0385, ON), (0x0386, L), (0x0387, ON), (0x03F5, L), (0x03F6, ON),
    (0x0482, L), (0x0489, NSM), (0x0589, L), (0x058A, ON), (0x058C, L),
    (0x058E, ON), (0x058F, ET), (0x0590, R), (0x05BD, NSM), (0x05BE, R),
    (0x05BF, NSM), (0x05C0, R), (0x05C2, NSM), (0x05C3, R), (0x05C5, NSM),
    (0x05C6, R), (0x05C7, NSM), (0x05FF, R), (0x0605, AN), (0x0607, ON),
    (0x0608, AL), (0x060A, ET), (0x060B, AL), (0x060C, CS), (0x060D, AL),
    (0x060F, ON), (0x061A, NSM), (0x064A, AL), (0x065F, NSM), (0x0669, AN),
    (0x066A, ET), (0x066C, AN), (0x066F, AL), (0x0670, NSM), (0x06D5, AL),
    (0x06DC, NSM), (0x06DD, AN), (0x06DE, ON), (0x06E4, NSM), (0x06E6, AL),
    (0x06E8, NSM), (0x06E9, ON), (0x06ED, NSM), (0x06EF, AL), (0x06F9, EN),
    (0x0710, AL), (0x0711, NSM), (0x072F, AL), (0x074A, NSM), (0x07A5, AL),
    (0x07B0, NSM), (0x07BF, AL), (0x07EA, R), (0x07F3, NSM), (0x07F5, R),
    (0x07F9, ON), (0x07FC, R), (0x07FD, NSM), (0x0815, R), (0x0819, NSM),
    (0x081A, R), (0x0823, NSM), (0x0824, R), (0x0827, NSM), (0x0828, R),
    (0x082D, NSM), (0x0858, R), (0x085B, NSM), (0x085F, R), (0x088F, AL),
    (0x0891, AN), (0x0897, AL), (0x089F, NSM), (0x08C9, AL), (0x08E1, NSM),
    (0x08E2, AN), (0x0902, NSM), (0x0939, L), (0x093A, NSM), (0x093B, L),
    (0x093C, NSM), (0x0940, L), (0x0948, NSM), (0x094C, L), (0x094D, NSM),
    (0x0950, L), (0x0957, NSM), (0x0961, L), (0x0963, NSM), (0x0980, L),
    (0x0981, NSM), (0x09BB, L), (0x09BC, NSM), (0x09C0, L), (0x09C4, NSM),
    (0x09CC, L), (0x09CD, NSM), (0x09E1, L), (0x09E3, NSM), (0x09F1, L),
    (0x09F3, ET), (0x09FA, L), (0x09FB, ET), (0x09FD, L), (0x09FE, NSM),
    (0x0A00, L), (0x0A02, NSM), (0x0A3B, L), (0x0A3C, NSM), (0x0A40, L),
    (0x0A42, NSM), (0x0A46, L), (0x0A48, NSM), (0x0A4A, L), (0x0A4D, NSM),
    (0x0A50, L), (0x0A51, NSM), (0x0A6F, L), (0x0A71, NSM), (0x0A74, L),
    (0x0A75, NSM), (0x0A80, L), (0x0A82, NSM), (0x0ABB, L), (0x0ABC, NSM),
    (0x0AC0, L), (0x0AC5, NSM), (0x0AC6, L), (0x0AC8, NSM), (0x0ACC, L),
    (0x0ACD, NSM), (0x0AE1, L), (0x0AE3, NSM), (0x0AF0, L), (0x0AF1, ET),
    (0x0AF9, L), (0x0AFF, NSM), (0x0B00, L), (0x0B01, NSM), (0x0B3B, L),
    (0x0B3C, NSM), (0x0B3E, L), (0x0B3F, NSM), (0x0B40, L), (0x0B44, NSM),
    (0x0B4C, L), (0x0B4D, NSM), (0x0B54, L), (0x0B56, NSM), (0x0B61, L),
    (0x0B63, NSM), (0x0B81, L), (0x0B82, NSM), (0x0BBF, L), (0x0BC0, NSM),
    (0x0BCC, L), (0x0BCD, NSM), (0x0BF2, L), (0x0BF8, ON), (0x0BF9, ET),
    (0x0BFA, ON), (0x0BFF, L), (0x0C00, NSM), (0x0C03, L), (0x0C04, NSM),
    (0x0C3B, L), (0x0C3C, NSM), (0x0C3D, L), (0x0C40, NSM), (0x0C45, L),
    (0x0C48, NSM), (0x0C49, L), (0x0C4D, NSM), (0x0C54, L), (0x0C56, NSM),
    (0x0C61, L), (0x0C63, NSM), (0x0C77, L), (0x0C7E, ON), (0x0C80, L),
    (0x0C81, NSM), (0x0CBB, L), (0x0CBC, NSM), (0x0CCB, L), (0x0CCD, NSM),
    (0x0CE1, L), (0x0CE3, NSM), (0x0CFF, L), (0x0D01, NSM), (0x0D3A, L),
    (0x0D3C, NSM), (0x0D40, L), (0x0D44, NSM), (0x0D4C, L), (0x0D4D, NSM),
    (0x0D61, L), (0x0D63, NSM), (0x0D80, L), (0x0D81, NSM), (0x0DC9, L),
    (0x0DCA, NSM), (0x0DD1, L), (0x0DD4, NSM), (0x0DD5, L), (0x0DD6, NSM),
    (0x0E30, L), (0x0E31, NSM), (0x0E33, L), (0x0E3A, NSM), (0x0E3E, L),
    (0x0E3F, ET), (0x0E46, L), (0x0E4E, NSM), (0x0EB0, L), (0x0EB1, NSM),
    (0x0EB3, L), (0x0EBC, NSM), (0x0EC7, L), (0x0ECD, NSM), (0x0F17, L),
    (0x0F19, NSM), (0x0F34, L), (0x0F35, NSM), (0x0F36, L), (0x0F37, NSM),
    (0x0F38, L), (0x0F39, NSM), (0x0F3D, ON), (0x0F70, L), (0x0F7E, NSM),
    (0x0F7F, L), (0x0F84, NSM), (0x0F85, L), (0x0F87, NSM), (0x0F8C, L),
    (0x0F97, NSM), (0x0F98, L), (0x0FBC, NSM), (0x0FC5, L), (0x0FC6, NSM),
    (0x102C, L), (0x1030, NSM), (0x1031, L), (0x1037, NSM), (0x1038, L),
    (0x103A, NSM), (0x103C, L), (0x103E, NSM), (0x1057, L), (0x1059, NSM),
    (0x105D, L), (0x1060, NSM), (0x1070, L), (0x1074, NSM), (0x1081, L),
    (0x1082, NSM), (0x1084, L), (0x1086, NSM), (0x108C, L), (0x108D, NSM),
    (0x109C, L), (0x109D, NSM), (0x135C, L), (0x135F, NSM), (0x138F, L),
    (0x1399, ON), (0x13FF, L), (0x1400, ON), (0x167F, L), (0x1680, WS),
    (0x169A, L), (0x169C, ON), (0x1711, L), (0x1714, NSM), (0x1731, L),
    (0x1733, NSM), (0x1751, L), (0x1753, NSM), (0x1771, L), (0x1773, NSM),
    (0x17B3, L), (0x17B5, NSM), (0x17B6, L), (0x17BD, NSM), (0x17C5, L),
    (0x17C6, NSM), (0x17C8, L), (0x17D3, NSM), (0x17DA, L), (0x17DB, ET),
    (0x17DC, L), (0x17DD, NSM), (0x17EF, L), (0x17F9, ON), (0x17FF, L),
    (0x180A, ON), (0x180D, NSM), (0x180E, BN), (0x180F, NSM), (0x1884, L),
    (0x1886, NSM), (0x18A8, L), (0x18A9, NSM), (0x191F, L), (0x1922, NSM),
    (0x1926, L), (0x1928, NSM), (0x1931, L), (0x1932, NSM), (0x1938, L),
    (0x193B, NSM), (0x193F, L), (0x1940, ON), (0x1943, L), (0x1945, ON),
    (0x19DD, L), (0x19FF, ON), (0x1A16, L), (0x1A18, NSM), (0x1A1A, L),
    (0x1A1B, NSM), (0x1A55, L), (0x1A56, NSM), (0x1A57, L), (0x1A5E, NSM),
    (0x1A5F, L), (0x1A60, NSM), (0x1A61, L), (0x1A62, NSM), (0x1A64, L),
    (0x1A6C, NSM), (0x1A72, L), (0x1A7C, NSM), (0x1A7E, L), (0x1A7F, NSM),
    (0x1AAF, L), (0x1ACE, NSM), (0x1AFF, L), (0x1B03, NSM), (0x1B33, L),
    (0x1B34, NSM), (0x1B35, L), (0x1B3A, NSM), (0x1B3B, L), (0x1B3C, NSM),
    (0x1B41, L), (0x1B42, NSM), (0x1B6A, L), (0x1B73, NSM), (0x1B7F, L),
    (0x1B81, NSM), (0x1BA1, L), (0x1BA5, NSM), (0x1BA7, L), (0x1BA9, NSM),
    (0x1BAA, L), (0x1BAD, NSM), (0x1BE5, L), (0x1BE6, NSM), (0x1BE7, L),
    (0x1BE9, NSM), (0x1BEC, L), (0x1BED, NSM), (0x1BEE, L), (0x1BF1, NSM),
    (0x1C2B, L), (0x1C33, NSM), (0x1C35, L), (0x1C37, NSM), (0x1CCF, L),
    (0x1CD2, NSM), (0x1CD3, L), (0x1CE0, NSM), (0x1CE1, L), (0x1CE8, NSM),
    (0x1CEC, L), (0x1CED, NSM), (0x1CF3, L), (0x1CF4, NSM), (0x1CF7, L),
    (0x1CF9, NSM), (0x1DBF, L), (0x1DFF, NSM), (0x1FBC, L), (0x1FBD, ON),
    (0x1FBE, L), (0x1FC1, ON), (0x1FCC, L), (0x1FCF, ON), (0x1FDC, L),
    (0x1FDF, ON), (0x1FEC, L), (0x1FEF, ON), (0x1FFC, L), (0x1FFE, ON),
    (0x1FFF, L), (0x200A, WS), (0x200D, BN), (0x200E, L), (0x200F, R),
    (0x2027, ON), (0x2028, WS), (0x2029, B), (0x202A, LRE), (0x202B, RLE),
    (0x202C, PDF), (0x202D, LRO), (0x202E, RLO), (0x202F, CS), (0x2034, ET),
    (0x2043, ON), (0x2044, CS), (0x205E, ON), (0x205F, WS), (0x2065, BN),
    (0x2069, ON), (0x206F, BN), (0x2070, EN), (0x2073, L), (0x2079, EN),
    (0x207B, ES), (0x207E, ON), (0x207F, L), (0x2089, EN), (0x208B, ES),
    (0x208E, ON), (0x209F, L), (0x20CF, ET), (0x20F0, NSM), (0x20FF, L),
    (0x2101, ON), (0x2102, L), (0x2106, ON), (0x2107, L), (0x2109, ON),
    (0x2113, L), (0x2114, ON), (0x2115, L), (0x2118, ON), (0x211D, L),
    (0x2123, ON), (0x2124, L), (0x2125, ON), (0x2126, L), (0x2127, ON),
    (0x2128, L), (0x2129, ON), (0x212D, L), (0x212E, ET), (0x2139, L),
    (0x213B, ON), (0x213F, L), (0x2144, ON), (0x2149, L), (0x214D, ON),
    (0x214F, L), (0x215F, ON), (0x2188, L), (0x218B, ON), (0x218F, L),
    (0x2211, ON), (0x2212, ES), (0x2213, ET), (0x2335, ON), (0x237A, L),
    (0x2394, ON), (0x2395, L), (0x2426, ON), (0x243F, L), (0x244A, ON),
    (0x245F, L), (0x2487, ON), (0x249B, EN), (0x24E9, L), (0x26AB, ON),
    (0x26AC, L), (0x27FF, ON), (0x28FF, L), (0x2B73, ON), (0x2B75, L),
    (0x2B95, ON), (0x2B96, L), (0x2BFF, ON), (0x2CE4, L), (0x2CEA, ON),
    (0x2CEE, L), (0x2CF1, NSM), (0x2CF8, L), (0x2CFF, ON), (0x2D7E, L),
    (0x2D7F, NSM), (0x2DDF, L), (0x2DFF, NSM), (0x2E5D, ON), (0x2E7F, L),
    (0x2E99, ON), (0x2E9A, L), (0x2EF3, ON), (0x2EFF, L), (0x2FD5, ON),
    (0x2FEF, L), (0x2FFB, ON), (0x2FFF, L), (0x3000, WS), (0x3004, ON),
    (0x3007, L), (0x3020, ON), (0x3029, L), (0x302D, NSM), (0x302F, L),
    (0x3030, ON), (0x3035, L), (0x3037, ON), (0x303C, L), (0x303F, ON),
    (0x3098, L), (0x309A, NSM), (0x309C, ON), (0x309F, L), (0x30A0, ON),
    (0x30FA, L), (0x30FB, ON), (0x31BF, L), (0x31E3, ON), (0x321C, L),
    (0x321E, ON), (0x324F, L), (0x325F, ON), (0x327B, L), (0x327E, ON),
    (0x32B0, L), (0x32BF, ON), (0x32CB, L), (0x32CF, ON), (0x3376, L),
    (0x337A, ON), (0x33DD, L), (0x33DF, ON), (0x33FE, L), (0x33FF, ON),
    (0x4DBF, L), (0x4DFF, ON), (0xA48F, L), (0xA4C6, ON), (0xA60C, L),
    (0xA60F, ON), (0xA66E, L), (0xA672, NSM), (0xA673, ON), (0xA67D, NSM),
    (0xA67F, ON), (0xA69D, L), (0xA69F, NSM), (0xA6EF, L), (0xA6F1, NSM),
    (0xA6FF, L), (0xA721, ON), (0xA787, L), (0xA788, ON), (0xA801, L),
    (0xA802, NSM), (0xA805, L), (0xA806, NSM), (0xA80A, L), (0xA80B, NSM),
    (0xA824, L), (0xA826, NSM), (0xA827, L), (0xA82B, ON), (0xA82C, NSM),
    (0xA837, L), (0xA839, ET), (0xA873, L), (0xA877, ON), (0xA8C3, L),
    (0xA8C5, NSM), (0xA8DF, L), (0xA8F1, NSM), (0xA8FE, L), (0xA8FF, NSM),
    (0xA925, L), (0xA92D, NSM), (0xA946, L), (0xA951, NSM), (0xA97F, L),
    (0xA982, NSM), (0xA9B2, L), (0xA9B3, NSM), (0xA9B5, L), (0xA9B9, NSM),
    (0xA9BB, L), (0xA9BD, NSM), (0xA9E4, L), (0xA9E5, NSM), (0xAA28, L),
    (0xAA2E, NSM), (0xAA30, L), (0xAA32, NSM), (0xAA34, L), (0xAA36, NSM),
    (0xAA42, L), (0xAA43, NSM), (0xAA4B, L), (0xAA4C, NSM), (0xAA7B, L),
    (0xAA7C, NSM), (0xAAAF, L), (0xAAB0, NSM), (0xAAB1, L), (0xAAB4, NSM),
    (0xAAB6, L), (0xAAB8, NSM), (0xAABD, L), (0xAABF, NSM), (0xAAC0, L),
    (0xAAC1, NSM), (0xAAEB, L), (0xAAED, NSM), (0xAAF5, L), (0xAAF6, NSM),
    (0xAB69, L), (0xAB6B, ON), (0xABE4, L), (0xABE5, NSM), (0xABE7, L),
    (0xABE8, NSM), (0xABEC, L), (0xABED, NSM), (0xFB1C, L), (0xFB1D, R),
    (0xFB1E, NSM), (0xFB28, R), (0xFB29, ES), (0xFB4F, R), (0xFD3D, AL),
    (0xFD4F, ON), (0xFDCE, AL), (0xFDCF, ON), (0xFDEF, BN), (0xFDFC, AL),
    (0xFDFF, ON), (0xFE0F, NSM), (0xFE19, ON), (0xFE1F, L), (0xFE2F, NSM),
    (0xFE4F, ON), (0xFE50, CS), (0xFE51, ON), (0xFE52, CS), (0xFE53, L),
    (0xFE54, ON), (0xFE55, CS), (0xFE5E, ON), (0xFE5F, ET), (0xFE61, ON),
    (0xFE63, ES), (0xFE66, ON), (0xFE67, L), (0xFE68, ON), (0xFE6A, ET),
    (0xFE6B, ON), (0xFE6F, L), (0xFEFE, AL), (0xFEFF, BN), (0xFF00, L),
    (0xFF02, ON), (0xFF05, ET), (0xFF0A, ON), (0xFF0B, ES), (0xFF0C, CS),
    (0xFF0D, ES), (0xFF0F, CS), (0xFF19, EN), (0xFF1A, CS), (0xFF20, ON),
    (0xFF3A, L), (0xFF40, ON), (0xFF5A, L), (0xFF65, ON), (0xFFDF, L),
    (0xFFE1, ET), (0xFFE4, ON), (0xFFE6, ET), (0xFFE7, L), (0xFFEE, ON),
    (0xFFEF, L), (0xFFF8, BN), (0xFFFD, ON),
];
