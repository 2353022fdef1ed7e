//! Statute alias table.
//!
//! Each canonical code lists the surface forms that resolve to it: the
//! abbreviation itself, ASCII spellings, short forms, and the full name.
//! Numeric law identifiers resolve only when written as `NNNN sayılı`.

/// Canonical code → surface aliases.
pub const STATUTE_ALIASES: &[(&str, &[&str])] = &[
    ("TMK", &["TMK", "TÜRK MEDENİ KANUNU", "MEDENİ KANUNU", "MEDENİ KANUN"]),
    ("TBK", &["TBK", "TÜRK BORÇLAR KANUNU", "BORÇLAR KANUNU"]),
    ("HMK", &["HMK", "HUKUK MUHAKEMELERİ KANUNU"]),
    ("HUMK", &["HUMK", "HMUK", "HUKUK USULÜ MUHAKEMELERİ KANUNU"]),
    ("TCK", &["TCK", "TÜRK CEZA KANUNU"]),
    ("CMK", &["CMK", "CEZA MUHAKEMESİ KANUNU"]),
    ("TTK", &["TTK", "TÜRK TİCARET KANUNU"]),
    ("İİK", &["İİK", "IIK", "İCRA VE İFLAS KANUNU"]),
    ("İYUK", &["İYUK", "IYUK", "İDARİ YARGILAMA USULÜ KANUNU"]),
    ("KVKK", &["KVKK", "KİŞİSEL VERİLERİN KORUNMASI KANUNU"]),
    ("KABAHATLER KANUNU", &["KABAHATLER KANUNU", "KABAHATLER"]),
    ("EHK", &["EHK", "ELEKTRONİK HABERLEŞME KANUNU"]),
    ("İŞ KANUNU", &["İŞ KANUNU", "İŞK", "ISK", "IK", "İK"]),
];

/// Law number → canonical code.
pub const STATUTE_NUMBERS: &[(&str, &str)] = &[
    ("4721", "TMK"),
    ("6098", "TBK"),
    ("6100", "HMK"),
    ("1086", "HUMK"),
    ("5237", "TCK"),
    ("5271", "CMK"),
    ("6102", "TTK"),
    ("2004", "İİK"),
    ("2577", "İYUK"),
    ("6698", "KVKK"),
    ("5326", "KABAHATLER KANUNU"),
    ("5809", "EHK"),
    ("4857", "İŞ KANUNU"),
];

/// Fold a surface form to its lookup key: uppercase, Turkish letters to
/// their ASCII base, dots removed, whitespace collapsed.
pub fn fold_key(surface: &str) -> String {
    let upper: String = surface
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(|c| match c {
            'İ' => Some('I'),
            'Ş' => Some('S'),
            'Ğ' => Some('G'),
            'Ü' => Some('U'),
            'Ö' => Some('O'),
            'Ç' => Some('C'),
            '.' | '\u{307}' => None,
            other => Some(other),
        })
        .collect();
    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Regex fragment matching `alias` with Turkish letters and their ASCII
/// look-alikes interchangeable, and any run of whitespace between words.
pub fn alias_pattern(alias: &str) -> String {
    let mut out = String::new();
    let mut in_space = false;
    for c in alias.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push_str(r"\s+");
            }
            in_space = true;
            continue;
        }
        in_space = false;
        let class = match c.to_uppercase().next().unwrap_or(c) {
            'I' | 'İ' => "[Iİıi]",
            'Ş' | 'S' => "[ŞşSs]",
            'Ğ' | 'G' => "[ĞğGg]",
            'Ü' | 'U' => "[ÜüUu]",
            'Ö' | 'O' => "[ÖöOo]",
            'Ç' | 'C' => "[ÇçCc]",
            _ => "",
        };
        if class.is_empty() {
            out.push_str(&regex::escape(&c.to_string()));
        } else {
            out.push_str(class);
        }
    }
    out
}
