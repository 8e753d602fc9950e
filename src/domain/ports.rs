//! Static registry of the ports and airports the quote form can offer.

use std::sync::OnceLock;

use super::entities::{Port, PortCapability};

/// (code, name, short localized name, English name, capability)
const PORT_TABLE: &[(&str, &str, &str, &str, PortCapability)] = &[
    ("KRPUS", "부산항", "부산", "Busan", PortCapability::Both),
    ("KRICN", "인천국제공항", "인천", "Incheon", PortCapability::Both),
    ("KRKWG", "광양항", "광양", "Gwangyang", PortCapability::Sea),
    ("KRGMP", "김포국제공항", "김포", "Gimpo", PortCapability::Air),
    ("USLAX", "로스앤젤레스항", "LA", "Los Angeles", PortCapability::Sea),
    ("USLGB", "롱비치항", "롱비치", "Long Beach", PortCapability::Sea),
    ("USJFK", "뉴욕 JFK 공항", "뉴욕", "New York JFK", PortCapability::Air),
    ("USORD", "시카고 오헤어 공항", "시카고", "Chicago O'Hare", PortCapability::Air),
    ("USSEA", "시애틀", "시애틀", "Seattle", PortCapability::Both),
    ("CNSHA", "상하이항", "상하이", "Shanghai", PortCapability::Both),
    ("CNPVG", "상하이 푸둥 공항", "푸둥", "Shanghai Pudong", PortCapability::Air),
    ("CNNGB", "닝보항", "닝보", "Ningbo", PortCapability::Sea),
    ("JPTYO", "도쿄항", "도쿄", "Tokyo", PortCapability::Both),
    ("JPNRT", "나리타 공항", "나리타", "Narita", PortCapability::Air),
    ("JPOSA", "오사카항", "오사카", "Osaka", PortCapability::Sea),
    ("SGSIN", "싱가포르항", "싱가포르", "Singapore", PortCapability::Both),
    ("VNSGN", "호찌민", "호찌민", "Ho Chi Minh City", PortCapability::Both),
    ("NLRTM", "로테르담항", "로테르담", "Rotterdam", PortCapability::Sea),
    ("NLAMS", "암스테르담 스히폴 공항", "암스테르담", "Amsterdam", PortCapability::Air),
    ("DEHAM", "함부르크항", "함부르크", "Hamburg", PortCapability::Sea),
    ("DEFRA", "프랑크푸르트 공항", "프랑크푸르트", "Frankfurt", PortCapability::Air),
];

/// All registered ports, built once on first use.
pub fn all_ports() -> &'static [Port] {
    static PORTS: OnceLock<Vec<Port>> = OnceLock::new();
    PORTS.get_or_init(|| {
        PORT_TABLE
            .iter()
            .map(|(code, name, short, english, capability)| Port {
                code: code.to_string(),
                name: name.to_string(),
                short_name_localized: short.to_string(),
                name_english: english.to_string(),
                country_code: country_prefix(code),
                capability: *capability,
            })
            .collect()
    })
}

pub fn find_port(code: &str) -> Option<&'static Port> {
    let code = code.trim();
    all_ports()
        .iter()
        .find(|port| port.code.eq_ignore_ascii_case(code))
}

/// Case-insensitive substring search over code, names and country.
///
/// An empty query yields nothing. With a filter, only ports serving that
/// mode (or both) are returned; a `Both` filter keeps only dual-mode ports.
pub fn search_ports(query: &str, mode_filter: Option<PortCapability>) -> Vec<Port> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    all_ports()
        .iter()
        .filter(|port| {
            mode_filter
                .map(|mode| port.capability == PortCapability::Both || port.capability == mode)
                .unwrap_or(true)
        })
        .filter(|port| {
            [
                port.code.as_str(),
                port.name.as_str(),
                port.short_name_localized.as_str(),
                port.name_english.as_str(),
                port.country_code.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Two-letter country prefix of a UN/LOCODE-style port code.
pub fn country_prefix(code: &str) -> String {
    code.trim()
        .chars()
        .take(2)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_codes_are_unique() {
        let mut codes: Vec<_> = all_ports().iter().map(|p| p.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all_ports().len());
    }

    #[test]
    fn prefix_is_uppercased() {
        assert_eq!(country_prefix("krpus"), "KR");
        assert_eq!(country_prefix("U"), "U");
    }
}
