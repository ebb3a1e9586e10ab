//! Static district register and the best-effort locality match used by the
//! "use my location" flow.

/// An administrative district: numeric code plus display name. The register
/// is fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub code: &'static str,
    pub name: &'static str,
}

/// Districts of Bihar as reported by the scheme MIS.
pub const DISTRICTS: &[District] = &[
    District { code: "0501", name: "PATNA" },
    District { code: "0502", name: "ARARIA" },
    District { code: "0503", name: "ARWAL" },
    District { code: "0504", name: "AURANGABAD" },
    District { code: "0505", name: "BANKA" },
    District { code: "0506", name: "BEGUSARAI" },
    District { code: "0507", name: "BHAGALPUR" },
    District { code: "0508", name: "BHOJPUR" },
    District { code: "0509", name: "BUXAR" },
    District { code: "0510", name: "DARBHANGA" },
    District { code: "0511", name: "GAYA" },
    District { code: "0512", name: "GOPALGANJ" },
    District { code: "0513", name: "JAMUI" },
    District { code: "0514", name: "JEHANABAD" },
    District { code: "0515", name: "KAIMUR" },
    District { code: "0516", name: "KATIHAR" },
    District { code: "0517", name: "KHAGARIA" },
    District { code: "0518", name: "KISHANGANJ" },
    District { code: "0519", name: "LAKHISARAI" },
    District { code: "0520", name: "MADHEPURA" },
    District { code: "0521", name: "MADHUBANI" },
    District { code: "0522", name: "MUNGER" },
    District { code: "0523", name: "MUZAFFARPUR" },
    District { code: "0524", name: "NALANDA" },
    District { code: "0525", name: "NAWADA" },
    District { code: "0526", name: "PASHCHIM CHAMPARAN" },
    District { code: "0527", name: "PURNIA" },
    District { code: "0528", name: "PURVI CHAMPARAN" },
    District { code: "0529", name: "ROHTAS" },
    District { code: "0530", name: "SAHARSA" },
    District { code: "0531", name: "SAMASTIPUR" },
    District { code: "0532", name: "SARAN" },
    District { code: "0533", name: "SHEIKHPURA" },
    District { code: "0534", name: "SHEOHAR" },
    District { code: "0535", name: "SITAMARHI" },
    District { code: "0536", name: "SIWAN" },
    District { code: "0537", name: "SUPAUL" },
    District { code: "0538", name: "VAISHALI" },
];

/// Looks a district up by its code.
pub fn district_by_code(code: &str) -> Option<&'static District> {
    DISTRICTS.iter().find(|d| d.code == code)
}

/// Best-effort match from a reverse-geocoded locality string to a district.
///
/// Compares the first whitespace-delimited token of each district name,
/// case-insensitively, against substrings of the locality; the first match
/// wins. Multi-word names and homonyms can mismatch; callers treat the
/// result as a suggestion, not an authority.
pub fn match_locality(locality: &str) -> Option<&'static District> {
    let haystack = locality.to_uppercase();
    let found = DISTRICTS.iter().find(|d| {
        d.name
            .split_whitespace()
            .next()
            .map(|token| haystack.contains(&token.to_uppercase()))
            .unwrap_or(false)
    });

    match found {
        Some(d) => tracing::debug!(code = d.code, name = d.name, %locality, "locality matched"),
        None => tracing::debug!(%locality, "no district matched locality"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_unique_and_well_formed() {
        for d in DISTRICTS {
            assert_eq!(d.code.len(), 4, "code {} should be four digits", d.code);
            assert!(d.code.chars().all(|c| c.is_ascii_digit()));
            assert!(!d.name.is_empty());
        }
        let mut codes: Vec<_> = DISTRICTS.iter().map(|d| d.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DISTRICTS.len());
    }

    #[test]
    fn patna_division_matches_patna() {
        let district = match_locality("PATNA DIVISION").expect("should match");
        assert_eq!(district.code, "0501");
        assert_eq!(district.name, "PATNA");
    }

    #[test]
    fn match_is_case_insensitive() {
        let district = match_locality("greater patna area").expect("should match");
        assert_eq!(district.code, "0501");
    }

    #[test]
    fn unknown_locality_matches_nothing() {
        assert!(match_locality("UNKNOWNPLACE").is_none());
        assert!(match_locality("").is_none());
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(district_by_code("0511").map(|d| d.name), Some("GAYA"));
        assert!(district_by_code("9999").is_none());
    }
}
