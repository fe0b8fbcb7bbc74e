// reference.rs
//
// Static reference data the catalog service accepts verbatim. Process-wide,
// immutable, needs no synchronization.

/// Category tokens as the upstream service spells them. Several are
/// misspelled at the source ("matress", "vanitory", "wardrove"); correcting
/// them here would break the API contract.
pub const CATEGORIES: [&str; 13] = [
    "sofa", "chair", "stool", "table", "desk", "kitchen", "vanitory", "matress", "mirror",
    "wardrove", "lamp", "tv table", "garden",
];

pub const WOOD_TYPES: [&str; 8] = [
    "walnut", "maple", "oak", "pine", "eucalyptus", "bamboo", "teak", "cedar",
];

pub const FINISHES: [&str; 4] = ["dark", "medium", "light", "natural"];

/// Sort orders understood by the service, passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
        }
    }

    /// What a sort picker shows for this key.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Oldest => "Oldest",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::NameDesc => "Name: Z to A",
        }
    }
}

/// Map a storefront section name to the upstream category token.
/// Unknown names fall back to their lowercased form.
pub fn display_category_token(name: &str) -> String {
    let mapped = match name {
        "Living Room" => Some("sofa"),
        "Bedroom" => Some("matress"),
        "Kitchen" => Some("kitchen"),
        "Dining" => Some("table"),
        "Office" => Some("desk"),
        "Outdoor" => Some("garden"),
        _ => None,
    };
    match mapped {
        Some(token) => token.to_string(),
        None => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_round_trip_their_wire_values() {
        for key in SortKey::ALL {
            assert!(!key.as_str().is_empty());
            assert!(!key.label().is_empty());
        }
        assert_eq!(SortKey::PriceAsc.as_str(), "price_asc");
        assert_eq!(SortKey::NameDesc.as_str(), "name_desc");
    }

    #[test]
    fn section_names_map_to_upstream_tokens() {
        assert_eq!(display_category_token("Bedroom"), "matress");
        assert_eq!(display_category_token("Outdoor"), "garden");
        assert_eq!(display_category_token("Mirror"), "mirror");
    }

    #[test]
    fn upstream_misspellings_are_preserved() {
        assert!(CATEGORIES.contains(&"matress"));
        assert!(CATEGORIES.contains(&"vanitory"));
        assert!(CATEGORIES.contains(&"wardrove"));
        assert!(CATEGORIES.contains(&"tv table"));
    }
}
