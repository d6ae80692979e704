// crates/atlasquiz-core/src/tables.rs

//! # Static lookup data
//!
//! Plain `(key, value)` tables consumed by [`NameResolver`](crate::NameResolver),
//! the catalog partition, and the render selector. Nothing in this module
//! branches; extending coverage means adding rows here or in an
//! `aliases.json` next to the data files.
//!
//! Display names are the German names used by the bundled region lists.

use crate::geometry::LatLon;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stage 1: misspellings and spelling variants → the display form used by the
/// region lists.
pub static SYNONYMS: &[(&str, &str)] = &[
    ("Kossovo", "Kosovo"),
    ("Kosova", "Kosovo"),
    ("Weissrussland", "Belarus"),
    ("Weißrussland", "Belarus"),
    ("Moldawien", "Moldova"),
    ("Republik Moldau", "Moldova"),
    ("Tschechische Republik", "Tschechien"),
    ("Bosnien und Herzegowina", "Bosnien-Herzegowina"),
    ("Nord-Mazedonien", "Nordmazedonien"),
    ("Mazedonien", "Nordmazedonien"),
    ("Holland", "Niederlande"),
    ("Großbritannien", "Grossbritannien"),
    ("Vatikan", "Vatikanstadt"),
    ("Luxenburg", "Luxemburg"),
    ("Lichtenstein", "Liechtenstein"),
    ("Monako", "Monaco"),
    ("Oesterreich", "Österreich"),
    ("Daenemark", "Dänemark"),
    ("Rumaenien", "Rumänien"),
    ("Tuerkei", "Türkei"),
    ("Aegypten", "Ägypten"),
    ("Aethiopien", "Äthiopien"),
    ("Suedafrika", "Südafrika"),
    ("Südkorea", "Korea"),
    ("Republik Korea", "Korea"),
    ("Burma", "Myanmar"),
    ("Birma", "Myanmar"),
    ("Persien", "Iran"),
    ("Ceylon", "Sri Lanka"),
    ("Siam", "Thailand"),
    ("Philipinen", "Philippinen"),
    ("Phillipinen", "Philippinen"),
    ("Timor-Leste", "Osttimor"),
    ("Neu Seeland", "Neuseeland"),
    ("Neuseland", "Neuseeland"),
    ("Demokratische Republik Kongo", "Kongo"),
    ("Kongo-Kinshasa", "Kongo"),
    ("Kongo-Brazzaville", "Republik Kongo"),
    ("Côte d'Ivoire", "Elfenbeinküste"),
    ("Swasiland", "Eswatini"),
    ("Columbien", "Kolumbien"),
    ("Equador", "Ecuador"),
    ("Brasillien", "Brasilien"),
    ("Vereinigte Staaten von Amerika", "USA"),
    ("U.S.A.", "USA"),
];

/// Stage 2: display name → canonical English name.
pub static DISPLAY_TO_CANONICAL: &[(&str, &str)] = &[
    // Europe
    ("Italien", "Italy"),
    ("Deutschland", "Germany"),
    ("Spanien", "Spain"),
    ("Frankreich", "France"),
    ("Portugal", "Portugal"),
    ("Belgien", "Belgium"),
    ("Niederlande", "Netherlands"),
    ("Vereinigtes Königreich", "United Kingdom"),
    ("Grossbritannien", "United Kingdom"),
    ("Irland", "Ireland"),
    ("Island", "Iceland"),
    ("Norwegen", "Norway"),
    ("Schweden", "Sweden"),
    ("Finnland", "Finland"),
    ("Dänemark", "Denmark"),
    ("Schweiz", "Switzerland"),
    ("Österreich", "Austria"),
    ("Ungarn", "Hungary"),
    ("Tschechien", "Czech Republic"),
    ("Slowakei", "Slovakia"),
    ("Polen", "Poland"),
    ("Russland (Teil)", "Russia"),
    ("Russland", "Russia"),
    ("Belarus", "Belarus"),
    ("Ukraine", "Ukraine"),
    ("Moldova", "Moldova"),
    ("Rumänien", "Romania"),
    ("Bulgarien", "Bulgaria"),
    ("Türkei (Teil)", "Turkey"),
    ("Türkei", "Turkey"),
    ("Slowenien", "Slovenia"),
    ("Kroatien", "Croatia"),
    ("Bosnien-Herzegowina", "Bosnia and Herzegovina"),
    ("Serbien", "Serbia"),
    ("Nordmazedonien", "North Macedonia"),
    ("Montenegro", "Montenegro"),
    ("Kosovo", "Kosovo"),
    ("Albanien", "Albania"),
    ("Griechenland", "Greece"),
    ("Malta", "Malta"),
    ("Andorra", "Andorra"),
    ("Monaco", "Monaco"),
    ("Liechtenstein", "Liechtenstein"),
    ("Vatikanstadt", "Vatican City"),
    ("San Marino", "San Marino"),
    ("Luxemburg", "Luxembourg"),
    ("Estland", "Estonia"),
    ("Lettland", "Latvia"),
    ("Litauen", "Lithuania"),
    ("Zypern", "Cyprus"),
    // Asia
    ("Syrien", "Syria"),
    ("Bangladesch", "Bangladesh"),
    ("Pakistan", "Pakistan"),
    ("Irak", "Iraq"),
    ("Iran", "Iran"),
    ("Afghanistan", "Afghanistan"),
    ("Korea", "South Korea"),
    ("Nordkorea", "North Korea"),
    ("China", "China"),
    ("Japan", "Japan"),
    ("Indien", "India"),
    ("Indonesien", "Indonesia"),
    ("Philippinen", "Philippines"),
    ("Vietnam", "Vietnam"),
    ("Thailand", "Thailand"),
    ("Myanmar", "Myanmar"),
    ("Kambodscha", "Cambodia"),
    ("Laos", "Laos"),
    ("Malaysia", "Malaysia"),
    ("Singapur", "Singapore"),
    ("Mongolei", "Mongolia"),
    ("Kasachstan", "Kazakhstan"),
    ("Usbekistan", "Uzbekistan"),
    ("Turkmenistan", "Turkmenistan"),
    ("Kirgisistan", "Kyrgyzstan"),
    ("Tadschikistan", "Tajikistan"),
    ("Nepal", "Nepal"),
    ("Bhutan", "Bhutan"),
    ("Sri Lanka", "Sri Lanka"),
    ("Saudi-Arabien", "Saudi Arabia"),
    ("Jemen", "Yemen"),
    ("Oman", "Oman"),
    ("Vereinigte Arabische Emirate", "United Arab Emirates"),
    ("Katar", "Qatar"),
    ("Kuwait", "Kuwait"),
    ("Bahrain", "Bahrain"),
    ("Jordanien", "Jordan"),
    ("Israel", "Israel"),
    ("Libanon", "Lebanon"),
    ("Georgien", "Georgia"),
    ("Armenien", "Armenia"),
    ("Aserbaidschan", "Azerbaijan"),
    ("Taiwan", "Taiwan"),
    ("Brunei", "Brunei"),
    ("Osttimor", "East Timor"),
    // Oceania
    ("Australien", "Australia"),
    ("Neuseeland", "New Zealand"),
    ("Papua-Neuguinea", "Papua New Guinea"),
    ("Fidschi", "Fiji"),
    ("Salomonen", "Solomon Islands"),
    ("Vanuatu", "Vanuatu"),
    // Africa
    ("Äthiopien", "Ethiopia"),
    ("Tunesien", "Tunisia"),
    ("Madagaskar", "Madagascar"),
    ("Mali", "Mali"),
    ("Südafrika", "South Africa"),
    ("Ägypten", "Egypt"),
    ("Ghana", "Ghana"),
    ("Kongo", "Democratic Republic of the Congo"),
    ("Republik Kongo", "Republic of the Congo"),
    ("Somalia", "Somalia"),
    ("Eritrea", "Eritrea"),
    ("Marokko", "Morocco"),
    ("Algerien", "Algeria"),
    ("Libyen", "Libya"),
    ("Sudan", "Sudan"),
    ("Südsudan", "South Sudan"),
    ("Tschad", "Chad"),
    ("Niger", "Niger"),
    ("Nigeria", "Nigeria"),
    ("Kamerun", "Cameroon"),
    ("Kenia", "Kenya"),
    ("Tansania", "Tanzania"),
    ("Uganda", "Uganda"),
    ("Ruanda", "Rwanda"),
    ("Burundi", "Burundi"),
    ("Angola", "Angola"),
    ("Sambia", "Zambia"),
    ("Simbabwe", "Zimbabwe"),
    ("Mosambik", "Mozambique"),
    ("Namibia", "Namibia"),
    ("Botswana", "Botswana"),
    ("Lesotho", "Lesotho"),
    ("Eswatini", "Eswatini"),
    ("Malawi", "Malawi"),
    ("Senegal", "Senegal"),
    ("Gambia", "Gambia"),
    ("Guinea", "Guinea"),
    ("Guinea-Bissau", "Guinea-Bissau"),
    ("Sierra Leone", "Sierra Leone"),
    ("Liberia", "Liberia"),
    ("Elfenbeinküste", "Ivory Coast"),
    ("Burkina Faso", "Burkina Faso"),
    ("Togo", "Togo"),
    ("Benin", "Benin"),
    ("Mauretanien", "Mauritania"),
    ("Gabun", "Gabon"),
    ("Äquatorialguinea", "Equatorial Guinea"),
    ("Zentralafrikanische Republik", "Central African Republic"),
    ("Dschibuti", "Djibouti"),
    ("Westsahara", "Western Sahara"),
    // Americas
    ("Kanada", "Canada"),
    ("USA", "United States"),
    ("Vereinigte Staaten", "United States"),
    ("Mexiko", "Mexico"),
    ("Guatemala", "Guatemala"),
    ("Belize", "Belize"),
    ("Honduras", "Honduras"),
    ("El Salvador", "El Salvador"),
    ("Nicaragua", "Nicaragua"),
    ("Costa Rica", "Costa Rica"),
    ("Panama", "Panama"),
    ("Kuba", "Cuba"),
    ("Haiti", "Haiti"),
    ("Dominikanische Republik", "Dominican Republic"),
    ("Jamaika", "Jamaica"),
    ("Bahamas", "The Bahamas"),
    ("Grönland", "Greenland"),
    ("Brasilien", "Brazil"),
    ("Kolumbien", "Colombia"),
    ("Argentinien", "Argentina"),
    ("Bolivien", "Bolivia"),
    ("Peru", "Peru"),
    ("Venezuela", "Venezuela"),
    ("Ecuador", "Ecuador"),
    ("Chile", "Chile"),
    ("Paraguay", "Paraguay"),
    ("Uruguay", "Uruguay"),
    ("Guyana", "Guyana"),
    ("Suriname", "Suriname"),
    ("Französisch-Guayana", "French Guiana"),
    ("Trinidad und Tobago", "Trinidad and Tobago"),
];

/// Canonical English name → ISO-3166 alpha-3 feature code.
///
/// Kosovo has no ISO code; `XKX` is the user-assigned code most datasets use.
pub static CANONICAL_TO_CODE: &[(&str, &str)] = &[
    // Europe
    ("Italy", "ITA"),
    ("Germany", "DEU"),
    ("Spain", "ESP"),
    ("France", "FRA"),
    ("Portugal", "PRT"),
    ("Belgium", "BEL"),
    ("Netherlands", "NLD"),
    ("United Kingdom", "GBR"),
    ("Ireland", "IRL"),
    ("Iceland", "ISL"),
    ("Norway", "NOR"),
    ("Sweden", "SWE"),
    ("Finland", "FIN"),
    ("Denmark", "DNK"),
    ("Switzerland", "CHE"),
    ("Austria", "AUT"),
    ("Hungary", "HUN"),
    ("Czech Republic", "CZE"),
    ("Slovakia", "SVK"),
    ("Poland", "POL"),
    ("Russia", "RUS"),
    ("Belarus", "BLR"),
    ("Ukraine", "UKR"),
    ("Moldova", "MDA"),
    ("Romania", "ROU"),
    ("Bulgaria", "BGR"),
    ("Turkey", "TUR"),
    ("Slovenia", "SVN"),
    ("Croatia", "HRV"),
    ("Bosnia and Herzegovina", "BIH"),
    ("Serbia", "SRB"),
    ("North Macedonia", "MKD"),
    ("Montenegro", "MNE"),
    ("Kosovo", "XKX"),
    ("Albania", "ALB"),
    ("Greece", "GRC"),
    ("Malta", "MLT"),
    ("Andorra", "AND"),
    ("Monaco", "MCO"),
    ("Liechtenstein", "LIE"),
    ("Vatican City", "VAT"),
    ("San Marino", "SMR"),
    ("Luxembourg", "LUX"),
    ("Estonia", "EST"),
    ("Latvia", "LVA"),
    ("Lithuania", "LTU"),
    ("Cyprus", "CYP"),
    // Asia
    ("Syria", "SYR"),
    ("Bangladesh", "BGD"),
    ("Pakistan", "PAK"),
    ("Iraq", "IRQ"),
    ("Iran", "IRN"),
    ("Afghanistan", "AFG"),
    ("South Korea", "KOR"),
    ("North Korea", "PRK"),
    ("China", "CHN"),
    ("Japan", "JPN"),
    ("India", "IND"),
    ("Indonesia", "IDN"),
    ("Philippines", "PHL"),
    ("Vietnam", "VNM"),
    ("Thailand", "THA"),
    ("Myanmar", "MMR"),
    ("Cambodia", "KHM"),
    ("Laos", "LAO"),
    ("Malaysia", "MYS"),
    ("Singapore", "SGP"),
    ("Mongolia", "MNG"),
    ("Kazakhstan", "KAZ"),
    ("Uzbekistan", "UZB"),
    ("Turkmenistan", "TKM"),
    ("Kyrgyzstan", "KGZ"),
    ("Tajikistan", "TJK"),
    ("Nepal", "NPL"),
    ("Bhutan", "BTN"),
    ("Sri Lanka", "LKA"),
    ("Saudi Arabia", "SAU"),
    ("Yemen", "YEM"),
    ("Oman", "OMN"),
    ("United Arab Emirates", "ARE"),
    ("Qatar", "QAT"),
    ("Kuwait", "KWT"),
    ("Bahrain", "BHR"),
    ("Jordan", "JOR"),
    ("Israel", "ISR"),
    ("Lebanon", "LBN"),
    ("Georgia", "GEO"),
    ("Armenia", "ARM"),
    ("Azerbaijan", "AZE"),
    ("Taiwan", "TWN"),
    ("Brunei", "BRN"),
    ("East Timor", "TLS"),
    // Oceania
    ("Australia", "AUS"),
    ("New Zealand", "NZL"),
    ("Papua New Guinea", "PNG"),
    ("Fiji", "FJI"),
    ("Solomon Islands", "SLB"),
    ("Vanuatu", "VUT"),
    // Africa
    ("Ethiopia", "ETH"),
    ("Tunisia", "TUN"),
    ("Madagascar", "MDG"),
    ("Mali", "MLI"),
    ("South Africa", "ZAF"),
    ("Egypt", "EGY"),
    ("Ghana", "GHA"),
    ("Democratic Republic of the Congo", "COD"),
    ("Republic of the Congo", "COG"),
    ("Somalia", "SOM"),
    ("Eritrea", "ERI"),
    ("Morocco", "MAR"),
    ("Algeria", "DZA"),
    ("Libya", "LBY"),
    ("Sudan", "SDN"),
    ("South Sudan", "SSD"),
    ("Chad", "TCD"),
    ("Niger", "NER"),
    ("Nigeria", "NGA"),
    ("Cameroon", "CMR"),
    ("Kenya", "KEN"),
    ("Tanzania", "TZA"),
    ("Uganda", "UGA"),
    ("Rwanda", "RWA"),
    ("Burundi", "BDI"),
    ("Angola", "AGO"),
    ("Zambia", "ZMB"),
    ("Zimbabwe", "ZWE"),
    ("Mozambique", "MOZ"),
    ("Namibia", "NAM"),
    ("Botswana", "BWA"),
    ("Lesotho", "LSO"),
    ("Eswatini", "SWZ"),
    ("Malawi", "MWI"),
    ("Senegal", "SEN"),
    ("Gambia", "GMB"),
    ("Guinea", "GIN"),
    ("Guinea-Bissau", "GNB"),
    ("Sierra Leone", "SLE"),
    ("Liberia", "LBR"),
    ("Ivory Coast", "CIV"),
    ("Burkina Faso", "BFA"),
    ("Togo", "TGO"),
    ("Benin", "BEN"),
    ("Mauritania", "MRT"),
    ("Gabon", "GAB"),
    ("Equatorial Guinea", "GNQ"),
    ("Central African Republic", "CAF"),
    ("Djibouti", "DJI"),
    ("Western Sahara", "ESH"),
    // Americas
    ("Canada", "CAN"),
    ("United States", "USA"),
    ("Mexico", "MEX"),
    ("Guatemala", "GTM"),
    ("Belize", "BLZ"),
    ("Honduras", "HND"),
    ("El Salvador", "SLV"),
    ("Nicaragua", "NIC"),
    ("Costa Rica", "CRI"),
    ("Panama", "PAN"),
    ("Cuba", "CUB"),
    ("Haiti", "HTI"),
    ("Dominican Republic", "DOM"),
    ("Jamaica", "JAM"),
    ("The Bahamas", "BHS"),
    ("Greenland", "GRL"),
    ("Brazil", "BRA"),
    ("Colombia", "COL"),
    ("Argentina", "ARG"),
    ("Bolivia", "BOL"),
    ("Peru", "PER"),
    ("Venezuela", "VEN"),
    ("Ecuador", "ECU"),
    ("Chile", "CHL"),
    ("Paraguay", "PRY"),
    ("Uruguay", "URY"),
    ("Guyana", "GUY"),
    ("Suriname", "SUR"),
    ("French Guiana", "GUF"),
    ("Trinidad and Tobago", "TTO"),
];

/// Display names taken out of the Asia/Oceania input and placed in Oceania.
/// Must be maintained by hand when that input grows.
pub static OCEANIA_ALLOW_LIST: &[&str] = &["Australien", "Neuseeland"];

/// European microstates drawn together as a marker cluster, keyed by
/// canonical name, with the position used when no shape is available.
pub static MICROSTATES: &[(&str, LatLon)] = &[
    ("Andorra", LatLon::new(42.5063, 1.5218)),
    ("Monaco", LatLon::new(43.7384, 7.4246)),
    ("Liechtenstein", LatLon::new(47.1410, 9.5209)),
    ("Vatican City", LatLon::new(41.9029, 12.4534)),
    ("San Marino", LatLon::new(43.9424, 12.4578)),
    ("Kosovo", LatLon::new(42.6629, 21.1655)),
    ("Malta", LatLon::new(35.8989, 14.5146)),
];

/// Countries always drawn as a point marker at a fixed position (capital),
/// regardless of region or shape.
pub static FIXED_MARKERS: &[(&str, LatLon)] = &[("Russia", LatLon::new(55.7558, 37.6173))];

/// Display names filled red in Learn mode; every other polygon is blue.
pub static HIGHLIGHTED_DISPLAY_NAMES: &[&str] = &["Italien"];

/// Hash of every table that shapes a built catalog (the three name tables and
/// the Oceania allow-list). Changes whenever a row is added or edited.
pub fn catalog_fingerprint() -> u64 {
    let mut h = DefaultHasher::new();
    SYNONYMS.hash(&mut h);
    DISPLAY_TO_CANONICAL.hash(&mut h);
    CANONICAL_TO_CODE.hash(&mut h);
    OCEANIA_ALLOW_LIST.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys<'a>(table: &'a [(&'a str, &'a str)]) -> Vec<&'a str> {
        table.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn tables_have_unique_keys() {
        for table in [SYNONYMS, DISPLAY_TO_CANONICAL, CANONICAL_TO_CODE] {
            let all = keys(table);
            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len());
        }
    }

    #[test]
    fn every_canonical_name_has_a_code() {
        let coded: HashSet<_> = keys(CANONICAL_TO_CODE).into_iter().collect();
        for (display, canonical) in DISPLAY_TO_CANONICAL {
            assert!(coded.contains(canonical), "{display} -> {canonical} has no code");
        }
    }

    #[test]
    fn synonyms_land_on_known_display_names() {
        let known: HashSet<_> = keys(DISPLAY_TO_CANONICAL).into_iter().collect();
        for (wrong, right) in SYNONYMS {
            assert!(known.contains(right), "{wrong} -> {right} is not a display name");
        }
    }

    #[test]
    fn fingerprint_is_stable_within_a_build() {
        assert_eq!(catalog_fingerprint(), catalog_fingerprint());
    }

    #[test]
    fn seven_microstates() {
        assert_eq!(MICROSTATES.len(), 7);
    }
}
