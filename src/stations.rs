/// Geomagnetic observatory registry.
///
/// The canonical catalog of observatories this service reports on, with their
/// network affiliation, coordinates, and curated baseline field values used
/// by the fallback generator. Station codes live only here; anything that
/// needs one takes it from this registry.
///
/// Sources:
///   - Station codes and coordinates: IAGA observatory lists published by the
///     participating networks (INTERMAGNET, CARISMA, SuperMAG, USGS).
///   - Baseline field values: long-term observatory means, used only as
///     fallback reference points.

// ---------------------------------------------------------------------------
// Network metadata
// ---------------------------------------------------------------------------

/// A participating magnetometer network.
pub struct Network {
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    /// Approximate station count operated by the network worldwide.
    pub station_count: u32,
}

pub static NETWORKS: &[Network] = &[
    Network {
        name: "INTERMAGNET",
        description: "International Real-time Magnetic Observatory Network",
        website: "https://intermagnet.org",
        station_count: 150,
    },
    Network {
        name: "CARISMA",
        description: "Canadian Array for Realtime Investigations of Magnetic Activity",
        website: "https://carisma.ca",
        station_count: 27,
    },
    Network {
        name: "SuperMAG",
        description: "Worldwide collaboration of magnetometers",
        website: "https://supermag.jhuapl.edu",
        station_count: 500,
    },
    Network {
        name: "USGS",
        description: "United States Geological Survey Geomagnetism Program",
        website: "https://www.usgs.gov/programs/geomagnetism",
        station_count: 14,
    },
];

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata and curated baselines for a single observatory.
///
/// `field_strength_nt` is total intensity. The catalog numbers are on the
/// microtesla scale (20-70) but keep the display layer's "nT" label so they
/// flow unconverted into `StationRecord::field_strength_nt`.
/// `declination_deg` and `inclination_deg` are the long-term mean field
/// angles; inclination is negative for southern-hemisphere stations by the
/// usual sign convention.
pub struct Station {
    /// IAGA three-letter observatory code.
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    /// Operating institution / network affiliation.
    pub network: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    pub field_strength_nt: f64,
    pub declination_deg: f64,
    pub inclination_deg: f64,
}

/// All observatories reported by this service, grouped roughly by continent.
#[rustfmt::skip]
pub static STATION_REGISTRY: &[Station] = &[
    // North America
    Station { code: "BOU", name: "Boulder", country: "Estados Unidos", network: "USGS/INTERMAGNET", latitude: 40.137, longitude: -105.238, field_strength_nt: 54.2, declination_deg: 8.2, inclination_deg: 66.7 },
    Station { code: "HON", name: "Honolulu", country: "Estados Unidos", network: "USGS/INTERMAGNET", latitude: 21.316, longitude: -158.099, field_strength_nt: 21.3, declination_deg: 10.5, inclination_deg: 21.8 },
    Station { code: "SIT", name: "Sitka", country: "Estados Unidos", network: "USGS/INTERMAGNET", latitude: 57.058, longitude: -135.336, field_strength_nt: 56.8, declination_deg: 18.1, inclination_deg: 71.2 },
    Station { code: "FRN", name: "Fresno", country: "Estados Unidos", network: "USGS/INTERMAGNET", latitude: 37.091, longitude: -119.719, field_strength_nt: 48.9, declination_deg: 12.8, inclination_deg: 61.5 },
    Station { code: "SJG", name: "San Juan", country: "Estados Unidos", network: "USGS/INTERMAGNET", latitude: 18.381, longitude: -66.150, field_strength_nt: 29.5, declination_deg: -13.2, inclination_deg: 45.8 },
    Station { code: "OTT", name: "Ottawa", country: "Canadá", network: "GSC/INTERMAGNET", latitude: 45.403, longitude: -75.552, field_strength_nt: 58.1, declination_deg: -11.8, inclination_deg: 75.4 },
    Station { code: "VIC", name: "Victoria", country: "Canadá", network: "GSC/INTERMAGNET", latitude: 48.520, longitude: -123.416, field_strength_nt: 55.7, declination_deg: 19.5, inclination_deg: 72.6 },
    Station { code: "YKC", name: "Yellowknife", country: "Canadá", network: "GSC/CARISMA", latitude: 62.480, longitude: -114.482, field_strength_nt: 59.2, declination_deg: 13.8, inclination_deg: 83.1 },
    Station { code: "ALE", name: "Alert", country: "Canadá", network: "GSC/INTERMAGNET", latitude: 82.500, longitude: -62.333, field_strength_nt: 61.8, declination_deg: -71.2, inclination_deg: 87.5 },
    Station { code: "RES", name: "Resolute Bay", country: "Canadá", network: "GSC/INTERMAGNET", latitude: 74.690, longitude: -94.904, field_strength_nt: 58.9, declination_deg: -36.4, inclination_deg: 86.2 },
    Station { code: "TEO", name: "Teoloyucan", country: "México", network: "UNAM/INTERMAGNET", latitude: 19.747, longitude: -99.187, field_strength_nt: 49.1, declination_deg: 6.7, inclination_deg: 49.2 },
    // South America
    Station { code: "VSS", name: "Vassouras", country: "Brasil", network: "ON/INTERMAGNET", latitude: -22.402, longitude: -43.652, field_strength_nt: 23.1, declination_deg: -21.2, inclination_deg: -15.6 },
    Station { code: "TTB", name: "Tatuoca", country: "Brasil", network: "ON/INTERMAGNET", latitude: -1.205, longitude: -48.508, field_strength_nt: 25.8, declination_deg: -18.8, inclination_deg: 7.2 },
    Station { code: "PIL", name: "Pilar", country: "Argentina", network: "SEGEMAR/INTERMAGNET", latitude: -31.669, longitude: -63.888, field_strength_nt: 25.5, declination_deg: -8.4, inclination_deg: -35.8 },
    Station { code: "USH", name: "Ushuaia", country: "Argentina", network: "SEGEMAR/INTERMAGNET", latitude: -54.848, longitude: -68.317, field_strength_nt: 48.5, declination_deg: 8.2, inclination_deg: -55.2 },
    Station { code: "IPM", name: "Easter Island", country: "Chile", network: "SHOA/INTERMAGNET", latitude: -27.125, longitude: -109.439, field_strength_nt: 34.2, declination_deg: 7.8, inclination_deg: -38.1 },
    // Europe
    Station { code: "HAD", name: "Hartland", country: "Reino Unido", network: "BGS/INTERMAGNET", latitude: 51.000, longitude: -4.482, field_strength_nt: 48.9, declination_deg: -1.2, inclination_deg: 66.9 },
    Station { code: "LER", name: "Lerwick", country: "Reino Unido", network: "BGS/INTERMAGNET", latitude: 60.133, longitude: -1.183, field_strength_nt: 50.1, declination_deg: -2.8, inclination_deg: 77.2 },
    Station { code: "ESK", name: "Eskdalemuir", country: "Reino Unido", network: "BGS/INTERMAGNET", latitude: 55.317, longitude: -3.206, field_strength_nt: 49.2, declination_deg: -2.1, inclination_deg: 71.8 },
    Station { code: "CLF", name: "Chambon-la-Forêt", country: "França", network: "IPGP/INTERMAGNET", latitude: 48.025, longitude: 2.265, field_strength_nt: 47.8, declination_deg: 0.8, inclination_deg: 64.2 },
    Station { code: "PAF", name: "Port-aux-Français", country: "França", network: "IPGP/INTERMAGNET", latitude: -49.353, longitude: 70.261, field_strength_nt: 48.1, declination_deg: -25.8, inclination_deg: -62.1 },
    Station { code: "NGK", name: "Niemegk", country: "Alemanha", network: "GFZ/INTERMAGNET", latitude: 52.072, longitude: 12.675, field_strength_nt: 48.1, declination_deg: 1.2, inclination_deg: 64.2 },
    Station { code: "FUR", name: "Fürstenfeldbruck", country: "Alemanha", network: "LMU/INTERMAGNET", latitude: 48.165, longitude: 11.276, field_strength_nt: 47.9, declination_deg: 1.8, inclination_deg: 63.8 },
    Station { code: "TRO", name: "Tromsø", country: "Noruega", network: "NGI/INTERMAGNET", latitude: 69.663, longitude: 18.940, field_strength_nt: 51.2, declination_deg: 2.8, inclination_deg: 78.2 },
    Station { code: "DOB", name: "Dombås", country: "Noruega", network: "NGI/INTERMAGNET", latitude: 62.073, longitude: 9.106, field_strength_nt: 50.8, declination_deg: 0.5, inclination_deg: 72.5 },
    Station { code: "ABK", name: "Abisko", country: "Suécia", network: "IRF/SuperMAG", latitude: 68.358, longitude: 18.823, field_strength_nt: 51.8, declination_deg: 5.2, inclination_deg: 77.2 },
    Station { code: "SOD", name: "Sodankylä", country: "Finlândia", network: "FMI/INTERMAGNET", latitude: 67.368, longitude: 26.633, field_strength_nt: 51.5, declination_deg: 8.2, inclination_deg: 73.5 },
    Station { code: "NUR", name: "Nurmijärvi", country: "Finlândia", network: "FMI/INTERMAGNET", latitude: 60.508, longitude: 24.655, field_strength_nt: 50.2, declination_deg: 8.8, inclination_deg: 72.8 },
    Station { code: "BFE", name: "Brorfelde", country: "Dinamarca", network: "DTU/INTERMAGNET", latitude: 55.625, longitude: 11.673, field_strength_nt: 49.1, declination_deg: 0.2, inclination_deg: 70.1 },
    Station { code: "SPT", name: "San Pablo", country: "Espanha", network: "IGN/INTERMAGNET", latitude: 39.555, longitude: -4.349, field_strength_nt: 43.2, declination_deg: -1.2, inclination_deg: 58.2 },
    Station { code: "COI", name: "Coimbra", country: "Portugal", network: "IPMA/INTERMAGNET", latitude: 40.222, longitude: -8.419, field_strength_nt: 42.1, declination_deg: -2.8, inclination_deg: 56.8 },
    Station { code: "AQU", name: "L'Aquila", country: "Itália", network: "INGV/INTERMAGNET", latitude: 42.383, longitude: 13.317, field_strength_nt: 45.8, declination_deg: 2.2, inclination_deg: 59.2 },
    Station { code: "SPG", name: "Saint Petersburg", country: "Rússia", network: "IZMIRAN/INTERMAGNET", latitude: 60.000, longitude: 29.700, field_strength_nt: 50.1, declination_deg: 9.8, inclination_deg: 73.2 },
    Station { code: "NVS", name: "Novosibirsk", country: "Rússia", network: "IZMIRAN/INTERMAGNET", latitude: 54.850, longitude: 83.235, field_strength_nt: 56.8, declination_deg: 1.2, inclination_deg: 72.8 },
    Station { code: "MGD", name: "Magadan", country: "Rússia", network: "IZMIRAN/INTERMAGNET", latitude: 60.120, longitude: 150.720, field_strength_nt: 55.2, declination_deg: -8.2, inclination_deg: 72.1 },
    // Asia
    Station { code: "KAK", name: "Kakioka", country: "Japão", network: "JMA/INTERMAGNET", latitude: 36.232, longitude: 140.186, field_strength_nt: 46.8, declination_deg: -7.2, inclination_deg: 49.1 },
    Station { code: "KNY", name: "Kanoya", country: "Japão", network: "JMA/INTERMAGNET", latitude: 31.424, longitude: 130.880, field_strength_nt: 45.2, declination_deg: -6.8, inclination_deg: 45.2 },
    Station { code: "MMB", name: "Memambetsu", country: "Japão", network: "JMA/INTERMAGNET", latitude: 43.910, longitude: 144.189, field_strength_nt: 50.1, declination_deg: -8.8, inclination_deg: 61.2 },
    Station { code: "BMT", name: "Beijing", country: "China", network: "CEA/INTERMAGNET", latitude: 40.300, longitude: 116.200, field_strength_nt: 52.8, declination_deg: -5.2, inclination_deg: 58.8 },
    Station { code: "CNH", name: "Changchun", country: "China", network: "CEA/INTERMAGNET", latitude: 43.930, longitude: 125.337, field_strength_nt: 54.2, declination_deg: -8.1, inclination_deg: 64.2 },
    Station { code: "ABG", name: "Alibag", country: "Índia", network: "IIG/INTERMAGNET", latitude: 18.638, longitude: 72.872, field_strength_nt: 42.1, declination_deg: 0.8, inclination_deg: 27.2 },
    Station { code: "HYB", name: "Hyderabad", country: "Índia", network: "NGRI/INTERMAGNET", latitude: 17.417, longitude: 78.550, field_strength_nt: 41.8, declination_deg: -0.2, inclination_deg: 19.8 },
    // Oceania
    Station { code: "CNB", name: "Canberra", country: "Austrália", network: "GA/INTERMAGNET", latitude: -35.316, longitude: 149.363, field_strength_nt: 56.8, declination_deg: 12.2, inclination_deg: -64.2 },
    Station { code: "GNA", name: "Gnangara", country: "Austrália", network: "GA/INTERMAGNET", latitude: -31.780, longitude: 115.950, field_strength_nt: 55.1, declination_deg: 1.8, inclination_deg: -57.8 },
    Station { code: "MCQ", name: "Macquarie Island", country: "Austrália", network: "GA/INTERMAGNET", latitude: -54.500, longitude: 158.950, field_strength_nt: 65.2, declination_deg: 21.8, inclination_deg: -76.2 },
    Station { code: "EYR", name: "Eyrewell", country: "Nova Zelândia", network: "GNS/INTERMAGNET", latitude: -43.416, longitude: 172.352, field_strength_nt: 55.8, declination_deg: 23.2, inclination_deg: -68.1 },
    // Africa
    Station { code: "HER", name: "Hermanus", country: "África do Sul", network: "SANSA/INTERMAGNET", latitude: -34.425, longitude: 19.225, field_strength_nt: 26.2, declination_deg: -26.8, inclination_deg: -59.8 },
    Station { code: "HBK", name: "Hartebeesthoek", country: "África do Sul", network: "SANSA/INTERMAGNET", latitude: -25.883, longitude: 27.707, field_strength_nt: 28.1, declination_deg: -21.2, inclination_deg: -51.2 },
    Station { code: "TAN", name: "Antananarivo", country: "Madagascar", network: "IOGA/INTERMAGNET", latitude: -18.917, longitude: 47.550, field_strength_nt: 34.2, declination_deg: -8.2, inclination_deg: -42.8 },
    // Antarctica
    Station { code: "MAW", name: "Mawson", country: "Antártida", network: "GA/INTERMAGNET", latitude: -67.604, longitude: 62.871, field_strength_nt: 65.8, declination_deg: -36.2, inclination_deg: -82.1 },
    Station { code: "ROT", name: "Rothera", country: "Antártida", network: "BAS/INTERMAGNET", latitude: -67.570, longitude: -68.130, field_strength_nt: 52.1, declination_deg: 18.8, inclination_deg: -68.2 },
    Station { code: "VOS", name: "Vostok", country: "Antártida", network: "AARI/INTERMAGNET", latitude: -78.464, longitude: 106.840, field_strength_nt: 66.2, declination_deg: -52.8, inclination_deg: -85.2 },
    // Ocean islands
    Station { code: "LRV", name: "Leirvogur", country: "Islândia", network: "IMO/INTERMAGNET", latitude: 64.183, longitude: -21.300, field_strength_nt: 52.1, declination_deg: -18.2, inclination_deg: 77.8 },
];

/// Returns the codes of all cataloged stations.
pub fn all_station_codes() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.code).collect()
}

/// Looks up a station by IAGA code. Returns `None` if not cataloged.
pub fn find_station(code: &str) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.code == code)
}

/// Returns stations affiliated with the given network (substring match on
/// the affiliation string, e.g. "CARISMA" matches "GSC/CARISMA").
pub fn stations_in_network(network: &str) -> Vec<&'static Station> {
    STATION_REGISTRY
        .iter()
        .filter(|s| s.network.to_lowercase().contains(&network.to_lowercase()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_station_codes_are_valid_iaga_format() {
        // IAGA observatory codes are 3-letter uppercase ASCII. A malformed
        // code would break keyed merges downstream.
        for station in STATION_REGISTRY {
            assert_eq!(
                station.code.len(),
                3,
                "code for '{}' should be 3 letters, got '{}'",
                station.name,
                station.code
            );
            assert!(
                station.code.chars().all(|c| c.is_ascii_uppercase()),
                "code for '{}' should be uppercase ASCII, got '{}'",
                station.name,
                station.code
            );
        }
    }

    #[test]
    fn test_no_duplicate_station_codes() {
        let mut seen = std::collections::HashSet::new();
        for station in STATION_REGISTRY {
            assert!(
                seen.insert(station.code),
                "duplicate station code '{}' in STATION_REGISTRY",
                station.code
            );
        }
    }

    #[test]
    fn test_coordinates_are_in_range() {
        for station in STATION_REGISTRY {
            assert!(
                (-90.0..=90.0).contains(&station.latitude),
                "latitude out of range for '{}'",
                station.name
            );
            assert!(
                (-180.0..=180.0).contains(&station.longitude),
                "longitude out of range for '{}'",
                station.name
            );
        }
    }

    #[test]
    fn test_curated_inclination_sign_matches_hemisphere() {
        // Magnetic inclination points down (positive) north of the magnetic
        // equator and up (negative) south of it. The magnetic equator does
        // not coincide with the geographic one, so stations within 10° of
        // the geographic equator (Tatuoca) may legitimately disagree.
        for station in STATION_REGISTRY {
            if station.latitude.abs() < 10.0 {
                continue;
            }
            assert_eq!(
                station.inclination_deg.signum(),
                station.latitude.signum(),
                "inclination sign disagrees with hemisphere for '{}' ({})",
                station.name,
                station.code
            );
        }
    }

    #[test]
    fn test_registry_size_matches_expected_catalog() {
        // The catalog is fixed per run; growth is deliberate, not dynamic.
        assert_eq!(STATION_REGISTRY.len(), 52);
        assert_eq!(all_station_codes().len(), STATION_REGISTRY.len());
    }

    #[test]
    fn test_find_station_returns_correct_entry() {
        let station = find_station("BOU").expect("Boulder should be cataloged");
        assert_eq!(station.name, "Boulder");
        assert_eq!(station.network, "USGS/INTERMAGNET");
    }

    #[test]
    fn test_find_station_returns_none_for_unknown_code() {
        assert!(find_station("XXX").is_none());
    }

    #[test]
    fn test_stations_in_network_filters_by_affiliation() {
        let carisma = stations_in_network("CARISMA");
        assert_eq!(carisma.len(), 1);
        assert_eq!(carisma[0].code, "YKC");

        let usgs = stations_in_network("USGS");
        assert_eq!(usgs.len(), 5);
        assert!(usgs.iter().any(|s| s.code == "HON"));
    }

    #[test]
    fn test_network_metadata_is_complete() {
        assert_eq!(NETWORKS.len(), 4);
        for network in NETWORKS {
            assert!(!network.description.is_empty());
            assert!(network.website.starts_with("https://"));
            assert!(network.station_count > 0);
        }
    }

    #[test]
    fn test_field_strength_baselines_are_physical() {
        // Total intensity at the surface runs roughly 22–67 µT worldwide.
        for station in STATION_REGISTRY {
            assert!(
                (20.0..=70.0).contains(&station.field_strength_nt),
                "implausible baseline field strength for '{}': {}",
                station.name,
                station.field_strength_nt
            );
        }
    }
}
