use painter::{PlanetConfig, PlanetModel, ReformedTile};
use validator::ValidationErrors;

#[test]
fn test_planet_config_validation() {
    let config = PlanetConfig {
        resolution: 2,          // invalid (too small)
        latitude_band_count: 5, // invalid (too small)
        radius: 0.5,            // invalid
        reformed_tiles: vec![ReformedTile {
            latitude: 1,
            longitude: 1,
            reform_type: -12, // valid (but weird)
        }],
    };

    // This is a bit of a lazy check but it works well enough
    let err = PlanetModel::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["latitude_band_count", "radius", "resolution"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_planet_config_from_json() {
    // Missing fields fall back to the defaults
    let config: PlanetConfig = serde_json::from_str(
        r#"{
            "resolution": 40,
            "reformed_tiles": [
                {"latitude": 3, "longitude": -7, "reform_type": 2}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(config.resolution, 40);
    assert_eq!(config.latitude_band_count, 500);
    assert_eq!(config.radius, 200.0);

    // Band count reaches well past the poles of this grid, which is fine
    let planet = PlanetModel::new(config).unwrap();
    assert_eq!(planet.config().reformed_tiles.len(), 1);
}
