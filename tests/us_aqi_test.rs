use aqimap::schemes::us;
use pretty_assertions::assert_eq;

#[test]
fn ozone_8h_reference_value() {
    let sub = us::o3_8h(0.07853333).unwrap();
    assert_eq!(sub.value, 126);
    assert!(sub
        .general
        .starts_with("Increasing likelihood of respiratory symptoms"));
    assert!(sub.sensitive.starts_with("People with lung disease"));
}

#[test]
fn aggregate_takes_the_maximum_sub_index() {
    let summary = us::aqi(&us::Readings {
        o3_8h: Some(0.07853333),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(126));
    assert_eq!(summary.level, Some("unhealthy for sensitive groups"));
    assert_eq!(summary.pollutants["o3_8h"].value, 126);
    assert_eq!(summary.pollutants["co_8h"].value, 56);
    assert_eq!(summary.pollutants.len(), 2);
}

#[test]
fn no_readings_reports_not_available() {
    let summary = us::aqi(&us::Readings::default());
    assert_eq!(summary.value, None);
    assert_eq!(summary.level, None);
    assert!(summary.pollutants.is_empty());
}

#[test]
fn zero_is_a_reading_not_an_absence() {
    let summary = us::aqi(&us::Readings {
        pm10_24h: Some(0.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(0));
    assert_eq!(summary.level, Some("good"));
    assert_eq!(summary.pollutants["pm10_24h"].value, 0);
}

#[test]
fn non_finite_reading_is_skipped_without_blocking_others() {
    let summary = us::aqi(&us::Readings {
        o3_8h: Some(f64::NAN),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(56));
    assert!(!summary.pollutants.contains_key("o3_8h"));
}

#[test]
fn one_hour_so2_caps_at_200() {
    assert_eq!(us::so2_1h(1.0).unwrap().value, 200);
    // the 24-hour window keeps the full scale
    assert_eq!(us::so2_24h(1.0).unwrap().value, 498);
    assert_eq!(us::so2_24h(1.1).unwrap().value, 500);
}

#[test]
fn eight_hour_ozone_caps_at_300() {
    assert_eq!(us::o3_8h(0.5).unwrap().value, 300);
}

#[test]
fn one_hour_ozone_floors_below_its_first_band() {
    assert_eq!(us::o3_1h(0.05).unwrap().value, 0);
    assert_eq!(us::o3_1h(0.05).unwrap().general, "");
}

#[test]
fn summary_serializes_with_pollutant_map() {
    let summary = us::aqi(&us::Readings {
        o3_8h: Some(0.07853333),
        ..Default::default()
    });
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["value"], 126);
    assert_eq!(json["level"], "unhealthy for sensitive groups");
    assert_eq!(json["pollutants"]["o3_8h"]["value"], 126);
}
