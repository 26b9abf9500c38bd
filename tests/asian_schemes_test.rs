//! China AQI, India AQI, South Korea CAI, and Singapore PSI scenarios.

use aqimap::schemes::{china, india, singapore, south_korea};
use pretty_assertions::assert_eq;

#[test]
fn china_ozone_8h_reference_value() {
    let sub = china::o3_8h(0.07853333).unwrap();
    assert_eq!(sub.value, 97);
    assert_eq!(
        sub.general,
        "Some pollutants may slightly affect very few hypersensitive individuals."
    );
    assert_eq!(
        sub.sensitive,
        "Only very few hypersensitive people should reduce outdoor activities."
    );
}

#[test]
fn china_aggregate_takes_the_maximum() {
    let summary = china::aqi(&china::Readings {
        o3_8h: Some(0.07853333),
        co_24h: Some(2.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(97));
    assert_eq!(summary.level, Some("good"));
    assert_eq!(summary.pollutants["co_24h"].value, 60);
}

#[test]
fn china_ozone_saturates_at_the_scheme_maximum() {
    assert_eq!(china::o3_8h(100.0).unwrap().value, 300);
    assert_eq!(china::o3_1h(0.0).unwrap().value, 0);
}

#[test]
fn china_no_readings_reports_not_available() {
    assert_eq!(china::aqi(&china::Readings::default()).value, None);
}

#[test]
fn india_ozone_8h_reference_value() {
    let sub = india::o3_8h(0.07853333).unwrap();
    assert_eq!(sub.value, 223);
    // India publishes one advisory table; both slots carry it
    assert_eq!(sub.general, sub.sensitive);
    assert!(sub.general.starts_with("May cause breathing discomfort"));
}

#[test]
fn india_aggregate_takes_the_maximum() {
    let summary = india::aqi(&india::Readings {
        o3_8h: Some(0.07853333),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(223));
    assert_eq!(summary.level, Some("moderately polluted"));
    assert_eq!(summary.pollutants["co_8h"].value, 171);
}

#[test]
fn india_saturation_and_floor() {
    assert_eq!(india::o3_8h(100.0).unwrap().value, 500);
    assert_eq!(india::o3_8h(0.0).unwrap().value, 0);
}

#[test]
fn korea_ozone_1h_reference_value() {
    let sub = south_korea::o3_1h(0.07853333).unwrap();
    assert_eq!(sub.value, 90);
    assert_eq!(sub.general, sub.sensitive);
    assert!(sub
        .general
        .starts_with("A level which may have a meager impact"));
}

#[test]
fn korea_aggregate_takes_the_maximum() {
    let summary = south_korea::cai(&south_korea::Readings {
        o3_1h: Some(0.07853333),
        co_1h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(90));
    assert_eq!(summary.level, Some("moderate"));
    assert_eq!(summary.pollutants["co_1h"].value, 72);
}

#[test]
fn korea_saturation_and_floor() {
    assert_eq!(south_korea::o3_1h(100.0).unwrap().value, 500);
    assert_eq!(south_korea::o3_1h(0.0).unwrap().value, 0);
}

#[test]
fn singapore_ozone_8h_reference_value() {
    let sub = singapore::o3_8h(0.07853333).unwrap();
    assert_eq!(sub.value, 100);
    assert_eq!(sub.general, "Normal activities");
    assert_eq!(sub.sensitive, "Normal activities");
}

#[test]
fn singapore_aggregate_takes_the_maximum() {
    let summary = singapore::psi(&singapore::Readings {
        o3_8h: Some(0.07853333),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(100));
    assert_eq!(summary.level, Some("moderate"));
    assert_eq!(summary.pollutants["co_8h"].value, 57);
}

#[test]
fn singapore_small_no2_reading_does_not_divide_by_zero() {
    let summary = singapore::psi(&singapore::Readings {
        no2_1h: Some(0.0001),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(101));
    assert_eq!(summary.level, Some("unhealthy"));
}

#[test]
fn singapore_saturation_and_floor() {
    assert_eq!(singapore::o3_8h(100.0).unwrap().value, 500);
    assert_eq!(singapore::o3_8h(0.0).unwrap().value, 0);
}
