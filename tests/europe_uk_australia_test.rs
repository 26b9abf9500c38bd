//! Europe CAQI, UK DAQI, and Australia AQI scenarios.

use aqimap::schemes::{australia, europe, uk};
use pretty_assertions::assert_eq;

#[test]
fn europe_ozone_1h_reference_value() {
    assert_eq!(europe::o3_1h(0.07853333).unwrap().value, 65);
}

#[test]
fn europe_aggregate_takes_the_maximum() {
    let summary = europe::caqi(&europe::Readings {
        o3_1h: Some(0.07853333),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(65));
    assert_eq!(summary.level, Some("medium"));
    assert_eq!(summary.pollutants["o3_1h"].value, 65);
    assert_eq!(summary.pollutants["co_8h"].value, 32);
}

#[test]
fn europe_saturation_and_floor() {
    assert_eq!(europe::o3_1h(100.0).unwrap().value, 100);
    assert_eq!(europe::o3_1h(0.0).unwrap().value, 0);
    assert_eq!(europe::caqi(&europe::Readings::default()).value, None);
}

#[test]
fn uk_ozone_1h_reference_value() {
    let sub = uk::o3_1h(0.07853333).unwrap();
    assert_eq!(sub.value, 6);
    assert_eq!(sub.general, "Enjoy your usual outdoor activities.");
    assert!(sub
        .sensitive
        .starts_with("Adults and children with lung problems"));
}

#[test]
fn uk_aggregate_takes_the_maximum_rank() {
    let summary = uk::daqi(&uk::Readings {
        o3_1h: Some(0.07853333),
        pm25_24h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(6));
    assert_eq!(summary.level, Some("moderate"));
    assert_eq!(summary.pollutants["pm25_24h"].value, 1);
}

#[test]
fn uk_rank_saturates_at_ten() {
    assert_eq!(uk::o3_1h(10.0).unwrap().value, 10);
    assert_eq!(uk::o3_1h(100.0).unwrap().value, 10);
    let summary = uk::daqi(&uk::Readings {
        o3_1h: Some(100.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(10));
    assert_eq!(summary.level, Some("very high"));
}

#[test]
fn uk_floor_is_rank_one() {
    assert_eq!(uk::o3_1h(0.0).unwrap().value, 1);
}

#[test]
fn australia_ozone_1h_reference_value() {
    let sub = australia::o3_1h(0.07853333).unwrap();
    assert_eq!(sub.value, 70);
    assert_eq!(
        sub.general,
        "Adults are not likely to be affected when the AQI is in this range."
    );
    assert_eq!(
        sub.sensitive,
        "People unusually sensitive to air pollution should reduce or reschedule strenuous outdoor activities."
    );
}

#[test]
fn australia_aggregate_takes_the_maximum() {
    let summary = australia::aqi(&australia::Readings {
        o3_1h: Some(0.07853333),
        co_8h: Some(5.0),
        ..Default::default()
    });
    assert_eq!(summary.value, Some(70));
    assert_eq!(summary.level, Some("fair"));
    assert_eq!(summary.pollutants["co_8h"].value, 56);
}

#[test]
fn australia_saturation_and_floor() {
    assert_eq!(australia::o3_1h(100.0).unwrap().value, 201);
    assert_eq!(australia::o3_1h(0.0).unwrap().value, 0);
    assert_eq!(australia::aqi(&australia::Readings::default()).value, None);
}
