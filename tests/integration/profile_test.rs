//! Profile decoding tests

use pretty_assertions::assert_eq;
use serde_json::json;
use social_api_model::json::Registry;
use social_api_model::shared::profile::{
    Address, EmploymentStatus, Gender, Language, LanguageSkill, Location, MessagingAccount, Phone,
    PhotoSize, PremiumService, User, WebProfile,
};

use crate::common::member;
use crate::{assert_approx_eq, assert_ok};

#[test]
fn test_member_fixture() {
    let user: User = assert_ok!(Registry::global().decode_value(&member("u1")));
    assert_eq!(user.full_name().as_deref(), Some("Max Mustermann"));
    assert_eq!(user.employment_status(), EmploymentStatus::Employee);
    assert_eq!(user.wants(), Some(&["mentoring".to_string(), "rust".to_string()][..]));
}

#[test]
fn test_unknown_enum_values() {
    let user: User = assert_ok!(Registry::global().decode_value(&json!({
        "id": "u1",
        "gender": "d",
        "employment_status": "ASTRONAUT",
    })));
    assert_eq!(user.gender(), Gender::Unknown);
    assert_eq!(user.employment_status(), EmploymentStatus::Unknown);

    let encoded = Registry::global().encode(&user);
    assert_eq!(encoded, json!({"id": "u1"}));
}

#[test]
fn test_unknown_keys_in_profile_maps() {
    let user: User = assert_ok!(Registry::global().decode_value(&json!({
        "id": "u1",
        "languages": {"de": "FLUENT", "kl": "NATIVE"},
        "web_profiles": {"qype": ["https://qype.example/u1"], "friendster": ["https://f.example"]},
        "instant_messaging_accounts": {"icq": "123456", "pager": "555"},
        "premium_services": ["PRIVATEMESSAGES", "HOVERBOARD"],
        "photo_urls": {"size_original": "https://example.com/o.jpg", "size_9000": "https://example.com/x.jpg"},
    })));
    let languages: Vec<_> = user.languages().into_iter().flatten().collect();
    assert_eq!(languages, [(&Language::German, &LanguageSkill::Fluent)]);
    let sites: Vec<_> = user.web_profiles().into_iter().flat_map(|m| m.keys()).collect();
    assert_eq!(sites, [&WebProfile::Qype]);
    let accounts: Vec<_> = user.instant_messaging_accounts().into_iter().flat_map(|m| m.keys()).collect();
    assert_eq!(accounts, [&MessagingAccount::Icq]);
    assert_eq!(user.premium_services(), Some(&[PremiumService::PrivateMessages][..]));
    let photos = user.photo_urls().unwrap_or_else(|| panic!("photo urls dropped"));
    assert_eq!(photos.url(PhotoSize::Original), Some("https://example.com/o.jpg"));

    let again: User = assert_ok!(Registry::global().decode_value(&Registry::global().encode(&user)));
    assert_eq!(again, user);
}

#[test]
fn test_time_zone_and_addresses() {
    let user: User = assert_ok!(Registry::global().decode_value(&json!({
        "id": "u1",
        "time_zone": {"name": "America/St_Johns", "utc_offset": -2.5},
        "private_address": {
            "city": "Hamburg",
            "phone": "49|40|1234567",
            "mobile_phone": "4940",
        },
        "business_address": null,
    })));
    let time_zone = user.time_zone().cloned().unwrap_or_else(|| panic!("time zone dropped"));
    assert_approx_eq!(time_zone.utc_offset(), -2.5, 1e-9);

    let address = user.private_address().cloned().unwrap_or_default();
    assert_eq!(address.phone(), Some(&Phone::new("49", "40", "1234567")));
    assert_eq!(address.mobile_phone(), Some(&Phone::default()));
    assert_eq!(user.business_address(), None);
}

#[test]
fn test_birth_date_with_unknown_key_is_dropped() {
    let user: User = assert_ok!(Registry::global().decode_value(&json!({
        "id": "u1",
        "birth_date": {"year": 1980, "month": 4, "day": 12, "weekday": "sat"},
    })));
    assert_eq!(user.birth_date(), None);
}

#[test]
fn test_address_round_trip() {
    let address = Address::default()
        .with_street("Dammtorstraße 30")
        .with_zip_code("20354")
        .with_city("Hamburg")
        .with_country("DE")
        .with_phone(Phone::new("49", "40", "419131"));
    let encoded = Registry::global().encode(&address);
    let decoded: Address = assert_ok!(Registry::global().decode_value(&encoded));
    assert_eq!(decoded, address);
}

#[test]
fn test_location_geo_code() {
    let location: Location = assert_ok!(Registry::global().decode_value(&json!({
        "city": "Hamburg",
        "country": "DE",
        "geo_code": {"accuracy": 8, "latitude": 53.5536, "longitude": 9.9925},
    })));
    let geo_code = location.geo_code().unwrap_or_else(|| panic!("geo code dropped"));
    assert_eq!(geo_code.accuracy(), 8);
    assert_approx_eq!(geo_code.latitude(), 53.5536, 1e-9);
}

#[test]
fn test_location_with_non_integral_accuracy_drops_geo_code() {
    let location: Location = assert_ok!(Registry::global().decode_value(&json!({
        "city": "Hamburg",
        "geo_code": {"accuracy": "8", "latitude": 53.5536, "longitude": 9.9925},
    })));
    assert_eq!(location.geo_code(), None);
    assert_eq!(location.city(), Some("Hamburg"));

    let location: Location = assert_ok!(Registry::global().decode_value(&json!({
        "geo_code": {"accuracy": 8.0, "latitude": 53.5536, "longitude": 9.9925},
    })));
    assert_eq!(location.geo_code().map(|geo| geo.accuracy()), Some(8));
}
