//! Property-based tests for resource encoding
//!
//! Decoding an encoded resource must reproduce it exactly, and unknown enum
//! strings must never fail a decode. Messages, attachments and conversations
//! compare by ID only, so for those the encoded forms are compared instead.

use chrono::{NaiveDate, TimeZone as _, Utc};
use proptest::prelude::*;
use serde_json::json;
use social_api_model::json::{Registry, SafeEnum};
use social_api_model::shared::calendar::SafeCalendar;
use social_api_model::shared::contact::{
    ContactPaths, ContactRequest, InvitationStats, PendingContactRequest,
};
use social_api_model::shared::messaging::{Conversation, ConversationMessage, MessageAttachment};
use social_api_model::shared::profile::{
    Address, EmploymentStatus, Gender, GeoCode, Language, LanguageSkill, Location,
    MessagingAccount, Phone, PhotoSize, PhotoUrls, PremiumService, TimeZone, User, WebProfile,
};

// 1900-01-01T00:00:00Z ..= 2099-12-31T23:59:59Z
const FIRST_SECOND: i64 = -2_208_988_800;
const LAST_SECOND: i64 = 4_102_444_799;

fn calendar() -> impl Strategy<Value = SafeCalendar> {
    prop_oneof![
        Just(SafeCalendar::UNSET),
        (1900i32..=2099).prop_map(SafeCalendar::from_year),
        (1900i32..=2099, 1u32..=12)
            .prop_map(|(year, month)| SafeCalendar::from_year_month(year, month).unwrap_or_default()),
        (1900i32..=2099, 1u32..=365).prop_map(|(year, ordinal)| {
            NaiveDate::from_yo_opt(year, ordinal).map_or(SafeCalendar::UNSET, SafeCalendar::from_date)
        }),
        (FIRST_SECOND..=LAST_SECOND).prop_map(|seconds| {
            Utc.timestamp_opt(seconds, 0)
                .single()
                .map_or(SafeCalendar::UNSET, SafeCalendar::from_datetime)
        }),
    ]
}

fn known<E: SafeEnum + std::fmt::Debug>() -> impl Strategy<Value = E> {
    prop::sample::select(E::KNOWN)
}

fn known_or_unknown<E: SafeEnum + std::fmt::Debug>() -> impl Strategy<Value = E> {
    prop_oneof![1 => Just(E::UNKNOWN), 4 => known::<E>()]
}

// Quarter-hour offsets and four-decimal coordinates survive JSON exactly.
fn quarters(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = f64> {
    range.prop_map(|quarter| f64::from(quarter) / 4.0)
}

fn coordinate(limit: i32) -> impl Strategy<Value = f64> {
    (-limit * 10_000..=limit * 10_000).prop_map(|v| f64::from(v) / 10_000.0)
}

fn phone() -> impl Strategy<Value = Phone> {
    ("[0-9]{1,3}", "[0-9]{1,4}", "[0-9]{3,8}")
        .prop_map(|(country, area, number)| Phone::new(country, area, number))
}

fn address() -> impl Strategy<Value = Address> {
    (
        prop::option::of("[A-Z][a-z]{2,10}"),
        prop::option::of("[0-9]{5}"),
        prop::option::of("[a-z]{1,8}@example\\.com"),
        prop::option::of(phone()),
        prop::option::of(phone()),
    )
        .prop_map(|(city, zip_code, email, phone, mobile_phone)| {
            let mut address = Address::default();
            if let Some(city) = city {
                address = address.with_city(city);
            }
            if let Some(zip_code) = zip_code {
                address = address.with_zip_code(zip_code);
            }
            if let Some(email) = email {
                address = address.with_email(email);
            }
            if let Some(phone) = phone {
                address = address.with_phone(phone);
            }
            if let Some(mobile_phone) = mobile_phone {
                address = address.with_mobile_phone(mobile_phone);
            }
            address
        })
}

fn photo_urls() -> impl Strategy<Value = PhotoUrls> {
    let url = "https://[a-z]{3,8}\\.example/[a-z0-9]{1,8}";
    prop::collection::btree_map(prop::sample::select(PhotoSize::ALL), url, 0..5).prop_map(|urls| {
        urls.into_iter()
            .fold(PhotoUrls::new(), |photos, (size, url)| photos.with_url(size, url))
    })
}

fn birth_date() -> impl Strategy<Value = SafeCalendar> {
    (prop::option::of(1900i32..=2099), 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| {
            SafeCalendar::from_parts(year, Some(month), Some(day)).unwrap_or_default()
        })
}

fn user() -> impl Strategy<Value = User> {
    let identity = (
        "[a-z0-9_]{1,12}",
        prop::option::of(("[A-Z][a-z]{1,8}", "[A-Z][a-z]{1,10}")),
        prop::option::of("[A-Z][a-z]{1,8}"),
        known_or_unknown::<Gender>(),
        known_or_unknown::<EmploymentStatus>(),
        prop::option::of(birth_date()),
    );
    let extras = (
        prop::option::of(prop::collection::vec("[a-z]{1,8}", 0..4)),
        prop::option::of(address()),
        prop::option::of(("[A-Z][a-z]{2,8}/[A-Z][a-z]{2,8}", quarters(-48..=56))),
        prop::collection::btree_map(known::<Language>(), known_or_unknown::<LanguageSkill>(), 0..4),
        prop::collection::btree_map(
            known::<WebProfile>(),
            prop::collection::vec("https://[a-z]{3,8}\\.example/[a-z]{1,6}", 0..3),
            0..3,
        ),
        prop::collection::btree_map(known::<MessagingAccount>(), "[a-z0-9.]{0,10}", 0..3),
        prop::option::of(prop::collection::vec(known::<PremiumService>(), 0..3)),
        prop::option::of(photo_urls()),
    );
    (identity, extras).prop_map(
        |(
            (id, names, display_name, gender, status, birth),
            (wants, business, zone, languages, sites, accounts, services, photos),
        )| {
            let mut user = User::with_id(id)
                .with_gender(gender)
                .with_employment_status(status);
            if let Some((first, last)) = names {
                user = user.with_names(first, last);
            }
            if let Some(display_name) = display_name {
                user = user.with_display_name(display_name);
            }
            if let Some(birth) = birth {
                user = user.with_birth_date(birth);
            }
            if let Some(wants) = wants {
                user = user.with_wants(wants);
            }
            if let Some(business) = business {
                user = user.with_business_address(business);
            }
            if let Some((name, offset)) = zone {
                user = user.with_time_zone(TimeZone::new(name, offset));
            }
            for (language, skill) in languages {
                user = user.with_language(language, skill);
            }
            for (site, urls) in sites {
                user = user.with_web_profile(site, urls);
            }
            for (service, handle) in accounts {
                user = user.with_messaging_account(service, handle);
            }
            if let Some(services) = services {
                user = user.with_premium_services(services);
            }
            if let Some(photos) = photos {
                user = user.with_photo_urls(photos);
            }
            user
        },
    )
}

fn attachment() -> impl Strategy<Value = MessageAttachment> {
    (
        "[a-z0-9]{1,8}",
        calendar(),
        "[a-z]{1,8}\\.(pdf|png|txt)",
        "(text/plain|image/png|application/pdf)",
        any::<u32>(),
    )
        .prop_map(|(id, created_at, name, mime, size)| {
            MessageAttachment::new(id, created_at, name, mime, size)
        })
}

fn message() -> impl Strategy<Value = ConversationMessage> {
    (
        "[a-z0-9]{1,8}",
        calendar(),
        ".*",
        any::<bool>(),
        user(),
        prop::option::of(prop::collection::vec(attachment(), 0..3)),
    )
        .prop_map(|(id, created_at, content, read, sender, attachments)| {
            ConversationMessage::new(id, created_at, content, read, sender, attachments)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_user_round_trip(user in user()) {
        let registry = Registry::global();
        let decoded: User = registry.decode_value(&registry.encode(&user)).unwrap();
        prop_assert_eq!(decoded, user);
    }

    #[test]
    fn test_contact_request_round_trip(
        sender in user(),
        message in ".*",
        received_at in calendar(),
    ) {
        let request = ContactRequest::new(sender.id().to_string(), sender, message, received_at);
        let registry = Registry::global();
        let decoded: ContactRequest = registry.decode_value(&registry.encode(&request)).unwrap();
        prop_assert_eq!(decoded, request);
    }

    #[test]
    fn test_pending_request_round_trip(sender in ".+", recipient in ".+") {
        let pending = PendingContactRequest::new(sender, recipient);
        let text = Registry::global().encode_string(&pending).unwrap();
        let decoded: PendingContactRequest = Registry::global().decode_str(&text).unwrap();
        prop_assert_eq!(decoded, pending);
    }

    #[test]
    fn test_invitation_stats_round_trip(
        total in any::<u32>(),
        sent in any::<u32>(),
        invited in prop::collection::vec("[a-z]{1,8}@example\\.com", 0..4),
        members in prop::collection::vec(user(), 0..3),
        invalid in prop::collection::vec("[^@]{0,12}", 0..3),
    ) {
        let stats = InvitationStats::new(total, sent, invited, members, invalid);
        let registry = Registry::global();
        let decoded: InvitationStats = registry.decode_value(&registry.encode(&stats)).unwrap();
        prop_assert_eq!(decoded, stats);
    }

    #[test]
    fn test_contact_paths_round_trip(
        paths in prop::collection::vec(prop::collection::vec(user(), 0..4), 0..3),
        distance in any::<u32>(),
        total in any::<u32>(),
    ) {
        let paths = ContactPaths::new(paths, distance, total);
        let registry = Registry::global();
        let decoded: ContactPaths = registry.decode_value(&registry.encode(&paths)).unwrap();
        prop_assert_eq!(decoded, paths);
    }

    #[test]
    fn test_location_round_trip(
        city in "[A-Z][a-z]{2,10}",
        country in "[A-Z]{2}",
        region in prop::option::of("[A-Z][a-z]{2,10}"),
        geo in prop::option::of((0i64..=9, coordinate(90), coordinate(180))),
    ) {
        let mut location = Location::new(city, country);
        if let Some(region) = region {
            location = location.with_region(region);
        }
        if let Some((accuracy, latitude, longitude)) = geo {
            location = location.with_geo_code(GeoCode::new(accuracy, latitude, longitude));
        }
        let registry = Registry::global();
        let decoded: Location = registry.decode_value(&registry.encode(&location)).unwrap();
        prop_assert_eq!(decoded, location);
    }

    #[test]
    fn test_message_with_attachments_round_trip(message in message()) {
        let registry = Registry::global();
        let encoded = registry.encode(&message);
        let decoded: ConversationMessage = registry.decode_value(&encoded).unwrap();
        prop_assert_eq!(registry.encode(&decoded), encoded);
        prop_assert_eq!(decoded.sender(), message.sender());
        prop_assert_eq!(
            decoded.attachments().map(<[MessageAttachment]>::len),
            message.attachments().map(<[MessageAttachment]>::len)
        );
    }

    #[test]
    fn test_conversation_encoding_is_stable(
        id in "[a-z0-9]{1,16}",
        subject in ".*",
        total in any::<u32>(),
        unread in any::<u32>(),
        updated_at in calendar(),
        read_only in any::<bool>(),
        participants in prop::collection::vec(user(), 0..3),
        messages in prop::option::of(prop::collection::vec(message(), 0..3)),
    ) {
        let with_messages = messages.is_some();
        let conversation = Conversation::new(
            id,
            subject,
            total,
            unread,
            updated_at,
            read_only,
            participants,
            messages,
        );
        let registry = Registry::global();
        let encoded = registry.encode(&conversation);
        let decoded: Conversation = registry.decode_value(&encoded).unwrap();
        prop_assert_eq!(registry.encode(&decoded), encoded);
        prop_assert_eq!(decoded.updated_at(), updated_at);
        prop_assert_eq!(decoded.latest_messages().is_some(), with_messages);
    }

    #[test]
    fn test_attachment_identity(id in "[a-z0-9]{1,8}", first in ".*", second in ".*") {
        let a = MessageAttachment::new(id.clone(), SafeCalendar::UNSET, first, "text/plain", 1);
        let b = MessageAttachment::new(id, SafeCalendar::UNSET, second, "image/png", 2);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_gender_never_fails(gender in "[a-z]{2,6}") {
        let user: User = Registry::global()
            .decode_value(&json!({"id": "u1", "gender": gender}))
            .unwrap();
        prop_assert_eq!(user.gender(), Gender::Unknown);
    }

    #[test]
    fn test_unknown_language_keys_never_fail(code in "[a-z]{3,4}", skill in "[A-Z]{3,8}") {
        let user: User = Registry::global()
            .decode_value(&json!({"id": "u1", "languages": {code: skill, "de": skill}}))
            .unwrap();
        let languages = user.languages().unwrap();
        prop_assert_eq!(languages.len(), 1);
        prop_assert!(languages.contains_key(&Language::German));
    }
}
