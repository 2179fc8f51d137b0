//! User Data Structure
//!
//! A network member as embedded in contact paths, contact requests,
//! invitation results and messages. Only `id` is guaranteed; everything else
//! depends on the fields requested and on the member's privacy settings.

use std::collections::BTreeMap;

use crate::json::{
    resource_serde, BirthDateAdapter, FallbackOnNull, Field, FieldReader, FieldWriter, Lenient,
    ListAdapter, Mandatory, Optional, Resource, SafeEnumAdapter, SafeEnumListAdapter,
    SafeEnumMapAdapter, StringAdapter, TimeZoneAdapter,
};
use crate::shared::calendar::SafeCalendar;
use crate::shared::error::FieldError;

use super::address::Address;
use super::enums::{
    EmploymentStatus, Gender, Language, LanguageSkill, MessagingAccount, PremiumService, WebProfile,
};
use super::photos::PhotoUrls;
use super::values::TimeZone;

type Languages = SafeEnumMapAdapter<Language, FallbackOnNull<SafeEnumAdapter<LanguageSkill>>>;
type WebProfiles = SafeEnumMapAdapter<WebProfile, FallbackOnNull<ListAdapter<StringAdapter>>>;
type MessagingAccounts = SafeEnumMapAdapter<MessagingAccount, FallbackOnNull<StringAdapter>>;

fn languages() -> Optional<Languages> {
    Optional(SafeEnumMapAdapter::new(FallbackOnNull(SafeEnumAdapter::new())))
}

fn web_profiles() -> Optional<WebProfiles> {
    Optional(SafeEnumMapAdapter::new(FallbackOnNull(ListAdapter(StringAdapter))))
}

fn messaging_accounts() -> Optional<MessagingAccounts> {
    Optional(SafeEnumMapAdapter::new(FallbackOnNull(StringAdapter)))
}

/// A network member
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user ID
    id: String,
    academic_title: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    /// Name as shown in the network
    display_name: Option<String>,
    page_name: Option<String>,
    /// Public profile URL
    permalink: Option<String>,
    active_email: Option<String>,
    gender: Gender,
    employment_status: EmploymentStatus,
    /// Possibly partial, e.g. day and month without a year
    birth_date: Option<SafeCalendar>,
    time_zone: Option<TimeZone>,
    wants: Option<Vec<String>>,
    haves: Option<Vec<String>>,
    top_haves: Option<Vec<String>>,
    interests: Option<Vec<String>>,
    organisation_member: Option<Vec<String>>,
    private_address: Option<Address>,
    business_address: Option<Address>,
    /// Spoken languages; a hidden level is `LanguageSkill::Unknown`
    languages: Option<BTreeMap<Language, LanguageSkill>>,
    /// Profile URLs per external site
    web_profiles: Option<BTreeMap<WebProfile, Vec<String>>>,
    instant_messaging_accounts: Option<BTreeMap<MessagingAccount, String>>,
    premium_services: Option<Vec<PremiumService>>,
    photo_urls: Option<PhotoUrls>,
}

impl User {
    /// A user known only by ID, as in minimal API responses
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            academic_title: None,
            first_name: None,
            last_name: None,
            display_name: None,
            page_name: None,
            permalink: None,
            active_email: None,
            gender: Gender::Unknown,
            employment_status: EmploymentStatus::Unknown,
            birth_date: None,
            time_zone: None,
            wants: None,
            haves: None,
            top_haves: None,
            interests: None,
            organisation_member: None,
            private_address: None,
            business_address: None,
            languages: None,
            web_profiles: None,
            instant_messaging_accounts: None,
            premium_services: None,
            photo_urls: None,
        }
    }

    pub fn with_names(self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..self
        }
    }

    pub fn with_display_name(self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..self
        }
    }

    pub fn with_gender(self, gender: Gender) -> Self {
        Self { gender, ..self }
    }

    pub fn with_employment_status(self, employment_status: EmploymentStatus) -> Self {
        Self {
            employment_status,
            ..self
        }
    }

    pub fn with_birth_date(self, birth_date: SafeCalendar) -> Self {
        Self {
            birth_date: Some(birth_date),
            ..self
        }
    }

    pub fn with_time_zone(self, time_zone: TimeZone) -> Self {
        Self {
            time_zone: Some(time_zone),
            ..self
        }
    }

    pub fn with_wants(self, wants: Vec<String>) -> Self {
        Self {
            wants: Some(wants),
            ..self
        }
    }

    pub fn with_business_address(self, address: Address) -> Self {
        Self {
            business_address: Some(address),
            ..self
        }
    }

    pub fn with_language(mut self, language: Language, skill: LanguageSkill) -> Self {
        self.languages.get_or_insert_with(BTreeMap::new).insert(language, skill);
        self
    }

    pub fn with_web_profile(mut self, site: WebProfile, urls: Vec<String>) -> Self {
        self.web_profiles.get_or_insert_with(BTreeMap::new).insert(site, urls);
        self
    }

    pub fn with_messaging_account(mut self, service: MessagingAccount, handle: impl Into<String>) -> Self {
        self.instant_messaging_accounts
            .get_or_insert_with(BTreeMap::new)
            .insert(service, handle.into());
        self
    }

    pub fn with_premium_services(self, premium_services: Vec<PremiumService>) -> Self {
        Self {
            premium_services: Some(premium_services),
            ..self
        }
    }

    pub fn with_photo_urls(self, photo_urls: PhotoUrls) -> Self {
        Self {
            photo_urls: Some(photo_urls),
            ..self
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Academic title and first and last name, falling back to the display name.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.academic_title, &self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            return self.display_name.clone();
        }
        Some(parts.join(" "))
    }

    pub fn academic_title(&self) -> Option<&str> {
        self.academic_title.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn page_name(&self) -> Option<&str> {
        self.page_name.as_deref()
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }

    pub fn active_email(&self) -> Option<&str> {
        self.active_email.as_deref()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn employment_status(&self) -> EmploymentStatus {
        self.employment_status
    }

    pub fn birth_date(&self) -> Option<SafeCalendar> {
        self.birth_date
    }

    pub fn time_zone(&self) -> Option<&TimeZone> {
        self.time_zone.as_ref()
    }

    pub fn wants(&self) -> Option<&[String]> {
        self.wants.as_deref()
    }

    pub fn haves(&self) -> Option<&[String]> {
        self.haves.as_deref()
    }

    pub fn top_haves(&self) -> Option<&[String]> {
        self.top_haves.as_deref()
    }

    pub fn interests(&self) -> Option<&[String]> {
        self.interests.as_deref()
    }

    pub fn organisation_member(&self) -> Option<&[String]> {
        self.organisation_member.as_deref()
    }

    pub fn private_address(&self) -> Option<&Address> {
        self.private_address.as_ref()
    }

    pub fn business_address(&self) -> Option<&Address> {
        self.business_address.as_ref()
    }

    pub fn languages(&self) -> Option<&BTreeMap<Language, LanguageSkill>> {
        self.languages.as_ref()
    }

    pub fn web_profiles(&self) -> Option<&BTreeMap<WebProfile, Vec<String>>> {
        self.web_profiles.as_ref()
    }

    pub fn instant_messaging_accounts(&self) -> Option<&BTreeMap<MessagingAccount, String>> {
        self.instant_messaging_accounts.as_ref()
    }

    pub fn premium_services(&self) -> Option<&[PremiumService]> {
        self.premium_services.as_deref()
    }

    pub fn has_premium_service(&self, service: PremiumService) -> bool {
        self.premium_services().is_some_and(|services| services.contains(&service))
    }

    pub fn photo_urls(&self) -> Option<&PhotoUrls> {
        self.photo_urls.as_ref()
    }
}

impl Resource for User {
    const NAME: &'static str = "User";
    const FIELDS: &'static [Field] = &[
        Field::new("id", "id"),
        Field::new("academic_title", "academic_title"),
        Field::new("first_name", "first_name"),
        Field::new("last_name", "last_name"),
        Field::new("display_name", "display_name"),
        Field::new("page_name", "page_name"),
        Field::new("permalink", "permalink"),
        Field::new("active_email", "active_email"),
        Field::new("gender", "gender"),
        Field::new("employment_status", "employment_status"),
        Field::new("birth_date", "birth_date"),
        Field::new("time_zone", "time_zone"),
        Field::new("wants", "wants"),
        Field::new("haves", "haves"),
        Field::new("top_haves", "top_haves"),
        Field::new("interests", "interests"),
        Field::new("organisation_member", "organisation_member"),
        Field::new("private_address", "private_address"),
        Field::new("business_address", "business_address"),
        Field::new("languages", "languages"),
        Field::new("web_profiles", "web_profiles"),
        Field::new("instant_messaging_accounts", "instant_messaging_accounts"),
        Field::new("premium_services", "premium_services"),
        Field::new("photo_urls", "photo_urls"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let text = Optional(StringAdapter);
        let csv = Optional(reader.adapters().csv());
        let address = Optional(reader.adapters().resource::<Address>());
        Ok(Self {
            id: reader.field("id", Mandatory(StringAdapter))?,
            academic_title: reader.field("academic_title", text)?,
            first_name: reader.field("first_name", text)?,
            last_name: reader.field("last_name", text)?,
            display_name: reader.field("display_name", text)?,
            page_name: reader.field("page_name", text)?,
            permalink: reader.field("permalink", text)?,
            active_email: reader.field("active_email", text)?,
            gender: reader.field("gender", FallbackOnNull(SafeEnumAdapter::<Gender>::new()))?,
            employment_status: reader.field(
                "employment_status",
                FallbackOnNull(SafeEnumAdapter::<EmploymentStatus>::new()),
            )?,
            birth_date: reader.field("birth_date", Lenient(BirthDateAdapter))?,
            time_zone: reader.field("time_zone", Lenient(TimeZoneAdapter))?,
            wants: reader.field("wants", csv)?,
            haves: reader.field("haves", csv)?,
            top_haves: reader.field("top_haves", csv)?,
            interests: reader.field("interests", csv)?,
            organisation_member: reader.field("organisation_member", csv)?,
            private_address: reader.field("private_address", address)?,
            business_address: reader.field("business_address", address)?,
            languages: reader.field("languages", languages())?,
            web_profiles: reader.field("web_profiles", web_profiles())?,
            instant_messaging_accounts: reader.field("instant_messaging_accounts", messaging_accounts())?,
            premium_services: reader.field(
                "premium_services",
                Optional(SafeEnumListAdapter::<PremiumService>::new()),
            )?,
            photo_urls: reader.field(
                "photo_urls",
                Optional(reader.adapters().resource::<PhotoUrls>()),
            )?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let text = Optional(StringAdapter);
        let csv = Optional(writer.adapters().csv());
        let address = Optional(writer.adapters().resource::<Address>());
        writer.field("id", Mandatory(StringAdapter), &self.id);
        writer.field("academic_title", text, &self.academic_title);
        writer.field("first_name", text, &self.first_name);
        writer.field("last_name", text, &self.last_name);
        writer.field("display_name", text, &self.display_name);
        writer.field("page_name", text, &self.page_name);
        writer.field("permalink", text, &self.permalink);
        writer.field("active_email", text, &self.active_email);
        writer.field("gender", FallbackOnNull(SafeEnumAdapter::<Gender>::new()), &self.gender);
        writer.field(
            "employment_status",
            FallbackOnNull(SafeEnumAdapter::<EmploymentStatus>::new()),
            &self.employment_status,
        );
        writer.field("birth_date", Lenient(BirthDateAdapter), &self.birth_date);
        writer.field("time_zone", Lenient(TimeZoneAdapter), &self.time_zone);
        writer.field("wants", csv, &self.wants);
        writer.field("haves", csv, &self.haves);
        writer.field("top_haves", csv, &self.top_haves);
        writer.field("interests", csv, &self.interests);
        writer.field("organisation_member", csv, &self.organisation_member);
        writer.field("private_address", address, &self.private_address);
        writer.field("business_address", address, &self.business_address);
        writer.field("languages", languages(), &self.languages);
        writer.field("web_profiles", web_profiles(), &self.web_profiles);
        writer.field(
            "instant_messaging_accounts",
            messaging_accounts(),
            &self.instant_messaging_accounts,
        );
        writer.field(
            "premium_services",
            Optional(SafeEnumListAdapter::<PremiumService>::new()),
            &self.premium_services,
        );
        writer.field(
            "photo_urls",
            Optional(writer.adapters().resource::<PhotoUrls>()),
            &self.photo_urls,
        );
    }
}

resource_serde!(User);
