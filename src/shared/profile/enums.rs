//! Profile enumerations

use crate::json::SafeEnum;

/// Gender as reported on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Male,
    Female,
    /// Hidden, not sent, or a value this client does not know
    #[default]
    Unknown,
}

impl SafeEnum for Gender {
    const UNKNOWN: Self = Gender::Unknown;
    const KNOWN: &'static [Self] = &[Gender::Male, Gender::Female];

    fn wire_name(self) -> Option<&'static str> {
        match self {
            Gender::Male => Some("m"),
            Gender::Female => Some("f"),
            Gender::Unknown => None,
        }
    }
}

/// Employment status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmploymentStatus {
    Employee,
    Entrepreneur,
    Freelancer,
    Partner,
    Owner,
    PublicServant,
    Student,
    Unemployed,
    Retired,
    #[default]
    Unknown,
}

impl SafeEnum for EmploymentStatus {
    const UNKNOWN: Self = EmploymentStatus::Unknown;
    const KNOWN: &'static [Self] = &[
        EmploymentStatus::Employee,
        EmploymentStatus::Entrepreneur,
        EmploymentStatus::Freelancer,
        EmploymentStatus::Partner,
        EmploymentStatus::Owner,
        EmploymentStatus::PublicServant,
        EmploymentStatus::Student,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Retired,
    ];

    fn wire_name(self) -> Option<&'static str> {
        let name = match self {
            EmploymentStatus::Employee => "EMPLOYEE",
            EmploymentStatus::Entrepreneur => "ENTREPRENEUR",
            EmploymentStatus::Freelancer => "FREELANCER",
            EmploymentStatus::Partner => "PARTNER",
            EmploymentStatus::Owner => "OWNER",
            EmploymentStatus::PublicServant => "PUBLIC_SERVANT",
            EmploymentStatus::Student => "STUDENT",
            EmploymentStatus::Unemployed => "UNEMPLOYED",
            EmploymentStatus::Retired => "RETIRED",
            EmploymentStatus::Unknown => return None,
        };
        Some(name)
    }
}

/// Declares a profile enumeration with a trailing `Unknown` fallback and its
/// wire names.
macro_rules! profile_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub enum $name {
            $($variant,)+
            #[default]
            Unknown,
        }

        impl SafeEnum for $name {
            const UNKNOWN: Self = $name::Unknown;
            const KNOWN: &'static [Self] = &[$($name::$variant),+];

            fn wire_name(self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($wire),)+
                    $name::Unknown => None,
                }
            }
        }
    };
}

profile_enum! {
    /// Spoken language, keyed by ISO 639-1 code
    Language {
        English => "en",
        German => "de",
        Spanish => "es",
        Finnish => "fi",
        French => "fr",
        Hungarian => "hu",
        Italian => "it",
        Japanese => "ja",
        Korean => "ko",
        Dutch => "nl",
        Polish => "pl",
        Portuguese => "pt",
        Russian => "ru",
        Swedish => "sv",
        Turkish => "tr",
        Chinese => "zh",
        Romanian => "ro",
        Norwegian => "no",
        Czech => "cs",
        Greek => "el",
        Danish => "da",
        Arabic => "ar",
        Hebrew => "he",
    }
}

profile_enum! {
    /// How well a user speaks a language; `Unknown` when the level is hidden
    LanguageSkill {
        Basic => "BASIC",
        Good => "GOOD",
        Fluent => "FLUENT",
        Native => "NATIVE",
    }
}

profile_enum! {
    /// External sites a user links from the profile
    WebProfile {
        Amazon => "amazon",
        Delicious => "delicious",
        Digg => "digg",
        Doodle => "doodle",
        Dopplr => "dopplr",
        Ebay => "ebay",
        Facebook => "facebook",
        Flickr => "flickr",
        Foursquare => "foursquare",
        Github => "github",
        GooglePlus => "google+",
        Homepage => "homepage",
        LastFm => "last.fm",
        LifestreamFm => "lifestream.fm",
        Mindmeister => "mindmeister",
        MisterWong => "mister wong",
        Other => "other",
        Photobucket => "photobucket",
        Plazes => "plazes",
        Qype => "qype",
        Reddit => "reddit",
        SecondLife => "second life",
        Sevenload => "sevenload",
        Slideshare => "slideshare",
        Sourceforge => "sourceforge",
        Spreed => "spreed",
        StumbleUpon => "stumble upon",
        Twitter => "twitter",
        Vimeo => "vimeo",
        Wikipedia => "wikipedia",
        Yelp => "yelp",
        Youtube => "youtube",
        Zoominfo => "zoominfo",
    }
}

profile_enum! {
    /// Instant messaging services
    MessagingAccount {
        Aim => "aim",
        Icq => "icq",
        Skype => "skype",
        Msn => "msn",
        Yahoo => "yahoo",
        Jabber => "jabber",
        GoogleTalk => "googletalk",
    }
}

profile_enum! {
    /// Paid membership features
    PremiumService {
        Search => "SEARCH",
        PrivateMessages => "PRIVATEMESSAGES",
        NoAdvertising => "NOADVERTISING",
    }
}
