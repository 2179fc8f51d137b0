//! Profile Module
//!
//! User profiles and the values embedded in them:
//!
//! - `User` - a network member, as embedded in contacts and messages
//! - `Address` - a private or business address
//! - `Location` - a place with optional coordinates
//! - `Phone`, `TimeZone`, `GeoCode` - compact profile values
//! - `PhotoUrls` - profile photo URLs by rendition
//! - `Gender`, `EmploymentStatus`, `Language`, `LanguageSkill`, `WebProfile`,
//!   `MessagingAccount`, `PremiumService` - enumerations with an `Unknown`
//!   fallback

pub mod address;
pub mod enums;
pub mod location;
pub mod photos;
pub mod user;
pub mod values;

pub use address::Address;
pub use enums::{
    EmploymentStatus, Gender, Language, LanguageSkill, MessagingAccount, PremiumService, WebProfile,
};
pub use location::Location;
pub use photos::{PhotoSize, PhotoUrls};
pub use user::User;
pub use values::{GeoCode, Phone, TimeZone};
