//! JSON Decoding Layer
//!
//! Converts raw API payloads into the typed models of [`crate::shared`] and
//! back.
//!
//! # Module Structure
//!
//! - **`adapter`** - adapter traits, presence policies, primitive adapters
//! - **`calendar`** - partial dates and birth dates
//! - **`enums`** - enums with an unknown-value fallback
//! - **`csv`** - comma-separated string lists
//! - **`profile`** - phones, time zones and geo codes
//! - **`contact_path`** - the wrapped contact path lists
//! - **`resource`** - binding tables and the field reader/writer
//! - **`registry`** - the process-wide decoding registry

pub mod adapter;
pub mod calendar;
pub mod contact_path;
pub mod csv;
pub mod enums;
pub mod profile;
pub mod registry;
pub mod resource;

pub(crate) use resource::resource_serde;

pub use adapter::{
    BoolAdapter, CountAdapter, FallbackOnNull, FieldAdapter, JsonAdapter, Lenient, ListAdapter,
    Mandatory, Optional, StringAdapter,
};
pub use calendar::{BirthDateAdapter, SafeCalendarAdapter};
pub use contact_path::ContactPathAdapter;
pub use csv::CsvCollectionAdapter;
pub use enums::{SafeEnum, SafeEnumAdapter, SafeEnumListAdapter, SafeEnumMapAdapter};
pub use profile::{GeoCodeAdapter, PhoneAdapter, TimeZoneAdapter};
pub use registry::{Adapters, Registry, RegistryBuilder};
pub use resource::{Field, FieldReader, FieldWriter, Resource, ResourceAdapter};
