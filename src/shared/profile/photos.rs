//! Profile photo URLs
//!
//! The server sends one URL per rendition it has; renditions the member never
//! uploaded, or the caller did not ask for, are absent.

use std::collections::BTreeMap;

use crate::json::{
    resource_serde, Field, FieldReader, FieldWriter, Mandatory, Optional, Resource, StringAdapter,
};
use crate::shared::error::FieldError;

/// One rendition of a profile photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhotoSize {
    Large,
    MaxiThumb,
    MediumThumb,
    MiniThumb,
    Thumb,
    Size32,
    Size48,
    Size64,
    Size96,
    Size128,
    Size192,
    Size256,
    Size1024,
    Original,
}

impl PhotoSize {
    pub const ALL: &'static [PhotoSize] = &[
        PhotoSize::Large,
        PhotoSize::MaxiThumb,
        PhotoSize::MediumThumb,
        PhotoSize::MiniThumb,
        PhotoSize::Thumb,
        PhotoSize::Size32,
        PhotoSize::Size48,
        PhotoSize::Size64,
        PhotoSize::Size96,
        PhotoSize::Size128,
        PhotoSize::Size192,
        PhotoSize::Size256,
        PhotoSize::Size1024,
        PhotoSize::Original,
    ];

    /// Field name, identical to the wire key
    pub fn field_name(self) -> &'static str {
        match self {
            PhotoSize::Large => "large",
            PhotoSize::MaxiThumb => "maxi_thumb",
            PhotoSize::MediumThumb => "medium_thumb",
            PhotoSize::MiniThumb => "mini_thumb",
            PhotoSize::Thumb => "thumb",
            PhotoSize::Size32 => "size_32x32",
            PhotoSize::Size48 => "size_48x48",
            PhotoSize::Size64 => "size_64x64",
            PhotoSize::Size96 => "size_96x96",
            PhotoSize::Size128 => "size_128x128",
            PhotoSize::Size192 => "size_192x192",
            PhotoSize::Size256 => "size_256x256",
            PhotoSize::Size1024 => "size_1024x1024",
            PhotoSize::Original => "size_original",
        }
    }
}

/// Photo URLs by rendition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoUrls {
    urls: BTreeMap<PhotoSize, String>,
}

impl PhotoUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, size: PhotoSize, url: impl Into<String>) -> Self {
        self.urls.insert(size, url.into());
        self
    }

    pub fn url(&self, size: PhotoSize) -> Option<&str> {
        self.urls.get(&size).map(String::as_str)
    }

    /// Every rendition that has a URL, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (PhotoSize, &str)> {
        self.urls.iter().map(|(size, url)| (*size, url.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Resource for PhotoUrls {
    const NAME: &'static str = "PhotoUrls";
    const FIELDS: &'static [Field] = &[
        Field::new("large", "large"),
        Field::new("maxi_thumb", "maxi_thumb"),
        Field::new("medium_thumb", "medium_thumb"),
        Field::new("mini_thumb", "mini_thumb"),
        Field::new("thumb", "thumb"),
        Field::new("size_32x32", "size_32x32"),
        Field::new("size_48x48", "size_48x48"),
        Field::new("size_64x64", "size_64x64"),
        Field::new("size_96x96", "size_96x96"),
        Field::new("size_128x128", "size_128x128"),
        Field::new("size_192x192", "size_192x192"),
        Field::new("size_256x256", "size_256x256"),
        Field::new("size_1024x1024", "size_1024x1024"),
        Field::new("size_original", "size_original"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let mut urls = BTreeMap::new();
        for size in PhotoSize::ALL {
            if let Some(url) = reader.field(size.field_name(), Optional(StringAdapter))? {
                urls.insert(*size, url);
            }
        }
        Ok(Self { urls })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        for (size, url) in &self.urls {
            writer.field(size.field_name(), Mandatory(StringAdapter), url);
        }
    }
}

resource_serde!(PhotoUrls);
