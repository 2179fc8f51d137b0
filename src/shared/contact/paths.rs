//! Contact Paths
//!
//! The shortest chains of contacts between the requesting member and
//! another member. Each path starts with the requester and ends with the
//! target.

use crate::json::{
    resource_serde, CountAdapter, FallbackOnNull, Field, FieldReader, FieldWriter, Mandatory,
    Resource,
};
use crate::shared::error::FieldError;
use crate::shared::profile::User;

/// Paths between two members
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPaths {
    /// Every path as an ordered chain of users
    paths: Vec<Vec<User>>,
    /// Degree of separation
    distance: u32,
    /// Number of paths available on the server
    total: u32,
}

impl ContactPaths {
    pub fn new(paths: Vec<Vec<User>>, distance: u32, total: u32) -> Self {
        Self {
            paths,
            distance,
            total,
        }
    }

    pub fn paths(&self) -> &[Vec<User>] {
        &self.paths
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// True if the members are not connected by any returned path
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Resource for ContactPaths {
    const NAME: &'static str = "ContactPaths";
    const FIELDS: &'static [Field] = &[
        Field::new("paths", "paths"),
        Field::new("distance", "distance"),
        Field::new("total", "total"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            paths: reader.field("paths", Mandatory(reader.adapters().contact_path()))?,
            distance: reader.field("distance", FallbackOnNull(CountAdapter))?,
            total: reader.field("total", FallbackOnNull(CountAdapter))?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let paths = Mandatory(writer.adapters().contact_path());
        writer.field("paths", paths, &self.paths);
        writer.field("distance", FallbackOnNull(CountAdapter), &self.distance);
        writer.field("total", FallbackOnNull(CountAdapter), &self.total);
    }
}

resource_serde!(ContactPaths);
