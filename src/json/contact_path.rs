//! Contact path adapter
//!
//! The network API wraps each path in an object:
//!
//! ```json
//! {"paths": [{"users": [{"id": "a"}, {"id": "b"}]}, {"users": [...]}]}
//! ```
//!
//! The adapter flattens that into a list of user lists. Unlike most
//! adapters it has no safe default: a path list that is not a list of
//! objects fails the whole resource.

use serde_json::{Map, Value};

use super::adapter::{expected, JsonAdapter, ListAdapter};
use super::resource::ResourceAdapter;
use crate::shared::error::FieldError;
use crate::shared::profile::User;

const USERS_KEY: &str = "users";

#[derive(Clone, Copy)]
pub struct ContactPathAdapter<'a> {
    users: ListAdapter<ResourceAdapter<'a, User>>,
}

impl<'a> ContactPathAdapter<'a> {
    pub fn new(users: ResourceAdapter<'a, User>) -> Self {
        Self {
            users: ListAdapter(users),
        }
    }
}

impl JsonAdapter for ContactPathAdapter<'_> {
    type Value = Vec<Vec<User>>;

    fn from_json(&self, raw: &Value) -> Result<Vec<Vec<User>>, FieldError> {
        let entries = raw
            .as_array()
            .ok_or_else(|| FieldError::malformed(raw, expected("an array of paths", raw)))?;

        let mut paths = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let segment = format!("[{}]", index);
            let object = entry
                .as_object()
                .ok_or_else(|| FieldError::malformed(entry, expected("a path object", entry)).at(&segment))?;
            match object.get(USERS_KEY) {
                None | Some(Value::Null) => {
                    tracing::debug!(index, "path entry without users, skipping");
                }
                Some(users) => {
                    let path = self
                        .users
                        .from_json(users)
                        .map_err(|e| e.at(USERS_KEY).at(&segment))?;
                    paths.push(path);
                }
            }
        }
        Ok(paths)
    }

    fn to_json(&self, value: &Vec<Vec<User>>) -> Value {
        Value::Array(
            value
                .iter()
                .map(|path| {
                    let mut entry = Map::new();
                    entry.insert(USERS_KEY.to_string(), self.users.to_json(path));
                    Value::Object(entry)
                })
                .collect(),
        )
    }
}
