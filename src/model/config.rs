use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::task::Task;

/// The persisted document: `{"tasks": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub tasks: Vec<Task>,
}

// Only a JSON object is a valid document; the derived impl would also take
// a bare array as a positional struct.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ConfigVisitor)
    }
}

struct ConfigVisitor;

impl<'de> Visitor<'de> for ConfigVisitor {
    type Value = Config;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with a \"tasks\" list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Config, A::Error> {
        let mut tasks: Option<Vec<Task>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "tasks" {
                if tasks.is_some() {
                    return Err(de::Error::duplicate_field("tasks"));
                }
                tasks = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(Config {
            tasks: tasks.unwrap_or_default(),
        })
    }
}
