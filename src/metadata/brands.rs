//! Ordered brand code to display name mapping.
//!
//! JSON objects carry no order guarantee in most maps, so [`BrandList`] keeps
//! its entries in a `Vec` and serializes them with a hand-written map
//! serializer. Deserialization keeps document order as well.

use std::fmt;

use detector_icons_common::natural::sort_by_value_natural;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Brand code (e.g. `"AP"`) to brand name (e.g. `"Apple"`), in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandList {
    entries: Vec<(String, String)>,
}

impl BrandList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the display name for a brand code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name.as_str())
    }

    /// Iterate `(code, name)` pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, n)| n.as_str())
    }

    /// Reorder entries by display name in natural, case-insensitive order.
    ///
    /// The sort is stable: names that compare equal keep their current order.
    pub fn sort_natural(&mut self) {
        sort_by_value_natural(&mut self.entries);
    }

    /// Consume the list and return a naturally sorted copy.
    pub fn into_sorted(mut self) -> Self {
        self.sort_natural();
        self
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for BrandList {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        }
    }
}

impl Serialize for BrandList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, name) in &self.entries {
            map.serialize_entry(code, name)?;
        }
        map.end()
    }
}

struct BrandListVisitor;

impl<'de> Visitor<'de> for BrandListVisitor {
    type Value = BrandList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of brand codes to brand names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut list = BrandList {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((code, name)) = access.next_entry::<String, String>()? {
            if list.get(&code).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate brand code {:?}",
                    code
                )));
            }
            list.entries.push((code, name));
        }
        Ok(list)
    }
}

impl<'de> Deserialize<'de> for BrandList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BrandListVisitor)
    }
}
