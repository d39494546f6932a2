//! Heading sections in page order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Heading text → text following that heading, in the order the headings
/// appear on the page.
///
/// Stored as a JSON object. A repeated heading keeps its first position and
/// takes the later body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections(Vec<(String, String)>);

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, heading: impl Into<String>, body: impl Into<String>) {
        let heading = heading.into();
        let body = body.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == heading) {
            Some((_, existing_body)) => *existing_body = body,
            None => self.0.push((heading, body)),
        }
    }

    pub fn get(&self, heading: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(h, _)| h == heading)
            .map(|(_, body)| body.as_str())
    }

    pub fn contains(&self, heading: &str) -> bool {
        self.get(heading).is_some()
    }

    /// Section bodies in page order.
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, body)| body.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<H: Into<String>, B: Into<String>> FromIterator<(H, B)> for Sections {
    fn from_iter<I: IntoIterator<Item = (H, B)>>(iter: I) -> Self {
        let mut sections = Sections::new();
        for (heading, body) in iter {
            sections.insert(heading, body);
        }
        sections
    }
}

impl Serialize for Sections {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (heading, body) in &self.0 {
            map.serialize_entry(heading, body)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = Sections;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of heading text to section text")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Sections, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Sections::new();
                while let Some((heading, body)) = access.next_entry::<String, String>()? {
                    sections.insert(heading, body);
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}
