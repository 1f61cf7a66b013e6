// src/models/category.rs

use std::{
    collections::BTreeMap,
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};

use crate::models::archetype::{ARCHETYPES, Archetype};

/// One of the six courage categories a question can measure.
///
/// Declaration order is the canonical display order used by every
/// per-category table. Ranking never relies on it: the final tie-break
/// compares labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Physical,
    Emotional,
    Moral,
    Social,
    Intellectual,
    Spiritual,
}

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Physical,
        Category::Emotional,
        Category::Moral,
        Category::Social,
        Category::Intellectual,
        Category::Spiritual,
    ];

    /// Slot of this category inside a `CategoryMap`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Full display label, also used as the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Physical => "Physical Courage",
            Category::Emotional => "Emotional Courage",
            Category::Moral => "Moral Courage",
            Category::Social => "Social Courage",
            Category::Intellectual => "Intellectual Courage",
            Category::Spiritual => "Spiritual Courage",
        }
    }

    /// Short lowercase key used in URLs.
    pub const fn slug(self) -> &'static str {
        match self {
            Category::Physical => "physical",
            Category::Emotional => "emotional",
            Category::Moral => "moral",
            Category::Social => "social",
            Category::Intellectual => "intellectual",
            Category::Spiritual => "spiritual",
        }
    }

    /// Display metadata for this category.
    pub fn archetype(self) -> &'static Archetype {
        &ARCHETYPES[self.index()]
    }

    /// All categories sorted by label.
    pub fn alphabetical() -> [Category; Category::COUNT] {
        let mut sorted = Self::ALL;
        sorted.sort_by(|a, b| a.label().cmp(b.label()));
        sorted
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Accepts either the full label or the slug, ignoring case.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Fixed-size table holding exactly one value per category.
///
/// Serialized as a JSON object keyed by category label, always with all six
/// keys present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryMap<T>([T; Category::COUNT]);

impl<T> CategoryMap<T> {
    pub fn from_fn(f: impl FnMut(Category) -> T) -> Self {
        Self(Category::ALL.map(f))
    }

    pub fn get(&self, category: Category) -> &T {
        &self.0[category.index()]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        &mut self.0[category.index()]
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        self.get_mut(category)
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.label(), value)?;
        }
        map.end()
    }
}

/// Missing categories fall back to `T::default()`; unknown keys are rejected.
impl<'de, T> Deserialize<'de> for CategoryMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, T>::deserialize(deserializer)?;
        let mut table = CategoryMap::<T>::default();
        for (key, value) in raw {
            let category: Category = key.parse().map_err(de::Error::custom)?;
            table[category] = value;
        }
        Ok(table)
    }
}
