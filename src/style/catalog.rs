use std::collections::BTreeMap;

use crate::foundation::error::{TickframeError, TickframeResult};
use crate::style::circle::{CIRCLE_STYLES, CircleStyle};
use crate::style::digital::{DIGITAL_STYLES, DigitalStyle};

/// A catalog entry, viewed through the merged name space.
#[derive(Clone, Copy, Debug)]
pub enum StyleRef<'a> {
    Digital(&'a DigitalStyle),
    Circle(&'a CircleStyle),
}

impl StyleRef<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            StyleRef::Digital(s) => s.name,
            StyleRef::Circle(s) => s.name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StyleRef::Digital(s) => s.description,
            StyleRef::Circle(s) => s.description,
        }
    }

    pub fn canvas(&self) -> crate::foundation::core::Canvas {
        match self {
            StyleRef::Digital(s) => s.canvas,
            StyleRef::Circle(s) => s.canvas,
        }
    }
}

/// The fixed set of presentation configurations, built once at startup.
///
/// Two independent families share one name space; a duplicate name across the
/// union is a construction error, never a silent overwrite.
#[derive(Clone, Debug)]
pub struct StyleCatalog {
    digital: BTreeMap<&'static str, DigitalStyle>,
    circle: BTreeMap<&'static str, CircleStyle>,
}

impl StyleCatalog {
    /// Build the catalog from the built-in style tables.
    pub fn builtin() -> TickframeResult<Self> {
        Self::from_tables(DIGITAL_STYLES, CIRCLE_STYLES)
    }

    /// Build a catalog from explicit style tables. Names must be unique
    /// across the union of both families.
    pub fn from_tables(
        digital_styles: &[DigitalStyle],
        circle_styles: &[CircleStyle],
    ) -> TickframeResult<Self> {
        let mut digital = BTreeMap::new();
        for s in digital_styles {
            if digital.insert(s.name, *s).is_some() {
                return Err(TickframeError::catalog(format!(
                    "duplicate digital style name '{}'",
                    s.name
                )));
            }
        }

        let mut circle = BTreeMap::new();
        for s in circle_styles {
            if digital.contains_key(s.name) || circle.insert(s.name, *s).is_some() {
                return Err(TickframeError::catalog(format!(
                    "duplicate style name '{}'",
                    s.name
                )));
            }
        }

        Ok(Self { digital, circle })
    }

    /// Look up a style by name in the merged view.
    ///
    /// An unknown name is a user error and carries the full sorted list of
    /// valid names for reporting.
    pub fn get(&self, name: &str) -> TickframeResult<StyleRef<'_>> {
        if let Some(s) = self.digital.get(name) {
            return Ok(StyleRef::Digital(s));
        }
        if let Some(s) = self.circle.get(name) {
            return Ok(StyleRef::Circle(s));
        }
        Err(TickframeError::UnknownStyle {
            name: name.to_string(),
            available: self.names().map(str::to_string).collect(),
        })
    }

    /// All style names, digital families first, each family sorted by name.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.digital.keys().chain(self.circle.keys()).copied()
    }

    /// Merged `(name, description)` listing for `--list-styles`.
    pub fn entries(&self) -> impl Iterator<Item = StyleRef<'_>> + '_ {
        self.digital
            .values()
            .map(StyleRef::Digital)
            .chain(self.circle.values().map(StyleRef::Circle))
    }

    pub fn len(&self) -> usize {
        self.digital.len() + self.circle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digital.is_empty() && self.circle.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_merges_both_families() {
        let catalog = StyleCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(matches!(catalog.get("modern"), Ok(StyleRef::Digital(_))));
        assert!(matches!(
            catalog.get("circle-classic"),
            Ok(StyleRef::Circle(_))
        ));
    }

    #[test]
    fn unknown_name_reports_all_valid_names() {
        let catalog = StyleCatalog::builtin().unwrap();
        let err = catalog.get("does-not-exist").unwrap_err();
        let TickframeError::UnknownStyle { name, available } = err else {
            panic!("expected UnknownStyle, got {err}");
        };
        assert_eq!(name, "does-not-exist");
        assert_eq!(available.len(), 20);
        assert!(available.iter().any(|n| n == "neon"));
        assert!(available.iter().any(|n| n == "circle-neon"));
    }

    #[test]
    fn names_are_unique() {
        let catalog = StyleCatalog::builtin().unwrap();
        let mut names: Vec<_> = catalog.names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn cross_family_name_collision_is_rejected() {
        let mut dup = CIRCLE_STYLES[0];
        dup.name = DIGITAL_STYLES[0].name;
        let err = StyleCatalog::from_tables(DIGITAL_STYLES, &[dup]).unwrap_err();
        assert!(err.to_string().contains("duplicate style name"));
    }
}
