//! Field link resolution.
//!
//! The details model asks a [`FieldLinkResolver`] for the links of every
//! reconciled field. Column-backed fields are passed as the frame column,
//! purely ad-hoc fields as the detected key/value pair.

use logdetail_core::{Column, DetectedField, LinkTarget, LinkTemplate};
use serde::Serialize;

use crate::config::{DerivedLink, Settings};

/// A resolved, clickable link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLink {
    pub title: String,
    pub href: String,
    pub target: LinkTarget,
}

impl FieldLink {
    /// Resolve `template` against a cell value
    pub fn from_template(template: &LinkTemplate, value: &str) -> Self {
        Self {
            title: template.title.clone(),
            href: template.interpolate(value),
            target: template.target,
        }
    }
}

/// The field a link is being resolved for
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    /// Field backed by a frame column
    Column(&'a Column),
    /// Field parsed out of the entry text
    Detected(&'a DetectedField),
}

impl<'a> FieldRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            FieldRef::Column(column) => &column.name,
            FieldRef::Detected(field) => &field.name,
        }
    }

    /// The field's value in row `row_index`
    pub fn value(&self, row_index: usize) -> Option<&'a str> {
        match self {
            FieldRef::Column(column) => column.value(row_index),
            FieldRef::Detected(field) => Some(&field.value),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolvers
// ─────────────────────────────────────────────────────────────────────────────

/// Produces the links shown next to a field.
///
/// Called once per reconciled field on every model build. Implementations
/// must not assume any call order.
pub trait FieldLinkResolver {
    fn field_links(&self, field: FieldRef<'_>, row_index: usize) -> Vec<FieldLink>;
}

impl<F> FieldLinkResolver for F
where
    F: Fn(FieldRef<'_>, usize) -> Vec<FieldLink>,
{
    fn field_links(&self, field: FieldRef<'_>, row_index: usize) -> Vec<FieldLink> {
        self(field, row_index)
    }
}

/// Resolver used when the host supplies none: no field has links.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl FieldLinkResolver for NoLinks {
    fn field_links(&self, _field: FieldRef<'_>, _row_index: usize) -> Vec<FieldLink> {
        Vec::new()
    }
}

/// Standard resolver: column link templates plus configured links by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateLinks {
    derived: Vec<DerivedLink>,
}

impl TemplateLinks {
    pub fn new(derived: Vec<DerivedLink>) -> Self {
        Self { derived }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.links.clone())
    }
}

impl FieldLinkResolver for TemplateLinks {
    fn field_links(&self, field: FieldRef<'_>, row_index: usize) -> Vec<FieldLink> {
        let Some(value) = field.value(row_index) else {
            return Vec::new();
        };

        let column_links: &[LinkTemplate] = match field {
            FieldRef::Column(column) => column.config.links.as_slice(),
            FieldRef::Detected(_) => &[],
        };

        let derived = self
            .derived
            .iter()
            .filter(|link| link.field == field.name())
            .map(|link| FieldLink::from_template(&link.template(), value));

        column_links
            .iter()
            .map(|template| FieldLink::from_template(template, value))
            .chain(derived)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_column() -> Column {
        Column::new("traceId", ["1234", "9999"])
            .with_link(LinkTemplate::new("link", "localhost:3210/${__value.text}"))
    }

    #[test]
    fn test_no_links_resolver() {
        let column = trace_column();
        assert!(NoLinks.field_links(FieldRef::Column(&column), 0).is_empty());
    }

    #[test]
    fn test_column_template_uses_row_value() {
        let column = trace_column();
        let links = TemplateLinks::default().field_links(FieldRef::Column(&column), 1);
        assert_eq!(
            links,
            vec![FieldLink {
                title: "link".into(),
                href: "localhost:3210/9999".into(),
                target: LinkTarget::Blank,
            }]
        );
    }

    #[test]
    fn test_derived_links_apply_to_detected_fields() {
        let resolver = TemplateLinks::new(vec![DerivedLink {
            field: "traceId".into(),
            title: "Trace".into(),
            url: "http://tempo/${__value.text}".into(),
            target: LinkTarget::Current,
        }]);
        let field = DetectedField::new("traceId", "abc");
        let links = resolver.field_links(FieldRef::Detected(&field), 0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://tempo/abc");
        assert_eq!(links[0].target, LinkTarget::Current);

        let other = DetectedField::new("spanId", "abc");
        assert!(resolver.field_links(FieldRef::Detected(&other), 0).is_empty());
    }

    #[test]
    fn test_column_links_come_before_derived() {
        let resolver = TemplateLinks::new(vec![DerivedLink {
            field: "traceId".into(),
            title: "Trace".into(),
            url: "http://tempo/${__value.text}".into(),
            target: LinkTarget::Blank,
        }]);
        let column = trace_column();
        let titles: Vec<_> = resolver
            .field_links(FieldRef::Column(&column), 0)
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["link", "Trace"]);
    }

    #[test]
    fn test_missing_cell_has_no_links() {
        let column = trace_column();
        assert!(TemplateLinks::default()
            .field_links(FieldRef::Column(&column), 5)
            .is_empty());
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |field: FieldRef<'_>, _row: usize| {
            vec![FieldLink {
                title: field.name().to_string(),
                href: String::new(),
                target: LinkTarget::Blank,
            }]
        };
        let field = DetectedField::new("a", "1");
        let links = resolver.field_links(FieldRef::Detected(&field), 0);
        assert_eq!(links[0].title, "a");
    }
}
