//! SEO headline generation
//!
//! Two modes: a fixed headline used when a business is submitted, and a
//! random pick from the template set used when the dashboard asks for a new
//! one. Templates are parsed once so substitution never rescans user input.

use crate::error::TemplateError;
use crate::traits::RandomSource;

pub const NAME_PLACEHOLDER: &str = "NAME";
pub const LOCATION_PLACEHOLDER: &str = "LOCATION";

/// Substituted when the regenerate request has no usable name
pub const DEFAULT_NAME: &str = "This Business";
/// Substituted when the regenerate request has no usable location
pub const DEFAULT_LOCATION: &str = "Your Area";

/// Templates served when no template file is configured
pub const BUILTIN_TEMPLATES: [&str; 5] = [
    "Discover why NAME is LOCATION's favorite spot in 2025",
    "How NAME is changing the game in LOCATION",
    "Explore the best of LOCATION with NAME",
    "Why customers in LOCATION love NAME",
    "NAME: The heart of LOCATION’s local scene",
];

/// Headline returned for a submitted business
pub fn generate_deterministic_headline(name: &str, location: &str) -> String {
    format!("Why {name} is {location}'s Sweetest Spot in 2025")
}

/// A template with the byte offsets of its first `NAME` and `LOCATION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineTemplate {
    text: String,
    name_at: usize,
    location_at: usize,
}

impl HeadlineTemplate {
    /// `index` is only used to label errors
    pub fn parse(index: usize, text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        let name_at = text.find(NAME_PLACEHOLDER).ok_or(TemplateError::MissingPlaceholder {
            index,
            placeholder: NAME_PLACEHOLDER,
        })?;
        let location_at = text.find(LOCATION_PLACEHOLDER).ok_or(TemplateError::MissingPlaceholder {
            index,
            placeholder: LOCATION_PLACEHOLDER,
        })?;

        let name_end = name_at + NAME_PLACEHOLDER.len();
        let location_end = location_at + LOCATION_PLACEHOLDER.len();
        if name_at < location_end && location_at < name_end {
            return Err(TemplateError::OverlappingPlaceholders { index });
        }

        Ok(Self {
            text,
            name_at,
            location_at,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splice both values in one pass; later occurrences stay literal
    pub fn render(&self, name: &str, location: &str) -> String {
        let mut slots = [
            (self.name_at, NAME_PLACEHOLDER.len(), name),
            (self.location_at, LOCATION_PLACEHOLDER.len(), location),
        ];
        slots.sort_by_key(|(at, _, _)| *at);

        let mut out = String::with_capacity(self.text.len() + name.len() + location.len());
        let mut cursor = 0;
        for (at, len, value) in slots {
            out.push_str(&self.text[cursor..at]);
            out.push_str(value);
            cursor = at + len;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Ordered, validated, non-empty set of headline templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineTemplates {
    templates: Vec<HeadlineTemplate>,
}

impl HeadlineTemplates {
    pub fn new<I, S>(texts: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| HeadlineTemplate::parse(index, text))
            .collect::<Result<Vec<_>, _>>()?;

        if templates.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(Self { templates })
    }

    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .enumerate()
            .filter_map(|(index, text)| HeadlineTemplate::parse(index, *text).ok())
            .collect::<Vec<_>>();
        debug_assert_eq!(templates.len(), BUILTIN_TEMPLATES.len(), "a built-in template failed to parse");
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HeadlineTemplate> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadlineTemplate> {
        self.templates.iter()
    }
}

impl Default for HeadlineTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Headline generator with an injected randomness source
pub struct HeadlineGenerator<R: RandomSource> {
    templates: HeadlineTemplates,
    random: R,
}

impl<R: RandomSource> HeadlineGenerator<R> {
    pub fn new(templates: HeadlineTemplates, random: R) -> Self {
        Self { templates, random }
    }

    pub fn templates(&self) -> &HeadlineTemplates {
        &self.templates
    }

    pub fn generate_deterministic_headline(&self, name: &str, location: &str) -> String {
        generate_deterministic_headline(name, location)
    }

    /// Draw one template from the injected source
    pub fn pick_template(&self) -> &HeadlineTemplate {
        let len = self.templates.len();
        // Out-of-range picks from a misbehaving source wrap instead of panicking
        let index = self.random.pick_index(len) % len;
        &self.templates.templates[index]
    }

    /// Random template with empty inputs replaced by the defaults
    pub fn generate_random_headline(&self, name: &str, location: &str) -> String {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        let location = if location.is_empty() { DEFAULT_LOCATION } else { location };
        self.pick_template().render(name, location)
    }
}
