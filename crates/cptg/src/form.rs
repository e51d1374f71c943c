//! Value-only description of the settings page and parsing of its submissions.
//!
//! Nothing here renders HTML. A host turns [`SettingsForm`] into whatever
//! markup or widgets it uses, escaping every string on output.

use cptg_domain::CandidateDefinition;
use cptg_domain::constants::{
    FIELD_PLURAL_LABEL, FIELD_SINGULAR_LABEL, FIELD_TYPE_KEY, MENU_SLUG, SETTINGS_GROUP,
    SETTINGS_SECTION, messages,
};
use cptg_kernel::i18n::Localizer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsForm {
    pub option_group: String,
    pub option_name: String,
    pub menu_slug: String,
    pub menu_title: String,
    pub page_title: String,
    pub section: FormSection,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub listing: ListingText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One text input of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: String,
    /// Submitted name, `<option>[<id>]`.
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingText {
    pub title: String,
    pub empty: String,
}

impl SettingsForm {
    /// Builds the form for `option_name`, localizing every visible string.
    #[must_use]
    pub fn new(option_name: &str, localizer: &dyn Localizer) -> Self {
        let text = |key: &str| localizer.lookup(key).into_owned();
        let field = |id: &str, label: &str| FormField {
            id: id.to_owned(),
            name: format!("{option_name}[{id}]"),
            label: text(label),
        };

        Self {
            option_group: SETTINGS_GROUP.to_owned(),
            option_name: option_name.to_owned(),
            menu_slug: MENU_SLUG.to_owned(),
            menu_title: text(messages::MENU_TITLE),
            page_title: text(messages::PAGE_TITLE),
            section: FormSection {
                id: SETTINGS_SECTION.to_owned(),
                title: text(messages::SECTION_TITLE),
                description: text(messages::SECTION_DESCRIPTION),
            },
            fields: vec![
                field(FIELD_TYPE_KEY, messages::FIELD_TYPE_KEY),
                field(FIELD_SINGULAR_LABEL, messages::FIELD_SINGULAR_LABEL),
                field(FIELD_PLURAL_LABEL, messages::FIELD_PLURAL_LABEL),
            ],
            submit_label: text(messages::SUBMIT),
            listing: ListingText {
                title: text(messages::LISTING_TITLE),
                empty: text(messages::LISTING_EMPTY),
            },
        }
    }
}

/// Builds a raw candidate out of submitted form fields.
pub trait FromFormFields: Sized {
    /// Accepts bare field ids (`cptg_post_type`) and the array syntax
    /// `<option_name>[cptg_post_type]`. Unknown fields are ignored; a
    /// repeated field keeps its last value; missing fields become empty.
    fn from_form_fields<I, K, V>(fields: I, option_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;
}

impl FromFormFields for CandidateDefinition {
    fn from_form_fields<I, K, V>(fields: I, option_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut candidate = Self::default();

        for (name, value) in fields {
            let target = match field_id(name.as_ref(), option_name) {
                FIELD_TYPE_KEY => &mut candidate.type_key,
                FIELD_SINGULAR_LABEL => &mut candidate.singular_label,
                FIELD_PLURAL_LABEL => &mut candidate.plural_label,
                _ => continue,
            };
            value.as_ref().clone_into(target);
        }

        candidate
    }
}

fn field_id<'a>(name: &'a str, option_name: &str) -> &'a str {
    name.strip_prefix(option_name)
        .and_then(|rest| rest.strip_prefix('['))
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(name)
}
