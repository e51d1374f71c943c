//! Identifiers shared by the registry, the settings form, and hosts.

/// Marks registrations produced by this system.
pub const SOURCE_TAG: &str = "cptg_plugin";

/// Localization domain for every message id below.
pub const TEXT_DOMAIN: &str = "cptg";

/// Default option slot holding the persisted definitions.
pub const OPTION_NAME: &str = "cptg_settings";

/// Settings group the form submits into.
pub const SETTINGS_GROUP: &str = "cptg_plugin";

/// Settings section containing the three fields.
pub const SETTINGS_SECTION: &str = "cptg_plugin_section";

/// Admin page slug.
pub const MENU_SLUG: &str = "cpt_generator";

/// Form field carrying the raw type key.
pub const FIELD_TYPE_KEY: &str = "cptg_post_type";
/// Form field carrying the raw singular label.
pub const FIELD_SINGULAR_LABEL: &str = "cptg_singular_name";
/// Form field carrying the raw plural label.
pub const FIELD_PLURAL_LABEL: &str = "cptg_plural_name";

/// Host limit on the identifier length, in characters.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Current version of the persisted settings document.
pub const DOCUMENT_VERSION: u32 = 1;

/// Message ids looked up through the localizer.
pub mod messages {
    pub const ADD_NEW: &str = "Add New";
    /// Prefix of the "All {plural}" label.
    pub const ALL_ITEMS_PREFIX: &str = "All ";
    pub const MENU_TITLE: &str = "CPT Generator";
    pub const PAGE_TITLE: &str = "Custom Post Type Generator";
    pub const SECTION_TITLE: &str = "Create a New Custom Post Type";
    pub const SECTION_DESCRIPTION: &str = "Fill in the details to create a new custom post type.";
    pub const FIELD_TYPE_KEY: &str = "Post Type";
    pub const FIELD_SINGULAR_LABEL: &str = "Singular Name";
    pub const FIELD_PLURAL_LABEL: &str = "Plural Name";
    pub const SUBMIT: &str = "Save Settings";
    pub const LISTING_TITLE: &str = "Registered Custom Post Types";
    pub const LISTING_EMPTY: &str = "No custom post types found.";
}
