use cptg::domain::CandidateDefinition;
use cptg::kernel::i18n::{IdentityLocalizer, MessageCatalog};
use cptg::{FromFormFields, SettingsForm};
use pretty_assertions::assert_eq;

#[test]
fn descriptor_lists_the_three_fields() {
    let form = SettingsForm::new("cptg_settings", &IdentityLocalizer);

    assert_eq!(form.option_group, "cptg_plugin");
    assert_eq!(form.menu_slug, "cpt_generator");
    assert_eq!(form.page_title, "Custom Post Type Generator");
    assert_eq!(form.section.id, "cptg_plugin_section");

    let names: Vec<_> = form.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "cptg_settings[cptg_post_type]",
            "cptg_settings[cptg_singular_name]",
            "cptg_settings[cptg_plural_name]",
        ]
    );
    assert_eq!(form.fields[0].label, "Post Type");
    assert_eq!(form.submit_label, "Save Settings");
    assert_eq!(form.listing.empty, "No custom post types found.");
}

#[test]
fn descriptor_text_is_localized() {
    let catalog = MessageCatalog::new()
        .with("Post Type", "Beitragstyp")
        .with("Registered Custom Post Types", "Registrierte Beitragstypen");
    let form = SettingsForm::new("cptg_settings", &catalog);

    assert_eq!(form.fields[0].label, "Beitragstyp");
    assert_eq!(form.fields[1].label, "Singular Name");
    assert_eq!(form.listing.title, "Registrierte Beitragstypen");
}

#[test]
fn descriptor_serializes_to_json() {
    let form = SettingsForm::new("cptg_settings", &IdentityLocalizer);
    let json = serde_json::to_value(&form).expect("json");
    assert_eq!(json["option_name"], "cptg_settings");
    assert_eq!(json["fields"][2]["id"], "cptg_plural_name");
}

#[test]
fn form_fields_build_a_candidate() {
    let candidate = CandidateDefinition::from_form_fields(
        [
            ("cptg_settings[cptg_post_type]", "Movie"),
            ("cptg_singular_name", "Movie"),
            ("cptg_settings[cptg_plural_name]", "Movies"),
        ],
        "cptg_settings",
    );
    assert_eq!(candidate, CandidateDefinition::new("Movie", "Movie", "Movies"));
}

#[test]
fn missing_fields_are_empty_and_last_value_wins() {
    let candidate = CandidateDefinition::from_form_fields(
        vec![
            ("cptg_post_type".to_owned(), "first".to_owned()),
            ("cptg_post_type".to_owned(), "second".to_owned()),
            ("unrelated".to_owned(), "x".to_owned()),
        ],
        "cptg_settings",
    );
    assert_eq!(candidate, CandidateDefinition::new("second", "", ""));
}
