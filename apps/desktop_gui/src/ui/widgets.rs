use shared::domain::LanguageCode;

pub const SELECTOR_WIDTH: f32 = 160.0;

/// Combo box over the fixed language table. Returns the new choice when the
/// user picks a different language.
pub fn language_selector(
    ui: &mut egui::Ui,
    id_salt: &'static str,
    selected: LanguageCode,
) -> Option<LanguageCode> {
    let mut current = selected;
    egui::ComboBox::from_id_salt(id_salt)
        .width(SELECTOR_WIDTH)
        .selected_text(current.display_name())
        .show_ui(ui, |ui| {
            for language in LanguageCode::ALL {
                ui.selectable_value(&mut current, *language, language.display_name());
            }
        });
    (current != selected).then_some(current)
}

pub fn translate_button_label(in_flight: bool) -> &'static str {
    if in_flight {
        "Translating..."
    } else {
        "Translate"
    }
}
