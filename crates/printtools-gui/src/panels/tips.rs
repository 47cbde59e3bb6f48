use printtools_core::i18n::LanguageContext;

const TIP_KEYS: [&str; 5] = [
    "tipsActualSize",
    "tipsDefaultScale",
    "tipsNoMargin",
    "tipsPrinterMarginWarning",
    "tipsPaperMatch",
];

pub(super) fn tips_section(ui: &mut egui::Ui, lang: &LanguageContext) {
    egui::CollapsingHeader::new(lang.t("tipsTitle"))
        .id_salt("printing_tips")
        .default_open(true)
        .show(ui, |ui| {
            for key in TIP_KEYS {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(lang.t(key));
                });
            }
        });
}
