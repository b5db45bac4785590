//! Paragraph tables for each draft language

use super::lang::Lang;

/// Ordered paragraph templates for one language
#[derive(Debug, Clone, Copy)]
pub struct DraftTemplate {
    pub lang: Lang,
    pub paragraphs: &'static [&'static str],
}

pub const TEMPLATES: &[DraftTemplate] = &[
    DraftTemplate {
        lang: Lang::En,
        paragraphs: &[
            "Hello {name},",
            "Thank you for your inquiry regarding \"{reason}\".",
            "Our team will review your request for {action} and get back to you shortly.",
            "If you have any urgent questions, please feel free to call us directly.",
            "Best regards,\nOur Team",
        ],
    },
    DraftTemplate {
        lang: Lang::Lt,
        paragraphs: &[
            "Sveiki {name},",
            "Dėkojame už jūsų užklausą dėl \"{reason}\".",
            "Mūsų komanda peržiūrės jūsų prašymą ir susisieks su jumis artimiausiu metu.",
            "Jei turite skubų klausimą, galite skambinti mums tiesiogiai.",
            "Pagarbiai,\nMūsų komanda",
        ],
    },
];

impl DraftTemplate {
    /// Template for `lang`, falling back to English
    pub fn for_lang(lang: Lang) -> &'static DraftTemplate {
        TEMPLATES
            .iter()
            .find(|t| t.lang == lang)
            .unwrap_or(&TEMPLATES[0])
    }
}
