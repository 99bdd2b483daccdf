//! UI string tables and language selection.
//!
//! Tables are static and resolved by [`Language::strings`]. Each language
//! also carries the default option set seeded when nothing is persisted.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
}

/// Every user-visible string the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub page_title: &'static str,
    pub subtitle: &'static str,
    pub spin: &'static str,
    pub heading_add_options: &'static str,
    pub input_placeholder: &'static str,
    pub add: &'static str,
    pub heading_actions: &'static str,
    pub shuffle: &'static str,
    pub clear_all: &'static str,
    pub auto_remove: &'static str,
    pub heading_options: &'static str,
    /// Two lines: the list is empty / add at least two.
    pub empty_state: [&'static str; 2],
    pub canvas_empty: &'static str,
    pub result_prefix: &'static str,
    pub confirm_clear: &'static str,
}

const EN: Strings = Strings {
    page_title: "SpinSelector - Let fate decide!",
    subtitle: "Let fate decide!",
    spin: "SPIN",
    heading_add_options: "Add Options",
    input_placeholder: "Enter new option...",
    add: "Add",
    heading_actions: "Actions",
    shuffle: "Shuffle",
    clear_all: "Clear All",
    auto_remove: "Auto-remove after spin",
    heading_options: "Options",
    empty_state: ["No options available.", "Add at least 2 options!"],
    canvas_empty: "Add options",
    result_prefix: "",
    confirm_clear: "Do you really want to delete all options?",
};

const DE: Strings = Strings {
    page_title: "SpinSelector - Lass das Schicksal entscheiden!",
    subtitle: "Lass das Schicksal entscheiden!",
    spin: "DREHEN",
    heading_add_options: "Optionen hinzufügen",
    input_placeholder: "Neue Option eingeben...",
    add: "Hinzufügen",
    heading_actions: "Aktionen",
    shuffle: "Mischen",
    clear_all: "Alle löschen",
    auto_remove: "Automatisch entfernen nach Drehen",
    heading_options: "Optionen",
    empty_state: ["Keine Optionen vorhanden.", "Füge mindestens 2 Optionen hinzu!"],
    canvas_empty: "Füge Optionen hinzu",
    result_prefix: "",
    confirm_clear: "Möchtest du wirklich alle Optionen löschen?",
};

const FR: Strings = Strings {
    page_title: "SpinSelector - Laissez le destin décider!",
    subtitle: "Laissez le destin décider!",
    spin: "TOURNER",
    heading_add_options: "Ajouter des options",
    input_placeholder: "Entrez une nouvelle option...",
    add: "Ajouter",
    heading_actions: "Actions",
    shuffle: "Mélanger",
    clear_all: "Tout effacer",
    auto_remove: "Supprimer automatiquement après le tour",
    heading_options: "Options",
    empty_state: ["Aucune option disponible.", "Ajoutez au moins 2 options!"],
    canvas_empty: "Ajoutez des options",
    result_prefix: "",
    confirm_clear: "Voulez-vous vraiment supprimer toutes les options?",
};

const ES: Strings = Strings {
    page_title: "SpinSelector - ¡Deja que el destino decida!",
    subtitle: "¡Deja que el destino decida!",
    spin: "GIRAR",
    heading_add_options: "Añadir opciones",
    input_placeholder: "Ingrese nueva opción...",
    add: "Añadir",
    heading_actions: "Acciones",
    shuffle: "Mezclar",
    clear_all: "Borrar todo",
    auto_remove: "Eliminar automáticamente después de girar",
    heading_options: "Opciones",
    empty_state: ["No hay opciones disponibles.", "¡Añade al menos 2 opciones!"],
    canvas_empty: "Añade opciones",
    result_prefix: "",
    confirm_clear: "¿Realmente quieres eliminar todas las opciones?",
};

impl Language {
    pub const ALL: [Self; 4] = [Self::En, Self::De, Self::Fr, Self::Es];

    /// Two-letter code used for storage and the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Short label for the language switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Es => "ES",
        }
    }

    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let code = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Pick the active language: stored choice, then the browser's
    /// `navigator.language` prefix (`"de-AT"` -> `De`), then English.
    #[must_use]
    pub fn detect(stored: Option<&str>, browser: Option<&str>) -> Self {
        stored
            .and_then(Self::from_code)
            .or_else(|| browser.and_then(|tag| tag.get(..2)).and_then(Self::from_code))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::De => &DE,
            Self::Fr => &FR,
            Self::Es => &ES,
        }
    }

    /// Options seeded on first start.
    #[must_use]
    pub fn default_options(self) -> &'static [&'static str] {
        match self {
            Self::En => &["Pizza", "Sushi", "Burger", "Pasta", "Salad", "Tacos"],
            Self::De => &["Pizza", "Sushi", "Burger", "Nudeln", "Salat", "Tacos"],
            Self::Fr => &["Pizza", "Sushi", "Burger", "Pâtes", "Salade", "Tacos"],
            Self::Es => &["Pizza", "Sushi", "Hamburguesa", "Pasta", "Ensalada", "Tacos"],
        }
    }
}
