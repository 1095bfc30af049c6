//! Palette colors offered for product variants

use crate::core::error::ValidationError;
use crate::core::field::{FieldFormat, ToFieldValue};
use crate::core::validation::{Validate, check, filters, validators};
use chrono::{DateTime, Utc};

crate::impl_record!(
    Color,
    "color",
    "colors",
    search: ["name", "color_code"],
    {
        name: String,
        color_code: String,
        #[serde(default = "default_active")]
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }
);

fn default_active() -> bool {
    true
}

impl Color {
    /// An active color created now
    pub fn named(name: impl Into<String>, color_code: impl Into<String>) -> Self {
        let now = Utc::now();
        Color::new(name.into(), color_code.into(), true, now, now)
    }

    /// Flip between active and inactive
    pub fn toggle_status(&mut self) {
        self.is_active = !self.is_active;
        self.updated_at = Utc::now();
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}

/// Colors that can currently be picked for a variant
pub fn active_colors(colors: &[Color]) -> Vec<Color> {
    colors.iter().filter(|c| c.is_active).cloned().collect()
}

impl Validate for Color {
    fn normalize(&mut self) {
        self.name = filters::trim(&self.name);
        self.color_code = filters::lowercase(&filters::trim(&self.color_code));
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(&mut errors, "name", &self.name.to_field_value(), validators::required());
        check(
            &mut errors,
            "color_code",
            &self.color_code.to_field_value(),
            validators::required(),
        );
        check(
            &mut errors,
            "color_code",
            &self.color_code.to_field_value(),
            validators::format(FieldFormat::HexColor),
        );
        errors.into_result()
    }
}
