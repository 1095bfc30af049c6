//! Subscription packages sold to retailers

use crate::core::error::ValidationError;
use crate::core::field::ToFieldValue;
use crate::core::validation::{Validate, check, filters, validators};

crate::impl_record!(
    Package,
    "package",
    "packages",
    search: ["title", "description"],
    {
        title: String,
        #[serde(default)]
        description: String,
        price: f64,
        duration: String,
        #[serde(default)]
        popular: bool,
    },
    {
        #[serde(default)]
        features: Vec<String>,
    }
);

impl Package {
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

impl Validate for Package {
    fn normalize(&mut self) {
        self.title = filters::trim(&self.title);
        self.description = filters::trim(&self.description);
        self.duration = filters::trim(&self.duration);
        self.features = filters::trim_non_empty(&self.features);
        self.price = filters::round_decimals(self.price, 2);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(&mut errors, "title", &self.title.to_field_value(), validators::required());
        check(&mut errors, "price", &self.price.to_field_value(), validators::positive());
        check(
            &mut errors,
            "duration",
            &self.duration.to_field_value(),
            validators::required(),
        );
        errors.into_result()
    }
}
