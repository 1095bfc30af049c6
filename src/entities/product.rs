//! Products and their size/color variants

use crate::core::error::ValidationError;
use crate::core::field::{FieldFormat, ToFieldValue};
use crate::core::validation::{Validate, check, filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sizes a variant may be offered in
pub const SIZES: [&str; 5] = ["S", "M", "L", "XL", "XXL"];

crate::impl_record!(
    Product,
    "product",
    "products",
    search: ["name"],
    {
        name: String,
        category: String,
        sub_category: String,
        #[serde(default)]
        description: String,
        price: f64,
        quantity: i64,
        quality: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
    {
        #[serde(default)]
        images: Vec<String>,
        #[serde(default)]
        variants: Vec<Variant>,
    }
);

/// One purchasable size/color combination of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: u64,
    pub size: String,
    /// Hex color code
    pub color: String,
    pub color_name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Variant {
    fn validate_into(&self, index: usize, errors: &mut ValidationError) {
        let field = |name: &str| format!("variants[{}].{}", index, name);
        let sizes = SIZES.iter().map(|s| s.to_string()).collect();

        check(errors, &field("size"), &self.size.to_field_value(), validators::in_list(sizes));
        check(
            errors,
            &field("color"),
            &self.color.to_field_value(),
            validators::format(FieldFormat::HexColor),
        );
        check(errors, &field("price"), &self.price.to_field_value(), validators::positive());
        check(
            errors,
            &field("quantity"),
            &self.quantity.to_field_value(),
            validators::non_negative(),
        );
        for image in &self.images {
            check(
                errors,
                &field("images"),
                &image.to_field_value(),
                validators::format(FieldFormat::Url),
            );
        }
    }
}

impl Product {
    /// Build a product from the variant editor
    ///
    /// Price, quantity and images come from the first variant.
    pub fn from_variants(
        name: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        quality: impl Into<String>,
        variants: Vec<Variant>,
    ) -> Result<Self, ValidationError> {
        let first = variants
            .first()
            .ok_or_else(|| ValidationError::single("variants", "Please add at least one variant"))?;

        let now = Utc::now();
        let mut product = Product::new(
            name.into(),
            category.into(),
            sub_category.into(),
            String::new(),
            first.price,
            first.quantity,
            quality.into(),
            now,
            now,
        );
        product.images = first.images.clone();
        product.variants = variants;
        Ok(product)
    }

    /// The product's variants, or a single default variant built from its
    /// own price, quantity and images when it has none
    pub fn variants_or_default(&self) -> Vec<Variant> {
        if !self.variants.is_empty() {
            return self.variants.clone();
        }

        vec![Variant {
            id: self.id.get(),
            size: "M".to_string(),
            color: "#000000".to_string(),
            color_name: "Black".to_string(),
            price: self.price,
            quantity: self.quantity,
            images: self.images.clone(),
        }]
    }

    /// Mark the product as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Validate for Product {
    fn normalize(&mut self) {
        self.name = filters::trim(&self.name);
        self.category = filters::trim(&self.category);
        self.sub_category = filters::trim(&self.sub_category);
        self.quality = filters::trim(&self.quality);
        self.images = filters::trim_non_empty(&self.images);
        for variant in &mut self.variants {
            variant.images = filters::trim_non_empty(&variant.images);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check(&mut errors, "name", &self.name.to_field_value(), validators::required());
        check(
            &mut errors,
            "category",
            &self.category.to_field_value(),
            validators::required(),
        );
        check(
            &mut errors,
            "sub_category",
            &self.sub_category.to_field_value(),
            validators::required(),
        );
        check(&mut errors, "price", &self.price.to_field_value(), validators::positive());
        check(
            &mut errors,
            "quantity",
            &self.quantity.to_field_value(),
            validators::non_negative(),
        );
        for image in &self.images {
            check(
                &mut errors,
                "images",
                &image.to_field_value(),
                validators::format(FieldFormat::Url),
            );
        }
        for (index, variant) in self.variants.iter().enumerate() {
            variant.validate_into(index, &mut errors);
        }

        errors.into_result()
    }
}
