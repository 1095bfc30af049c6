//! Product categories and their sub-categories

use crate::core::entity::RecordId;
use crate::core::error::{CatalogError, ValidationError};
use crate::core::field::ToFieldValue;
use crate::core::validation::{Validate, check, filters, validators};
use crate::storage::collection::Collection;

crate::impl_record!(
    Category,
    "category",
    "categories",
    search: ["name"],
    {
        name: String,
        #[serde(default)]
        description: String,
    }
);

crate::impl_record!(
    SubCategory,
    "sub_category",
    "sub_categories",
    search: ["name"],
    {
        name: String,
        parent_category: String,
    }
);

impl Validate for Category {
    fn normalize(&mut self) {
        self.name = filters::trim(&self.name);
        self.description = filters::trim(&self.description);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(&mut errors, "name", &self.name.to_field_value(), validators::required());
        check(
            &mut errors,
            "name",
            &self.name.to_field_value(),
            validators::string_length(1, 100),
        );
        errors.into_result()
    }
}

impl Validate for SubCategory {
    fn normalize(&mut self) {
        self.name = filters::trim(&self.name);
        self.parent_category = filters::trim(&self.parent_category);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(&mut errors, "name", &self.name.to_field_value(), validators::required());
        check(
            &mut errors,
            "parent_category",
            &self.parent_category.to_field_value(),
            validators::required(),
        );
        errors.into_result()
    }
}

/// Sub-categories whose parent is `category`, in collection order
pub fn sub_categories_of<'a>(
    sub_categories: &'a [SubCategory],
    category: &str,
) -> Vec<&'a SubCategory> {
    sub_categories
        .iter()
        .filter(|sub| sub.parent_category == category)
        .collect()
}

/// Delete a category together with all of its sub-categories
pub fn delete_category(
    categories: &mut Collection<Category>,
    sub_categories: &mut Collection<SubCategory>,
    id: RecordId,
) -> Result<(Category, Vec<SubCategory>), CatalogError> {
    let category = categories.delete(id)?;

    let orphan_ids: Vec<RecordId> = sub_categories
        .iter()
        .filter(|sub| sub.parent_category == category.name)
        .map(|sub| sub.id)
        .collect();

    let mut removed = Vec::with_capacity(orphan_ids.len());
    for orphan in orphan_ids {
        removed.push(sub_categories.delete(orphan)?);
    }

    tracing::debug!(
        category = %category.name,
        sub_categories = removed.len(),
        "deleted category with its sub-categories"
    );
    Ok((category, removed))
}
