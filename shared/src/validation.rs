use std::borrow::Cow;
use std::collections::HashSet;
use validator::ValidationError;

use crate::menu_catalog::MenuCategory;
use crate::roulette_config::RouletteConfig;

pub fn validate_category(category: &MenuCategory) -> Result<(), ValidationError> {
    if category.name.trim().is_empty() {
        return Err(ValidationError::new("empty_category_name"));
    }
    if category.items.is_empty() {
        let mut err = ValidationError::new("empty_category");
        err.add_param(Cow::from("name"), &category.name);
        return Err(err);
    }
    if category.items.iter().any(|item| item.trim().is_empty()) {
        let mut err = ValidationError::new("blank_menu_item");
        err.add_param(Cow::from("name"), &category.name);
        return Err(err);
    }
    Ok(())
}

pub fn validate_catalog(categories: &[MenuCategory]) -> Result<(), ValidationError> {
    if categories.is_empty() {
        return Err(ValidationError::new("empty_catalog"));
    }

    let mut seen = HashSet::new();
    for category in categories {
        validate_category(category)?;
        if !seen.insert(category.name.as_str()) {
            let mut err = ValidationError::new("duplicate_category");
            err.add_param(Cow::from("name"), &category.name);
            return Err(err);
        }
    }
    Ok(())
}

pub fn validate_turn_range(config: &RouletteConfig) -> Result<(), ValidationError> {
    if config.max_extra_turns < config.min_extra_turns {
        return Err(ValidationError::new("inverted_turn_range"));
    }
    Ok(())
}
