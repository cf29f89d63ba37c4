/*
 * Responsibility
 * - Wire types for the /drinks endpoints
 * - Two representations: "short" (color/parts only, public menu) and
 *   "long" (full recipe, baristas and managers)
 */
use serde::{Deserialize, Serialize};

/// One recipe line as stored and as served in the long representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public menu view of a recipe line: color and proportion, no names.
#[derive(Debug, Clone, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

impl From<&Ingredient> for ShortIngredient {
    fn from(i: &Ingredient) -> Self {
        Self {
            color: i.color.clone(),
            parts: i.parts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

#[derive(Debug, Serialize)]
pub struct DrinkLong {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl CreateDrinkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_title(&self.title)?;
        validate_recipe(&self.recipe)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateDrinkRequest {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

impl UpdateDrinkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(recipe) = &self.recipe {
            validate_recipe(recipe)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("title must not be empty");
    }
    Ok(())
}

fn validate_recipe(recipe: &[Ingredient]) -> Result<(), &'static str> {
    if recipe.is_empty() {
        return Err("recipe must contain at least one ingredient");
    }
    if recipe.iter().any(|i| i.parts == 0) {
        return Err("ingredient parts must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Ingredient {
        Ingredient {
            name: "milk".into(),
            color: "white".into(),
            parts: 3,
        }
    }

    #[test]
    fn create_request_rejects_empty_title() {
        let req = CreateDrinkRequest {
            title: "  ".into(),
            recipe: vec![milk()],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_rejects_empty_recipe() {
        let req = CreateDrinkRequest {
            title: "Flat White".into(),
            recipe: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_allows_partial_payload() {
        let req = UpdateDrinkRequest {
            title: Some("Cortado".into()),
            recipe: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn short_view_drops_ingredient_names() {
        let short = ShortIngredient::from(&milk());
        assert_eq!(short.color, "white");
        assert_eq!(short.parts, 3);
    }
}
