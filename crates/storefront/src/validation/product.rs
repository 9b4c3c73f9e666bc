//! The product form schema.

use std::collections::HashMap;

use super::{FieldSchema, Rule, Schema, Validation, Violation};
use crate::model::{Category, CategoryId, Product, ProductCreate};

pub const NAME_MAX_LEN: usize = 255;
pub const PRICE_MIN: f64 = 1.0;
pub const PRICE_MAX: f64 = 1000.0;

/// Raw text of the product form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub price: String,
    pub category_id: String,
}

impl ProductFormData {
    /// Pre-fills the form from a stored product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category_id: product.category_id.to_string(),
        }
    }

    fn values(&self) -> HashMap<&str, String> {
        HashMap::from([
            ("name", self.name.clone()),
            ("price", self.price.clone()),
            ("categoryId", self.category_id.clone()),
        ])
    }
}

fn schema(category_rules: Vec<Rule>) -> Schema {
    Schema::new(vec![
        FieldSchema::new("name", "Name", vec![Rule::Required, Rule::MaxLength(NAME_MAX_LEN)]),
        FieldSchema::new(
            "price",
            "Price",
            vec![
                Rule::Required,
                Rule::Numeric,
                Rule::Min(PRICE_MIN),
                Rule::Max(PRICE_MAX),
            ],
        ),
        FieldSchema::new("categoryId", "Category", category_rules),
    ])
}

/// Schema for the product form. The category must be one of `categories`.
pub fn product_schema(categories: &[Category]) -> Schema {
    let ids = categories.iter().map(|c| c.id.to_string()).collect();
    schema(vec![Rule::Required, Rule::OneOf(ids)])
}

/// Validates the form and builds the POST/PUT payload. The name is trimmed.
pub fn validate_product_form(
    data: &ProductFormData,
    categories: &[Category],
) -> Validation<ProductCreate> {
    if let Err(violation) = product_schema(categories).check(&data.values()) {
        return violation.into();
    }

    let price = data.price.trim().parse::<f64>();
    let category_id = data.category_id.trim().parse::<u32>();
    match (price, category_id) {
        (Ok(price), Ok(category_id)) => Validation::Valid(ProductCreate {
            name: data.name.trim().to_string(),
            price,
            category_id: CategoryId(category_id),
        }),
        (Err(_), _) => Validation::Invalid {
            field: "price",
            reason: "Price is required".to_string(),
        },
        (_, Err(_)) => Validation::Invalid {
            field: "categoryId",
            reason: "Category is required".to_string(),
        },
    }
}

/// Checks a typed payload against the same name and price rules.
///
/// Whether the category exists is up to the caller.
pub fn check_product(params: &ProductCreate) -> Result<(), Violation> {
    let values = HashMap::from([
        ("name", params.name.clone()),
        ("price", params.price.to_string()),
        ("categoryId", params.category_id.to_string()),
    ]);
    schema(vec![Rule::Required]).check(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: CategoryId(1),
                name: "Dairy".into(),
            },
            Category {
                id: CategoryId(2),
                name: "Bakery".into(),
            },
        ]
    }

    fn form(name: &str, price: &str, category_id: &str) -> ProductFormData {
        ProductFormData {
            name: name.into(),
            price: price.into(),
            category_id: category_id.into(),
        }
    }

    fn reason(data: &ProductFormData) -> String {
        match validate_product_form(data, &categories()) {
            Validation::Invalid { reason, .. } => reason,
            Validation::Valid(payload) => panic!("Expected a violation, got {payload:?}"),
        }
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(reason(&form("", "10", "1")), "Name is required");
        assert_eq!(reason(&form("   ", "10", "1")), "Name is required");
        assert!(reason(&form(&"a".repeat(256), "10", "1")).contains("255"));

        let ok = validate_product_form(&form(&"a".repeat(255), "10", "1"), &categories());
        assert!(matches!(ok, Validation::Valid(_)));
    }

    #[test]
    fn test_price_rules() {
        assert!(reason(&form("Milk", "", "1")).contains("required"));
        assert!(reason(&form("Milk", "abc", "1")).contains("required"));
        assert_eq!(reason(&form("Milk", "0", "1")), "Price must be at least 1");
        assert_eq!(reason(&form("Milk", "-5", "1")), "Price must be at least 1");
        assert!(reason(&form("Milk", "1001", "1")).contains("1000"));
    }

    #[test]
    fn test_category_must_exist() {
        assert_eq!(reason(&form("Milk", "10", "")), "Category is required");
        assert_eq!(reason(&form("Milk", "10", "99")), "Category is required");
    }

    #[test]
    fn test_name_is_checked_before_price() {
        let violation = validate_product_form(&form("", "", ""), &categories());
        assert!(matches!(violation, Validation::Invalid { field: "name", .. }));
    }

    #[test]
    fn test_valid_form_builds_trimmed_payload() {
        let payload = validate_product_form(&form("  Milk ", " 5 ", "2"), &categories())
            .into_result()
            .unwrap();
        assert_eq!(
            payload,
            ProductCreate {
                name: "Milk".into(),
                price: 5.0,
                category_id: CategoryId(2),
            }
        );
    }

    #[test]
    fn test_prefilled_form_validates() {
        let product = Product::new(crate::model::ProductId(3), "Rye", 4.5, CategoryId(2));
        let data = ProductFormData::from_product(&product);
        assert_eq!(data.price, "4.5");
        let payload = validate_product_form(&data, &categories()).into_result().unwrap();
        assert_eq!(payload, ProductCreate::from(&product));
    }

    #[test]
    fn test_check_product_ignores_category_reference() {
        let params = ProductCreate {
            name: "Milk".into(),
            price: 2000.0,
            category_id: CategoryId(42),
        };
        assert_eq!(check_product(&params).unwrap_err().field, "price");
    }
}
