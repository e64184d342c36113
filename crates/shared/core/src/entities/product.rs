use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;
use crate::values::Price;

/// Unique identifier for a catalog product, assigned by the server
pub type ProductId = i64;

/// Full catalog product as served by the catalog service
///
/// Wire shape: `{ id, title, price, description, category, image }` with
/// `price` carried as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Extract the editable fields, e.g. to seed an edit form
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

/// Create payload: every product field except the server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        price: Price,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: image.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate field constraints before the draft is sent anywhere
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Url::parse(&self.image).map_err(|e| ValidationError::InvalidImageUrl(e.to_string()))?;
        Ok(())
    }

    /// Attach the server-assigned identifier, producing a full product
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
        }
    }
}

/// Partial update payload; unset fields are omitted from the wire body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }

    /// Shallow merge: set fields win, unset fields keep the previous value.
    /// The identifier is never patched.
    pub fn apply_to(&self, product: &Product) -> Product {
        Product {
            id: product.id,
            title: self.title.clone().unwrap_or_else(|| product.title.clone()),
            price: self.price.unwrap_or(product.price),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| product.description.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| product.category.clone()),
            image: self.image.clone().unwrap_or_else(|| product.image.clone()),
        }
    }
}
