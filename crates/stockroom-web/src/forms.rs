//! Form body DTOs.
//!
//! Field names mirror the HTML form inputs. Text fields default to the
//! empty string so a missing input surfaces as a validation error rather
//! than a request rejection; id fields are required.

use serde::Deserialize;
use uuid::Uuid;

use stockroom_service::category::CategoryFields;
use stockroom_service::item::ItemFields;

/// Category create/update form body.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFormBody {
    /// The `categoryName` input.
    #[serde(rename = "categoryName", default)]
    pub category_name: String,
    /// The `description` input.
    #[serde(default)]
    pub description: String,
}

impl CategoryFormBody {
    /// Convert into the service-layer field struct.
    pub fn into_fields(self) -> CategoryFields {
        CategoryFields {
            name: self.category_name,
            description: self.description,
        }
    }
}

/// Category delete form body. The delete statement is keyed off this id,
/// not the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDeleteBody {
    /// The `categoryId` hidden input.
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
}

/// Item create form body.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFormBody {
    /// The `itemName` input.
    #[serde(rename = "itemName", default)]
    pub item_name: String,
    /// The `description` input.
    #[serde(default)]
    pub description: String,
    /// The `price` input, raw text.
    #[serde(default)]
    pub price: String,
    /// The `quantity` input, raw text.
    #[serde(default)]
    pub quantity: String,
}

impl ItemFormBody {
    /// Convert into the service-layer field struct.
    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            name: self.item_name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Item update form body: the item fields plus the owning category id,
/// taken from the `categoryID` hidden input to allow re-assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemUpdateBody {
    /// The `itemName` input.
    #[serde(rename = "itemName", default)]
    pub item_name: String,
    /// The `description` input.
    #[serde(default)]
    pub description: String,
    /// The `price` input, raw text.
    #[serde(default)]
    pub price: String,
    /// The `quantity` input, raw text.
    #[serde(default)]
    pub quantity: String,
    /// The `categoryID` hidden input.
    #[serde(rename = "categoryID")]
    pub category_id: Uuid,
}

impl ItemUpdateBody {
    /// Convert into the service-layer field struct, dropping the id.
    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            name: self.item_name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
