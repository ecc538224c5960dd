//! Transaction categories and the glyph used to display them.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The ID the data service assigns to a category.
pub type CategoryId = String;

/// Whether a category applies to money going out or coming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CategoryType {
    /// Code 1.
    Expense,
    /// Code 2.
    Income,
}

impl CategoryType {
    /// The numeric code used by the data service.
    pub fn code(self) -> i32 {
        match self {
            CategoryType::Expense => 1,
            CategoryType::Income => 2,
        }
    }
}

impl TryFrom<i32> for CategoryType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CategoryType::Expense),
            2 => Ok(CategoryType::Income),
            other => Err(format!("{other} is not a valid category type")),
        }
    }
}

impl From<CategoryType> for i32 {
    fn from(category_type: CategoryType) -> Self {
        category_type.code()
    }
}

/// A category that can be assigned to an expense or income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The data service's ID for the category.
    pub id: CategoryId,
    /// The display name, e.g. "Groceries".
    pub name: String,
    /// An emoji or short text shown next to the name. May be empty.
    #[serde(default)]
    pub icon: String,
    /// A CSS colour for the category's glyph.
    #[serde(default)]
    pub color: String,
    /// Whether the category is for expenses or income.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// The category summary embedded in a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// The data service's ID for the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
    /// An emoji or short text shown next to the name. May be empty.
    #[serde(default)]
    pub icon: String,
    /// A CSS colour for the category's glyph.
    #[serde(default)]
    pub color: String,
}

const FALLBACK_COLOR: &str = "#6B7280";

/// Returns `color` if it is a CSS hex colour like "#8B5CF6", otherwise gray.
///
/// Category colours come from the data service and are interpolated into a
/// style attribute, so anything else is discarded.
pub fn sanitize_color(color: &str) -> &str {
    let Some(digits) = color.strip_prefix('#') else {
        return FALLBACK_COLOR;
    };

    if matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        color
    } else {
        FALLBACK_COLOR
    }
}

/// The first grapheme of `name`, upper-cased, or "?" for an empty name.
pub fn initial(name: &str) -> String {
    name.trim()
        .graphemes(true)
        .next()
        .map(|grapheme| grapheme.to_uppercase())
        .unwrap_or_else(|| "?".to_owned())
}

/// A round badge with the category's initial on its colour.
pub fn category_icon(name: &str, color: &str) -> Markup {
    html! {
        div
            class="flex items-center justify-center w-10 h-10 shrink-0 rounded-full text-white font-semibold"
            style={ "background-color: " (sanitize_color(color)) ";" }
            title=(name)
        {
            (initial(name))
        }
    }
}
