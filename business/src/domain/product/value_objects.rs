use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::ProductError;

/// Sales tax applied on top of the unit price, in percent.
pub const TAX_RATE_PERCENT: i64 = 9;
/// Upper bound for a unit price in the smallest currency unit. Keeps taxed
/// prices and line totals within `i64`.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000_000;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Lowercase ASCII words joined by single dashes.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Unit price including tax, rounded half-up to the unit.
pub fn price_with_tax(unit_price: i64) -> i64 {
    (unit_price * (100 + TAX_RATE_PERCENT) + 50).div_euclid(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrdering {
    #[default]
    Title,
    UnitPriceAsc,
    UnitPriceDesc,
    LastUpdateAsc,
    LastUpdateDesc,
}

impl std::fmt::Display for ProductOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductOrdering::Title => write!(f, "title"),
            ProductOrdering::UnitPriceAsc => write!(f, "unit_price"),
            ProductOrdering::UnitPriceDesc => write!(f, "-unit_price"),
            ProductOrdering::LastUpdateAsc => write!(f, "last_update"),
            ProductOrdering::LastUpdateDesc => write!(f, "-last_update"),
        }
    }
}

impl std::str::FromStr for ProductOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ProductOrdering::Title),
            "unit_price" => Ok(ProductOrdering::UnitPriceAsc),
            "-unit_price" => Ok(ProductOrdering::UnitPriceDesc),
            "last_update" => Ok(ProductOrdering::LastUpdateAsc),
            "-last_update" => Ok(ProductOrdering::LastUpdateDesc),
            _ => Err(format!("Invalid product ordering: {}", s)),
        }
    }
}

/// Catalog listing criteria. All filters are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub collection_id: Option<Uuid>,
    pub unit_price_gt: Option<i64>,
    pub unit_price_lt: Option<i64>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
    pub ordering: ProductOrdering,
}

impl ProductFilter {
    pub fn validate(&self) -> Result<(), ProductError> {
        if let (Some(gt), Some(lt)) = (self.unit_price_gt, self.unit_price_lt)
            && gt >= lt
        {
            return Err(ProductError::InvalidPriceRange);
        }
        Ok(())
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
