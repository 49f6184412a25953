use std::{
    collections::HashSet,
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    str::FromStr,
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::{
    core::{Price, Rgb8},
    error::{StoreError, StoreResult},
};

/// Closed set of catalog colors, in color-bar order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    /// Đen.
    Black,
    /// Trắng.
    White,
    /// Be.
    Beige,
    /// Xám.
    Gray,
    /// Navy.
    Navy,
    /// Olive.
    Olive,
}

impl ColorId {
    /// Every color in display order.
    pub const ALL: [ColorId; 6] = [
        ColorId::Black,
        ColorId::White,
        ColorId::Beige,
        ColorId::Gray,
        ColorId::Navy,
        ColorId::Olive,
    ];

    /// Stable identifier used in data files and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Beige => "beige",
            Self::Gray => "gray",
            Self::Navy => "navy",
            Self::Olive => "olive",
        }
    }

    /// Storefront display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Đen",
            Self::White => "Trắng",
            Self::Beige => "Be",
            Self::Gray => "Xám",
            Self::Navy => "Navy",
            Self::Olive => "Olive",
        }
    }

    /// Swatch color shown in the color bar.
    pub fn hex(self) -> Rgb8 {
        match self {
            Self::Black => Rgb8::new(0x11, 0x11, 0x11),
            Self::White => Rgb8::new(0xff, 0xff, 0xff),
            Self::Beige => Rgb8::new(0xd7, 0xc4, 0xa8),
            Self::Gray => Rgb8::new(0x9a, 0x9a, 0x9a),
            Self::Navy => Rgb8::new(0x1e, 0x33, 0x5a),
            Self::Olive => Rgb8::new(0x6b, 0x7a, 0x4c),
        }
    }
}

impl FromStr for ColorId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| StoreError::validation(format!("unknown color id '{s}'")))
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Closed set of garment categories, in slider order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Áo Thun.
    #[default]
    Tshirt,
    /// Áo Polo.
    Polo,
    /// Quần Dài.
    Pants,
    /// Quần Short.
    Shorts,
    /// Áo Khoác.
    Jacket,
    /// Hoodie.
    Hoodie,
}

impl CategoryId {
    /// Every category in slider order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Tshirt,
        CategoryId::Polo,
        CategoryId::Pants,
        CategoryId::Shorts,
        CategoryId::Jacket,
        CategoryId::Hoodie,
    ];

    /// Stable identifier used in data files and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tshirt => "tshirt",
            Self::Polo => "polo",
            Self::Pants => "pants",
            Self::Shorts => "shorts",
            Self::Jacket => "jacket",
            Self::Hoodie => "hoodie",
        }
    }

    /// Storefront display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tshirt => "Áo Thun",
            Self::Polo => "Áo Polo",
            Self::Pants => "Quần Dài",
            Self::Shorts => "Quần Short",
            Self::Jacket => "Áo Khoác",
            Self::Hoodie => "Hoodie",
        }
    }

    /// Zero-based position in [`CategoryId::ALL`].
    pub fn position(self) -> usize {
        self as usize
    }
}

impl FromStr for CategoryId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| StoreError::validation(format!("unknown category id '{s}'")))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Product identifier, unique within a catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry.
///
/// `category` and `color` are `None` when the source data carried a missing or
/// unrecognized tag; such products never match a filter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Catalog-unique identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Brand label.
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Ordered swatches offered on the product card.
    #[serde(default)]
    pub colors: Vec<Rgb8>,
    /// Optional badge label ("New", "Best seller", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Category tag.
    #[serde(default, deserialize_with = "lenient_tag")]
    pub category: Option<CategoryId>,
    /// Primary color tag.
    #[serde(default, deserialize_with = "lenient_tag")]
    pub color: Option<ColorId>,
}

fn default_brand() -> String {
    "basic color".to_owned()
}

fn lenient_tag<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
{
    let raw = <Option<serde_json::Value> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => match s.parse() {
            Ok(tag) => Some(tag),
            Err(_) => {
                tracing::debug!(tag = %s, "unrecognized catalog tag, entry will match nothing");
                None
            }
        },
        Some(other) => {
            tracing::debug!(tag = %other, "non-string catalog tag, entry will match nothing");
            None
        }
    })
}

/// Immutable, ordered product sequence shared by every view of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id) {
                return Err(StoreError::validation(format!(
                    "duplicate product id {} in catalog",
                    p.id
                )));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    /// Wrap a built-in product list whose ids are known to be unique.
    pub(crate) fn from_static(products: Vec<Product>) -> Self {
        debug_assert!(
            products.iter().map(|p| p.id).collect::<HashSet<_>>().len() == products.len()
        );
        Self {
            products: products.into(),
        }
    }

    /// Read a JSON array of products.
    pub fn from_reader<R: Read>(r: R) -> StoreResult<Self> {
        let products: Vec<Product> = serde_json::from_reader(r)
            .map_err(|e| StoreError::serde(format!("parse catalog JSON: {e}")))?;
        Self::new(products)
    }

    /// Read a JSON catalog file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let f =
            File::open(path).with_context(|| format!("open catalog JSON '{}'", path.display()))?;
        let catalog = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// `true` when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
