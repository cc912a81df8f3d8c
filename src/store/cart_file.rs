//! Cart slot persistence on disk
//!
//! Provides a `CartStore` that writes the cart contents as a bare JSON
//! array of product records to one named file, overwriting any previous
//! value, and reads it back at startup.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::Product;

/// File name of the single cart slot
const CART_SLOT: &str = "cart.json";

/// Errors that can occur when writing the cart slot
#[derive(Debug, Error)]
pub enum StoreError {
    /// Creating the data directory or writing the file failed
    #[error("Failed to write cart slot: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the cart contents failed
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Manages reading and writing the persisted cart
///
/// The store keeps the cart as `cart.json` in an XDG-compliant data
/// directory (`~/.local/share/shoptui/` on Linux). The file holds a plain
/// JSON array of product records with no envelope, versioning, or TTL.
#[derive(Debug, Clone)]
pub struct CartStore {
    /// Directory where the cart slot lives
    data_dir: PathBuf,
}

impl CartStore {
    /// Creates a new CartStore using the XDG-compliant data directory
    ///
    /// Returns `None` if the data directory cannot be determined
    /// (e.g. no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "shoptui")?;
        let data_dir = project_dirs.data_dir().to_path_buf();
        Some(Self { data_dir })
    }

    /// Creates a new CartStore with a custom directory
    ///
    /// Useful for testing or when a specific location is needed.
    pub fn with_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the path of the cart slot file
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(CART_SLOT)
    }

    /// Overwrites the cart slot with the given items
    ///
    /// Called after every cart mutation; the written value always equals
    /// the current cart contents.
    pub fn save(&self, items: &[Product]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.slot_path(), json)?;
        Ok(())
    }

    /// Reads the cart slot
    ///
    /// A missing file or contents that fail to parse yield an empty list,
    /// so a corrupt slot degrades to an empty cart instead of an error.
    pub fn load(&self) -> Vec<Product> {
        let Ok(content) = fs::read_to_string(self.slot_path()) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rating;
    use tempfile::TempDir;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            category: "electronics".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            description: "desc".to_string(),
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
        }
    }

    fn create_test_store() -> (CartStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = CartStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_save_creates_slot_file() {
        let (store, temp_dir) = create_test_store();

        store
            .save(&[product(1, 10.0)])
            .expect("Save should succeed");

        let expected_path = temp_dir.path().join("cart.json");
        assert!(expected_path.exists(), "Cart slot file should exist");
    }

    #[test]
    fn test_slot_holds_bare_json_array() {
        let (store, _temp_dir) = create_test_store();

        store
            .save(&[product(1, 10.0), product(2, 20.0)])
            .expect("Save should succeed");

        let content = fs::read_to_string(store.slot_path()).expect("Should read slot");
        let parsed: serde_json::Value =
            serde_json::from_str(&content).expect("Slot should be valid JSON");
        assert!(parsed.is_array(), "Slot should hold a JSON array");
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_load_missing_slot_returns_empty() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_returns_empty() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.slot_path().parent().unwrap()).unwrap();
        fs::write(store.slot_path(), "not json at all").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let (store, _temp_dir) = create_test_store();
        let items = vec![product(3, 7.5), product(1, 10.0), product(3, 7.5)];

        store.save(&items).expect("Save should succeed");
        let loaded = store.load();

        assert_eq!(loaded, items, "Round-trip should preserve order and duplicates");
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (store, _temp_dir) = create_test_store();

        store.save(&[product(1, 10.0)]).expect("First save");
        store.save(&[]).expect("Second save");

        assert!(store.load().is_empty(), "Last write should win");
    }

    #[test]
    fn test_save_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested").join("data");
        let store = CartStore::with_dir(nested);

        store.save(&[product(1, 10.0)]).expect("Save should succeed");
        assert_eq!(store.load().len(), 1);
    }
}
