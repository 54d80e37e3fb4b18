//! Label catalog: class index → species name
//!
//! The catalog is immutable once built and shared behind an `Arc`.
//! Index order must match the classifier's output order.

use leafid_common::{Error, Result};
use std::path::Path;

/// Label reported for an index the catalog does not know
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Species the bundled leaf model was trained on, in output order
const PLANT_SPECIES: [&str; 30] = [
    "Alpinia Galanga (Rasna)",
    "Amaranthus Viridis (Arive-Dantu)",
    "Artocarpus Heterophyllus (Jackfruit)",
    "Azadirachta Indica (Neem)",
    "Basella Alba (Basale)",
    "Brassica Juncea (Indian Mustard)",
    "Carissa Carandas (Karanda)",
    "Citrus Limon (Lemon)",
    "Ficus Auriculata (Roxburgh fig)",
    "Ficus Religiosa (Peepal Tree)",
    "Hibiscus Rosa-sinensis",
    "Jasminum (Jasmine)",
    "Mangifera Indica (Mango)",
    "Mentha (Mint)",
    "Moringa Oleifera (Drumstick)",
    "Muntingia Calabura (Jamaica Cherry-Gasagase)",
    "Murraya Koenigii (Curry)",
    "Nerium Oleander (Oleander)",
    "Nyctanthes Arbor-tristis (Parijata)",
    "Ocimum Tenuiflorum (Tulsi)",
    "Piper Betle (Betel)",
    "Plectranthus Amboinicus (Mexican Mint)",
    "Pongamia Pinnata (Indian Beech)",
    "Psidium Guajava (Guava)",
    "Punica Granatum (Pomegranate)",
    "Santalum Album (Sandalwood)",
    "Syzygium Cumini (Jamun)",
    "Syzygium Jambos (Rose Apple)",
    "Tabernaemontana Divaricata (Crape Jasmine)",
    "Trigonella Foenum-graecum (Fenugreek)",
];

/// Ordered, contiguous mapping from class index to label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: Vec<String>,
}

impl LabelCatalog {
    /// The built-in 30-species table
    pub fn plant_species() -> Self {
        Self {
            labels: PLANT_SPECIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a catalog from labels in index order
    pub fn from_labels(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::Config("Label catalog must not be empty".to_string()));
        }
        if let Some(pos) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(Error::Config(format!("Label at index {} is blank", pos)));
        }
        Ok(Self { labels })
    }

    /// Load labels from a text file, one per line (line N is index N-1)
    ///
    /// Trailing blank lines are ignored; a blank line between labels is an
    /// error since it would shift every following index.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read labels file {}: {}", path.display(), e))
        })?;

        let mut labels: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();
        while labels.last().is_some_and(|l| l.is_empty()) {
            labels.pop();
        }

        Self::from_labels(labels)
            .map_err(|e| Error::Config(format!("{} ({})", e, path.display())))
    }

    /// Label for `index`, or [`UNKNOWN_LABEL`] when out of range
    pub fn name_for(&self, index: usize) -> &str {
        self.labels
            .get(index)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(index, label)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(String::as_str).enumerate()
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::plant_species()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plant_species_has_thirty_contiguous_entries() {
        let catalog = LabelCatalog::plant_species();
        assert_eq!(catalog.len(), 30);

        let indices: Vec<usize> = catalog.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_known_indices() {
        let catalog = LabelCatalog::plant_species();
        assert_eq!(catalog.name_for(0), "Alpinia Galanga (Rasna)");
        assert_eq!(catalog.name_for(12), "Mangifera Indica (Mango)");
        assert_eq!(catalog.name_for(29), "Trigonella Foenum-graecum (Fenugreek)");
    }

    #[test]
    fn test_name_for_is_stable_across_calls() {
        let catalog = LabelCatalog::plant_species();
        for i in 0..30 {
            assert_eq!(catalog.name_for(i), catalog.name_for(i));
            assert_ne!(catalog.name_for(i), UNKNOWN_LABEL);
        }
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        let catalog = LabelCatalog::plant_species();
        assert_eq!(catalog.name_for(30), UNKNOWN_LABEL);
        assert_eq!(catalog.name_for(31), UNKNOWN_LABEL);
        assert_eq!(catalog.name_for(usize::MAX), UNKNOWN_LABEL);
    }

    #[test]
    fn test_from_labels_rejects_empty_and_blank() {
        assert!(LabelCatalog::from_labels(Vec::new()).is_err());
        assert!(LabelCatalog::from_labels(vec!["a".into(), " ".into()]).is_err());
    }

    #[test]
    fn test_custom_catalog_swaps_in() {
        let catalog = LabelCatalog::from_labels(vec!["oak".into(), "maple".into()]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name_for(1), "maple");
        assert_eq!(catalog.name_for(2), UNKNOWN_LABEL);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.txt");
        std::fs::write(&path, "oak\nmaple  \nbirch\n\n\n").unwrap();

        let catalog = LabelCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.name_for(1), "maple");
    }

    #[test]
    fn test_load_rejects_interior_blank_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.txt");
        std::fs::write(&path, "oak\n\nbirch\n").unwrap();

        let err = LabelCatalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(LabelCatalog::load(&temp_dir.path().join("nope.txt")).is_err());
    }
}
