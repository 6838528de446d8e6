//! Property catalog loaded from tabular CSV exports.

mod coercion;
mod parser;

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::recommendation::domain::{
    MalformedRecordError, Preferences, Property, RecommendationError, ScoredProperty,
};
use crate::recommendation::recommend;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read property catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid property CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: MalformedRecordError,
    },
}

/// Ordered, immutable collection of listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), properties = catalog.len(), "loaded property catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        parser::parse_properties(reader).map(Self::new)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, address: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.address == address)
    }

    pub fn recommend(
        &self,
        prefs: &Preferences,
        max_results: usize,
    ) -> Result<Vec<ScoredProperty>, RecommendationError> {
        recommend(&self.properties, prefs, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "property_id,address,city,price,bedrooms,size_sqft,commute_time_min,school_rating,has_pool,garage_spaces,year_built,description\n";

    fn load(rows: &str) -> Result<PropertyCatalog, CatalogImportError> {
        PropertyCatalog::from_reader(Cursor::new(format!("{HEADER}{rows}")))
    }

    #[test]
    fn parses_rows_with_dynamic_coercion() {
        let catalog = load(
            "P-1,12 Elm Street,Austin,250000.0,3,2000,20,9,True,2.0,2015,Luxury condo with smart home hub\n\
P-2,9 Oak Avenue,Denver,\"$410,000\",4,2400,35,7.5,no,1,1998,\n",
        )
        .expect("catalog loads");

        assert_eq!(catalog.len(), 2);
        let first = &catalog.properties()[0];
        assert_eq!(first.property_id.as_deref(), Some("P-1"));
        assert_eq!(first.price, 250_000.0);
        assert!(first.has_pool);
        assert_eq!(first.garage_spaces, 2);

        let second = catalog.get("9 Oak Avenue").expect("second listing");
        assert_eq!(second.price, 410_000.0);
        assert!(!second.has_pool);
        assert!(second.description.is_none());
        assert_eq!(second.description_text(), "");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let catalog = load(
            ",,,,,,,,,,,\n\
P-1,12 Elm Street,Austin,250000,3,2000,20,9,true,2,2015,\n\
\n\
 , , , , , , , , , , , \n",
        )
        .expect("catalog loads");

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_required_field_is_reported_with_line() {
        let err = load(
            "P-1,12 Elm Street,Austin,250000,3,2000,20,9,true,2,2015,\n\
P-2,9 Oak Avenue,Denver,,4,2400,35,7.5,false,1,1998,\n",
        )
        .expect_err("missing price");

        match err {
            CatalogImportError::Malformed { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source.record, "9 Oak Avenue");
                assert_eq!(source.field, "price");
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_values_are_rejected() {
        let err = load("P-1,12 Elm Street,Austin,250000,three,2000,20,9,true,2,2015,\n")
            .expect_err("bad bedrooms");
        assert!(err.to_string().contains("bedrooms"));

        let err = load("P-1,12 Elm Street,Austin,250000,3,2000,20,9,sometimes,2,2015,\n")
            .expect_err("bad flag");
        assert!(err.to_string().contains("has_pool"));
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let err = load("P-1,12 Elm Street,Austin,250000,3,2000,20,12,true,2,2015,\n")
            .expect_err("rating above ten");
        match err {
            CatalogImportError::Malformed { source, .. } => {
                assert_eq!(source.field, "school_rating")
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let err = PropertyCatalog::from_reader(Cursor::new(
            "address,city,price\n12 Elm Street,Austin,250000\n",
        ))
        .expect_err("missing columns");
        assert!(err.to_string().contains("bedrooms"));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = PropertyCatalog::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, CatalogImportError::Io(_)));
    }
}
