use std::io::Read;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::coercion::{parse_amount, parse_count, parse_flag, parse_year};
use super::CatalogImportError;
use crate::recommendation::domain::{MalformedRecordError, Property};

/// Reads listings in file order, skipping blank rows and failing on the first malformed one.
pub(crate) fn parse_properties<R: Read>(reader: R) -> Result<Vec<Property>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut properties = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: PropertyRow = record.deserialize(Some(&headers))?;

        if row.is_blank() {
            debug!(line, "skipping blank catalog row");
            continue;
        }

        let property = row
            .into_property()
            .and_then(|property| property.validate().map(|()| property))
            .map_err(|source| CatalogImportError::Malformed { line, source })?;
        properties.push(property);
    }

    Ok(properties)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PropertyRow {
    #[serde(deserialize_with = "empty_string_as_none")]
    property_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    bedrooms: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    size_sqft: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    commute_time_min: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    school_rating: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    has_pool: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    garage_spaces: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    year_built: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl PropertyRow {
    fn is_blank(&self) -> bool {
        [
            &self.property_id,
            &self.address,
            &self.city,
            &self.price,
            &self.bedrooms,
            &self.size_sqft,
            &self.commute_time_min,
            &self.school_rating,
            &self.has_pool,
            &self.garage_spaces,
            &self.year_built,
            &self.description,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    fn into_property(self) -> Result<Property, MalformedRecordError> {
        let record = self
            .address
            .clone()
            .unwrap_or_else(|| "<no address>".to_string());
        let field = FieldReader { record: &record };

        Ok(Property {
            address: field.text(&self.address, "address")?,
            city: field.text(&self.city, "city")?,
            price: field.coerce(&self.price, "price", parse_amount, "a number")?,
            bedrooms: field.coerce(&self.bedrooms, "bedrooms", parse_count, "a whole count")?,
            size_sqft: field.coerce(&self.size_sqft, "size_sqft", parse_amount, "a number")?,
            commute_time_min: field.coerce(
                &self.commute_time_min,
                "commute_time_min",
                parse_amount,
                "a number",
            )?,
            school_rating: field.coerce(
                &self.school_rating,
                "school_rating",
                parse_amount,
                "a number",
            )?,
            has_pool: field.coerce(&self.has_pool, "has_pool", parse_flag, "a boolean")?,
            garage_spaces: field.coerce(
                &self.garage_spaces,
                "garage_spaces",
                parse_count,
                "a whole count",
            )?,
            year_built: field.coerce(&self.year_built, "year_built", parse_year, "a year")?,
            property_id: self.property_id,
            description: self.description,
        })
    }
}

struct FieldReader<'a> {
    record: &'a str,
}

impl FieldReader<'_> {
    fn text(
        &self,
        value: &Option<String>,
        field: &'static str,
    ) -> Result<String, MalformedRecordError> {
        value.clone().ok_or_else(|| self.missing(field))
    }

    fn coerce<T>(
        &self,
        value: &Option<String>,
        field: &'static str,
        parse: fn(&str) -> Option<T>,
        expected: &str,
    ) -> Result<T, MalformedRecordError> {
        let raw = value.as_deref().ok_or_else(|| self.missing(field))?;
        parse(raw).ok_or_else(|| MalformedRecordError {
            record: self.record.to_string(),
            field,
            reason: format!("'{raw}' is not {expected}"),
        })
    }

    fn missing(&self, field: &'static str) -> MalformedRecordError {
        MalformedRecordError {
            record: self.record.to_string(),
            field,
            reason: "is missing".to_string(),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
