use tracing::debug;

use crate::error::{MungeError, Result};
use crate::geometry::extract_coord_pairs;
use crate::record::{normalize_string, parse_timestamp, CleanedRecord, RawRecord};

/// Street ids below this value are placeholders for a missing street.
pub const MIN_STREET_ID: i64 = 2;

pub fn make_mainstreet(row: &RawRecord) -> String {
    normalize_string(&format!(
        "{} {} {}",
        row.direction, row.name, row.street_type
    ))
}

fn parse_id(row: &RawRecord, field: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| MungeError::InvalidNumber {
            row_id: row.object_id.clone(),
            field,
            value: value.to_string(),
        })
}

/// Cleans one raw row. `Ok(None)` means the row was filtered out by the street
/// id rule; any parse failure on a kept row is an error.
pub fn clean_record(row: &RawRecord) -> Result<Option<CleanedRecord>> {
    let mainstreet_id = parse_id(row, "STREETNAME", &row.street_id)?;
    let xstreet_id = parse_id(row, "F_CROSS_ST", &row.cross_street_id)?;
    if mainstreet_id < MIN_STREET_ID || xstreet_id < MIN_STREET_ID {
        debug!(
            row_id = %row.object_id,
            mainstreet_id,
            xstreet_id,
            "dropping row with placeholder street id"
        );
        return Ok(None);
    }

    let points = extract_coord_pairs(&row.geometry).map_err(|source| MungeError::Geometry {
        row_id: row.object_id.clone(),
        source,
    })?;
    let (longitude, latitude) = points[0];

    let shape_length = row
        .shape_length
        .trim()
        .parse::<f64>()
        .map_err(|_| MungeError::InvalidNumber {
            row_id: row.object_id.clone(),
            field: "SHAPE_LEN",
            value: row.shape_length.clone(),
        })?;
    let updated_at =
        parse_timestamp(&row.updated_at).ok_or_else(|| MungeError::InvalidTimestamp {
            row_id: row.object_id.clone(),
            value: row.updated_at.clone(),
        })?;

    Ok(Some(CleanedRecord {
        object_id: row.object_id.clone(),
        mainstreet_id,
        xstreet_id,
        mainstreet_name: make_mainstreet(row),
        longitude,
        latitude,
        zipcode: row.zipcode.clone(),
        shape_length,
        updated_at,
    }))
}

pub fn clean_records(rows: &[RawRecord]) -> Result<(Vec<CleanedRecord>, usize)> {
    let mut cleaned = Vec::with_capacity(rows.len());
    let mut dropped = 0;
    for row in rows {
        match clean_record(row)? {
            Some(record) => cleaned.push(record),
            None => dropped += 1,
        }
    }
    Ok((cleaned, dropped))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn raw(object_id: &str, id: &str, cross: &str, dir: &str, name: &str) -> RawRecord {
        RawRecord {
            object_id: object_id.to_string(),
            street_id: id.to_string(),
            cross_street_id: cross.to_string(),
            direction: dir.to_string(),
            name: name.to_string(),
            street_type: "ST".to_string(),
            zipcode: "60614".to_string(),
            geometry: "MULTILINESTRING ((-87.66068257 41.88418745, -87.66107301 41.88418175))"
                .to_string(),
            shape_length: "120.5".to_string(),
            updated_at: "2013-02-27 14:05:00".to_string(),
        }
    }

    #[test]
    fn builds_whitespace_normalized_name() {
        let mut row = raw("1", "10", "20", "N", "  CLARK ");
        row.street_type = " ST  ".to_string();
        assert_eq!(make_mainstreet(&row), "N CLARK ST");

        row.direction = String::new();
        assert_eq!(make_mainstreet(&row), "CLARK ST");
    }

    #[test]
    fn cleans_a_valid_row() {
        let record = clean_record(&raw("7", " 10", "20 ", "N", "CLARK"))
            .unwrap()
            .unwrap();
        assert_eq!(record.object_id, "7");
        assert_eq!(record.mainstreet_id, 10);
        assert_eq!(record.xstreet_id, 20);
        assert_eq!(record.mainstreet_name, "N CLARK ST");
        assert_eq!((record.longitude, record.latitude), (-87.66068, 41.88419));
        assert_eq!(record.zipcode, "60614");
        assert_eq!(record.shape_length, 120.5);
        assert_eq!(record.updated_at.to_string(), "2013-02-27 14:05:00");
    }

    #[test]
    fn drops_placeholder_ids() {
        for (id, cross) in [("0", "20"), ("1", "20"), ("10", "1"), ("-4", "0")] {
            assert_eq!(clean_record(&raw("1", id, cross, "N", "CLARK")).unwrap(), None);
        }
        assert!(clean_record(&raw("1", "2", "2", "N", "CLARK"))
            .unwrap()
            .is_some());
    }

    #[test]
    fn filtered_rows_skip_field_parsing() {
        let mut row = raw("1", "1", "20", "N", "CLARK");
        row.geometry = "garbage".to_string();
        row.updated_at = "garbage".to_string();
        assert_eq!(clean_record(&row).unwrap(), None);
    }

    #[test]
    fn parse_failures_carry_the_row_id() {
        let mut row = raw("42", "10", "20", "N", "CLARK");
        row.shape_length = "long".to_string();
        match clean_record(&row) {
            Err(MungeError::InvalidNumber { row_id, field, .. }) => {
                assert_eq!(row_id, "42");
                assert_eq!(field, "SHAPE_LEN");
            }
            other => panic!("unexpected {other:?}"),
        }

        let mut row = raw("43", "10", "20", "N", "CLARK");
        row.updated_at = "soon".to_string();
        assert!(matches!(
            clean_record(&row),
            Err(MungeError::InvalidTimestamp { row_id, .. }) if row_id == "43"
        ));

        let mut row = raw("44", "10", "20", "N", "CLARK");
        row.geometry = "MULTILINESTRING ((1, 2))".to_string();
        assert!(matches!(
            clean_record(&row),
            Err(MungeError::Geometry { row_id, .. }) if row_id == "44"
        ));

        assert!(matches!(
            clean_record(&raw("45", "ten", "20", "N", "CLARK")),
            Err(MungeError::InvalidNumber { field: "STREETNAME", .. })
        ));
    }

    #[test]
    fn counts_dropped_rows() {
        let rows = vec![
            raw("1", "10", "20", "N", "CLARK"),
            raw("2", "0", "20", "N", "CLARK"),
            raw("3", "20", "10", "W", "DIVERSEY"),
        ];
        let (cleaned, dropped) = clean_records(&rows).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(dropped, 1);
    }
}
