use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::record::RawRecord;

pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn read_raw_records_file(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    read_raw_records(std::io::BufReader::new(file))
}
