use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::error::Result;
use crate::record::IntersectionRecord;

pub const TABLE_HEADERS: [&str; 6] = [
    "intersection",
    "street_1",
    "street_2",
    "zipcode",
    "longitude",
    "latitude",
];

/// Trimmed projection for the map demo. Fields are declared in key order so
/// the JSON is byte-for-byte reproducible.
#[derive(Debug, Serialize)]
struct CompactRecord<'a> {
    intersection: &'a str,
    latitude: f64,
    longitude: f64,
}

impl<'a> From<&'a IntersectionRecord> for CompactRecord<'a> {
    fn from(record: &'a IntersectionRecord) -> Self {
        Self {
            intersection: &record.pair_key,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// Writes the six-column CSV, header included even when there are no rows.
pub fn write_table<W: Write>(writer: W, records: &[IntersectionRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(TABLE_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// One line per key, no indentation, non-ASCII escaped as `\uXXXX`.
struct CompactFormatter(PrettyFormatter<'static>);

impl Formatter for CompactFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

pub fn write_compact<W: Write>(writer: W, records: &[IntersectionRecord]) -> Result<()> {
    let compact: Vec<CompactRecord<'_>> = records.iter().map(CompactRecord::from).collect();
    let mut serializer = serde_json::Serializer::with_formatter(
        writer,
        CompactFormatter(PrettyFormatter::with_indent(b"")),
    );
    compact.serialize(&mut serializer)?;
    serializer.into_inner().flush()?;
    Ok(())
}

fn create_with_parent(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn write_table_file(path: &Path, records: &[IntersectionRecord]) -> Result<()> {
    write_table(create_with_parent(path)?, records)
}

pub fn write_compact_file(path: &Path, records: &[IntersectionRecord]) -> Result<()> {
    write_compact(create_with_parent(path)?, records)
}
