use crate::pokemon;
use crate::{Dex, Error, Pokemon, Type, Typing};

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Read, Write};
use std::path::Path;

const NAME: &str = "Name";
const TYPE_1: &str = "Type1";
const TYPE_2: &str = "Type2";
const NUMBER: &str = "Dex#";

/// The persisted shape of a Pokémon in RON dex files.
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    name: String,
    types: Vec<Type>,
    number: pokemon::Number,
}

impl Dex {
    /// Loads the first generation dex bundled with the crate.
    pub fn bundled() -> Result<Self, Error> {
        let bytes = include_bytes!(concat!(env!("OUT_DIR"), "/dex.ron.gz"));
        let dex = Self::from_compressed(&bytes[..])?;

        log::info!("Loaded bundled dex with {} Pokémon", dex.len());

        Ok(dex)
    }

    /// Loads a dex file, picking the format by extension.
    ///
    /// `.csv` files are read as tables, `.gz` files as compressed RON and
    /// anything else as plain RON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        use std::fs::{self, File};
        use std::io::BufReader;

        let path = path.as_ref();

        let dex = match path.extension().and_then(|extension| extension.to_str()) {
            Some("csv") => Self::from_csv(BufReader::new(File::open(path)?))?,
            Some("gz") => Self::from_compressed(BufReader::new(File::open(path)?))?,
            _ => Self::from_ron(&fs::read_to_string(path)?)?,
        };

        log::info!("Loaded {} with {} Pokémon", path.display(), dex.len());

        Ok(dex)
    }

    /// Parses a comma-separated table with a `Name,Type1,Type2,Dex#` header.
    ///
    /// Columns may come in any order and extra columns are ignored. A
    /// monotype repeats its type in both type columns. Quoted fields may
    /// contain commas and line breaks. Loading stops at the first malformed
    /// row, which is never added. Errors point at the line a row starts on.
    pub fn from_csv(reader: impl BufRead) -> Result<Self, Error> {
        let mut lines = reader.lines().enumerate();

        let (header_line, header) = loop {
            match lines.next() {
                Some((i, line)) => {
                    let line = line?;

                    if !line.trim().is_empty() {
                        break (i + 1, split(&line));
                    }
                }
                None => return Ok(Self::new()),
            }
        };

        let locate = |title: &str| {
            header
                .iter()
                .position(|column| column.trim() == title)
                .ok_or_else(|| Error::format(header_line, format!("missing column: {title}")))
        };

        let name = locate(NAME)?;
        let type_1 = locate(TYPE_1)?;
        let type_2 = locate(TYPE_2)?;
        let number = locate(NUMBER)?;

        let mut dex = Self::new();
        let mut record = String::new();
        let mut record_line = header_line;

        for (i, line) in lines {
            let line = line?;

            if record.is_empty() {
                if line.trim().is_empty() {
                    continue;
                }

                record_line = i + 1;
            } else {
                record.push('\n');
            }

            record.push_str(&line);

            // Quoted fields may span lines
            if record.matches('"').count() % 2 != 0 {
                continue;
            }

            let fields = split(&std::mem::take(&mut record));
            let line_number = record_line;

            let field = |column: usize, title: &str| {
                fields
                    .get(column)
                    .map(|value| value.trim())
                    .ok_or_else(|| Error::format(line_number, format!("missing {title} field")))
            };

            let parse_type = |column: usize, title: &str| {
                field(column, title)?
                    .parse::<Type>()
                    .map_err(|error| Error::format(line_number, error.to_string()))
            };

            let typing = Typing::new([parse_type(type_1, TYPE_1)?, parse_type(type_2, TYPE_2)?])
                .map_err(|error| Error::format(line_number, error.to_string()))?;

            let raw_number = field(number, NUMBER)?;
            let dex_number = raw_number.parse().map_err(|_| {
                Error::format(line_number, format!("invalid dex number: {raw_number}"))
            })?;

            dex.insert(Pokemon::new(
                field(name, NAME)?,
                typing,
                pokemon::Number(dex_number),
            ));
        }

        if !record.is_empty() {
            return Err(Error::format(record_line, "unterminated quoted field"));
        }

        Ok(dex)
    }

    /// Parses a RON list of `(name, types, number)` entries.
    pub fn from_ron(source: &str) -> Result<Self, Error> {
        let entries: Vec<Entry> =
            ron::de::from_str(source).map_err(|error| Error::Malformed(error.to_string()))?;

        Self::from_entries(entries)
    }

    /// Parses a gzip-compressed RON dex.
    pub fn from_compressed(reader: impl Read) -> Result<Self, Error> {
        use flate2::read::GzDecoder;

        let mut source = String::new();
        let _ = GzDecoder::new(reader).read_to_string(&mut source)?;

        Self::from_ron(&source)
    }

    pub fn to_ron(&self) -> Result<String, Error> {
        let entries: Vec<Entry> = self
            .iter()
            .map(|pokemon| Entry {
                name: pokemon.name().to_owned(),
                types: pokemon.typing().iter().collect(),
                number: pokemon.number(),
            })
            .collect();

        ron::ser::to_string_pretty(&entries, ron::ser::PrettyConfig::default())
            .map_err(|error| Error::Encoding(error.to_string()))
    }

    pub fn write_compressed(&self, writer: impl Write) -> Result<(), Error> {
        use flate2::Compression;
        use flate2::write::GzEncoder;

        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(self.to_ron()?.as_bytes())?;

        let _ = encoder.finish()?;

        Ok(())
    }

    fn from_entries(entries: Vec<Entry>) -> Result<Self, Error> {
        let mut dex = Self::new();

        for (i, entry) in entries.into_iter().enumerate() {
            let typing = Typing::new(entry.types)
                .map_err(|error| Error::format(i + 1, format!("{}: {error}", entry.name)))?;

            dex.insert(Pokemon::new(entry.name, typing, entry.number));
        }

        Ok(dex)
    }
}

/// Splits a table row on commas, honoring double-quoted fields.
fn split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                let _ = chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    fields.push(field);
    fields
}
