use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a cutoff sheet after label cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoffRow {
    pub course: String,
    pub university: String,
    pub cutoff: u16,
    pub note: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CutoffRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<SheetRow>() {
        let row = record?;
        rows.push(CutoffRow {
            course: clean_label(&row.course),
            university: clean_label(&row.university),
            cutoff: row.cutoff,
            note: row.note,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(alias = "Course")]
    course: String,
    #[serde(alias = "University")]
    university: String,
    #[serde(alias = "Cutoff")]
    cutoff: u16,
    #[serde(alias = "Note", default, deserialize_with = "empty_string_as_none")]
    note: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Strip byte-order marks and collapse runs of whitespace; case is preserved.
fn clean_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_with_optional_notes() {
        let rows = parse_rows(Cursor::new(
            "Course,University,Cutoff,Note\n\u{feff}Medicine  and Surgery , UNILAG ,300,One sitting\nLaw,UI,262,\n",
        ))
        .expect("sheet parses");

        assert_eq!(
            rows,
            vec![
                CutoffRow {
                    course: "Medicine and Surgery".to_string(),
                    university: "UNILAG".to_string(),
                    cutoff: 300,
                    note: Some("One sitting".to_string()),
                },
                CutoffRow {
                    course: "Law".to_string(),
                    university: "UI".to_string(),
                    cutoff: 262,
                    note: None,
                },
            ]
        );
    }

    #[test]
    fn rejects_non_numeric_cutoffs() {
        let error = parse_rows(Cursor::new("course,university,cutoff,note\nLaw,UI,high,\n"))
            .expect_err("cutoff must be numeric");
        assert!(!error.is_io_error());
    }
}
