use super::domain::ResponseSet;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerSheetError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for AnswerSheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSheetError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerSheetError::Csv(err) => write!(f, "invalid answer sheet data: {}", err),
        }
    }
}

impl std::error::Error for AnswerSheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerSheetError::Io(err) => Some(err),
            AnswerSheetError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerSheetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerSheetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a recorded attempt from CSV with `question_id,option_index` columns.
pub struct AnswerSheet;

impl AnswerSheet {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ResponseSet, AnswerSheetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseSet, AnswerSheetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = ResponseSet::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let Some(question_id) = row.question_id else {
                continue;
            };
            // later rows win, mirroring an answer being changed
            responses.record(question_id, row.option_index);
        }

        Ok(responses)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(deserialize_with = "empty_string_as_none")]
    question_id: Option<String>,
    option_index: usize,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_into_responses() {
        let csv = "question_id,option_index\nstructure_0,4\naptitude_0, 2\n";
        let responses = AnswerSheet::from_reader(Cursor::new(csv)).expect("sheet parses");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses.selected("structure_0"), Some(4));
        assert_eq!(responses.selected("aptitude_0"), Some(2));
    }

    #[test]
    fn later_rows_overwrite_earlier_answers() {
        let csv = "question_id,option_index\nwill_0,1\nwill_0,3\n";
        let responses = AnswerSheet::from_reader(Cursor::new(csv)).expect("sheet parses");
        assert_eq!(responses.selected("will_0"), Some(3));
    }

    #[test]
    fn skips_rows_without_question_id() {
        let csv = "question_id,option_index\n ,1\njava_0,1\n";
        let responses = AnswerSheet::from_reader(Cursor::new(csv)).expect("sheet parses");
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn rejects_non_numeric_option() {
        let csv = "question_id,option_index\njava_0,first\n";
        let err = AnswerSheet::from_reader(Cursor::new(csv)).expect_err("bad option");
        assert!(matches!(err, AnswerSheetError::Csv(_)));
    }
}
