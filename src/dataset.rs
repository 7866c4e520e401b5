use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::models::StudentRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset at {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("dataset at {path} has a malformed row: {source}")]
    Malformed {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Reads the student survey CSV, keeping only the columns `StudentRecord`
/// names. Extra source columns are ignored; a missing required column or a
/// non-integer value fails the whole load.
pub fn load_records(path: &Path) -> Result<Vec<StudentRecord>, DatasetError> {
    let origin = path.display().to_string();
    let reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Unreadable {
        path: origin.clone(),
        source,
    })?;
    read_records(reader, &origin)
}

fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    origin: &str,
) -> Result<Vec<StudentRecord>, DatasetError> {
    let mut records = Vec::new();
    for row in reader.deserialize::<StudentRecord>() {
        let record = row.map_err(|source| DatasetError::Malformed {
            path: origin.to_string(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_inline(data: &str) -> Result<Vec<StudentRecord>, DatasetError> {
        read_records(csv::Reader::from_reader(data.as_bytes()), "inline")
    }

    #[test]
    fn keeps_selected_columns_and_ignores_the_rest() {
        let data = "school,age,famrel,freetime,Dalc,Walc,health,G3,absences\n\
                    GP,18,4,3,2,3,5,10,6\n\
                    MS,15,5,2,1,1,4,16,0\n";
        let records = read_inline(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 18);
        assert_eq!(records[0].family_relationship, 4);
        assert_eq!(records[0].free_time, 3);
        assert_eq!(records[0].health, 5);
        assert_eq!(records[0].final_grade, 10);
        assert_eq!(records[1].final_grade, 16);
    }

    #[test]
    fn combined_consumption_sums_weekday_and_weekend() {
        let data = "age,famrel,freetime,Dalc,Walc,health,G3\n16,3,3,2,3,4,12\n";
        let records = read_inline(data).unwrap();
        assert_eq!(records[0].combined_consumption(), 5);
    }

    #[test]
    fn missing_required_column_is_malformed() {
        let data = "age,famrel,freetime,Dalc,Walc,health\n16,3,3,2,3,4\n";
        let err = read_inline(data).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }

    #[test]
    fn non_integer_value_is_malformed() {
        let data = "age,famrel,freetime,Dalc,Walc,health,G3\nsixteen,3,3,2,3,4,12\n";
        let err = read_inline(data).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = load_records(Path::new("no-such-students.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Unreadable { .. }));
    }

    #[test]
    fn row_order_is_preserved() {
        let data = "age,famrel,freetime,Dalc,Walc,health,G3\n\
                    17,3,3,1,1,4,9\n\
                    15,3,3,1,1,4,11\n\
                    19,3,3,1,1,4,7\n";
        let records = read_inline(data).unwrap();
        let ages: Vec<i32> = records.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![17, 15, 19]);
    }
}
