//! JSON report generation

use crate::normalize::NormalizedRecord;
use crate::report::Summary;
use crate::vocab::Vocabulary;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Document<'a> {
    summary: Summary,
    vocabulary: &'a Vocabulary,
    records: &'a [NormalizedRecord],
}

pub fn write<W: Write>(
    writer: &mut W,
    records: &[NormalizedRecord],
    vocab: &Vocabulary,
) -> io::Result<()> {
    let document = Document {
        summary: Summary::new(records, vocab),
        vocabulary: vocab,
        records,
    };

    serde_json::to_writer_pretty(&mut *writer, &document)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{Badge, BadgeCategory};

    #[test]
    fn test_json_shape() {
        let records = vec![NormalizedRecord {
            chemical: "Caffeine".to_string(),
            species: "Homo sapiens".to_string(),
            gene_symbol: "CYP1A2".to_string(),
            interaction: "increased activity".to_string(),
            badges: vec![Badge {
                label: "increases activity".to_string(),
                category: BadgeCategory::Increase,
            }],
            pubmed_ids: vec!["12345".to_string()],
        }];
        let vocab = Vocabulary::from_records(&records);

        let mut buffer = Vec::new();
        write(&mut buffer, &records, &vocab).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(parsed["summary"]["records"], 1);
        assert_eq!(parsed["vocabulary"]["chemicals"][0], "Caffeine");
        assert_eq!(parsed["records"][0]["chemical"], "Caffeine");
        assert_eq!(parsed["records"][0]["badges"][0]["category"], "increase");
        assert_eq!(parsed["records"][0]["pubmed_ids"][0], "12345");
    }

    #[test]
    fn test_empty_input_is_valid_json() {
        let mut buffer = Vec::new();
        write(&mut buffer, &[], &Vocabulary::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(parsed["summary"]["records"], 0);
        assert!(parsed["records"].as_array().unwrap().is_empty());
    }
}
