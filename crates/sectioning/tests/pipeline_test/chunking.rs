use docsplit_core::config::SectioningConfig;
use docsplit_core::{ChunkCandidate, OracleError, SectionCandidate, SectionContent};
use docsplit_sectioning::{
    chunk_section, segment, segment_and_chunk, DocumentLines, RecursiveCharacterSplitter, SectioningError,
};

use crate::helpers::{body_line, heading_document, BrokenOracle, ChunklessOracle, FixedOracle, HeadingOracle};

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[tokio::test]
async fn test_short_section_is_single_chunk() {
    let document = heading_document(1, 10);
    let oracle = HeadingOracle::new(3);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let segmented = segment(&document, &oracle, &config).await.unwrap();
    let chunks = chunk_section(&segmented.sections[0], &segmented.lines, &oracle, &splitter, &config)
        .await
        .unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].title, "Heading 0");
    assert_eq!(chunks[0].content, format!("{document}\n"));
    assert_eq!(oracle.chunk_calls(), 0);
}

#[tokio::test]
async fn test_plausible_chunks_follow_oracle_starts() {
    // 61 lines, about 4100 line-numbered characters: target band (2, 4).
    let document = heading_document(1, 60);
    let oracle = HeadingOracle::new(20);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let segmented = segment(&document, &oracle, &config).await.unwrap();
    let chunks = chunk_section(&segmented.sections[0], &segmented.lines, &oracle, &splitter, &config)
        .await
        .unwrap();

    assert_eq!(chunks.len(), 4);
    assert!(chunks.iter().all(|c| c.title == "Heading 0"));
    assert!(chunks[1].content.starts_with(&body_line(19)));
    assert_eq!(chunks[3].content, format!("{}\n", body_line(59)));
    let joined: String = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(joined, format!("{document}\n"));
}

#[tokio::test]
async fn test_unordered_chunk_starts_are_repaired() {
    let document = heading_document(1, 60);
    let oracle = FixedOracle {
        sections: vec![SectionCandidate::new("Doc", 0, 60)],
        chunks: [30, 10, 10, 50]
            .into_iter()
            .map(|start_index| ChunkCandidate { start_index })
            .collect(),
    };
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let segmented = segment(&document, &oracle, &config).await.unwrap();
    let chunks = chunk_section(&segmented.sections[0], &segmented.lines, &oracle, &splitter, &config)
        .await
        .unwrap();

    assert_eq!(chunks.len(), 3);
    assert!(chunks[0].content.starts_with("# Heading 0\n"));
    assert!(chunks[1].content.starts_with(&body_line(9)));
    assert!(chunks[2].content.starts_with(&body_line(49)));
    let joined: String = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(joined, format!("{document}\n"));
}

#[tokio::test]
async fn test_too_few_chunks_falls_back_to_splitter() {
    let document = heading_document(1, 60);
    let oracle = FixedOracle {
        sections: vec![SectionCandidate::new("Doc", 0, 60)],
        chunks: vec![],
    };
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::new(800, 0);

    let segmented = segment(&document, &oracle, &config).await.unwrap();
    let chunks = chunk_section(&segmented.sections[0], &segmented.lines, &oracle, &splitter, &config)
        .await
        .unwrap();

    assert!(chunks.len() >= 5, "got {} chunks", chunks.len());
    for chunk in &chunks {
        assert_eq!(chunk.title, "Doc");
        assert!(chunk.content.chars().count() <= 800);
    }
    let joined: String = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(without_whitespace(&joined), without_whitespace(&document));
}

#[tokio::test]
async fn test_too_many_chunks_falls_back_to_splitter() {
    let document = heading_document(1, 60);
    // One chunk per line: 61 proposals against a (2, 4) band.
    let oracle = HeadingOracle::new(1);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::new(1000, 0);

    let segmented = segment(&document, &oracle, &config).await.unwrap();
    let chunks = chunk_section(&segmented.sections[0], &segmented.lines, &oracle, &splitter, &config)
        .await
        .unwrap();

    assert!(chunks.len() < 61);
    assert!(chunks.iter().all(|c| c.content.chars().count() <= 1000));
    assert_eq!(oracle.chunk_calls(), 1);
}

#[tokio::test]
async fn test_chunk_oracle_failure_is_fatal() {
    let document = heading_document(1, 60);
    let lines = DocumentLines::from_text(&document);
    let section = SectionContent {
        title: "Heading 0".into(),
        start: 0,
        end: lines.last_index(),
        content: document.clone(),
    };
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let err = chunk_section(&section, &lines, &BrokenOracle, &splitter, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, SectioningError::Oracle(OracleError::Provider(_))));
}

#[tokio::test]
async fn test_segment_and_chunk_covers_document() {
    let document = heading_document(3, 60);
    let oracle = HeadingOracle::new(20);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let chunks = segment_and_chunk(&document, &oracle, &splitter, &config).await.unwrap();

    assert_eq!(chunks.len(), 12);
    let titles: Vec<&str> = chunks.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(&titles[..4], &["Heading 0"; 4]);
    assert_eq!(&titles[8..], &["Heading 2"; 4]);
    let joined: String = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(joined, format!("{document}\n"));
}

/// A one-line section whose line-numbered form (`[0] ` + text + `\n`) is
/// exactly `numbered_chars` characters long.
fn single_line_section(numbered_chars: usize) -> (DocumentLines, SectionContent) {
    let text = "x".repeat(numbered_chars - 5);
    let lines = DocumentLines::from_text(&text);
    assert_eq!(lines.numbered(0, 0).chars().count(), numbered_chars);
    let section = SectionContent {
        title: "Line".into(),
        start: 0,
        end: 0,
        content: text,
    };
    (lines, section)
}

#[tokio::test]
async fn test_section_just_under_threshold_is_not_sent_to_oracle() {
    let (lines, section) = single_line_section(1999);
    let oracle = HeadingOracle::new(1);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let chunks = chunk_section(&section, &lines, &oracle, &splitter, &config).await.unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, format!("{}\n", "x".repeat(1994)));
    assert_eq!(oracle.chunk_calls(), 0);
}

#[tokio::test]
async fn test_section_at_threshold_is_sent_to_oracle() {
    let (lines, section) = single_line_section(2000);
    let oracle = HeadingOracle::new(1);
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let chunks = chunk_section(&section, &lines, &oracle, &splitter, &config).await.unwrap();

    assert_eq!(oracle.chunk_calls(), 1);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].title, "Line");
    assert_eq!(chunks[0].content, format!("{}\n", "x".repeat(1995)));
}

#[tokio::test]
async fn test_segment_and_chunk_names_failing_section() {
    let document = heading_document(1, 60);
    let oracle = ChunklessOracle {
        sections: vec![SectionCandidate::new("Doc", 0, 60)],
    };
    let config = SectioningConfig::default();
    let splitter = RecursiveCharacterSplitter::default();

    let err = segment_and_chunk(&document, &oracle, &splitter, &config).await.unwrap_err();

    match err {
        SectioningError::Chunking { title, source } => {
            assert_eq!(title, "Doc");
            assert!(matches!(*source, SectioningError::Oracle(OracleError::Provider(_))));
        }
        other => panic!("expected chunking error, got {other:?}"),
    }
}
