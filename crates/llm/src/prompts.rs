//! System prompts for section and chunk boundary extraction.

const START_LINE: &str = "<<<start_line>>>";
const END_LINE: &str = "<<<end_line>>>";
const MIN_CHUNKS: &str = "<<<min_chunks>>>";
const MAX_CHUNKS: &str = "<<<max_chunks>>>";

const SECTION_TEMPLATE: &str = r#"You split documents into sections. Each section covers one concept or topic.
Prefer the document's own structure (Introduction, Methods, Conclusion, References and so on) when it has one. A section is usually a few paragraphs to a few pages long.

Every line of the document below is prefixed with its line number in square brackets, e.g. [12]. Use these numbers for the section boundaries; both start_index and end_index are inclusive.
The excerpt covers lines <<<start_line>>> to <<<end_line>>>. The first section must start at line <<<start_line>>>, and together the sections must cover every line of the excerpt without overlapping.
The excerpt may be taken from the middle of a larger document, so do not assume it begins with an introduction or ends with a conclusion.
Titles must be descriptive enough that someone skimming only the titles understands what each section is about.

Respond with a single JSON object and nothing else:
{"sections": [{"title": "<descriptive title>", "start_index": <int>, "end_index": <int>}]}"#;

const CHUNK_TEMPLATE: &str = r#"You split a document into chunks for retrieval. Each chunk covers one concept or topic and is usually a few sentences to a paragraph long.
Prefer the document's own structure when it has one; otherwise aim for chunks of roughly 2000 characters.

Every line of the document below is prefixed with its line number in square brackets, e.g. [12]. A chunk is identified only by the line it starts on (inclusive); it ends where the next chunk starts.
The first chunk must start at line <<<start_line>>>, and the chunks must cover the whole document.
The text may be taken from the middle of a larger document.
You MUST produce between <<<min_chunks>>> and <<<max_chunks>>> chunks.

Respond with a single JSON object and nothing else:
{"chunks": [{"start_index": <int>}]}"#;

/// System prompt asking for the sections of the window `start_line..=end_line`.
pub fn section_prompt(start_line: usize, end_line: usize) -> String {
    SECTION_TEMPLATE
        .replace(START_LINE, &start_line.to_string())
        .replace(END_LINE, &end_line.to_string())
}

/// System prompt asking for `min_chunks..=max_chunks` chunk starts.
pub fn chunk_prompt(start_line: usize, min_chunks: usize, max_chunks: usize) -> String {
    CHUNK_TEMPLATE
        .replace(START_LINE, &start_line.to_string())
        .replace(MIN_CHUNKS, &min_chunks.to_string())
        .replace(MAX_CHUNKS, &max_chunks.to_string())
}
