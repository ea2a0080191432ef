use crate::pipeline::LineStream;
use pretty_assertions::assert_eq;
use std::io::Cursor;

async fn collect(bytes: &[u8]) -> Vec<String> {
    let mut stream = LineStream::new(Cursor::new(bytes.to_vec()));
    let mut out = Vec::new();
    while let Some(line) = stream.next_line().await.unwrap() {
        out.push(line);
    }
    out
}

#[tokio::test]
async fn splits_lines_and_strips_terminators() {
    let lines = collect(b"first\r\nsecond\n\nlast").await;

    assert_eq!(lines, vec!["first", "second", "", "last"]);
}

#[tokio::test]
async fn invalid_utf8_is_replaced_not_fatal() {
    let lines = collect(b"offset\xff = 5\nok\n").await;

    assert_eq!(lines, vec!["offset\u{FFFD} = 5".to_string(), "ok".to_string()]);
}

#[tokio::test]
async fn empty_input_ends_immediately() {
    assert!(collect(b"").await.is_empty());
}
