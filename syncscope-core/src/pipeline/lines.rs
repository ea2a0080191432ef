use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Lossy line reader for untrusted daemon output.
///
/// Invalid UTF-8 is replaced rather than failing the stream. The pending
/// buffer lives on the struct, so a `next_line` future dropped inside
/// `select!` loses no bytes.
#[derive(Debug)]
pub struct LineStream<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LineStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            buf: Vec::with_capacity(256),
        }
    }

    /// Next line without its terminator; `None` at end of stream.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.buf.clear();

        Ok(Some(line))
    }
}
