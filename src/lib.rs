use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::Rng;

pub const MIN_WORD_LEN: usize = 1;
pub const MAX_WORD_LEN: usize = 11;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub words_written: u64,
    pub bytes_written: u64,
}

/// A word: 1 to 11 lowercase letters, each drawn independently.
pub fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(MIN_WORD_LEN..=MAX_WORD_LEN);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Writes space-terminated random words until `byte_target` bytes have been
/// written. Every word, including the last, is followed by a single space.
pub fn generate_into<W: Write, R: Rng>(
    out: &mut W,
    byte_target: u64,
    rng: &mut R,
) -> anyhow::Result<Report> {
    let mut report = Report {
        words_written: 0,
        bytes_written: 0,
    };
    while report.bytes_written < byte_target {
        let word = random_word(rng);
        out.write_all(word.as_bytes())?;
        out.write_all(b" ")?;
        report.bytes_written += word.len() as u64 + 1;
        report.words_written += 1;
    }
    Ok(report)
}

/// Creates (or truncates) `path` and fills it to at least `byte_target`
/// bytes. A target of zero leaves the file empty.
pub fn generate<P: AsRef<Path>, R: Rng>(
    path: P,
    byte_target: u64,
    rng: &mut R,
) -> anyhow::Result<Report> {
    let mut out = BufWriter::new(File::create(path)?);
    let report = generate_into(&mut out, byte_target, rng)?;
    out.flush()?;
    Ok(report)
}
