use std::{
    env,
    fs::File,
    io::{self, BufWriter, Read, Write},
    process::ExitCode,
};
use wordseg::WordSegmenter;

// Prints one `TYPE<TAB>start..end<TAB>"text"` line per segment of the file
// named on the command line, or of stdin.
fn main() -> ExitCode {
    env_logger::init();

    let source: Box<dyn Read> = match env::args_os().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("wordseg: {}: {e}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    match run(source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wordseg: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(source: impl Read) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut segmenter = WordSegmenter::new(source);
    while segmenter.segment() {
        if let Some(segment) = segmenter.current() {
            writeln!(
                out,
                "{}\t{}..{}\t{:?}",
                segment.kind,
                segment.start,
                segment.end,
                segmenter.text()
            )?;
        }
    }
    out.flush()?;
    match segmenter.err() {
        Some(e) => Err(e.to_string().into()),
        None => Ok(()),
    }
}
