#[cfg(test)]
mod integration_tests {
    use crate::{
        ScanConfig, Scanner, Segment, SegmentError, UnicodeClassifier, WordSegmenter, WordSplitter,
        segment_words,
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::io::{self, Read};

    /// Reader that hands out at most `sizes[i % len]` bytes per call.
    pub(crate) struct ChunkedReader<'a> {
        data: &'a [u8],
        sizes: Vec<usize>,
        call: usize,
    }

    impl<'a> ChunkedReader<'a> {
        pub(crate) fn new(data: &'a [u8], sizes: Vec<usize>) -> Self {
            Self {
                data,
                sizes,
                call: 0,
            }
        }
    }

    impl Read for ChunkedReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let limit = self.sizes[self.call % self.sizes.len()].max(1);
            self.call += 1;
            let n = limit.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    pub(crate) fn small_buffers() -> ScanConfig {
        ScanConfig::builder()
            .initial_capacity(ScanConfig::MIN_BUFFER)
            .max_segment_size(1 << 20)
            .build()
    }

    pub(crate) fn pull_segments<R: Read>(reader: R, config: ScanConfig) -> Vec<Segment> {
        let mut segmenter = WordSegmenter::with_config(reader, config);
        let mut out = Vec::new();
        while segmenter.segment() {
            let current = segmenter.current().unwrap();
            assert_eq!(segmenter.bytes().len(), current.len());
            out.push(current);
        }
        assert!(segmenter.err().is_none(), "{:?}", segmenter.err());
        out
    }

    pub(crate) fn split_tokens<R: Read>(reader: R, config: ScanConfig) -> Vec<(usize, Vec<u8>)> {
        let splitter = WordSplitter::new(UnicodeClassifier);
        let mut scanner = Scanner::with_config(reader, splitter, config);
        let mut out = Vec::new();
        while scanner.scan() {
            out.push((scanner.offset(), scanner.bytes().to_vec()));
        }
        assert!(scanner.err().is_none(), "{:?}", scanner.err());
        out
    }

    const CORPUS: &str = "Now is the.\n End. cat3.5 3. don't 1,000,000.25 e.g. \
        こんにちは世界 你好世界 サッカーワールドカップ2026年 안녕하세요 Привет, мир! \
        ﾊﾝｶｸｶﾀｶﾅ ＡＢＣ１２３ emoji 😀👍 tab\tcr\r\nend";

    #[test]
    fn one_byte_at_a_time_matches_whole_input() {
        let expected = segment_words(CORPUS.as_bytes()).unwrap();
        let chunked = pull_segments(
            ChunkedReader::new(CORPUS.as_bytes(), vec![1]),
            small_buffers(),
        );
        assert_eq!(chunked, expected);
    }

    #[test]
    fn split_scanner_makes_the_same_decisions() {
        let expected: Vec<(usize, Vec<u8>)> = segment_words(CORPUS.as_bytes())
            .unwrap()
            .iter()
            .map(|s| (s.start, CORPUS.as_bytes()[s.range()].to_vec()))
            .collect();
        for sizes in [vec![1], vec![2, 3], vec![7], vec![4096]] {
            let tokens = split_tokens(ChunkedReader::new(CORPUS.as_bytes(), sizes), small_buffers());
            assert_eq!(tokens, expected);
        }
    }

    #[test]
    fn seeded_random_chunking() {
        let mut rng = StdRng::seed_from_u64(0x5EC_2026);
        let expected = segment_words(CORPUS.as_bytes()).unwrap();
        for _ in 0..200 {
            let sizes: Vec<usize> = (0..16).map(|_| rng.random_range(1..=9)).collect();
            let initial = rng.random_range(ScanConfig::MIN_BUFFER..=64);
            let config = ScanConfig::builder()
                .initial_capacity(initial)
                .max_segment_size(1 << 16)
                .build();
            let got = pull_segments(ChunkedReader::new(CORPUS.as_bytes(), sizes), config);
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn spans_cover_the_input() {
        let segments = pull_segments(CORPUS.as_bytes(), ScanConfig::default());
        let mut rebuilt = Vec::new();
        let mut cursor = 0;
        for segment in &segments {
            assert_eq!(segment.start, cursor);
            assert!(!segment.is_empty());
            rebuilt.extend_from_slice(segment.bytes_in(CORPUS.as_bytes()).unwrap());
            cursor = segment.end;
        }
        assert_eq!(rebuilt, CORPUS.as_bytes());
    }

    #[test]
    fn decode_error_is_chunking_independent() {
        let mut input = b"abc def".to_vec();
        input.extend_from_slice(b"\xE4\x41 tail");
        for size in 1..=6 {
            let mut segmenter = WordSegmenter::with_config(
                ChunkedReader::new(&input, vec![size]),
                small_buffers(),
            );
            let mut texts = Vec::new();
            while segmenter.segment() {
                texts.push(segmenter.text().into_owned());
            }
            assert_eq!(texts, ["abc", " ", "def"], "chunk size {size}");
            assert!(
                matches!(
                    segmenter.err(),
                    Some(SegmentError::Decode(crate::DecodeError::Invalid { offset: 7 }))
                ),
                "chunk size {size}: {:?}",
                segmenter.err()
            );
        }
    }

    #[test]
    fn long_words_grow_the_buffer() {
        let word = "x".repeat(10_000);
        let input = format!("{word} {word}");
        let segments = pull_segments(ChunkedReader::new(input.as_bytes(), vec![13]), small_buffers());
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 10_000);
        assert_eq!(segments[2].range(), 10_001..20_001);
    }
}
