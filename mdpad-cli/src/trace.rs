use anyhow::{bail, Context, Result};

/// Data register behaviour after one strobe write on the traced port.
///
/// Successive reads return `reads` in order; the last value repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub reads: Vec<u8>,
}

/// Parse a bus trace.
///
/// Tokens are separated by whitespace and `#` starts a comment. Each token
/// is one strobe step: a hex byte (`3F`) or a chain of reads that settles on
/// its last value (`FF>FF>3F`).
pub fn parse_trace(input: &str) -> Result<Vec<TraceStep>> {
    let mut steps = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        for token in line.split_whitespace() {
            let reads = token
                .split('>')
                .map(parse_byte)
                .collect::<Result<Vec<u8>>>()
                .with_context(|| format!("line {}: bad token '{}'", line_num + 1, token))?;
            steps.push(TraceStep { reads });
        }
    }

    if steps.is_empty() {
        bail!("trace contains no steps");
    }

    Ok(steps)
}

fn parse_byte(part: &str) -> Result<u8> {
    if part.is_empty() {
        bail!("empty read in chain");
    }
    if part.len() > 2 {
        bail!("'{}' is wider than one byte", part);
    }
    u8::from_str_radix(part, 16).with_context(|| format!("invalid hex '{}'", part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_trace() {
        let steps = parse_trace("FF D0 DF\n").unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].reads, vec![0xD0]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let trace = "# detect\n\
                     FF FF FF FF F0   # id phase\n\
                     \n\
                     ff\n";
        let steps = parse_trace(trace).unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[4].reads, vec![0xF0]);
        assert_eq!(steps[5].reads, vec![0xFF]);
    }

    #[test]
    fn test_glitch_chain() {
        let steps = parse_trace("FF>7F>3F").unwrap();
        assert_eq!(steps, vec![TraceStep { reads: vec![0xFF, 0x7F, 0x3F] }]);
    }

    #[test]
    fn test_error_names_line() {
        let err = parse_trace("FF\nFF ZZ\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_rejects_bad_chains() {
        assert!(parse_trace("FF>>3F").is_err());
        assert!(parse_trace("1FF").is_err());
        assert!(parse_trace("# nothing\n").is_err());
    }
}
