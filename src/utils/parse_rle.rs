use crate::Cell;
use anyhow::{anyhow, bail, ensure, Context, Result};

/// Rule strings accepted in the header, lowercase.
const SUPPORTED_RULES: [&str; 2] = ["b3/s23", "23/3"];

/// Upper bound on each side of the declared pattern box.
const MAX_SIDE: u32 = 1 << 20;
/// Upper bound on the number of live cells in one pattern.
const MAX_CELLS: usize = 1 << 22;

/// Returns the live cells of the parsed RLE pattern, top left corner at `(0, 0)`.
pub fn parse_rle(data: &[u8]) -> Result<Vec<Cell>> {
    let text = std::str::from_utf8(data).context("RLE data is not valid UTF-8")?;
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    // skipping comment lines; next line must start with 'x'
    let header = lines
        .by_ref()
        .find(|l| !l.starts_with('#'))
        .ok_or_else(|| anyhow!("RLE header is missing"))?;
    let (width, height) = parse_header(header)?;

    // run-length encoded pattern data
    let body = lines.collect::<String>();
    let mut result = vec![];
    let (mut x, mut y, mut cnt) = (0i64, 0i64, None::<i64>);
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let given = cnt.take();
        let run = given.unwrap_or(1);
        match c {
            '0'..='9' => {
                let mut j = i + 1;
                while let Some(&(k, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    chars.next();
                    j = k + 1;
                }
                let n = body[i..j]
                    .parse::<u32>()
                    .map(i64::from)
                    .with_context(|| format!("bad run count {:?}", &body[i..j]))?;
                ensure!(given.is_none(), "two run counts in a row at offset {i}");
                cnt = Some(n);
            }
            // `x <= width`, `y <= height` and `run <= u32::MAX` keep the sums below `i64::MAX`
            'o' => {
                ensure!(
                    run <= width - x && y < height,
                    "cell ({}, {y}) is outside of the declared {width}x{height} box",
                    x + run - 1
                );
                ensure!(
                    result.len() + run as usize <= MAX_CELLS,
                    "pattern has more than {MAX_CELLS} live cells"
                );
                result.extend((x..x + run).map(|x| Cell::new(x, y)));
                x += run;
            }
            'b' => {
                ensure!(
                    run <= width - x,
                    "row {y} is longer than the declared width {width}"
                );
                x += run;
            }
            '$' => {
                ensure!(
                    run <= height - y,
                    "pattern is taller than the declared height {height}"
                );
                (x, y) = (0, y + run);
            }
            '!' => return Ok(result),
            c => bail!("unexpected symbol {c:?} at offset {i}"),
        }
    }
    Ok(result)
}

/// Parses `x = W, y = H[, rule = R]`.
fn parse_header(line: &str) -> Result<(i64, i64)> {
    let (mut width, mut height) = (None, None);
    for field in line.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("malformed RLE header field {field:?}"))?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(parse_size(value)?),
            "y" => height = Some(parse_size(value)?),
            "rule" => {
                let rule = value.to_ascii_lowercase();
                ensure!(
                    SUPPORTED_RULES.contains(&rule.as_str()),
                    "unsupported rule {value:?}, only B3/S23 is simulated"
                );
            }
            other => log::warn!("ignoring unknown RLE header field {other:?}"),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => bail!("RLE header {line:?} must contain both x and y"),
    }
}

fn parse_size(value: &str) -> Result<i64> {
    let size = value
        .parse::<u32>()
        .with_context(|| format!("bad pattern size {value:?}"))?;
    ensure!(size <= MAX_SIDE, "pattern size {size} exceeds {MAX_SIDE}");
    Ok(i64::from(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider() {
        let data = b"#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let mut cells = parse_rle(data).unwrap();
        cells.sort_unstable();
        let expected = [(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)].map(Cell::from);
        assert_eq!(cells, expected.to_vec());
    }

    #[test]
    fn test_multiline_and_row_runs() {
        let data = b"x = 4, y = 4\n2o2$\n2bo\nb!";
        let mut cells = parse_rle(data).unwrap();
        cells.sort_unstable();
        assert_eq!(cells, [(0, 0), (1, 0), (2, 2)].map(Cell::from).to_vec());
    }

    #[test]
    fn test_missing_terminator_is_accepted() {
        let cells = parse_rle(b"x = 3, y = 1\n3o").unwrap();
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_errors() {
        assert!(parse_rle(b"").is_err());
        assert!(parse_rle(b"#C only comments\n").is_err());
        assert!(parse_rle(b"x = 3\n3o!").is_err());
        assert!(parse_rle(b"x = 3, y = 1, rule = B36/S23\n3o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n3o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n$o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n2z!").is_err());
        assert!(parse_rle(b"x = -2, y = 1\no!").is_err());
    }

    #[test]
    fn test_huge_runs_are_rejected() {
        for symbol in ['o', 'b', '$'] {
            for count in ["4294967295", "9223372036854775807"] {
                let data = format!("x = 3, y = 1\no{count}{symbol}!");
                assert!(parse_rle(data.as_bytes()).is_err(), "{data:?}");
            }
        }
        // a run that fits the box still may not overrun the remaining width
        assert!(parse_rle(b"x = 3, y = 1\n2b2o!").is_err());
        assert!(parse_rle(b"x = 3, y = 2\n3o2$o!").is_err());
    }

    #[test]
    fn test_huge_boxes_are_rejected() {
        assert!(parse_rle(b"x = 4294967295, y = 1\n4294967295o!").is_err());
        let rows = MAX_CELLS / MAX_SIDE as usize + 1;
        let body = format!("{MAX_SIDE}o$").repeat(rows);
        let data = format!("x = {MAX_SIDE}, y = {MAX_SIDE}\n{body}");
        assert!(parse_rle(data.as_bytes()).is_err());
        let data = format!("x = {MAX_SIDE}, y = 1\n{MAX_SIDE}o!");
        assert_eq!(parse_rle(data.as_bytes()).unwrap().len(), MAX_SIDE as usize);
    }

    #[test]
    fn test_rule_is_case_insensitive() {
        assert!(parse_rle(b"x = 1, y = 1, rule = b3/s23\no!").is_ok());
        assert!(parse_rle(b"x = 1, y = 1, rule = 23/3\no!").is_ok());
    }
}
