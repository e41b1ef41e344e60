use std::io::{self, BufRead, Write};

/// Write the low byte of `value`, like C `putchar`.
pub fn put_char<W: Write>(output: &mut W, value: i32) -> io::Result<()> {
    output.write_all(&[value as u8])
}

/// Write `value` in decimal with no separator.
pub fn put_int<W: Write>(output: &mut W, value: i32) -> io::Result<()> {
    write!(output, "{value}")
}

/// Read one decimal integer token, the way `scanf("%d")` does.
///
/// Leading whitespace is skipped, then an optional sign and a run of digits
/// are consumed. Returns `None` at end of input or when the next token is
/// not a number; the offending byte stays in the stream. Out-of-range values
/// saturate to the `i32` bounds.
pub fn read_int<R: BufRead>(input: &mut R) -> io::Result<Option<i32>> {
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let blanks = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let more = blanks == buf.len();
        input.consume(blanks);
        if !more {
            break;
        }
    }

    let mut negative = false;
    if let Some(sign @ (b'-' | b'+')) = peek(input)? {
        negative = sign == b'-';
        input.consume(1);
    }

    let mut magnitude: i64 = 0;
    let mut digits = 0usize;
    while let Some(b) = peek(input)? {
        if !b.is_ascii_digit() {
            break;
        }
        magnitude = (magnitude * 10 + i64::from(b - b'0')).min(1 << 32);
        digits += 1;
        input.consume(1);
    }

    if digits == 0 {
        return Ok(None);
    }
    let value = if negative { -magnitude } else { magnitude };
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Ok(Some(value))
}

fn peek<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}
