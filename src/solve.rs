use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::fast_io::InputStream;
use crate::formula;

/// Reads the case count, then answers each case on its own line.
/// Returns the number of lines written.
pub fn run<I: InputStream, W: Write>(input: &mut I, output: &mut W) -> Result<usize> {
    let tt: usize = input.value().context("reading test case count")?;
    debug!(tt, "test cases");

    for i in 0..tt {
        let n: i64 = input
            .value()
            .with_context(|| format!("reading test case {} of {}", i + 1, tt))?;
        let ans = formula::eval(n);
        debug!(n, ans, "evaluated");
        writeln!(output, "{}", ans)?;
    }
    output.flush()?;
    Ok(tt)
}
