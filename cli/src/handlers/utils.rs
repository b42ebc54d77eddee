use core::fmt;
use std::io;

/// Lets an [`io::Write`] (like stdout) be used where handlers expect a [`fmt::Write`].
pub struct WriteAdapter<W>(pub W);

impl<W> fmt::Write for WriteAdapter<W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.0.write_fmt(args).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fmt::Write as _;

    #[test]
    fn test_write_adapter() {
        let mut adapter = WriteAdapter(Vec::new());
        write!(adapter, "{} by {}", "Blue", "Joni Mitchell").unwrap();
        adapter.write_str("\n").unwrap();
        assert_eq!(adapter.0, b"Blue by Joni Mitchell\n");
    }
}
