// MIT LICENSE
//
// Copyright (c) 2021 Dash Core Group
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! Visualize

use std::io::{Result, Write};

use itertools::Itertools;

/// Pretty visualization of tree components.
pub trait Visualize {
    fn visualize<W: Write>(&self, drawer: Drawer<W>) -> Result<Drawer<W>>;
}

/// A `io::Write` proxy that tags every line with the current depth and
/// indents it by one space per level:
///
/// ```text
/// (0)  <text>
/// (1)   <text>
/// ```
pub struct Drawer<W: Write> {
    level: usize,
    write: W,
}

impl<W: Write> Drawer<W> {
    pub fn new(write: W) -> Self {
        Drawer { level: 0, write }
    }

    pub fn down(&mut self) {
        self.level += 1;
    }

    pub fn up(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Writes `buf` as one or more lines at the current depth. Embedded
    /// newlines start a new line with the same depth prefix.
    pub fn line(&mut self, buf: &[u8]) -> Result<()> {
        let prefix = format!("({}) {} ", self.level, " ".repeat(self.level));
        let sep = format!("\n{prefix}");
        self.write.write_all(prefix.as_bytes())?;
        let lines_iter = buf.split(|c| *c == b'\n');
        let interspersed_lines_iter = Itertools::intersperse(lines_iter, sep.as_bytes());
        for line in interspersed_lines_iter {
            self.write.write_all(line)?;
        }
        self.write.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.write.flush()
    }
}

/// Lowercase hex without prefix or separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// `visualize` shortcut to write straight into stdout offhand
pub fn visualize_stdout<T: Visualize + ?Sized>(value: &T) -> Result<()> {
    let out = std::io::stdout().lock();
    let mut drawer = value.visualize(Drawer::new(out))?;
    drawer.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Nested(&'static str, Vec<Nested>);

    impl Visualize for Nested {
        fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
            drawer.line(self.0.as_bytes())?;
            drawer.down();
            for child in &self.1 {
                drawer = child.visualize(drawer)?;
            }
            drawer.up();
            Ok(drawer)
        }
    }

    #[test]
    fn test_depth_prefix() {
        let value = Nested("root", vec![Nested("a", vec![Nested("b", vec![])]), Nested("c", vec![])]);
        let mut out = Vec::new();
        value.visualize(Drawer::new(&mut out)).expect("write to a vector");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "(0)  root\n(1)   a\n(2)    b\n(1)   c\n"
        );
    }

    #[test]
    fn test_multiline_keeps_prefix() {
        let mut out = Vec::new();
        let mut drawer = Drawer::new(&mut out);
        drawer.down();
        drawer.line(b"first\nsecond").expect("write to a vector");
        drawer.up();
        drawer.up();
        drawer.line(b"top").expect("write to a vector");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "(1)   first\n(1)   second\n(0)  top\n"
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x10]), "00ab10");
        assert_eq!(to_hex(&[]), "");
    }
}
