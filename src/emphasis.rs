//! BBCode emphasis wrapping.
//!
//! Opening tags are emitted in the fixed order underline, bold, italic and
//! closed in reverse, so the markup always nests correctly.

/// Which emphasis tags to apply to a piece of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub underline: bool,
    pub bold: bool,
    pub italic: bool,
}

impl Emphasis {
    /// Tag table in display order.
    fn table(self) -> [(bool, &'static str); 3] {
        [(self.underline, "u"), (self.bold, "b"), (self.italic, "i")]
    }

    fn active(self) -> impl DoubleEndedIterator<Item = &'static str> {
        self.table()
            .into_iter()
            .filter_map(|(enabled, tag)| enabled.then_some(tag))
    }

    /// Opening tags, outermost first.
    #[must_use]
    pub fn open(self) -> String {
        self.active().map(|tag| format!("[{tag}]")).collect()
    }

    /// Closing tags, innermost first.
    #[must_use]
    pub fn close(self) -> String {
        self.active().rev().map(|tag| format!("[/{tag}]")).collect()
    }

    /// Surround `text` with the enabled tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtsbb::Emphasis;
    ///
    /// let e = Emphasis { underline: true, bold: true, italic: false };
    /// assert_eq!(e.wrap("Squat"), "[u][b]Squat[/b][/u]");
    /// ```
    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        format!("{}{text}{}", self.open(), self.close())
    }
}
