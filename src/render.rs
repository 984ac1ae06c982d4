//! The print driver - materializing views into labeled text lines.
//!
//! A [`Renderer`] wraps any [`io::Write`] sink and writes one line per
//! call: the label, a colon, then every element's textual form followed by
//! a single space, closed by a line break. The element separator comes
//! after every element, so a rendered line always ends `"... \n"` and an
//! empty view renders as `"label: \n"`.
//!
//! Sink failures propagate as [`io::Result`]; nothing here panics.
//!
//! # Examples
//!
//! ```rust
//! use seqview::render::Renderer;
//!
//! let mut renderer = Renderer::new(Vec::new());
//! renderer.line("Numbers", [1, 2, 3]).unwrap();
//! assert_eq!(renderer.into_inner(), b"Numbers: 1 2 3 \n");
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// Writes labeled, space-separated sequence lines to a sink.
///
/// The renderer holds no state besides the sink; each [`line`](Self::line)
/// call consumes its elements exactly once and is independent of every
/// other call.
#[derive(Debug)]
pub struct Renderer<W> {
    sink: W,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer over the given sink.
    #[inline]
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Renders one labeled line, consuming the elements.
    ///
    /// Writes `"{label}: "`, then each element followed by a space, then a
    /// line break.
    ///
    /// # Arguments
    ///
    /// * `label` - The line prefix, written before the colon
    /// * `elements` - The sequence or view to materialize onto the line
    ///
    /// # Errors
    ///
    /// Returns any error the underlying sink reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::render::Renderer;
    ///
    /// let mut renderer = Renderer::new(Vec::new());
    /// renderer.line("Empty", std::iter::empty::<i32>()).unwrap();
    /// assert_eq!(renderer.into_inner(), b"Empty: \n");
    /// ```
    pub fn line<I>(&mut self, label: &str, elements: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        write!(self.sink, "{label}: ")?;
        for element in elements {
            write!(self.sink, "{element} ")?;
        }
        writeln!(self.sink)
    }

    /// Consumes the renderer and returns the sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Renders one labeled line to standard output.
///
/// Convenience wrapper over a [`Renderer`] holding a locked stdout handle
/// for the duration of the line.
///
/// # Errors
///
/// Returns any error reported while writing to standard output.
///
/// # Examples
///
/// ```rust,no_run
/// use seqview::render::print_line;
/// use seqview::view::Viewable;
///
/// print_line("Even numbers", (1..=5).filter_view(|n| n % 2 == 0)).unwrap();
/// ```
pub fn print_line<I>(label: &str, elements: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = io::stdout();
    Renderer::new(stdout.lock()).line(label, elements)
}
