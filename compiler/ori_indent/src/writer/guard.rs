//! Scoped indentation.

use std::ops::{Deref, DerefMut};

use super::IndentedWriter;
use crate::sink::Close;

/// Raises the indent level for as long as it lives.
///
/// Derefs to the writer, so writes go through the guard. Dropping it restores
/// the level that was current when it was created.
///
/// ```
/// use ori_indent::IndentedWriter;
///
/// let mut out = String::new();
/// let mut writer = IndentedWriter::new(&mut out);
/// writer.write_line_str("root")?;
/// {
///     let mut child = writer.indented();
///     child.write_line_str("child")?;
/// }
/// writer.write_line_str("sibling")?;
/// drop(writer);
///
/// assert_eq!(out, "root\n child\nsibling\n");
/// # Ok::<(), ori_indent::WriteError>(())
/// ```
pub struct IndentGuard<'w, S: Close> {
    writer: &'w mut IndentedWriter<S>,
    previous: usize,
}

impl<S: Close> IndentedWriter<S> {
    /// Indent by one level until the returned guard is dropped.
    pub fn indented(&mut self) -> IndentGuard<'_, S> {
        self.indented_by(1)
    }

    /// Indent by `levels` until the returned guard is dropped.
    pub fn indented_by(&mut self, levels: usize) -> IndentGuard<'_, S> {
        let previous = self.state.level();
        self.state.set_level(previous.saturating_add(levels));
        IndentGuard {
            writer: self,
            previous,
        }
    }
}

impl<S: Close> Drop for IndentGuard<'_, S> {
    fn drop(&mut self) {
        self.writer.state.set_level(self.previous);
    }
}

impl<S: Close> Deref for IndentGuard<'_, S> {
    type Target = IndentedWriter<S>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<S: Close> DerefMut for IndentGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}
