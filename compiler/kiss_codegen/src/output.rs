//! The sink for emitted program text and error messages.

/// Where the compiler writes its output.
///
/// Program text arrives one line per [`Output::write_line`] call. On a fatal
/// error the driver writes the message and then calls [`Output::halt`]
/// exactly once; nothing is written after a halt.
pub trait Output {
    fn write(&mut self, text: &str);

    fn write_line(&mut self, text: &str);

    /// Compilation has stopped on an error.
    fn halt(&mut self);
}

impl<O: Output + ?Sized> Output for &mut O {
    #[inline]
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    #[inline]
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }

    #[inline]
    fn halt(&mut self) {
        (**self).halt();
    }
}
