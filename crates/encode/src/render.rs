use std::fmt;
use std::fmt::Write;

/// A text sink that document elements are rendered into.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> fmt::Result;

    /// Appends formatted text to the output.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> fmt::Result {
        self.push_str(data);
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        Write::write_fmt(self, args)
    }
}

/// An element that knows how to write itself into an [OutputStream].
pub trait Render {
    /// Renders the element.
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream;
}

impl<R: Render> Render for [R] {
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream,
    {
        for element in self {
            element.render(output)?;
        }

        Ok(())
    }
}

/// Renders an element into a new string.
pub fn to_string<R: Render + ?Sized>(element: &R) -> Result<String, fmt::Error> {
    let mut output = String::new();
    element.render(&mut output)?;
    Ok(output)
}
