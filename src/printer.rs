use crate::Options;
use std::fmt::Display;
use std::io::{BufWriter, Write};

pub fn print<C, W>(container: C, writer: &mut W) -> anyhow::Result<()>
where
    C: IntoIterator,
    C::Item: Display,
    W: Write + ?Sized,
{
    print_with(container, writer, &Options::default())
}

fn print_with<C, W>(container: C, writer: &mut W, opts: &Options) -> anyhow::Result<()>
where
    C: IntoIterator,
    C::Item: Display,
    W: Write + ?Sized,
{
    let Options {
        separator,
        terminator,
    } = opts;

    let mut writer = BufWriter::new(writer);
    container
        .into_iter()
        .try_for_each(|el| write!(writer, "{}{}", el, separator))?;
    write!(writer, "{}", terminator)?;
    // a dropped BufWriter swallows its flush error
    writer.flush()?;

    Ok(())
}

pub fn print_stdout<C>(container: C) -> anyhow::Result<()>
where
    C: IntoIterator,
    C::Item: Display,
{
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    print(container, &mut stdout)
}
