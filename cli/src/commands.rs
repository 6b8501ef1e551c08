//! Line-oriented command loop driving a [`Navigator`].

use std::error::Error as _;
use std::io::{self, BufRead, Write};

use anyhow::bail;
use dirnav_core::{BrowseError, DirSource, ExtensionFilter, Navigator};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    List,
    CursorDown,
    CursorUp,
    Enter,
    Cd(String),
    Up,
    Root(String),
    Filter(ExtensionFilter),
    Pwd,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "ls" => Command::List,
        "j" => Command::CursorDown,
        "k" => Command::CursorUp,
        "enter" | "o" => Command::Enter,
        "up" | ".." => Command::Up,
        "pwd" => Command::Pwd,
        "q" | "quit" | "exit" => Command::Quit,
        "cd" if rest.is_empty() => bail!("cd needs a directory name"),
        "cd" => Command::Cd(rest.to_string()),
        "root" if rest.is_empty() => bail!("root needs a path"),
        "root" => Command::Root(rest.to_string()),
        "filter" => Command::Filter(ExtensionFilter::parse(rest)),
        other => bail!("unknown command: {other}"),
    };
    Ok(Some(command))
}

/// Apply `command`. Navigation failures are reported on `out` and do not stop the loop.
pub(crate) fn execute<S, W>(
    nav: &mut Navigator<S>,
    command: Command,
    out: &mut W,
) -> io::Result<Flow>
where
    S: DirSource,
    W: Write,
{
    debug!(?command, "executing command");
    let outcome = match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::List => Ok(()),
        Command::Pwd => {
            writeln!(out, "{} (depth {})", nav.current_path().display(), nav.depth())?;
            return Ok(Flow::Continue);
        }
        Command::CursorDown => {
            nav.move_down();
            Ok(())
        }
        Command::CursorUp => {
            nav.move_up();
            Ok(())
        }
        Command::Enter => nav.enter_selected().map(|_| ()),
        Command::Cd(name) if name == ".." => nav.pop(),
        Command::Cd(name) => {
            let frame = nav.current_frame();
            let target = frame.path.join(name);
            let filter = frame.filter.clone();
            nav.push(target, filter)
        }
        Command::Up => nav.pop(),
        Command::Root(path) => {
            let filter = nav.current_frame().filter.clone();
            nav.reset(path, filter)
        }
        Command::Filter(filter) => nav.refilter(filter),
    };

    if let Err(err) = outcome {
        report(out, &err)?;
    }
    print_listing(nav, out)?;
    Ok(Flow::Continue)
}

/// Read commands until `q` or end of input.
pub(crate) fn run<S, R, W>(nav: &mut Navigator<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: DirSource,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if execute(nav, command, out)? == Flow::Quit {
            break;
        }
    }
    out.flush()
}

pub(crate) fn print_listing<S: DirSource, W: Write>(
    nav: &Navigator<S>,
    out: &mut W,
) -> io::Result<()> {
    let filter = &nav.current_frame().filter;
    if filter.is_accept_all() {
        writeln!(out, "{}", nav.current_path().display())?;
    } else {
        writeln!(out, "{} [{}]", nav.current_path().display(), filter)?;
    }

    for (idx, entry) in nav.listing().iter().enumerate() {
        let marker = if idx == nav.selected() { '>' } else { ' ' };
        let suffix = if entry.is_dir() { "/" } else { "" };
        writeln!(out, "{marker} {}{suffix}", entry.name)?;
    }
    Ok(())
}

pub(crate) fn report<W: Write>(out: &mut W, err: &BrowseError) -> io::Result<()> {
    match err.source() {
        Some(cause) => writeln!(out, "error: {err}: {cause}"),
        None => writeln!(out, "error: {err}"),
    }
}
