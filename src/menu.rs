//! Interactive menu for barky.
//!
//! The presentation layer: shows the options, reads the user's choice, runs
//! the option's preparation step (prompting for fields), executes the
//! command and prints its result. All prompts read from a `BufRead` and write
//! to a `Write` so the loop can be driven by stdin/stdout or by a test buffer.

use std::fmt;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::commands::{
    AddBookmarkCommand, Command, CommandInput, CommandOutput, DeleteBookmarkCommand,
    ListBookmarksCommand, QuitCommand,
};
use crate::database::Database;
use crate::types::bookmark::NewBookmark;
use crate::types::errors::MenuError;

/// A preparation step that gathers a command's input from the user.
pub type PrepCall = fn(&mut dyn BufRead, &mut dyn Write) -> Result<CommandInput, MenuError>;

/// One entry of the menu: a label, its command, and an optional prep step.
pub struct MenuOption<'a> {
    name: String,
    command: Box<dyn Command + 'a>,
    prep_call: Option<PrepCall>,
}

impl<'a> MenuOption<'a> {
    pub fn new(
        name: impl Into<String>,
        command: Box<dyn Command + 'a>,
        prep_call: Option<PrepCall>,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            prep_call,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the prep step, if any, then executes the command with its result.
    pub fn choose(
        &self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<CommandOutput, MenuError> {
        let data = match self.prep_call {
            Some(prep) => Some(prep(input, out)?),
            None => None,
        };
        Ok(self.command.execute(data)?)
    }
}

impl fmt::Display for MenuOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Menu options keyed by their upper-case shortcut, in display order.
pub struct Menu<'a> {
    options: Vec<(String, MenuOption<'a>)>,
}

impl<'a> Menu<'a> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Adds an option under `shortcut`, replacing any option already using it.
    pub fn insert(&mut self, shortcut: &str, option: MenuOption<'a>) {
        let key = shortcut.to_uppercase();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = option,
            None => self.options.push((key, option)),
        }
    }

    /// The standard bookmark menu over `db`.
    pub fn bookmarks(db: &'a Database) -> Self {
        let mut menu = Self::new();
        menu.insert(
            "A",
            MenuOption::new(
                "Add a bookmark",
                Box::new(AddBookmarkCommand::new(db)),
                Some(get_new_bookmark_data),
            ),
        );
        menu.insert(
            "B",
            MenuOption::new(
                "List bookmarks by date",
                Box::new(ListBookmarksCommand::default_order(db)),
                None,
            ),
        );
        menu.insert(
            "T",
            MenuOption::new(
                "List bookmarks by title",
                Box::new(ListBookmarksCommand::new(db, "title")),
                None,
            ),
        );
        menu.insert(
            "D",
            MenuOption::new(
                "Delete a bookmark",
                Box::new(DeleteBookmarkCommand::new(db)),
                Some(get_bookmark_id_for_deletion),
            ),
        );
        menu.insert(
            "Q",
            MenuOption::new("Quit", Box::new(QuitCommand::new()), None),
        );
        menu
    }

    pub fn get(&self, shortcut: &str) -> Option<&MenuOption<'a>> {
        self.options
            .iter()
            .find(|(k, _)| k == shortcut)
            .map(|(_, option)| option)
    }

    pub fn shortcuts(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuOption<'a>)> {
        self.options.iter().map(|(k, option)| (k.as_str(), option))
    }
}

impl Default for Menu<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints `(<shortcut>) <name>` for each option, then a blank line.
pub fn print_options(options: &Menu<'_>, out: &mut dyn Write) -> io::Result<()> {
    for (shortcut, option) in options.iter() {
        writeln!(out, "({}) {}", shortcut, option)?;
    }
    writeln!(out)
}

/// A choice is valid when it, or its upper-case form, is a shortcut.
pub fn option_choice_is_valid(choice: &str, options: &Menu<'_>) -> bool {
    find_option(choice, options).is_some()
}

fn find_option<'m, 'a>(choice: &str, options: &'m Menu<'a>) -> Option<&'m MenuOption<'a>> {
    let choice = choice.trim();
    options
        .get(choice)
        .or_else(|| options.get(&choice.to_uppercase()))
}

/// Prompts until the user names a valid option.
pub fn get_option_choice<'m, 'a>(
    options: &'m Menu<'a>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<&'m MenuOption<'a>, MenuError> {
    loop {
        let choice = prompt(input, out, "Choose an option: ")?;
        if let Some(option) = find_option(&choice, options) {
            return Ok(option);
        }
        writeln!(out, "Invalid choice")?;
    }
}

/// Prompts `<label>: ` and returns the answer as typed, `None` when blank.
///
/// When `required` is set the prompt repeats until a non-blank answer is given.
pub fn get_user_input(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
    required: bool,
) -> Result<Option<String>, MenuError> {
    let question = format!("{}: ", label);
    loop {
        let answer = prompt(input, out, &question)?;
        if !answer.trim().is_empty() {
            return Ok(Some(answer));
        }
        if !required {
            return Ok(None);
        }
    }
}

fn get_required_input(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
) -> Result<String, MenuError> {
    get_user_input(input, out, label, true)?.ok_or(MenuError::EndOfInput)
}

/// Collects title, URL and optional notes for a new bookmark.
pub fn get_new_bookmark_data(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<CommandInput, MenuError> {
    let title = get_required_input(input, out, "Title")?;
    let url = get_required_input(input, out, "URL")?;
    let notes = get_user_input(input, out, "Notes", false)?;
    Ok(CommandInput::Bookmark(NewBookmark::new(title, url, notes)?))
}

/// Prompts for the id of the bookmark to delete until a number is given.
pub fn get_bookmark_id_for_deletion(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<CommandInput, MenuError> {
    loop {
        let answer = get_required_input(input, out, "Enter a bookmark ID to delete")?;
        match answer.trim().parse::<i64>() {
            Ok(id) => return Ok(CommandInput::Id(id)),
            Err(_) => writeln!(out, "Please enter a numeric ID")?,
        }
    }
}

/// Clears the terminal and moves the cursor to the top-left corner.
pub fn clear_screen(mut out: &mut dyn Write) -> io::Result<()> {
    execute!(&mut out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Formats a command's output for display.
pub fn render(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Message(message) => message.clone(),
        CommandOutput::Bookmarks(bookmarks) if bookmarks.is_empty() => {
            "No bookmarks saved.".to_string()
        }
        CommandOutput::Bookmarks(bookmarks) => bookmarks
            .iter()
            .map(|b| {
                format!(
                    "{} | {} | {} | {} | {}",
                    b.id,
                    b.title,
                    b.url,
                    b.notes.as_deref().unwrap_or(""),
                    b.date_added
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        CommandOutput::Done => String::new(),
    }
}

/// One pass of the menu: show options, run the chosen one, wait for ENTER.
///
/// Command failures are printed and the pass completes normally; terminal
/// errors and end of input are returned.
pub fn run_once(
    options: &Menu<'_>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), MenuError> {
    clear_screen(out)?;
    print_options(options, out)?;
    let chosen = get_option_choice(options, input, out)?;
    clear_screen(out)?;

    match chosen.choose(input, out) {
        Ok(result) => writeln!(out, "{}", render(&result))?,
        Err(MenuError::Command(e)) => {
            debug!(option = chosen.name(), error = %e, "command failed");
            writeln!(out, "Error: {}", e)?;
        }
        Err(e) => return Err(e),
    }

    prompt(input, out, "Press ENTER to return to menu")?;
    Ok(())
}

/// Runs the menu until Quit exits the process or input ends.
pub fn run(options: &Menu<'_>, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), MenuError> {
    loop {
        match run_once(options, input, out) {
            Ok(()) => continue,
            Err(MenuError::EndOfInput) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

/// Writes `question`, flushes, and reads one line without its line ending.
fn prompt(input: &mut dyn BufRead, out: &mut dyn Write, question: &str) -> Result<String, MenuError> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MenuError::EndOfInput);
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    Ok(answer.to_string())
}
