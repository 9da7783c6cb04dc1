use clap::Parser;
use colored::*;
use cornotes::api::NotesApi;
use cornotes::commands::{CmdMessage, DisplayNote, MessageLevel};
use cornotes::error::{NotesError, Result};
use cornotes::model::{Field, NoteFields, Theme, UNTITLED};
use cornotes::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::List) => handle_list(&mut api),
        Some(Commands::Export { index, output }) => handle_export(&mut api, index, output),
        Some(Commands::Theme { value }) => handle_theme(&mut api, value),
        None => run_session(&mut api),
    }
}

fn init_api(cli: &Cli) -> Result<NotesApi<FileStore>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "cornotes", "cornotes")
            .ok_or_else(|| NotesError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    Ok(NotesApi::new(FileStore::new(data_dir)))
}

/// Terminal rendering, themed. The persisted light/dark preference
/// selects the accent palette.
struct Ui {
    theme: Theme,
}

impl Ui {
    fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn accent(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.blue(),
            Theme::Dark => s.bright_cyan(),
        }
    }

    fn print_messages(&self, messages: &[CmdMessage]) {
        for message in messages {
            match message.level {
                MessageLevel::Info => println!("{}", message.content.dimmed()),
                MessageLevel::Success => println!("{}", message.content.green()),
                MessageLevel::Warning => println!("{}", message.content.yellow()),
                MessageLevel::Error => println!("{}", message.content.red()),
            }
        }
    }

    fn print_notes(&self, notes: &[DisplayNote]) {
        if notes.is_empty() {
            println!("No notes yet.");
            return;
        }

        for dn in notes {
            let marker = if dn.active { "* " } else { "  " };
            let idx_str = format!("{}. ", dn.index);
            let title = if dn.note.title.is_empty() {
                UNTITLED
            } else {
                dn.note.title.as_str()
            };

            let time_ago = format_time_ago(dn.note.last_modified);
            let fixed = marker.len() + idx_str.width() + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);
            let title_display = truncate_to_width(title, available);
            let padding = available.saturating_sub(title_display.width());

            let line = format!(
                "{}{}{}{}{}",
                marker,
                idx_str,
                title_display,
                " ".repeat(padding),
                time_ago.dimmed()
            );
            if dn.active {
                println!("{}", self.accent(&line));
            } else {
                println!("{}", line);
            }
        }
    }

    fn print_detail(&self, fields: &NoteFields) {
        let title = if fields.title.is_empty() {
            UNTITLED
        } else {
            fields.title.as_str()
        };
        println!("{}", self.accent(title).bold());
        println!("--------------------------------");
        println!("{}", "Cues / Questions".bold());
        println!("{}\n", fields.cues);
        println!("{}", "Main Notes".bold());
        println!("{}\n", fields.main);
        println!("{}", "Summary".bold());
        println!("{}", fields.summary);
    }
}

/// y/n gate for destructive actions and draft restore. EOF declines.
fn confirm(question: &str) -> bool {
    match prompt_line(&format!("{} [y/N] ", question)) {
        Ok(Some(line)) => matches!(line.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn handle_list(api: &mut NotesApi<FileStore>) -> Result<()> {
    let started = api.startup(&mut |q| confirm(q))?;
    let ui = Ui::new(started.theme.unwrap_or_default());
    let result = api.list()?;
    ui.print_notes(&result.listed_notes);
    Ok(())
}

fn handle_export(
    api: &mut NotesApi<FileStore>,
    index: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let started = api.startup(&mut |q| confirm(q))?;
    let ui = Ui::new(started.theme.unwrap_or_default());

    api.select_by_index(index)?;
    let out_dir = output.unwrap_or_else(|| PathBuf::from("."));
    let result = api.export(&out_dir)?;
    if let Some(path) = &result.exported_path {
        println!("{}", path.display());
    }
    ui.print_messages(&result.messages);
    Ok(())
}

fn handle_theme(api: &mut NotesApi<FileStore>, value: Option<String>) -> Result<()> {
    let result = match value.as_deref() {
        None => api.theme()?,
        Some("light") => api.set_theme(Theme::Light)?,
        Some("dark") => api.set_theme(Theme::Dark)?,
        Some(other) => {
            return Err(NotesError::Api(format!(
                "Unknown theme: {} (expected \"light\" or \"dark\")",
                other
            )))
        }
    };
    if let Some(theme) = result.theme {
        println!("{}", theme.as_str());
    }
    Ok(())
}

fn run_session(api: &mut NotesApi<FileStore>) -> Result<()> {
    let started = api.startup(&mut |q| confirm(q))?;
    let mut ui = Ui::new(started.theme.unwrap_or_default());
    ui.print_messages(&started.messages);
    ui.print_notes(&api.list()?.listed_notes);
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());

    loop {
        // Cooperative timer: pending auto-save fires between commands.
        if let Some(fired) = api.poll_autosave(Instant::now())? {
            ui.print_messages(&fired.messages);
        }

        let Some(line) = prompt_line("> ")? else {
            break;
        };
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "help" | "?" => print_help(),
            "new" | "n" => {
                let result = api.new_note()?;
                ui.print_messages(&result.messages);
            }
            "save" | "w" => {
                let result = api.save()?;
                ui.print_messages(&result.messages);
                if !result.has_error() {
                    ui.print_notes(&api.list()?.listed_notes);
                }
            }
            "delete" | "rm" => {
                let result = api.delete(&mut |q| confirm(q))?;
                ui.print_messages(&result.messages);
            }
            "select" | "s" => match rest.parse::<usize>() {
                Ok(n) => match api.select_by_index(n) {
                    Ok(_) => ui.print_detail(api.fields()),
                    Err(NotesError::Api(msg)) => println!("{}", msg.red()),
                    Err(e) => return Err(e),
                },
                Err(_) => println!("{}", "Usage: select <index>".yellow()),
            },
            "list" | "ls" => ui.print_notes(&api.list()?.listed_notes),
            "show" => ui.print_detail(api.fields()),
            "export" | "x" => {
                let result = api.export(Path::new("."))?;
                if let Some(path) = &result.exported_path {
                    println!("{}", path.display());
                }
                ui.print_messages(&result.messages);
            }
            "theme" => {
                let result = api.toggle_theme()?;
                if let Some(theme) = result.theme {
                    ui.theme = theme;
                }
                ui.print_messages(&result.messages);
            }
            "title" => api.edit_field(Field::Title, rest.to_string(), Instant::now()),
            "cues" => api.edit_field(Field::Cues, rest.to_string(), Instant::now()),
            "main" => api.edit_field(Field::Main, rest.to_string(), Instant::now()),
            "summary" => api.edit_field(Field::Summary, rest.to_string(), Instant::now()),
            "quit" | "exit" | "q" => break,
            other => println!("{}", format!("Unknown command: {}", other).yellow()),
        }
    }

    // Trailing edits must not be lost when the session ends.
    if let Some(fired) = api.flush_pending()? {
        ui.print_messages(&fired.messages);
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  new                start a new note");
    println!("  title <text>       set the title field");
    println!("  cues <text>        set the cues / questions field");
    println!("  main <text>        set the main notes field");
    println!("  summary <text>     set the summary field");
    println!("  save               save the current note");
    println!("  select <index>     switch to a note from the list");
    println!("  list               list notes, newest first");
    println!("  show               show the current note");
    println!("  export             export the current note as Markdown");
    println!("  delete             delete the current note");
    println!("  theme              toggle light/dark theme");
    println!("  quit               leave (pending draft auto-save flushes)");
}

fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
