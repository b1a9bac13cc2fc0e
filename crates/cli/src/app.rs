//! Application state and the top-level menu.
//!
//! `AppState` owns the base table and the active constraints. Menu items
//! carry a `Command`, and `AppState::dispatch` is the single place where a
//! command turns into prompts, a store or filter operation, and output.

use anyhow::Result;
use colored::Colorize;
use data_loader::{with_csv_extension, write_csv, TableStore};
use filters::{ComparisonOp, ConstraintSet, FieldKind, FilterField};
use menu::{Console, Menu, MenuError, MenuHandler, MenuItem};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::render;

/// Columns shown for title search results
const SEARCH_COLUMNS: [&str; 2] = ["show_id", "title"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddFilter(FilterField),
    RemoveFilter,
    FindByTitle,
    ShowFiltered,
    SaveToCsv,
}

/// The top-level looping menu, with "Add filter" as a submenu of fields
pub fn main_menu() -> Menu<Command> {
    let add_filter_items = FilterField::ALL
        .into_iter()
        .map(|field| MenuItem::action(field.label(), Command::AddFilter(field)))
        .collect();

    Menu::looping(vec![
        MenuItem::submenu("Add filter", add_filter_items),
        MenuItem::action("Remove filter", Command::RemoveFilter),
        MenuItem::action("Find movie by title", Command::FindByTitle),
        MenuItem::action("Show filtered list", Command::ShowFiltered),
        MenuItem::action("Save to csv file", Command::SaveToCsv),
    ])
    .with_iteration_hook()
}

/// Everything a session operates on
pub struct AppState {
    store: TableStore,
    filters: ConstraintSet,
}

impl AppState {
    pub fn new(store: TableStore) -> Self {
        Self {
            store,
            filters: ConstraintSet::new(),
        }
    }

    /// Print the schema, then run the main menu until the user exits.
    ///
    /// Closing the input ends the session like choosing Exit.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.write_line(format!("Columns are: {:?}", self.store.columns()))?;

        match main_menu().run(console, self) {
            Err(err) if matches!(err.downcast_ref::<MenuError>(), Some(MenuError::InputClosed)) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn add_filter<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, field: FilterField) -> Result<()> {
        match field.kind() {
            FieldKind::Substring { prompt } => {
                let text = console.prompt(prompt)?;
                self.filters.add_substring(field, text);
            }
            FieldKind::Choice => self.add_exact_from_choice(console, field)?,
            FieldKind::Comparison => self.add_comparison(console, field)?,
        }
        Ok(())
    }

    /// Offer the distinct values of `field` and constrain to the one picked.
    ///
    /// Does nothing when the column has no values.
    fn add_exact_from_choice<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        field: FilterField,
    ) -> Result<()> {
        let values = self.store.distinct_values(field.column())?;
        let choices = Menu::one_shot(
            values
                .into_iter()
                .map(|value| MenuItem::action(value.to_string(), value))
                .collect(),
        );

        if let Some(value) = choices.select(console)? {
            self.filters.add_exact(field, value.clone());
        }
        Ok(())
    }

    fn add_comparison<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, field: FilterField) -> Result<()> {
        let operators = Menu::one_shot(
            ComparisonOp::ALL
                .into_iter()
                .map(|op| MenuItem::action(op.symbol(), op))
                .collect(),
        );
        let Some(op) = operators.select(console)?.copied() else {
            return Ok(());
        };

        let number = console.prompt("Enter number to compare")?;
        if let Err(err) = self.filters.add_comparison_from_input(field, op.symbol(), &number) {
            debug!("Comparison filter on {} not added: {}", field, err);
            console.write_line(err.to_string().red())?;
        }
        Ok(())
    }

    fn remove_filter<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        if self.filters.is_empty() {
            console.write_line("No filters applied".yellow())?;
            return Ok(());
        }

        let choices = Menu::one_shot(
            self.filters
                .fields()
                .into_iter()
                .map(|field| MenuItem::action(field.column(), field))
                .collect(),
        );
        if let Some(field) = choices.select(console)?.copied() {
            self.filters.remove(field);
        }
        Ok(())
    }

    fn find_by_title<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let text = console.prompt("Enter title of the movie")?;
        console.write_line("")?;

        let found = self.store.find_by_title(&text)?.select(&SEARCH_COLUMNS)?;
        render::print_table(console.output(), &found, &format!("No titles match '{text}'"))?;
        Ok(())
    }

    fn show_filtered<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let view = self.filters.apply(self.store.table())?;
        render::print_table(console.output(), &view, "No rows match the current filters")?;
        Ok(())
    }

    /// Write the filtered view to a path typed by the user.
    ///
    /// A failed write is reported and the session continues.
    fn save_to_csv<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let name = console.prompt("Enter address for csv file")?;
        let path = with_csv_extension(&name);
        let view = self.filters.apply(self.store.table())?;

        match write_csv(&view, &path) {
            Ok(()) => {
                let message = format!("✓ Saved {} rows to {}", view.len(), path.display());
                console.write_line(message.green())?;
            }
            Err(err) => {
                warn!("Saving to {} failed: {}", path.display(), err);
                console.write_line(format!("Could not save: {err}").red())?;
            }
        }
        Ok(())
    }
}

impl MenuHandler<Command> for AppState {
    type Error = anyhow::Error;

    fn on_each_iteration<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        render::print_filters(console.output(), &self.filters)?;
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, command: &Command) -> Result<()> {
        match *command {
            Command::AddFilter(field) => self.add_filter(console, field),
            Command::RemoveFilter => self.remove_filter(console),
            Command::FindByTitle => self.find_by_title(console),
            Command::ShowFiltered => self.show_filtered(console),
            Command::SaveToCsv => self.save_to_csv(console),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{parser, Value};
    use std::io::Cursor;

    const CATALOG: &str = "\
show_id,type,title,director,cast,country,rating,release_year
s1,Movie,Love Actually,Richard Curtis,Hugh Grant,United Kingdom,R,2003
s2,TV Show,Lovesick,,Johnny Flynn,United Kingdom,TV-MA,2018
s3,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,PG-13,2020
s4,Movie,The Social Dilemma,Jeff Orlowski,Tristan Harris,,PG-13,2010
";

    fn app() -> AppState {
        let table = parser::parse_reader(CATALOG.as_bytes(), "catalog.csv").unwrap();
        AppState::new(TableStore::from_table("catalog.csv", table).unwrap())
    }

    /// Run a full session over `input`, returning the app and everything printed
    fn session(input: &str) -> (AppState, String) {
        let mut app = app();
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        app.run(&mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (app, output)
    }

    #[test]
    fn test_exit_immediately() {
        let (app, out) = session("6\n");
        assert!(app.filters.is_empty());
        assert!(out.starts_with("Columns are: [\"show_id\", \"type\", \"title\""));
        assert!(out.contains("No filters applied"));
        assert!(out.contains("1 - Add filter\n2 - Remove filter\n3 - Find movie by title\n"));
        assert!(out.contains("6 - Exit"));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (app, _) = session("1\n2\nlove\n");
        assert_eq!(app.filters.len(), 1);
    }

    #[test]
    fn test_add_substring_filter_and_show() {
        let (app, out) = session("1\n2\nlove\n4\n6\n");

        assert!(out.contains("Enter title\n"));
        assert!(out.contains("title: contains \"love\""));
        assert!(out.contains("Love Actually"));
        assert!(out.contains("Lovesick"));
        assert!(!out.contains("The Social Dilemma"));

        let view = app.filters.apply(app.store.table()).unwrap();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_add_rating_from_choices() {
        // Ratings are offered in first-seen order: R, TV-MA, PG-13
        let (app, out) = session("1\n6\n3\n6\n");

        assert!(out.contains("1 - R\n2 - TV-MA\n3 - PG-13\n"));
        assert_eq!(
            app.filters.get(FilterField::Rating).map(|c| c.to_string()),
            Some("one of [PG-13]".to_string())
        );
    }

    #[test]
    fn test_add_release_year_comparison() {
        let (app, _) = session("1\n7\n1\n2015\n6\n");

        let view = app.filters.apply(app.store.table()).unwrap();
        let years: Vec<_> = view
            .rows()
            .iter()
            .map(|r| view.value(r, "release_year").cloned())
            .collect();
        assert_eq!(years, vec![Some(Value::Integer(2003)), Some(Value::Integer(2010))]);
    }

    #[test]
    fn test_bad_comparison_number_keeps_previous_filter() {
        let (app, out) = session("1\n7\n3\n2015\n1\n7\n1\nlater\n6\n");

        assert!(out.contains("Invalid number: 'later'"));
        assert_eq!(
            app.filters.get(FilterField::ReleaseYear).map(|c| c.to_string()),
            Some("> 2015".to_string())
        );
    }

    #[test]
    fn test_remove_without_filters() {
        let (app, out) = session("2\n6\n");
        assert!(app.filters.is_empty());
        // The message appears in the hook output twice and once for the removal
        assert_eq!(out.matches("No filters applied").count(), 3);
    }

    #[test]
    fn test_remove_filter() {
        let (app, out) = session("1\n5\nkingdom\n1\n2\n2015\n2\n2\n6\n");

        // Active fields are offered in declaration order
        assert!(out.contains("1 - title\n2 - country\n"));
        assert!(app.filters.get(FilterField::Country).is_none());
        assert!(app.filters.get(FilterField::Title).is_some());
    }

    #[test]
    fn test_find_by_title_shows_id_and_title() {
        let (_, out) = session("3\nDICK\n6\n");

        assert!(out.contains("Enter title of the movie\n"));
        assert!(out.contains("s3"));
        assert!(out.contains("Dick Johnson Is Dead"));
        assert!(!out.contains("Kirsten Johnson"));
    }

    #[test]
    fn test_find_by_title_without_match() {
        let (_, out) = session("3\nzzz\n6\n");
        assert!(out.contains("No titles match 'zzz'"));
    }

    #[test]
    fn test_save_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("uk_titles");
        let input = format!("1\n5\nkingdom\n5\n{}\n6\n", target.display());

        let (_, out) = session(&input);

        let written = dir.path().join("uk_titles.csv");
        assert!(out.contains("Saved 2 rows"));
        let contents = std::fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("show_id,type,title,director,cast,country,rating,release_year\n"));
        assert_eq!(contents.lines().count(), 3);
        assert!(!dir.path().join("uk_titles.csv.csv").exists());
    }

    #[test]
    fn test_save_keeps_existing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("all.csv");
        let input = format!("5\n{}\n6\n", target.display());

        session(&input);

        assert!(target.exists());
        assert!(!dir.path().join("all.csv.csv").exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out");
        let input = format!("5\n{}\n4\n6\n", target.display());

        let (_, out) = session(&input);

        assert!(out.contains("Could not save"));
        // The session carried on to show the list afterwards
        assert!(out.contains("Dick Johnson Is Dead"));
    }
}
