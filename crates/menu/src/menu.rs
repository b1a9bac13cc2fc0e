//! Numbered-choice menus.
//!
//! A menu cycles through three steps: render the items (numbered from 1),
//! read a choice until it's in range, then dispatch it. Looping menus add an
//! `Exit` entry and start over after each dispatch; one-shot menus stop after
//! the first one.
//!
//! Items carry a command value instead of a callback. Whoever runs the menu
//! supplies a [`MenuHandler`] that turns commands into effects, so the menu
//! itself never touches application state.

use crate::console::Console;
use crate::error::{MenuError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const WRONG_INDEX: &str = "Wrong index";

/// An entry in a menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem<C> {
    /// Runs `command` through the handler
    Action { label: String, command: C },
    /// Opens a one-shot menu over `items`
    Submenu {
        label: String,
        items: Vec<MenuItem<C>>,
    },
}

impl<C> MenuItem<C> {
    pub fn action(label: impl Into<String>, command: C) -> Self {
        MenuItem::Action {
            label: label.into(),
            command,
        }
    }

    pub fn submenu(label: impl Into<String>, items: Vec<MenuItem<C>>) -> Self {
        MenuItem::Submenu {
            label: label.into(),
            items,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuItem::Action { label, .. } | MenuItem::Submenu { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Re-display after each dispatch, with an explicit Exit entry
    Looping,
    /// Dispatch once, then return
    OneShot,
}

/// Executes the commands chosen from a menu
pub trait MenuHandler<C> {
    type Error: From<MenuError>;

    /// Runs before each rendering of a menu built with
    /// [`Menu::with_iteration_hook`]
    fn on_each_iteration<R: BufRead, W: Write>(
        &mut self,
        _console: &mut Console<R, W>,
    ) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        command: &C,
    ) -> std::result::Result<(), Self::Error>;
}

enum Choice<'a, C> {
    Exit,
    Item(&'a MenuItem<C>),
}

#[derive(Debug, Clone)]
pub struct Menu<C> {
    items: Vec<MenuItem<C>>,
    mode: MenuMode,
    iteration_hook: bool,
}

impl<C: Clone> Menu<C> {
    pub fn new(items: Vec<MenuItem<C>>, mode: MenuMode) -> Self {
        Self {
            items,
            mode,
            iteration_hook: false,
        }
    }

    pub fn looping(items: Vec<MenuItem<C>>) -> Self {
        Self::new(items, MenuMode::Looping)
    }

    pub fn one_shot(items: Vec<MenuItem<C>>) -> Self {
        Self::new(items, MenuMode::OneShot)
    }

    /// Call the handler's `on_each_iteration` before every rendering
    pub fn with_iteration_hook(mut self) -> Self {
        self.iteration_hook = true;
        self
    }

    /// Run the menu until Exit (looping) or the first dispatch (one-shot).
    ///
    /// A one-shot menu without items returns without reading input.
    pub fn run<R, W, H>(
        &self,
        console: &mut Console<R, W>,
        handler: &mut H,
    ) -> std::result::Result<(), H::Error>
    where
        R: BufRead,
        W: Write,
        H: MenuHandler<C>,
    {
        if self.items.is_empty() && self.mode == MenuMode::OneShot {
            return Ok(());
        }

        loop {
            if self.iteration_hook {
                handler.on_each_iteration(console)?;
            }
            render(&self.items, self.mode, console)?;

            match read_choice(&self.items, self.mode, console)? {
                Choice::Exit => return Ok(()),
                Choice::Item(MenuItem::Action { command, .. }) => {
                    handler.dispatch(console, command)?;
                }
                Choice::Item(MenuItem::Submenu { items, .. }) => {
                    Menu::one_shot(items.clone()).run(console, handler)?;
                }
            }
            console.write_line("")?;

            if self.mode == MenuMode::OneShot {
                return Ok(());
            }
        }
    }

    /// Show the items once and return the chosen command.
    ///
    /// Submenus are followed until an action is picked. Returns `None` when
    /// there is nothing to choose from, or when Exit is picked in a looping
    /// menu.
    pub fn select<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Option<&C>> {
        select_from(&self.items, self.mode, console)
    }
}

fn select_from<'a, C, R: BufRead, W: Write>(
    items: &'a [MenuItem<C>],
    mode: MenuMode,
    console: &mut Console<R, W>,
) -> Result<Option<&'a C>> {
    if items.is_empty() {
        return Ok(None);
    }

    render(items, mode, console)?;
    let selected = match read_choice(items, mode, console)? {
        Choice::Exit => None,
        Choice::Item(MenuItem::Action { command, .. }) => Some(command),
        Choice::Item(MenuItem::Submenu { items, .. }) => {
            return select_from(items, MenuMode::OneShot, console);
        }
    };
    console.write_line("")?;
    Ok(selected)
}

fn render<C, R: BufRead, W: Write>(
    items: &[MenuItem<C>],
    mode: MenuMode,
    console: &mut Console<R, W>,
) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        console.write_line(format!("{} - {}", i + 1, item.label()))?;
    }
    if mode == MenuMode::Looping {
        console.write_line(format!("{} - Exit", items.len() + 1))?;
    }
    Ok(())
}

/// Read until the input is a number in range
fn read_choice<'a, C, R: BufRead, W: Write>(
    items: &'a [MenuItem<C>],
    mode: MenuMode,
    console: &mut Console<R, W>,
) -> Result<Choice<'a, C>> {
    let exit_index = match mode {
        MenuMode::Looping => Some(items.len() + 1),
        MenuMode::OneShot => None,
    };
    let max = exit_index.unwrap_or(items.len());

    loop {
        let line = console.read_line()?;
        match line.trim().parse::<usize>() {
            Ok(choice) if Some(choice) == exit_index => return Ok(Choice::Exit),
            Ok(choice) if (1..=max).contains(&choice) => return Ok(Choice::Item(&items[choice - 1])),
            _ => {
                debug!("Rejected menu input {:?} (valid range 1..={})", line, max);
                console.write_line(WRONG_INDEX)?;
            }
        }
    }
}
