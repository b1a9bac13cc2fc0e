//! Interactive numbered menus over a line-oriented console.
//!
//! - **console**: `Console`, prompt/answer I/O over any reader and writer
//! - **menu**: `Menu`, `MenuItem` and the `MenuHandler` dispatch trait
//! - **error**: `MenuError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use menu::{Console, Menu, MenuItem};
//!
//! let menu = Menu::looping(vec![
//!     MenuItem::action("Show filtered list", Command::ShowFiltered),
//!     MenuItem::submenu("Add filter", add_filter_items()),
//! ])
//! .with_iteration_hook();
//!
//! menu.run(&mut Console::stdio(), &mut app_state)?;
//! ```

pub mod console;
pub mod error;
pub mod menu;

pub use console::Console;
pub use error::{MenuError, Result};
pub use menu::{Menu, MenuHandler, MenuItem, MenuMode};
