mod command_palette;
mod employee_form;
mod input;
mod key_result;

pub use command_palette::{CommandPalette, PaletteEvent};
pub use employee_form::{EmployeeForm, FormEvent};
pub use key_result::KeyResult;
