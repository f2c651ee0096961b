//! Commands reachable from the `:` palette

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Reload,
  New,
  Quit,
}

impl Command {
  pub const ALL: [Command; 3] = [Command::Reload, Command::New, Command::Quit];

  pub fn name(self) -> &'static str {
    match self {
      Command::Reload => "reload",
      Command::New => "new",
      Command::Quit => "quit",
    }
  }

  fn aliases(self) -> &'static [&'static str] {
    match self {
      Command::Reload => &["r", "refresh"],
      Command::New => &["n", "create", "cancel"],
      Command::Quit => &["q", "exit"],
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Command::Reload => "Reload all employees",
      Command::New => "Stop editing and start a new employee",
      Command::Quit => "Exit empreg",
    }
  }

  /// Exact, case-insensitive match on a name or alias
  pub fn parse(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    Self::ALL
      .into_iter()
      .find(|cmd| cmd.name() == input || cmd.aliases().contains(&input.as_str()))
  }

  /// Commands whose name starts with what was typed so far
  pub fn completions(prefix: &str) -> Vec<Command> {
    let prefix = prefix.trim().to_lowercase();
    Self::ALL
      .into_iter()
      .filter(|cmd| cmd.name().starts_with(&prefix))
      .collect()
  }
}
