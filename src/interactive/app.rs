use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Profile,
    Settings,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Profile,
            Screen::Profile => Screen::Settings,
            Screen::Settings => Screen::Home,
        }
    }
}

pub struct InteractiveApp {
    pub screen: Screen,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('h') | KeyCode::Char('1') => self.screen = Screen::Home,
            KeyCode::Char('p') | KeyCode::Char('2') => self.screen = Screen::Profile,
            KeyCode::Char('s') | KeyCode::Char('3') => self.screen = Screen::Settings,
            KeyCode::Tab => self.screen = self.screen.next(),
            _ => {}
        }
    }
}

impl Default for InteractiveApp {
    fn default() -> Self {
        Self::new()
    }
}
