use crate::providers::ProfileLookup;
use crate::scoring::ProfileAura;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Main,
    Loading,
    Results,
}

pub struct App {
    pub input_mode: InputMode,
    pub current_screen: Screen,
    pub current_input: String,
    pub result: Option<ProfileAura>,
    pub error_message: Option<String>,
    pub loading_message: Option<String>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Editing,
            current_screen: Screen::Main,
            current_input: String::new(),
            result: None,
            error_message: None,
            loading_message: None,
            should_quit: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: &str) -> Self {
        Self {
            current_input: profile.trim().to_string(),
            ..Self::default()
        }
    }

    /// Parse the typed profile, surfacing bad input inline.
    pub fn take_lookup(&mut self) -> Option<ProfileLookup> {
        match ProfileLookup::parse(&self.current_input) {
            Ok(lookup) => {
                self.input_mode = InputMode::Normal;
                Some(lookup)
            }
            Err(e) => {
                self.set_error(&e.to_string());
                None
            }
        }
    }

    pub fn set_loading(&mut self, message: &str) {
        self.current_screen = Screen::Loading;
        self.loading_message = Some(message.to_string());
        self.error_message = None;
    }

    pub fn set_error(&mut self, error: &str) {
        self.error_message = Some(error.to_string());
        self.loading_message = None;
        self.current_screen = Screen::Main;
        self.input_mode = InputMode::Editing;
    }

    pub fn set_result(&mut self, result: ProfileAura) {
        self.result = Some(result);
        self.current_screen = Screen::Results;
        self.loading_message = None;
        self.error_message = None;
    }

    pub fn back_to_main(&mut self) {
        self.current_screen = Screen::Main;
        self.input_mode = InputMode::Editing;
        self.current_input.clear();
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileStats, AuraInputs};
    use crate::scoring::compute_aura;

    #[test]
    fn test_bad_input_stays_on_main() {
        let mut app = App::with_profile("not valid!");
        assert!(app.take_lookup().is_none());
        assert_eq!(app.current_screen, Screen::Main);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_result_flow() {
        let mut app = App::with_profile(" @dwr ");
        assert_eq!(app.take_lookup(), Some(ProfileLookup::Username("dwr".to_string())));

        app.set_loading("Fetching @dwr...");
        assert_eq!(app.current_screen, Screen::Loading);

        app.set_result(ProfileAura {
            stats: ProfileStats::new(3, "dwr"),
            aura: compute_aura(&AuraInputs::default()),
        });
        assert_eq!(app.current_screen, Screen::Results);
        assert!(app.loading_message.is_none());

        app.back_to_main();
        assert_eq!(app.current_screen, Screen::Main);
        assert!(app.current_input.is_empty());
        assert!(app.result.is_some());
    }
}
