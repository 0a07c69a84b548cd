use eframe::egui;

use super::theme::Theme;

/// Single-selection accordion: at most one section is open, tracked by id.
/// Ids are not validated against the rendered sections; toggling an id with
/// no matching panel just means nothing shows as expanded.
#[derive(Default)]
pub struct AccordionState {
    open_section: Option<String>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self { open_section: None }
    }

    pub fn open_section(&self) -> Option<&str> {
        self.open_section.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_section.as_deref() == Some(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open_section = None;
        } else {
            self.open_section = Some(id.to_string());
        }
    }
}

/// Clickable section header plus the body when the section is open.
pub fn section(
    ui: &mut egui::Ui,
    state: &mut AccordionState,
    id: &str,
    title: &str,
    theme: &Theme,
    add_body: impl FnOnce(&mut egui::Ui),
) {
    let open = state.is_open(id);
    let arrow = if open { "⏶" } else { "⏷" };

    let header = egui::Button::new(
        egui::RichText::new(format!("{}  {}", arrow, title)).size(15.0).strong(),
    )
    .fill(theme.header_fill(ui.ctx()))
    .min_size(egui::Vec2::new(ui.available_width(), 34.0));

    if ui.add(header).clicked() {
        state.toggle(id);
    }

    if open {
        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_body(ui);
        });
    }

    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = AccordionState::new();
        assert_eq!(state.open_section(), None);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut state = AccordionState::new();
        state.toggle("week1-2");
        assert!(state.is_open("week1-2"));

        state.toggle("week1-2");
        assert_eq!(state.open_section(), None);
    }

    #[test]
    fn toggling_another_section_closes_the_first() {
        let mut state = AccordionState::new();
        state.toggle("week1-2");
        state.toggle("week3-4");

        assert!(state.is_open("week3-4"));
        assert!(!state.is_open("week1-2"));
        assert_eq!(state.open_section(), Some("week3-4"));
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut state = AccordionState::new();
        state.toggle("week99-100");
        assert_eq!(state.open_section(), Some("week99-100"));
    }
}
