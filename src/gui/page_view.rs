use std::collections::HashMap;

use eframe::egui;

use super::{
    accordion::{
        self,
        AccordionState,
    },
    editable_card::{
        EditableCard,
        SaveRequest,
    },
    theme::Theme,
};
use crate::{
    content::weeks::{
        WeekRetro,
        WEEK_SECTIONS,
    },
    core::{
        PageContentRecord,
        PageDocument,
    },
};

/// UI state for the retrospective page body. Lives for the mounted lifetime
/// of the view; nothing here is persisted.
pub struct PageViewState {
    pub accordion: AccordionState,
    pub intro_card: EditableCard,
    pub placeholder_card: EditableCard,
    week_notes: HashMap<&'static str, String>,
}

impl PageViewState {
    pub fn new() -> Self {
        Self {
            accordion: AccordionState::new(),
            intro_card: EditableCard::new("intro", "Introduction"),
            placeholder_card: EditableCard::new("placeholder", "Notes"),
            week_notes: HashMap::new(),
        }
    }
}

impl Default for PageViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// The page body: title, editable intro, the week-pair accordion, and the
/// editable closing notes. Returns a save request when either card commits.
pub fn page_body(
    ui: &mut egui::Ui,
    state: &mut PageViewState,
    record: &PageContentRecord,
    document: &PageDocument,
    theme: &Theme,
    saving: bool,
) -> Option<SaveRequest> {
    let mut request = None;

    ui.heading(egui::RichText::new(&record.title).size(24.0));
    ui.add_space(12.0);

    if let Some(r) = state.intro_card.show(ui, &document.intro.content, saving) {
        request = Some(r);
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    for week in WEEK_SECTIONS {
        accordion::section(ui, &mut state.accordion, week.id, week.title, theme, |ui| {
            match &week.retro {
                Some(retro) => week_retro(ui, retro, theme),
                None => {
                    let notes = state.week_notes.entry(week.id).or_default();
                    ui.add(
                        egui::TextEdit::multiline(notes)
                            .desired_width(f32::INFINITY)
                            .desired_rows(8)
                            .hint_text(format!("Enter retrospective notes for {}...", week.title)),
                    );
                }
            }
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    if let Some(r) = state.placeholder_card.show(ui, &document.placeholder, saving) {
        request = Some(r);
    }

    request
}

fn week_retro(ui: &mut egui::Ui, retro: &WeekRetro, theme: &Theme) {
    category(ui, "What Went Well", theme.went_well(), retro.went_well, theme);
    category(ui, "Challenges Encountered", theme.challenges(), retro.challenges, theme);
    category(ui, "Steps for Improvement", theme.improvements(), retro.improvements, theme);
    category(ui, "Next Sprint Objectives", theme.objectives(), retro.next_objectives, theme);
}

fn category(
    ui: &mut egui::Ui,
    heading: &str,
    color: egui::Color32,
    items: &[&str],
    theme: &Theme,
) {
    ui.label(theme.category_heading(heading, color));
    ui.add_space(2.0);

    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(*item);
        });
    }

    ui.add_space(8.0);
}
