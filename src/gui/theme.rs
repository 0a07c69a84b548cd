use eframe::egui::{
    self,
    Color32,
    RichText,
};

/// Color accents for the retrospective page: a tinted accordion header and
/// one accent per write-up category.
#[derive(Clone)]
pub struct Theme {
    header_light: Color32,
    header_dark: Color32,
    went_well: Color32,
    challenges: Color32,
    improvements: Color32,
    objectives: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::sky()
    }
}

impl Theme {
    pub fn sky() -> Self {
        Self {
            header_light: Color32::from_rgb(224, 242, 254),
            header_dark: Color32::from_rgb(30, 48, 66),
            went_well: Color32::from_rgb(59, 130, 246),
            challenges: Color32::from_rgb(245, 158, 11),
            improvements: Color32::from_rgb(34, 197, 94),
            objectives: Color32::from_rgb(168, 85, 247),
        }
    }

    pub fn header_fill(&self, ctx: &egui::Context) -> Color32 {
        if ctx.style().visuals.dark_mode {
            self.header_dark
        } else {
            self.header_light
        }
    }

    pub fn went_well(&self) -> Color32 {
        self.went_well
    }

    pub fn challenges(&self) -> Color32 {
        self.challenges
    }

    pub fn improvements(&self) -> Color32 {
        self.improvements
    }

    pub fn objectives(&self) -> Color32 {
        self.objectives
    }

    pub fn category_heading(&self, content: &str, color: Color32) -> RichText {
        RichText::new(content).size(15.0).strong().color(color)
    }
}
